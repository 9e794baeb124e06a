use std::slice;

use crate::{config::Pruning, quadtree::Node, shapes::Rect, Positioned};

/// Lazy depth-first traversal returned by [`QuadTree::find`](crate::QuadTree::find)
/// and [`QuadTree::iter`](crate::QuadTree::iter).
///
/// Yields a node's own entities in insertion order before descending into its
/// quadrants. Nodes whose boundary fails the tree's [`Pruning`] test against
/// the query are skipped along with their whole subtree.
#[derive(Debug)]
pub struct Find<'a, T> {
    query: Option<Rect>,
    pruning: Pruning,
    stack: Vec<&'a Node<T>>,
    bucket: slice::Iter<'a, T>,
}

impl<'a, T> Find<'a, T> {
    pub(crate) fn new(root: &'a Node<T>, query: Option<Rect>, pruning: Pruning) -> Self {
        let mut find = Self {
            query,
            pruning,
            stack: Vec::new(),
            bucket: <&[T]>::default().iter(),
        };
        find.push(root);
        find
    }

    fn push(&mut self, node: &'a Node<T>) {
        let admitted = match &self.query {
            Some(query) => self.pruning.admits(&node.boundary, query),
            None => true,
        };
        if admitted {
            self.stack.push(node);
        }
    }
}

impl<'a, T: Positioned> Iterator for Find<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            match &self.query {
                Some(query) => {
                    if let Some(found) = self.bucket.find(|e| query.contains(&e.position())) {
                        return Some(found);
                    }
                }
                None => {
                    if let Some(found) = self.bucket.next() {
                        return Some(found);
                    }
                }
            }

            let node = self.stack.pop()?;
            // reversed so the first quadrant is popped first
            for child in node.children().iter().rev() {
                self.push(child);
            }
            self.bucket = node.entities.iter();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        util::tests::{make_rect, TestEntity},
        QuadTree, QuadTreeConfig,
    };

    #[test]
    fn find_empty_tree() {
        let qt = QuadTree::<TestEntity>::new(make_rect(0.0, 0.0, 100.0, 100.0));
        assert_eq!(
            qt.find(&make_rect(10.0, 10.0, 40.0, 40.0)).count(),
            0,
            "Should be empty for an empty tree"
        );
        assert_eq!(qt.iter().count(), 0);
    }

    #[test]
    fn find_query_outside_boundary() {
        let mut qt = QuadTree::new(make_rect(0.0, 0.0, 100.0, 100.0));
        qt.insert(&TestEntity::new(1, 50.0, 50.0));
        assert_eq!(
            qt.find(&make_rect(200.0, 200.0, 100.0, 100.0)).count(),
            0,
            "Should not find any items outside the range"
        );
    }

    #[test]
    fn find_filters_each_bucket() {
        let config = QuadTreeConfig::default().with_max_points(2);
        let mut qt = QuadTree::with_config(make_rect(0.0, 0.0, 100.0, 100.0), config).unwrap();
        let items = [
            TestEntity::new(1, 25.0, 25.0),
            TestEntity::new(2, 75.0, 75.0),
            TestEntity::new(3, 70.0, 70.0),
            TestEntity::new(4, 5.0, 95.0),
        ];
        for item in &items {
            assert!(qt.insert(item));
        }

        let ids: Vec<_> = qt
            .find(&make_rect(20.0, 20.0, 60.0, 60.0))
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, [1, 2, 3], "Should find the three items in the range");

        let ids: Vec<_> = qt
            .find(&make_rect(70.0, 70.0, 10.0, 10.0))
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, [2, 3]);

        let ids: Vec<_> = qt
            .find(&make_rect(0.0, 90.0, 10.0, 10.0))
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, [4], "Should find the item routed to a child");
    }

    #[test]
    fn find_uses_half_open_query() {
        let mut qt = QuadTree::new(make_rect(0.0, 0.0, 100.0, 100.0));
        qt.insert(&TestEntity::new(1, 50.0, 50.0));
        assert_eq!(qt.find(&make_rect(40.0, 40.0, 10.0, 10.0)).count(), 0);
        assert_eq!(qt.find(&make_rect(50.0, 50.0, 10.0, 10.0)).count(), 1);
        assert_eq!(
            qt.find(&make_rect(50.0, 50.0, 0.0, 0.0)).count(),
            0,
            "An empty query matches nothing"
        );
    }
}
