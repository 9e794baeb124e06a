use tracing::{debug, trace};

use crate::{
    config::QuadTreeConfig, find::Find, shapes::Rect, util::determine_quadrant,
    visit::QuadTreeVisitor, ConfigError, Point, Positioned,
};

/// A region quadtree indexing entities by their 2d position.
///
/// Each node holds a bucket of up to `max_points` entities. The first insert
/// into a full leaf splits it into four quadrants, and every later insert into
/// that node is routed to the quadrants. Entities already in the bucket stay
/// where they are, and nodes are never merged back.
///
/// Entities are matched by [`PartialEq`] for removal and relocation, so a type
/// comparing by id lets the tree track an entity across position changes.
#[derive(Debug, Clone)]
pub struct QuadTree<T> {
    root: Node<T>,
    config: QuadTreeConfig,
}

impl<T: Positioned + PartialEq + Clone> QuadTree<T> {
    /// Create a new empty quadtree with the default config
    pub fn new(boundary: Rect) -> Self {
        Self {
            root: Node::new(boundary),
            config: QuadTreeConfig::default(),
        }
    }

    /// Create a new empty quadtree
    ///
    /// ## Arguments
    /// - `boundary`: The region covered by the quadtree, fixed for its lifetime
    /// - `config`: Node capacity and query pruning settings
    pub fn with_config(boundary: Rect, config: QuadTreeConfig) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            debug!(%err, ?config, "rejected quadtree config");
            return Err(err);
        }
        if !boundary.is_valid() {
            debug!(?boundary, "rejected quadtree boundary");
            return Err(ConfigError::InvalidBoundary(boundary));
        }

        Ok(Self {
            root: Node::new(boundary),
            config,
        })
    }

    /// Insert an entity into the quadtree
    ///
    /// **Returns** `false` if the entity's position is outside the boundary, in
    /// which case the tree is left untouched
    pub fn insert(&mut self, item: &T) -> bool {
        let inserted = self.root.insert(item, self.config.max_points, 0);
        if !inserted {
            debug!(position = %item.position(), "entity not indexed");
        }
        inserted
    }

    /// Remove the first stored entity equal to `item`
    ///
    /// **Returns** the stored entity, or `None` if it was not in the tree
    pub fn remove(&mut self, item: &T) -> Option<T> {
        self.root.remove(item)
    }

    /// Update an entity whose position has changed since it was inserted.
    ///
    /// The stored copy is replaced in place when the node holding it still
    /// covers the new position. Otherwise it is taken out and reinserted
    /// through the nearest enclosing node, which may split a full leaf. If no
    /// quadrant of that node accepts it, it stays in the node's own bucket. An
    /// entity that is not in the tree is ignored.
    ///
    /// **Returns** `false` if the entity moved outside the tree's boundary; it
    /// is no longer indexed and the caller must grow the tree or drop it
    pub fn relocate(&mut self, item: &T) -> bool {
        match self.root.relocate(item, self.config.max_points, 0) {
            Relocation::Absent | Relocation::Settled => true,
            Relocation::Evicted => {
                debug!(position = %item.position(), "relocated entity dropped from the index");
                false
            }
        }
    }

    /// Lazily iterate over every entity whose position lies within `query`.
    ///
    /// Each call starts an independent traversal: own bucket first, then the
    /// quadrants in order, depth first.
    pub fn find(&self, query: &Rect) -> Find<'_, T> {
        Find::new(&self.root, Some(*query), self.config.pruning)
    }

    /// Queries the QuadTree for items within a specified rectangular area.
    /// This method populates a passed mutable vector with all found items.
    pub fn query(&self, query: &Rect, results: &mut Vec<T>) {
        results.extend(self.find(query).cloned());
    }

    /// Iterate over every indexed entity in traversal order
    pub fn iter(&self) -> Find<'_, T> {
        Find::new(&self.root, None, self.config.pruning)
    }

    /// Check if an entity equal to `item` is indexed
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|e| e == item)
    }

    /// Drop all entities and subdivisions, keeping the boundary and config
    pub fn clear(&mut self) {
        self.root = Node::new(self.root.boundary);
    }

    /// Walk the tree in pre-order, reporting every node and entity
    pub fn visit<V: QuadTreeVisitor<T>>(&self, visitor: &mut V) {
        self.root.visit(visitor, 0);
    }
}

impl<T> QuadTree<T> {
    /// Get the boundary rect of the quadtree
    pub fn boundary(&self) -> &Rect {
        &self.root.boundary
    }

    /// Return the point at the center of the boundary
    pub fn center(&self) -> Point {
        self.root.boundary.center()
    }

    /// Get the settings shared by every node
    pub fn config(&self) -> &QuadTreeConfig {
        &self.config
    }

    /// Get the bucket capacity of a leaf
    pub fn max_points(&self) -> usize {
        self.config.max_points
    }

    /// Number of indexed entities
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Check if no entity is indexed
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Depth of the deepest node, with the root at depth 0
    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}

/// Outcome of relocating an entity within a subtree
#[derive(Clone, Copy, Debug, PartialEq)]
enum Relocation {
    /// The entity is not stored in the subtree
    Absent,
    /// The entity is stored in the subtree again
    Settled,
    /// The entity was taken out and must be reinserted by an ancestor
    Evicted,
}

/// QuadTree node
///
/// A leaf has no children and at most `max_points` entities. An internal
/// node has exactly four children and keeps whatever its bucket held when it
/// was split.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) boundary: Rect,
    pub(crate) entities: Vec<T>,
    pub(crate) children: Option<Box<[Node<T>; 4]>>,
}

impl<T> Node<T> {
    fn new(boundary: Rect) -> Self {
        Self {
            boundary,
            entities: Vec::new(),
            children: None,
        }
    }

    pub(crate) fn children(&self) -> &[Node<T>] {
        match &self.children {
            Some(children) => &children[..],
            None => &[],
        }
    }

    fn len(&self) -> usize {
        self.entities.len() + self.children().iter().map(Node::len).sum::<usize>()
    }

    fn node_count(&self) -> usize {
        1 + self.children().iter().map(Node::node_count).sum::<usize>()
    }

    fn depth(&self) -> usize {
        self.children()
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Chop the boundary into four quarters and return the new subnodes
    fn subdivide(boundary: &Rect, depth: usize) -> Box<[Self; 4]> {
        trace!(?boundary, depth = depth + 1, "subdividing node");
        Box::new(boundary.quarter().map(Self::new))
    }
}

impl<T: Positioned + PartialEq + Clone> Node<T> {
    fn insert(&mut self, item: &T, capacity: usize, depth: usize) -> bool {
        if !self.boundary.contains(&item.position()) {
            return false;
        }

        if self.children.is_none() && self.entities.len() < capacity {
            self.entities.push(item.clone());
            return true;
        }

        let boundary = self.boundary;
        let children = self
            .children
            .get_or_insert_with(|| Self::subdivide(&boundary, depth));
        match determine_quadrant(&boundary, &item.position()) {
            Some(q) => children[q].insert(item, capacity, depth + 1),
            None => false,
        }
    }

    fn remove(&mut self, item: &T) -> Option<T> {
        if let Some(i) = self.entities.iter().position(|e| e == item) {
            return Some(self.entities.remove(i));
        }

        self.children
            .as_mut()?
            .iter_mut()
            .find_map(|c| c.remove(item))
    }

    fn relocate(&mut self, item: &T, capacity: usize, depth: usize) -> Relocation {
        let point = item.position();

        if let Some(i) = self.entities.iter().position(|e| e == item) {
            if self.boundary.contains(&point) {
                self.entities[i] = item.clone();
                return Relocation::Settled;
            }
            self.entities.remove(i);
            return Relocation::Evicted;
        }

        let outcome = match self.children.as_mut() {
            Some(children) => children
                .iter_mut()
                .map(|c| c.relocate(item, capacity, depth + 1))
                .find(|r| *r != Relocation::Absent)
                .unwrap_or(Relocation::Absent),
            None => Relocation::Absent,
        };

        match outcome {
            Relocation::Evicted if self.boundary.contains(&point) => {
                // a point on a float seam between quadrants fits no child
                if !self.insert(item, capacity, depth) {
                    self.entities.push(item.clone());
                }
                Relocation::Settled
            }
            outcome => outcome,
        }
    }

    fn visit<V: QuadTreeVisitor<T>>(&self, visitor: &mut V, depth: usize) {
        if self.children.is_some() {
            visitor.branch(depth, &self.boundary);
        } else {
            visitor.leaf(depth, &self.boundary);
        }
        for entity in &self.entities {
            visitor.entity(depth, entity);
        }
        for child in self.children() {
            child.visit(visitor, depth + 1);
        }
    }
}
