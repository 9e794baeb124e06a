use crate::shapes::Rect;

/// Receives the structure of a [`QuadTree`](crate::QuadTree) during
/// [`QuadTree::visit`](crate::QuadTree::visit), e.g. to draw node boundaries
/// over a debug view. Nodes are reported in pre-order, each followed by the
/// entities in its own bucket.
pub trait QuadTreeVisitor<T> {
    /// A subdivided node
    fn branch(&mut self, _depth: usize, _boundary: &Rect) {}
    /// A node without children
    fn leaf(&mut self, _depth: usize, _boundary: &Rect) {}
    /// An entity stored in the bucket of the node last reported at `depth`
    fn entity(&mut self, _depth: usize, _entity: &T) {}
}
