//! A region quadtree for indexing positioned entities that move over time.
//!
//! The tree splits its boundary into four quadrants once a node's bucket fills
//! up, answers axis-aligned range queries lazily through [`QuadTree::find`],
//! and keeps itself consistent as entities are inserted, removed and relocated
//! tick after tick.
//!
//! ```
//! use region_quadtree::{Point, QuadTree, Rect};
//!
//! let mut tree = QuadTree::new(Rect::new(Point::new(0.0, 0.0), Point::new(100.0, 100.0)));
//! assert!(tree.insert(&Point::new(10.0, 10.0)));
//! assert!(tree.insert(&Point::new(90.0, 90.0)));
//!
//! let query = Rect::new(Point::new(0.0, 0.0), Point::new(50.0, 50.0));
//! let found: Vec<_> = tree.find(&query).collect();
//! assert_eq!(found, [&Point::new(10.0, 10.0)]);
//! ```

mod config;
mod find;
mod point;
mod quadtree;
mod shapes;
mod util;
mod visit;

use nalgebra::Point2;

pub use config::{ConfigError, Pruning, QuadTreeConfig, DEFAULT_MAX_POINTS};
pub use find::Find;
pub use point::Point;
pub use quadtree::QuadTree;
pub use shapes::Rect;
pub use visit::QuadTreeVisitor;

pub(crate) type P2 = Point2<f64>;

/// Trait for anything the [`QuadTree`] can index by its 2d position
pub trait Positioned {
    /// Get the current position
    fn position(&self) -> Point;
}

impl Positioned for Point {
    fn position(&self) -> Point {
        *self
    }
}

impl<T: Positioned + ?Sized> Positioned for &T {
    fn position(&self) -> Point {
        (**self).position()
    }
}
