//! **mazegraph-core**: geometry shared across the *mazegraph* crates.
//!
//! Provides [`Point`] (the vertex identity of maze graphs), [`Range`] (a
//! maze's extent) and [`Direction`] (the four cardinal moves between cells).

pub mod direction;
pub mod geom;

pub use direction::Direction;
pub use geom::{Point, Range, RangeIter};
