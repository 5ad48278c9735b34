//! Board geometry.
//!
//! - `geometry`: `Point` and `Rect` with hit-testing
//! - `grid`: near-square grid layout of a round's cards inside a viewport

pub mod geometry;
pub mod grid;

pub use geometry::{Point, Rect};
pub use grid::{layout, BoardLayout};
