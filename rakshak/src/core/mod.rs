//! Core types for the rakshak library.
//!
//! ## Coordinate System
//!
//! Cells are addressed by `(row, col)`, with row 0 being the first line of the
//! maze text. Headings use the screen convention:
//!
//! ```text
//!              North (-1, 0)
//!                   ↑
//!   West (0, -1) ←  R  → East (0, +1)
//!                   ↓
//!              South (+1, 0)
//! ```
//!
//! Turning is always clockwise in 90° steps: North → East → South → West.

mod cell;
mod heading;
mod point;

pub use cell::CellType;
pub use heading::Heading;
pub use point::GridCoord;
