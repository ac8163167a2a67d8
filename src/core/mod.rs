//! Low-level value types.
//!
//! - [`coord`]: board squares (`Coord`, 1-based file/rank) and relative steps (`Offset`).

pub mod coord;
