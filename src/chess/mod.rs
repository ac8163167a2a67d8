//! Chess pieces, their movement tables and the standard starting layout.

pub mod layout;
pub mod movement;
pub mod piece;
