//! Move rules on a [`Board`](crate::board::Board).
//!
//! - [`movegen`]: per-piece destinations, attacks and defenses (pure, rebuilt each pass)
//! - [`attacks`]: attack/defense propagation and check queries
//! - [`check`]: check-safety by simulation on a cloned board
//! - [`castling`]: castling preconditions and execution
//! - [`apply`]: move submission and commit

pub mod apply;
pub mod attacks;
pub mod castling;
pub mod check;
pub mod movegen;
