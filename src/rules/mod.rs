//! Game rules for the sliding puzzle
//!
//! A piece may slide only into the free cell, and only when the free
//! cell sits at one of the piece kind's fixed relative offsets.

pub mod movement;

// Re-exports for convenient access
pub use movement::{is_legal_move, offsets};
