//! Vertical placement of the three text lines.

pub mod solver;
