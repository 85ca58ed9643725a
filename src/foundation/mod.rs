//! Constants, shared value types and the error taxonomy.

pub mod core;
pub mod error;
