//! Concrete repository implementations.

pub mod token;
