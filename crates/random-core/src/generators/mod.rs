//! Individual generators.
//!
//! Each generator is a free function over a [`UniformSource`](crate::UniformSource),
//! so the same formulas serve the thread-local default and injected test
//! sources alike.

pub mod address;
pub mod float;
pub mod pool;
pub mod range;
pub mod scalar;
pub mod string;
