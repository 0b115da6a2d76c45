//! Quote source abstractions and implementations.
//!
//! This module contains:
//! - The `QuoteSource` trait that all upstream clients implement
//! - The Yahoo Finance implementation
//!
//! The engine only talks to `dyn QuoteSource`; it never knows which
//! provider is behind it.

mod traits;

pub mod yahoo;

pub use traits::QuoteSource;
