//! # Bridge Types Crate
//!
//! Domain entities shared across the bridge crates.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: the header, signature, and identity types
//!   used by every bridge crate are defined here.
//! - **Immutability**: an admitted [`HeaderNode`] never changes; all state
//!   evolution happens in the structures that index these values.

pub mod entities;

pub use entities::*;
