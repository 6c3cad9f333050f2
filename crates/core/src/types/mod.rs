//! Core types for Verdant Market.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod rating;

pub use id::*;
pub use price::{CurrencyCode, Price};
pub use rating::Rating;
