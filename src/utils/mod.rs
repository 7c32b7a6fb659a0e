//! Helper utilities shared across the crate.

pub mod converter;
