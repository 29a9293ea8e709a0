//! Payment order generator and benchmark utilities for payord.
//!
//! This crate provides deterministic generation of realistic payment orders
//! for benchmarking and property-based testing of `payord-core`.

pub mod generator;

pub use generator::{BatchSize, GeneratorConfig, generate_payment, generate_payments};
