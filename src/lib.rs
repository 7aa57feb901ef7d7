//! Core library functions for the small-world network generator

pub mod config;
pub mod error;
pub mod generator;
pub mod graph;
pub mod metrics;
pub mod report;
pub mod sweep;

pub use anyhow::{Result, anyhow};
