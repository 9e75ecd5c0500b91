//! Stockroom demonstration binary: configuration and the demo routine.

pub mod config;
pub mod demo;

pub use config::Config;
