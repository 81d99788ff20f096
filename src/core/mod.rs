//! Configuration and core data types.

pub mod config;
pub mod models;
