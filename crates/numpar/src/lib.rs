//! numpar library: application logic for the pi approximation CLI.

pub mod app;
pub mod config;
pub mod errors;
