//! Configuration, data model and platform seams

pub mod config;
pub mod models;
pub mod ports;
