pub mod config;
pub mod ports;
