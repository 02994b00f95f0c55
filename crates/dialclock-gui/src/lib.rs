use flexi_logger::LogSpecification;
use log::warn;

mod views;

pub mod app;

pub use app::{App, Message};

/// Parse a log level or spec string, honoring `RUST_LOG` when it is set.
pub fn get_log_spec(log_level: &str) -> LogSpecification {
    match std::env::var("RUST_LOG") {
        Ok(spec) => parse_log_spec(&spec),
        Err(_) => parse_log_spec(log_level),
    }
}

fn parse_log_spec(spec: &str) -> LogSpecification {
    LogSpecification::parse(spec).unwrap_or_else(|err| {
        warn!("Failed to parse log level {spec:?}: {err}");
        LogSpecification::info()
    })
}
