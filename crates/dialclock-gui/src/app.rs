mod state;
mod update;
mod view;

pub use state::{App, Message, TOP_BAR_HEIGHT};

#[cfg(test)]
pub(crate) fn test_logger() -> flexi_logger::LoggerHandle {
    use std::sync::OnceLock;

    use flexi_logger::LoggerHandle;

    static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();
    LOGGER
        .get_or_init(|| {
            flexi_logger::Logger::try_with_env_or_str("off")
                .expect("failed to configure test logger")
                .start()
                .expect("failed to start test logger")
        })
        .clone()
}
