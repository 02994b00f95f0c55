use std::{backtrace::Backtrace, panic, path::PathBuf, sync::Arc};

use clap::Parser;
use dialclock_core::{
    config::get_config,
    services::tick_sound::{TickSample, TickSoundService},
};
use dialclock_gui::{App, get_log_spec};
use dialclock_proto::ports::sound::SoundPort;
use flexi_logger::{Age, Cleanup, Criterion, FileSpec, LogSpecBuilder, Logger, Naming};
use iced::Size;
use log::{debug, error, info};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, value_parser = clap::value_parser!(PathBuf))]
    config_path: Option<PathBuf>,
}

fn main() -> iced::Result {
    let args = Args::parse();

    let logger = Logger::with(
        LogSpecBuilder::new()
            .default(log::LevelFilter::Info)
            .build(),
    )
    .log_to_file(FileSpec::default().directory("/tmp/dialclock"))
    .duplicate_to_stdout(flexi_logger::Duplicate::All)
    .rotate(
        Criterion::Age(Age::Day),
        Naming::Timestamps,
        Cleanup::KeepLogFiles(7),
    );
    let logger = logger.start().unwrap_or_else(|err| {
        eprintln!("Failed to start logger: {err}");

        std::process::exit(1);
    });
    panic::set_hook(Box::new(|info| {
        let b = Backtrace::capture();
        error!("Panic: {info} \n {b}");
    }));
    debug!("args: {args:?}");

    let (config, config_path) = get_config(args.config_path).unwrap_or_else(|err| {
        error!("Failed to read config: {err}");

        std::process::exit(1);
    });
    info!("Using config {config_path:?}");

    logger.set_new_spec(get_log_spec(&config.log_level));

    let sample = TickSample::load(config.sound.path.as_deref()).unwrap_or_else(|err| {
        error!("Failed to load tick sample: {err}");

        std::process::exit(1);
    });
    let sound: Arc<dyn SoundPort> = match TickSoundService::spawn(sample, config.sound.volume) {
        Ok(service) => Arc::new(service),
        Err(err) => {
            error!("Failed to start audio worker: {err}");

            std::process::exit(1);
        }
    };

    let window_size = Size::new(config.window.width, config.window.height);

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size(window_size)
        .run_with(App::new((config, sound)))
}
