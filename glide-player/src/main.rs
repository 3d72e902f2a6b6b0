use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;

use glide_player::app;
use glide_player::cli::Args;
use glide_player::settings::Settings;
use glide_player::slides::{self, Slide};
use glide_player::snapshot;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("glide_player", LevelFilter::Debug)
        .filter_module("glide_core", LevelFilter::Debug)
        .init();
}

fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let args = Args::parse();
    let settings = Settings::resolve(&args)?;

    if let Some(output) = args.snapshot.as_deref() {
        return snapshot::render(
            settings.carousel,
            &args.images,
            output,
            args.width,
            args.slide,
        );
    }

    let slides = slides::load_directory(&args.images, Slide::open)?;
    if slides.is_empty() {
        log::warn!("no images found in {}", args.images.display());
    }

    app::run(settings, slides)
}
