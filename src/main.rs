use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use carousel::constants::{FPS, RENDER_HEIGHT, RENDER_WIDTH};
use carousel::{Carousel, CarouselConfig, CarouselError, SlideDeck};

mod texture_loader;
mod window;

use crate::texture_loader::load_slide_textures;
use crate::window::WindowHost;
use crate::window::draw::draw_hero;
use crate::window::input::InputPoller;
use crate::window::layout::HeroLayout;

#[derive(Parser, Debug)]
#[command(name = "hero-carousel")]
#[command(about = "Storefront hero carousel in a desktop window", long_about = None)]
struct Cli {
    /// Slide deck JSON file (defaults to the built-in storefront slides)
    #[arg(short, long)]
    slides: Option<PathBuf>,

    /// Build the deck from every image in this directory instead
    #[arg(long, conflicts_with = "slides")]
    images: Option<PathBuf>,

    /// Directory relative image paths are resolved against
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Autoplay period in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Minimum horizontal drag, in pixels, that counts as a swipe
    #[arg(long)]
    swipe_threshold: Option<f32>,

    /// Start with autoplay disabled
    #[arg(long, default_value_t = false)]
    no_autoplay: bool,

    #[arg(long, default_value_t = RENDER_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = RENDER_HEIGHT)]
    height: i32,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let (deck, deck_dir) = load_deck(&cli)?;
    let config = build_config(&cli, &deck).context("invalid carousel settings")?;
    let slides = deck.slide_set().context("slide deck has no slides")?;
    let assets = cli.assets.clone().unwrap_or(deck_dir);

    let (mut rl, thread) = raylib::init()
        .size(cli.width, cli.height)
        .title("Hero Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let textures = load_slide_textures(&mut rl, &thread, &slides, &assets);

    let host = WindowHost::new(rl.get_screen_width(), rl.get_screen_height());
    let mut carousel = Carousel::new(slides, host, &config).context("failed to mount carousel")?;
    let mut poller = InputPoller::default();

    info!(assets = %assets.display(), "hero carousel running");

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let layout = HeroLayout::new(
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
            carousel.slide_count(),
        );

        // Timer ticks first, then input, both in arrival order
        for handle in carousel.host_mut().advance(dt) {
            carousel.on_timer(handle);
        }
        for event in poller.poll(&rl, &layout) {
            if carousel.host().listens_to(event.channel()) {
                carousel.handle_input(event);
            }
        }

        if let Some(title) = carousel.host_mut().take_title() {
            rl.set_window_title(&thread, &title);
        }

        let playing = carousel.playback().is_enabled();
        let mut d = rl.begin_drawing(&thread);
        draw_hero(
            &mut d,
            &layout,
            carousel.slides(),
            &textures,
            carousel.host(),
            playing,
            poller.focus(),
        );
    }

    carousel.destroy();
    Ok(())
}

fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
    }
}

/// Picks the deck source and the directory its relative image paths live in.
fn load_deck(cli: &Cli) -> Result<(SlideDeck, PathBuf)> {
    if let Some(path) = &cli.slides {
        let deck = SlideDeck::load(path)
            .with_context(|| format!("cannot use slide deck {}", path.display()))?;
        let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        return Ok((deck, dir));
    }
    if let Some(dir) = &cli.images {
        let deck = SlideDeck::from_image_dir(dir)
            .with_context(|| format!("cannot build slides from {}", dir.display()))?;
        return Ok((deck, dir.clone()));
    }
    Ok((SlideDeck::default(), PathBuf::from(".")))
}

/// Defaults, then deck settings, then command-line flags.
fn build_config(cli: &Cli, deck: &SlideDeck) -> Result<CarouselConfig, CarouselError> {
    let mut config = CarouselConfig::default();
    deck.configure(&mut config)?;
    if let Some(ms) = cli.delay_ms {
        config.autoplay_delay = Duration::from_millis(ms);
    }
    if let Some(threshold) = cli.swipe_threshold {
        config.swipe_threshold = threshold;
    }
    if cli.no_autoplay {
        config.autoplay = false;
    }
    config.validate()?;
    Ok(config)
}
