mod demo;

use std::path::PathBuf;

use anyhow::Context as _;
use carousel_app::{logging, AppConfig, CarouselBuilder, CarouselConfig, FixedClock};
use carousel_core::scene::Camera;
use log::LevelFilter;

struct Args {
    config: Option<PathBuf>,
    windowed: bool,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args { config: None, windowed: false };
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--windowed" => args.windowed = true,
            flag if flag.starts_with("--") => anyhow::bail!("unknown flag {flag}"),
            path => args.config = Some(PathBuf::from(path)),
        }
    }
    Ok(args)
}

fn main() -> anyhow::Result<()> {
    logging::init(logging::level_from_env().unwrap_or(LevelFilter::Info))
        .context("failed to initialise logging")?;

    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => CarouselConfig::load(path)
            .with_context(|| format!("failed to load carousel config {}", path.display()))?,
        None => CarouselConfig::default(),
    };

    let app = AppConfig::default().with_title("Gallery Carousel");
    let mut camera = Camera::default();
    let mut session = CarouselBuilder::new(demo::gallery())
        .with_config(config)
        .with_viewport(app.width, app.height)
        .on_close(|| log::info!("close requested"))
        .on_item_select(|item| log::info!("selected {} {:?}", item.id, item.title))
        .mount(&mut camera)
        .context("failed to mount the carousel")?;
    log::info!("{}", session.overlay().counter);

    if args.windowed {
        let session = carousel_app::run_windowed(app, session)?;
        session.unmount();
    } else {
        let mut clock = FixedClock::new(1.0 / 60.0);
        demo::replay(&mut session, &mut clock, &demo::script(app.width));
        if let Some(item) = session.current_item() {
            log::info!("replay finished on {:?}", item.title);
        }
        session.unmount();
    }
    Ok(())
}
