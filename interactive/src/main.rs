use clap::Parser;

use std::convert::Infallible;

use rectangles::frame_loader::{FrameLoader, LoaderError};
use rectangles::random::RandomSource;
use rectangles::recording::RecordingBackend;
use rectangles::{DrawDriver, DriverError, Frame, Resolution};

mod app;
mod args;
mod backend;

use app::App;
use args::{Args, Variant};

fn main() {
    // clion needs help in trait annotation
    let args = <Args as Parser>::parse();

    init_logging(args.log.as_deref());

    let frame = match build_frame(&args) {
        Ok(frame) => frame,
        Err(e) => {
            log::error!("Could not read frame description: {e}");
            std::process::exit(-1);
        }
    };

    if args.dry_run {
        let backend = match dry_run(&frame, Resolution::new(args.width, args.height)) {
            Ok(backend) => backend,
            Err(e) => {
                log::error!("Dry run failed: {e}");
                std::process::exit(-1);
            }
        };

        for command in backend.commands() {
            log::info!("{command:?}");
        }

        log::info!(
            "{} uploads, {} draw calls",
            backend.upload_count(),
            backend.draw_count()
        );
        return;
    }

    match App::new(args.width, args.height, frame) {
        Ok(app) => app.run(),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(-1);
        }
    }
}

fn init_logging(filter: Option<&str>) {
    let mut builder = env_logger::Builder::new();

    if let Some(filter) = filter {
        builder.parse_filters(filter);
    } else if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }

    builder.init();
}

fn build_frame(args: &Args) -> Result<Frame, LoaderError> {
    if let Some(path) = &args.frame {
        log::info!("Reading frame from {:?}", path);
        return FrameLoader::load_from_path(path);
    }

    let frame = match args.variant {
        Variant::Single => Frame::default(),
        Variant::Random => {
            let mut source = match args.seed {
                Some(seed) => RandomSource::with_seed(seed),
                None => RandomSource::new(),
            };

            Frame::random(&mut source, args.count, args.range)
        }
    };

    Ok(frame)
}

fn dry_run(
    frame: &Frame,
    resolution: Resolution,
) -> Result<RecordingBackend, DriverError<Infallible>> {
    let mut driver = DrawDriver::new(RecordingBackend::new());

    driver.configure()?;
    driver.render(frame, resolution)?;

    Ok(driver.into_backend())
}
