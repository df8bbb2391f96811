use clap::{Parser, ValueEnum};

use std::path::PathBuf;

use rectangles::frame::{DEFAULT_RANDOM_COUNT, DEFAULT_RANDOM_RANGE};

#[derive(Debug, Parser)]
pub struct Args {
    /// Which frame to draw
    #[arg(value_enum, default_value_t = Variant::Single)]
    pub variant: Variant,
    /// Amount of random rectangles
    #[arg(short, long, default_value_t = DEFAULT_RANDOM_COUNT)]
    pub count: usize,
    /// Upper bound (exclusive) for random position and size in pixels
    #[arg(short, long, default_value_t = DEFAULT_RANDOM_RANGE)]
    pub range: u32,
    /// Seed for the random variant, system entropy when not set
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Path to JSON5 frame description, overrides the variant
    #[arg(short, long)]
    pub frame: Option<PathBuf>,
    /// Initial width of the window
    #[arg(long, default_value_t = 1280)]
    pub width: u32,
    /// Initial height of the window
    #[arg(long, default_value_t = 720)]
    pub height: u32,
    /// Log the draw commands instead of opening a window
    #[arg(long)]
    pub dry_run: bool,
    /// Log filter, same syntax as RUST_LOG
    #[arg(long)]
    pub log: Option<String>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum Variant {
    /// One fixed rectangle
    Single,
    /// Randomly placed and colored rectangles
    Random,
}
