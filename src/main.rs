use std::path::PathBuf;

use anyhow::{ Context, Result };
use clap::Parser;

use ray_tracer_canvas::cannon;
use ray_tracer_canvas::config::CannonConfig;
use ray_tracer_canvas::ppm::PpmEncoder;
use ray_tracer_canvas::sink::FileSink;

/// Fires a virtual cannon and saves its trajectory as a PPM image.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Cli {
    /// JSON file with launch, environment and output settings.
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Directory the image is written to.
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// File name of the image, without any directory part.
    #[clap(short, long)]
    name: Option<String>,

    #[clap(long)]
    width: Option<usize>,

    #[clap(long)]
    height: Option<usize>,

    /// Increase logging verbosity (-v, -vv, -vvv).
    #[clap(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let mut config = match &cli.config {
        Some(path) => CannonConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => CannonConfig::default(),
    };

    if let Some(output) = cli.output {
        config.output_dir = output.to_string_lossy().into_owned();
    }
    if let Some(name) = cli.name {
        config.file_name = name;
    }
    if let Some(width) = cli.width {
        config.canvas_width = width;
    }
    if let Some(height) = cli.height {
        config.canvas_height = height;
    }

    log::debug!("Using configuration {:?}", config);

    let canvas = cannon::fire(&config).context("Failed to simulate projectile")?;

    let mut sink = FileSink::new(&config.output_dir);
    PpmEncoder::new()
        .write(&canvas, &mut sink, &config.file_name)
        .with_context(|| format!("Failed to save {}",
            sink.path_of(&config.file_name).display()))?;

    println!("Saved trajectory to {}.", sink.path_of(&config.file_name).display());

    Ok(())
}
