//! initials - render the initials picture (or a configured scene) to PNG.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use initials_raster::prelude::*;
use initials_raster::{debug, info};

/// Render a raster scene to a PNG file.
#[derive(Parser, Debug)]
#[command(name = "initials", version, about)]
struct Cli {
    /// YAML config file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log render steps to stderr
    #[arg(short, long)]
    debug: bool,

    /// Print the effective scene as YAML and exit
    #[arg(long)]
    print_scene: bool,
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => match Config::default_path() {
            Some(path) => Config::load_or_default(path)?,
            None => Config::default(),
        },
    };
    let mut config = config.apply_env();
    if let Some(output) = cli.output {
        config.output = output;
    }
    if cli.debug {
        config.debug = true;
    }

    if config.debug {
        debug::enable();
    }

    if cli.print_scene {
        print!("{}", config.scene_yaml()?);
        return Ok(());
    }

    let scene = config.scene();

    info!("main", "rendering {}x{} scene", scene.width, scene.height);
    render_to_file(&scene, &config.output, &PngEncoder)?;
    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("initials: {e}");
            ExitCode::FAILURE
        }
    }
}
