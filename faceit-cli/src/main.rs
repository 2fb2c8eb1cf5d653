//! `FaceIt` CLI — render a stylized face and write it as SVG.

use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use faceit_core::{FaceConfig, render};
use faceit_graphics::types::{Color, LineCap};
use faceit_svg::{RenderOptions, render_with_options};

#[derive(Parser)]
#[command(version, about = "FaceIt \u{2014} render a stylized face to SVG")]
struct Cli {
    /// JSON file supplying defaults for the options below
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Left edge of the bounding rect
    #[arg(long, allow_negative_numbers = true)]
    x: Option<f64>,

    /// Top edge of the bounding rect
    #[arg(long, allow_negative_numbers = true)]
    y: Option<f64>,

    /// Width of the bounding rect [default: 200]
    #[arg(long)]
    width: Option<f64>,

    /// Height of the bounding rect [default: 200]
    #[arg(long)]
    height: Option<f64>,

    /// Skull radius as a fraction of half the shorter side [default: 0.9]
    #[arg(long)]
    scale: Option<f64>,

    /// Draw the eyes closed
    #[arg(long, conflicts_with = "eyes_open")]
    eyes_closed: bool,

    /// Draw the eyes open (overrides a config file)
    #[arg(long)]
    eyes_open: bool,

    /// Mouth curvature, -1 (frown) to 1 (smile) [default: 0.5]
    #[arg(long, allow_negative_numbers = true)]
    curvature: Option<f64>,

    /// Stroke width of the eyes and mouth [default: 5]
    #[arg(long, allow_negative_numbers = true)]
    line_width: Option<f64>,

    /// Stroke color: a name or #rgb / #rrggbb / #rrggbbaa [default: blue]
    #[arg(long)]
    color: Option<String>,

    /// Stroke line cap: "butt", "round" or "square"
    #[arg(long, default_value = "butt")]
    line_cap: LineCap,

    /// Fill the view with this color first
    #[arg(long, value_name = "COLOR")]
    background: Option<Color>,

    /// Decimal places in SVG coordinates
    #[arg(long, default_value_t = 4)]
    precision: usize,

    /// Output file, or "-" for stdout
    #[arg(short, long, default_value = "face.svg")]
    output: String,
}

impl Cli {
    /// Settings given on the command line, layered over the config file.
    fn overrides(&self) -> FaceConfig {
        let eyes_open = if self.eyes_closed {
            Some(false)
        } else if self.eyes_open {
            Some(true)
        } else {
            None
        };
        FaceConfig {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            scale: self.scale,
            eyes_open,
            mouth_curvature: self.curvature,
            line_width: self.line_width,
            color: self.color.clone(),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let base = match &cli.config {
        Some(path) => FaceConfig::load(path)?,
        None => FaceConfig::default(),
    };
    let config = base.merge(cli.overrides());
    let params = config.parameters()?;
    let bounds = config.bounds();
    log::debug!("rendering {params:?} into {bounds:?}");

    let set = render(bounds, &params);
    let opts = RenderOptions {
        precision: cli.precision,
        line_cap: cli.line_cap,
        background: cli.background,
        ..RenderOptions::default()
    };
    let svg = render_with_options(&set, bounds, &opts).to_string();

    write_svg(&cli.output, &svg)
}

fn write_svg(output: &str, content: &str) -> Result<(), Box<dyn Error>> {
    if output == "-" {
        let mut stdout = io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.write_all(b"\n")?;
        return Ok(());
    }

    let path = Path::new(output);
    fs::write(path, content).map_err(|e| format!("cannot write {}: {e}", path.display()))?;
    eprintln!("Wrote {}", path.display());
    Ok(())
}
