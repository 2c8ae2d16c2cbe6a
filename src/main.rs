//! VML Shapes CLI
//!
//! Usage:
//!   vml-shapes [OPTIONS] [FILE]
//!
//! Options:
//!   -c, --config <FILE>     Configuration file (TOML format)
//!   -i, --image <ID=PATH>   Picture for an image reference (repeatable)
//!   --max-depth <N>         Drop shapes nested deeper than N
//!   --compact               Write SVG without indentation
//!   -v, --verbose           Log skipped elements to stderr
//!   -h, --help              Print help

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vml_shapes::{render_with_config, Config, EmbeddedImage, ImageMap};

#[derive(Parser)]
#[command(name = "vml-shapes")]
#[command(about = "Convert VML drawings from Office XML into SVG")]
struct Cli {
    /// Input XML file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Picture for an image reference, e.g. rId5=media/image1.png
    #[arg(short, long = "image", value_name = "ID=PATH")]
    images: Vec<String>,

    /// Drop shapes nested deeper than this below a drawing root
    #[arg(long)]
    max_depth: Option<usize>,

    /// Write SVG without indentation
    #[arg(long)]
    compact: bool,

    /// Log skipped elements and other details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    // Load configuration
    let file_config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    let mut config = file_config.to_convert_config();
    if cli.max_depth.is_some() {
        config.max_depth = cli.max_depth;
    }
    if cli.compact {
        config.svg.pretty_print = false;
    }

    // Load pictures
    let mut images = ImageMap::new();
    for arg in &cli.images {
        match load_image(arg) {
            Ok((id, image)) => images.insert(id, image),
            Err(message) => {
                eprintln!("Error loading image '{}': {}", arg, message);
                std::process::exit(1);
            }
        }
    }
    config = config.with_images(images);

    // Read input
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    match render_with_config(&source, &config) {
        Ok(svg) => {
            println!("{}", svg);
        }
        Err(e) => {
            eprint!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
    }
}

/// Parse an `ID=PATH` argument and read the picture it names
fn load_image(arg: &str) -> Result<(String, EmbeddedImage), String> {
    let (id, path) = arg
        .split_once('=')
        .filter(|(id, path)| !id.is_empty() && !path.is_empty())
        .ok_or_else(|| "expected ID=PATH".to_string())?;
    let image = EmbeddedImage::from_file(Path::new(path)).map_err(|e| e.to_string())?;
    Ok((id.to_string(), image))
}
