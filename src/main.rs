//! skybox-cubemap CLI - equirectangular panorama to skybox faces.
//!
//! Converts a 360°×180° panorama (EXR, HDR, PNG, JPEG) into six cube faces, or
//! splits an already composed 4×3 cross image into its faces.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use tracing_subscriber::EnvFilter;

use skybox_cubemap::convert::{convert_file, split_cross_file};
use skybox_cubemap::loader::load_source;
use skybox_cubemap::{ConvertConfig, FaceFormat};

/// Equirectangular panorama to skybox cubemap converter.
#[derive(Parser)]
#[command(name = "skybox-cubemap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project an equirectangular panorama onto six cube faces.
    Convert {
        /// Input panorama (.exr, .hdr, .png, .jpg).
        input: PathBuf,

        /// Output directory for the face images.
        #[arg(short, long, default_value = "./skybox")]
        output: PathBuf,

        /// Edge length of each face in pixels (e.g., 512, 1024, 2048).
        #[arg(short, long, default_value = "1024")]
        size: u32,

        /// Face image format.
        #[arg(short, long, default_value = "png")]
        format: OutputFormat,

        /// Prefix for face file names (e.g. "sky_" gives sky_front.png).
        #[arg(long, default_value = "")]
        prefix: String,
    },

    /// Split a 4x3 cross-layout cubemap into six face images.
    Split {
        /// Input cross image; width/4 must equal height/3.
        input: PathBuf,

        /// Output directory for the face images.
        #[arg(short, long, default_value = "./skybox")]
        output: PathBuf,

        /// Face image format (png or jpeg).
        #[arg(short, long, default_value = "png")]
        format: OutputFormat,
    },

    /// Display dimensions and value range of a panorama.
    Info {
        /// Input panorama.
        input: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// 8-bit PNG (lossless).
    Png,
    /// 8-bit JPEG.
    Jpeg,
    /// 32-bit float OpenEXR (keeps HDR range).
    Exr,
}

impl From<OutputFormat> for FaceFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Png => FaceFormat::Png,
            OutputFormat::Jpeg => FaceFormat::Jpeg,
            OutputFormat::Exr => FaceFormat::Exr,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            size,
            format,
            prefix,
        } => {
            let config = ConvertConfig {
                face_size: size,
                format: format.into(),
                output_dir: output,
                prefix,
            };
            run_convert(input, config);
        }
        Commands::Split {
            input,
            output,
            format,
        } => {
            run_split(input, output, format.into());
        }
        Commands::Info { input } => {
            run_info(input);
        }
    }
}

fn run_convert(input: PathBuf, config: ConvertConfig) {
    println!("Skybox Cubemap Converter");
    println!("========================");
    println!("Input: {}", input.display());
    println!("Face size: {}x{}", config.face_size, config.face_size);
    println!("Output: {}", config.output_dir.display());

    let start = Instant::now();
    let paths = convert_file(&input, &config).unwrap_or_else(|e| {
        eprintln!("Error during conversion: {}", e);
        std::process::exit(1);
    });

    for path in &paths {
        println!("  Saved {}", path.display());
    }
    println!("Conversion completed in {:.2?}", start.elapsed());
}

fn run_split(input: PathBuf, output: PathBuf, format: FaceFormat) {
    println!("Splitting cross cubemap {}...", input.display());

    let paths = split_cross_file(&input, &output, format).unwrap_or_else(|e| {
        eprintln!("Error splitting cubemap: {}", e);
        std::process::exit(1);
    });

    for path in &paths {
        println!("  Saved {}", path.display());
    }
    println!("Cubemap splitting complete!");
}

fn run_info(input: PathBuf) {
    let source = load_source(&input).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", input.display(), e);
        std::process::exit(1);
    });

    let (min, max) = source.value_range();
    println!("Panorama Information");
    println!("====================");
    println!("File: {}", input.display());
    println!("Dimensions: {}x{}", source.width(), source.height());
    println!("Value range: [{:.4}, {:.4}]", min, max);
    if source.width() != source.height() * 2 {
        println!("Warning: width is not twice the height; not a full 360x180 panorama");
    }
    println!("Suggested face size: {}", (source.width() / 4).max(1));
}
