//! Command-line interface for generating, previewing and saving profile pictures

use crate::color::Rgb;
use crate::generation::{GenerationConfig, Generated, generate_batch};
use crate::io::configuration::{
    CACHE_LIMIT_MB, COLLAGE_PER_ROW, DEFAULT_BATCHES, DEFAULT_COLOR_WEIGHT,
    DEFAULT_PIXEL_BLOCK, DEFAULT_PREVIEW_COLUMNS, DEFAULT_SIZE,
};
use crate::io::error::Result;
use crate::io::export::{SaveTarget, batch_name, default_cache_dir, save_images, save_png};
use crate::io::progress::ProgressManager;
use crate::pattern::ColorWeight;
use crate::render::{AsciiStyle, adjust, collage, to_ascii};
use clap::Parser;
use image::RgbImage;
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pfpgen")]
#[command(
    author,
    version,
    about = "Generate symmetric profile pictures from text"
)]
/// Command-line arguments for the profile picture generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Text to generate the profile picture from; random when omitted
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Side length of the pattern in cells
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    pub size: usize,

    /// Side length in pixels of one cell
    #[arg(short, long, default_value_t = DEFAULT_PIXEL_BLOCK)]
    pub pixel_block: usize,

    /// Background color (name, #hex or r,g,b); derived from the text when omitted
    #[arg(short, long)]
    pub background: Option<Rgb>,

    /// Foreground color (name, #hex or r,g,b); derived from the text when omitted
    #[arg(short, long)]
    pub color: Option<Rgb>,

    /// Foreground weight of on cells, clamped to 0..=1
    #[arg(
        short = 'w',
        long,
        default_value_t = DEFAULT_COLOR_WEIGHT,
        allow_negative_numbers = true
    )]
    pub color_weight: f64,

    /// Number of images to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_BATCHES)]
    pub batches: usize,

    /// Save the images as PNG files
    #[arg(long)]
    pub save: bool,

    /// Directory to save into instead of ~/.cache/pfp-generator
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Write all generated images side by side into one PNG
    #[arg(long, value_name = "PATH")]
    pub collage: Option<PathBuf>,

    /// Print a character preview (simple, bars or complex)
    #[arg(long, value_name = "STYLE")]
    pub preview: Option<AsciiStyle>,

    /// Percentage contrast change applied before the preview
    #[arg(long, allow_negative_numbers = true)]
    pub contrast: Option<f32>,

    /// Brightness offset added to every channel before the preview
    #[arg(long, allow_negative_numbers = true)]
    pub brightness: Option<i32>,

    /// Width of the preview in characters
    #[arg(long, default_value_t = DEFAULT_PREVIEW_COLUMNS)]
    pub columns: usize,

    /// Print the preview without color escapes
    #[arg(long)]
    pub no_color: bool,

    /// Suppress informational output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Generation parameters described by the flags
    pub fn config(&self) -> GenerationConfig {
        GenerationConfig {
            size: self.size,
            pixel_block: self.pixel_block,
            background: self.background,
            foreground: self.color,
            color_weight: ColorWeight::new(self.color_weight),
            batches: self.batches,
        }
    }

    /// Log filter used when `RUST_LOG` is not set
    pub const fn log_filter(&self) -> &'static str {
        if self.quiet { "error" } else { "warn" }
    }

    /// Save target chosen by `--output` or the default cache directory
    ///
    /// # Errors
    ///
    /// Returns an error if no output is given and no home directory is known
    pub fn save_target(&self) -> Result<SaveTarget> {
        let root = match &self.output {
            Some(dir) => dir.clone(),
            None => default_cache_dir()?,
        };
        Ok(SaveTarget::new(root, CACHE_LIMIT_MB))
    }
}

/// What a run produced
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Number of images generated
    pub generated: usize,
    /// Files written by `--save`
    pub saved: Vec<PathBuf>,
    /// Collage file, if requested
    pub collage: Option<PathBuf>,
}

/// Executes one invocation: generate, then preview, collage and save as requested
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the invocation
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A size, pixel block, batch or column count is zero
    /// - The collage or a saved image cannot be written
    /// - The save directory is over its size limit
    pub fn run(&self) -> Result<RunSummary> {
        let text = self.cli.text.as_deref();
        let generated = generate_batch(text, &self.cli.config())?;
        let name = generated
            .first()
            .map(|first| batch_name(text, &first.seed))
            .unwrap_or_default();

        if !self.cli.quiet {
            Self::report(&name, &generated);
        }

        let images: Vec<RgbImage> = generated.into_iter().map(|g| g.image).collect();

        if let Some(style) = self.cli.preview {
            self.print_preview(&images, style)?;
        }

        let collage_path = match &self.cli.collage {
            Some(path) => {
                save_png(&collage(&images, COLLAGE_PER_ROW)?, path)?;
                info!("Wrote collage to {}", path.display());
                Some(path.clone())
            }
            None => None,
        };

        let saved = if self.cli.save {
            let target = self.cli.save_target()?;
            let mut progress = (!self.cli.quiet).then(ProgressManager::new);
            save_images(&images, &name, &target, progress.as_mut())?
        } else {
            Vec::new()
        };

        Ok(RunSummary {
            generated: images.len(),
            saved,
            collage: collage_path,
        })
    }

    // Allow print for user feedback on the generated colors
    #[allow(clippy::print_stdout)]
    fn report(name: &str, generated: &[Generated]) {
        for (index, item) in generated.iter().enumerate() {
            println!(
                "{name} #{}: background {} foreground {} on {}",
                index + 1,
                item.colors.background,
                item.colors.foreground,
                item.colors.on_color
            );
        }
    }

    // Allow print for the terminal preview itself
    #[allow(clippy::print_stdout)]
    fn print_preview(&self, images: &[RgbImage], style: AsciiStyle) -> Result<()> {
        for image in images {
            let adjusted = adjust(image, self.cli.brightness, self.cli.contrast);
            let art = to_ascii(&adjusted, self.cli.columns, style, !self.cli.no_color)?;
            println!("{art}\n");
        }
        Ok(())
    }
}
