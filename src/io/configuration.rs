//! Generation constants and default parameters

// Default values for configurable parameters
/// Side length of the pattern grid in cells
pub const DEFAULT_SIZE: usize = 5;
/// Side length in pixels of the block rendered for one cell
pub const DEFAULT_PIXEL_BLOCK: usize = 50;
/// Foreground blend weight used when none is given or the given one is NaN
pub const DEFAULT_COLOR_WEIGHT: f64 = 0.5;
/// Number of images generated per invocation
pub const DEFAULT_BATCHES: usize = 1;

// Pattern construction
/// Uniform draws at or above this value switch a cell on
pub const CELL_ON_THRESHOLD: f64 = 0.5;
/// Lowest channel value of a derived background tint
pub const BACKGROUND_TINT_FLOOR: u8 = 224;
/// Width of the channel range above the tint floor
pub const BACKGROUND_TINT_SPAN: u8 = 32;
/// Foreground draws attempted before falling back to black
pub const MAX_FOREGROUND_ATTEMPTS: usize = 16;

// Below this redmean distance two colors read as the same hue
/// Minimum distance between derived foreground and background
pub const COLOR_SIMILARITY_THRESHOLD: f64 = 152.96;

// Batch display
/// Images per row in a batch collage
pub const COLLAGE_PER_ROW: usize = 5;
/// Default width of the terminal preview in characters
pub const DEFAULT_PREVIEW_COLUMNS: usize = 40;

// Output settings
/// Directory under `~/.cache` holding saved images
pub const CACHE_DIR_NAME: &str = "pfp-generator";
/// Size in megabytes beyond which no further images are saved
pub const CACHE_LIMIT_MB: f64 = 5.0;
/// Extension of saved image files
pub const OUTPUT_EXTENSION: &str = "png";
/// Batch size at or above which a progress bar is shown while saving
pub const PROGRESS_MIN_BATCH: usize = 5;
