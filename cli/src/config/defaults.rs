//! Default values and limits for every option.

pub const DEFAULT_OUTPUT: &str = "output.png";
pub const DEFAULT_GAMMA: f64 = 1.0;
pub const DEFAULT_DPI: u32 = 300;
/// Physical size of the smaller output side, in millimetres.
pub const DEFAULT_WIDTH_MM: f64 = 1500.0;
pub const DEFAULT_MIN_GRAY: i32 = 0;
pub const DEFAULT_MAX_GRAY: i32 = 255;

pub const MAX_DPI: u32 = 9600;
pub const GRAY_LIMIT: i32 = 255;
