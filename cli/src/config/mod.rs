//! Run configuration: defaults, argument parsing, validation.

pub mod args;
pub mod defaults;
pub mod validation;

use std::path::PathBuf;

use anyhow::anyhow;
use image_processor::ToneCurve;

pub use args::Args;

use defaults::{DEFAULT_DPI, DEFAULT_OUTPUT, DEFAULT_WIDTH_MM};

/// Validated settings for one halftone run.
#[derive(Debug, Clone, PartialEq)]
pub struct HalftoneConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub tone: ToneCurve,
    pub dpi: u32,
    /// Physical size of the smaller output side, in millimetres.
    pub width_mm: f64,
    /// Rendering threads; 0 lets rayon decide.
    pub jobs: usize,
}

impl Default for HalftoneConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            tone: ToneCurve::default(),
            dpi: DEFAULT_DPI,
            width_mm: DEFAULT_WIDTH_MM,
            jobs: 0,
        }
    }
}

impl HalftoneConfig {
    /// Validate parsed arguments. Every problem is reported before any
    /// image work begins.
    pub fn from_args(args: Args) -> Result<Self, anyhow::Error> {
        let check = |name: &str, r: Result<(), String>| r.map_err(|e| anyhow!("--{name} {e}"));

        check("gamma", validation::validate_gamma(args.gamma))?;
        check("dpi", validation::validate_dpi(args.dpi))?;
        check("width", validation::validate_width_mm(args.width))?;
        check("output", validation::validate_output(&args.output))?;
        let min_gray =
            validation::validate_gray(args.min_gray).map_err(|e| anyhow!("--min-gray {e}"))?;
        let max_gray =
            validation::validate_gray(args.max_gray).map_err(|e| anyhow!("--max-gray {e}"))?;

        let tone = ToneCurve::new(args.autoscale, args.gamma, min_gray, max_gray)?;

        Ok(Self {
            input: args.input,
            output: args.output,
            tone,
            dpi: args.dpi,
            width_mm: args.width,
            jobs: args.jobs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(argv: &[&str]) -> Result<HalftoneConfig, anyhow::Error> {
        let mut full = vec!["halftone"];
        full.extend_from_slice(argv);
        HalftoneConfig::from_args(Args::try_parse_from(full)?)
    }

    #[test]
    fn test_defaults_match_default_impl() {
        let config = parse(&["photo.jpg"]).unwrap();
        let expected = HalftoneConfig {
            input: PathBuf::from("photo.jpg"),
            ..HalftoneConfig::default()
        };
        assert_eq!(config, expected);
    }

    #[test]
    fn test_tone_options_are_carried() {
        let config = parse(&[
            "photo.jpg", "-a", "-g", "1.8", "--min-gray", "20", "--max-gray", "230",
        ])
        .unwrap();
        assert_eq!(
            config.tone,
            ToneCurve {
                autoscale: true,
                gamma: 1.8,
                min_gray: 20,
                max_gray: 230,
            }
        );
    }

    #[test]
    fn test_non_positive_gamma_rejected() {
        let err = parse(&["photo.jpg", "-g", "0"]).unwrap_err();
        assert!(err.to_string().contains("--gamma"));
        assert!(parse(&["photo.jpg", "-g", "-1"]).is_err());
    }

    #[test]
    fn test_out_of_range_gray_rejected() {
        let err = parse(&["photo.jpg", "--max-gray", "300"]).unwrap_err();
        assert!(err.to_string().contains("--max-gray"));
        assert!(parse(&["photo.jpg", "--min-gray", "-5"]).is_err());
    }

    #[test]
    fn test_tiff_and_bmp_outputs_accepted() {
        let config = parse(&["photo.jpg", "-o", "out.tif"]).unwrap();
        assert_eq!(config.output, PathBuf::from("out.tif"));
        assert!(parse(&["photo.jpg", "-o", "out.bmp"]).is_ok());
    }

    #[test]
    fn test_inverted_gray_range_allowed() {
        let config = parse(&["photo.jpg", "--min-gray", "255", "--max-gray", "0"]).unwrap();
        assert_eq!((config.tone.min_gray, config.tone.max_gray), (255, 0));
    }

    #[test]
    fn test_bad_dpi_and_width_rejected() {
        assert!(parse(&["photo.jpg", "-d", "0"]).is_err());
        assert!(parse(&["photo.jpg", "-w", "0"]).is_err());
        assert!(parse(&["photo.jpg", "-o", "out.unknown"]).is_err());
    }
}
