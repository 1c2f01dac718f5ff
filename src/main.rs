use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;

use mandelbrot_explorer::controllers::batch::config::{
    DEFAULT_BOTTOM_LEFT, DEFAULT_HEIGHT, DEFAULT_MAX_CYCLES, DEFAULT_OUTPUT_PATH, DEFAULT_TOP_RIGHT,
    DEFAULT_WIDTH,
};
use mandelbrot_explorer::{BatchConfig, BatchController, Complex, ComplexRegion, presenter_for_path};

#[derive(Parser, Debug)]
#[command(name = "mandelbrot_explorer")]
#[command(about = "Render a region of the Mandelbrot set to an image file")]
struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// Bottom-left corner of the region as `re,im`
    #[arg(long, value_parser = parse_complex, allow_hyphen_values = true,
          default_value_t = DEFAULT_BOTTOM_LEFT)]
    bottom_left: Complex,

    /// Top-right corner of the region as `re,im`
    #[arg(long, value_parser = parse_complex, allow_hyphen_values = true,
          default_value_t = DEFAULT_TOP_RIGHT)]
    top_right: Complex,

    /// Iteration budget per pixel
    #[arg(long, default_value_t = DEFAULT_MAX_CYCLES)]
    max_cycles: u32,

    /// Output file; `.pgm` is written directly, other extensions go through the image encoder
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
}

impl Args {
    fn into_config(self) -> Result<BatchConfig, Box<dyn Error>> {
        Ok(BatchConfig {
            width: self.width,
            height: self.height,
            region: ComplexRegion::new(self.bottom_left, self.top_right)?,
            max_cycles: self.max_cycles,
            output_path: self.output,
        })
    }
}

fn parse_complex(value: &str) -> Result<Complex, String> {
    let (real, imag) = value
        .split_once(',')
        .ok_or_else(|| format!("expected `re,im`, got `{}`", value))?;

    let real: f64 = real
        .trim()
        .parse()
        .map_err(|e| format!("invalid real part `{}`: {}", real, e))?;
    let imag: f64 = imag
        .trim()
        .parse()
        .map_err(|e| format!("invalid imaginary part `{}`: {}", imag, e))?;

    Ok(Complex::new(real, imag))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Args::parse().into_config()?;
    let presenter = presenter_for_path(&config.output_path);
    let mut controller = BatchController::new(presenter);

    controller.run(&config)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_complex_accepts_negative_parts() {
        assert_eq!(parse_complex("-2,-1"), Ok(Complex::new(-2.0, -1.0)));
        assert_eq!(parse_complex(" 0.5 , 1 "), Ok(Complex::new(0.5, 1.0)));
    }

    #[test]
    fn test_parse_complex_rejects_malformed_input() {
        assert!(parse_complex("1.0").is_err());
        assert!(parse_complex("a,1").is_err());
        assert!(parse_complex("1,b").is_err());
    }

    #[test]
    fn test_defaults_match_batch_config() {
        let config = Args::try_parse_from(["mandelbrot_explorer"])
            .unwrap()
            .into_config()
            .unwrap();

        assert_eq!(config, BatchConfig::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::try_parse_from([
            "mandelbrot_explorer",
            "--width",
            "100",
            "--height",
            "67",
            "--bottom-left",
            "-1.5,-0.5",
            "--top-right",
            "0.5,0.5",
            "--max-cycles",
            "50",
            "-o",
            "out.png",
        ])
        .unwrap();

        let config = args.into_config().unwrap();

        assert_eq!(config.width, 100);
        assert_eq!(config.height, 67);
        assert_eq!(config.region.bottom_left(), Complex::new(-1.5, -0.5));
        assert_eq!(config.region.top_right(), Complex::new(0.5, 0.5));
        assert_eq!(config.max_cycles, 50);
        assert_eq!(config.output_path, PathBuf::from("out.png"));
    }

    #[test]
    fn test_inverted_region_is_rejected() {
        let args = Args::try_parse_from([
            "mandelbrot_explorer",
            "--bottom-left",
            "1,1",
            "--top-right",
            "-1,-1",
        ])
        .unwrap();

        assert!(args.into_config().is_err());
    }
}
