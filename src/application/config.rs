use std::cmp::Ordering;
use std::str::FromStr;

use crate::domain::Pipeline;

pub const DEFAULT_COLUMNS: usize = 45;
pub const DEFAULT_ROWS: usize = 30;
pub const DEFAULT_CELL_SIZE: f32 = 20.0;
pub const DEFAULT_TICK_DELAY_MS: u64 = 30;

/// Command line configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid arguments: {0}")]
    Args(#[from] getopts::Fail),

    #[error("invalid value for --{flag}: {value:?}")]
    InvalidValue { flag: &'static str, value: String },

    #[error("--{flag} must be greater than zero")]
    NotPositive { flag: &'static str },

    #[error("--{flag} must be a finite number")]
    NotFinite { flag: &'static str },
}

/// Startup configuration for the simulation window
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    pub columns: usize,
    pub rows: usize,
    pub cell_size: f32,
    pub tick_delay_ms: u64,
    pub pipeline: Pipeline,
    pub start_paused: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            cell_size: DEFAULT_CELL_SIZE,
            tick_delay_ms: DEFAULT_TICK_DELAY_MS,
            pipeline: Pipeline::default(),
            start_paused: false,
        }
    }
}

fn options() -> getopts::Options {
    let mut opts = getopts::Options::new();
    opts.optflag("", "help", "print this help menu");
    opts.optopt("c", "columns", "grid width in cells", "COLUMNS");
    opts.optopt("r", "rows", "grid height in cells", "ROWS");
    opts.optopt("s", "cell-size", "cell edge length in pixels", "PIXELS");
    opts.optopt("d", "delay", "milliseconds between ticks", "MILLIS");
    opts.optflag("p", "pressure", "release pressurized water upward each tick");
    opts.optflag("", "paused", "start with the simulation paused");
    opts
}

/// Parse an optional flag value, rejecting zero, negatives and NaN
fn parse_positive<V>(matches: &getopts::Matches, flag: &'static str) -> Result<Option<V>, ConfigError>
where
    V: FromStr + PartialOrd + Default,
{
    let Some(value) = matches.opt_str(flag) else {
        return Ok(None);
    };
    let parsed = value
        .trim()
        .parse::<V>()
        .map_err(|_| ConfigError::InvalidValue { flag, value: value.clone() })?;
    match parsed.partial_cmp(&V::default()) {
        Some(Ordering::Greater) => Ok(Some(parsed)),
        _ => Err(ConfigError::NotPositive { flag }),
    }
}

impl SimConfig {
    /// Parse command line arguments (without the program name).
    /// Returns `Ok(None)` when help was requested.
    pub fn from_args<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>, ConfigError> {
        let matches = options().parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            return Ok(None);
        }

        let defaults = Self::default();
        let cell_size = parse_positive::<f32>(&matches, "cell-size")?.unwrap_or(defaults.cell_size);
        if !cell_size.is_finite() {
            return Err(ConfigError::NotFinite { flag: "cell-size" });
        }
        Ok(Some(Self {
            columns: parse_positive(&matches, "columns")?.unwrap_or(defaults.columns),
            rows: parse_positive(&matches, "rows")?.unwrap_or(defaults.rows),
            cell_size,
            tick_delay_ms: parse_positive(&matches, "delay")?.unwrap_or(defaults.tick_delay_ms),
            pipeline: if matches.opt_present("pressure") {
                Pipeline::WithPressure
            } else {
                defaults.pipeline
            },
            start_paused: matches.opt_present("paused"),
        }))
    }

    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_args(&args)
    }

    pub fn usage() -> String {
        options().usage("usage: liquid_sim [options]")
    }

    /// Simulation rate implied by the tick delay
    pub fn ticks_per_second(&self) -> f32 {
        1000.0 / self.tick_delay_ms as f32
    }

    /// Pixel size of the drawn grid (width, height)
    pub fn grid_pixel_size(&self) -> (f32, f32) {
        (
            self.columns as f32 * self.cell_size,
            self.rows as f32 * self.cell_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_canvas() {
        let config = SimConfig::from_args::<&str>(&[]).unwrap().unwrap();
        assert_eq!(config, SimConfig::default());
        assert_eq!(config.grid_pixel_size(), (900.0, 600.0));
    }

    #[test]
    fn test_overrides() {
        let config = SimConfig::from_args(&["--columns", "10", "-r", "8", "--delay", "50", "--pressure", "--paused"])
            .unwrap()
            .unwrap();
        assert_eq!(config.columns, 10);
        assert_eq!(config.rows, 8);
        assert_eq!(config.tick_delay_ms, 50);
        assert_eq!(config.pipeline, Pipeline::WithPressure);
        assert!(config.start_paused);
        assert!((config.ticks_per_second() - 20.0).abs() < 1e-6);
    }

    #[test]
    fn test_help_returns_none() {
        assert!(SimConfig::from_args(&["--help"]).unwrap().is_none());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            SimConfig::from_args(&["--rows", "many"]),
            Err(ConfigError::InvalidValue { flag: "rows", .. })
        ));
        assert!(matches!(
            SimConfig::from_args(&["--cell-size", "0"]),
            Err(ConfigError::NotPositive { flag: "cell-size" })
        ));
        assert!(matches!(
            SimConfig::from_args(&["--cell-size", "NaN"]),
            Err(ConfigError::NotPositive { flag: "cell-size" })
        ));
        assert!(matches!(
            SimConfig::from_args(&["--cell-size", "inf"]),
            Err(ConfigError::NotFinite { flag: "cell-size" })
        ));
        assert!(matches!(
            SimConfig::from_args(&["--bogus"]),
            Err(ConfigError::Args(_))
        ));
    }
}
