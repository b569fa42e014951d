use std::{path::PathBuf, str::FromStr, time::Duration};

use crate::{error::ConfigError, Topology};

pub const DEFAULT_DENSITY: f64 = 0.3;
pub const DEFAULT_TICK: Duration = Duration::from_millis(200);
pub const MIN_TICK: Duration = Duration::from_millis(10);
pub const MAX_TICK: Duration = Duration::from_secs(5);

/// Where the starting generation comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum Seed {
    File(PathBuf),
    Named(String),
    Random { density: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// board size in pixels, the terminal size when unset.
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub cell_size: usize,
    pub topology: Topology,
    pub seed: Seed,
    pub rng_seed: Option<u64>,
    pub tick: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            cell_size: 1,
            topology: Topology::Toroidal,
            seed: Seed::Random {
                density: DEFAULT_DENSITY,
            },
            rng_seed: None,
            tick: DEFAULT_TICK,
        }
    }
}

impl Config {
    /// Parses arguments, excluding the program name.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--width" => config.width = Some(value(&arg, args.next())?),
                "--height" => config.height = Some(value(&arg, args.next())?),
                "--cell-size" => config.cell_size = value(&arg, args.next())?,
                "--bounded" => config.topology = Topology::Bounded,
                "--density" => {
                    let density: f64 = value(&arg, args.next())?;
                    if !(0.0..=1.0).contains(&density) {
                        return Err(invalid(&arg, density));
                    }
                    config.seed = Seed::Random { density }
                }
                "--pattern" => config.seed = Seed::Named(value(&arg, args.next())?),
                "--seed" => config.rng_seed = Some(value(&arg, args.next())?),
                "--tick-ms" => {
                    let tick = Duration::from_millis(value(&arg, args.next())?);
                    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
                        return Err(invalid(&arg, tick.as_millis()));
                    }
                    config.tick = tick
                }
                flag if flag.starts_with("--") => {
                    return Err(ConfigError::UnknownFlag(flag.to_string()))
                }
                path => config.seed = Seed::File(PathBuf::from(path)),
            }
        }
        Ok(config)
    }
}

fn value<T: FromStr>(flag: &str, value: Option<String>) -> Result<T, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::MissingValue(flag.to_string()))?;
    value.parse().map_err(|_| invalid(flag, value))
}

fn invalid(flag: &str, value: impl ToString) -> ConfigError {
    ConfigError::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
    }
}
