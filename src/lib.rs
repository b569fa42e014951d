pub use utils::Pos;
mod utils;

pub use error::{BoardError, ConfigError};
pub mod error;

pub use world::{Board, Cell, Topology};
pub mod world;

pub use pattern::Pattern;
mod pattern;

pub use config::{Config, Seed};
pub mod config;

pub use sim::{Cycle, Sim, SimCmd, SimHandle, Snapshot};
pub mod sim;
