use std::{env::args, error::Error, fs, process::exit};

use golboard::{config::DEFAULT_DENSITY, Board, Config, Pattern, Seed, Sim};
use log::{error, info};

pub use view::View;
mod view;

fn build_board(config: &Config) -> Result<Board, Box<dyn Error>> {
    let (width, height) = match (config.width, config.height) {
        (Some(width), Some(height)) => (width, height),
        (width, height) => {
            // one line is kept for the status bar
            let (columns, rows) = termion::terminal_size()?;
            (
                width.unwrap_or(columns as usize * config.cell_size),
                height.unwrap_or(rows.saturating_sub(1) as usize * config.cell_size),
            )
        }
    };

    let mut board = match config.rng_seed {
        Some(seed) => Board::seeded(width, height, config.cell_size, config.topology, seed)?,
        None => Board::with_topology(width, height, config.cell_size, config.topology)?,
    };

    match &config.seed {
        Seed::File(path) => {
            let content = fs::read_to_string(path)?;
            board.reset(&content)?;
            info!("loaded {}", path.display());
        }
        Seed::Named(name) => board.place(&Pattern::named(name)?)?,
        Seed::Random { density } => board.randomize(*density)?,
    }
    Ok(board)
}

pub fn main() {
    env_logger::init();

    let config = Config::from_args(args().skip(1)).unwrap_or_else(|err| {
        error!("{err}");
        eprintln!("[error] {err}");
        exit(2);
    });

    let board = build_board(&config).unwrap_or_else(|err| {
        error!("{err}");
        eprintln!("[error] {err}");
        exit(1);
    });

    let density = match config.seed {
        Seed::Random { density } => density,
        _ => DEFAULT_DENSITY,
    };
    let simulation = Sim::spawn(board, config.tick);
    let view = View::spawn(simulation.handle(), density);

    view.join();
    simulation.join();
}
