//! Solve a grid and print it with the path overlay.
//!
//! Run: cargo run --bin gridstar -- [FILE | --random] [--heap]
//!
//! `FILE` is a `.json` scenario or a text layout (`.` free, `#` obstacle,
//! `S` start, `E` end). Without a file the built-in layout is used.

use std::error::Error;
use std::io;
use std::path::Path;

use gridstar_core::Grid;
use gridstar_demos::{Board, DEMO_LAYOUT, load, random_scenario};
use gridstar_paths::{Frontier, SearchConfig, path_length};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut source = None;
    let mut config = SearchConfig::default();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--heap" => config.frontier = Frontier::Heap,
            _ => source = Some(arg),
        }
    }

    let grid = match source.as_deref() {
        Some("--random") => random_scenario(&mut rand::rng(), 14, 14, 25).build()?,
        Some(path) => load(Path::new(path))?,
        None => Grid::parse(DEMO_LAYOUT)?,
    };

    let mut board = Board::new(grid).with_config(config);
    if !board.ensure_solved() {
        log::warn!("start and end must both be set to search");
    }
    board.render(&mut io::stdout())?;

    match board.path() {
        Some(path) => println!(
            "path: {} steps, length {:.3}",
            path.len().saturating_sub(1),
            path_length(&path)
        ),
        None if board.is_solved() => println!("no path"),
        None => {}
    }
    Ok(())
}
