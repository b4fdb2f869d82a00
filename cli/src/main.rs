use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use labyrinth_core::{Coord, Maze, MazeConfig, RecursiveBacktracker};
use web_time::{SystemTime, UNIX_EPOCH};

use command::Command;

mod command;
mod render;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Number of columns, this is the maze width
    #[arg(short, long, default_value_t = 10)]
    columns: Coord,

    /// Number of rows, this is the maze height
    #[arg(short, long, default_value_t = 10)]
    rows: Coord,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the generated maze as JSON and exit
    #[arg(long)]
    json: bool,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .ok()
        .and_then(|elapsed| u64::try_from(elapsed.as_nanos()).ok())
        .unwrap_or_default()
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(log_level) = args.verbose.log_level() {
        simple_logger::init_with_level(log_level).context("Error initializing logger")?;
    }

    let config = MazeConfig::new(args.columns, args.rows).context("Invalid maze size")?;
    let seed = args.seed.unwrap_or_else(clock_seed);
    log::debug!("seed: {}", seed);

    let mut maze = Maze::generate_with(config, RecursiveBacktracker::seeded(seed));

    let mut stdout = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &maze).context("Could not write maze")?;
        writeln!(stdout)?;
        return Ok(());
    }

    write!(stdout, "{}", render::render(&maze))?;
    for line in io::stdin().lock().lines() {
        let line = line.context("Could not read input")?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Move(direction)) => {
                let before = maze.current_position().coords();
                let landed = maze.attempt_move(direction);
                if landed.coords() == before {
                    writeln!(stdout, "A wall blocks the way {:?}", direction)?;
                    continue;
                }
            }
            Ok(Command::Regenerate) => {
                let seed = clock_seed();
                log::info!("Regenerating with seed {}", seed);
                maze.regenerate(config, seed);
            }
            Ok(Command::Quit) => break,
            Err(err) => {
                writeln!(stdout, "{err}")?;
                continue;
            }
        }

        write!(stdout, "{}", render::render(&maze))?;
        if maze.current_position() == maze.finish_cell() {
            writeln!(stdout, "You reached the finish, press r for a new maze")?;
        }
    }

    Ok(())
}
