use std::io;

use clap::Parser;
use grid_snake::config::{DEFAULT_FOOD_COUNT, DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH, GridSize};
use grid_snake::error::SnakeError;
use grid_snake::map::Map;
use grid_snake::snake::Snake;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

/// Runs a short scripted snake game and prints the grid before and after.
#[derive(Debug, Parser)]
struct Cli {
    /// Map width in cells.
    #[arg(long, default_value_t = DEFAULT_MAP_WIDTH, value_parser = clap::value_parser!(u16).range(1..))]
    width: u16,

    /// Map height in cells.
    #[arg(long, default_value_t = DEFAULT_MAP_HEIGHT, value_parser = clap::value_parser!(u16).range(1..))]
    height: u16,

    /// Food markers to place before the snake moves; skipped on a full map.
    #[arg(long, default_value_t = DEFAULT_FOOD_COUNT)]
    food: usize,

    /// Seed for food placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final snake state as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> io::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let snake = run(&cli).map_err(io::Error::other)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&snake)
            .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;
        println!("{json}");
    } else {
        print!("{}", snake.map());
        println!("{snake}");
    }

    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> Result<Snake, SnakeError> {
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut snake = Snake::new(Map::new(GridSize {
        width: cli.width,
        height: cli.height,
    }));
    if cli.food > 0 && snake.map().count_free_fields() > 0 {
        snake.map_mut().spawn_food(&mut rng, cli.food)?;
    }

    if !cli.json {
        println!("{snake}");
        print!("{}", snake.map());
    }

    snake.move_forward()?;
    if snake.is_alive() {
        snake.grow()?;
        snake.turn_left()?;
        snake.move_forward()?;
    }
    if snake.is_alive() {
        snake.move_forward()?;
    }

    info!(
        alive = snake.is_alive(),
        score = snake.score(),
        turn = snake.turn(),
        "demo finished"
    );
    Ok(snake)
}
