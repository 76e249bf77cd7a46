//! Generate or load a maze and solve it with BFS, DFS and Dijkstra.
//!
//! Run: cargo run --bin maze-demo -- --width 30 --height 12 --braid 0.1
//!
//! Set `RUST_LOG=debug` to watch the traversals through the log observer.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use mazegraph_core::Point;
use mazegraph_demos::{Algorithm, HEIGHT, Solver, WIDTH};
use mazegraph_maze::{GridMaze, MazeGen, MazeGenConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(name = "maze-demo", about = "Solve a weighted maze with graph searches")]
struct Args {
    /// Maze width in cells.
    #[arg(long, default_value_t = WIDTH, value_parser = clap::value_parser!(i32).range(1..=500))]
    width: i32,

    /// Maze height in cells.
    #[arg(long, default_value_t = HEIGHT, value_parser = clap::value_parser!(i32).range(1..=500))]
    height: i32,

    /// Seed for the maze generator. Random when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Probability of removing each leftover wall, adding loops.
    #[arg(long, default_value_t = 0.0, value_name = "P")]
    braid: f64,

    /// Smallest passage weight.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i32).range(0..))]
    min_weight: i32,

    /// Largest passage weight.
    #[arg(long, default_value_t = 9, value_parser = clap::value_parser!(i32).range(0..))]
    max_weight: i32,

    /// Which search to run.
    #[arg(long, value_enum, default_value_t = Algorithm::All)]
    algorithm: Algorithm,

    /// Load the maze from an ASCII drawing instead of generating one.
    #[arg(long, value_name = "FILE")]
    maze: Option<PathBuf>,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn load_maze(args: &Args) -> Result<GridMaze, Box<dyn Error>> {
    if let Some(path) = &args.maze {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        log::info!("loaded maze from {}", path.display());
        return Ok(GridMaze::parse(&text)?);
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    println!("seed: {seed}");
    let config = MazeGenConfig {
        braid: args.braid,
        min_weight: args.min_weight,
        max_weight: args.max_weight,
        ..MazeGenConfig::default()
    };
    let mut mg = MazeGen::with_config(StdRng::seed_from_u64(seed), config);
    Ok(mg.generate(args.width, args.height))
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let maze = load_maze(args)?;
    let range = maze.range();
    let start = Point::new(0, 0);
    let end = Point::new(range.width() - 1, range.height() - 1);

    let mut solver = Solver::new(&maze)?;
    for &traversal in args.algorithm.traversals() {
        let report = solver.run(traversal, start, end)?;
        println!("{traversal} from {start} to {end}:");
        print!("{}", report.render(&maze));
        match (&report.path, report.cost) {
            (Some(path), Some(cost)) => {
                println!("path of {} cells, cost {cost}", path.len());
            }
            (Some(path), None) => println!("path of {} cells", path.len()),
            (None, _) => println!("{} cells visited", report.visited.len()),
        }
        println!();
    }
    Ok(())
}
