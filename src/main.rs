use clap::Parser;
use log::{error, info, warn};
use maze_astar::*;
use rand::{rngs::StdRng, SeedableRng};
use std::{path::PathBuf, process::ExitCode};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file to load
    #[arg(short, long, default_value = "settings.toml")]
    config: PathBuf,

    /// Print the open and closed sets after every step
    #[arg(short, long)]
    trace: bool,
}

fn endpoints(config: &Config, maze: &Maze) -> Result<(Location, Location)> {
    let start = config.start.or(maze.marked_start());
    let goal = config.goal.or(maze.marked_goal());

    if let (Some(start), Some(goal)) = (start, goal) {
        return Ok((start, goal));
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let (a, b) = pick_endpoints(maze, &mut rng)?;

    Ok(match (start, goal) {
        (Some(start), _) => (start, if b == start { a } else { b }),
        (_, Some(goal)) => (if a == goal { b } else { a }, goal),
        _ => (a, b),
    })
}

fn search(config: &Config, trace: bool) -> Result<()> {
    let maze = load_maze(&config.maze, config.neighbors)?;
    let (start, goal) = endpoints(config, &maze)?;
    let mut engine = SearchEngine::new(config.relax_policy);

    engine.begin_search(&maze, start, goal)?;

    for _ in 0..config.max_steps {
        let result = engine.step()?;

        if trace {
            println!("step {}\n{}", engine.steps(), Overlay::new(&engine));
        }

        match result {
            StepResult::Advanced(_) => continue,
            StepResult::Done(_) => {
                let path = engine.path()?;

                println!("{}", Overlay::new(&engine).with_path(&path));
                info!(
                    "Path of {} cells, cost {:.2}, {} nodes closed",
                    path.len(),
                    path_cost(&path),
                    engine.closed_len()
                );
                return Ok(());
            }
            StepResult::NoPath => {
                println!("{}", Overlay::new(&engine));
                return Err(MazeError::NoPathFound);
            }
        }
    }

    warn!("Stopped after {} steps without reaching {goal}", config.max_steps);
    Err(MazeError::StepLimit(config.max_steps))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match read_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {}, Err {:?}", cli.config.display(), e);
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::new()
        .filter_level(config.level_filter.parse_enum())
        .init();

    match search(&config, cli.trace) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
