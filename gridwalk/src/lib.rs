//! gridwalk: run a batch of searches over one maze and report each result.
//!
//! Map loading and report rendering happen strictly outside the search
//! loop: [`run`] parses the map, builds one
//! [`GridProblem`](gridwalk_search::GridProblem) per experiment, solves it
//! and hands the result to [`report`].

pub mod cli;
pub mod error;
pub mod experiment;
pub mod report;

use std::io::Write;

use gridwalk_map::TileMap;
use gridwalk_search::{GridProblem, SearchLimits, Solver};
use log::info;

pub use cli::Args;
pub use error::{AppError, Result};
pub use experiment::{CostPreset, CostSpec, Experiment, RunConfig};

/// The maze used when no map file is given.
pub const CLASSIC_MAP: &str = include_str!("../data/classic.map");

/// Load the map and experiments named by `args`, run every experiment in
/// order and write the reports to `out`.
pub fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let map = match &args.map {
        Some(path) => {
            info!("loading map from {path:?}");
            TileMap::load(path)?
        }
        None => TileMap::parse(CLASSIC_MAP)?,
    };
    info!("map is {} columns by {} rows", map.width(), map.height());

    let mut config = match &args.experiments {
        Some(path) => {
            info!("loading experiments from {path:?}");
            RunConfig::load(path)?
        }
        None => RunConfig::default(),
    };
    if let Some(goal) = args.default_goal {
        config.default_goal = Some(goal);
    }

    let mut solver = Solver::with_limits(SearchLimits {
        max_expansions: config.max_expansions,
    });

    // Build every problem first so a bad experiment fails before any output.
    let problems = config
        .experiments
        .iter()
        .map(|e| Ok((e, GridProblem::new(&map, config.problem_config(e))?)))
        .collect::<Result<Vec<_>>>()?;

    for (experiment, problem) in &problems {
        info!(
            "running '{}': {}, heuristic {}",
            experiment.title,
            experiment.strategy,
            problem.heuristic_kind()
        );
        let result = solver.solve(problem, experiment.strategy);
        report::write_experiment(out, &experiment.title, problem, &result, args.color)
            .map_err(AppError::Output)?;
    }
    Ok(())
}
