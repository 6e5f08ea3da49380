//! Experiment batches: which searches to run and with what settings.

use std::fs;
use std::path::Path;

use gridwalk_core::Point;
use gridwalk_map::Legend;
use gridwalk_search::{CostTable, Heuristic, ProblemConfig, Strategy};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// A named cost table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CostPreset {
    /// Every move costs 1.
    Uniform,
    /// Moving up costs 5, the rest cost 1.
    NonUniform,
}

impl CostPreset {
    pub fn table(self) -> CostTable {
        match self {
            CostPreset::Uniform => CostTable::UNIFORM,
            CostPreset::NonUniform => CostTable::NON_UNIFORM,
        }
    }
}

/// Either a preset name or a full `{action: cost}` table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CostSpec {
    Preset(CostPreset),
    Table(CostTable),
}

impl Default for CostSpec {
    fn default() -> Self {
        CostSpec::Preset(CostPreset::Uniform)
    }
}

impl CostSpec {
    pub fn table(self) -> CostTable {
        match self {
            CostSpec::Preset(p) => p.table(),
            CostSpec::Table(t) => t,
        }
    }
}

/// One search run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    pub title: String,
    pub strategy: Strategy,
    #[serde(default)]
    pub costs: CostSpec,
    #[serde(default)]
    pub heuristic: Heuristic,
}

impl Experiment {
    pub fn new(title: impl Into<String>, strategy: Strategy, costs: CostPreset) -> Self {
        Self {
            title: title.into(),
            strategy,
            costs: CostSpec::Preset(costs),
            heuristic: Heuristic::None,
        }
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }
}

/// A batch of experiments sharing one map legend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub legend: Legend,
    /// Goal used when the map has no goal marker.
    pub default_goal: Option<Point>,
    /// Stop a run after this many expansions.
    pub max_expansions: Option<usize>,
    pub experiments: Vec<Experiment>,
}

impl Default for RunConfig {
    /// Breadth-first and depth-first under both cost tables, then A* with
    /// each heuristic under both cost tables.
    fn default() -> Self {
        use CostPreset::{NonUniform, Uniform};
        use Strategy::{AStar, BreadthFirst, DepthFirst};

        let mut experiments = vec![
            Experiment::new("Breadth-first - uniform cost", BreadthFirst, Uniform),
            Experiment::new("Breadth-first - non-uniform cost", BreadthFirst, NonUniform),
            Experiment::new("Depth-first - uniform cost", DepthFirst, Uniform),
            Experiment::new("Depth-first - non-uniform cost", DepthFirst, NonUniform),
        ];
        for h in [Heuristic::Manhattan, Heuristic::Euclidean] {
            for costs in [Uniform, NonUniform] {
                let label = match costs {
                    Uniform => "uniform",
                    NonUniform => "non-uniform",
                };
                experiments.push(
                    Experiment::new(format!("A* - h = {h} - {label} cost"), AStar, costs)
                        .with_heuristic(h),
                );
            }
        }

        Self {
            legend: Legend::default(),
            default_goal: None,
            max_expansions: None,
            experiments,
        }
    }
}

impl RunConfig {
    /// Read a batch from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        debug!("{} experiments in {path:?}", config.experiments.len());
        Ok(config)
    }

    /// The problem settings for one experiment of this batch.
    pub fn problem_config(&self, experiment: &Experiment) -> ProblemConfig {
        let config = ProblemConfig::default()
            .with_costs(experiment.costs.table())
            .with_heuristic(experiment.heuristic)
            .with_legend(self.legend);
        match self.default_goal {
            Some(goal) => config.with_default_goal(goal),
            None => config,
        }
    }
}
