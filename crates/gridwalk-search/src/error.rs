//! Error types for problem construction.
//!
//! Only configuration can fail. A search that exhausts its frontier is a
//! normal [`Outcome`](crate::Outcome), never an error.

use thiserror::Error;

use crate::action::Action;

/// Invalid problem or cost-table configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("map has no start marker '{0}'")]
    MissingStart(char),

    #[error("map has no goal marker '{0}' and no default goal is configured")]
    MissingGoal(char),

    #[error("cost table has no entry for action '{0}'")]
    MissingCost(Action),

    #[error("cost for action '{action}' must be finite and non-negative, got {cost}")]
    InvalidCost { action: Action, cost: f64 },

    #[error("unknown action name '{0}'")]
    UnknownAction(String),

    #[error("unknown {kind} '{name}'")]
    UnknownOption { kind: &'static str, name: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
