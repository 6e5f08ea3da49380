//! Command line arguments.

use std::path::PathBuf;

use gridwalk_core::Point;

use crate::error::{AppError, Result};

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// Map file; the classic maze when absent.
    pub map: Option<PathBuf>,
    /// JSON experiment batch; the eight classic runs when absent.
    pub experiments: Option<PathBuf>,
    /// Overrides the batch's default goal.
    pub default_goal: Option<Point>,
    pub color: bool,
    pub help: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            map: None,
            experiments: None,
            default_goal: None,
            color: true,
            help: false,
        }
    }
}

impl Args {
    pub const USAGE: &'static str = "\
gridwalk - compare search strategies on an ASCII maze

USAGE:
    gridwalk [OPTIONS]

OPTIONS:
    -m, --map <FILE>            Map file (default: built-in classic maze)
    -e, --experiments <FILE>    JSON experiment batch (default: eight classic runs)
    -g, --default-goal <X,Y>    Goal used when the map has no goal marker
        --no-color              Plain output
    -h, --help                  Print this help

Set RUST_LOG=debug to trace the searches.";

    /// Parse arguments, program name excluded.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut result = Self::default();
        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--map" | "-m" => result.map = Some(value(&arg, args.next())?.into()),
                "--experiments" | "-e" => {
                    result.experiments = Some(value(&arg, args.next())?.into())
                }
                "--default-goal" | "-g" => {
                    result.default_goal = Some(parse_point(&value(&arg, args.next())?)?)
                }
                "--no-color" => result.color = false,
                "--help" | "-h" => result.help = true,
                _ => return Err(AppError::Usage(format!("unknown argument '{arg}'"))),
            }
        }
        Ok(result)
    }
}

fn value(flag: &str, next: Option<String>) -> Result<String> {
    next.ok_or_else(|| AppError::Usage(format!("{flag} needs a value")))
}

/// Parse `X,Y`.
fn parse_point(s: &str) -> Result<Point> {
    let bad = || AppError::Usage(format!("expected X,Y, got '{s}'"));
    let (x, y) = s.split_once(',').ok_or_else(bad)?;
    let x = x.trim().parse().map_err(|_| bad())?;
    let y = y.trim().parse().map_err(|_| bad())?;
    Ok(Point::new(x, y))
}
