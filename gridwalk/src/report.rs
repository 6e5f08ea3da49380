//! Rendering a search result: the map with the path drawn in, followed by
//! the solution length, cost and search counters.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use gridwalk_core::Point;
use gridwalk_map::Legend;
use gridwalk_search::{Action, GridProblem, Outcome, SearchResult};

/// Drawn on path cells other than the endpoints.
pub const PATH_GLYPH: char = '·';

/// How one map cell is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Start,
    Goal,
    Path,
    Wall,
    Floor(char),
}

impl Cell {
    fn glyph(self, legend: &Legend) -> char {
        match self {
            Cell::Start => legend.start,
            Cell::Goal => legend.goal,
            Cell::Path => PATH_GLYPH,
            Cell::Wall => legend.wall,
            Cell::Floor(c) => c,
        }
    }

    fn color(self) -> Option<Color> {
        match self {
            Cell::Start => Some(Color::Green),
            Cell::Goal => Some(Color::Red),
            Cell::Path => Some(Color::Yellow),
            Cell::Wall => Some(Color::DarkGrey),
            Cell::Floor(_) => None,
        }
    }
}

/// Classify every cell, row by row.
fn cells(problem: &GridProblem<'_>, path: &[Point]) -> Vec<Vec<Cell>> {
    let on_path: HashSet<Point> = path.iter().copied().collect();
    let legend = problem.legend();
    problem
        .map()
        .rows()
        .enumerate()
        .map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(|(x, tile)| {
                    let p = Point::new(x as i32, y as i32);
                    if p == problem.start() {
                        Cell::Start
                    } else if p == problem.goal() {
                        Cell::Goal
                    } else if on_path.contains(&p) {
                        Cell::Path
                    } else if tile.glyph() == legend.wall {
                        Cell::Wall
                    } else {
                        Cell::Floor(tile.glyph())
                    }
                })
                .collect()
        })
        .collect()
}

fn path_points(result: &SearchResult<Point, Action>) -> Vec<Point> {
    result
        .solution()
        .map(|s| s.states().copied().collect())
        .unwrap_or_default()
}

/// The map as plain text with the solution path drawn in.
pub fn render_map(problem: &GridProblem<'_>, result: &SearchResult<Point, Action>) -> String {
    let legend = problem.legend();
    let mut out = String::new();
    for row in cells(problem, &path_points(result)) {
        out.extend(row.into_iter().map(|c| c.glyph(legend)));
        out.push('\n');
    }
    out
}

/// Solution length and the cost replayed over its steps, then the search
/// counters.
pub fn summary(problem: &GridProblem<'_>, result: &SearchResult<Point, Action>) -> String {
    let mut out = String::new();
    match &result.outcome {
        Outcome::Solved(sol) => {
            let _ = writeln!(out, "Total length of solution: {}", sol.len());
            let _ = writeln!(out, "Total cost of solution: {:.1}", sol.replay_cost(problem));
        }
        Outcome::NoSolution => out.push_str("No solution found\n"),
        Outcome::LimitReached => out.push_str("Expansion limit reached before a solution\n"),
    }
    for (label, value) in result.stats.entries() {
        let _ = writeln!(out, "{label}: {value}");
    }
    out
}

/// Write the map with crossterm colours, one cell at a time.
fn write_colored_map(
    out: &mut impl Write,
    problem: &GridProblem<'_>,
    result: &SearchResult<Point, Action>,
) -> io::Result<()> {
    let legend = problem.legend();
    for row in cells(problem, &path_points(result)) {
        for cell in row {
            match cell.color() {
                Some(color) => queue!(
                    out,
                    SetForegroundColor(color),
                    Print(cell.glyph(legend)),
                    ResetColor
                )?,
                None => queue!(out, Print(cell.glyph(legend)))?,
            }
        }
        queue!(out, Print('\n'))?;
    }
    Ok(())
}

/// Write one titled experiment report.
pub fn write_experiment(
    out: &mut impl Write,
    title: &str,
    problem: &GridProblem<'_>,
    result: &SearchResult<Point, Action>,
    color: bool,
) -> io::Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "-".repeat(title.chars().count()))?;
    if color {
        write_colored_map(out, problem, result)?;
    } else {
        out.write_all(render_map(problem, result).as_bytes())?;
    }
    write!(out, "{}", summary(problem, result))?;
    writeln!(out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwalk_map::TileMap;
    use gridwalk_search::{CostTable, Heuristic, ProblemConfig, Strategy, search};

    const MAZE: &str = "
########
#    T #
# #### #
#   P# #
# ##   #
#      #
########
";

    fn problem(map: &TileMap) -> GridProblem<'_> {
        let config = ProblemConfig::default()
            .with_costs(CostTable::NON_UNIFORM)
            .with_heuristic(Heuristic::Manhattan);
        GridProblem::new(map, config).unwrap()
    }

    #[test]
    fn path_is_drawn_between_markers() {
        let map = TileMap::parse(MAZE).unwrap();
        let p = problem(&map);
        let r = search(&p, Strategy::AStar);
        let expected = "\
########
#····T #
#·#### #
#···P# #
# ##   #
#      #
########
";
        assert_eq!(render_map(&p, &r), expected);
    }

    #[test]
    fn unsolved_map_has_no_path() {
        let map = TileMap::parse("T#P").unwrap();
        let p = GridProblem::new(&map, ProblemConfig::default()).unwrap();
        let r = search(&p, Strategy::BreadthFirst);
        assert_eq!(render_map(&p, &r), "T#P\n");
        assert!(summary(&p, &r).starts_with("No solution found\n"));
    }

    #[test]
    fn summary_lists_length_cost_and_stats() {
        let map = TileMap::parse(MAZE).unwrap();
        let p = problem(&map);
        let r = search(&p, Strategy::AStar);
        let text = summary(&p, &r);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Total length of solution: 10"));
        assert_eq!(lines.next(), Some("Total cost of solution: 9.0"));
        assert_eq!(
            lines.next(),
            Some(format!("iterations: {}", r.stats.iterations).as_str())
        );
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn colored_output_keeps_the_glyphs() {
        let map = TileMap::parse(MAZE).unwrap();
        let p = problem(&map);
        let r = search(&p, Strategy::AStar);
        let mut buf = Vec::new();
        write_experiment(&mut buf, "A*", &p, &r, true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains('\u{1b}'));
        assert_eq!(text.matches(PATH_GLYPH).count(), 8);

        let mut plain = Vec::new();
        write_experiment(&mut plain, "A*", &p, &r, false).unwrap();
        let plain = String::from_utf8(plain).unwrap();
        assert!(!plain.contains('\u{1b}'));
        assert!(plain.starts_with("A*\n--\n########\n"));
    }
}
