//! The eight runs of the classic maze: three strategies, two cost tables,
//! two heuristics for A*.

use gridwalk_core::Point;
use gridwalk_map::TileMap;
use gridwalk_search::{
    Action, CostTable, GridProblem, Heuristic, Outcome, ProblemConfig, SearchProblem,
    SearchResult, Solver, Strategy, search,
};

const MAZE: &str = "
########
#    T #
# #### #
#   P# #
# ##   #
#      #
########
";

fn maze() -> TileMap {
    TileMap::parse(MAZE).unwrap()
}

fn problem(map: &TileMap, costs: CostTable, heuristic: Heuristic) -> GridProblem<'_> {
    let config = ProblemConfig::default()
        .with_costs(costs)
        .with_heuristic(heuristic);
    GridProblem::new(map, config).unwrap()
}

fn uses_up(r: &SearchResult<Point, Action>) -> bool {
    r.solution().unwrap().actions().any(|a| *a == Action::Up)
}

#[test]
fn breadth_first_uniform_is_shortest() {
    let map = maze();
    let p = problem(&map, CostTable::UNIFORM, Heuristic::None);
    let r = search(&p, Strategy::BreadthFirst);
    let sol = r.solution().unwrap();
    assert_eq!(sol.len(), 8);
    assert_eq!(sol.action_count(), 7);
    assert_eq!(sol.cost(), 7.0);
    assert_eq!(*sol.goal(), Point::new(4, 3));
}

#[test]
fn breadth_first_non_uniform_pays_for_up() {
    let map = maze();
    let p = problem(&map, CostTable::NON_UNIFORM, Heuristic::None);
    let r = search(&p, Strategy::BreadthFirst);
    let sol = r.solution().unwrap();
    assert_eq!(sol.action_count(), 7);
    assert!(uses_up(&r));
    assert_eq!(sol.replay_cost(&p), 11.0);
}

#[test]
fn astar_non_uniform_avoids_up() {
    let map = maze();
    for h in [Heuristic::Manhattan, Heuristic::Euclidean] {
        let p = problem(&map, CostTable::NON_UNIFORM, h);
        let r = search(&p, Strategy::AStar);
        let sol = r.solution().unwrap();
        assert!(!uses_up(&r), "{h} should route around the up move");
        assert_eq!(sol.action_count(), 9);
        assert_eq!(sol.cost(), 9.0);

        let expected = [
            Point::new(5, 1),
            Point::new(4, 1),
            Point::new(3, 1),
            Point::new(2, 1),
            Point::new(1, 1),
            Point::new(1, 2),
            Point::new(1, 3),
            Point::new(2, 3),
            Point::new(3, 3),
            Point::new(4, 3),
        ];
        assert_eq!(sol.states().copied().collect::<Vec<_>>(), expected);
    }
}

#[test]
fn astar_uniform_matches_breadth_first_cost() {
    let map = maze();
    for h in [Heuristic::None, Heuristic::Manhattan, Heuristic::Euclidean] {
        let p = problem(&map, CostTable::UNIFORM, h);
        assert_eq!(search(&p, Strategy::AStar).solution().unwrap().cost(), 7.0);
    }
}

#[test]
fn depth_first_finds_some_path() {
    let map = maze();
    for costs in [CostTable::UNIFORM, CostTable::NON_UNIFORM] {
        let p = problem(&map, costs, Heuristic::Manhattan);
        let dfs = search(&p, Strategy::DepthFirst);
        let astar = search(&p, Strategy::AStar);
        let dfs_cost = dfs.solution().unwrap().cost();
        assert!(astar.solution().unwrap().cost() <= dfs_cost);
        assert_eq!(*dfs.solution().unwrap().goal(), p.goal());
    }
}

#[test]
fn replayed_cost_matches_for_every_run() {
    let map = maze();
    let mut solver = Solver::new();
    for costs in [CostTable::UNIFORM, CostTable::NON_UNIFORM] {
        for h in [Heuristic::None, Heuristic::Manhattan, Heuristic::Euclidean] {
            let p = problem(&map, costs, h);
            for strategy in Strategy::ALL {
                let r = solver.solve(&p, strategy);
                let sol = r.solution().unwrap();
                assert_eq!(sol.replay_cost(&p), sol.cost(), "{strategy} {h}");
                assert_eq!(sol.steps()[0].action, None);
                assert_eq!(sol.steps()[0].state, p.initial_state());
            }
        }
    }
}

#[test]
fn path_moves_are_legal() {
    let map = maze();
    let p = problem(&map, CostTable::NON_UNIFORM, Heuristic::Euclidean);
    for strategy in Strategy::ALL {
        let r = search(&p, strategy);
        for w in r.path().unwrap().windows(2) {
            let action = w[1].action.unwrap();
            let mut legal = Vec::new();
            p.actions(&w[0].state, &mut legal);
            assert!(legal.contains(&action));
            assert_eq!(p.result(&w[0].state, action), w[1].state);
        }
    }
}

#[test]
fn repeated_runs_are_identical() {
    let map = maze();
    let p = problem(&map, CostTable::NON_UNIFORM, Heuristic::Manhattan);
    for strategy in Strategy::ALL {
        let a = search(&p, strategy);
        let b = search(&p, strategy);
        assert_eq!(a.path(), b.path());
        assert_eq!(a.stats, b.stats);
    }
}

#[test]
fn start_equal_to_goal_is_trivial() {
    let map = maze();
    let start = Point::new(5, 1);
    let p = GridProblem::with_endpoints(&map, start, start, ProblemConfig::default());
    for strategy in Strategy::ALL {
        let r = search(&p, strategy);
        let sol = r.solution().unwrap();
        assert_eq!(sol.action_count(), 0);
        assert_eq!(sol.cost(), 0.0);
        assert_eq!(sol.replay_cost(&p), 0.0);
    }
}

#[test]
fn walled_off_goal_has_no_solution() {
    let map = TileMap::parse(
        "
#######
#T  # #
#   #P#
#   ###
#######
",
    )
    .unwrap();
    for costs in [CostTable::UNIFORM, CostTable::NON_UNIFORM] {
        let p = problem(&map, costs, Heuristic::Manhattan);
        for strategy in Strategy::ALL {
            let r = search(&p, strategy);
            assert_eq!(r.outcome, Outcome::NoSolution, "{strategy}");
            assert!(r.path().is_none());
            // Depth-first may expand a cell again once it finds it cheaper.
            assert!(r.stats.expanded >= 9);
        }
    }
}
