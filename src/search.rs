use crate::prelude::*;

use core::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// A state together with the cost of the path that reached it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<S> {
    pub state: S,
    pub cost: Cost,
    pub depth: usize,
}

impl<S> Node<S> {
    pub fn root(state: S) -> Self {
        Node {
            state,
            cost: 0,
            depth: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<S, A> {
    pub state: S,
    pub cost: Cost,
    pub actions: Vec<A>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport<S, A> {
    /// `None` when the frontier ran dry or the node limit was reached.
    pub solution: Option<Solution<S, A>>,
    pub nodes_visited: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    pub node_limit: Option<usize>,
}

impl SearchLimits {
    pub fn unlimited() -> Self {
        SearchLimits::default()
    }
}

/// Where a node came from, kept so the path can be rebuilt once the goal pops.
struct Record<S, A> {
    node: Node<S>,
    parent: Option<(usize, A)>,
}

struct Entry {
    priority: Cost,
    cost: Cost,
    record: usize,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

// BinaryHeap pops the maximum: lowest f first, then deepest g, then oldest.
// Records are numbered in generation order, so the index doubles as age.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| other.record.cmp(&self.record))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* from `initial` guided by `heuristic`.
///
/// The goal test runs when a node leaves the frontier, so with an admissible
/// heuristic the returned solution has minimal cost. `nodes_visited` counts
/// expanded nodes; the goal itself is not expanded.
pub fn a_star<P, H>(
    problem: &P,
    initial: P::State,
    heuristic: &H,
    limits: SearchLimits,
) -> Result<SearchReport<P::State, P::Action>, ProblemError>
where
    P: Problem,
    H: Heuristic<P::State> + ?Sized,
{
    let start = std::time::Instant::now();
    log::info!("{}: starting A* search", problem.name());

    let mut records: Vec<Record<P::State, P::Action>> = Vec::new();
    let mut best_cost: HashMap<P::State, Cost> = HashMap::new();
    let mut frontier = BinaryHeap::new();

    let root = Node::root(initial);
    best_cost.insert(root.state.clone(), 0);
    frontier.push(Entry {
        priority: heuristic.estimate(&root),
        cost: 0,
        record: 0,
    });
    records.push(Record {
        node: root,
        parent: None,
    });

    let mut nodes_visited = 0;
    while let Some(entry) = frontier.pop() {
        let node = records[entry.record].node.clone();
        if best_cost.get(&node.state).is_some_and(|best| *best < node.cost) {
            continue;
        }

        if problem.is_terminal(&node.state)? {
            log::info!(
                "{}: found solution of cost {} after visiting {} nodes, took {:?}",
                problem.name(),
                node.cost,
                nodes_visited,
                start.elapsed()
            );
            let actions = path_to(&records, entry.record);
            return Ok(SearchReport {
                solution: Some(Solution {
                    state: node.state,
                    cost: node.cost,
                    actions,
                }),
                nodes_visited,
            });
        }

        if limits.node_limit.is_some_and(|limit| nodes_visited >= limit) {
            log::warn!(
                "{}: node limit of {} reached, giving up",
                problem.name(),
                nodes_visited
            );
            break;
        }

        nodes_visited += 1;
        log::trace!(
            "{}: expanding depth={} g={} f={} {:?}",
            problem.name(),
            node.depth,
            node.cost,
            entry.priority,
            node.state
        );

        for action in problem.actions(&node.state)? {
            let (state, step_cost) = problem.successor(&node.state, action)?;
            let cost = node.cost + step_cost;
            if best_cost.get(&state).is_some_and(|best| *best <= cost) {
                continue;
            }
            best_cost.insert(state.clone(), cost);

            let child = Node {
                state,
                cost,
                depth: node.depth + 1,
            };
            frontier.push(Entry {
                priority: cost + heuristic.estimate(&child),
                cost,
                record: records.len(),
            });
            records.push(Record {
                node: child,
                parent: Some((entry.record, action)),
            });
        }
    }

    log::info!(
        "{}: no solution after visiting {} nodes, took {:?}",
        problem.name(),
        nodes_visited,
        start.elapsed()
    );
    Ok(SearchReport {
        solution: None,
        nodes_visited,
    })
}

fn path_to<S, A: Copy>(records: &[Record<S, A>], mut index: usize) -> Vec<A> {
    let mut actions = Vec::new();
    while let Some((parent, action)) = records[index].parent {
        actions.push(action);
        index = parent;
    }
    actions.reverse();
    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn truck(position: u64, goal: u64) -> TruckState {
        TruckState::new(position, goal).unwrap()
    }

    #[test]
    fn start_at_goal_visits_nothing() {
        let report = a_star(
            &MagicTruck,
            truck(9, 9),
            &zero::<TruckState>,
            SearchLimits::unlimited(),
        )
        .unwrap();
        assert_eq!(report.nodes_visited, 0);
        let solution = report.solution.unwrap();
        assert_eq!(solution.cost, 0);
        assert!(solution.actions.is_empty());
    }

    #[test]
    fn uniform_cost_finds_optimum() {
        let report = a_star(
            &MagicTruck,
            truck(3, 12),
            &zero::<TruckState>,
            SearchLimits::unlimited(),
        )
        .unwrap();
        let solution = report.solution.unwrap();
        assert_eq!(solution.cost, 4);
        assert_eq!(solution.actions, vec![TruckAction::Truck, TruckAction::Truck]);
        assert_eq!(solution.state, truck(12, 12));
    }

    #[test]
    fn path_cost_matches_replayed_actions() {
        let report = a_star(
            &MagicTruck,
            truck(1, 37),
            &relaxed_doublings,
            SearchLimits::unlimited(),
        )
        .unwrap();
        let solution = report.solution.unwrap();

        let mut state = truck(1, 37);
        let mut cost = 0;
        for action in &solution.actions {
            let (next, step) = MagicTruck.successor(&state, *action).unwrap();
            state = next;
            cost += step;
        }
        assert_eq!(state, solution.state);
        assert_eq!(cost, solution.cost);
    }

    #[test]
    fn node_limit_stops_search() {
        let report = a_star(
            &MagicTruck,
            truck(1, 50),
            &zero::<TruckState>,
            SearchLimits {
                node_limit: Some(3),
            },
        )
        .unwrap();
        assert_eq!(report.solution, None);
        assert_eq!(report.nodes_visited, 3);
    }

    #[test]
    fn dead_end_reports_no_solution() {
        // Past the goal there is nothing legal left to do.
        let past_goal = MagicTruck
            .successor(&truck(4, 4), TruckAction::Step)
            .unwrap()
            .0;
        let report = a_star(
            &MagicTruck,
            past_goal,
            &zero::<TruckState>,
            SearchLimits::unlimited(),
        )
        .unwrap();
        assert_eq!(report.solution, None);
        assert_eq!(report.nodes_visited, 1);
    }

    #[test]
    fn errors_from_the_problem_propagate() {
        struct Opaque;
        impl Problem for Opaque {
            type State = u8;
            type Action = char;

            fn name(&self) -> &'static str {
                "opaque"
            }

            fn is_terminal(&self, _state: &u8) -> Result<bool, ProblemError> {
                Ok(false)
            }
        }

        let err = a_star(&Opaque, 0, &zero::<u8>, SearchLimits::unlimited()).unwrap_err();
        assert_eq!(
            err,
            ProblemError::NotImplemented {
                problem: "opaque",
                capability: "actions",
            }
        );
    }
}
