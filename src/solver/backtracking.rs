//! Backtracking search with forward checking.
//! Replaces the external black-box solver the
//! colouring pipeline was originally built around.

use custom_debug_derive::Debug;
use itertools::Itertools;

use crate::{
    coloring::Coloring,
    graph::{Colour, Graph, VertexIndex, UNCOLOURED},
    statistics::SearchStatistics,
    validation::ValidatedGraph,
};

use super::{ColorBudget, ColoringStrategy, Outcome};

/// Depth-first search over partial colourings.
///
/// Vertices are assigned most-constrained-first
/// (descending degree, ties by index) and colours are
/// tried in ascending order, so the result for a fixed
/// instance is reproducible. An optional step limit
/// turns searches that run too long into
/// [Unknown](Outcome::Unknown) instead of exhausting
/// the whole tree.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Backtracking {
    step_limit: Option<u64>,
}

/// Partial colouring plus the per-vertex conflict
/// counters the forward checking works on. Owned by
/// exactly one in-flight search.
#[derive(Debug)]
struct SearchState {
    assignment: Vec<Colour>,
    /// conflicts[v][c] counts assigned neighbours of v
    /// that carry colour c.
    #[debug(skip)]
    conflicts: Vec<Vec<u32>>,
    /// Number of colours of v without any conflict.
    #[debug(skip)]
    open_colours: Vec<u32>,
    steps: u64,
}

enum SearchResult {
    Complete,
    Exhausted,
    OutOfSteps,
}

impl Backtracking {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound the search by a number of colour choices.
    /// A search that exceeds the limit reports
    /// [Unknown](Outcome::Unknown), never
    /// [Infeasible](Outcome::Infeasible).
    pub fn with_step_limit(step_limit: u64) -> Self {
        Backtracking {
            step_limit: Some(step_limit),
        }
    }

    pub fn solve_with_statistics(
        &self,
        validated: &ValidatedGraph,
        budget: ColorBudget,
    ) -> (Outcome, SearchStatistics) {
        let mut statistics = SearchStatistics::default();
        crate::time!(
            search_time,
            outcome,
            self.search(validated, budget, &mut statistics)
        );
        statistics.search_time = search_time;
        (outcome, statistics)
    }

    fn search(
        &self,
        validated: &ValidatedGraph,
        budget: ColorBudget,
        statistics: &mut SearchStatistics,
    ) -> Outcome {
        let graph = validated.graph();
        let size = graph.size();

        if size == 0 {
            return Outcome::Colored(Coloring::new(Vec::new()));
        }
        if budget == 0 {
            return Outcome::Infeasible;
        }

        // Most constrained first.
        let order: Vec<VertexIndex> = (0..size as VertexIndex)
            .sorted_by(|a, b| {
                graph
                    .degree(*b)
                    .cmp(&graph.degree(*a))
                    .then_with(|| a.cmp(b))
            })
            .collect();

        let mut state = SearchState::new(size, budget);

        match self.assign_from(graph, budget, &order, 0, &mut state, statistics) {
            SearchResult::Complete => Outcome::Colored(Coloring::new(state.assignment)),
            SearchResult::Exhausted => Outcome::Infeasible,
            SearchResult::OutOfSteps => Outcome::Unknown,
        }
    }

    fn assign_from(
        &self,
        graph: &Graph,
        budget: ColorBudget,
        order: &[VertexIndex],
        position: usize,
        state: &mut SearchState,
        statistics: &mut SearchStatistics,
    ) -> SearchResult {
        let vertex = match order.get(position) {
            Some(vertex) => *vertex,
            None => return SearchResult::Complete,
        };

        for colour in 0..budget as Colour {
            if state.conflicts[vertex as usize][colour as usize] > 0 {
                continue;
            }

            state.steps += 1;
            if let Some(limit) = self.step_limit {
                if state.steps > limit {
                    return SearchResult::OutOfSteps;
                }
            }
            statistics.log_decision();

            if !state.assign(graph, vertex, colour, statistics) {
                // Forward checking wiped out a neighbour's
                // domain; the state rolled itself back already.
                statistics.log_backtrack();
                continue;
            }

            match self.assign_from(graph, budget, order, position + 1, state, statistics) {
                SearchResult::Exhausted => {
                    state.unassign(graph, vertex, colour);
                    statistics.log_backtrack();
                }
                finished => return finished,
            }
        }

        SearchResult::Exhausted
    }
}

impl ColoringStrategy for Backtracking {
    fn solve(&self, validated: &ValidatedGraph, budget: ColorBudget) -> Outcome {
        self.search(validated, budget, &mut SearchStatistics::default())
    }
}

impl SearchState {
    fn new(size: usize, budget: ColorBudget) -> Self {
        SearchState {
            assignment: vec![UNCOLOURED; size],
            conflicts: vec![vec![0; budget as usize]; size],
            open_colours: vec![budget; size],
            steps: 0,
        }
    }

    /// Assign `colour` to `vertex` and remove the colour
    /// from the domains of all unassigned neighbours.
    /// Rolls itself back and reports failure if some
    /// neighbour ends up with an empty domain.
    fn assign(
        &mut self,
        graph: &Graph,
        vertex: VertexIndex,
        colour: Colour,
        statistics: &mut SearchStatistics,
    ) -> bool {
        self.assignment[vertex as usize] = colour;

        for (handled, neighbour) in graph.neighbours(vertex).iter().enumerate() {
            let neighbour = *neighbour as usize;
            if self.assignment[neighbour] != UNCOLOURED {
                continue;
            }

            statistics.log_propagation();
            self.conflicts[neighbour][colour as usize] += 1;
            if self.conflicts[neighbour][colour as usize] == 1 {
                self.open_colours[neighbour] -= 1;
                if self.open_colours[neighbour] == 0 {
                    self.rollback(graph, vertex, colour, handled + 1);
                    return false;
                }
            }
        }

        true
    }

    fn unassign(&mut self, graph: &Graph, vertex: VertexIndex, colour: Colour) {
        self.rollback(graph, vertex, colour, graph.neighbours(vertex).len());
    }

    /// Reverse [assign](SearchState::assign) for the first
    /// `handled` adjacency entries. Assignments are undone
    /// in LIFO order, so exactly the neighbours that were
    /// unassigned then are unassigned now.
    fn rollback(&mut self, graph: &Graph, vertex: VertexIndex, colour: Colour, handled: usize) {
        for neighbour in graph.neighbours(vertex)[..handled].iter() {
            let neighbour = *neighbour as usize;
            if self.assignment[neighbour] != UNCOLOURED {
                continue;
            }

            self.conflicts[neighbour][colour as usize] -= 1;
            if self.conflicts[neighbour][colour as usize] == 0 {
                self.open_colours[neighbour] += 1;
            }
        }

        self.assignment[vertex as usize] = UNCOLOURED;
    }
}
