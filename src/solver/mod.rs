//! Search for vertex colourings within
//! a fixed colour budget.

use crate::{coloring::Coloring, validation::ValidatedGraph};

mod backtracking;
pub use backtracking::Backtracking;

/// Maximum number of distinct colours a solver
/// may use; the colours are 0..budget.
pub type ColorBudget = u32;

/// Budget expected by the usual rendering consumers.
pub const DEFAULT_COLOR_BUDGET: ColorBudget = 4;

/// Terminal result of one solve call.
///
/// `Infeasible` is a proof that no colouring within
/// the budget exists; `Unknown` only reports that a
/// configured step limit ran out first. The two must
/// never be conflated.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Outcome {
    Colored(Coloring),
    Infeasible,
    Unknown,
}

impl Outcome {
    pub fn coloring(self) -> Option<Coloring> {
        match self {
            Outcome::Colored(coloring) => Some(coloring),
            _ => None,
        }
    }

    pub fn is_infeasible(&self) -> bool {
        matches!(self, Outcome::Infeasible)
    }
}

/// Capability to search for a colouring of a validated
/// graph. Strategies behind this trait are exchangeable
/// without touching validation or callers.
pub trait ColoringStrategy {
    fn solve(&self, validated: &ValidatedGraph, budget: ColorBudget) -> Outcome;
}

/// Solve several independent instances on the rayon pool.
/// Every search owns its state exclusively, so the only
/// shared data is the immutable input.
pub fn solve_all<S>(strategy: &S, instances: &[(ValidatedGraph, ColorBudget)]) -> Vec<Outcome>
where
    S: ColoringStrategy + Sync,
{
    use rayon::prelude::*;

    instances
        .par_iter()
        .map(|(validated, budget)| strategy.solve(validated, *budget))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::validation::validate;

    #[test]
    fn test_solve_all() -> Result<(), crate::Error> {
        let triangle = validate(3, &[(0, 1), (1, 2), (0, 2)], true)?;
        let path = validate(3, &[(0, 1), (1, 2)], false)?;

        let instances = vec![
            (triangle.clone(), 2),
            (triangle, 3),
            (path.clone(), 2),
            (path, 0),
        ];

        let outcomes = solve_all(&Backtracking::new(), &instances);

        assert_eq!(Outcome::Infeasible, outcomes[0]);
        assert!(outcomes[1]
            .clone()
            .coloring()
            .map(|coloring| coloring.check(&instances[1].0, 3))
            .unwrap_or(false));
        assert!(outcomes[2].clone().coloring().is_some());
        assert_eq!(Outcome::Infeasible, outcomes[3]);
        Ok(())
    }

    #[test]
    fn test_outcome_accessors() {
        assert!(Outcome::Infeasible.is_infeasible());
        assert!(!Outcome::Unknown.is_infeasible());
        assert_eq!(None, Outcome::Unknown.coloring());
    }
}
