//! Statistics about single coloring searches.

use std::time::Duration;

/// Counters for one solve call. All of them are
/// deterministic for a fixed instance since the
/// search itself is.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Colour choices tried, including those
    /// that were backtracked later.
    pub decisions: u64,
    /// Abandoned colour choices.
    pub backtracks: u64,
    /// Domain reductions pushed to neighbours.
    pub propagations: u64,
    pub search_time: Duration,
}

impl SearchStatistics {
    pub fn log_decision(&mut self) {
        self.decisions += 1;
    }

    pub fn log_backtrack(&mut self) {
        self.backtracks += 1;
    }

    pub fn log_propagation(&mut self) {
        self.propagations += 1;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_counters() {
        let mut statistics = SearchStatistics::default();
        statistics.log_decision();
        statistics.log_decision();
        statistics.log_backtrack();
        statistics.log_propagation();

        assert_eq!(2, statistics.decisions);
        assert_eq!(1, statistics.backtracks);
        assert_eq!(1, statistics.propagations);
        assert_eq!(Duration::ZERO, statistics.search_time);
    }
}
