//! Configuration of the solver.

/// Capacity hints for a [`Solver`](crate::solver::Solver).
#[derive(Clone, Debug)]
pub struct SolverConfig {
    /// Initial capacity reserved for each depth's candidate set.
    ///
    /// Most rule constraints bind a variable against a small, tightly-constrained neighbourhood
    /// of facts, so the default is deliberately small.
    pub initial_candidate_capacity: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            initial_candidate_capacity: 8,
        }
    }
}
