/*!
The `may_equal` declaration: which variables are permitted to share a node value.
*/

use std::collections::HashSet;

/// Per-variable declaration of which earlier variable indices a variable may share a value with.
///
/// Entry `i` names the variable indices `j` that variable `i` may equal. The solver only ever
/// reads `may_equal[i]` for `j < i` (see [`crate::solver`]'s distinctness step), so a caller only
/// needs to populate each row with its lower-indexed partners; anything at or above `i` is never
/// consulted.
#[derive(Clone, Debug)]
pub struct MayEqual {
    rows: Vec<HashSet<usize>>,
}

impl MayEqual {
    /// Builds a `may_equal` declaration from one row per variable.
    ///
    /// # Panics
    /// If `rows.len()` does not match the solver's variable count at construction.
    pub fn new(rows: Vec<HashSet<usize>>) -> Self {
        MayEqual { rows }
    }

    /// A declaration under which every pair of distinct variables must take distinct node values.
    pub fn distinct(n_variables: usize) -> Self {
        MayEqual {
            rows: (0..n_variables).map(|_| HashSet::new()).collect(),
        }
    }

    /// A declaration under which every variable may share a value with every other.
    pub fn all_may_equal(n_variables: usize) -> Self {
        MayEqual {
            rows: (0..n_variables).map(|i| (0..=i).collect()).collect(),
        }
    }

    /// The number of variables this declaration covers.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether this declaration covers no variables.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether variable `i` is permitted to share a value with variable `j`.
    ///
    /// Only meaningful for `j < i`; the solver never asks about any other pair.
    pub fn permits(&self, i: usize, j: usize) -> bool {
        self.rows[i].contains(&j)
    }
}
