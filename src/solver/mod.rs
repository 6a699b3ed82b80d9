/*!
The constraint solver: a backtracking enumerator of satisfying assignments.

A [`Solver`] is built from a borrowed [`Structure`], a variable count, a list of
[`Constraint`](crate::structures::term::Constraint)s, and a [`MayEqual`] distinctness declaration.
It is single-use: constructed, driven to exhaustion (or abandoned early) by repeated calls to
[`next_assignment`](Solver::next_assignment), then dropped. There is no way to feed it more
constraints or to share it across structure mutations --- that borrow is enforced by the Rust
type system (`Solver<'s>` holds `&'s Structure`), not by runtime discipline.

# Algorithm

Variables are assigned in index order, depth-first. At depth `d` (`d` ranging over `0..n`), the
solver computes the set of node values variable `d` could take --- by looking up, for each
constraint mentioning `d`, the facts matching that constraint with every still-unassigned position
holed out, and intersecting the candidate values those lookups agree on (see [`enter_slot`]) --- then
tries each candidate in turn, substituting it into every constraint that mentions `d` before
moving on to depth `d + 1`. Reaching depth `n` yields one complete assignment; running out of
candidates at some depth backtracks to `d - 1` and undoes exactly the substitutions that depth's
assignment made.

This is variable-first (rather than constraint-first) enumeration: the per-step cost is bounded by
`arity × (constraints touching this variable) × (matching facts)`, and the structure's eight-way
index (see [`crate::db::structure`]) makes each partial lookup a single hash probe.

# Determinism

The candidate set at each depth is a set, but it is built and intersected with an
[`OrderedSet`](crate::generic::ordered_set::OrderedSet) rather than a bare hash set, so that the
order values are first observed is preserved. The overall enumeration order --- the lexicographic
product of per-depth candidate orders, as observed the moment each depth is first entered --- is
therefore deterministic for a given `(structure, constraints, may_equal)` tuple, not merely stable
within one process.

[`enter_slot`]: Solver::enter_slot
*/

mod may_equal;

pub use may_equal::MayEqual;

use crate::config::SolverConfig;
use crate::db::structure::Structure;
use crate::generic::ordered_set::OrderedSet;
use crate::misc::log::targets;
use crate::structures::{
    node::{Node, HOLE},
    term::{Constraint, Term},
};

/// The candidate set and cursor for one variable's depth in the search.
#[derive(Clone, Debug, Default)]
struct Frontier {
    options: Vec<Node>,
    cursor: usize,
}

/// A single-use, backtracking enumerator of assignments satisfying a list of constraints against
/// a borrowed [`Structure`].
///
/// See the [module documentation](self) for the algorithm.
pub struct Solver<'s> {
    structure: &'s Structure,

    n: usize,

    /// Constraints containing at least one variable, with variable positions progressively
    /// substituted by [`assign`](Solver::assign) as the search descends.
    working: Vec<Constraint>,

    /// `adjacency[v]` is the set of indices into `working` of constraints mentioning variable `v`,
    /// fixed at construction time (before any substitution).
    adjacency: Vec<Vec<usize>>,

    may_equal: MayEqual,

    /// `assignment[0..depth]` holds the node bound to each assigned variable.
    assignment: Vec<Node>,

    /// `touched[d]` holds the `(constraint, position)` pairs substituted when variable `d` was
    /// last assigned, so backtracking can undo exactly those substitutions.
    touched: Vec<Vec<(usize, usize)>>,

    frontier: Vec<Frontier>,

    /// Current depth: `-1` once the search is exhausted, `0..=n` while live.
    depth: isize,

    /// Whether every fully-ground input constraint held in the structure at construction time.
    /// `false` makes the solver permanently exhausted, with no candidates ever computed.
    valid: bool,

    config: SolverConfig,
}

impl<'s> Solver<'s> {
    /// Builds a solver against `structure` for `n_variables` variables, the given `constraints`,
    /// and `may_equal` distinctness declaration.
    ///
    /// Ground constraints (no variable positions) are checked against `structure` immediately; if
    /// any fails, the solver is constructed but permanently invalid (see
    /// [`is_valid`](Solver::is_valid)) and will never yield an assignment.
    ///
    /// # Panics
    /// If `n_variables` is 0, or `may_equal` does not have exactly `n_variables` rows. Both are
    /// contract violations in the caller, not data errors.
    pub fn new(
        structure: &'s Structure,
        n_variables: usize,
        constraints: Vec<Constraint>,
        may_equal: MayEqual,
    ) -> Self {
        Self::with_config(
            structure,
            n_variables,
            constraints,
            may_equal,
            SolverConfig::default(),
        )
    }

    /// As [`new`](Solver::new), reserving candidate-set capacity per `config`.
    pub fn with_config(
        structure: &'s Structure,
        n_variables: usize,
        constraints: Vec<Constraint>,
        may_equal: MayEqual,
        config: SolverConfig,
    ) -> Self {
        assert!(n_variables > 0, "a solver requires at least one variable");
        assert_eq!(
            may_equal.len(),
            n_variables,
            "may_equal must have one row per variable"
        );

        let mut working = Vec::new();
        let mut adjacency = vec![Vec::new(); n_variables];
        let mut valid = true;

        for constraint in constraints {
            if let Some((a, b, c)) = constraint.as_ground_triplet() {
                if !structure.is_true(a, b, c) {
                    log::trace!(
                        target: targets::SOLVER,
                        "ground constraint {a} {b} {c} failed; solver is permanently invalid"
                    );
                    valid = false;
                }
                continue;
            }

            let idx = working.len();
            for term in constraint.iter() {
                if let Term::Var(v) = term {
                    if !adjacency[*v].contains(&idx) {
                        adjacency[*v].push(idx);
                    }
                }
            }
            working.push(constraint);
        }

        let mut solver = Solver {
            structure,
            n: n_variables,
            working,
            adjacency,
            may_equal,
            assignment: vec![Node::default(); n_variables],
            touched: vec![Vec::new(); n_variables],
            frontier: vec![Frontier::default(); n_variables],
            depth: if valid { 0 } else { -1 },
            valid,
            config,
        };

        if solver.depth == 0 {
            solver.enter_slot(0);
        }

        solver
    }

    /// Whether every fully-ground input constraint held in the structure at construction time.
    ///
    /// `false` means the solver will never yield an assignment, regardless of how many times
    /// [`next_assignment`](Solver::next_assignment) is called. `true` does not mean a solution
    /// exists --- only that the solver has not been ruled out before search even began.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The next satisfying assignment, or `None` once the search is exhausted.
    ///
    /// Once this returns `None` it continues to return `None` on every subsequent call, without
    /// further observable effect on the borrowed structure.
    pub fn next_assignment(&mut self) -> Option<Vec<Node>> {
        if !self.valid {
            return None;
        }

        loop {
            if self.depth < 0 {
                return None;
            }
            let d = self.depth as usize;

            if self.frontier[d].cursor >= self.frontier[d].options.len() {
                log::trace!(target: targets::BACKTRACK, "exhausted depth {d}");
                self.unassign();
                continue;
            }

            let value = self.frontier[d].options[self.frontier[d].cursor];
            self.frontier[d].cursor += 1;

            self.assign(d, value);

            if self.depth as usize == self.n {
                let result = self.assignment.clone();
                log::trace!(target: targets::SOLVER, "found assignment {result:?}");
                self.unassign();
                return Some(result);
            }

            self.enter_slot(self.depth as usize);
        }
    }

    /// Substitutes `value` for variable `d` in every working constraint adjacent to it, records
    /// the assignment, and advances depth to `d + 1`.
    fn assign(&mut self, d: usize, value: Node) {
        let mut touched = Vec::new();
        for &ci in &self.adjacency[d] {
            for p in 0..3 {
                if self.working[ci].at(p).is_var(d) {
                    touched.push((ci, p));
                }
            }
        }
        for &(ci, p) in &touched {
            *self.working[ci].iter_mut().nth(p).expect("position in range") = Term::Node(value);
        }

        self.touched[d] = touched;
        self.assignment[d] = value;
        self.depth = d as isize + 1;
        log::trace!(target: targets::SOLVER, "assigned var {d} = {value}");
    }

    /// Undoes the substitutions made by the most recent assignment and decrements depth.
    fn unassign(&mut self) {
        if self.depth == 0 {
            self.depth = -1;
            return;
        }

        let prev = (self.depth - 1) as usize;
        for (ci, p) in self.touched[prev].drain(..) {
            *self.working[ci].iter_mut().nth(p).expect("position in range") = Term::Var(prev);
        }
        self.depth = prev as isize;
    }

    /// Computes `options[d]` (Get-Options): the candidate node values for variable `d`, given the
    /// assignments made to variables `0..d`.
    fn enter_slot(&mut self, d: usize) {
        let mut options: Option<OrderedSet<Node>> = None;

        for &ci in &self.adjacency[d] {
            let constraint = &self.working[ci];

            let mut key = [HOLE; 3];
            let mut is_var_d = [false; 3];
            for p in 0..3 {
                match constraint.at(p) {
                    Term::Node(n) => key[p] = n,
                    Term::Var(v) => is_var_d[p] = v == d,
                }
            }

            let mut contribution = OrderedSet::with_capacity(self.config.initial_candidate_capacity);
            for (a, b, c) in self.structure.lookup(key[0], key[1], key[2]) {
                let values = [a, b, c];
                let mut candidate = None;
                let mut consistent = true;
                for p in 0..3 {
                    if is_var_d[p] {
                        match candidate {
                            None => candidate = Some(values[p]),
                            Some(v) if v == values[p] => {}
                            Some(_) => {
                                consistent = false;
                                break;
                            }
                        }
                    }
                }
                if consistent {
                    if let Some(value) = candidate {
                        contribution.insert(value);
                    }
                }
            }

            options = Some(match options {
                None => contribution,
                Some(mut running) => {
                    running.retain_membership(&contribution);
                    running
                }
            });

            if options.as_ref().is_some_and(OrderedSet::is_empty) {
                break;
            }
        }

        let mut options = options.unwrap_or_else(OrderedSet::new);

        for j in 0..d {
            if !self.may_equal.permits(d, j) {
                options.remove(&self.assignment[j]);
            }
        }

        log::trace!(
            target: targets::SOLVER,
            "entered depth {d}, {} candidates",
            options.len()
        );

        self.frontier[d] = Frontier {
            options: options.iter().copied().collect(),
            cursor: 0,
        };
    }
}
