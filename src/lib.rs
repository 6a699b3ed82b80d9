/*!
A library for storing 3-ary facts over opaque integer nodes and enumerating the satisfying
assignments of constraint templates over those facts.

triplet_core is the core of an analogy-making engine: a [structure][db::structure] holding a
labeled, directed hypergraph of facts, and a [solver] performing backtracking search over
constraint templates matched against that structure. The two are used together by a rule layer
(not part of this crate) which compiles rule patterns into constraint programs, drives a solver
to completion, and converts the resulting assignments into edits on the structure.

# Orientation

- The [`db::structure::Structure`] is the fact store: [`add_fact`](db::structure::Structure::add_fact),
  [`remove_fact`](db::structure::Structure::remove_fact), [`is_true`](db::structure::Structure::is_true),
  [`all_true`](db::structure::Structure::all_true), and the central
  [`lookup`](db::structure::Structure::lookup).
- The [`solver::Solver`] enumerates assignments satisfying a list of
  [`structures::term::Constraint`]s against a borrowed structure.
- [`bridge`] is the thin, integer-marshalling adapter a host rule layer is expected to use instead
  of the richer internal types.

# Example

```rust
use triplet_core::{
    db::structure::Structure,
    solver::{MayEqual, Solver},
    structures::term::{Constraint, Term},
};

let mut structure = Structure::new();
structure.add_fact(1, 2, 3).unwrap(); // (A, X, R)
structure.add_fact(4, 2, 3).unwrap(); // (B, X, R)

// (?0, X, R) with ?0 distinct from itself only (n = 1).
let constraints = vec![Constraint::new([Term::Var(0), Term::Node(2), Term::Node(3)])];
let may_equal = MayEqual::distinct(1);

let mut solver = Solver::new(&structure, 1, constraints, may_equal);
assert!(solver.is_valid());

let mut found = Vec::new();
while let Some(assignment) = solver.next_assignment() {
    found.push(assignment);
}
found.sort();
assert_eq!(found, vec![vec![1], vec![4]]);
```

# Logs

Calls to [log!](log) are made at a handful of targets defined in [misc::log], one per subsystem,
so output can be filtered with e.g. `RUST_LOG=solver=trace`. No logging backend is bundled; enable
this crate's `log` feature to pull in [env_logger](https://docs.rs/env_logger) as an optional
dependency and call `env_logger::init()` behind `#[cfg(feature = "log")]` (as this crate's own
integration tests do), or wire up any other `log`-compatible subscriber in an embedding
application.
*/

#![allow(clippy::needless_range_loop)]

pub mod bridge;
pub mod config;
pub mod db;
pub mod generic;
pub mod misc;
pub mod solver;
pub mod structures;
pub mod types;
