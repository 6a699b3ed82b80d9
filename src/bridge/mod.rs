/*!
The solver host bridge: a thin, value-typed adapter over [`Structure`] and [`Solver`].

This module is the external interface a rule/pattern layer is expected to consume: plain signed
integers in, plain signed integers out, with 0 meaning "hole" in a lookup key and variable `i`
encoded as `-i` in a constraint. It contains no search, indexing, or backtracking of its own ---
every method is a direct call into [`Structure`] or [`Solver`] after marshalling integers into this
crate's internal tagged types.

A host written in Rust is free to use [`Structure`]/[`Solver`] directly and skip this module
entirely; it exists for hosts that prefer (or require, e.g. across an FFI-style boundary) the raw
integer encoding instead of this crate's typed API.
*/

use crate::config::{SolverConfig, StructureConfig};
use crate::db::structure::Structure;
use crate::misc::log::targets;
use crate::solver::{MayEqual, Solver};
use crate::structures::{
    node::Node,
    term::{Constraint, Term},
};
use crate::types::err::BridgeError;

fn decode_node(v: i64) -> Result<Node, BridgeError> {
    if v < 0 {
        return Err(BridgeError::NonPositiveNode(v));
    }
    u32::try_from(v).map_err(|_| BridgeError::NodeOutOfRange(v))
}

fn decode_term(v: i64) -> Result<Term, BridgeError> {
    if v > 0 {
        let node = u32::try_from(v).map_err(|_| BridgeError::NodeOutOfRange(v))?;
        Ok(Term::Node(node))
    } else {
        Ok(Term::Var(v.unsigned_abs() as usize))
    }
}

/// A value-typed handle onto a [`Structure`], using the crate's `i64` wire encoding.
pub struct StructureHandle {
    inner: Structure,
}

impl Default for StructureHandle {
    fn default() -> Self {
        StructureHandle::new()
    }
}

impl StructureHandle {
    /// An empty structure.
    pub fn new() -> Self {
        StructureHandle {
            inner: Structure::new(),
        }
    }

    /// An empty structure, reserving initial capacity per `config`.
    pub fn with_config(config: StructureConfig) -> Self {
        StructureHandle {
            inner: Structure::with_config(config),
        }
    }

    /// Adds a fact. Every position must be a positive node.
    pub fn add_fact(&mut self, a: i64, b: i64, c: i64) -> Result<(), BridgeError> {
        let (a, b, c) = (decode_node(a)?, decode_node(b)?, decode_node(c)?);
        log::trace!(target: targets::BRIDGE, "add_fact({a}, {b}, {c})");
        self.inner.add_fact(a, b, c).map_err(BridgeError::from)
    }

    /// Removes a fact. Every position must be a positive node.
    pub fn remove_fact(&mut self, a: i64, b: i64, c: i64) -> Result<(), BridgeError> {
        let (a, b, c) = (decode_node(a)?, decode_node(b)?, decode_node(c)?);
        log::trace!(target: targets::BRIDGE, "remove_fact({a}, {b}, {c})");
        self.inner.remove_fact(a, b, c).map_err(BridgeError::from)
    }

    /// Whether a fully-ground fact is present.
    pub fn is_true(&self, a: i64, b: i64, c: i64) -> bool {
        let (Ok(a), Ok(b), Ok(c)) = (decode_node(a), decode_node(b), decode_node(c)) else {
            return false;
        };
        self.inner.is_true(a, b, c)
    }

    /// All facts matching the partial key `(a, b, c)`, where each position is either a positive
    /// node or 0 (hole).
    pub fn lookup(&self, a: i64, b: i64, c: i64) -> Vec<(i64, i64, i64)> {
        let (Ok(a), Ok(b), Ok(c)) = (decode_node(a), decode_node(b), decode_node(c)) else {
            return Vec::new();
        };
        self.inner
            .lookup(a, b, c)
            .into_iter()
            .map(|(x, y, z)| (x as i64, y as i64, z as i64))
            .collect()
    }

    /// The underlying typed structure, for hosts that want to mix the bridge and typed APIs (e.g.
    /// to construct a [`Solver`] directly rather than a [`SolverHandle`]).
    pub fn inner(&self) -> &Structure {
        &self.inner
    }
}

/// A value-typed handle onto a [`Solver`], using the crate's `i64` wire encoding.
pub struct SolverHandle<'s> {
    inner: Solver<'s>,
}

impl<'s> SolverHandle<'s> {
    /// Builds a solver against `structure`, decoding `constraints` and `may_equal` from their
    /// wire encoding.
    ///
    /// `may_equal[i]` is the set of variable indices variable `i` may share a value with; only
    /// entries for `j < i` are consulted.
    ///
    /// # Errors
    /// If any constraint position does not decode to a valid node or variable reference (e.g. a
    /// node value outside the range of [`Node`]).
    ///
    /// # Panics
    /// If `n_variables` is 0 or `may_equal.len() != n_variables` --- both contract violations in
    /// the caller.
    pub fn new(
        structure: &'s StructureHandle,
        n_variables: usize,
        constraints: &[(i64, i64, i64)],
        may_equal: &[Vec<usize>],
    ) -> Result<Self, BridgeError> {
        Self::with_config(
            structure,
            n_variables,
            constraints,
            may_equal,
            SolverConfig::default(),
        )
    }

    /// As [`new`](SolverHandle::new), reserving candidate-set capacity per `config`.
    pub fn with_config(
        structure: &'s StructureHandle,
        n_variables: usize,
        constraints: &[(i64, i64, i64)],
        may_equal: &[Vec<usize>],
        config: SolverConfig,
    ) -> Result<Self, BridgeError> {
        let constraints = constraints
            .iter()
            .map(|&(a, b, c)| {
                Ok(Constraint::new([
                    decode_term(a)?,
                    decode_term(b)?,
                    decode_term(c)?,
                ]))
            })
            .collect::<Result<Vec<_>, BridgeError>>()?;

        let rows = may_equal.iter().map(|row| row.iter().copied().collect()).collect();

        log::trace!(
            target: targets::BRIDGE,
            "solver over {} constraints, {n_variables} variables",
            constraints.len()
        );

        Ok(SolverHandle {
            inner: Solver::with_config(
                &structure.inner,
                n_variables,
                constraints,
                MayEqual::new(rows),
                config,
            ),
        })
    }

    /// Whether every fully-ground input constraint held in the structure at construction time.
    pub fn is_valid(&self) -> bool {
        self.inner.is_valid()
    }

    /// The next satisfying assignment as a sequence of node values (one per variable, in index
    /// order), or an empty vector once the search is exhausted.
    pub fn next_assignment(&mut self) -> Vec<i64> {
        match self.inner.next_assignment() {
            Some(values) => values.into_iter().map(|n| n as i64).collect(),
            None => Vec::new(),
        }
    }
}
