/*!
Configuration.

Configuration here is purely about allocation behavior --- capacity hints for the structure's
buckets and the solver's per-depth candidate buffers. It does not affect solver *semantics*: the
enumeration order and determinism contract (see [`crate::solver`]) are structural, not tunable.

Mirrors this codebase's convention of a top-level [`Config`] composed of one config struct per
subsystem.
*/

mod solver;
mod structure;

pub use solver::SolverConfig;
pub use structure::StructureConfig;

/// Top-level configuration, composed of one config struct per subsystem.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Configuration of the [fact store](crate::db::structure::Structure).
    pub structure: StructureConfig,

    /// Configuration of the [solver](crate::solver::Solver).
    pub solver: SolverConfig,
}
