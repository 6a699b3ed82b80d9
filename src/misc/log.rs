/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library. No log implementation is bundled; this
crate's `log` feature pulls in [env_logger](https://docs.rs/env_logger) as an optional dependency,
and integration tests call `env_logger::init()` behind `#[cfg(feature = "log")]` at the top of a
test, mirroring this codebase's established `otter_tests` convention. An embedding application
should instead wire up whatever `log`-compatible subscriber it already uses.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [fact store](crate::db::structure).
    pub const STRUCTURE: &str = "structure";

    /// Logs related to [lookup](crate::db::structure::Structure::lookup) dispatch.
    pub const LOOKUP: &str = "lookup";

    /// Logs related to the [solver](crate::solver)'s depth-by-depth search.
    pub const SOLVER: &str = "solver";

    /// Logs related to backtracking (`UnAssign`) specifically.
    pub const BACKTRACK: &str = "backtrack";

    /// Logs related to the [bridge](crate::bridge) adapter.
    pub const BRIDGE: &str = "bridge";
}
