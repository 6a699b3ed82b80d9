/*!
Error types used in the library.

These are almost all contract violations --- fatal programmer errors rather than recoverable data
errors (the one genuine "no solution" case, exhaustion, is not an error at all; see
[`solver`](crate::solver)).
*/

/// Errors raised by the [fact store](crate::db::structure::Structure).
///
/// Each of these is a contract violation: the caller asked for something the store's invariants
/// forbid. None of these are expected during normal operation of a well-behaved rule layer;
/// callers that cannot otherwise guarantee the precondition should treat a non-`Ok` result as
/// fatal (`.expect(...)`) rather than attempt recovery.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StructureError {
    /// A node position of 0 was supplied where a concrete node is required.
    ///
    /// 0 is reserved as the "hole" marker in lookup keys and must never be stored.
    ZeroNode,

    /// [`add_fact`](crate::db::structure::Structure::add_fact) was called with a fact already
    /// present in the structure.
    DuplicateFact,

    /// [`remove_fact`](crate::db::structure::Structure::remove_fact) was called with a fact not
    /// present in the structure.
    MissingFact,
}

impl std::fmt::Display for StructureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StructureError::ZeroNode => write!(f, "0 is not a valid node"),
            StructureError::DuplicateFact => write!(f, "fact is already present"),
            StructureError::MissingFact => write!(f, "fact is not present"),
        }
    }
}

impl std::error::Error for StructureError {}

/// Errors raised while decoding a [bridge](crate::bridge) integer into an internal type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BridgeError {
    /// A node position was non-positive where a concrete node is required.
    NonPositiveNode(i64),

    /// A node value did not fit in the range of [`Node`](crate::structures::node::Node).
    NodeOutOfRange(i64),

    /// The underlying structure rejected the operation.
    Structure(StructureError),
}

impl std::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BridgeError::NonPositiveNode(v) => write!(f, "{v} is not a positive node"),
            BridgeError::NodeOutOfRange(v) => write!(f, "{v} does not fit in a node"),
            BridgeError::Structure(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for BridgeError {}

impl From<StructureError> for BridgeError {
    fn from(e: StructureError) -> Self {
        BridgeError::Structure(e)
    }
}
