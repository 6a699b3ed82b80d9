/*!
(The representation of) a node, aka. an opaque identity in a structure.

A node is a u32 *n* such that *n* is strictly positive. There is no interning here: identity and
any human-readable meaning of a node are entirely the responsibility of the caller (e.g. a rule/DSL
layer built on top of this crate) --- the structure only ever compares nodes for equality.

```rust
# use triplet_core::structures::node::{Node, is_valid};
let a: Node = 1;
let b: Node = 2;
assert!(is_valid(a) && is_valid(b));
assert!(!is_valid(0));
```
*/

/// A node: an opaque positive-integer identity.
///
/// Represented as a bare alias rather than a newtype, matching this library's convention for
/// hot-path identifiers (see [`structures::triplet::Triplet`](crate::structures::triplet::Triplet)):
/// validation happens at the handful of API boundaries that can observe an unvalidated value
/// (`add_fact`, `remove_fact`, the [bridge](crate::bridge)'s integer decoding), not on every use.
pub type Node = u32;

/// The reserved "hole"/"any" marker used in lookup keys. Never a valid stored node.
pub const HOLE: Node = 0;

/// Whether `node` may legally be stored in a structure (i.e. is not the reserved hole value).
pub fn is_valid(node: Node) -> bool {
    node != HOLE
}
