/*!
Triplets, aka. 3-ary facts: an ordered tuple of three [nodes](super::node::Node), interpreted as a
single atomic statement. Order is significant --- `(a, b, c)` and `(b, a, c)` are distinct facts.

```rust
# use triplet_core::structures::triplet::Triplet;
let fact = Triplet::new(1, 2, 3);
assert_eq!(fact, Triplet::new(1, 2, 3));
assert_ne!(fact, Triplet::new(2, 1, 3));
```
*/

use super::node::Node;

/// An ordered 3-tuple of nodes, stored atomically.
///
/// A `Triplet` makes no claim about whether its nodes are non-zero; that invariant is enforced at
/// the point a `Triplet` is handed to [`Structure::add_fact`](crate::db::structure::Structure::add_fact),
/// not by this type.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Triplet {
    /// The first position of the fact.
    pub a: Node,
    /// The second position of the fact.
    pub b: Node,
    /// The third position of the fact.
    pub c: Node,
}

impl Triplet {
    /// Builds a fact from its three positions.
    pub fn new(a: Node, b: Node, c: Node) -> Self {
        Triplet { a, b, c }
    }

    /// The fact as a plain 3-tuple.
    pub fn as_tuple(&self) -> (Node, Node, Node) {
        (self.a, self.b, self.c)
    }

    /// The value at `position` (0, 1, or 2).
    ///
    /// # Panics
    /// If `position` is not 0, 1, or 2.
    pub fn at(&self, position: usize) -> Node {
        match position {
            0 => self.a,
            1 => self.b,
            2 => self.c,
            _ => panic!("triplet position out of range: {position}"),
        }
    }
}

impl From<(Node, Node, Node)> for Triplet {
    fn from((a, b, c): (Node, Node, Node)) -> Self {
        Triplet::new(a, b, c)
    }
}

impl From<Triplet> for (Node, Node, Node) {
    fn from(t: Triplet) -> Self {
        t.as_tuple()
    }
}
