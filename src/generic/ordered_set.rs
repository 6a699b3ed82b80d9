/*!
An insertion-ordered set.

Plain `HashSet` iteration order is not guaranteed stable across runs of the same program (nor,
depending on the hasher, across different processes). The solver's enumeration order is required
to be deterministic for a given (structure, constraints, `may_equal`) tuple (see
[`crate::solver`]), so candidate sets are built and intersected with an [`OrderedSet`] instead:
membership tests are `HashSet`-backed, but iteration always replays first-insertion order.

```rust
# use triplet_core::generic::ordered_set::OrderedSet;
let mut first = OrderedSet::from_iter([3, 1, 3, 2]);
assert_eq!(first.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);

let second = OrderedSet::from_iter([2, 1]);
first.retain_membership(&second);
assert_eq!(first.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
```
*/

use std::collections::HashSet;
use std::hash::Hash;

/// A set which iterates in first-insertion order, regardless of hash order.
#[derive(Clone, Debug, Default)]
pub struct OrderedSet<T> {
    order: Vec<T>,
    members: HashSet<T>,
}

impl<T: Eq + Hash + Copy> OrderedSet<T> {
    /// An empty set.
    pub fn new() -> Self {
        OrderedSet {
            order: Vec::new(),
            members: HashSet::new(),
        }
    }

    /// An empty set with room for `capacity` elements before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedSet {
            order: Vec::with_capacity(capacity),
            members: HashSet::with_capacity(capacity),
        }
    }

    /// Inserts `value`, preserving first-insertion order. Returns whether the value was fresh.
    pub fn insert(&mut self, value: T) -> bool {
        if self.members.insert(value) {
            self.order.push(value);
            true
        } else {
            false
        }
    }

    /// Builds a set from an iterator, in first-occurrence order, silently dropping duplicates.
    pub fn from_iter(iter: impl IntoIterator<Item = T>) -> Self {
        let mut set = OrderedSet::new();
        for value in iter {
            set.insert(value);
        }
        set
    }

    /// Whether `value` is a member.
    pub fn contains(&self, value: &T) -> bool {
        self.members.contains(value)
    }

    /// The number of members.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// An iterator over members in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter()
    }

    /// Removes every member not present in `other`, preserving `self`'s relative order.
    ///
    /// This is set intersection, but keeping `self`'s order rather than `other`'s --- used by
    /// [`Get-Options`](crate::solver) to keep the order established by the first constraint a
    /// variable is adjacent to.
    pub fn retain_membership(&mut self, other: &OrderedSet<T>) {
        self.order.retain(|value| other.members.contains(value));
        self.members.retain(|value| other.members.contains(value));
    }

    /// Removes `value`, if present.
    pub fn remove(&mut self, value: &T) -> bool {
        if self.members.remove(value) {
            self.order.retain(|v| v != value);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::OrderedSet;

    #[test]
    fn insertion_order_survives_intersection() {
        let mut a = OrderedSet::from_iter([5, 1, 4, 2]);
        let b = OrderedSet::from_iter([2, 5]);
        a.retain_membership(&b);
        assert_eq!(a.iter().copied().collect::<Vec<_>>(), vec![5, 2]);
    }

    #[test]
    fn duplicates_collapse() {
        let set = OrderedSet::from_iter([1, 1, 1]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut set = OrderedSet::from_iter([3, 1, 2]);
        assert!(set.remove(&1));
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![3, 2]);
        assert!(!set.remove(&1));
    }
}
