/*!
The indexed fact store.

  - [The structure](crate::db::structure)
    + A collection of [triplets](crate::structures::triplet::Triplet), each addressable by eight
      indices (one per subset of its three positions), supporting add, remove, exact truth
      testing, and partial-key lookup.
*/

mod keys;
pub mod structure;

pub use keys::FactKey;
