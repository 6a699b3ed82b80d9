/*!
The key type used to address a fact in the canonical store.

Mirrors this codebase's established pattern of wrapping a [`slotmap`] key (stable across removals
elsewhere in the map, reused only once its slot is freed) rather than indexing facts by a raw
`usize`, so the seven partial-key buckets can hold a small, copyable key instead of a duplicate of
the fact itself.
*/

slotmap::new_key_type! {
    /// A stable key into the structure's canonical fact store.
    pub struct FactKey;
}
