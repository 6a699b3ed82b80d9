//! Configuration of the fact store.

/// Capacity hints for a [`Structure`](crate::db::structure::Structure).
#[derive(Clone, Debug)]
pub struct StructureConfig {
    /// Initial capacity reserved in each of the eight buckets.
    ///
    /// A rule's working structure is typically small (tens to low thousands of facts); the
    /// default favours avoiding a handful of early reallocations over pre-committing memory for
    /// a large structure no caller asked for.
    pub initial_bucket_capacity: usize,
}

impl Default for StructureConfig {
    fn default() -> Self {
        StructureConfig {
            initial_bucket_capacity: 16,
        }
    }
}
