//! Citizen Store
//!
//! Narrow storage contract for citizens, plus the in-memory backend.

mod memory;

pub use memory::InMemoryCitizenStore;

use crate::aggregate::Citizen;

/// Key-value mapping from citizen ID to citizen.
///
/// Duplicate detection is the caller's job; `insert` overwrites.
pub trait CitizenStore {
    /// Insert or replace a citizen, returning the previous value
    fn insert(&mut self, citizen: Citizen) -> Option<Citizen>;

    /// Look up a citizen by exact ID
    fn get(&self, id: &str) -> Option<&Citizen>;

    /// Mutable lookup, for applying events
    fn get_mut(&mut self, id: &str) -> Option<&mut Citizen>;

    /// All citizens in store iteration order
    fn list(&self) -> Vec<&Citizen>;

    /// Number of stored citizens
    fn count(&self) -> usize;

    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}
