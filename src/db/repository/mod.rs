//! Repository trait definition for counter storage.
//!
//! The trait abstracts the persistence of the single counter value so that
//! the service layer and HTTP handlers work identically against the Postgres
//! backend and the in-memory backend.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations

pub mod error;

pub use error::{RepositoryError, RepositoryResult};

use async_trait::async_trait;

/// Repository trait for counter operations.
///
/// The storage holds exactly one logical counter value. Implementations keep
/// it addressable by a fixed identity so that reads are unambiguous and
/// restarts never multiply rows.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait CounterRepository: Send + Sync {
    /// Fetch the current counter value.
    ///
    /// # Returns
    /// * `Ok(i64)` - The stored value
    /// * `Err(RepositoryError)` - If the row is missing or the query fails
    async fn fetch_counter(&self) -> RepositoryResult<i64>;

    /// Overwrite the counter with a new value.
    ///
    /// # Arguments
    /// * `value` - The value to store (already validated by the caller)
    ///
    /// # Returns
    /// * `Ok(())` on success
    /// * `Err(RepositoryError)` - If the update fails
    async fn store_counter(&self, value: i64) -> RepositoryResult<()>;

    /// Check if the storage backend is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
