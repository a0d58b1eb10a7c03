//! High-level database service layer.
//!
//! This module provides repository-agnostic operations that work with any
//! implementation of [`CounterRepository`]. Business rules that must hold
//! regardless of the storage backend live here, most notably the
//! non-negativity constraint on the counter value.

use log::info;

use super::repository::{CounterRepository, RepositoryError, RepositoryResult};

// ==================== Health & Connection ====================

/// Check if the database connection is healthy.
///
/// This is a simple pass-through to the repository's health check.
pub async fn health_check<R: CounterRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Counter Operations ====================

/// Read the current counter value.
///
/// # Arguments
/// * `repo` - Repository implementation
///
/// # Returns
/// * `Ok(i64)` - The stored value
/// * `Err(RepositoryError)` - If the read fails
pub async fn get_counter<R: CounterRepository + ?Sized>(repo: &R) -> RepositoryResult<i64> {
    repo.fetch_counter().await
}

/// Overwrite the counter with a new value.
///
/// The counter is constrained to non-negative values; a negative input is
/// rejected before touching storage.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `value` - The new counter value (must be >= 0)
///
/// # Returns
/// * `Ok(())` on success
/// * `Err(RepositoryError::ValidationError)` if `value` is negative
/// * `Err(RepositoryError)` if the update fails
pub async fn set_counter<R: CounterRepository + ?Sized>(
    repo: &R,
    value: i64,
) -> RepositoryResult<()> {
    if value < 0 {
        return Err(RepositoryError::ValidationError(
            "value must be greater than or equal to 0".to_string(),
        ));
    }

    repo.store_counter(value).await?;
    info!("counter set to {}", value);
    Ok(())
}
