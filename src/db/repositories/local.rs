//! In-memory local repository implementation.
//!
//! This module provides a local implementation of the repository trait
//! suitable for unit testing and local development. The counter lives behind
//! an `RwLock`, giving fast, deterministic, and isolated execution with no
//! external services.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::db::repository::{CounterRepository, RepositoryError, RepositoryResult};

/// In-memory local repository.
///
/// Stores the counter value in process memory, making it ideal for unit
/// tests and local development runs that need isolation and speed. Fresh
/// instances start seeded at zero, mirroring the seeded state of a freshly
/// initialized database.
///
/// # Example
/// ```
/// use counter_api::db::repositories::LocalRepository;
/// use counter_api::db::repository::CounterRepository;
///
/// #[tokio::main]
/// async fn main() {
///     let repo = LocalRepository::new();
///     assert_eq!(repo.fetch_counter().await.unwrap(), 0);
/// }
/// ```
#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    value: i64,
    // Connection health, togglable from tests
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            value: 0,
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new local repository seeded with a counter value of zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a local repository pre-seeded with a specific value.
    pub fn with_value(value: i64) -> Self {
        let repo = Self::new();
        repo.data.write().value = value;
        repo
    }

    /// Toggle the simulated connection health (for tests).
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    fn check_healthy(&self) -> RepositoryResult<()> {
        if self.data.read().is_healthy {
            Ok(())
        } else {
            Err(RepositoryError::ConnectionError(
                "simulated connection failure".to_string(),
            ))
        }
    }
}

#[async_trait]
impl CounterRepository for LocalRepository {
    async fn fetch_counter(&self) -> RepositoryResult<i64> {
        self.check_healthy()?;
        Ok(self.data.read().value)
    }

    async fn store_counter(&self, value: i64) -> RepositoryResult<()> {
        self.check_healthy()?;
        self.data.write().value = value;
        Ok(())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        self.check_healthy()?;
        Ok(true)
    }
}
