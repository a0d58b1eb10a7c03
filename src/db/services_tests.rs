//! Unit tests for the database service layer against the local repository.

use crate::db::repositories::LocalRepository;
use crate::db::repository::RepositoryError;
use crate::db::services;

#[tokio::test]
async fn test_fresh_repository_reads_zero() {
    let repo = LocalRepository::new();
    let value = services::get_counter(&repo).await.unwrap();
    assert_eq!(value, 0);
}

#[tokio::test]
async fn test_set_then_get_round_trip() {
    let repo = LocalRepository::new();
    services::set_counter(&repo, 42).await.unwrap();
    assert_eq!(services::get_counter(&repo).await.unwrap(), 42);
}

#[tokio::test]
async fn test_set_overwrites_previous_value() {
    let repo = LocalRepository::new();
    services::set_counter(&repo, 7).await.unwrap();
    services::set_counter(&repo, 3).await.unwrap();
    assert_eq!(services::get_counter(&repo).await.unwrap(), 3);
}

#[tokio::test]
async fn test_negative_value_is_rejected() {
    let repo = LocalRepository::new();
    let err = services::set_counter(&repo, -1).await.unwrap_err();
    match err {
        RepositoryError::ValidationError(msg) => {
            assert_eq!(msg, "value must be greater than or equal to 0");
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_rejected_value_leaves_storage_unchanged() {
    let repo = LocalRepository::new();
    services::set_counter(&repo, 9).await.unwrap();
    let _ = services::set_counter(&repo, -5).await;
    assert_eq!(services::get_counter(&repo).await.unwrap(), 9);
}

#[tokio::test]
async fn test_zero_is_a_valid_value() {
    let repo = LocalRepository::new();
    services::set_counter(&repo, 5).await.unwrap();
    services::set_counter(&repo, 0).await.unwrap();
    assert_eq!(services::get_counter(&repo).await.unwrap(), 0);
}

#[tokio::test]
async fn test_health_check_passes_through() {
    let repo = LocalRepository::new();
    assert!(services::health_check(&repo).await.unwrap());

    repo.set_healthy(false);
    assert!(services::health_check(&repo).await.is_err());
}
