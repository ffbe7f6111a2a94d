//! Integration tests for repository configuration and creation.

use psa_rust::db::{RepositoryFactory, RepositoryType};

#[test]
fn test_repository_type_parses_known_names() {
    assert_eq!("local".parse::<RepositoryType>(), Ok(RepositoryType::Local));
    assert_eq!("LOCAL".parse::<RepositoryType>(), Ok(RepositoryType::Local));
    assert_eq!("memory".parse::<RepositoryType>(), Ok(RepositoryType::Local));
    assert!("postgres".parse::<RepositoryType>().is_err());
    assert!("".parse::<RepositoryType>().is_err());
}

#[tokio::test]
async fn test_factory_creates_a_healthy_local_repository() {
    let repo = RepositoryFactory::create(RepositoryType::Local).expect("create local repository");
    assert!(repo.health_check().await.unwrap());
}

#[tokio::test]
async fn test_create_local_returns_a_seedable_handle() {
    let local = RepositoryFactory::create_local();
    assert_eq!(local.snapshot_count(), 0);
}
