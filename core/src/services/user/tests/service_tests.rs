//! Unit tests for the user directory service

use std::sync::Arc;

use crate::domain::entities::UserPatch;
use crate::errors::DomainError;
use crate::repositories::MockUserRepository;
use crate::services::UserService;

fn service() -> UserService<MockUserRepository> {
    UserService::new(Arc::new(MockUserRepository::new()))
}

fn patch(name: Option<&str>, email: Option<&str>) -> UserPatch {
    UserPatch {
        name: name.map(str::to_string),
        email: email.map(str::to_string),
    }
}

#[tokio::test]
async fn test_create_user() {
    let service = service();

    let user = service.create_user("Alice", "a@x.com").await.unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.name, "Alice");

    let blank = service.create_user(" ", "b@x.com").await.unwrap();
    assert_eq!(blank.name, "b@x.com");
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    let service = service();
    service.create_user("Alice", "a@x.com").await.unwrap();

    let result = service.create_user("Other", "a@x.com").await;
    assert!(matches!(result, Err(DomainError::Conflict { .. })));
}

#[tokio::test]
async fn test_update_name_only() {
    let service = service();
    let user = service.create_user("Alice", "a@x.com").await.unwrap();

    let updated = service.update_user(user.id, patch(Some("Alicia"), None)).await.unwrap();
    assert_eq!(updated.name, "Alicia");
    assert_eq!(updated.email, "a@x.com");
}

#[tokio::test]
async fn test_update_to_own_email_succeeds() {
    let service = service();
    let user = service.create_user("Alice", "a@x.com").await.unwrap();

    let updated = service.update_user(user.id, patch(None, Some("a@x.com"))).await.unwrap();
    assert_eq!(updated, user);
}

#[tokio::test]
async fn test_update_to_taken_email_conflicts() {
    let service = service();
    let alice = service.create_user("Alice", "a@x.com").await.unwrap();
    service.create_user("Bob", "b@x.com").await.unwrap();

    let result = service.update_user(alice.id, patch(None, Some("b@x.com"))).await;
    assert!(matches!(result, Err(DomainError::Conflict { .. })));

    let unchanged = service.get_user(alice.id).await.unwrap();
    assert_eq!(unchanged.email, "a@x.com");
}

#[tokio::test]
async fn test_email_change_without_name_resets_name() {
    let service = service();
    let user = service.create_user("Alice", "a@x.com").await.unwrap();

    let updated = service.update_user(user.id, patch(None, Some("new@x.com"))).await.unwrap();
    assert_eq!(updated.email, "new@x.com");
    assert_eq!(updated.name, "new@x.com");

    let named = service
        .update_user(user.id, patch(Some("Al"), Some("al@x.com")))
        .await
        .unwrap();
    assert_eq!(named.name, "Al");
    assert_eq!(named.email, "al@x.com");
}

#[tokio::test]
async fn test_missing_user_operations() {
    let service = service();

    assert!(matches!(service.get_user(7).await, Err(DomainError::NotFound { .. })));
    assert!(matches!(service.delete_user(7).await, Err(DomainError::NotFound { .. })));
    assert!(matches!(
        service.update_user(7, UserPatch::default()).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_delete_and_list() {
    let service = service();
    let alice = service.create_user("Alice", "a@x.com").await.unwrap();
    let bob = service.create_user("Bob", "b@x.com").await.unwrap();

    service.delete_user(alice.id).await.unwrap();

    let users = service.list_users().await.unwrap();
    assert_eq!(users, vec![bob]);
}
