//! Unit tests for the comment log service

use chrono::Utc;

use crate::errors::DomainError;
use crate::services::test_support::{hours, World};

#[tokio::test]
async fn test_comment_only_after_rental_ends() {
    let world = World::new().await;
    let service = world.comments();
    let now = Utc::now();
    let (drill, bob) = (world.drill.id, world.bob.id);

    world.insert_booking(drill, bob, hours(now, -1), hours(now, 1), Some(true)).await;

    let early = service.add_comment_at(drill, bob, "Great", now).await;
    assert!(matches!(early, Err(DomainError::Validation { .. })));
    assert!(service.list_by_item(drill).await.unwrap().is_empty());

    let later = hours(now, 2);
    let view = service.add_comment_at(drill, bob, "Great", later).await.unwrap();
    assert_eq!(view.author_name, "Bob");
    assert_eq!(view.text, "Great");
    assert_eq!(view.created, later);

    let listed = service.list_by_item(drill).await.unwrap();
    assert_eq!(listed, vec![view]);
}

#[tokio::test]
async fn test_comment_at_exact_end_is_allowed() {
    let world = World::new().await;
    let now = Utc::now();
    let end = hours(now, -1);

    world
        .insert_booking(world.drill.id, world.bob.id, hours(now, -2), end, None)
        .await;

    let view = world
        .comments()
        .add_comment_at(world.drill.id, world.bob.id, "Fine", end)
        .await
        .unwrap();
    assert_eq!(view.item_id, world.drill.id);
}

#[tokio::test]
async fn test_comment_without_booking_fails() {
    let world = World::new().await;
    let result = world.comments().add_comment(world.drill.id, world.bob.id, "Never used it").await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));
}

#[tokio::test]
async fn test_comment_missing_author_or_item() {
    let world = World::new().await;
    let service = world.comments();

    let no_author = service.add_comment(world.drill.id, 404, "x").await;
    assert!(matches!(no_author, Err(DomainError::NotFound { ref resource, .. }) if resource == "User"));

    let no_item = service.add_comment(404, world.bob.id, "x").await;
    assert!(matches!(no_item, Err(DomainError::NotFound { ref resource, .. }) if resource == "Item"));
}

#[tokio::test]
async fn test_list_by_owner() {
    let world = World::new().await;
    let service = world.comments();
    let now = Utc::now();

    world
        .insert_booking(world.drill.id, world.bob.id, hours(now, -3), hours(now, -2), Some(true))
        .await;
    service.add_comment_at(world.drill.id, world.bob.id, "First", now).await.unwrap();
    service
        .add_comment_at(world.drill.id, world.bob.id, "Second", hours(now, 1))
        .await
        .unwrap();

    let texts: Vec<String> = service
        .list_by_owner(world.alice.id)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.text)
        .collect();
    assert_eq!(texts, vec!["First", "Second"]);
    assert!(service.list_by_owner(world.bob.id).await.unwrap().is_empty());
}
