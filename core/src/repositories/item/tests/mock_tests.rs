//! Unit tests for mock item repository

use crate::domain::entities::{Item, ItemPatch};
use crate::repositories::item::{ItemRepository, MockItemRepository};

#[tokio::test]
async fn test_mock_repository_create_and_find_by_owner() {
    let repo = MockItemRepository::new();

    let drill = repo.create(Item::new(1, "Drill", "Cordless", true)).await.unwrap();
    repo.create(Item::new(2, "Saw", "Hand saw", true)).await.unwrap();
    let ladder = repo.create(Item::new(1, "Ladder", "Three metres", false)).await.unwrap();

    let owned = repo.find_by_owner(1).await.unwrap();
    assert_eq!(owned, vec![drill, ladder]);
    assert!(repo.find_by_owner(3).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_mock_repository_search_available_only() {
    let repo = MockItemRepository::new();

    let drill = repo.create(Item::new(1, "Drill", "Cordless", true)).await.unwrap();
    repo.create(Item::new(1, "Hammer drill", "Heavy", false)).await.unwrap();
    let bits = repo.create(Item::new(1, "Bits", "For any DRILL", true)).await.unwrap();

    let found = repo.search_available("dRiLl").await.unwrap();
    assert_eq!(found, vec![drill, bits]);
}

#[tokio::test]
async fn test_mock_repository_update() {
    let repo = MockItemRepository::new();
    let mut drill = repo.create(Item::new(1, "Drill", "Cordless", true)).await.unwrap();

    drill.apply(ItemPatch {
        available: Some(false),
        ..ItemPatch::default()
    });
    repo.update(drill.clone()).await.unwrap();

    let stored = repo.find_by_id(drill.id).await.unwrap().unwrap();
    assert!(!stored.available);
    assert_eq!(stored.name, "Drill");
}
