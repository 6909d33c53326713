mod common;

use common::TestDb;
use mediashelf::{
    entities::storage_slot,
    error::CatalogError,
    models::{MediaDraft, MediaId, Platform, Status},
    store::{DEFAULT_SLOT, Store},
};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

fn draft(title: &str) -> MediaDraft {
    MediaDraft {
        title: title.into(),
        year: 2020,
        description: String::new(),
        status: Status::ToWatch,
        platform: Platform::Other,
        platform_other: "Mubi".into(),
        cover: "http://x/cover.jpg".into(),
    }
}

#[tokio::test]
async fn first_load_writes_the_seed_set() {
    let test_db = TestDb::new();
    let store = test_db.store().await;

    assert!(storage_slot::Entity::find_by_id(DEFAULT_SLOT.to_string()).one(store.db()).await.unwrap().is_none());

    let items = store.load_all().await.unwrap();
    assert_eq!(items.len(), 6);
    assert_eq!(items[0].title, "Breaking Bad");

    let row = storage_slot::Entity::find_by_id(DEFAULT_SLOT.to_string())
        .one(store.db())
        .await
        .unwrap()
        .expect("seeded slot");
    let stored: serde_json::Value = serde_json::from_str(&row.document).unwrap();
    assert_eq!(stored.as_array().unwrap().len(), 6);
    assert_eq!(stored[5]["platform_other"], "Apple TV+");
    assert_eq!(stored[3]["platform"], "");
}

#[tokio::test]
async fn corrupt_document_is_reseeded() {
    let test_db = TestDb::new();
    let store = test_db.store().await;

    storage_slot::ActiveModel {
        name: Set(DEFAULT_SLOT.to_string()),
        document: Set("{not json".to_string()),
        updated_at: Set(0),
    }
    .insert(store.db())
    .await
    .unwrap();

    let items = store.load_all().await.unwrap();
    assert_eq!(items.len(), 6);

    let again = store.load_all().await.unwrap();
    assert_eq!(again, items);
}

#[tokio::test]
async fn append_assigns_id_and_matching_timestamps() {
    let test_db = TestDb::new();
    let store = test_db.store().await;
    store.initialize().await.unwrap();

    let record = store.append(draft("Aftersun")).await.unwrap();
    assert_eq!(record.created_at, record.updated_at);
    assert!(!record.id.as_str().is_empty());

    let items = store.load_all().await.unwrap();
    assert_eq!(items.len(), 7);
    assert_eq!(items.last(), Some(&record));
    assert_eq!(items.iter().filter(|r| r.id == record.id).count(), 1);
}

#[tokio::test]
async fn replace_keeps_identity_and_advances_updated_at() {
    let test_db = TestDb::new();
    let store = test_db.store().await;
    let original = store.append(draft("Aftersun")).await.unwrap();

    let updated = store
        .replace(&original.id, |record| {
            record.id = MediaId::from("hijacked");
            record.created_at = jiff::Timestamp::UNIX_EPOCH;
            record.status = Status::Watched;
            Ok(())
        })
        .await
        .unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at > original.updated_at);
    assert_eq!(updated.status, Status::Watched);
}

#[tokio::test]
async fn failed_mutator_writes_nothing() {
    let test_db = TestDb::new();
    let store = test_db.store().await;
    let before = store.load_all().await.unwrap();

    let err = store
        .replace(&before[0].id, |record| {
            record.title = "changed".into();
            Err(CatalogError::NotFound(MediaId::from("x")))
        })
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));

    assert_eq!(store.load_all().await.unwrap(), before);
}

#[tokio::test]
async fn replace_unknown_id_is_not_found() {
    let test_db = TestDb::new();
    let store = test_db.store().await;

    let err = store.replace(&MediaId::from("missing"), |_| Ok(())).await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(id) if id.as_str() == "missing"));
}

#[tokio::test]
async fn remove_reports_whether_anything_was_removed() {
    let test_db = TestDb::new();
    let store = test_db.store().await;
    store.initialize().await.unwrap();

    assert!(store.remove(&MediaId::from("3")).await.unwrap());
    assert!(!store.remove(&MediaId::from("3")).await.unwrap());

    let ids: Vec<String> =
        store.load_all().await.unwrap().iter().map(|r| r.id.to_string()).collect();
    assert_eq!(ids, ["1", "2", "4", "5", "6"]);
}

#[tokio::test]
async fn slots_are_independent() {
    let test_db = TestDb::new();
    let first = test_db.store().await;
    let second = Store::with_slot(first.db().clone(), "archive");

    first.append(draft("Aftersun")).await.unwrap();

    assert_eq!(first.load_all().await.unwrap().len(), 7);
    assert_eq!(second.load_all().await.unwrap().len(), 6);
}
