use todo_api::{TodoPayload, TodoStore};

async fn mem_store() -> TodoStore {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    let store = TodoStore::new(pool);
    store.initialize().await.unwrap();
    store
}

fn payload(item: &str, complete: bool) -> TodoPayload {
    TodoPayload {
        item: Some(item.to_string()),
        complete,
    }
}

#[tokio::test]
async fn initialize_seeds_three_rows() {
    let store = mem_store().await;
    let mut rows = store.list_all().await.unwrap();
    rows.sort_by_key(|t| t.id);

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].id, 1);
    assert_eq!(rows[0].item.as_deref(), Some("Do this"));
    assert_eq!(rows[1].id, 2);
    assert_eq!(rows[1].item.as_deref(), Some("Do that"));
    assert_eq!(rows[2].id, 3);
    assert_eq!(rows[2].item.as_deref(), Some("Do something else"));
    assert!(rows.iter().all(|t| !t.complete));
}

#[tokio::test]
async fn initialize_again_is_noop() {
    let store = mem_store().await;
    store.initialize().await.unwrap();

    assert_eq!(store.list_all().await.unwrap().len(), 3);
}

#[tokio::test]
async fn initialize_does_not_resurrect_deleted_seed() {
    let store = mem_store().await;
    assert!(store.delete(1).await.unwrap());

    store.initialize().await.unwrap();
    assert!(store.get(1).await.unwrap().is_none());
    assert_eq!(store.list_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn create_assigns_ids_after_seeds() {
    let store = mem_store().await;
    let first = store.create(&payload("First", false)).await.unwrap();
    let second = store.create(&payload("Second", true)).await.unwrap();

    assert_eq!(first.id, 4);
    assert_eq!(second.id, 5);
}

#[tokio::test]
async fn get_after_create_matches_payload() {
    let store = mem_store().await;
    let created = store.create(&payload("Buy milk", false)).await.unwrap();

    let fetched = store.get(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.item.as_deref(), Some("Buy milk"));
    assert!(!fetched.complete);
}

#[tokio::test]
async fn get_missing_returns_none() {
    let store = mem_store().await;
    assert!(store.get(999).await.unwrap().is_none());
}

#[tokio::test]
async fn update_overwrites_fields_and_preserves_id() {
    let store = mem_store().await;
    let updated = store
        .update(2, &payload("Done deal", true))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, 2);
    assert_eq!(updated.item.as_deref(), Some("Done deal"));
    assert!(updated.complete);

    let fetched = store.get(2).await.unwrap().unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn update_can_clear_item() {
    let store = mem_store().await;
    let updated = store
        .update(
            1,
            &TodoPayload {
                item: None,
                complete: false,
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert!(updated.item.is_none());
}

#[tokio::test]
async fn update_missing_returns_none_and_leaves_rows() {
    let store = mem_store().await;
    let result = store.update(999, &payload("Nope", true)).await.unwrap();
    assert!(result.is_none());

    let rows = store.list_all().await.unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|t| !t.complete));
}

#[tokio::test]
async fn delete_then_get_returns_none() {
    let store = mem_store().await;
    assert!(store.delete(1).await.unwrap());
    assert!(store.get(1).await.unwrap().is_none());
    assert_eq!(store.list_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn delete_missing_returns_false() {
    let store = mem_store().await;
    assert!(!store.delete(999).await.unwrap());
    assert_eq!(store.list_all().await.unwrap().len(), 3);
}
