//! Round-trips through `PgTodoStore` against a live server.
//! Run with `DATABASE_URL=postgres://... cargo test --test postgres -- --ignored`.

use todo_service::{ensure_database_exists, ensure_todo_table, AppError, PgTodoStore, Todo, TodoStore};

async fn store() -> PgTodoStore {
    let url = std::env::var("DATABASE_URL").unwrap_or_else(|_| "postgres://localhost/todos_test".into());
    ensure_database_exists(&url).await.unwrap();
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .unwrap();
    ensure_todo_table(&pool).await.unwrap();
    PgTodoStore::new(pool)
}

#[tokio::test]
#[ignore = "needs a PostgreSQL server"]
async fn insert_update_delete_round_trip() {
    let store = store().await;

    let created = store.save(Todo::new("Buy milk", "2%")).await.unwrap();
    let id = created.id.unwrap();
    assert_eq!(created.title, "Buy milk");
    assert!(!created.completed);

    let mut changed = created.clone();
    changed.completed = true;
    changed.description = "whole".into();
    let saved = store.save(changed.clone()).await.unwrap();
    assert_eq!(saved, changed);
    assert_eq!(store.find_by_id(id).await.unwrap(), Some(changed));
    assert!(store.find_all().await.unwrap().iter().any(|t| t.id == Some(id)));

    store.delete(&saved).await.unwrap();
    assert_eq!(store.find_by_id(id).await.unwrap(), None);

    let err = store.save(saved).await.unwrap_err();
    assert!(matches!(err, AppError::Db(sqlx::Error::RowNotFound)));
}

#[tokio::test]
#[ignore = "needs a PostgreSQL server"]
async fn inserted_ids_are_distinct() {
    let store = store().await;
    let a = store.save(Todo::new("a", "")).await.unwrap();
    let b = store.save(Todo::new("b", "")).await.unwrap();
    assert_ne!(a.id, b.id);
    store.delete(&a).await.unwrap();
    store.delete(&b).await.unwrap();
}

#[tokio::test]
#[ignore = "needs a PostgreSQL server"]
async fn ping_succeeds() {
    store().await.ping().await.unwrap();
}
