//! Unit tests for the in-memory verification store

use ev_core::services::verification::VerificationStoreTrait;

use crate::cache::MemoryStore;
use crate::test_support::LogCapture;

#[tokio::test]
async fn test_store_and_get() {
    let store = MemoryStore::new();

    store.store_code("a@x.com", "12345", 600).await.unwrap();

    let code = store.get_code("a@x.com").await.unwrap();
    assert_eq!(code, Some("12345".to_string()));
}

#[tokio::test]
async fn test_get_missing_returns_none() {
    let store = MemoryStore::new();

    let code = store.get_code("missing@x.com").await.unwrap();
    assert_eq!(code, None);
}

#[tokio::test]
async fn test_store_overwrites_existing_entry() {
    let store = MemoryStore::new();

    store.store_code("a@x.com", "11111", 600).await.unwrap();
    store.store_code("a@x.com", "22222", 600).await.unwrap();

    let code = store.get_code("a@x.com").await.unwrap();
    assert_eq!(code, Some("22222".to_string()));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_expired_entry_is_absent_and_evicted() {
    let store = MemoryStore::new();

    store.store_code("a@x.com", "12345", 0).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    // Entry still physically present before the read
    assert_eq!(store.len().await, 1);

    let code = store.get_code("a@x.com").await.unwrap();
    assert_eq!(code, None);

    // Lazy eviction removed it on read
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_entry_at_expiry_instant_is_absent() {
    let store = MemoryStore::new();

    // A zero TTL expires at the store instant; no grace tick
    store.store_code("a@x.com", "12345", 0).await.unwrap();

    let code = store.get_code("a@x.com").await.unwrap();
    assert_eq!(code, None);
}

#[tokio::test]
async fn test_eviction_log_masks_address() {
    let capture = LogCapture::default();
    let _guard = tracing::subscriber::set_default(capture.subscriber());

    let store = MemoryStore::new();
    store
        .store_code("user@example.com", "12345", 0)
        .await
        .unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    assert_eq!(store.get_code("user@example.com").await.unwrap(), None);

    let logs = capture.contents();
    assert!(logs.contains("u***@example.com"));
    assert!(!logs.contains("user@example.com"));
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let store = MemoryStore::new();

    store.store_code("a@x.com", "12345", 600).await.unwrap();
    store.delete_code("a@x.com").await.unwrap();
    assert_eq!(store.get_code("a@x.com").await.unwrap(), None);

    // Deleting an absent entry is not an error
    store.delete_code("a@x.com").await.unwrap();
    store.delete_code("never@seen.com").await.unwrap();
}

#[tokio::test]
async fn test_identities_are_independent() {
    let store = MemoryStore::new();

    store.store_code("a@x.com", "11111", 600).await.unwrap();
    store.store_code("b@x.com", "22222", 600).await.unwrap();

    store.delete_code("a@x.com").await.unwrap();

    assert_eq!(store.get_code("a@x.com").await.unwrap(), None);
    assert_eq!(
        store.get_code("b@x.com").await.unwrap(),
        Some("22222".to_string())
    );
}

#[tokio::test]
async fn test_concurrent_access_different_identities() {
    use std::sync::Arc;

    let store = Arc::new(MemoryStore::new());
    let mut handles = Vec::new();

    for i in 0..16 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            let email = format!("user{}@x.com", i);
            let code = format!("{:05}", i);
            store.store_code(&email, &code, 600).await.unwrap();
            assert_eq!(store.get_code(&email).await.unwrap(), Some(code));
            store.delete_code(&email).await.unwrap();
            assert_eq!(store.get_code(&email).await.unwrap(), None);
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    assert!(store.is_empty().await);
}
