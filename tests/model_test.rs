//! Proxy registry behavior.

mod common;

use common::ScoreProxy;
use corekit::{BaseProxy, CoreRegistry};
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn register_retrieve_remove_lifecycle() {
    let registry = CoreRegistry::new();
    let model = registry.model("test");

    let proxy = Arc::new(ScoreProxy::new("score", json!(0)));
    model.register_proxy(proxy.clone()).await;
    assert!(model.has_proxy("score"));
    assert_eq!(proxy.register_count(), 1);

    let retrieved = model.retrieve_proxy("score").unwrap();
    assert!(Arc::ptr_eq(&retrieved, &(proxy.clone() as Arc<dyn BaseProxy>)));
    assert_eq!(proxy.data(), json!(0));

    let removed = model.remove_proxy("score").await.unwrap();
    assert!(Arc::ptr_eq(&removed, &(proxy.clone() as Arc<dyn BaseProxy>)));
    assert_eq!(proxy.remove_count(), 1);
    assert!(!model.has_proxy("score"));
    assert!(model.retrieve_proxy("score").is_none());

    // Removing again is a normal absent result, and the hook stays at one.
    assert!(model.remove_proxy("score").await.is_none());
    assert_eq!(proxy.remove_count(), 1);
}

#[tokio::test]
async fn overwrite_displaces_without_removal_hook() {
    let registry = CoreRegistry::new();
    let model = registry.model("test");

    let first = Arc::new(ScoreProxy::new("score", json!(1)));
    let second = Arc::new(ScoreProxy::new("score", json!(2)));

    model.register_proxy(first.clone()).await;
    model.register_proxy(second.clone()).await;

    // The displaced proxy's on_remove never fires.
    assert_eq!(first.remove_count(), 0);
    assert_eq!(second.register_count(), 1);

    let retrieved = model.retrieve_proxy("score").unwrap();
    assert!(Arc::ptr_eq(&retrieved, &(second.clone() as Arc<dyn BaseProxy>)));
}

#[tokio::test]
async fn registration_binds_proxy_notifier() {
    let registry = CoreRegistry::new();
    let model = registry.model("game");

    let proxy = Arc::new(ScoreProxy::new("score", json!(0)));
    assert!(!proxy.notifier().is_bound());

    model.register_proxy(proxy.clone()).await;
    assert_eq!(proxy.notifier().multiton_key(), Some("game"));
}
