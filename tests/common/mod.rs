//! Shared fixtures for corekit integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use corekit::{BaseMediator, BaseProxy, CoreError, CoreResult, Notification, Notifier};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize tracing output for a test binary. Safe to call repeatedly;
/// only the first call in a process installs the subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "corekit=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Proxy holding one JSON value, counting its lifecycle hooks.
pub struct ScoreProxy {
    name: String,
    data: Mutex<Value>,
    notifier: Notifier,
    registered: AtomicUsize,
    removed: AtomicUsize,
}

impl ScoreProxy {
    pub fn new(name: impl Into<String>, data: Value) -> Self {
        Self {
            name: name.into(),
            data: Mutex::new(data),
            notifier: Notifier::new(),
            registered: AtomicUsize::new(0),
            removed: AtomicUsize::new(0),
        }
    }

    pub fn data(&self) -> Value {
        self.data.lock().unwrap().clone()
    }

    pub fn set_data(&self, data: Value) {
        *self.data.lock().unwrap() = data;
    }

    pub fn register_count(&self) -> usize {
        self.registered.load(Ordering::SeqCst)
    }

    pub fn remove_count(&self) -> usize {
        self.removed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BaseProxy for ScoreProxy {
    fn name(&self) -> &str {
        &self.name
    }

    fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    async fn on_register(&self) {
        self.registered.fetch_add(1, Ordering::SeqCst);
    }

    async fn on_remove(&self) {
        self.removed.fetch_add(1, Ordering::SeqCst);
    }
}

/// Mediator that records every notification it handles.
pub struct RecordingMediator {
    name: String,
    interests: Vec<String>,
    notifier: Notifier,
    received: Mutex<Vec<Notification>>,
    registered: AtomicUsize,
    removed: AtomicUsize,
}

impl RecordingMediator {
    pub fn new(name: impl Into<String>, interests: &[&str]) -> Self {
        Self {
            name: name.into(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            notifier: Notifier::new(),
            received: Mutex::new(Vec::new()),
            registered: AtomicUsize::new(0),
            removed: AtomicUsize::new(0),
        }
    }

    pub fn received(&self) -> Vec<Notification> {
        self.received.lock().unwrap().clone()
    }

    pub fn received_count(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    pub fn register_count(&self) -> usize {
        self.registered.load(Ordering::SeqCst)
    }

    pub fn remove_count(&self) -> usize {
        self.removed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BaseMediator for RecordingMediator {
    fn name(&self) -> &str {
        &self.name
    }

    fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    fn notification_interests(&self) -> Vec<String> {
        self.interests.clone()
    }

    async fn handle_notification(&self, notification: &Notification) -> CoreResult<()> {
        self.received.lock().unwrap().push(notification.clone());
        Ok(())
    }

    async fn on_register(&self) {
        self.registered.fetch_add(1, Ordering::SeqCst);
    }

    async fn on_remove(&self) {
        self.removed.fetch_add(1, Ordering::SeqCst);
    }
}

/// Mediator whose handler always fails, for propagation tests.
pub struct FailingMediator {
    name: String,
    interests: Vec<String>,
    notifier: Notifier,
}

impl FailingMediator {
    pub fn new(name: impl Into<String>, interests: &[&str]) -> Self {
        Self {
            name: name.into(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            notifier: Notifier::new(),
        }
    }
}

#[async_trait]
impl BaseMediator for FailingMediator {
    fn name(&self) -> &str {
        &self.name
    }

    fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    fn notification_interests(&self) -> Vec<String> {
        self.interests.clone()
    }

    async fn handle_notification(&self, _notification: &Notification) -> CoreResult<()> {
        Err(CoreError::registrant(self.name.clone(), "handler failure"))
    }
}
