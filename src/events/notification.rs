//! Notification value object.
//!
//! Notifications are the only currency on the bus: a name, an optional JSON
//! body, and an optional kind discriminator. Dispatch is purely by name; two
//! notifications with the same name have no identity relationship.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A named message broadcast through a core's observer bus.
///
/// The name is fixed at construction. Body and kind stay settable so a single
/// notification value can be reused across sends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    name: String,
    body: Option<Value>,
    kind: Option<String>,
}

impl Notification {
    /// Create a notification with no body or kind.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: None,
            kind: None,
        }
    }

    /// Builder-style helper to attach a body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Builder-style helper to attach a kind discriminator.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn set_body(&mut self, body: Option<Value>) {
        self.body = body;
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn set_kind(&mut self, kind: Option<String>) {
        self.kind = kind;
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Notification name: {}", self.name)?;
        match &self.body {
            Some(body) => write!(f, " body: {body}")?,
            None => write!(f, " body: null")?,
        }
        match &self.kind {
            Some(kind) => write!(f, " kind: {kind}"),
            None => write!(f, " kind: null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_sets_body_and_kind() {
        let note = Notification::new("GAME_OVER")
            .with_body(json!({"score": 42}))
            .with_kind("ui");

        assert_eq!(note.name(), "GAME_OVER");
        assert_eq!(note.body(), Some(&json!({"score": 42})));
        assert_eq!(note.kind(), Some("ui"));
    }

    #[test]
    fn body_and_kind_are_resettable() {
        let mut note = Notification::new("SCORE_CHANGED").with_body(json!(1));
        note.set_body(Some(json!(2)));
        note.set_kind(Some("replay".into()));

        assert_eq!(note.body(), Some(&json!(2)));
        assert_eq!(note.kind(), Some("replay"));

        note.set_body(None);
        assert!(note.body().is_none());
    }

    #[test]
    fn display_includes_all_fields() {
        let note = Notification::new("PING").with_body(json!("pong"));
        let text = note.to_string();
        assert!(text.contains("PING"));
        assert!(text.contains("pong"));
        assert!(text.contains("kind: null"));
    }
}
