//! Active model tracking.
//!
//! The host notifies us whenever a session switches models; the resolver
//! only reads. Entries live until the host reports the session closed.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, sync::Mutex};

/// The model a session is currently chatting with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveModel {
    /// Model identifier.
    pub model_id: CompactString,
    /// Provider identifier the model was selected from.
    pub provider_id: CompactString,
}

impl ActiveModel {
    /// Create an active model record.
    pub fn new(model_id: &str, provider_id: &str) -> Self {
        Self {
            model_id: model_id.into(),
            provider_id: provider_id.into(),
        }
    }
}

/// Per-session active models with interior mutability.
pub struct SessionModels {
    sessions: Mutex<BTreeMap<CompactString, ActiveModel>>,
}

impl SessionModels {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(BTreeMap::new()),
        }
    }

    /// Record or overwrite the session's active model.
    pub fn on_session_model_change(&self, session_id: &str, model_id: &str, provider_id: &str) {
        tracing::debug!(session = session_id, model_id, provider_id, "active model changed");
        self.sessions
            .lock()
            .expect("session lock poisoned")
            .insert(session_id.into(), ActiveModel::new(model_id, provider_id));
    }

    /// Get the session's active model (cloned).
    pub fn get(&self, session_id: &str) -> Option<ActiveModel> {
        self.sessions
            .lock()
            .expect("session lock poisoned")
            .get(session_id)
            .cloned()
    }

    /// Forget a closed session.
    pub fn remove(&self, session_id: &str) -> Option<ActiveModel> {
        self.sessions
            .lock()
            .expect("session lock poisoned")
            .remove(session_id)
    }

    /// Number of tracked sessions.
    pub fn len(&self) -> usize {
        self.sessions.lock().expect("session lock poisoned").len()
    }

    /// Whether no sessions are tracked.
    pub fn is_empty(&self) -> bool {
        self.sessions
            .lock()
            .expect("session lock poisoned")
            .is_empty()
    }
}

impl Default for SessionModels {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionModels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionModels")
            .field("count", &self.len())
            .finish()
    }
}
