// File: src/session.rs
// Purpose: Per-visitor session data (anti-forgery token, flash notice) and its store

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Cookie carrying the session id
pub const SESSION_COOKIE: &str = "KB_SID";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Failure,
}

/// One-time notice shown on the next rendered page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

/// State kept between requests of one visitor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    csrf_token: String,
    flash: Option<Flash>,
}

impl SessionData {
    /// Fresh session with a random anti-forgery token
    pub fn new() -> Self {
        Self::with_token(Uuid::new_v4().simple().to_string())
    }

    pub fn with_token(csrf_token: impl Into<String>) -> Self {
        Self {
            csrf_token: csrf_token.into(),
            flash: None,
        }
    }

    pub fn csrf_token(&self) -> &str {
        &self.csrf_token
    }

    /// Compare a submitted token against the session's
    pub fn check_csrf_token(&self, token: &str) -> bool {
        !token.is_empty() && token == self.csrf_token
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.flash = Some(Flash {
            level: FlashLevel::Success,
            message: message.into(),
        });
    }

    pub fn failure(&mut self, message: impl Into<String>) {
        self.flash = Some(Flash {
            level: FlashLevel::Failure,
            message: message.into(),
        });
    }

    pub fn flash(&self) -> Option<&Flash> {
        self.flash.as_ref()
    }

    /// Remove the pending notice so it is shown only once
    pub fn take_flash(&mut self) -> Option<Flash> {
        self.flash.take()
    }
}

impl Default for SessionData {
    fn default() -> Self {
        Self::new()
    }
}

/// Idle time after which a session is dropped
pub const SESSION_TTL: Duration = Duration::from_secs(2 * 60 * 60);

/// Most sessions kept at once; the least recently seen goes first
pub const MAX_SESSIONS: usize = 10_000;

#[derive(Debug, Clone)]
struct StoredSession {
    data: SessionData,
    last_seen: Instant,
}

/// Session resolved for one request
#[derive(Debug, Clone)]
pub struct LoadedSession {
    pub id: String,
    pub data: SessionData,
    /// No live session matched the presented id
    pub is_new: bool,
}

/// In-process session store keyed by session id, bounded by idle time and size
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, StoredSession>>>,
    ttl: Duration,
    capacity: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl: SESSION_TTL,
            capacity: MAX_SESSIONS,
        }
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    /// Load the session for an id, starting a new one when the id is
    /// missing, unknown or expired.
    pub async fn load(&self, id: Option<&str>) -> LoadedSession {
        if let Some(id) = id {
            if let Some(stored) = self.sessions.read().await.get(id) {
                if stored.last_seen.elapsed() < self.ttl {
                    return LoadedSession {
                        id: id.to_string(),
                        data: stored.data.clone(),
                        is_new: false,
                    };
                }
            }
        }

        LoadedSession {
            id: Uuid::new_v4().to_string(),
            data: SessionData::new(),
            is_new: true,
        }
    }

    /// Store a session, dropping expired entries and, when full, the least
    /// recently seen one.
    pub async fn save(&self, id: &str, data: SessionData) {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, stored| now.duration_since(stored.last_seen) < self.ttl);

        if !sessions.contains_key(id) && sessions.len() >= self.capacity {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, stored)| stored.last_seen)
                .map(|(key, _)| key.clone());
            if let Some(oldest) = oldest {
                sessions.remove(&oldest);
            }
        }

        let dropped = before.saturating_sub(sessions.len());
        if dropped > 0 {
            debug!(dropped, "sessions pruned");
        }

        sessions.insert(
            id.to_string(),
            StoredSession {
                data,
                last_seen: now,
            },
        );
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
