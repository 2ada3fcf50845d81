use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use rand::RngCore;
use uuid::Uuid;

/// Name of the cookie carrying the opaque session token.
pub const SESSION_COOKIE: &str = "reclaim_session";

const SESSION_TTL_HOURS: i64 = 24;

struct Session {
    user_id: Uuid,
    created_at: DateTime<Utc>,
}

/// Server-side session table: opaque token -> authenticated user id.
/// Sessions expire a fixed 24 hours after creation; there is no sliding
/// renewal.
pub struct SessionStore {
    sessions: Mutex<HashMap<String, Session>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_ttl(Duration::hours(SESSION_TTL_HOURS))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Issue a fresh session for `user_id` and return its token: 32 random
    /// bytes, hex-encoded. Each login also evicts sessions that have passed
    /// their lifetime, so the table stays bounded by the active population.
    pub fn create(&self, user_id: Uuid) -> String {
        let mut bytes = [0u8; 32];
        rand::rng().fill_bytes(&mut bytes);
        let token = hex::encode(bytes);
        self.prune_expired(Utc::now());
        self.sessions.lock().insert(
            token.clone(),
            Session {
                user_id,
                created_at: Utc::now(),
            },
        );
        token
    }

    /// Drop every session past its absolute lifetime. Returns the number of
    /// sessions removed.
    pub fn prune_expired(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.lock();
        let before = sessions.len();
        sessions.retain(|_, session| now - session.created_at <= self.ttl);
        before - sessions.len()
    }

    /// Look up the user behind a token, dropping the session if its absolute
    /// lifetime has passed.
    pub fn resolve(&self, token: &str, now: DateTime<Utc>) -> Option<Uuid> {
        let mut sessions = self.sessions.lock();
        match sessions.get(token) {
            Some(session) if now - session.created_at <= self.ttl => Some(session.user_id),
            Some(_) => {
                sessions.remove(token);
                None
            }
            None => None,
        }
    }

    /// Destroy a session. Idempotent: unknown tokens are a no-op.
    pub fn destroy(&self, token: &str) {
        self.sessions.lock().remove(token);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
