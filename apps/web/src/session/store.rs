use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::session::page::Session;

/// In-memory session map. Nothing is written to disk; a restart forgets
/// every session.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    idle_timeout: Duration,
}

impl SessionStore {
    pub fn new(idle_timeout: Duration) -> Self {
        SessionStore {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout,
        }
    }

    /// Returns a snapshot of the live session for `id`, or a fresh unsaved one
    /// when the id is missing, unknown or idle past the timeout. Loading never
    /// adds to the store.
    pub async fn load(&self, id: Option<Uuid>) -> Session {
        self.load_at(id, Utc::now()).await
    }

    async fn load_at(&self, id: Option<Uuid>, now: DateTime<Utc>) -> Session {
        let sessions = self.sessions.read().await;
        id.and_then(|id| sessions.get(&id))
            .filter(|s| !self.is_idle(s, now))
            .cloned()
            .unwrap_or_else(|| Session::new(now))
    }

    /// Applies `change` to the stored session under one write lock, so
    /// concurrent requests on the same cookie never overwrite each other.
    /// A session not stored yet is created with `id` and kept only if
    /// `change` leaves it with some state worth remembering.
    pub async fn update<R>(&self, id: Uuid, change: impl FnOnce(&mut Session) -> R) -> R {
        self.update_at(id, Utc::now(), change).await
    }

    async fn update_at<R>(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
        change: impl FnOnce(&mut Session) -> R,
    ) -> R {
        let mut sessions = self.sessions.write().await;
        self.evict_idle(&mut sessions, now);

        if let Some(session) = sessions.get_mut(&id) {
            session.last_seen = now;
            return change(session);
        }

        let mut session = Session::with_id(id, now);
        let outcome = change(&mut session);
        if !session.is_pristine() {
            debug!(session_id = %session.id, created_at = %session.created_at, "Created session");
            sessions.insert(id, session);
        }
        outcome
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    fn is_idle(&self, session: &Session, now: DateTime<Utc>) -> bool {
        now - session.last_seen > self.idle_timeout
    }

    fn evict_idle(&self, sessions: &mut HashMap<Uuid, Session>, now: DateTime<Utc>) {
        let before = sessions.len();
        sessions.retain(|_, s| !self.is_idle(s, now));
        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!(evicted, "Evicted idle sessions");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::profile::tests::sample_profile;
    use crate::session::page::Page;

    fn store() -> SessionStore {
        SessionStore::new(Duration::minutes(10))
    }

    #[tokio::test]
    async fn test_load_does_not_store_new_sessions() {
        let store = store();
        let session = store.load(None).await;
        assert_eq!(session.page, Page::Questionnaire);
        store.load(Some(Uuid::new_v4())).await;
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_unknown_id_gets_fresh_session() {
        let stale = Uuid::new_v4();
        let session = store().load(Some(stale)).await;
        assert_ne!(session.id, stale);
    }

    #[tokio::test]
    async fn test_pristine_update_is_not_stored() {
        let store = store();
        let session = store.load(None).await;
        let page = store
            .update(session.id, |s| s.navigate(Page::Results).page())
            .await;
        assert_eq!(page, Page::Questionnaire);
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_updated_state_is_returned() {
        let store = store();
        let session = store.load(None).await;
        store
            .update(session.id, |s| {
                s.submit_profile(sample_profile());
                s.select_career("Dentist".to_string())
            })
            .await;

        let reloaded = store.load(Some(session.id)).await;
        assert_eq!(reloaded.id, session.id);
        assert_eq!(reloaded.page, Page::Roadmap);
        assert_eq!(reloaded.selected_career.as_deref(), Some("Dentist"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_from_stale_snapshot_keeps_newer_state() {
        let store = store();
        let snapshot = store.load(None).await;
        store
            .update(snapshot.id, |s| s.submit_profile(sample_profile()))
            .await;

        // a request that loaded `snapshot` before the submission landed
        assert!(snapshot.profile.is_none());
        store
            .update(snapshot.id, |s| s.navigate(Page::Questionnaire))
            .await;

        let reloaded = store.load(Some(snapshot.id)).await;
        assert!(reloaded.profile.is_some());
    }

    #[tokio::test]
    async fn test_concurrent_updates_are_all_applied() {
        let store = store();
        let id = store.load(None).await.id;
        store.update(id, |s| s.submit_profile(sample_profile())).await;

        let tasks: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .update(id, |s| {
                            if let Some(profile) = s.profile.as_mut() {
                                profile.strengths.push(format!("extra {i}"));
                            }
                        })
                        .await
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        let reloaded = store.load(Some(id)).await;
        assert_eq!(reloaded.profile.unwrap().strengths.len(), 1 + 8);
    }

    #[tokio::test]
    async fn test_idle_sessions_are_evicted() {
        let store = store();
        let start = Utc::now();
        let id = Uuid::new_v4();
        store
            .update_at(id, start, |s| s.submit_profile(sample_profile()))
            .await;

        let later = start + Duration::minutes(11);
        let reloaded = store.load_at(Some(id), later).await;
        assert_ne!(reloaded.id, id);

        store.update_at(Uuid::new_v4(), later, |_| ()).await;
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_activity_keeps_session_alive() {
        let store = store();
        let start = Utc::now();
        let id = Uuid::new_v4();
        store
            .update_at(id, start, |s| s.submit_profile(sample_profile()))
            .await;
        store
            .update_at(id, start + Duration::minutes(8), |_| ())
            .await;
        let again = store.load_at(Some(id), start + Duration::minutes(16)).await;
        assert_eq!(again.id, id);
    }
}
