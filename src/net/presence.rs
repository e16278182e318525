//! Presence boundary: who else is playing right now
//!
//! Identities are announced on life start and withdrawn on teardown. The
//! roster is display-only; nothing here may reach into live entity state.
//! This in-process hub stands in for a realtime presence backend and keeps
//! the same surface: announce, withdraw, join/leave events, roster snapshot.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::broadcast;
use tracing::debug;
use uuid::Uuid;

/// Roster row, safe to hand to any renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceEntry {
    pub session: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenceEvent {
    Joined { session: Uuid, name: String },
    Left { session: Uuid },
}

/// Shared presence hub. Cheap to clone; all clones see the same roster.
#[derive(Clone)]
pub struct PresenceHub {
    roster: Arc<RwLock<HashMap<Uuid, String>>>,
    events: broadcast::Sender<PresenceEvent>,
}

impl PresenceHub {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            roster: Arc::new(RwLock::new(HashMap::new())),
            events,
        }
    }

    /// Announce an identity; returns the session id used to withdraw it
    pub fn announce(&self, name: &str) -> Uuid {
        let session = Uuid::new_v4();
        self.roster.write().insert(session, name.to_string());
        debug!(%session, name, "presence announced");
        // Send errors just mean nobody is listening
        let _ = self.events.send(PresenceEvent::Joined {
            session,
            name: name.to_string(),
        });
        session
    }

    /// Withdraw a previously announced identity; unknown sessions are a no-op
    pub fn withdraw(&self, session: Uuid) {
        if self.roster.write().remove(&session).is_some() {
            debug!(%session, "presence withdrawn");
            let _ = self.events.send(PresenceEvent::Left { session });
        }
    }

    /// Snapshot of everyone currently present, sorted by name for stable display
    pub fn roster(&self) -> Vec<PresenceEntry> {
        let mut entries: Vec<PresenceEntry> = self
            .roster
            .read()
            .iter()
            .map(|(session, name)| PresenceEntry {
                session: *session,
                name: name.clone(),
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PresenceEvent> {
        self.events.subscribe()
    }
}

impl Default for PresenceHub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_announce_adds_to_roster() {
        let hub = PresenceHub::new();
        let session = hub.announce("ada");
        let roster = hub.roster();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].session, session);
        assert_eq!(roster[0].name, "ada");
    }

    #[test]
    fn test_withdraw_removes_from_roster() {
        let hub = PresenceHub::new();
        let session = hub.announce("ada");
        hub.withdraw(session);
        assert!(hub.roster().is_empty());
        // Double withdraw is harmless
        hub.withdraw(session);
    }

    #[test]
    fn test_roster_shared_across_clones() {
        let hub = PresenceHub::new();
        let other = hub.clone();
        hub.announce("ada");
        other.announce("grace");
        let names: Vec<String> = hub.roster().into_iter().map(|e| e.name).collect();
        assert_eq!(names, ["ada", "grace"]);
    }

    #[tokio::test]
    async fn test_events_delivered_to_subscribers() {
        let hub = PresenceHub::new();
        let mut rx = hub.subscribe();

        let session = hub.announce("ada");
        hub.withdraw(session);

        assert_eq!(
            rx.recv().await.unwrap(),
            PresenceEvent::Joined {
                session,
                name: "ada".to_string()
            }
        );
        assert_eq!(rx.recv().await.unwrap(), PresenceEvent::Left { session });
    }

    #[test]
    fn test_session_cycles_across_lives() {
        // Withdraw-then-announce, as the runner does on every restart:
        // each life gets its own session and the roster never doubles up
        let hub = PresenceHub::new();
        let first = hub.announce("ada");
        hub.withdraw(first);
        let second = hub.announce("ada");

        assert_ne!(first, second);
        let roster = hub.roster();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].session, second);
    }

    #[test]
    fn test_roster_snapshot_is_independent() {
        let hub = PresenceHub::new();
        hub.announce("ada");
        let snapshot = hub.roster();
        hub.announce("grace");
        // Earlier snapshot unaffected by later changes
        assert_eq!(snapshot.len(), 1);
        assert_eq!(hub.roster().len(), 2);
    }
}
