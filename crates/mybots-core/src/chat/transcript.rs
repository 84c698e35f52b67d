//! Bounded chat transcripts keyed by (session, bot).
//!
//! Each transcript is a sliding window: appending to a full transcript
//! evicts the oldest turns first, so its length never exceeds the configured
//! maximum. Sessions idle for longer than the configured lifetime are
//! dropped wholesale by [`SessionTranscripts::purge_expired`].

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use dashmap::DashMap;
use tokio::time::Instant;
use tracing::debug;

use mybots_types::bot::BotId;
use mybots_types::chat::{ChatTurn, SessionId};

/// One session's transcripts, one per bot it has talked to.
struct SessionEntry {
    last_seen: Instant,
    bots: HashMap<BotId, VecDeque<ChatTurn>>,
}

/// All transcripts of all live sessions.
///
/// A session is registered by its first appended turn. Reads and clears
/// refresh a known session but never register a new one.
pub struct SessionTranscripts {
    sessions: DashMap<SessionId, SessionEntry>,
    max_turns: usize,
    lifetime: Duration,
}

impl SessionTranscripts {
    pub fn new(max_turns: usize, lifetime: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            max_turns,
            lifetime,
        }
    }

    /// Append a turn, evicting the oldest turns first if the transcript is
    /// already at capacity.
    pub fn append(&self, session: SessionId, bot_id: &BotId, turn: ChatTurn) {
        let mut entry = self.sessions.entry(session).or_insert_with(|| SessionEntry {
            last_seen: Instant::now(),
            bots: HashMap::new(),
        });
        entry.last_seen = Instant::now();
        if self.max_turns == 0 {
            return;
        }

        let turns = entry.bots.entry(bot_id.clone()).or_default();
        while turns.len() >= self.max_turns {
            turns.pop_front();
        }
        turns.push_back(turn);
    }

    /// Snapshot of the transcript, oldest first. Empty if none exists.
    pub fn get(&self, session: SessionId, bot_id: &BotId) -> Vec<ChatTurn> {
        let Some(mut entry) = self.sessions.get_mut(&session) else {
            return Vec::new();
        };
        entry.last_seen = Instant::now();
        entry
            .bots
            .get(bot_id)
            .map(|turns| turns.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Remove every turn for the pair. A missing transcript is not an error.
    pub fn clear(&self, session: SessionId, bot_id: &BotId) {
        if let Some(mut entry) = self.sessions.get_mut(&session) {
            entry.last_seen = Instant::now();
            entry.bots.remove(bot_id);
        }
    }

    /// Drop all transcripts of sessions idle longer than the lifetime.
    /// Returns the number of sessions removed.
    ///
    /// The idle check and the removal happen under the same shard lock, so a
    /// session touched concurrently is either kept whole or dropped whole.
    pub fn purge_expired(&self) -> usize {
        let mut purged = 0;
        self.sessions.retain(|_, entry| {
            let alive = entry.last_seen.elapsed() <= self.lifetime;
            if !alive {
                purged += 1;
            }
            alive
        });
        if purged > 0 {
            debug!(sessions = purged, "Purged expired chat sessions");
        }
        purged
    }

    /// Number of sessions seen and not yet expired.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
