use serde::{Deserialize, Serialize};

use super::EventRecord;

/// Journal of the state-changing operations applied to one aggregate.
///
/// Aggregates hold an `Entity` and record into it through `#[digest]`.
/// While the journal is being replayed, recording is suppressed so that
/// re-running a method does not append a duplicate entry.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Entity {
    id: String,
    version: u64,
    events: Vec<EventRecord>,
    #[serde(skip, default)]
    replaying: bool,
}

impl Entity {
    pub fn new() -> Self {
        Entity::default()
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Entity {
            id: id.into(),
            ..Entity::default()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    /// Number of recorded events. Changes exactly when something is recorded.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    /// Record an event whose payload is encoded with bitcode.
    pub fn digest<T: Serialize>(&mut self, name: impl Into<String>, payload: &T) {
        if self.replaying {
            return;
        }

        // Journal payloads are plain data tuples; encoding them cannot fail.
        let bytes = bitcode::serialize(payload).expect("journal payload must be encodable");
        let sequence = self.events.len() as u64 + 1;
        self.events.push(EventRecord::new(name, bytes, sequence));
        self.version = self.events.len() as u64;
    }

    pub fn digest_empty(&mut self, name: impl Into<String>) {
        self.digest(name, &());
    }

    /// Replace the journal with previously recorded events.
    pub fn load_from_history(&mut self, history: Vec<EventRecord>) {
        self.events = history;
        self.version = self.events.len() as u64;
    }

    pub fn is_replaying(&self) -> bool {
        self.replaying
    }

    pub fn set_replaying(&mut self, replaying: bool) {
        self.replaying = replaying;
    }
}
