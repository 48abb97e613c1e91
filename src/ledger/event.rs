use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Minutes since the start of the (single) day. Negative values are accepted.
pub type Minute = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Enter,
    Exit,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Enter => "enter",
            EventKind::Exit => "exit",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One timestamped gate event
///
/// Deserializes from either `["enter", "ABC123", 0]` or
/// `{ "kind": "enter", "plate": "ABC123", "timestamp": 0 }` and always
/// serializes to the record form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawEvent", into = "EventRecord")]
pub enum Event {
    Enter { plate: String, timestamp: Minute },
    Exit { plate: String, timestamp: Minute },
}

impl Event {
    pub fn enter(plate: impl Into<String>, timestamp: Minute) -> Self {
        Event::Enter {
            plate: plate.into(),
            timestamp,
        }
    }

    pub fn exit(plate: impl Into<String>, timestamp: Minute) -> Self {
        Event::Exit {
            plate: plate.into(),
            timestamp,
        }
    }

    pub fn new(kind: EventKind, plate: impl Into<String>, timestamp: Minute) -> Self {
        match kind {
            EventKind::Enter => Event::enter(plate, timestamp),
            EventKind::Exit => Event::exit(plate, timestamp),
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Event::Enter { .. } => EventKind::Enter,
            Event::Exit { .. } => EventKind::Exit,
        }
    }

    pub fn plate(&self) -> &str {
        match self {
            Event::Enter { plate, .. } | Event::Exit { plate, .. } => plate,
        }
    }

    pub fn timestamp(&self) -> Minute {
        match self {
            Event::Enter { timestamp, .. } | Event::Exit { timestamp, .. } => *timestamp,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct EventRecord {
    kind: EventKind,
    plate: String,
    timestamp: Minute,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEvent {
    Tuple(EventKind, String, Minute),
    Record(EventRecord),
}

impl From<RawEvent> for Event {
    fn from(raw: RawEvent) -> Self {
        match raw {
            RawEvent::Tuple(kind, plate, timestamp) => Event::new(kind, plate, timestamp),
            RawEvent::Record(record) => Event::new(record.kind, record.plate, record.timestamp),
        }
    }
}

impl From<Event> for EventRecord {
    fn from(event: Event) -> Self {
        let kind = event.kind();
        match event {
            Event::Enter { plate, timestamp } | Event::Exit { plate, timestamp } => EventRecord {
                kind,
                plate,
                timestamp,
            },
        }
    }
}

/// Why an event was rejected. Rejections never abort a run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Denial {
    #[error("enter denied: capacity full for {plate} at {timestamp}")]
    CapacityFull { plate: String, timestamp: Minute },

    #[error("enter denied: {plate} already inside at {timestamp}")]
    AlreadyInside { plate: String, timestamp: Minute },

    #[error("exit denied: {plate} not inside at {timestamp}")]
    NotInside { plate: String, timestamp: Minute },

    #[error("exit denied: {plate} before entry at {timestamp}")]
    BeforeEntry {
        plate: String,
        timestamp: Minute,
        since: Minute,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DenialKind {
    CapacityFull,
    AlreadyInside,
    NotInside,
    BeforeEntry,
}

impl DenialKind {
    pub const ALL: [DenialKind; 4] = [
        DenialKind::CapacityFull,
        DenialKind::AlreadyInside,
        DenialKind::NotInside,
        DenialKind::BeforeEntry,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DenialKind::CapacityFull => "capacity full",
            DenialKind::AlreadyInside => "already inside",
            DenialKind::NotInside => "not inside",
            DenialKind::BeforeEntry => "before entry",
        }
    }
}

impl Denial {
    pub fn kind(&self) -> DenialKind {
        match self {
            Denial::CapacityFull { .. } => DenialKind::CapacityFull,
            Denial::AlreadyInside { .. } => DenialKind::AlreadyInside,
            Denial::NotInside { .. } => DenialKind::NotInside,
            Denial::BeforeEntry { .. } => DenialKind::BeforeEntry,
        }
    }

    pub fn plate(&self) -> &str {
        match self {
            Denial::CapacityFull { plate, .. }
            | Denial::AlreadyInside { plate, .. }
            | Denial::NotInside { plate, .. }
            | Denial::BeforeEntry { plate, .. } => plate,
        }
    }
}

/// Denials are reported as their message strings
impl Serialize for Denial {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl PartialEq<&str> for Denial {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}
