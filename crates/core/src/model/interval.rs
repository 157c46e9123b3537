use serde::{Deserialize, Serialize};

/// Identifier the scheduler logs for intervals where no process ran.
pub const IDLE_IDENTIFIER: i64 = -1;

/// What an identifier stands for on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    /// `>= 0`: a simulated process.
    Process,
    /// `-1`: the CPU was idle.
    Idle,
    /// Any other negative value: a named scheduler state.
    State,
}

impl IdentifierKind {
    pub fn of(identifier: i64) -> Self {
        match identifier {
            id if id >= 0 => IdentifierKind::Process,
            IDLE_IDENTIFIER => IdentifierKind::Idle,
            _ => IdentifierKind::State,
        }
    }
}

/// Display text for an identifier, shared by bar labels and row ticks.
pub fn identifier_label(identifier: i64) -> String {
    match IdentifierKind::of(identifier) {
        IdentifierKind::Process => format!("P{identifier}"),
        IdentifierKind::Idle => "IDLE".to_string(),
        IdentifierKind::State => format!("Estado {identifier}"),
    }
}

/// One `(identifier, start, end)` row of scheduler output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalRecord {
    #[serde(rename = "PID")]
    pub identifier: i64,
    #[serde(rename = "Start")]
    pub start: f64,
    #[serde(rename = "End")]
    pub end: f64,
}

impl IntervalRecord {
    pub fn new(identifier: i64, start: f64, end: f64) -> Self {
        Self {
            identifier,
            start,
            end,
        }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}
