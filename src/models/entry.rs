use super::activity::Activity;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Timestamp format used in the `times` table (local naive).
pub const TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of the ledger.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Entry {
    pub kind: Activity,     // ⇔ times.kind ('arrive' | 'break' | ...)
    pub ts: NaiveDateTime,  // ⇔ times.ts (TEXT "YYYY-MM-DD HH:MM:SS")
}

impl Entry {
    pub fn new(kind: Activity, ts: NaiveDateTime) -> Self {
        Self { kind, ts }
    }

    pub fn ts_str(&self) -> String {
        self.ts.format(TS_FORMAT).to_string()
    }

    pub fn date_str(&self) -> String {
        self.ts.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.ts.format("%H:%M").to_string()
    }
}
