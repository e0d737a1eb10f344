use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::records::session::GameSession;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalBest {
    pub table: u32,
    pub best_time_ms: u64,
    pub achieved_at: DateTime<Utc>,
    pub session_id: String,
}

/// Fastest completion per table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonalBests(BTreeMap<u32, PersonalBest>);

impl PersonalBests {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, table: u32) -> Option<&PersonalBest> {
        self.0.get(&table)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PersonalBest> {
        self.0.values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if `time_ms` would set a new record for `table`.
    /// Ties do not count.
    pub fn is_personal_best(&self, table: u32, time_ms: u64) -> bool {
        self.0.get(&table).map_or(true, |best| time_ms < best.best_time_ms)
    }

    /// Fold every table result of `session` into the records.
    /// Returns whether any record changed.
    pub fn update_from(&mut self, session: &GameSession) -> bool {
        let mut updated = false;
        for result in &session.table_results {
            if self.is_personal_best(result.table, result.time_ms) {
                self.0.insert(
                    result.table,
                    PersonalBest {
                        table: result.table,
                        best_time_ms: result.time_ms,
                        achieved_at: result.completed_at,
                        session_id: session.id.clone(),
                    },
                );
                updated = true;
            }
        }
        updated
    }
}

/// `M:SS`, e.g. 83_250 ms -> "1:23".
pub fn format_time(ms: u64) -> String {
    let total_seconds = ms / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// `M:SS.mmm`, e.g. 83_250 ms -> "1:23.250".
pub fn format_time_detailed(ms: u64) -> String {
    let total_seconds = ms / 1000;
    format!("{}:{:02}.{:03}", total_seconds / 60, total_seconds % 60, ms % 1000)
}
