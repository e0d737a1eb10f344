//! Practice results, personal bests, and their local persistence.
//!
//! | Module    | Purpose |
//! |-----------|---------|
//! | `session` | Graded question results, per-table results, whole sessions |
//! | `bests`   | Fastest time per table, plus time formatting |
//! | `store`   | JSON files in a directory standing in for browser storage |

pub mod bests;
pub mod session;
pub mod store;

pub use bests::{format_time, format_time_detailed, PersonalBest, PersonalBests};
pub use session::{
    generate_player_id, generate_session_id, GameSession, QuestionResult, TableResult,
};
pub use store::RecordStore;
