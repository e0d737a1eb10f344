//! Directory-backed JSON storage for sessions, personal bests, and the player ID.
//!
//! Layout under the store directory:
//!
//! | File                  | Contents |
//! |-----------------------|----------|
//! | `sessions.json`       | Every saved [`GameSession`], oldest first |
//! | `personal_bests.json` | [`PersonalBests`] keyed by table |
//! | `player_id`           | The persistent player ID, plain text |
//!
//! Session and personal-best reads are tolerant: a missing or unparsable
//! file is treated as empty and logged, never returned as an error.

use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::records::{
    bests::PersonalBests,
    session::{generate_player_id, GameSession},
};

const SESSIONS_FILE: &str = "sessions.json";
const PERSONAL_BESTS_FILE: &str = "personal_bests.json";
const PLAYER_ID_FILE: &str = "player_id";

pub struct RecordStore {
    dir: PathBuf,
}

impl RecordStore {
    /// Open (creating if needed) a store rooted at `dir`.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    /// Read and parse `file`, falling back to `T::default()`.
    fn read_or_default<T: DeserializeOwned + Default>(&self, file: &str) -> T {
        let path = self.path(file);
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return T::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable record file, treating as empty");
                return T::default();
            }
        };
        serde_json::from_str(&data).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "corrupt record file, treating as empty");
            T::default()
        })
    }

    fn write_json<T: serde::Serialize>(&self, file: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.path(file), json)?;
        Ok(())
    }

    /// All saved sessions, oldest first.
    pub fn sessions(&self) -> Vec<GameSession> {
        self.read_or_default(SESSIONS_FILE)
    }

    pub fn last_session(&self) -> Option<GameSession> {
        self.sessions().pop()
    }

    pub fn personal_bests(&self) -> PersonalBests {
        self.read_or_default(PERSONAL_BESTS_FILE)
    }

    pub fn is_personal_best(&self, table: u32, time_ms: u64) -> bool {
        self.personal_bests().is_personal_best(table, time_ms)
    }

    /// Append `session` and fold its results into the personal bests.
    ///
    /// Returns whether any personal best changed.
    pub fn save_session(&self, session: &GameSession) -> Result<bool> {
        let mut sessions = self.sessions();
        sessions.push(session.clone());
        self.write_json(SESSIONS_FILE, &sessions)?;

        let mut bests = self.personal_bests();
        let updated = bests.update_from(session);
        if updated {
            self.write_json(PERSONAL_BESTS_FILE, &bests)?;
        }
        info!(
            session_id = %session.id,
            tables = session.table_results.len(),
            new_bests = updated,
            "saved session"
        );
        Ok(updated)
    }

    /// The persistent player ID, created on first use.
    ///
    /// A missing or blank file gets a fresh ID; any other read failure is
    /// returned and the stored ID is left alone.
    pub fn player_id<R: Rng>(&self, rng: &mut R) -> Result<String> {
        let path = self.path(PLAYER_ID_FILE);
        match fs::read_to_string(&path) {
            Ok(existing) if !existing.trim().is_empty() => {
                return Ok(existing.trim().to_string());
            }
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable player id");
                return Err(e.into());
            }
        }
        let id = generate_player_id(rng);
        fs::write(&path, &id)?;
        debug!(player_id = %id, "created player id");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::tempdir;

    use crate::error::DrillError;
    use crate::records::session::TableResult;

    fn session(rng: &mut StdRng, results: &[(u32, u64)]) -> GameSession {
        let mut s = GameSession::start(rng);
        for &(table, time_ms) in results {
            let now = Utc::now();
            s.record_table(TableResult {
                table,
                time_ms,
                questions: Vec::new(),
                started_at: now,
                completed_at: now,
            });
        }
        s.finish();
        s
    }

    #[test]
    fn empty_store_reads_as_empty() {
        let dir = tempdir().unwrap();
        let store = RecordStore::open(dir.path()).unwrap();
        assert!(store.sessions().is_empty());
        assert!(store.last_session().is_none());
        assert!(store.personal_bests().is_empty());
        assert!(store.is_personal_best(6, 1));
    }

    #[test]
    fn open_creates_nested_directories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = RecordStore::open(&nested).unwrap();
        assert!(store.dir().is_dir());
    }

    #[test]
    fn saved_sessions_persist_and_update_bests() {
        let dir = tempdir().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let first = session(&mut rng, &[(6, 40_000)]);
        let second = session(&mut rng, &[(6, 45_000), (7, 50_000)]);

        let store = RecordStore::open(dir.path()).unwrap();
        assert!(store.save_session(&first).unwrap());
        assert!(store.save_session(&second).unwrap());

        let reopened = RecordStore::open(dir.path()).unwrap();
        let sessions = reopened.sessions();
        assert_eq!(sessions.len(), 2);
        assert_eq!(reopened.last_session().unwrap().id, second.id);

        let bests = reopened.personal_bests();
        assert_eq!(bests.get(6).unwrap().best_time_ms, 40_000);
        assert_eq!(bests.get(6).unwrap().session_id, first.id);
        assert_eq!(bests.get(7).unwrap().session_id, second.id);
        assert!(!reopened.is_personal_best(6, 40_000));
        assert!(reopened.is_personal_best(6, 39_000));
    }

    #[test]
    fn slower_session_leaves_bests_untouched() {
        let dir = tempdir().unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let store = RecordStore::open(dir.path()).unwrap();
        store.save_session(&session(&mut rng, &[(3, 10_000)])).unwrap();
        assert!(!store.save_session(&session(&mut rng, &[(3, 12_000)])).unwrap());
        assert_eq!(store.sessions().len(), 2);
    }

    #[test]
    fn corrupt_files_read_as_empty() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(SESSIONS_FILE), "{not json").unwrap();
        fs::write(dir.path().join(PERSONAL_BESTS_FILE), "[1, 2").unwrap();
        let store = RecordStore::open(dir.path()).unwrap();
        assert!(store.sessions().is_empty());
        assert!(store.personal_bests().is_empty());

        // Saving over a corrupt file starts a fresh history.
        let mut rng = StdRng::seed_from_u64(3);
        store.save_session(&session(&mut rng, &[(4, 9_000)])).unwrap();
        assert_eq!(store.sessions().len(), 1);
    }

    #[test]
    fn player_id_is_stable() {
        let dir = tempdir().unwrap();
        let store = RecordStore::open(dir.path()).unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        let id = store.player_id(&mut rng).unwrap();
        assert!(id.starts_with("player_"));
        assert_eq!(store.player_id(&mut rng).unwrap(), id);
    }

    #[test]
    fn unreadable_player_id_is_not_overwritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(PLAYER_ID_FILE);
        let garbled = [0xff, 0xfe, 0xfd];
        fs::write(&path, garbled).unwrap();

        let store = RecordStore::open(dir.path()).unwrap();
        let mut rng = StdRng::seed_from_u64(6);
        let err = store.player_id(&mut rng).unwrap_err();
        assert!(matches!(err, DrillError::Io(_)), "got {err:?}");
        assert_eq!(fs::read(&path).unwrap(), garbled);
    }

    #[test]
    fn blank_player_id_is_replaced() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(PLAYER_ID_FILE), "  \n").unwrap();
        let store = RecordStore::open(dir.path()).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let id = store.player_id(&mut rng).unwrap();
        assert!(id.starts_with("player_"));
    }
}
