use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::practice_engine::{
    evaluator::{check_answer, format_question},
    models::{Question, QuestionType},
};

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// `<prefix>_<unix millis>_<7 base-36 chars>`.
fn make_id<R: Rng>(prefix: &str, rng: &mut R) -> String {
    let suffix: String = (0..7)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{}_{}_{}", prefix, Utc::now().timestamp_millis(), suffix)
}

pub fn generate_session_id<R: Rng>(rng: &mut R) -> String {
    make_id("session", rng)
}

pub fn generate_player_id<R: Rng>(rng: &mut R) -> String {
    make_id("player", rng)
}

/// One answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    /// Display form, e.g. "6 × 7".
    pub question: String,
    pub user_answer: String,
    pub correct_answer: u32,
    pub is_correct: bool,
    pub time_taken_ms: u64,
    pub question_type: QuestionType,
}

impl QuestionResult {
    /// Grade `user_answer` against `question`.
    pub fn grade(question: &Question, user_answer: impl Into<String>, time_taken_ms: u64) -> Self {
        let user_answer = user_answer.into();
        QuestionResult {
            question: format_question(question.multiplier, question.multiplicand),
            is_correct: check_answer(&user_answer, i64::from(question.correct_answer)),
            user_answer,
            correct_answer: question.correct_answer,
            time_taken_ms,
            question_type: question.question_type,
        }
    }
}

/// A completed table: every question of one round, with the total time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableResult {
    pub table: u32,
    pub time_ms: u64,
    pub questions: Vec<QuestionResult>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl TableResult {
    pub fn correct_count(&self) -> usize {
        self.questions.iter().filter(|q| q.is_correct).count()
    }

    /// Fraction of correct answers; 0.0 for an empty table.
    pub fn accuracy(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        self.correct_count() as f64 / self.questions.len() as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    pub id: String,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub table_results: Vec<TableResult>,
    pub skipped_tables: Vec<u32>,
}

impl GameSession {
    /// Open a new session stamped with the current time.
    pub fn start<R: Rng>(rng: &mut R) -> Self {
        GameSession {
            id: generate_session_id(rng),
            started_at: Utc::now(),
            completed_at: None,
            table_results: Vec::new(),
            skipped_tables: Vec::new(),
        }
    }

    pub fn record_table(&mut self, result: TableResult) {
        self.table_results.push(result);
    }

    pub fn skip_table(&mut self, table: u32) {
        if !self.skipped_tables.contains(&table) {
            self.skipped_tables.push(table);
        }
    }

    pub fn finish(&mut self) {
        self.completed_at = Some(Utc::now());
    }

    pub fn is_finished(&self) -> bool {
        self.completed_at.is_some()
    }

    pub fn total_time_ms(&self) -> u64 {
        self.table_results.iter().map(|t| t.time_ms).sum()
    }
}
