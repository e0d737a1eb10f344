//! # times_drill_gen
//!
//! A fully offline, deterministic times-table practice generator.
//!
//! For a selected table the library produces a round of 12 questions, one per
//! multiplicand 1..=12 in shuffled order. Roughly 70% are multiple-choice and
//! come with four options: the answer plus three distractors modelled on real
//! arithmetic slips (off-by-one, skip-counting, factor swaps, digit reversal,
//! and so on). The rest are free-text. Answers are checked with browser-style
//! lenient integer parsing, and finished sessions can be kept in a small
//! JSON record store that tracks the fastest time per table.
//!
//! ## How it works
//!
//! 1. Create a [`PracticeRequest`] with a table, an optional RNG seed, and an
//!    optional multiple-choice probability.
//! 2. Call [`generate_round`]. Regular distractors must sit within ±25% of the
//!    answer; at most one outlier may ignore that window, and offset searches
//!    fill any gap so every multiple-choice question has exactly four options.
//! 3. Grade answers with [`check_answer`] or [`QuestionResult::grade`], collect
//!    them into a [`GameSession`], and save it with [`RecordStore`].
//!
//! ## Quick start
//!
//! ```rust
//! use times_drill_gen::{check_answer, generate_round, PracticeRequest};
//!
//! let round = generate_round(PracticeRequest::new(6).with_seed(42)).unwrap();
//! assert_eq!(round.questions.len(), 12);
//!
//! let q = &round.questions[0];
//! println!("{} × {} = ?", q.multiplier, q.multiplicand);
//! if let Some(choices) = &q.choices {
//!     println!("choices: {choices:?}");
//! }
//! assert!(check_answer(&q.correct_answer.to_string(), q.correct_answer.into()));
//! ```

pub mod error;
pub mod practice_engine;
pub mod records;

// Convenience re-exports so callers can use `times_drill_gen::generate_round`
// directly without reaching into `practice_engine::`.
pub use error::{DrillError, Result};
pub use practice_engine::{
    available_tables, check_answer, format_question, generate_answer_choices,
    generate_questions, generate_round, DistractorClass, DistractorStrategy, Fact,
    PracticeRequest, Question, QuestionType, Round,
};
pub use records::{
    format_time, format_time_detailed, GameSession, PersonalBest, PersonalBests,
    QuestionResult, RecordStore, TableResult,
};
