//! Core practice engine: question, distractor, and answer handling.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: facts, questions, request/response structs |
//! | `shuffle`    | Fisher-Yates permutation over an injected RNG |
//! | `strategies` | The distractor catalog: one rule per realistic arithmetic slip |
//! | `choices`    | Layered assembly of four multiple-choice options |
//! | `generator`  | `generate_questions()` and the seeded `generate_round()` entry point |
//! | `evaluator`  | Lenient integer parsing, answer checking, question formatting |

pub mod choices;
pub mod evaluator;
pub mod generator;
pub mod models;
pub mod shuffle;
pub mod strategies;

// Re-export the public API surface so callers can use
// `practice_engine::generate_round` without reaching into sub-modules.
pub use choices::generate_answer_choices;
pub use evaluator::{check_answer, format_question};
pub use generator::{available_tables, generate_questions, generate_round};
pub use models::{
    DistractorClass, Fact, PracticeRequest, Question, QuestionType, Round,
};
pub use strategies::DistractorStrategy;
