use std::fmt;
use serde::{Deserialize, Serialize};

/// Default chance that a question is asked as multiple-choice.
pub const DEFAULT_MULTIPLE_CHOICE_PROBABILITY: f64 = 0.7;

/// Questions per round: multiplicands 1..=12, each exactly once.
pub const QUESTIONS_PER_TABLE: u32 = 12;

// ---------------------------------------------------------------------------
// Facts and questions
// ---------------------------------------------------------------------------

/// A multiplier/multiplicand pair. The multiplier is the selected table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fact {
    pub multiplier: u32,
    pub multiplicand: u32,
}

impl Fact {
    pub fn new(multiplier: u32, multiplicand: u32) -> Self {
        Fact { multiplier, multiplicand }
    }

    /// The product. Overflows past `u32::MAX`; rounds only build facts whose
    /// table passes the `table * 12` check in `generate_round`.
    pub fn correct_answer(self) -> u32 {
        self.multiplier * self.multiplicand
    }

    /// The product, or `None` when it does not fit in a `u32`.
    pub fn checked_answer(self) -> Option<u32> {
        self.multiplier.checked_mul(self.multiplicand)
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {}", self.multiplier, self.multiplicand)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    MultipleChoice,
    FreeText,
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionType::MultipleChoice => write!(f, "multiple-choice"),
            QuestionType::FreeText       => write!(f, "free-text"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Same as the multiplicand; unique within a round.
    pub id: u32,
    pub multiplier: u32,
    pub multiplicand: u32,
    pub correct_answer: u32,
    pub question_type: QuestionType,
    /// Exactly four distinct positive values, present only for multiple-choice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<u32>>,
}

impl Question {
    pub fn fact(&self) -> Fact {
        Fact::new(self.multiplier, self.multiplicand)
    }

    pub fn is_multiple_choice(&self) -> bool {
        self.question_type == QuestionType::MultipleChoice
    }
}

// ---------------------------------------------------------------------------
// Distractor classes
// ---------------------------------------------------------------------------

/// Regular distractors must land within ±25% of the correct answer;
/// outliers are exempt, and at most one is admitted per question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistractorClass {
    Regular,
    Outlier,
}

impl fmt::Display for DistractorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistractorClass::Regular => write!(f, "regular"),
            DistractorClass::Outlier => write!(f, "outlier"),
        }
    }
}

// ---------------------------------------------------------------------------
// Round request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeRequest {
    pub table: u32,
    #[serde(default)]
    pub rng_seed: Option<u64>,
    #[serde(default = "default_probability")]
    pub multiple_choice_probability: f64,
}

fn default_probability() -> f64 {
    DEFAULT_MULTIPLE_CHOICE_PROBABILITY
}

impl PracticeRequest {
    /// Request a round for `table` with an entropy seed and the default
    /// multiple-choice probability.
    pub fn new(table: u32) -> Self {
        PracticeRequest {
            table,
            rng_seed: None,
            multiple_choice_probability: DEFAULT_MULTIPLE_CHOICE_PROBABILITY,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_multiple_choice_probability(mut self, probability: f64) -> Self {
        self.multiple_choice_probability = probability;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    pub round_id: String,
    pub table: u32,
    pub questions: Vec<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fact_product_and_display() {
        let fact = Fact::new(6, 7);
        assert_eq!(fact.correct_answer(), 42);
        assert_eq!(fact.to_string(), "6 × 7");
        assert_eq!(fact.checked_answer(), Some(42));
        assert_eq!(Fact::new(u32::MAX / 2, 12).checked_answer(), None);
    }

    #[test]
    fn question_type_uses_kebab_case_on_the_wire() {
        let json = serde_json::to_string(&QuestionType::MultipleChoice).unwrap();
        assert_eq!(json, "\"multiple-choice\"");
        let back: QuestionType = serde_json::from_str("\"free-text\"").unwrap();
        assert_eq!(back, QuestionType::FreeText);
    }

    #[test]
    fn request_defaults_when_deserialised() {
        let request: PracticeRequest = serde_json::from_str(r#"{"table": 9}"#).unwrap();
        assert_eq!(request.table, 9);
        assert_eq!(request.rng_seed, None);
        assert_eq!(request.multiple_choice_probability, DEFAULT_MULTIPLE_CHOICE_PROBABILITY);
    }

    #[test]
    fn free_text_questions_omit_choices() {
        let q = Question {
            id: 3,
            multiplier: 4,
            multiplicand: 3,
            correct_answer: 12,
            question_type: QuestionType::FreeText,
            choices: None,
        };
        let json = serde_json::to_value(&q).unwrap();
        assert!(json.get("choices").is_none());
        assert_eq!(q.fact(), Fact::new(4, 3));
    }
}
