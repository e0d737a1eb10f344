//! Multiple-choice answer sets: one correct answer plus three distractors.
//!
//! Candidates are admitted in layers, stopping as soon as four values exist:
//!
//! 1. regular strategies, in shuffled order, within ±25% of the answer;
//! 2. at most one outlier strategy, ignoring the range;
//! 3. symmetric offsets `answer ± k` inside the range;
//! 4. symmetric offsets with no range at all, continuing past the range limit.
//!
//! Layer 4 always terminates because offsets above the answer are unbounded.

use rand::Rng;
use tracing::debug;

use crate::practice_engine::{
    models::DistractorClass,
    shuffle::{shuffle, shuffled},
    strategies::DistractorStrategy,
};

/// Number of options presented for a multiple-choice question.
pub const CHOICE_COUNT: usize = 4;

/// Multiplicand assumed when the caller supplies only an answer.
const SYNTHETIC_MULTIPLICAND: u32 = 6;

/// True if `candidate` lies within `[0.75 × correct, 1.25 × correct]`.
pub fn in_regular_range(candidate: i64, correct: i64) -> bool {
    4 * candidate >= 3 * correct && 4 * candidate <= 5 * correct
}

/// Accumulates distinct positive choices alongside the correct answer.
struct ChoiceSet {
    correct: i64,
    values: Vec<i64>,
}

impl ChoiceSet {
    fn new(correct: i64) -> Self {
        ChoiceSet { correct, values: vec![correct] }
    }

    fn is_full(&self) -> bool {
        self.values.len() >= CHOICE_COUNT
    }

    /// Admit `candidate` if it is a usable, unseen wrong answer.
    fn offer(&mut self, candidate: i64, range_bound: bool) -> bool {
        let usable = candidate > 0
            && u32::try_from(candidate).is_ok()
            && candidate != self.correct
            && !self.values.contains(&candidate)
            && (!range_bound || in_regular_range(candidate, self.correct));
        if usable {
            self.values.push(candidate);
        }
        usable
    }
}

/// Build four distinct positive choices containing `correct_answer`, in random order.
///
/// `fact` is the `(multiplier, multiplicand)` pair behind the answer. Without
/// it a synthetic fact `(correct_answer / 6, 6)` feeds the strategies.
/// `correct_answer` must be positive.
pub fn generate_answer_choices<R: Rng>(
    rng: &mut R,
    correct_answer: u32,
    fact: Option<(u32, u32)>,
) -> Vec<u32> {
    debug_assert!(correct_answer > 0, "choices need a positive answer");

    let (multiplier, multiplicand) = fact.unwrap_or((
        correct_answer / SYNTHETIC_MULTIPLICAND,
        SYNTHETIC_MULTIPLICAND,
    ));
    let (multiplier, multiplicand) = (i64::from(multiplier), i64::from(multiplicand));
    let correct = i64::from(correct_answer);
    let mut set = ChoiceSet::new(correct);

    // Regular strategies, each tried once.
    let regular = shuffled(rng, &DistractorStrategy::of_class(DistractorClass::Regular));
    for strategy in regular {
        if set.is_full() {
            break;
        }
        if let Some(candidate) = strategy.generate(rng, multiplier, multiplicand, correct) {
            set.offer(candidate, true);
        }
    }

    // A single outlier at most.
    if !set.is_full() {
        let mut outliers = DistractorStrategy::of_class(DistractorClass::Outlier);
        shuffle(rng, &mut outliers);
        for strategy in outliers {
            let admitted = strategy
                .generate(rng, multiplier, multiplicand, correct)
                .is_some_and(|candidate| set.offer(candidate, false));
            if admitted {
                break;
            }
        }
    }

    let limit = 2 * (correct / 4).max(3);
    if !set.is_full() {
        debug!(correct, found = set.values.len() - 1, "strategies exhausted, using offset search");
        for k in 1..=limit {
            if set.is_full() {
                break;
            }
            set.offer(correct + k, true);
            if !set.is_full() {
                set.offer(correct - k, true);
            }
        }
    }

    if !set.is_full() {
        debug!(correct, found = set.values.len() - 1, "range exhausted, dropping range constraint");
        let mut k = limit + 1;
        while !set.is_full() {
            set.offer(correct + k, false);
            if !set.is_full() {
                set.offer(correct - k, false);
            }
            k += 1;
        }
    }

    let mut choices: Vec<u32> = set
        .values
        .into_iter()
        .filter_map(|v| u32::try_from(v).ok())
        .collect();
    shuffle(rng, &mut choices);
    choices
}
