//! Distractor strategies: heuristics that model real arithmetic slips.
//!
//! Each strategy maps `(multiplier, multiplicand, correct)` to a candidate
//! wrong answer, or `None` when the rule has nothing to offer for that fact.
//! Strategies do not validate their own output; the choice generator
//! discards candidates that are non-positive, equal to the correct answer,
//! or (for regular strategies) outside the ±25% window.
//!
//! Arithmetic is done in `i64` so rules such as `multiplier - 1` can go
//! to zero or below without wrapping.

use std::fmt;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::practice_engine::models::DistractorClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistractorStrategy {
    OffByOne,
    OffByTwo,
    CloseSameParity,
    FactorPlusOne,
    FactorMinusOne,
    MultiplierPlusOne,
    MultiplierMinusOne,
    SkipCountPlus,
    SkipCountMinus,
    AdditionInstead,
    SquareOfMultiplier,
    SquareOfMultiplicand,
    DigitReversal,
    OutlierHigh,
    OutlierLow,
    CloseMultipleHigh,
    CloseMultipleLow,
    PlusTen,
    MinusTen,
    Doubled,
    Halved,
}

impl DistractorStrategy {
    /// The full, fixed catalog.
    pub const ALL: [DistractorStrategy; 21] = [
        DistractorStrategy::OffByOne,
        DistractorStrategy::OffByTwo,
        DistractorStrategy::CloseSameParity,
        DistractorStrategy::FactorPlusOne,
        DistractorStrategy::FactorMinusOne,
        DistractorStrategy::MultiplierPlusOne,
        DistractorStrategy::MultiplierMinusOne,
        DistractorStrategy::SkipCountPlus,
        DistractorStrategy::SkipCountMinus,
        DistractorStrategy::AdditionInstead,
        DistractorStrategy::SquareOfMultiplier,
        DistractorStrategy::SquareOfMultiplicand,
        DistractorStrategy::DigitReversal,
        DistractorStrategy::OutlierHigh,
        DistractorStrategy::OutlierLow,
        DistractorStrategy::CloseMultipleHigh,
        DistractorStrategy::CloseMultipleLow,
        DistractorStrategy::PlusTen,
        DistractorStrategy::MinusTen,
        DistractorStrategy::Doubled,
        DistractorStrategy::Halved,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DistractorStrategy::OffByOne             => "off-by-one",
            DistractorStrategy::OffByTwo             => "off-by-two",
            DistractorStrategy::CloseSameParity      => "close-same-parity",
            DistractorStrategy::FactorPlusOne        => "factor-plus-one",
            DistractorStrategy::FactorMinusOne       => "factor-minus-one",
            DistractorStrategy::MultiplierPlusOne    => "multiplier-plus-one",
            DistractorStrategy::MultiplierMinusOne   => "multiplier-minus-one",
            DistractorStrategy::SkipCountPlus        => "skip-count-plus",
            DistractorStrategy::SkipCountMinus       => "skip-count-minus",
            DistractorStrategy::AdditionInstead      => "addition-instead",
            DistractorStrategy::SquareOfMultiplier   => "square-of-multiplier",
            DistractorStrategy::SquareOfMultiplicand => "square-of-multiplicand",
            DistractorStrategy::DigitReversal        => "digit-reversal",
            DistractorStrategy::OutlierHigh          => "outlier-high",
            DistractorStrategy::OutlierLow           => "outlier-low",
            DistractorStrategy::CloseMultipleHigh    => "close-multiple-high",
            DistractorStrategy::CloseMultipleLow     => "close-multiple-low",
            DistractorStrategy::PlusTen              => "plus-ten",
            DistractorStrategy::MinusTen             => "minus-ten",
            DistractorStrategy::Doubled              => "doubled",
            DistractorStrategy::Halved               => "halved",
        }
    }

    pub fn class(self) -> DistractorClass {
        match self {
            DistractorStrategy::OutlierHigh | DistractorStrategy::OutlierLow => DistractorClass::Outlier,
            _ => DistractorClass::Regular,
        }
    }

    /// Strategies of one class, in catalog order.
    pub fn of_class(class: DistractorClass) -> Vec<DistractorStrategy> {
        Self::ALL.iter().copied().filter(|s| s.class() == class).collect()
    }

    /// Produce one candidate. Randomised rules draw from `rng`; the rest are pure.
    pub fn generate<R: Rng>(
        self,
        rng: &mut R,
        multiplier: i64,
        multiplicand: i64,
        correct: i64,
    ) -> Option<i64> {
        let candidate = match self {
            DistractorStrategy::OffByOne        => correct + random_sign(rng),
            DistractorStrategy::OffByTwo        => correct + random_sign(rng) * 2,
            DistractorStrategy::CloseSameParity => {
                let step = [2, 4, 6][rng.gen_range(0..3)];
                correct + random_sign(rng) * step
            }
            DistractorStrategy::FactorPlusOne      => multiplier * (multiplicand + 1),
            DistractorStrategy::FactorMinusOne     => multiplier * (multiplicand - 1),
            DistractorStrategy::MultiplierPlusOne  => (multiplier + 1) * multiplicand,
            DistractorStrategy::MultiplierMinusOne => (multiplier - 1) * multiplicand,
            DistractorStrategy::SkipCountPlus      => correct + multiplier,
            DistractorStrategy::SkipCountMinus     => correct - multiplier,
            DistractorStrategy::AdditionInstead    => multiplier + multiplicand,
            DistractorStrategy::SquareOfMultiplier   => multiplier * multiplier,
            DistractorStrategy::SquareOfMultiplicand => multiplicand * multiplicand,
            DistractorStrategy::DigitReversal => return digit_reversal(correct),
            DistractorStrategy::OutlierHigh => correct + rng.gen_range(15..=35),
            DistractorStrategy::OutlierLow  => (correct - rng.gen_range(10..=25)).max(1),
            DistractorStrategy::CloseMultipleHigh => {
                if multiplier <= 0 {
                    return None;
                }
                (correct.div_euclid(multiplier) + 1) * multiplier
            }
            DistractorStrategy::CloseMultipleLow => {
                if multiplier <= 0 {
                    return None;
                }
                let below = if correct.rem_euclid(multiplier) == 0 {
                    correct - multiplier
                } else {
                    correct.div_euclid(multiplier) * multiplier
                };
                below.max(multiplier)
            }
            DistractorStrategy::PlusTen  => correct + 10,
            DistractorStrategy::MinusTen => correct - 10,
            DistractorStrategy::Doubled  => correct * 2,
            DistractorStrategy::Halved   => correct.div_euclid(2),
        };
        Some(candidate)
    }
}

impl fmt::Display for DistractorStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn random_sign<R: Rng>(rng: &mut R) -> i64 {
    if rng.gen_bool(0.5) { 1 } else { -1 }
}

/// Swap the tens and units digit of a two-digit answer (72 -> 27).
/// Anything outside 10..=99 has no reversal.
pub fn digit_reversal(correct: i64) -> Option<i64> {
    if !(10..=99).contains(&correct) {
        return None;
    }
    Some((correct % 10) * 10 + correct / 10)
}
