use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use tracing::debug;

use crate::error::{DrillError, Result};
use crate::practice_engine::{
    choices::generate_answer_choices,
    models::{PracticeRequest, Question, QuestionType, Round, QUESTIONS_PER_TABLE},
    shuffle::shuffle,
};

/// Tables offered to the player.
pub fn available_tables() -> Vec<u32> {
    (2..=12).collect()
}

/// Generate a unique round ID from table + RNG, e.g. `T07-1A2B3C4D`.
fn make_round_id(table: u32, rng: &mut impl RngCore) -> String {
    format!("T{:02}-{:08X}", table, rng.next_u32())
}

/// Build one question per multiplicand 1..=12 for `table`, in shuffled order.
///
/// Each question is independently multiple-choice with probability
/// `multiple_choice_probability`, otherwise free-text. `table` must be positive
/// with `table * 12` fitting in a `u32`, and the probability within
/// `0.0..=1.0`; [`generate_round`] checks both.
pub fn generate_questions<R: Rng>(
    rng: &mut R,
    table: u32,
    multiple_choice_probability: f64,
) -> Vec<Question> {
    let mut questions = Vec::with_capacity(QUESTIONS_PER_TABLE as usize);
    for multiplicand in 1..=QUESTIONS_PER_TABLE {
        let correct_answer = table * multiplicand;
        let question_type = if rng.gen_bool(multiple_choice_probability) {
            QuestionType::MultipleChoice
        } else {
            QuestionType::FreeText
        };
        let choices = match question_type {
            QuestionType::MultipleChoice => Some(generate_answer_choices(
                rng,
                correct_answer,
                Some((table, multiplicand)),
            )),
            QuestionType::FreeText => None,
        };
        questions.push(Question {
            id: multiplicand,
            multiplier: table,
            multiplicand,
            correct_answer,
            question_type,
            choices,
        });
    }

    shuffle(rng, &mut questions);
    questions
}

/// Entry point: validate `request`, seed the RNG, and generate a full round.
pub fn generate_round(request: PracticeRequest) -> Result<Round> {
    if request.table == 0 || request.table.checked_mul(QUESTIONS_PER_TABLE).is_none() {
        return Err(DrillError::InvalidTable(request.table));
    }
    let probability = request.multiple_choice_probability;
    if !(0.0..=1.0).contains(&probability) {
        return Err(DrillError::InvalidProbability(probability));
    }

    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let round_id = make_round_id(request.table, &mut rng);
    let questions = generate_questions(&mut rng, request.table, probability);
    debug!(
        %round_id,
        table = request.table,
        multiple_choice = questions.iter().filter(|q| q.is_multiple_choice()).count(),
        "generated round"
    );

    Ok(Round { round_id, table: request.table, questions })
}
