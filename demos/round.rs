//! Print one seeded practice round and a simulated session summary.
//!
//! Run with: `cargo run --example round -- 7`
//!
//! Set `RUST_LOG=times_drill_gen=debug` to watch the choice generator fall
//! back to offset searches on small answers.

use rand::{rngs::StdRng, SeedableRng};
use times_drill_gen::{
    format_question, format_time_detailed, generate_round, GameSession, PersonalBests,
    PracticeRequest, QuestionResult, TableResult,
};
use tracing_subscriber::EnvFilter;

fn main() -> times_drill_gen::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let table = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(7);

    let round = generate_round(PracticeRequest::new(table).with_seed(42))?;
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Round {}  ({} times table)", round.round_id, round.table);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut rng = StdRng::seed_from_u64(42);
    let started_at = chrono::Utc::now();
    let mut results = Vec::with_capacity(round.questions.len());
    for (i, q) in round.questions.iter().enumerate() {
        let prompt = format_question(q.multiplier, q.multiplicand);
        match &q.choices {
            Some(choices) => {
                let shown: Vec<String> = choices.iter().map(|c| c.to_string()).collect();
                println!("  {:>2}. {prompt} = ?   [{}]", i + 1, shown.join(" | "));
            }
            None => println!("  {:>2}. {prompt} = ____", i + 1),
        }
        // Simulated player: pick the first option, or type the answer.
        let answer = q.choices.as_ref().map_or(q.correct_answer, |c| c[0]);
        results.push(QuestionResult::grade(q, answer.to_string(), 1_500 + 250 * i as u64));
    }

    let result = TableResult {
        table: round.table,
        time_ms: results.iter().map(|r| r.time_taken_ms).sum(),
        questions: results,
        started_at,
        completed_at: chrono::Utc::now(),
    };
    println!();
    println!(
        "  {}/{} correct in {}",
        result.correct_count(),
        result.questions.len(),
        format_time_detailed(result.time_ms)
    );

    let mut session = GameSession::start(&mut rng);
    session.record_table(result);
    session.finish();
    let mut bests = PersonalBests::new();
    if bests.update_from(&session) {
        println!("  New personal best for the {table} times table!");
    }
    Ok(())
}
