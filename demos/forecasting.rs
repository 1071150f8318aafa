//! Build a blended forecast, inspect it, and score it against the outcome.
//!
//! Run with: `cargo run --example forecasting`

use distops::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<()> {
    let env = Env::default();
    let mut rng = StdRng::seed_from_u64(7);

    // Two experts disagree about next quarter's revenue (in millions).
    let optimistic = Distribution::from(SymbolicDist::normal(12.0, 2.0)?);
    let pessimistic = Distribution::from(SymbolicDist::log_normal(1.6, 0.4)?);

    // Blend them 60/40 and look at the result.
    let estimate = mixture(&[(optimistic, 0.6), (pessimistic, 0.4)], &env, &mut rng)?;
    let shape = estimate.to_point_set(&env)?.as_shape();
    println!("blended forecast:");
    println!("  {}", shape.sparkline(50));
    println!("  mean   = {:.2}", estimate.mean()?);
    println!("  p10    = {:.2}", estimate.quantile(0.1)?);
    println!("  p90    = {:.2}", estimate.quantile(0.9)?);

    // The quarter closes at 9.3. How surprised was the blend?
    let outcome = 9.3;
    let score = log_score_scalar_answer(&estimate, outcome, None, &env)?;
    println!("surprisal at {outcome}: {score:.3}");

    // Against a vague prior, the blend looks even better.
    let prior = Distribution::from(SymbolicDist::normal(10.0, 10.0)?);
    let relative = log_score_scalar_answer(&estimate, outcome, Some(&prior), &env)?;
    println!("relative to a vague prior: {relative:.3}");
    Ok(())
}
