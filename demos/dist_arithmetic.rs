//! Arithmetic on distributions: closed forms where they exist, sampling
//! convolution everywhere else.
//!
//! Run with: `cargo run --example dist_arithmetic`

use distops::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<()> {
    let env = Env::default();
    let mut rng = StdRng::seed_from_u64(42);

    // Cost model: fixed part plus two independent normal components.
    let labor = Distribution::from(SymbolicDist::normal(40.0, 5.0)?);
    let materials = Distribution::from(SymbolicDist::normal(25.0, 3.0)?);
    let total = binary_op(BinaryOp::Add, &labor, &materials, &env, &mut rng)?;

    // Sum of normals stays a normal, so the quantiles are analytic.
    println!("total cost: mean {:.1}, p95 {:.1}", total.mean()?, total.quantile(0.95)?);

    // Multiplying log-normals stays log-normal too.
    let traffic = Distribution::from(SymbolicDist::log_normal(8.0, 0.5)?);
    let conversion = Distribution::from(SymbolicDist::log_normal(-4.0, 0.3)?);
    let sales = binary_op(BinaryOp::Multiply, &traffic, &conversion, &env, &mut rng)?;
    println!("sales: median {:.1}", sales.quantile(0.5)?);

    // No closed form for uniform ratios, so this one falls back to sampling.
    let demand = Distribution::from(SymbolicDist::uniform(80.0, 120.0)?);
    let capacity = Distribution::from(SymbolicDist::triangular(90.0, 110.0, 130.0)?);
    let utilization = binary_op(BinaryOp::Divide, &demand, &capacity, &env, &mut rng)?;
    println!(
        "utilization: mean {:.3}, over capacity with p = {:.3}",
        utilization.mean()?,
        1.0 - utilization.cdf(1.0)
    );

    let shape = utilization.to_point_set(&env)?.as_shape();
    println!("  {}", shape.sparkline(50));
    Ok(())
}
