// Copyright 2025 Irreducible Inc.
use ample_examples::gcd;
use ample_int::BigInt;
use anyhow::{Context, Result};
use clap::Parser;

/// GCD CLI: compute the greatest common divisor of two arbitrary-precision
/// integers.
#[derive(Debug, Parser)]
#[command(name = "gcd", about = "Compute the greatest common divisor of two hex integers")]
struct Args {
	/// First operand, in hex
	a: String,
	/// Second operand, in hex
	b: String,
}

fn main() -> Result<()> {
	let _tracing_guard = tracing_profile::init_tracing().ok();
	let args = Args::parse();

	let a: BigInt = args
		.a
		.parse()
		.with_context(|| format!("not a valid number: {}", args.a))?;
	let b: BigInt = args
		.b
		.parse()
		.with_context(|| format!("not a valid number: {}", args.b))?;

	let result = gcd(a, b);
	println!("{result}");

	tracing::info!("gcd of {} and {} computed", args.a, args.b);
	Ok(())
}
