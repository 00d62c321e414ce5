// Copyright 2025 Irreducible Inc.
use ample_examples::factorial;
use ample_int::BigInt;
use anyhow::{Context, Result, ensure};
use clap::Parser;

/// Factorial CLI: compute N! for an arbitrary-precision integer.
#[derive(Debug, Parser)]
#[command(name = "factorial", about = "Compute the factorial of a hex integer")]
struct Args {
	/// The number to take the factorial of, in hex
	n: String,
}

fn main() -> Result<()> {
	let _tracing_guard = tracing_profile::init_tracing().ok();
	let args = Args::parse();

	let n: BigInt = args
		.n
		.parse()
		.with_context(|| format!("not a valid number: {}", args.n))?;
	ensure!(!n.is_negative(), "factorial of a negative number: {}", args.n);

	let result = factorial(&n);
	println!("{result:x}");

	tracing::info!("computed {}! ({} bits)", n, result.bit_len());
	Ok(())
}
