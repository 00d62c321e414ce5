// Copyright 2025 Irreducible Inc.
//! Example drivers consuming the [`ample_int`] arbitrary-precision integer
//! library: factorial and greatest common divisor.

use ample_int::BigInt;

/// Computes `n!` by repeated multiply-and-decrement.
///
/// # Panics
/// Panics when `n` is negative.
pub fn factorial(n: &BigInt) -> BigInt {
	assert!(!n.is_negative(), "factorial of a negative number");
	let mut acc = BigInt::from(1u64);
	let mut n = n.clone();
	while !n.is_zero() {
		acc *= &n;
		n -= 1;
	}
	acc
}

/// Computes the greatest common divisor by repeated remainder-and-swap
/// (Euclid's algorithm). `gcd(0, 0)` is zero; the result is otherwise
/// positive regardless of the operands' signs.
pub fn gcd(mut a: BigInt, mut b: BigInt) -> BigInt {
	while !a.is_zero() {
		b %= &a;
		std::mem::swap(&mut a, &mut b);
	}
	if b.is_negative() {
		b.negate();
	}
	b
}
