// Copyright 2025 Irreducible Inc.
use std::{
	mem,
	ops::{Mul, MulAssign},
};

use crate::{
	BigInt,
	addsub::uadd,
	limbs::{Limb, LimbVec, mul_wide},
};

impl MulAssign<&BigInt> for BigInt {
	/// Binary long multiplication.
	///
	/// The previous value of `self` becomes the doubling copy, shifted left
	/// one bit per iteration; each set bit of `rhs` adds the current copy
	/// into a zero-initialized accumulator. One magnitude addition per set
	/// bit of `rhs` and `bit_len(rhs)` iterations total, each O(length).
	/// The result sign is the XOR of the operand signs.
	fn mul_assign(&mut self, rhs: &BigInt) {
		if self.is_zero() || rhs.is_zero() {
			self.set_zero();
			return;
		}
		let neg = self.neg ^ rhs.neg;
		let mut doubling = mem::replace(self, BigInt::zero());
		doubling.neg = false;
		for i in 0..rhs.bit_len() {
			if rhs.bit(i) {
				uadd(&mut self.limbs, doubling.as_limbs());
			}
			doubling <<= 1;
		}
		self.neg = neg;
		self.canonicalize();
	}
}

impl Mul<&BigInt> for &BigInt {
	type Output = BigInt;

	fn mul(self, rhs: &BigInt) -> BigInt {
		let mut product = self.clone();
		product *= rhs;
		product
	}
}

impl BigInt {
	/// Replaces `self` with its square.
	///
	/// Exploits the symmetry of `n * n`: each limb pair `(i, j)` with
	/// `i <= j` contributes its widening product at limb offset `i + j`,
	/// once on the diagonal and twice off it. One [`mul_wide`] per pair,
	/// half the pairwise work of the general product. The result is
	/// non-negative.
	pub fn square(&mut self) {
		if self.is_zero() {
			return;
		}
		let n = self.limbs.len();
		let mut result = LimbVec::zeroed(2 * n);
		let a = self.limbs.as_slice();
		for i in 0..n {
			for j in i..n {
				let (hi, lo) = mul_wide(a[i], a[j]);
				let repeats = if i == j { 1 } else { 2 };
				for _ in 0..repeats {
					add_at(result.as_mut_slice(), i + j, lo);
					add_at(result.as_mut_slice(), i + j + 1, hi);
				}
			}
		}
		self.limbs = result;
		self.neg = false;
		self.canonicalize();
	}
}

/// Adds `val` into `dst[at]`, rippling the carry upward.
///
/// The caller sizes `dst` to hold the full result, so the carry cannot run
/// off the end.
fn add_at(dst: &mut [Limb], at: usize, val: Limb) {
	let (sum, mut carry) = dst[at].overflowing_add(val);
	dst[at] = sum;
	let mut i = at + 1;
	while carry {
		debug_assert!(i < dst.len(), "add_at: carry ran off the result");
		let (sum, c) = dst[i].overflowing_add(1);
		dst[i] = sum;
		carry = c;
		i += 1;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_single_limb_product() {
		let product = &BigInt::from(6u64) * &BigInt::from(7u64);
		assert_eq!(product, BigInt::from(42u64));
	}

	#[test]
	fn test_product_crosses_limb_boundary() {
		// (2^64 + 1) * (2^64 + 2) = 2^128 + 3 * 2^64 + 2
		let a: BigInt = "10000000000000001".parse().unwrap();
		let b: BigInt = "10000000000000002".parse().unwrap();
		let product = &a * &b;
		assert_eq!(product.as_limbs(), &[2, 3, 1]);
	}

	#[test]
	fn test_sign_rules() {
		let a = BigInt::from(-3i64);
		let b = BigInt::from(5u64);
		assert_eq!(&a * &b, BigInt::from(-15i64));
		assert_eq!(&b * &a, BigInt::from(-15i64));
		assert_eq!(&a * &a, BigInt::from(9u64));
	}

	#[test]
	fn test_multiply_by_zero_normalizes_sign() {
		let mut a = BigInt::from(-3i64);
		a *= &BigInt::zero();
		assert!(a.is_zero());
		assert!(!a.is_negative());
	}

	#[test]
	fn test_square_matches_mul() {
		// odd limb count
		let a: BigInt = "1ffffffffffffffffffffffffffffffffff".parse().unwrap();
		let product = &a * &a;
		let mut squared = a;
		squared.square();
		assert_eq!(squared, product);
	}

	#[test]
	fn test_square_of_negative_is_positive() {
		let mut a = BigInt::from(-12i64);
		a.square();
		assert_eq!(a, BigInt::from(144u64));
	}

	#[test]
	fn test_square_all_ones_limbs() {
		// (2^128 - 1)^2 = 2^256 - 2^129 + 1
		let mut a: BigInt = "ffffffffffffffffffffffffffffffff".parse().unwrap();
		a.square();
		assert_eq!(a.as_limbs(), &[1, 0, u64::MAX - 1, u64::MAX]);
	}
}
