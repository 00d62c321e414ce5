// Copyright 2025 Irreducible Inc.
use std::{
	cmp::Ordering,
	iter,
	ops::{Add, AddAssign, Sub, SubAssign},
};

use crate::{
	BigInt,
	cmp::cmp_magnitude_slices,
	limbs::{Limb, LimbVec},
};

/// Adds `src` into `dst` by magnitude with carry propagation.
///
/// Extends `dst` when shorter than `src`; the carry propagates through the
/// overlap and any higher `dst` limbs, and a carry escaping the top appends
/// a one limb. The operands are distinct borrows, so same-buffer aliasing
/// cannot arise; in-place doubling goes through a left shift instead.
pub(crate) fn uadd(dst: &mut LimbVec, src: &[Limb]) {
	if dst.len() < src.len() {
		dst.grow(src.len() - dst.len());
	}
	let d = dst.as_mut_slice();
	let mut carry = false;
	for (limb, &s) in iter::zip(d.iter_mut(), src) {
		let (sum, c1) = limb.overflowing_add(s);
		let (sum, c2) = sum.overflowing_add(carry as Limb);
		*limb = sum;
		carry = c1 || c2;
	}
	for limb in d[src.len()..].iter_mut() {
		if !carry {
			break;
		}
		let (sum, c) = limb.overflowing_add(1);
		*limb = sum;
		carry = c;
	}
	if carry {
		dst.push(1);
	}
}

/// Subtracts `src` from `dst` by magnitude with borrow propagation.
///
/// The caller must have established `dst >= src` by magnitude through a
/// prior compare; a borrow escaping the top limb is a contract violation.
/// Restores canonical form on exit.
pub(crate) fn usub(dst: &mut LimbVec, src: &[Limb]) {
	debug_assert!(dst.len() >= src.len(), "usub: minuend shorter than subtrahend");
	let d = dst.as_mut_slice();
	let mut borrow = false;
	for (limb, &s) in iter::zip(d.iter_mut(), src) {
		let (diff, b1) = limb.overflowing_sub(s);
		let (diff, b2) = diff.overflowing_sub(borrow as Limb);
		*limb = diff;
		borrow = b1 || b2;
	}
	let mut i = src.len();
	while borrow {
		assert!(i < d.len(), "usub: borrow escaped the top limb");
		let (diff, b) = d[i].overflowing_sub(1);
		d[i] = diff;
		borrow = b;
		i += 1;
	}
	dst.shrink();
}

impl BigInt {
	/// Signed addition of `src` taken with an overriding sign, the common
	/// core of addition and subtraction. Subtraction flips the sign here
	/// rather than mutating the caller's operand.
	fn add_signed(&mut self, src: &BigInt, src_neg: bool) {
		if self.neg == src_neg {
			uadd(&mut self.limbs, src.as_limbs());
		} else {
			// Signs differ: subtract the smaller magnitude from the larger;
			// the result takes the sign of the larger-magnitude operand.
			match cmp_magnitude_slices(self.as_limbs(), src.as_limbs()) {
				Ordering::Greater => usub(&mut self.limbs, src.as_limbs()),
				Ordering::Less => {
					let mut larger = src.limbs.clone();
					usub(&mut larger, self.as_limbs());
					self.limbs = larger;
					self.neg = src_neg;
				}
				Ordering::Equal => self.set_zero(),
			}
		}
		self.canonicalize();
	}
}

impl AddAssign<&BigInt> for BigInt {
	fn add_assign(&mut self, rhs: &BigInt) {
		self.add_signed(rhs, rhs.neg);
	}
}

impl SubAssign<&BigInt> for BigInt {
	fn sub_assign(&mut self, rhs: &BigInt) {
		self.add_signed(rhs, !rhs.neg);
	}
}

impl AddAssign<u64> for BigInt {
	/// Increments by a small unsigned delta.
	fn add_assign(&mut self, rhs: u64) {
		self.add_signed(&BigInt::from(rhs), false);
	}
}

impl SubAssign<u64> for BigInt {
	/// Decrements by a small unsigned delta.
	fn sub_assign(&mut self, rhs: u64) {
		self.add_signed(&BigInt::from(rhs), true);
	}
}

impl Add<&BigInt> for &BigInt {
	type Output = BigInt;

	fn add(self, rhs: &BigInt) -> BigInt {
		let mut sum = self.clone();
		sum += rhs;
		sum
	}
}

impl Sub<&BigInt> for &BigInt {
	type Output = BigInt;

	fn sub(self, rhs: &BigInt) -> BigInt {
		let mut difference = self.clone();
		difference -= rhs;
		difference
	}
}

impl Add<u64> for &BigInt {
	type Output = BigInt;

	fn add(self, rhs: u64) -> BigInt {
		let mut sum = self.clone();
		sum += rhs;
		sum
	}
}

impl Sub<u64> for &BigInt {
	type Output = BigInt;

	fn sub(self, rhs: u64) -> BigInt {
		let mut difference = self.clone();
		difference -= rhs;
		difference
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_carry_chain_across_limbs() {
		// (2^128 - 1) + 1 = 2^128
		let mut a: BigInt = "ffffffffffffffffffffffffffffffff".parse().unwrap();
		a += 1;
		assert_eq!(a.as_limbs(), &[0, 0, 1]);
	}

	#[test]
	fn test_carry_into_higher_existing_limbs() {
		// 2^64 + (2^64 - 1) keeps the length at two limbs
		let mut a: BigInt = "10000000000000000".parse().unwrap();
		a += u64::MAX;
		assert_eq!(a.as_limbs(), &[u64::MAX, 1]);
	}

	#[test]
	fn test_borrow_chain_across_limbs() {
		// 2^128 - 1 borrows through two zero limbs
		let mut a: BigInt = "100000000000000000000000000000000".parse().unwrap();
		a -= 1;
		assert_eq!(a.as_limbs(), &[u64::MAX, u64::MAX]);
	}

	#[test]
	fn test_mixed_sign_addition_takes_larger_sign() {
		let mut a = BigInt::from(-7i64);
		a += &BigInt::from(3u64);
		assert_eq!(a, BigInt::from(-4i64));

		let mut a = BigInt::from(3u64);
		a += &BigInt::from(-7i64);
		assert_eq!(a, BigInt::from(-4i64));
	}

	#[test]
	fn test_cancellation_normalizes_sign() {
		let mut a = BigInt::from(-5i64);
		a += &BigInt::from(5u64);
		assert!(a.is_zero());
		assert!(!a.is_negative());

		let mut b = BigInt::from(5u64);
		b -= &BigInt::from(5u64);
		assert!(b.is_zero());
		assert!(!b.is_negative());
	}

	#[test]
	fn test_subtraction_does_not_mutate_operand() {
		let mut a = BigInt::from(10u64);
		let b = BigInt::from(4u64);
		a -= &b;
		assert_eq!(a, BigInt::from(6u64));
		assert_eq!(b, BigInt::from(4u64));
		assert!(!b.is_negative());
	}

	#[test]
	fn test_decrement_below_zero() {
		let mut a = BigInt::from(1u64);
		a -= 3;
		assert_eq!(a, BigInt::from(-2i64));
	}

	#[test]
	#[should_panic(expected = "borrow escaped the top limb")]
	fn test_usub_ordering_violation_asserts() {
		let mut dst = LimbVec::from_limb(1);
		usub(&mut dst, &[2]);
	}
}
