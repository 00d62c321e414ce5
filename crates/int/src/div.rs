// Copyright 2025 Irreducible Inc.
use std::{
	cmp::Ordering,
	ops::{Div, DivAssign, Rem, RemAssign},
};

use crate::{
	BigInt,
	addsub::usub,
	cmp::cmp_magnitude_slices,
	limbs::{LIMB_BITS, Limb, LimbVec},
};

/// Magnitude long division, one quotient bit at a time.
///
/// A defensive copy of the divisor magnitude is shifted into alignment with
/// the dividend's most significant bit, then walked back down one bit per
/// step; whenever the running remainder is at least the aligned divisor it
/// is subtracted and the corresponding quotient bit set. The remainder
/// always drives the loop; the quotient is only materialized when requested,
/// sparing the quotient buffer for remainder-only callers.
///
/// # Panics
/// Panics when `divisor` is zero.
fn div_rem_magnitude(
	dividend: &BigInt,
	divisor: &BigInt,
	want_quotient: bool,
) -> (LimbVec, LimbVec) {
	assert!(!divisor.is_zero(), "division by zero");
	if cmp_magnitude_slices(dividend.as_limbs(), divisor.as_limbs()) == Ordering::Less {
		return (LimbVec::from_limb(0), dividend.limbs.clone());
	}

	let steps = dividend.bit_len() - divisor.bit_len();
	let mut aligned = BigInt {
		neg: false,
		limbs: divisor.limbs.clone(),
	};
	aligned <<= steps as u32;
	let mut remainder = dividend.limbs.clone();
	let mut quotient = want_quotient.then(|| {
		LimbVec::zeroed((steps / LIMB_BITS as u64) as usize + 1)
	});

	for k in (0..=steps).rev() {
		if cmp_magnitude_slices(remainder.as_slice(), aligned.as_limbs()) != Ordering::Less {
			usub(&mut remainder, aligned.as_limbs());
			if let Some(quotient) = &mut quotient {
				set_bit(quotient, k);
			}
		}
		aligned >>= 1;
	}

	let mut quotient = quotient.unwrap_or_else(|| LimbVec::from_limb(0));
	quotient.shrink();
	remainder.shrink();
	(quotient, remainder)
}

fn set_bit(limbs: &mut LimbVec, bit: u64) {
	let i = (bit / LIMB_BITS as u64) as usize;
	limbs.as_mut_slice()[i] |= 1 << (bit % LIMB_BITS as u64);
}

/// Divides the magnitude by a single nonzero limb in place, returning the
/// remainder. One widening division step per limb, most significant first;
/// this is the short-division engine behind decimal printing.
pub(crate) fn div_rem_limb(limbs: &mut LimbVec, divisor: Limb) -> Limb {
	debug_assert!(divisor != 0, "division by zero");
	let mut rem: u128 = 0;
	for limb in limbs.as_mut_slice().iter_mut().rev() {
		let cur = rem << LIMB_BITS | *limb as u128;
		*limb = (cur / divisor as u128) as Limb;
		rem = cur % divisor as u128;
	}
	limbs.shrink();
	rem as Limb
}

impl BigInt {
	/// Quotient and remainder of `self / rhs` in one pass.
	///
	/// The quotient sign is the XOR of the operand signs; the remainder
	/// follows the dividend's sign. Both outputs are canonical and satisfy
	/// `quotient * rhs + remainder == self` with the remainder's magnitude
	/// strictly below the divisor's.
	///
	/// # Panics
	/// Panics when `rhs` is zero. Callers needing graceful handling must
	/// test for zero first.
	pub fn div_rem(&self, rhs: &BigInt) -> (BigInt, BigInt) {
		let (quotient, remainder) = div_rem_magnitude(self, rhs, true);
		(
			BigInt::from_magnitude(quotient, self.neg ^ rhs.neg),
			BigInt::from_magnitude(remainder, self.neg),
		)
	}
}

impl DivAssign<&BigInt> for BigInt {
	/// Quotient-only division; the remainder stays internal to the loop.
	///
	/// # Panics
	/// Panics when `rhs` is zero.
	fn div_assign(&mut self, rhs: &BigInt) {
		let (quotient, _) = div_rem_magnitude(self, rhs, true);
		*self = BigInt::from_magnitude(quotient, self.neg ^ rhs.neg);
	}
}

impl RemAssign<&BigInt> for BigInt {
	/// Remainder-only division; no quotient buffer is allocated.
	///
	/// # Panics
	/// Panics when `rhs` is zero.
	fn rem_assign(&mut self, rhs: &BigInt) {
		let (_, remainder) = div_rem_magnitude(self, rhs, false);
		*self = BigInt::from_magnitude(remainder, self.neg);
	}
}

impl Div<&BigInt> for &BigInt {
	type Output = BigInt;

	fn div(self, rhs: &BigInt) -> BigInt {
		let mut quotient = self.clone();
		quotient /= rhs;
		quotient
	}
}

impl Rem<&BigInt> for &BigInt {
	type Output = BigInt;

	fn rem(self, rhs: &BigInt) -> BigInt {
		let mut remainder = self.clone();
		remainder %= rhs;
		remainder
	}
}
