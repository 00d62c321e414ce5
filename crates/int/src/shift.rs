// Copyright 2025 Irreducible Inc.
use std::ops::{Shl, ShlAssign, Shr, ShrAssign};

use crate::{
	BigInt,
	limbs::{LIMB_BITS, Limb},
};

impl ShrAssign<u32> for BigInt {
	/// Logical right shift by an arbitrary bit count.
	///
	/// Whole-limb drops from the bottom first, then a sub-limb shift
	/// carrying bits down from each limb into the one below. Shifting the
	/// entire magnitude out yields zero.
	fn shr_assign(&mut self, bits: u32) {
		let limb_shift = (bits / LIMB_BITS) as usize;
		let bit_shift = bits % LIMB_BITS;
		if limb_shift >= self.limbs.len() {
			self.set_zero();
			return;
		}
		self.limbs.drop_low(limb_shift);
		if bit_shift != 0 {
			let d = self.limbs.as_mut_slice();
			for i in 0..d.len() {
				let next = if i + 1 < d.len() { d[i + 1] } else { 0 };
				d[i] = (d[i] >> bit_shift) | (next << (LIMB_BITS - bit_shift));
			}
		}
		self.canonicalize();
	}
}

impl ShlAssign<u32> for BigInt {
	/// Logical left shift by an arbitrary bit count; shifting zero is a
	/// no-op.
	///
	/// Existing limbs move up by whole-limb positions with the vacated low
	/// limbs zero-filled, then a sub-limb shift carries bits up into the
	/// next limb, appending one more limb when nonzero bits leave the top.
	fn shl_assign(&mut self, bits: u32) {
		if self.is_zero() {
			return;
		}
		let limb_shift = (bits / LIMB_BITS) as usize;
		let bit_shift = bits % LIMB_BITS;
		if limb_shift > 0 {
			let old_len = self.limbs.len();
			self.limbs.grow(limb_shift);
			let d = self.limbs.as_mut_slice();
			d.copy_within(..old_len, limb_shift);
			d[..limb_shift].fill(0);
		}
		if bit_shift != 0 {
			let mut carry: Limb = 0;
			for limb in self.limbs.as_mut_slice()[limb_shift..].iter_mut() {
				let shifted = (*limb << bit_shift) | carry;
				carry = *limb >> (LIMB_BITS - bit_shift);
				*limb = shifted;
			}
			if carry != 0 {
				self.limbs.push(carry);
			}
		}
	}
}

impl Shr<u32> for BigInt {
	type Output = BigInt;

	fn shr(mut self, bits: u32) -> BigInt {
		self >>= bits;
		self
	}
}

impl Shl<u32> for BigInt {
	type Output = BigInt;

	fn shl(mut self, bits: u32) -> BigInt {
		self <<= bits;
		self
	}
}
