// Copyright 2025 Irreducible Inc.
//! Limb storage underlying [`BigInt`](crate::BigInt).

/// One fixed-width unsigned word of the multi-word representation.
pub type Limb = u64;

/// Number of bits in a [`Limb`].
pub const LIMB_BITS: u32 = Limb::BITS;

/// Initial allocation of a freshly constructed store, in limbs.
const DEFAULT_CAPACITY: usize = 16;

/// A growable little-endian sequence of limbs with an explicit logical
/// length.
///
/// Index 0 is the least significant limb. Growth zero-fills every newly
/// exposed slot and the backing allocation grows geometrically. Shrinking is
/// logical only and never reallocates.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct LimbVec {
	limbs: Vec<Limb>,
}

impl LimbVec {
	/// A store holding the single given limb.
	pub fn from_limb(limb: Limb) -> Self {
		let mut limbs = Vec::with_capacity(DEFAULT_CAPACITY);
		limbs.push(limb);
		LimbVec { limbs }
	}

	/// A store of `len` zero limbs.
	pub fn zeroed(len: usize) -> Self {
		LimbVec {
			limbs: vec![0; len],
		}
	}

	/// Limbs in use.
	pub fn len(&self) -> usize {
		self.limbs.len()
	}

	/// Limb at `i`, or zero when `i` is at or beyond the logical length.
	///
	/// Carry and borrow loops may look one limb past an operand's declared
	/// length; they must observe zero there, never stale allocation
	/// contents.
	pub fn limb(&self, i: usize) -> Limb {
		self.limbs.get(i).copied().unwrap_or(0)
	}

	/// Increases the logical length by `extra` limbs, zero-filling every
	/// newly exposed slot.
	pub fn grow(&mut self, extra: usize) {
		let new_len = self.limbs.len() + extra;
		if new_len > self.limbs.capacity() {
			let mut cap = self.limbs.capacity().max(DEFAULT_CAPACITY);
			while cap < new_len {
				cap *= 2;
			}
			self.limbs.reserve_exact(cap - self.limbs.len());
		}
		self.limbs.resize(new_len, 0);
	}

	/// Appends one limb above the current top.
	pub fn push(&mut self, limb: Limb) {
		self.limbs.push(limb);
	}

	/// Drops high-order zero limbs while more than one limb remains,
	/// restoring canonical form. Logical only.
	pub fn shrink(&mut self) {
		while self.limbs.len() > 1 && self.limbs[self.limbs.len() - 1] == 0 {
			self.limbs.pop();
		}
	}

	/// Removes the `count` least significant limbs, moving the rest down.
	pub fn drop_low(&mut self, count: usize) {
		self.limbs.drain(..count);
	}

	/// Collapses to the single-limb zero, keeping the allocation.
	pub fn set_zero(&mut self) {
		self.limbs.clear();
		self.limbs.push(0);
	}

	pub fn as_slice(&self) -> &[Limb] {
		&self.limbs
	}

	pub fn as_mut_slice(&mut self) -> &mut [Limb] {
		&mut self.limbs
	}
}

/// Widening limb product.
///
/// Multiplies two limbs and returns the full 128-bit result split into high
/// and low limbs, respectively.
pub(crate) fn mul_wide(a: Limb, b: Limb) -> (Limb, Limb) {
	let wide = (a as u128) * (b as u128);
	((wide >> LIMB_BITS) as Limb, wide as Limb)
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	/// Reference product from four half-limb partial products with explicit
	/// carry handling, kept independent of [`mul_wide`].
	fn mul_wide_by_halves(a: Limb, b: Limb) -> (Limb, Limb) {
		const HALF: u32 = LIMB_BITS / 2;
		const MASK: Limb = (1 << HALF) - 1;
		let (a_lo, a_hi) = (a & MASK, a >> HALF);
		let (b_lo, b_hi) = (b & MASK, b >> HALF);

		let ll = a_lo * b_lo;
		let lh = a_lo * b_hi;
		let hl = a_hi * b_lo;
		let hh = a_hi * b_hi;

		// lh + hl can overflow one limb; its carry lands at bit HALF of the
		// high limb
		let (mid, mid_carry) = lh.overflowing_add(hl);
		let (lo, lo_carry) = ll.overflowing_add(mid << HALF);
		let hi = hh + (mid >> HALF) + ((mid_carry as Limb) << HALF) + lo_carry as Limb;
		(hi, lo)
	}

	#[test]
	fn test_grow_zero_fills_past_default_capacity() {
		let mut v = LimbVec::from_limb(7);
		v.grow(3 * DEFAULT_CAPACITY);
		assert_eq!(v.len(), 1 + 3 * DEFAULT_CAPACITY);
		assert_eq!(v.limb(0), 7);
		for i in 1..v.len() {
			assert_eq!(v.limb(i), 0);
		}
	}

	#[test]
	fn test_limb_reads_zero_past_length() {
		let v = LimbVec::from_limb(u64::MAX);
		assert_eq!(v.limb(0), u64::MAX);
		assert_eq!(v.limb(1), 0);
		assert_eq!(v.limb(100), 0);
	}

	#[test]
	fn test_shrink_keeps_one_limb() {
		let mut v = LimbVec::zeroed(5);
		v.shrink();
		assert_eq!(v.len(), 1);
		assert_eq!(v.limb(0), 0);

		let mut v = LimbVec::zeroed(4);
		v.as_mut_slice()[1] = 3;
		v.shrink();
		assert_eq!(v.len(), 2);
	}

	#[test]
	fn test_drop_low() {
		let mut v = LimbVec::zeroed(4);
		for (i, limb) in v.as_mut_slice().iter_mut().enumerate() {
			*limb = i as Limb;
		}
		v.drop_low(2);
		assert_eq!(v.as_slice(), &[2, 3]);
	}

	#[test]
	fn test_mul_wide_corners() {
		assert_eq!(mul_wide(0, u64::MAX), (0, 0));
		assert_eq!(mul_wide(1, u64::MAX), (0, u64::MAX));
		// (2^64 - 1)^2 = 2^128 - 2^65 + 1
		assert_eq!(mul_wide(u64::MAX, u64::MAX), (u64::MAX - 1, 1));
	}

	proptest! {
		#[test]
		fn prop_mul_wide_matches_half_decomposition(a in any::<u64>(), b in any::<u64>()) {
			assert_eq!(mul_wide(a, b), mul_wide_by_halves(a, b));
			// Commutative
			assert_eq!(mul_wide(a, b), mul_wide(b, a));
		}

		#[test]
		fn prop_grow_exposes_only_zeros(init in any::<u64>(), extra in 0usize..200) {
			let mut v = LimbVec::from_limb(init);
			v.grow(extra);
			prop_assert_eq!(v.len(), 1 + extra);
			prop_assert_eq!(v.limb(0), init);
			for i in 1..v.len() {
				prop_assert_eq!(v.limb(i), 0);
			}
		}
	}
}
