// Copyright 2025 Irreducible Inc.
//! Text conversion: hex parsing, hex and decimal printing.

use std::{
	fmt,
	str::{self, FromStr},
};

use crate::{
	BigInt,
	div::div_rem_limb,
	error::ParseBigIntError,
	limbs::{LIMB_BITS, Limb, LimbVec},
};

/// Hex digits that fit in one limb.
const NIBBLES_PER_LIMB: usize = (LIMB_BITS / 4) as usize;

impl FromStr for BigInt {
	type Err = ParseBigIntError;

	/// Parses `-?[0-9a-fA-F]+` as a hex integer.
	///
	/// Digits are consumed most significant first, each placed at its
	/// nibble position in a freshly grown store; the result only exists on
	/// success, so a failed parse never exposes a half-written value.
	fn from_str(s: &str) -> Result<Self, ParseBigIntError> {
		let (neg, digits) = match s.strip_prefix('-') {
			Some(rest) => (true, rest),
			None => (false, s),
		};
		if digits.is_empty() {
			return Err(ParseBigIntError::Empty);
		}
		let sign_offset = s.len() - digits.len();
		let n_digits = digits.len();
		let mut limbs = LimbVec::zeroed(n_digits.div_ceil(NIBBLES_PER_LIMB));
		for (pos, ch) in digits.char_indices() {
			let val = ch.to_digit(16).ok_or(ParseBigIntError::InvalidDigit {
				ch,
				position: sign_offset + pos,
			})? as Limb;
			let nibble = n_digits - 1 - pos;
			let shift = (nibble % NIBBLES_PER_LIMB) as u32 * 4;
			limbs.as_mut_slice()[nibble / NIBBLES_PER_LIMB] |= val << shift;
		}
		Ok(BigInt::from_magnitude(limbs, neg))
	}
}

impl fmt::LowerHex for BigInt {
	/// Canonical hex: sign prefix for negative nonzero values, the top limb
	/// without leading zero padding, every following limb zero-padded to
	/// the full limb width.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.neg {
			f.write_str("-")?;
		}
		let limbs = self.as_limbs();
		let top = limbs.len() - 1;
		write!(f, "{:x}", limbs[top])?;
		for &limb in limbs[..top].iter().rev() {
			write!(f, "{limb:016x}")?;
		}
		Ok(())
	}
}

impl fmt::Display for BigInt {
	/// Canonical decimal: a working magnitude copy is repeatedly divided by
	/// ten, the remainders collected as digits and emitted most significant
	/// first.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_zero() {
			return f.write_str("0");
		}
		if self.neg {
			f.write_str("-")?;
		}
		// ceil(bit_len / 3) + 1 bounds the decimal digit count
		let mut digits = Vec::with_capacity((self.bit_len() as usize).div_ceil(3) + 1);
		let mut scratch = self.limbs.clone();
		while !(scratch.len() == 1 && scratch.limb(0) == 0) {
			let digit = div_rem_limb(&mut scratch, 10);
			digits.push(b'0' + digit as u8);
		}
		digits.reverse();
		f.write_str(str::from_utf8(&digits).expect("decimal digits are ASCII"))
	}
}

impl fmt::Debug for BigInt {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "BigInt({self:x})")
	}
}
