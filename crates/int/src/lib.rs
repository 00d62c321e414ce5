// Copyright 2025 Irreducible Inc.
//! Arbitrary-precision signed integer arithmetic.
//!
//! The [`BigInt`] type is a sign-magnitude integer over a growable
//! little-endian sequence of 64-bit limbs. Arithmetic goes through the
//! standard operator traits (including in-place `*Assign` forms); text
//! conversion goes through [`FromStr`] (hex), [`LowerHex`] (hex) and
//! [`Display`] (decimal).
//!
//! [`FromStr`]: std::str::FromStr
//! [`LowerHex`]: std::fmt::LowerHex
//! [`Display`]: std::fmt::Display

#![warn(missing_docs)]

mod addsub;
mod bigint;
mod cmp;
mod div;
mod error;
mod fmt;
mod limbs;
mod mul;
mod shift;


pub use bigint::BigInt;
pub use error::ParseBigIntError;
pub use limbs::{LIMB_BITS, Limb};
