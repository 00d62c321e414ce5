// Copyright 2025 Irreducible Inc.
//! Hosts error definitions for the integer crate.

/// Text parsing related error.
#[allow(missing_docs)] // errors are self-documenting
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBigIntError {
	#[error("no digits to parse")]
	Empty,
	#[error("invalid hex digit {ch:?} at position {position}")]
	InvalidDigit { ch: char, position: usize },
}
