// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashit
// File: config.rs
// Author: hashit maintainers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{HashError, Result};

/// Bytes handed to the accumulators per fan-out round.
pub const DEFAULT_CHUNK_SIZE: usize = 4 * 1024 * 1024;

/// Largest accepted chunk size.
pub const MAX_CHUNK_SIZE: usize = 1024 * 1024 * 1024;

#[derive(
	Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize,
)]
pub enum ThreadStrategy {
	/// Feed accumulators one after another on the calling thread.
	Single,
	/// Use the global rayon pool.
	#[default]
	Auto,
	/// Use a dedicated pool with this many workers.
	Fixed(u16),
}

impl fmt::Display for ThreadStrategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Single => write!(f, "1"),
			Self::Auto => write!(f, "auto"),
			Self::Fixed(n) => write!(f, "{}", n),
		}
	}
}

impl FromStr for ThreadStrategy {
	type Err = String;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		if s.eq_ignore_ascii_case("auto") {
			return Ok(Self::Auto);
		}
		match s.parse::<u16>() {
			Ok(0) => Err("thread count must be at least 1".to_string()),
			Ok(1) => Ok(Self::Single),
			Ok(n) => Ok(Self::Fixed(n)),
			Err(_) => Err(format!(
				"expected a thread count or `auto`, got `{}`",
				s
			)),
		}
	}
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct HashOptions {
	pub chunk_size: usize,
	pub threads: ThreadStrategy,
}

impl Default for HashOptions {
	fn default() -> Self {
		HashOptions {
			chunk_size: DEFAULT_CHUNK_SIZE,
			threads: ThreadStrategy::Auto,
		}
	}
}

impl HashOptions {
	pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
		self.chunk_size = chunk_size;
		self
	}

	pub fn with_threads(mut self, threads: ThreadStrategy) -> Self {
		self.threads = threads;
		self
	}

	pub fn validate(&self) -> Result<()> {
		if self.chunk_size == 0 {
			return Err(HashError::invalid_option(
				"chunk size must be greater than zero",
			));
		}
		if self.chunk_size > MAX_CHUNK_SIZE {
			return Err(HashError::invalid_option(format!(
				"chunk size must not exceed {} bytes",
				MAX_CHUNK_SIZE
			)));
		}
		if self.threads == ThreadStrategy::Fixed(0) {
			return Err(HashError::invalid_option(
				"thread count must be at least 1",
			));
		}
		Ok(())
	}
}
