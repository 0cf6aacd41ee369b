// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashit
// File: fnv.rs
// Author: hashit maintainers

//! Fowler–Noll–Vo hashes, FNV-1 and FNV-1a in 32 and 64 bit widths.
//!
//! Digests are the big-endian bytes of the final state.

const FNV_OFFSET_BASIS_32: u32 = 0x811c_9dc5;
const FNV_PRIME_32: u32 = 0x0100_0193;
const FNV_OFFSET_BASIS_64: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME_64: u64 = 0x0000_0100_0000_01b3;

macro_rules! impl_fnv {
	($name:ident, $word:ty, $basis:expr, $prime:expr, $alternate:expr) => {
		#[derive(Clone, Debug)]
		pub struct $name {
			state: $word,
		}

		impl Default for $name {
			fn default() -> Self {
				Self { state: $basis }
			}
		}

		impl $name {
			pub fn new() -> Self {
				Self::default()
			}

			pub fn update(&mut self, data: &[u8]) {
				for &byte in data {
					if $alternate {
						self.state ^= <$word>::from(byte);
						self.state = self.state.wrapping_mul($prime);
					} else {
						self.state = self.state.wrapping_mul($prime);
						self.state ^= <$word>::from(byte);
					}
				}
			}

			pub fn value(&self) -> $word {
				self.state
			}
		}
	};
}

impl_fnv!(Fnv132, u32, FNV_OFFSET_BASIS_32, FNV_PRIME_32, false);
impl_fnv!(Fnv1a32, u32, FNV_OFFSET_BASIS_32, FNV_PRIME_32, true);
impl_fnv!(Fnv164, u64, FNV_OFFSET_BASIS_64, FNV_PRIME_64, false);
impl_fnv!(Fnv1a64, u64, FNV_OFFSET_BASIS_64, FNV_PRIME_64, true);
