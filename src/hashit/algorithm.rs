// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashit
// File: algorithm.rs
// Author: hashit maintainers

//! The closed set of digest algorithms, in canonical declared order.
//!
//! Declaration order is significant: iteration order drives the text
//! output, `list-hashes` and the registry catalog.

use strum::{Display, EnumCount, EnumIter, IntoStaticStr};

#[derive(
	Clone,
	Copy,
	Debug,
	Eq,
	PartialEq,
	Hash,
	Display,
	EnumCount,
	EnumIter,
	IntoStaticStr,
)]
pub enum Algorithm {
	#[strum(serialize = "adler32")]
	Adler32,
	#[strum(serialize = "md4")]
	Md4,
	#[strum(serialize = "md5")]
	Md5,
	#[strum(serialize = "sha1")]
	Sha1,
	#[strum(serialize = "sha224")]
	Sha224,
	#[strum(serialize = "sha256")]
	Sha256,
	#[strum(serialize = "sha384")]
	Sha384,
	#[strum(serialize = "sha512")]
	Sha512,
	#[strum(serialize = "sha512_224")]
	Sha512_224,
	#[strum(serialize = "sha512_256")]
	Sha512_256,
	#[strum(serialize = "sha3_256")]
	Sha3_256,
	#[strum(serialize = "sha3_512")]
	Sha3_512,
	#[strum(serialize = "shake128")]
	Shake128,
	#[strum(serialize = "shake256")]
	Shake256,
	#[strum(serialize = "fnv32")]
	Fnv32,
	#[strum(serialize = "fnv32a")]
	Fnv32a,
	#[strum(serialize = "fnv64")]
	Fnv64,
	#[strum(serialize = "fnv64a")]
	Fnv64a,
	#[strum(serialize = "crc32_ieee")]
	Crc32Ieee,
	#[strum(serialize = "crc32_koopman")]
	Crc32Koopman,
	#[strum(serialize = "crc32_castagnoli")]
	Crc32Castagnoli,
	#[strum(serialize = "crc64_iso")]
	Crc64Iso,
	#[strum(serialize = "crc64_ecma")]
	Crc64Ecma,
	#[strum(serialize = "blake2b256")]
	Blake2b256,
	#[strum(serialize = "blake2b384")]
	Blake2b384,
	#[strum(serialize = "blake2b512")]
	Blake2b512,
	#[strum(serialize = "blake2s256")]
	Blake2s256,
}

impl Algorithm {
	/// Lowercase identifier accepted by `--type` and printed by
	/// `list-hashes`.
	pub fn identifier(self) -> &'static str {
		self.into()
	}

	/// Length in bytes of the digest this algorithm produces.
	pub fn output_len(self) -> usize {
		use Algorithm::*;
		match self {
			Adler32 | Fnv32 | Fnv32a | Crc32Ieee | Crc32Koopman
			| Crc32Castagnoli => 4,
			Fnv64 | Fnv64a | Crc64Iso | Crc64Ecma => 8,
			Md4 | Md5 => 16,
			Sha1 => 20,
			Sha224 | Sha512_224 => 28,
			Sha256 | Sha512_256 | Sha3_256 | Shake128 | Blake2b256
			| Blake2s256 => 32,
			Sha384 | Blake2b384 => 48,
			Sha512 | Sha3_512 | Shake256 | Blake2b512 => 64,
		}
	}
}
