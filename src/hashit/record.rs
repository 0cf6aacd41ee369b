// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashit
// File: record.rs
// Author: hashit maintainers

//! Result records produced by the single-algorithm and multi-algorithm
//! paths, and the ordered `(name, hex)` view used for text output.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Serialize, Serializer};
use std::time::Duration;
use strum::IntoEnumIterator;

use super::algorithm::Algorithm;

fn as_base64<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
	S: Serializer,
{
	serializer.serialize_str(&STANDARD.encode(bytes))
}

/// Wall-clock time of one hashing operation, serialized as whole
/// milliseconds plus a readable string.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Elapsed {
	#[serde(skip)]
	pub raw: Duration,
	pub duration: u64,
	pub duration_str: String,
}

impl From<Duration> for Elapsed {
	fn from(raw: Duration) -> Self {
		Self {
			raw,
			duration: u64::try_from(raw.as_millis()).unwrap_or(u64::MAX),
			duration_str: format!("{:?}", raw),
		}
	}
}

/// Digest of one input under one algorithm.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DigestRecord {
	#[serde(skip)]
	pub algorithm: Algorithm,
	#[serde(serialize_with = "as_base64")]
	pub input: Vec<u8>,
	#[serde(serialize_with = "as_base64")]
	pub hash_bytes: Vec<u8>,
	pub hex_digest: String,
	#[serde(flatten)]
	pub elapsed: Elapsed,
}

impl DigestRecord {
	pub fn new(
		algorithm: Algorithm,
		input: Vec<u8>,
		digest: Vec<u8>,
		elapsed: Duration,
	) -> Self {
		Self {
			algorithm,
			input,
			hex_digest: hex::encode(&digest),
			hash_bytes: digest,
			elapsed: elapsed.into(),
		}
	}
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Sha2Digests {
	pub sha224: String,
	pub sha256: String,
	pub sha384: String,
	pub sha512: String,
	pub sha512_224: String,
	pub sha512_256: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Sha3Digests {
	pub sha3_256: String,
	pub sha3_512: String,
	pub shake128: String,
	pub shake256: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct FnvDigests {
	pub fnv32: String,
	pub fnv32a: String,
	pub fnv64: String,
	pub fnv64a: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct CrcDigests {
	#[serde(rename = "crc32_IEEE")]
	pub crc32_ieee: String,
	#[serde(rename = "crc32_Koopman")]
	pub crc32_koopman: String,
	#[serde(rename = "crc32_Castagnoli")]
	pub crc32_castagnoli: String,
	#[serde(rename = "crc64_ISO")]
	pub crc64_iso: String,
	#[serde(rename = "crc64_ECMA")]
	pub crc64_ecma: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct BlakeDigests {
	pub blake2b256: String,
	pub blake2b384: String,
	pub blake2b512: String,
	pub blake2s256: String,
}

/// Every supported digest of one input, grouped by family.
#[derive(Clone, Debug, Default, Serialize)]
pub struct AggregateDigests {
	pub adler32: String,
	pub md4: String,
	pub md5: String,
	pub sha1: String,
	pub sha2: Sha2Digests,
	pub sha3: Sha3Digests,
	pub fnv: FnvDigests,
	pub crc: CrcDigests,
	pub blake: BlakeDigests,
	#[serde(flatten)]
	pub elapsed: Elapsed,
}

/// One line of the ordered view.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DigestEntry<'a> {
	#[serde(rename = "type")]
	pub name: &'static str,
	#[serde(rename = "hash")]
	pub hex: &'a str,
}

impl AggregateDigests {
	/// Build the aggregate from finalized `(algorithm, digest)` pairs.
	pub fn assemble<I>(digests: I, elapsed: Duration) -> Self
	where
		I: IntoIterator<Item = (Algorithm, Vec<u8>)>,
	{
		let mut aggregate = Self {
			elapsed: elapsed.into(),
			..Self::default()
		};
		for (algorithm, digest) in digests {
			*aggregate.slot_mut(algorithm) = hex::encode(digest);
		}
		aggregate
	}

	/// Hex digest stored for `algorithm`.
	pub fn get(&self, algorithm: Algorithm) -> &str {
		use Algorithm::*;
		match algorithm {
			Adler32 => &self.adler32,
			Md4 => &self.md4,
			Md5 => &self.md5,
			Sha1 => &self.sha1,
			Sha224 => &self.sha2.sha224,
			Sha256 => &self.sha2.sha256,
			Sha384 => &self.sha2.sha384,
			Sha512 => &self.sha2.sha512,
			Sha512_224 => &self.sha2.sha512_224,
			Sha512_256 => &self.sha2.sha512_256,
			Sha3_256 => &self.sha3.sha3_256,
			Sha3_512 => &self.sha3.sha3_512,
			Shake128 => &self.sha3.shake128,
			Shake256 => &self.sha3.shake256,
			Fnv32 => &self.fnv.fnv32,
			Fnv32a => &self.fnv.fnv32a,
			Fnv64 => &self.fnv.fnv64,
			Fnv64a => &self.fnv.fnv64a,
			Crc32Ieee => &self.crc.crc32_ieee,
			Crc32Koopman => &self.crc.crc32_koopman,
			Crc32Castagnoli => &self.crc.crc32_castagnoli,
			Crc64Iso => &self.crc.crc64_iso,
			Crc64Ecma => &self.crc.crc64_ecma,
			Blake2b256 => &self.blake.blake2b256,
			Blake2b384 => &self.blake.blake2b384,
			Blake2b512 => &self.blake.blake2b512,
			Blake2s256 => &self.blake.blake2s256,
		}
	}

	fn slot_mut(&mut self, algorithm: Algorithm) -> &mut String {
		use Algorithm::*;
		match algorithm {
			Adler32 => &mut self.adler32,
			Md4 => &mut self.md4,
			Md5 => &mut self.md5,
			Sha1 => &mut self.sha1,
			Sha224 => &mut self.sha2.sha224,
			Sha256 => &mut self.sha2.sha256,
			Sha384 => &mut self.sha2.sha384,
			Sha512 => &mut self.sha2.sha512,
			Sha512_224 => &mut self.sha2.sha512_224,
			Sha512_256 => &mut self.sha2.sha512_256,
			Sha3_256 => &mut self.sha3.sha3_256,
			Sha3_512 => &mut self.sha3.sha3_512,
			Shake128 => &mut self.sha3.shake128,
			Shake256 => &mut self.sha3.shake256,
			Fnv32 => &mut self.fnv.fnv32,
			Fnv32a => &mut self.fnv.fnv32a,
			Fnv64 => &mut self.fnv.fnv64,
			Fnv64a => &mut self.fnv.fnv64a,
			Crc32Ieee => &mut self.crc.crc32_ieee,
			Crc32Koopman => &mut self.crc.crc32_koopman,
			Crc32Castagnoli => &mut self.crc.crc32_castagnoli,
			Crc64Iso => &mut self.crc.crc64_iso,
			Crc64Ecma => &mut self.crc.crc64_ecma,
			Blake2b256 => &mut self.blake.blake2b256,
			Blake2b384 => &mut self.blake.blake2b384,
			Blake2b512 => &mut self.blake.blake2b512,
			Blake2s256 => &mut self.blake.blake2s256,
		}
	}

	/// Digests as `(identifier, hex)` pairs in canonical order.
	pub fn entries(&self) -> Vec<DigestEntry<'_>> {
		Algorithm::iter()
			.map(|algorithm| DigestEntry {
				name: algorithm.identifier(),
				hex: self.get(algorithm),
			})
			.collect()
	}

	/// True when the same digests are stored, ignoring timing.
	pub fn same_digests(&self, other: &Self) -> bool {
		Algorithm::iter().all(|alg| self.get(alg) == other.get(alg))
	}
}
