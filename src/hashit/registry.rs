// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashit
// File: registry.rs
// Author: hashit maintainers

//! Registry of digest accumulators: a static catalog mapping each
//! [`Algorithm`] to a constructor, plus the lookup helpers used by the
//! single-algorithm path and the fan-out engine.

use adler::Adler32;
use blake2::digest::consts::{U32, U48};
use blake2::{Blake2b, Blake2b512, Blake2s256};
use crc::{Crc, CRC_32_ISCSI, CRC_32_ISO_HDLC, CRC_64_GO_ISO, CRC_64_XZ};
use digest::{Digest, ExtendableOutput, Update};
use strum::EnumCount;

use super::algorithm::Algorithm;
use super::error::{HashError, Result};
use super::fnv::{Fnv132, Fnv164, Fnv1a32, Fnv1a64};

/// Running digest state bound to one algorithm.
///
/// An accumulator has a single writer: the engine hands each one to at
/// most one worker at a time, and `finalize` consumes it so a used state
/// can never be fed again.
pub trait Accumulator: Send + 'static {
	fn update(&mut self, data: &[u8]);
	fn finalize(self: Box<Self>) -> Vec<u8>;
}

pub type AccumulatorFactory = fn() -> Box<dyn Accumulator>;

#[derive(Clone, Copy)]
pub struct CatalogEntry {
	pub algorithm: Algorithm,
	pub factory: AccumulatorFactory,
}

impl CatalogEntry {
	pub const fn new(
		algorithm: Algorithm,
		factory: AccumulatorFactory,
	) -> Self {
		Self { algorithm, factory }
	}

	pub fn identifier(&self) -> &'static str {
		self.algorithm.identifier()
	}
}

struct DigestAccumulator<D>(D);

impl<D> Accumulator for DigestAccumulator<D>
where
	D: Digest + Send + 'static,
{
	fn update(&mut self, data: &[u8]) {
		Digest::update(&mut self.0, data);
	}

	fn finalize(self: Box<Self>) -> Vec<u8> {
		self.0.finalize().to_vec()
	}
}

struct XofAccumulator<X, const N: usize>(X);

impl<X, const N: usize> Accumulator for XofAccumulator<X, N>
where
	X: Update + ExtendableOutput + Send + 'static,
{
	fn update(&mut self, data: &[u8]) {
		Update::update(&mut self.0, data);
	}

	fn finalize(self: Box<Self>) -> Vec<u8> {
		let mut out = vec![0u8; N];
		self.0.finalize_xof_into(&mut out);
		out
	}
}

// Koopman polynomial, reflected, with all-ones init and xorout.
const CRC_32_KOOPMAN: crc::Algorithm<u32> = crc::Algorithm {
	width: 32,
	poly: 0x741b_8cd7,
	init: 0xffff_ffff,
	refin: true,
	refout: true,
	xorout: 0xffff_ffff,
	check: 0x2d3d_d0ae,
	residue: 0x0843_323b,
};

static CRC32_IEEE: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);
static CRC32_KOOPMAN: Crc<u32> = Crc::<u32>::new(&CRC_32_KOOPMAN);
static CRC32_CASTAGNOLI: Crc<u32> = Crc::<u32>::new(&CRC_32_ISCSI);
static CRC64_ISO: Crc<u64> = Crc::<u64>::new(&CRC_64_GO_ISO);
static CRC64_ECMA: Crc<u64> = Crc::<u64>::new(&CRC_64_XZ);

struct Crc32Accumulator(crc::Digest<'static, u32>);

impl Accumulator for Crc32Accumulator {
	fn update(&mut self, data: &[u8]) {
		self.0.update(data);
	}

	fn finalize(self: Box<Self>) -> Vec<u8> {
		self.0.finalize().to_be_bytes().to_vec()
	}
}

struct Crc64Accumulator(crc::Digest<'static, u64>);

impl Accumulator for Crc64Accumulator {
	fn update(&mut self, data: &[u8]) {
		self.0.update(data);
	}

	fn finalize(self: Box<Self>) -> Vec<u8> {
		self.0.finalize().to_be_bytes().to_vec()
	}
}

struct AdlerAccumulator(Adler32);

impl Accumulator for AdlerAccumulator {
	fn update(&mut self, data: &[u8]) {
		self.0.write_slice(data);
	}

	fn finalize(self: Box<Self>) -> Vec<u8> {
		self.0.checksum().to_be_bytes().to_vec()
	}
}

macro_rules! impl_fnv_accumulator {
	($($hasher:ty),+ $(,)?) => {
		$(
			impl Accumulator for $hasher {
				fn update(&mut self, data: &[u8]) {
					<$hasher>::update(self, data);
				}

				fn finalize(self: Box<Self>) -> Vec<u8> {
					self.value().to_be_bytes().to_vec()
				}
			}
		)+
	};
}

impl_fnv_accumulator!(Fnv132, Fnv1a32, Fnv164, Fnv1a64);

macro_rules! catalog {
	($($alg:ident => $ctor:expr),+ $(,)?) => {
		[
			$(
				CatalogEntry::new(
					Algorithm::$alg,
					|| -> Box<dyn Accumulator> { Box::new($ctor) },
				),
			)+
		]
	};
}

static CATALOG: [CatalogEntry; Algorithm::COUNT] = catalog!(
	Adler32 => AdlerAccumulator(Adler32::new()),
	Md4 => DigestAccumulator(md4::Md4::new()),
	Md5 => DigestAccumulator(md5::Md5::new()),
	Sha1 => DigestAccumulator(sha1::Sha1::new()),
	Sha224 => DigestAccumulator(sha2::Sha224::new()),
	Sha256 => DigestAccumulator(sha2::Sha256::new()),
	Sha384 => DigestAccumulator(sha2::Sha384::new()),
	Sha512 => DigestAccumulator(sha2::Sha512::new()),
	Sha512_224 => DigestAccumulator(sha2::Sha512_224::new()),
	Sha512_256 => DigestAccumulator(sha2::Sha512_256::new()),
	Sha3_256 => DigestAccumulator(sha3::Sha3_256::new()),
	Sha3_512 => DigestAccumulator(sha3::Sha3_512::new()),
	Shake128 => XofAccumulator::<_, 32>(sha3::Shake128::default()),
	Shake256 => XofAccumulator::<_, 64>(sha3::Shake256::default()),
	Fnv32 => Fnv132::new(),
	Fnv32a => Fnv1a32::new(),
	Fnv64 => Fnv164::new(),
	Fnv64a => Fnv1a64::new(),
	Crc32Ieee => Crc32Accumulator(CRC32_IEEE.digest()),
	Crc32Koopman => Crc32Accumulator(CRC32_KOOPMAN.digest()),
	Crc32Castagnoli => Crc32Accumulator(CRC32_CASTAGNOLI.digest()),
	Crc64Iso => Crc64Accumulator(CRC64_ISO.digest()),
	Crc64Ecma => Crc64Accumulator(CRC64_ECMA.digest()),
	Blake2b256 => DigestAccumulator(Blake2b::<U32>::new()),
	Blake2b384 => DigestAccumulator(Blake2b::<U48>::new()),
	Blake2b512 => DigestAccumulator(Blake2b512::new()),
	Blake2s256 => DigestAccumulator(Blake2s256::new()),
);

/// Every supported algorithm, in canonical order.
pub fn catalog() -> &'static [CatalogEntry] {
	&CATALOG
}

pub fn find_algorithm(identifier: &str) -> Option<&'static CatalogEntry> {
	let wanted = identifier.to_lowercase();
	catalog()
		.iter()
		.find(|entry| entry.identifier() == wanted)
}

/// Build a fresh accumulator for `identifier` (case-insensitive). An
/// unknown identifier is reported lowercased, as it was looked up.
pub fn create(
	identifier: &str,
) -> Result<(Algorithm, Box<dyn Accumulator>)> {
	let entry = find_algorithm(identifier).ok_or_else(|| {
		HashError::unsupported(identifier.to_lowercase())
	})?;
	Ok((entry.algorithm, (entry.factory)()))
}

/// Build one fresh accumulator per supported algorithm.
pub fn create_all() -> Vec<(Algorithm, Box<dyn Accumulator>)> {
	catalog()
		.iter()
		.map(|entry| (entry.algorithm, (entry.factory)()))
		.collect()
}

pub fn list_supported() -> Vec<&'static str> {
	catalog().iter().map(CatalogEntry::identifier).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use hex_literal::hex;
	use strum::IntoEnumIterator;

	fn digest_of(identifier: &str, data: &[u8]) -> Vec<u8> {
		let (_, mut acc) = create(identifier).unwrap();
		acc.update(data);
		acc.finalize()
	}

	#[test]
	fn catalog_follows_declared_order() {
		let from_catalog: Vec<Algorithm> =
			catalog().iter().map(|entry| entry.algorithm).collect();
		let declared: Vec<Algorithm> = Algorithm::iter().collect();
		assert_eq!(from_catalog, declared);
	}

	#[test]
	fn every_listed_identifier_is_constructible() {
		for id in list_supported() {
			let (algorithm, _) = create(id).unwrap();
			assert_eq!(algorithm.identifier(), id);
		}
		assert_eq!(create_all().len(), list_supported().len());
	}

	#[test]
	fn lookup_is_case_insensitive() {
		let (algorithm, _) = create("SHA512_256").unwrap();
		assert_eq!(algorithm, Algorithm::Sha512_256);
		let (algorithm, _) = create("Shake128").unwrap();
		assert_eq!(algorithm, Algorithm::Shake128);
	}

	#[test]
	fn unknown_identifier_is_rejected() {
		for id in ["md2", "MICKEYMOUSE", "", "sha3-256"] {
			let err = create(id).err().unwrap();
			assert!(matches!(
				err,
				HashError::UnsupportedAlgorithm { .. }
			));
		}
	}

	#[test]
	fn unknown_identifier_is_reported_lowercased() {
		let err = create("MickeyMouse").err().unwrap();
		assert_eq!(err.to_string(), "unknown hash type: mickeymouse");
	}

	#[test]
	fn output_lengths_match_declared_sizes() {
		for (algorithm, acc) in create_all() {
			assert_eq!(
				acc.finalize().len(),
				algorithm.output_len(),
				"{algorithm}"
			);
		}
	}

	#[test]
	fn empty_input_vectors() {
		assert_eq!(digest_of("adler32", b""), hex!("00000001"));
		assert_eq!(
			digest_of("md4", b""),
			hex!("31d6cfe0d16ae931b73c59d7e0c089c0")
		);
		assert_eq!(
			digest_of("md5", b""),
			hex!("d41d8cd98f00b204e9800998ecf8427e")
		);
		assert_eq!(
			digest_of("sha1", b""),
			hex!("da39a3ee5e6b4b0d3255bfef95601890afd80709")
		);
		assert_eq!(
			digest_of("sha3_256", b""),
			hex!("a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a")
		);
		assert_eq!(
			digest_of("shake128", b""),
			hex!("7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26")
		);
		assert_eq!(digest_of("crc32_ieee", b""), hex!("00000000"));
		assert_eq!(
			digest_of("crc64_ecma", b""),
			hex!("0000000000000000")
		);
		assert_eq!(digest_of("fnv32", b""), hex!("811c9dc5"));
		assert_eq!(
			digest_of("blake2b256", b""),
			hex!("0e5751c026e543b2e8ab2eb06099daa1d1e5df47778f7787faab45cdf12fe3a8")
		);
		assert_eq!(
			digest_of("blake2s256", b""),
			hex!("69217a3079908094e11121d042354a7c1f55b6482ca1a51e1b250dfd1ed0eef9")
		);
	}

	#[test]
	fn crc_check_values() {
		assert_eq!(
			digest_of("crc32_koopman", b"123456789"),
			hex!("2d3dd0ae")
		);
		assert_eq!(
			digest_of("crc32_ieee", b"123456789"),
			hex!("cbf43926")
		);
		assert_eq!(
			digest_of("crc32_castagnoli", b"123456789"),
			hex!("e3069283")
		);
	}

	#[test]
	fn fresh_instances_do_not_share_state() {
		let (_, mut first) = create("sha256").unwrap();
		first.update(b"polluted");
		let (_, second) = create("sha256").unwrap();
		assert_eq!(
			second.finalize(),
			hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
		);
	}
}
