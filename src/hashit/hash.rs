// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashit
// File: hash.rs
// Author: hashit maintainers

//! Single-algorithm and all-algorithm hashing over one input.

use std::path::Path;
use std::time::Instant;

use super::config::HashOptions;
use super::engine::FanOut;
use super::error::Result;
use super::reader::{ChunkedReader, InputSource};
use super::record::{AggregateDigests, DigestRecord};
use super::registry;

/// Hash `source` with the algorithm named `identifier`.
pub fn hash_single(
	source: InputSource<'_>,
	identifier: &str,
	options: &HashOptions,
) -> Result<DigestRecord> {
	options.validate()?;
	let started = Instant::now();
	let (algorithm, mut accumulator) = registry::create(identifier)?;

	ChunkedReader::new(source, options.chunk_size)
		.for_each_chunk(|chunk| accumulator.update(chunk))?;

	let digest = accumulator.finalize();
	Ok(DigestRecord::new(
		algorithm,
		source.descriptor(),
		digest,
		started.elapsed(),
	))
}

/// Hash `source` with every supported algorithm at once.
///
/// All accumulators are fed from the same chunk sequence; if reading
/// fails the partially fed accumulators are dropped unfinalized.
pub fn hash_all(
	source: InputSource<'_>,
	options: &HashOptions,
) -> Result<AggregateDigests> {
	options.validate()?;
	let started = Instant::now();
	let mut fanout = FanOut::new(registry::create_all(), options.threads)?;

	ChunkedReader::new(source, options.chunk_size)
		.for_each_chunk(|chunk| fanout.dispatch(chunk))?;

	let digests = fanout.finish();
	Ok(AggregateDigests::assemble(digests, started.elapsed()))
}

pub fn hash_bytes(
	data: &[u8],
	identifier: &str,
	options: &HashOptions,
) -> Result<DigestRecord> {
	hash_single(InputSource::Bytes(data), identifier, options)
}

pub fn hash_file(
	path: &Path,
	identifier: &str,
	options: &HashOptions,
) -> Result<DigestRecord> {
	hash_single(InputSource::File(path), identifier, options)
}

pub fn hash_all_bytes(
	data: &[u8],
	options: &HashOptions,
) -> Result<AggregateDigests> {
	hash_all(InputSource::Bytes(data), options)
}

pub fn hash_all_file(
	path: &Path,
	options: &HashOptions,
) -> Result<AggregateDigests> {
	hash_all(InputSource::File(path), options)
}
