// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashit
// File: reader.rs
// Author: hashit maintainers

//! Chunked reading of the hashing input.
//!
//! In-memory buffers and files go through the same chunk-size policy, so
//! the fan-out engine sees an identical chunk sequence for identical bytes.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use super::error::{HashError, Result};

#[derive(Clone, Copy, Debug)]
pub enum InputSource<'a> {
	Bytes(&'a [u8]),
	File(&'a Path),
}

impl<'a> InputSource<'a> {
	/// Bytes recorded as the input of a digest record: the buffer itself,
	/// or the path for file input.
	pub fn descriptor(&self) -> Vec<u8> {
		match self {
			InputSource::Bytes(data) => data.to_vec(),
			InputSource::File(path) => {
				path.to_string_lossy().into_owned().into_bytes()
			}
		}
	}

	pub fn is_file(&self) -> bool {
		matches!(self, InputSource::File(_))
	}
}

pub struct ChunkedReader<'a> {
	source: InputSource<'a>,
	chunk_size: usize,
}

impl<'a> ChunkedReader<'a> {
	pub fn new(source: InputSource<'a>, chunk_size: usize) -> Self {
		Self {
			source,
			chunk_size: chunk_size.max(1),
		}
	}

	/// Call `visit` with every chunk in input order and return the number
	/// of bytes read. Empty input produces no chunks.
	///
	/// The file, if any, is opened here and closed before this returns,
	/// whichever way it returns.
	pub fn for_each_chunk<F>(&self, mut visit: F) -> Result<u64>
	where
		F: FnMut(&[u8]),
	{
		match self.source {
			InputSource::Bytes(data) => {
				for chunk in data.chunks(self.chunk_size) {
					visit(chunk);
				}
				Ok(data.len() as u64)
			}
			InputSource::File(path) => {
				let file = File::open(path).map_err(|source| {
					HashError::input_unavailable(path, source)
				})?;
				read_chunks(file, self.chunk_size, visit).map_err(|source| {
					HashError::input_unavailable(path, source)
				})
			}
		}
	}
}

// The buffer grows with the data actually read, so a large chunk size
// costs nothing on a small input.
fn read_chunks<R, F>(
	mut reader: R,
	chunk_size: usize,
	mut visit: F,
) -> io::Result<u64>
where
	R: Read,
	F: FnMut(&[u8]),
{
	let limit = u64::try_from(chunk_size).unwrap_or(u64::MAX);
	let mut buffer = Vec::new();
	let mut total = 0u64;
	loop {
		buffer.clear();
		let count = (&mut reader).take(limit).read_to_end(&mut buffer)?;
		if count == 0 {
			break;
		}
		total += count as u64;
		visit(&buffer);
		if count < chunk_size {
			break;
		}
	}
	Ok(total)
}
