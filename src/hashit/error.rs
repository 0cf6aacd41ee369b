// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashit
// File: error.rs
// Author: hashit maintainers

//! Error taxonomy shared by the registry, the chunked reader and the
//! fan-out engine.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HashError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashErrorKind {
	UnsupportedAlgorithm,
	InputUnavailable,
	InvalidOption,
}

#[derive(Debug, Error)]
pub enum HashError {
	#[error("unknown hash type: {identifier}")]
	UnsupportedAlgorithm { identifier: String },

	#[error("cannot read {}: {source}", path.display())]
	InputUnavailable {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("invalid option: {message}")]
	InvalidOption { message: String },
}

impl HashError {
	pub fn unsupported(identifier: impl Into<String>) -> Self {
		Self::UnsupportedAlgorithm {
			identifier: identifier.into(),
		}
	}

	pub fn input_unavailable(path: &Path, source: io::Error) -> Self {
		Self::InputUnavailable {
			path: path.to_path_buf(),
			source,
		}
	}

	pub fn invalid_option(message: impl Into<String>) -> Self {
		Self::InvalidOption {
			message: message.into(),
		}
	}

	pub fn kind(&self) -> HashErrorKind {
		match self {
			Self::UnsupportedAlgorithm { .. } => {
				HashErrorKind::UnsupportedAlgorithm
			}
			Self::InputUnavailable { .. } => {
				HashErrorKind::InputUnavailable
			}
			Self::InvalidOption { .. } => HashErrorKind::InvalidOption,
		}
	}
}
