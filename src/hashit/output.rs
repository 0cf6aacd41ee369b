// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashit
// File: output.rs
// Author: hashit maintainers

//! Text and JSON rendering of digest results.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use super::build_info::BuildInfo;
use super::record::{AggregateDigests, DigestRecord};

/// Output formats selectable from the CLI.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
	/// `name: hex` lines, or the bare hex digest for a single algorithm.
	#[default]
	Text,
	/// Indented JSON document.
	Json,
}

impl OutputFormat {
	pub fn from_json_flag(json: bool) -> Self {
		if json {
			Self::Json
		} else {
			Self::Text
		}
	}
}

impl fmt::Display for OutputFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			Self::Text => "text",
			Self::Json => "json",
		};
		write!(f, "{}", label)
	}
}

/// Error type emitted by output serializers.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct OutputError {
	message: String,
}

impl OutputError {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}
}

fn to_pretty_json<T: Serialize>(
	value: &T,
) -> Result<Vec<String>, OutputError> {
	let serialized = serde_json::to_string_pretty(value)
		.map_err(|err| OutputError::new(err.to_string()))?;
	Ok(vec![serialized])
}

pub fn render_record(
	record: &DigestRecord,
	format: OutputFormat,
) -> Result<Vec<String>, OutputError> {
	match format {
		OutputFormat::Text => Ok(vec![record.hex_digest.clone()]),
		OutputFormat::Json => to_pretty_json(record),
	}
}

pub fn render_aggregate(
	aggregate: &AggregateDigests,
	format: OutputFormat,
) -> Result<Vec<String>, OutputError> {
	match format {
		OutputFormat::Text => Ok(aggregate
			.entries()
			.iter()
			.map(|entry| format!("{}: {}", entry.name, entry.hex))
			.collect()),
		OutputFormat::Json => to_pretty_json(aggregate),
	}
}

pub fn render_algorithm_list(names: &[&str]) -> Vec<String> {
	let mut lines = Vec::with_capacity(names.len() + 1);
	lines.push("Available hash functions:".to_string());
	lines.extend(names.iter().map(|name| format!("- {}", name)));
	lines
}

pub fn render_version(info: &BuildInfo) -> Vec<String> {
	vec![
		format!("hashit version: {}", info.version),
		format!("rustc version: {}", info.rustc),
	]
}
