// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashit
// File: build_info.rs
// Author: hashit maintainers

//! Immutable build metadata reported by `hashit version`.

use serde::Serialize;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct BuildInfo {
	pub version: String,
	pub rustc: String,
}

impl BuildInfo {
	pub fn new(version: &str, rustc: &str) -> Self {
		let version = version.trim();
		let version = version.strip_prefix('v').unwrap_or(version);
		let version = if version.is_empty() {
			"development"
		} else {
			version
		};

		let rustc = rustc.trim();
		let rustc = rustc.strip_prefix("rustc ").unwrap_or(rustc);
		let rustc = if rustc.is_empty() { "unknown" } else { rustc };

		Self {
			version: version.to_string(),
			rustc: rustc.to_string(),
		}
	}

	/// Metadata of the running binary. `HASHIT_BUILD_VERSION` set at
	/// compile time overrides the package version.
	pub fn current() -> Self {
		let version = option_env!("HASHIT_BUILD_VERSION")
			.unwrap_or(env!("CARGO_PKG_VERSION"));
		let rustc = option_env!("HASHIT_RUSTC_VERSION").unwrap_or("");
		Self::new(version, rustc)
	}
}
