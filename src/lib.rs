// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashit
// File: lib.rs
// Author: hashit maintainers

pub mod hashit {
	pub mod algorithm;
	pub mod app;
	pub mod build_info;
	pub mod config;
	pub mod engine;
	pub mod error;
	pub mod fnv;
	pub mod hash;
	pub mod output;
	pub mod reader;
	pub mod record;
	pub mod registry;
}
