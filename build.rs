// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashit
// File: build.rs
// Author: hashit maintainers

use std::env;
use std::process::Command;

fn main() {
	let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
	let version = Command::new(rustc)
		.arg("--version")
		.output()
		.ok()
		.filter(|output| output.status.success())
		.and_then(|output| String::from_utf8(output.stdout).ok())
		.map(|line| line.trim().to_string())
		.unwrap_or_default();

	println!("cargo:rustc-env=HASHIT_RUSTC_VERSION={version}");
	println!("cargo:rerun-if-changed=build.rs");
	println!("cargo:rerun-if-env-changed=HASHIT_BUILD_VERSION");
}
