// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashit
// File: main.rs
// Author: hashit maintainers

use hashit::hashit::app;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	dotenvy::dotenv().ok();
	app::run()?;
	Ok(())
}
