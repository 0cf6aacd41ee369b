// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashit
// File: app.rs
// Author: hashit maintainers

use crate::hashit::build_info::BuildInfo;
use crate::hashit::config::{HashOptions, ThreadStrategy};
use crate::hashit::error::HashError;
use crate::hashit::hash::{hash_all, hash_single};
use crate::hashit::output::{
	render_aggregate, render_algorithm_list, render_record,
	render_version, OutputFormat,
};
use crate::hashit::reader::InputSource;
use crate::hashit::registry::list_supported;
use clap::{crate_name, Arg, ArgAction, ArgMatches};
use std::error::Error;
use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const HELP_TEMPLATE: &str = "{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

const AFTER_HELP: &str = "Examples:
  hashit \"Hello, World!\"
  hashit \"Hello, World!\" -t md5
  hashit -f /path/to/file
  hashit -f /path/to/file -t sha256 --json";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "HASHIT_LOG";

/// Parsed invocation of the hashing command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashRequest {
	pub input: RequestInput,
	pub algorithm: Option<String>,
	pub format: OutputFormat,
	pub options: HashOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestInput {
	Text(OsString),
	File(PathBuf),
}

impl HashRequest {
	fn source(&self) -> InputSource<'_> {
		match &self.input {
			RequestInput::Text(text) => {
				InputSource::Bytes(text.as_encoded_bytes())
			}
			RequestInput::File(path) => InputSource::File(path),
		}
	}
}

pub fn build_cli() -> clap::Command {
	clap::Command::new(crate_name!())
		.color(clap::ColorChoice::Never)
		.help_template(HELP_TEMPLATE)
		.bin_name(crate_name!())
		.version(clap::crate_version!())
		.about("Hash a string or file using multiple hash functions")
		.long_about(
			"Hash a string or file using Adler, MD4, MD5, SHA1, SHA2, SHA3, FNV, CRC and BLAKE2 hash functions.",
		)
		.after_help(AFTER_HELP)
		.args_conflicts_with_subcommands(true)
		.arg(
			Arg::new("input")
				.help("String to hash")
				.num_args(1..=2)
				.value_parser(clap::value_parser!(OsString))
				.value_name("STRING"),
		)
		.arg(
			Arg::new("file")
				.short('f')
				.long("file")
				.value_name("PATH")
				.value_parser(clap::value_parser!(PathBuf))
				.help("File to hash"),
		)
		.arg(
			Arg::new("type")
				.short('t')
				.long("type")
				.value_name("ALGORITHM")
				.help("Type of hash function to use (see list-hashes)"),
		)
		.arg(
			Arg::new("json")
				.short('j')
				.long("json")
				.help("Output as JSON")
				.action(ArgAction::SetTrue),
		)
		.arg(
			Arg::new("chunk-size")
				.long("chunk-size")
				.value_name("BYTES")
				.env("HASHIT_CHUNK_SIZE")
				.value_parser(clap::value_parser!(usize))
				.help("Bytes read and dispatched per round [default: 4194304]"),
		)
		.arg(
			Arg::new("threads")
				.long("threads")
				.value_name("N|auto")
				.env("HASHIT_THREADS")
				.value_parser(clap::value_parser!(ThreadStrategy))
				.help("Worker threads for the all-algorithm mode")
				.default_value("auto"),
		)
		.arg(
			Arg::new("verbose")
				.short('v')
				.long("verbose")
				.help("Log progress to stderr")
				.action(ArgAction::SetTrue),
		)
		.subcommand(
			clap::command!("list-hashes")
				.about("List all available hash functions"),
		)
		.subcommand(
			clap::command!("version")
				.about("Print the version number of hashit"),
		)
}

fn init_tracing(verbose: bool) {
	let default_directive = if verbose { "debug" } else { "warn" };
	let filter = EnvFilter::try_from_env(LOG_ENV)
		.unwrap_or_else(|_| EnvFilter::new(default_directive));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(std::io::stderr().is_terminal())
		.with_target(false)
		.try_init();
}

/// Turn parsed arguments into a request. `None` means there is nothing
/// to hash.
pub fn request_from_matches(matches: &ArgMatches) -> Option<HashRequest> {
	let input = match matches.get_one::<PathBuf>("file") {
		Some(path) => RequestInput::File(path.clone()),
		None => {
			let text = matches.get_many::<OsString>("input")?.next()?;
			RequestInput::Text(text.clone())
		}
	};
	let mut options = HashOptions::default();
	if let Some(chunk_size) = matches.get_one::<usize>("chunk-size") {
		options.chunk_size = *chunk_size;
	}
	if let Some(threads) = matches.get_one::<ThreadStrategy>("threads") {
		options.threads = *threads;
	}
	Some(HashRequest {
		input,
		algorithm: matches.get_one::<String>("type").cloned(),
		format: OutputFormat::from_json_flag(matches.get_flag("json")),
		options,
	})
}

/// Run one request and return the lines to print.
pub fn execute(
	request: &HashRequest,
) -> Result<Result<Vec<String>, HashError>, Box<dyn Error>> {
	let source = request.source();
	debug!(
		file = source.is_file(),
		algorithm = request.algorithm.as_deref().unwrap_or("all"),
		chunk_size = request.options.chunk_size,
		threads = %request.options.threads,
		format = %request.format,
		"hashing input"
	);

	match &request.algorithm {
		Some(identifier) => {
			match hash_single(source, identifier, &request.options) {
				Ok(record) => {
					info!(
						algorithm = %record.algorithm,
						elapsed = ?record.elapsed.raw,
						"digest complete"
					);
					Ok(Ok(render_record(&record, request.format)?))
				}
				Err(err) => Ok(Err(err)),
			}
		}
		None => match hash_all(source, &request.options) {
			Ok(aggregate) => {
				info!(
					elapsed = ?aggregate.elapsed.raw,
					"all digests complete"
				);
				Ok(Ok(render_aggregate(&aggregate, request.format)?))
			}
			Err(err) => Ok(Err(err)),
		},
	}
}

fn handle_hash(
	capp: &mut clap::Command,
	matches: &ArgMatches,
) -> Result<(), Box<dyn Error>> {
	let Some(request) = request_from_matches(matches) else {
		capp.print_help()?;
		return Ok(());
	};
	match execute(&request)? {
		Ok(lines) => {
			for line in lines {
				println!("{}", line);
			}
		}
		Err(err) => {
			debug!(kind = ?err.kind(), "hashing failed");
			eprintln!("error: {}", err);
		}
	}
	Ok(())
}

pub fn run() -> Result<(), Box<dyn Error>> {
	let build_info = BuildInfo::current();
	let mut capp = build_cli();
	let m = capp.clone().get_matches();
	init_tracing(m.get_flag("verbose"));

	match m.subcommand() {
		Some(("list-hashes", _)) => {
			for line in render_algorithm_list(&list_supported()) {
				println!("{}", line);
			}
		}
		Some(("version", _)) => {
			for line in render_version(&build_info) {
				println!("{}", line);
			}
		}
		_ => handle_hash(&mut capp, &m)?,
	}
	Ok(())
}
