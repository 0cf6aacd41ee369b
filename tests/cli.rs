// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashit
// File: cli.rs
// Author: hashit maintainers

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use std::io::Write;
use tempfile::NamedTempFile;

fn hashit() -> assert_cmd::Command {
	let mut cmd = cargo_bin_cmd!("hashit");
	cmd.env_remove("HASHIT_LOG")
		.env_remove("HASHIT_CHUNK_SIZE")
		.env_remove("HASHIT_THREADS");
	cmd
}

#[test]
fn single_algorithm_prints_bare_hex() {
	hashit()
		.args(["test data", "-t", "md5"])
		.assert()
		.success()
		.stdout("eb733a00c0c9d336e65691a37ab54293\n");
}

#[test]
fn all_algorithms_print_named_lines() {
	let output = hashit().arg("test data").output().unwrap();
	assert!(output.status.success());
	let stdout = String::from_utf8(output.stdout).unwrap();
	let lines: Vec<&str> = stdout.lines().collect();
	assert_eq!(lines.len(), 27);
	assert_eq!(lines[0], "adler32: 11be037b");
	assert!(lines.contains(&"crc32_ieee: d308aeb2"));
	assert_eq!(
		lines[26],
		"blake2s256: 14414cc07b916d3b83d03e2419cede3b533e450a0207b40454f60079aaac5e2d"
	);
}

#[test]
fn aggregate_json_uses_family_objects() {
	let output = hashit().args(["test data", "--json"]).output().unwrap();
	assert!(output.status.success());
	let value: Value = serde_json::from_slice(&output.stdout).unwrap();
	assert_eq!(value["adler32"], "11be037b");
	assert_eq!(value["crc"]["crc32_IEEE"], "d308aeb2");
	assert_eq!(value["fnv"]["fnv64a"], "407715e574ca20e7");
	assert!(value["duration"].is_u64());
	assert!(value["durationStr"].is_string());
}

#[test]
fn single_json_carries_base64_fields() {
	let output = hashit()
		.args(["test data", "-t", "ADLER32", "-j"])
		.output()
		.unwrap();
	assert!(output.status.success());
	let value: Value = serde_json::from_slice(&output.stdout).unwrap();
	assert_eq!(value["input"], "dGVzdCBkYXRh");
	assert_eq!(value["hashBytes"], "Eb4Dew==");
	assert_eq!(value["hexDigest"], "11be037b");
}

#[test]
fn file_flag_overrides_positional() {
	let mut file = NamedTempFile::new().unwrap();
	file.write_all(b"test data").unwrap();
	file.flush().unwrap();
	hashit()
		.arg("something else")
		.arg("-f")
		.arg(file.path())
		.args(["-t", "crc64_ecma", "--chunk-size", "3"])
		.assert()
		.success()
		.stdout("8d49d818fdb071a5\n");
}

#[test]
fn second_positional_is_ignored() {
	hashit()
		.args(["test data", "extra", "-t", "fnv32"])
		.assert()
		.success()
		.stdout("c164e31b\n");
}

#[test]
fn unknown_algorithm_is_reported_without_failing() {
	hashit()
		.args(["test data", "-t", "MickeyMouse"])
		.assert()
		.success()
		.stdout("")
		.stderr(predicate::str::contains("unknown hash type: mickeymouse"));
}

#[test]
fn missing_file_is_reported_without_failing() {
	let dir = tempfile::tempdir().unwrap();
	let missing = dir.path().join("nope.bin");
	hashit()
		.arg("-f")
		.arg(&missing)
		.assert()
		.success()
		.stdout("")
		.stderr(predicate::str::starts_with("error: cannot read"));
}

#[test]
fn list_hashes_prints_header_and_names() {
	let output = hashit().arg("list-hashes").output().unwrap();
	assert!(output.status.success());
	let stdout = String::from_utf8(output.stdout).unwrap();
	let mut lines = stdout.lines();
	assert_eq!(lines.next(), Some("Available hash functions:"));
	let names: Vec<&str> = lines.collect();
	assert_eq!(names.len(), 27);
	assert_eq!(names[0], "- adler32");
	assert_eq!(names[26], "- blake2s256");
}

#[test]
fn version_prints_both_lines() {
	hashit()
		.arg("version")
		.assert()
		.success()
		.stdout(predicate::str::contains(format!(
			"hashit version: {}",
			env!("CARGO_PKG_VERSION")
		)))
		.stdout(predicate::str::contains("rustc version: "));
}

#[test]
fn no_input_prints_help() {
	hashit()
		.assert()
		.success()
		.stdout(predicate::str::contains("Usage:"));
}

#[test]
fn threads_from_environment_are_honoured() {
	hashit()
		.env("HASHIT_THREADS", "2")
		.args(["test data", "-t", "sha1"])
		.assert()
		.success()
		.stdout("f48dd853820860816c75d54d0f584dc863327a7c\n");
}

#[test]
fn zero_chunk_size_is_reported() {
	hashit()
		.args(["test data", "--chunk-size", "0"])
		.assert()
		.success()
		.stderr(predicate::str::contains("chunk size must be greater than zero"));
}

#[test]
fn verbose_logs_to_stderr() {
	hashit()
		.args(["test data", "-t", "md4", "-v"])
		.assert()
		.success()
		.stdout("99ebf48d202177937f084a873437b85e\n")
		.stderr(predicate::str::contains("hashing input"));
}

#[test]
fn oversized_chunk_size_is_reported_without_crashing() {
	let mut file = NamedTempFile::new().unwrap();
	file.write_all(b"test data").unwrap();
	file.flush().unwrap();
	hashit()
		.arg("-f")
		.arg(file.path())
		.args(["-t", "md5", "--chunk-size", "18446744073709551615"])
		.assert()
		.success()
		.stdout("")
		.stderr(predicate::str::contains("chunk size must not exceed"));
}

#[test]
fn oversized_chunk_size_from_environment_is_reported() {
	hashit()
		.env("HASHIT_CHUNK_SIZE", "2147483648")
		.args(["test data"])
		.assert()
		.success()
		.stdout("")
		.stderr(predicate::str::contains("chunk size must not exceed"));
}

#[cfg(unix)]
#[test]
fn non_utf8_argument_is_hashed_as_raw_bytes() {
	use std::ffi::OsString;
	use std::os::unix::ffi::OsStringExt;
	hashit()
		.arg(OsString::from_vec(vec![0xff, b'a']))
		.args(["-t", "md5"])
		.assert()
		.success()
		.stdout("89e778576425bd513d8207f2720f7df2\n");
}
