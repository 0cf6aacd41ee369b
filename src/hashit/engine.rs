// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashit
// File: engine.rs
// Author: hashit maintainers

//! Fan-out of one chunk stream to many accumulators.
//!
//! Each call to [`FanOut::dispatch`] updates every accumulator with the
//! same chunk, in parallel across accumulators, and returns only once all
//! of them are done. That join is the per-chunk barrier: no accumulator
//! can see chunk k+1 before every accumulator has consumed chunk k, and
//! each accumulator is only ever touched by one worker at a time.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use super::algorithm::Algorithm;
use super::config::ThreadStrategy;
use super::error::{HashError, Result};
use super::registry::Accumulator;

struct Lane {
	algorithm: Algorithm,
	accumulator: Box<dyn Accumulator>,
}

enum Executor {
	Sequential,
	Global,
	Dedicated(ThreadPool),
}

pub struct FanOut {
	lanes: Vec<Lane>,
	executor: Executor,
	chunks: u64,
}

impl FanOut {
	pub fn new(
		accumulators: Vec<(Algorithm, Box<dyn Accumulator>)>,
		threads: ThreadStrategy,
	) -> Result<Self> {
		let executor = match threads {
			ThreadStrategy::Single => Executor::Sequential,
			ThreadStrategy::Auto => Executor::Global,
			ThreadStrategy::Fixed(0) => {
				return Err(HashError::invalid_option(
					"thread count must be at least 1",
				))
			}
			ThreadStrategy::Fixed(n) => {
				let pool = ThreadPoolBuilder::new()
					.num_threads(usize::from(n))
					.thread_name(|idx| format!("hashit-fanout-{idx}"))
					.build()
					.map_err(|err| {
						HashError::invalid_option(format!(
							"cannot start {n} worker threads: {err}"
						))
					})?;
				Executor::Dedicated(pool)
			}
		};
		let lanes = accumulators
			.into_iter()
			.map(|(algorithm, accumulator)| Lane {
				algorithm,
				accumulator,
			})
			.collect();
		Ok(Self {
			lanes,
			executor,
			chunks: 0,
		})
	}

	pub fn len(&self) -> usize {
		self.lanes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.lanes.is_empty()
	}

	/// Number of chunks dispatched so far.
	pub fn chunks(&self) -> u64 {
		self.chunks
	}

	/// Feed `chunk` to every accumulator and wait for all of them.
	pub fn dispatch(&mut self, chunk: &[u8]) {
		let lanes = &mut self.lanes;
		match &self.executor {
			Executor::Sequential => {
				for lane in lanes.iter_mut() {
					lane.accumulator.update(chunk);
				}
			}
			Executor::Global => update_parallel(lanes, chunk),
			Executor::Dedicated(pool) => {
				pool.install(|| update_parallel(lanes, chunk))
			}
		}
		self.chunks += 1;
	}

	/// Finalize every accumulator. Output order is the order the
	/// accumulators were handed to [`FanOut::new`].
	pub fn finish(self) -> Vec<(Algorithm, Vec<u8>)> {
		let finalize = |lane: Lane| {
			(lane.algorithm, lane.accumulator.finalize())
		};
		match self.executor {
			Executor::Sequential => {
				self.lanes.into_iter().map(finalize).collect()
			}
			Executor::Global => {
				self.lanes.into_par_iter().map(finalize).collect()
			}
			Executor::Dedicated(pool) => {
				let lanes = self.lanes;
				pool.install(|| {
					lanes.into_par_iter().map(finalize).collect()
				})
			}
		}
	}
}

fn update_parallel(lanes: &mut [Lane], chunk: &[u8]) {
	lanes
		.par_iter_mut()
		.for_each(|lane| lane.accumulator.update(chunk));
}
