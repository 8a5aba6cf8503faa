//! Sequential vs. parallel timing harness.
//!
//! Each run makes N copies of a source file and, per copy, encrypts it,
//! hashes it twice, decrypts it again and checks the round trip. The
//! sequential driver does this in a loop; the parallel driver gives every
//! copy its own thread and digest engine and records completions in one
//! mutex-guarded log. When both run, the parallel total is compared
//! against the sequential one as a percentage improvement.

pub mod config;
pub mod process;
pub mod runner;

pub use config::{prepare_workspace, BenchConfig, Mode, MAX_COPIES, MIN_COPIES, ORIGINAL_NAME};
pub use process::{run_process, ProcessReport};
pub use runner::{
    improvement, improvement_percent, render_improvement, run, run_parallel, run_sequential, BenchReport, Lap,
};
