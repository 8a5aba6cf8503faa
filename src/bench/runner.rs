use std::fmt::Write as _;
use std::path::Path;
use std::sync::{Mutex, PoisonError};
use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use super::config::{prepare_workspace, BenchConfig, Mode};
use super::process::{run_process, ProcessReport};
use crate::error::{Error, Result};
use crate::timer::{format_duration, Timer};

const RULE: &str = "================================";
const THIN_RULE: &str = "--------------------------------";

/// Time taken by one process, in the order processes finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lap {
    pub id: usize,
    pub duration: Duration,
}

#[derive(Debug, Clone)]
pub struct BenchReport {
    pub mode: Mode,
    pub timer: Timer,
    pub laps: Vec<Lap>,
    pub processes: Vec<ProcessReport>,
}

impl BenchReport {
    /// Every process verified its round trip and all produced the same digest
    pub fn consistent(&self) -> bool {
        let mut digests = self.processes.iter().map(|p| p.digest);
        let first = digests.next();
        self.processes.iter().all(ProcessReport::ok) && digests.all(|d| Some(d) == first)
    }

    pub fn render(&self) -> String {
        let label = self.mode.to_string().to_uppercase();
        let mut out = String::new();

        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(out, "{:^32}", format!("{} RUN START", label));
        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(out, "Start time:         {}", self.timer.start_text());
        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(out);

        for lap in &self.laps {
            let _ = writeln!(out, "PROCESS TIME {:<3} {}", format!("{}:", lap.id), format_duration(lap.duration));
            let _ = writeln!(out, "{}", THIN_RULE);
        }

        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(out, "{:^32}", format!("{} RUN END", label));
        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(out, "End time:           {}", self.timer.end_text());
        let _ = writeln!(out, "Total time:         {}", format_duration(self.timer.elapsed()));
        let _ = writeln!(out, "Average time:       {}", format_duration(self.timer.average_per_process()));
        if let Some(first) = self.processes.first() {
            let _ = writeln!(out, "Digest:             {}", first.digest);
        }
        let _ = writeln!(out, "Consistent:         {}", if self.consistent() { "yes" } else { "NO" });
        let _ = writeln!(out, "{}", RULE);
        out
    }
}

/// Run copies 1..=copies one after another in `dir`
pub fn run_sequential(dir: &Path, copies: usize) -> Result<BenchReport> {
    let mut timer = Timer::start();
    let mut laps = Vec::with_capacity(copies);
    let mut processes = Vec::with_capacity(copies);

    for id in 1..=copies {
        let report = run_process(dir, id)?;
        timer.mark();
        let lap = Lap { id, duration: timer.last_lap() };
        info!(id, elapsed = %format_duration(lap.duration), "sequential process done");
        laps.push(lap);
        processes.push(report);
    }
    timer.stop();

    Ok(BenchReport {
        mode: Mode::Sequential,
        timer,
        laps,
        processes,
    })
}

/// Completion log shared by the parallel workers
struct SharedLog {
    timer: Timer,
    laps: Vec<Lap>,
    processes: Vec<ProcessReport>,
}

/// Run copies 1..=copies on one thread each in `dir`.
///
/// Each worker hashes with its own engine; only the completion log is
/// shared, behind a single mutex. Laps are recorded in finish order.
pub fn run_parallel(dir: &Path, copies: usize) -> Result<BenchReport> {
    let log = Mutex::new(SharedLog {
        timer: Timer::start(),
        laps: Vec::with_capacity(copies),
        processes: Vec::with_capacity(copies),
    });

    let outcomes: Vec<Result<()>> = thread::scope(|s| {
        let handles: Vec<_> = (1..=copies)
            .map(|id| {
                let log = &log;
                let handle = s.spawn(move || -> Result<()> {
                    let report = run_process(dir, id)?;

                    let mut log = log.lock().unwrap_or_else(PoisonError::into_inner);
                    log.timer.mark();
                    let lap = Lap { id, duration: log.timer.last_lap() };
                    info!(id, elapsed = %format_duration(lap.duration), "parallel process done");
                    log.laps.push(lap);
                    log.processes.push(report);
                    Ok(())
                });
                (id, handle)
            })
            .collect();

        handles
            .into_iter()
            .map(|(id, handle)| handle.join().unwrap_or(Err(Error::WorkerPanicked(id))))
            .collect()
    });

    let mut log = log.into_inner().unwrap_or_else(PoisonError::into_inner);
    log.timer.stop();
    outcomes.into_iter().collect::<Result<Vec<()>>>()?;

    log.processes.sort_by_key(|p| p.id);
    Ok(BenchReport {
        mode: Mode::Parallel,
        timer: log.timer,
        laps: log.laps,
        processes: log.processes,
    })
}

/// Share of the sequential time saved by the parallel run, in percent.
///
/// Negative when the parallel run was slower; `None` when the sequential
/// run took no measurable time.
pub fn improvement_percent(sequential: Duration, parallel: Duration) -> Option<f64> {
    let seq = sequential.as_secs_f64();
    if seq == 0.0 {
        return None;
    }
    Some((seq - parallel.as_secs_f64()) / seq * 100.0)
}

/// [`improvement_percent`] over the total times of two runs
pub fn improvement(sequential: &BenchReport, parallel: &BenchReport) -> Option<f64> {
    improvement_percent(sequential.timer.elapsed(), parallel.timer.elapsed())
}

pub fn render_improvement(percent: Option<f64>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", RULE);
    match percent {
        Some(p) => {
            let _ = writeln!(out, "Improvement:        {:.2} %", p);
        }
        None => {
            let _ = writeln!(out, "Improvement:        n/a");
        }
    }
    let _ = writeln!(out, "{}", RULE);
    out
}

/// Validate `config`, prepare the workspaces and run the selected modes
pub fn run(config: &BenchConfig) -> Result<Vec<BenchReport>> {
    config.validate()?;
    let mut reports = Vec::new();

    if config.mode.runs_sequential() {
        let dir = config.sequential_dir();
        prepare_workspace(&dir, &config.source)?;
        info!(dir = %dir.display(), copies = config.copies, "starting sequential run");
        reports.push(run_sequential(&dir, config.copies)?);
    }
    if config.mode.runs_parallel() {
        let dir = config.parallel_dir();
        prepare_workspace(&dir, &config.source)?;
        info!(dir = %dir.display(), copies = config.copies, "starting parallel run");
        reports.push(run_parallel(&dir, config.copies)?);
    }

    for report in &reports {
        if !report.consistent() {
            warn!(mode = %report.mode, "run produced mismatched digests or a failed round trip");
        }
    }
    Ok(reports)
}
