use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, Result};

pub const MIN_COPIES: usize = 1;
pub const MAX_COPIES: usize = 50;

/// Name each workspace gives its copy of the source file
pub const ORIGINAL_NAME: &str = "original.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    Sequential,
    Parallel,
    #[default]
    Both,
}

impl Mode {
    pub fn runs_sequential(self) -> bool {
        matches!(self, Mode::Sequential | Mode::Both)
    }

    pub fn runs_parallel(self) -> bool {
        matches!(self, Mode::Parallel | Mode::Both)
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sequential" | "seq" => Ok(Mode::Sequential),
            "parallel" | "par" => Ok(Mode::Parallel),
            "both" => Ok(Mode::Both),
            _ => Err(format!("Unknown mode: {}. Use sequential, parallel, or both", s)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Mode::Sequential => "sequential",
            Mode::Parallel => "parallel",
            Mode::Both => "both",
        })
    }
}

/// Benchmark settings
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Number of copies each run processes
    pub copies: usize,
    /// Root directory; each mode works in its own subdirectory
    pub workspace: PathBuf,
    /// File every copy is made from
    pub source: PathBuf,
    pub mode: Mode,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            copies: 10,
            workspace: PathBuf::from("file_workspace"),
            source: PathBuf::from(ORIGINAL_NAME),
            mode: Mode::default(),
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<()> {
        if !(MIN_COPIES..=MAX_COPIES).contains(&self.copies) {
            return Err(Error::InvalidCopies(self.copies));
        }
        if !self.source.is_file() {
            return Err(Error::MissingSource(self.source.clone()));
        }
        Ok(())
    }

    pub fn sequential_dir(&self) -> PathBuf {
        self.workspace.join("sequential")
    }

    pub fn parallel_dir(&self) -> PathBuf {
        self.workspace.join("parallel")
    }
}

/// Create `dir` and place a copy of `source` in it as `original.txt`
pub fn prepare_workspace(dir: &Path, source: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    let original = dir.join(ORIGINAL_NAME);
    crate::fileops::copy_file(source, &original)?;
    Ok(original)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_copies_bounds() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("src.txt");
        std::fs::write(&source, b"data").unwrap();

        let mut config = BenchConfig {
            source,
            workspace: dir.path().to_path_buf(),
            ..Default::default()
        };
        for ok in [1, 25, 50] {
            config.copies = ok;
            assert!(config.validate().is_ok());
        }
        for bad in [0, 51] {
            config.copies = bad;
            assert!(matches!(config.validate(), Err(Error::InvalidCopies(n)) if n == bad));
        }
    }

    #[test]
    fn test_missing_source() {
        let dir = tempdir().unwrap();
        let config = BenchConfig {
            source: dir.path().join("absent.txt"),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::MissingSource(_))));
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("seq".parse::<Mode>().unwrap(), Mode::Sequential);
        assert_eq!("Parallel".parse::<Mode>().unwrap(), Mode::Parallel);
        assert_eq!("both".parse::<Mode>().unwrap(), Mode::Both);
        assert!("sideways".parse::<Mode>().is_err());
        assert!(Mode::Both.runs_sequential() && Mode::Both.runs_parallel());
        assert!(!Mode::Parallel.runs_sequential());
    }

    #[test]
    fn test_prepare_workspace() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("input.txt");
        std::fs::write(&source, b"payload").unwrap();

        let work = dir.path().join("ws").join("sequential");
        let original = prepare_workspace(&work, &source).unwrap();
        assert_eq!(original, work.join(ORIGINAL_NAME));
        assert_eq!(std::fs::read(original).unwrap(), b"payload");
    }
}
