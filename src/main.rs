use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use shabench::bench::{self, BenchConfig, Mode};
use shabench::fileops::{compare_files, decrypt_file, encrypt_file, hash_file, hash_reader};
use shabench::Result;

#[derive(Parser)]
#[command(name = "shabench", version, about = "SHA-256 file integrity and timing harness", long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the SHA-256 of each file (stdin when none or "-")
    #[command(alias = "h")]
    Hash {
        files: Vec<PathBuf>,
    },

    /// Encrypt a file with the substitution cipher
    #[command(alias = "e")]
    Encrypt {
        input: PathBuf,
        output: PathBuf,
    },

    /// Decrypt a file produced by `encrypt`
    #[command(alias = "d")]
    Decrypt {
        input: PathBuf,
        output: PathBuf,
    },

    /// Check whether two files are byte-identical (exit status 1 if not)
    #[command(alias = "c")]
    Compare {
        first: PathBuf,
        second: PathBuf,
    },

    /// Time the copy/encrypt/hash/verify workload sequentially and in parallel
    #[command(alias = "b")]
    Bench {
        /// File every copy is made from
        #[arg(long, required = true)]
        source: PathBuf,

        /// Number of copies (1-50)
        #[arg(long, default_value = "10")]
        copies: usize,

        /// Which runs to perform
        #[arg(long, default_value = "both", value_parser = parse_mode)]
        mode: Mode,

        /// Working directory for generated files
        #[arg(long, default_value = "file_workspace")]
        workspace: PathBuf,
    },
}

fn parse_mode(s: &str) -> std::result::Result<Mode, String> {
    s.parse()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match execute(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Hash { files } => {
            if files.is_empty() {
                print_stdin_hash()?;
            }
            for file in &files {
                if file == Path::new("-") {
                    print_stdin_hash()?;
                } else {
                    println!("{}  {}", hash_file(file)?, file.display());
                }
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Encrypt { input, output } => {
            let bytes = encrypt_file(&input, &output)?;
            println!("Encrypted {} bytes into {}", bytes, output.display());
            Ok(ExitCode::SUCCESS)
        }

        Commands::Decrypt { input, output } => {
            let bytes = decrypt_file(&input, &output)?;
            println!("Decrypted {} bytes into {}", bytes, output.display());
            Ok(ExitCode::SUCCESS)
        }

        Commands::Compare { first, second } => {
            if compare_files(&first, &second)? {
                println!("identical");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("different");
                Ok(ExitCode::from(1))
            }
        }

        Commands::Bench { source, copies, mode, workspace } => {
            let config = BenchConfig {
                copies,
                workspace,
                source,
                mode,
            };
            let reports = bench::run(&config)?;
            let mut all_consistent = true;
            for report in &reports {
                println!();
                print!("{}", report.render());
                all_consistent &= report.consistent();
            }

            let sequential = reports.iter().find(|r| r.mode == Mode::Sequential);
            let parallel = reports.iter().find(|r| r.mode == Mode::Parallel);
            if let (Some(sequential), Some(parallel)) = (sequential, parallel) {
                println!();
                print!("{}", bench::render_improvement(bench::improvement(sequential, parallel)));
            }
            Ok(if all_consistent { ExitCode::SUCCESS } else { ExitCode::from(2) })
        }
    }
}

fn print_stdin_hash() -> Result<()> {
    let digest = hash_reader(std::io::stdin().lock(), Path::new("-"))?;
    println!("{}  -", digest);
    Ok(())
}
