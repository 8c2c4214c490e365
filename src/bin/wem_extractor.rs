use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use wemcarve::{extract_tree, ExtractOptions, OversizePolicy, TreeReport, WalkOptions};

/// Carve RIFF/WAVE (.wem) chunks out of every file under a directory tree
#[derive(Parser, Debug)]
#[command(name = "wem_extractor", version)]
struct Cli {
    /// Directory holding the unpacked container files
    #[arg(short, long, default_value = "nier_unpacked")]
    input: PathBuf,

    /// Directory receiving one subdirectory per source file
    #[arg(short, long, default_value = "nier_unpacked_result")]
    output: PathBuf,

    /// Extension of the written entries
    #[arg(long, default_value = "wem")]
    ext: String,

    /// What to do with chunks whose declared size overruns the file (clamp, reject)
    #[arg(long, default_value_t = OversizePolicy::Clamp)]
    oversize: OversizePolicy,

    /// Worker threads; 1 processes files one at a time, 0 uses every CPU
    #[arg(short, long, default_value_t = 1)]
    jobs: usize,

    /// Write a JSON report of the run to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Wait for Enter before exiting
    #[arg(long)]
    pause: bool,

    /// More output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only print warnings and the final summary
    #[arg(short, long)]
    quiet: bool,
}

/// Route the library's `log` records through a tracing fmt subscriber on
/// stdout. `RUST_LOG` directives override the `-v`/`-q` level.
fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        LevelFilter::WARN
    } else {
        match cli.verbose {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(io::stdout)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    let options = ExtractOptions {
        extension: cli.ext.trim_start_matches('.').to_string(),
        oversize: cli.oversize,
        ..ExtractOptions::default()
    };
    let walk = WalkOptions { jobs: cli.jobs };

    let code = match extract_tree(&cli.input, &cli.output, &options, &walk) {
        Ok(report) => {
            print_summary(&report, cli.quiet);
            match &cli.report {
                Some(path) => match write_report(&report, path) {
                    Ok(()) => {
                        println!("Report written to {}", path.display());
                        ExitCode::SUCCESS
                    }
                    Err(e) => {
                        println!("Error: failed to write report {}: {}", path.display(), e);
                        ExitCode::FAILURE
                    }
                },
                None => ExitCode::SUCCESS,
            }
        }
        Err(e) => {
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    };

    if cli.pause {
        println!("\nPress Enter to exit...");
        let mut line = String::new();
        let _ = io::stdin().lock().read_line(&mut line);
    }
    code
}

fn print_summary(report: &TreeReport, quiet: bool) {
    if !quiet {
        println!();
        for file in &report.files {
            match &file.result {
                Ok(outcome) if outcome.any_extracted() => println!(
                    "{}: {} chunk(s), {} bytes{}",
                    file.source.display(),
                    outcome.count(),
                    outcome.bytes_written,
                    match outcome.clamped_count() {
                        0 => String::new(),
                        n => format!(", {} clamped", n),
                    }
                ),
                Ok(_) => println!("{}: no chunks", file.source.display()),
                Err(e) => println!("{}: failed ({})", file.source.display(), e),
            }
        }
    }

    let output = report
        .output_root
        .canonicalize()
        .unwrap_or_else(|_| report.output_root.clone());
    println!(
        "\nExtraction completed: {} chunk(s) from {} of {} files ({} failed). Check {} for extracted files.",
        report.chunks_written(),
        report.files_with_chunks(),
        report.files_visited(),
        report.failures(),
        output.display()
    );
}

fn write_report(report: &TreeReport, path: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &report.summary())?;
    writer.write_all(b"\n")?;
    writer.flush()
}
