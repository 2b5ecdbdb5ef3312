use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use alignstat::{align_all_pairs, read_records_from_path, report, Result, ScoringParams};

#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
#[command(about = "All-pairs global sequence alignment with comparison-count statistics")]
struct Args {
    /// Input file with one `label = sequence` record per line (.gz supported)
    #[arg(short, long)]
    input: PathBuf,

    /// Report file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// CSV summary file
    #[arg(long, default_value = "summary.csv")]
    summary: PathBuf,

    /// Score added when two symbols match
    #[arg(short = 'm', long)]
    match_value: f64,

    /// Score added when two symbols mismatch (typically negative)
    #[arg(short = 'p', long)]
    mismatch_penalty: f64,

    /// Score added when a gap is introduced (typically negative)
    #[arg(short = 'g', long)]
    gap_penalty: f64,

    /// Number of threads to use (0 = all cores)
    #[arg(short, long, default_value = "1")]
    threads: usize,
}

fn run(args: &Args) -> Result<()> {
    let params = ScoringParams::new(args.match_value, args.mismatch_penalty, args.gap_penalty)?;

    let sequences = read_records_from_path(&args.input)?;
    log::info!(
        "read {} sequences from {}",
        sequences.len(),
        args.input.display()
    );
    if sequences.len() < 2 {
        log::warn!("fewer than two sequences, nothing to align");
    }

    let stats = align_all_pairs(&sequences, &params)?;
    log::info!("aligned {} pairs", stats.len());

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout()),
    };
    report::write_report(&mut out, &stats)?;
    out.flush()?;

    let summary = File::create(&args.summary)?;
    report::write_summary(BufWriter::new(summary), &stats)?;
    log::info!("wrote summary to {}", args.summary.display());

    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()
    {
        log::error!("failed to configure thread pool: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
