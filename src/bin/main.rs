use clap::Parser;
use log::{error, info};
use numeral_core::report::{write_json, Report, ReportWriter, TopEntry};
use numeral_core::{
    sample, EngineConfig, Label, MapStrategy, NumeralEngine, RankStrategy, SummaryRow,
    SummaryStrategy,
};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use std::time::Instant;

const PREVIEW_LEN: usize = 12;

/// Maps a random batch of 1..=50 to Roman numerals with every strategy,
/// ranks the most frequent values and prints a per-value summary.
#[derive(Parser, Debug)]
#[command(name = "numeral_demo", version)]
struct Args {
    /// Number of random values to generate
    #[arg(long, default_value_t = 200_000)]
    count: usize,

    /// Seed for a reproducible sample
    #[arg(long)]
    seed: Option<u64>,

    /// How many of the most frequent values to rank
    #[arg(long, default_value_t = numeral_core::core::types::DEFAULT_TOP_N)]
    top: usize,

    /// Smallest slice handed to a parallel worker
    #[arg(long)]
    parallel_min_len: Option<usize>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = EngineConfig {
        top_n: args.top,
        ..EngineConfig::default()
    };
    if let Some(min_len) = args.parallel_min_len {
        config.parallel_min_len = min_len;
    }

    let source = match args.seed {
        Some(seed) => sample::generate_seeded(args.count, seed),
        None => sample::generate(args.count, &mut rand::thread_rng()),
    };
    info!("generated {} values", source.len());

    let mut engine = NumeralEngine::with_config(config);

    // 1. Every mapping strategy over the full-domain cache, checked against each other.
    let mut reference: Option<Vec<Label>> = None;
    for strategy in MapStrategy::ALL {
        let started = Instant::now();
        let labels = engine.map_all(&source, strategy)?;
        info!("map_all[{}] took {:?}", strategy.name(), started.elapsed());
        match &reference {
            None => reference = Some(labels),
            Some(expected) if *expected == labels => {}
            Some(_) => {
                let first = MapStrategy::ALL[0].name();
                return Err(format!("strategy {} disagrees with {}", strategy.name(), first).into());
            }
        }
    }

    // 2. Top N, with the cache narrowed to just those values.
    let started = Instant::now();
    let parallel_top = engine.top_n_labels(&source, RankStrategy::Parallel)?;
    let top_labels = engine.top_n_labels(&source, RankStrategy::Sequential)?;
    info!("top_n_labels (both rankers) took {:?}", started.elapsed());
    info!("cache narrowed to {:?}", engine.cache().sorted_domain());
    if parallel_top != top_labels {
        return Err("parallel and sequential ranking disagree".into());
    }

    let ranked = engine.top_counts(&source, RankStrategy::Sequential);
    let top: Vec<TopEntry> = ranked
        .into_iter()
        .zip(&top_labels)
        .map(|(fc, (_, label))| TopEntry::new(fc, label))
        .collect();

    // 3. Full summary needs the full domain back.
    engine.reset_cache();
    let mut summary: Option<Vec<SummaryRow>> = None;
    for strategy in SummaryStrategy::ALL {
        let started = Instant::now();
        let rows = engine.summarize(&source, strategy)?;
        info!("summarize[{:?}] took {:?}", strategy, started.elapsed());
        match &summary {
            None => summary = Some(rows),
            Some(expected) if *expected == rows => {}
            Some(_) => return Err(format!("summary strategy {:?} disagrees", strategy).into()),
        }
    }

    let report = Report {
        sample_len: source.len(),
        top,
        summary: summary.unwrap_or_default(),
    };

    let stdout = io::stdout();
    if args.json {
        write_json(stdout.lock(), &report)?;
        println!();
    } else {
        let styled = stdout.is_terminal();
        let mut writer = ReportWriter::new(stdout.lock(), styled);
        if let Some(labels) = &reference {
            writer.write_preview(labels, PREVIEW_LEN)?;
            println!();
        }
        writer.write_report(&report)?;
    }
    Ok(())
}
