use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

use console::console::Console;
use puyo_rensa::batch::{run_all, Job};
use puyo_rensa::log::Log;
use puyo_rensa::problem::{ProblemSet, TrackerKind};
use rensa::random::random_field;
use rensa::RensaChainTracker;

/// Simulates puyo puyo rensa for a set of fields and prints one JSON report per field.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
	/// RON problem file
	problems: Option<PathBuf>,

	/// Evaluate this many random fields instead of a problem file
	#[arg(long)]
	random: Option<usize>,

	/// Colors used for random fields
	#[arg(long, default_value_t = 4)]
	colors: usize,

	/// Probability of an ojama cell in random fields
	#[arg(long, default_value_t = 0.0)]
	ojama_rate: f64,

	#[arg(long)]
	seed: Option<u64>,

	/// Tracker for random fields
	#[arg(long, default_value_t = TrackerKind::None)]
	tracker: TrackerKind,

	#[arg(long, default_value = "log.txt")]
	log: PathBuf,

	#[arg(long, default_value_t = log::LevelFilter::Info)]
	log_level: log::LevelFilter,

	/// Print every field with the chain that erased each puyo
	#[arg(long)]
	show: bool,
}

fn load_jobs(args: &Args) -> Result<Vec<Job>> {
	if let Some(count) = args.random {
		if !(0.0..=1.0).contains(&args.ojama_rate) {
			bail!("--ojama-rate must be within 0.0..=1.0");
		}
		if !(1..=rensa::puyo_kind::COLOR_PUYOS.len()).contains(&args.colors) {
			bail!("--colors must be within 1..={}", rensa::puyo_kind::COLOR_PUYOS.len());
		}

		let seed = args.seed.unwrap_or_else(|| thread_rng().gen());
		log::info!("random fields: count={} colors={} seed={}", count, args.colors, seed);
		let mut rng = StdRng::seed_from_u64(seed);
		return Ok((0..count)
			.map(|i| Job {
				name: format!("random-{}", i),
				field: random_field(&mut rng, args.colors, args.ojama_rate),
				tracker: args.tracker,
			})
			.collect());
	}

	let Some(path) = &args.problems else {
		bail!("give a problem file or --random <count>");
	};

	let set = ProblemSet::load(path)?;
	set.problems
		.iter()
		.map(|problem| {
			Ok(Job {
				name: problem.name.clone(),
				field: problem.field()?,
				tracker: problem.tracker,
			})
		})
		.collect()
}

fn main() -> Result<()> {
	let args = Args::parse();
	Log::open(&args.log, args.log_level)?.install()?;

	let jobs = load_jobs(&args)?;
	log::info!("simulating {} fields", jobs.len());

	let reports = run_all(&jobs);
	for report in &reports {
		println!("{}", serde_json::to_string(report)?);
	}

	if args.show {
		for job in &jobs {
			let mut tracker = RensaChainTracker::new();
			let mut field = job.field.clone();
			let result = field.simulate_with_tracker(&mut tracker);
			println!("{} ({} chains, {} points)", job.name, result.chains, result.score);
			Console::print_chain_track(&job.field, tracker.result())?;
			//連鎖後に残ったぷよ
			Console::print_field(&field)?;
		}
	}

	let best = reports.iter().max_by_key(|report| report.score);
	if let Some(best) = best {
		log::info!("best: {} with {} chains, {} points", best.name, best.chains, best.score);
	}
	log::logger().flush();

	Ok(())
}
