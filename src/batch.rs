use rayon::prelude::*;
use serde_derive::Serialize;

use rensa::{
	CoreField, RensaChainTracker, RensaCoefTracker, RensaNonTracker, RensaResult, RensaTracker,
	RensaVanishingPositionTracker,
};

use crate::problem::TrackerKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoefStep {
	pub nth_chain: usize,
	pub num_erased: usize,
	pub coef: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VanishingStep {
	pub nth_chain: usize,
	pub base: Vec<(usize, usize)>,
	///(x, from_y, to_y)
	pub falling: Vec<(usize, usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum TrackDetail {
	None,
	Chain { rows: Vec<String> },
	Coef { steps: Vec<CoefStep> },
	VanishingPosition { steps: Vec<VanishingStep> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
	pub name: String,
	pub chains: usize,
	pub score: usize,
	pub frames: usize,
	pub quick: bool,
	pub all_cleared: bool,
	pub detail: TrackDetail,
}

pub struct Job {
	pub name: String,
	pub field: CoreField,
	pub tracker: TrackerKind,
}

fn simulate<T: RensaTracker>(field: &CoreField, tracker: &mut T) -> (RensaResult, bool) {
	let mut field = field.clone();
	let result = field.simulate_with_tracker(tracker);
	(result, field.is_all_cleared())
}

/// Simulates one field, choosing the tracker at this boundary so the engine itself stays monomorphic.
pub fn run_job(job: &Job) -> Report {
	let ((result, all_cleared), detail) = match job.tracker {
		TrackerKind::None => (simulate(&job.field, &mut RensaNonTracker), TrackDetail::None),
		TrackerKind::Chain => {
			let mut tracker = RensaChainTracker::new();
			let outcome = simulate(&job.field, &mut tracker);
			(outcome, TrackDetail::Chain { rows: tracker.result().to_rows() })
		}
		TrackerKind::Coef => {
			let mut tracker = RensaCoefTracker::new();
			let outcome = simulate(&job.field, &mut tracker);
			let coef = tracker.result();
			let steps = (1..=coef.chains())
				.map(|nth_chain| CoefStep { nth_chain, num_erased: coef.num_erased(nth_chain), coef: coef.coef(nth_chain) })
				.collect();
			(outcome, TrackDetail::Coef { steps })
		}
		TrackerKind::VanishingPosition => {
			let mut tracker = RensaVanishingPositionTracker::new();
			let outcome = simulate(&job.field, &mut tracker);
			let vanishing = tracker.result();
			let steps = (1..=vanishing.size())
				.map(|nth_chain| VanishingStep {
					nth_chain,
					base: vanishing.base_puyos_at(nth_chain).iter().map(|p| (p.x, p.y)).collect(),
					falling: vanishing.falling_puyos_at(nth_chain).iter().map(|p| (p.x, p.from_y, p.to_y)).collect(),
				})
				.collect();
			(outcome, TrackDetail::VanishingPosition { steps })
		}
	};

	log::debug!("{}: {} chains, score {}", job.name, result.chains, result.score);

	Report {
		name: job.name.clone(),
		chains: result.chains,
		score: result.score,
		frames: result.frames,
		quick: result.quick,
		all_cleared,
		detail,
	}
}

/// Runs every job on the rayon pool. Each job simulates its own copy of the field; order is kept.
pub fn run_all(jobs: &[Job]) -> Vec<Report> {
	jobs.par_iter().map(run_job).collect()
}
