use puyo_rensa::batch::{run_all, run_job, Job, TrackDetail};
use puyo_rensa::problem::{ProblemSet, TrackerKind};
use rensa::CoreField;

const PROBLEMS: &str = r#"
(
	problems: [
		(
			name: "two chain",
			rows: [
				".B....",
				"RR....",
				"RRBBB.",
			],
			tracker: Coef,
		),
		(
			name: "nothing",
			rows: ["RRRBBB"],
		),
	],
)
"#;

fn jobs(set: &ProblemSet) -> Vec<Job> {
	set.problems
		.iter()
		.map(|problem| Job {
			name: problem.name.clone(),
			field: problem.field().unwrap(),
			tracker: problem.tracker,
		})
		.collect()
}

#[test]
fn problem_set_parses_ron() {
	let set = ProblemSet::parse(PROBLEMS).unwrap();

	assert_eq!(set.problems.len(), 2);
	assert_eq!(set.problems[0].tracker, TrackerKind::Coef);
	assert_eq!(set.problems[1].tracker, TrackerKind::None);
	assert_eq!(set.problems[0].field().unwrap(), CoreField::from_rows(&[
		".B....",
		"RR....",
		"RRBBB.",
	]));
}

#[test]
fn bad_rows_are_reported_with_problem_name() {
	let set = ProblemSet::parse(r#"(problems: [(name: "broken", rows: ["RRX..."])])"#).unwrap();

	let error = set.problems[0].field().unwrap_err();
	assert!(format!("{:#}", error).contains("broken"));
}

#[test]
fn broken_ron_is_an_error() {
	assert!(ProblemSet::parse("(problems: [(name: 1)])").is_err());
	assert!(ProblemSet::parse(r#"(problems: [(name: "x", rows: [], tracker: Unknown)])"#).is_err());
}

#[test]
fn run_all_keeps_order() {
	let set = ProblemSet::parse(PROBLEMS).unwrap();

	let reports = run_all(&jobs(&set));

	assert_eq!(reports.len(), 2);
	assert_eq!(reports[0].name, "two chain");
	assert_eq!(reports[0].chains, 2);
	assert_eq!(reports[0].score, 360);
	assert!(reports[0].all_cleared);
	match &reports[0].detail {
		TrackDetail::Coef { steps } => {
			assert_eq!(steps.len(), 2);
			assert_eq!(steps[1].coef, 8);
		}
		other => panic!("unexpected detail {:?}", other),
	}

	assert_eq!(reports[1].name, "nothing");
	assert_eq!(reports[1].chains, 0);
	assert!(!reports[1].all_cleared);
	assert_eq!(reports[1].detail, TrackDetail::None);
}

#[test]
fn chain_report_serializes_to_json() {
	let job = Job {
		name: "gtr".to_string(),
		field: CoreField::from_rows(&[
			"RRRR..",
		]),
		tracker: TrackerKind::Chain,
	};

	let report = run_job(&job);
	let json = serde_json::to_string(&report).unwrap();

	assert!(json.contains(r#""kind":"Chain""#), "{}", json);
	assert!(json.contains(r#""1111..""#), "{}", json);
	assert!(json.contains(r#""all_cleared":true"#), "{}", json);
}

#[test]
fn vanishing_report_lists_falling_puyos() {
	let job = Job {
		name: "fall".to_string(),
		field: CoreField::from_rows(&[
			".B....",
			"RR....",
			"RRBBB.",
		]),
		tracker: TrackerKind::VanishingPosition,
	};

	let report = run_job(&job);

	match report.detail {
		TrackDetail::VanishingPosition { steps } => {
			assert_eq!(steps.len(), 2);
			assert!(steps[0].falling.is_empty());
			assert_eq!(steps[1].falling, vec![(2, 3, 1)]);
			assert_eq!(steps[1].base, vec![(3, 1), (4, 1), (5, 1)]);
		}
		other => panic!("unexpected detail {:?}", other),
	}
}
