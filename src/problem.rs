use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_derive::{Deserialize, Serialize};

use rensa::CoreField;

/// Which tracker to run a problem with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, strum::Display, strum::EnumString)]
pub enum TrackerKind {
	#[default]
	None,
	Chain,
	Coef,
	VanishingPosition,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Problem {
	pub name: String,
	///上の段から
	pub rows: Vec<String>,
	#[serde(default)]
	pub tracker: TrackerKind,
}

impl Problem {
	pub fn field(&self) -> Result<CoreField> {
		CoreField::parse(&self.rows.join("\n")).with_context(|| format!("problem {:?}", self.name))
	}
}

/// A RON file such as `(problems: [(name: "gtr", rows: ["RR....", ...], tracker: Chain)])`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProblemSet {
	pub problems: Vec<Problem>,
}

impl ProblemSet {
	pub fn load(path: &Path) -> Result<Self> {
		let text = fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
		Self::parse(&text).with_context(|| format!("cannot decode {}", path.display()))
	}

	pub fn parse(text: &str) -> Result<Self> {
		let set: ProblemSet = ron::from_str(text)?;
		Ok(set)
	}
}
