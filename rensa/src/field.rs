use std::fmt;

use anyhow::{bail, Context, Result};

use crate::puyo_kind::PuyoKind;

pub const WIDTH: usize = 6;
pub const MAP_WIDTH: usize = 8;

///見える段
pub const HEIGHT: usize = 12;
///14段目まで置ける
pub const PLAYABLE_HEIGHT: usize = 14;
pub const MAP_HEIGHT: usize = 16;

pub const PUYO_ERASE_NUM: usize = 4;

/// Board with a wall border. x = 1..=6 and y = 1..=14 hold puyos; x = 0, x = 7 and y = 0 are walls.
#[derive(Clone, PartialEq, Eq)]
pub struct CoreField {
	cells: [[PuyoKind; MAP_HEIGHT]; MAP_WIDTH],
	heights: [usize; MAP_WIDTH],
}

impl Default for CoreField {
	fn default() -> Self {
		CoreField::new()
	}
}

impl CoreField {
	pub fn new() -> CoreField {
		let mut cells = [[PuyoKind::Empty; MAP_HEIGHT]; MAP_WIDTH];
		for y in 0..MAP_HEIGHT {
			cells[0][y] = PuyoKind::Wall;
			cells[MAP_WIDTH - 1][y] = PuyoKind::Wall;
		}
		for x in 0..MAP_WIDTH {
			cells[x][0] = PuyoKind::Wall;
			cells[x][MAP_HEIGHT - 1] = PuyoKind::Wall;
		}

		CoreField {
			cells,
			heights: [0; MAP_WIDTH],
		}
	}

	/// Builds a field from fixture rows with the default symbols and `.` as placeholder.
	/// Panics when a row is not exactly `WIDTH` wide.
	pub fn from_rows(rows: &[&str]) -> CoreField {
		crate::pattern_field::PatternField::new(rows).to_core_field(PuyoKind::from_char)
	}

	/// Parses untrusted multi-line board text (top row first).
	pub fn parse(text: &str) -> Result<CoreField> {
		let rows: Vec<&str> = text.lines().map(str::trim).filter(|line| !line.is_empty()).collect();
		if rows.len() > PLAYABLE_HEIGHT {
			bail!("too many rows: {} (max {})", rows.len(), PLAYABLE_HEIGHT);
		}

		let mut field = CoreField::new();
		for (i, row) in rows.iter().enumerate() {
			let y = rows.len() - i;
			let symbols: Vec<char> = row.chars().collect();
			if symbols.len() != WIDTH {
				bail!("row {} has width {}, expected {}: {:?}", i + 1, symbols.len(), WIDTH, row);
			}

			for (dx, c) in symbols.into_iter().enumerate() {
				let kind = PuyoKind::from_char(c)
					.with_context(|| format!("unknown symbol {:?} at row {}, column {}", c, i + 1, dx + 1))?;
				if kind == PuyoKind::Wall {
					bail!("wall symbol inside the playable area at row {}, column {}", i + 1, dx + 1);
				}
				if !kind.is_empty() {
					field.set(dx + 1, y, kind);
				}
			}
		}

		//浮いているぷよは連鎖が起きないと落ちないので受け付けない
		if let Some(x) = (1..=WIDTH).find(|&x| (1..=field.height(x)).any(|y| field.is_empty(x, y))) {
			bail!("column {} has a floating puyo", x);
		}

		Ok(field)
	}

	#[inline]
	fn check_range(x: usize, y: usize) {
		debug_assert!((1..=WIDTH).contains(&x), "x out of range: {}", x);
		debug_assert!(y < MAP_HEIGHT, "y out of range: {}", y);
	}

	#[inline]
	pub fn get(&self, x: usize, y: usize) -> PuyoKind {
		debug_assert!(x < MAP_WIDTH && y < MAP_HEIGHT, "({}, {}) out of range", x, y);
		self.cells[x][y]
	}

	#[inline]
	pub fn is_empty(&self, x: usize, y: usize) -> bool {
		self.get(x, y).is_empty()
	}

	#[inline]
	pub fn is_color(&self, x: usize, y: usize) -> bool {
		self.get(x, y).is_color()
	}

	/// Writes a cell and keeps the height cache of column `x` consistent.
	pub fn set(&mut self, x: usize, y: usize, kind: PuyoKind) {
		Self::check_range(x, y);
		debug_assert!(y != 0 && y != MAP_HEIGHT - 1, "row {} is a wall row", y);

		self.cells[x][y] = kind;
		if !kind.is_empty() {
			if self.heights[x] < y {
				self.heights[x] = y;
			}
		} else if self.heights[x] == y {
			let mut h = y - 1;
			while h > 0 && self.cells[x][h].is_empty() {
				h -= 1;
			}
			self.heights[x] = h;
		}
	}

	#[inline]
	pub fn height(&self, x: usize) -> usize {
		Self::check_range(x, 1);
		self.heights[x]
	}

	pub fn recompute_heights(&mut self) {
		for x in 1..=WIDTH {
			let mut h = PLAYABLE_HEIGHT;
			while h > 0 && self.cells[x][h].is_empty() {
				h -= 1;
			}
			self.heights[x] = h;
		}
	}

	///一番上に積む、積めなければfalse
	pub fn drop_puyo_on(&mut self, x: usize, kind: PuyoKind) -> bool {
		debug_assert!(!kind.is_empty() && kind != PuyoKind::Wall);
		let y = self.height(x) + 1;
		if y > PLAYABLE_HEIGHT {
			return false;
		}

		self.set(x, y, kind);
		true
	}

	pub fn count_puyos(&self) -> usize {
		(1..=WIDTH).map(|x| (1..=self.heights[x]).filter(|&y| !self.cells[x][y].is_empty()).count()).sum()
	}

	pub fn count_color_puyos(&self) -> usize {
		(1..=WIDTH).map(|x| (1..=self.heights[x]).filter(|&y| self.cells[x][y].is_color()).count()).sum()
	}

	///全消し
	pub fn is_all_cleared(&self) -> bool {
		(1..=WIDTH).all(|x| self.heights[x] == 0)
	}

	/// True when no column has an empty cell below an occupied one.
	pub fn is_stable(&self) -> bool {
		(1..=WIDTH).all(|x| (1..=self.heights[x]).all(|y| !self.cells[x][y].is_empty()))
	}

	pub(crate) fn cells(&self) -> &[[PuyoKind; MAP_HEIGHT]; MAP_WIDTH] {
		&self.cells
	}

	pub(crate) fn cells_mut(&mut self) -> &mut [[PuyoKind; MAP_HEIGHT]; MAP_WIDTH] {
		&mut self.cells
	}

	pub(crate) fn set_height_unchecked(&mut self, x: usize, height: usize) {
		self.heights[x] = height;
	}

	/// Rows `PLAYABLE_HEIGHT..=1`, one string per row, with the default symbols.
	pub fn to_rows(&self) -> Vec<String> {
		(1..=PLAYABLE_HEIGHT)
			.rev()
			.map(|y| (1..=WIDTH).map(|x| self.cells[x][y].to_char()).collect())
			.collect()
	}
}

impl fmt::Display for CoreField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for row in self.to_rows() {
			writeln!(f, "{}", row)?;
		}
		Ok(())
	}
}

impl fmt::Debug for CoreField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "CoreField {{ heights: {:?}", &self.heights[1..=WIDTH])?;
		write!(f, "{}", self)?;
		write!(f, "}}")
	}
}
