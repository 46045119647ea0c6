use crate::field::{CoreField, MAP_HEIGHT, MAP_WIDTH, PLAYABLE_HEIGHT, WIDTH};
use crate::puyo_kind::PuyoKind;

pub const DEFAULT_PLACEHOLDER: char = '.';

/// Raw symbol grid built from fixture rows. Rows are given top first; the last row lands on y = 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternField {
	placeholder: char,
	field: [[char; MAP_HEIGHT]; MAP_WIDTH],
	heights: [usize; MAP_WIDTH],
}

impl PatternField {
	pub fn new(rows: &[&str]) -> PatternField {
		Self::with_placeholder(rows, DEFAULT_PLACEHOLDER)
	}

	/// Panics when a row is not exactly `WIDTH` symbols or there are more rows than the field holds.
	pub fn with_placeholder(rows: &[&str], placeholder: char) -> PatternField {
		assert!(rows.len() <= PLAYABLE_HEIGHT, "pattern has {} rows, max {}", rows.len(), PLAYABLE_HEIGHT);

		let mut pattern = PatternField {
			placeholder,
			field: [[placeholder; MAP_HEIGHT]; MAP_WIDTH],
			heights: [0; MAP_WIDTH],
		};

		for (i, row) in rows.iter().enumerate() {
			let symbols: Vec<char> = row.chars().collect();
			assert_eq!(symbols.len(), WIDTH, "pattern row {} has wrong width: {:?}", i, row);

			let y = rows.len() - i;
			for x in 1..=WIDTH {
				let c = symbols[x - 1];
				if c == placeholder {
					continue;
				}

				pattern.field[x][y] = c;
				pattern.heights[x] = pattern.heights[x].max(y);
			}
		}

		pattern
	}

	#[inline]
	pub fn symbol(&self, x: usize, y: usize) -> char {
		self.field[x][y]
	}

	#[inline]
	pub fn height(&self, x: usize) -> usize {
		self.heights[x]
	}

	pub fn is_placeholder(&self, x: usize, y: usize) -> bool {
		self.field[x][y] == self.placeholder
	}

	/// Materialises the pattern, mapping every non-placeholder symbol through `mapping`.
	/// Panics on a symbol the mapping does not know and on walls inside the playable area.
	pub fn to_core_field<F>(&self, mapping: F) -> CoreField
	where
		F: Fn(char) -> Option<PuyoKind>,
	{
		let mut field = CoreField::new();
		for x in 1..=WIDTH {
			for y in 1..=self.heights[x] {
				if self.is_placeholder(x, y) {
					continue;
				}

				let c = self.field[x][y];
				let kind = mapping(c).unwrap_or_else(|| panic!("unknown pattern symbol {:?} at ({}, {})", c, x, y));
				assert!(kind != PuyoKind::Wall, "wall symbol {:?} inside the playable area at ({}, {})", c, x, y);
				if !kind.is_empty() {
					field.set(x, y, kind);
				}
			}
		}

		field
	}
}
