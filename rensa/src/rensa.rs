use crate::field::{CoreField, HEIGHT, MAP_HEIGHT, MAP_WIDTH, PUYO_ERASE_NUM, WIDTH};
use crate::puyo_kind::PuyoKind;
use crate::rensa_result::RensaResult;
use crate::rensa_tracker::{RensaNonTracker, RensaTracker};
use crate::score::{RensaScorer, StandardScorer};

pub const FRAMES_VANISH_ANIMATION: usize = 48;
pub const FRAMES_TO_DROP_PER_ROW: usize = 2;
pub const FRAMES_GROUNDING: usize = 10;

const VISIBLE_CELLS: usize = WIDTH * HEIGHT;
const MAX_GROUPS: usize = VISIBLE_CELLS / PUYO_ERASE_NUM;

/// What one chain step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RensaStep {
	pub nth_chain: usize,
	///色ぷよ+おじゃま
	pub num_erased: usize,
	pub num_color_erased: usize,
	pub coef: usize,
	pub score: usize,
	///一番長く落ちたぷよの段数
	pub max_drop: usize,
}

impl RensaStep {
	pub fn frames(&self) -> usize {
		let mut frames = FRAMES_VANISH_ANIMATION;
		if self.max_drop > 0 {
			frames += FRAMES_TO_DROP_PER_ROW * self.max_drop + FRAMES_GROUNDING;
		}
		frames
	}
}

struct Vanished {
	num_erased: usize,
	num_color_erased: usize,
	coef: usize,
	score: usize,
}

impl CoreField {
	/// Runs the rensa to the end with the standard scoring and no tracking.
	pub fn simulate(&mut self) -> RensaResult {
		self.simulate_with(&StandardScorer, &mut RensaNonTracker)
	}

	pub fn simulate_with_tracker<T: RensaTracker + ?Sized>(&mut self, tracker: &mut T) -> RensaResult {
		self.simulate_with(&StandardScorer, tracker)
	}

	pub fn simulate_with<S, T>(&mut self, scorer: &S, tracker: &mut T) -> RensaResult
	where
		S: RensaScorer + ?Sized,
		T: RensaTracker + ?Sized,
	{
		let mut result = RensaResult::default();

		while let Some(step) = self.vanish_drop(result.chains + 1, scorer, tracker) {
			result.chains = step.nth_chain;
			result.score += step.score;
			result.frames += step.frames();
			result.quick = step.max_drop == 0;
		}

		result
	}

	/// Runs one chain step: vanish, drop, then `nth_chain_done`. Returns `None` (and leaves the
	/// field untouched) when nothing vanishes.
	pub fn vanish_drop<S, T>(&mut self, nth_chain: usize, scorer: &S, tracker: &mut T) -> Option<RensaStep>
	where
		S: RensaScorer + ?Sized,
		T: RensaTracker + ?Sized,
	{
		assert!(nth_chain >= 1, "nth_chain starts from 1");

		let vanished = self.vanish(nth_chain, scorer, tracker)?;
		let max_drop = self.drop_after_vanish(tracker);
		tracker.nth_chain_done(nth_chain, vanished.num_erased, vanished.coef);

		log::trace!(
			"chain {}: erased {} ({} color), coef {}, score {}, max drop {}",
			nth_chain, vanished.num_erased, vanished.num_color_erased, vanished.coef, vanished.score, max_drop
		);

		Some(RensaStep {
			nth_chain,
			num_erased: vanished.num_erased,
			num_color_erased: vanished.num_color_erased,
			coef: vanished.coef,
			score: vanished.score,
			max_drop,
		})
	}

	fn vanish<S, T>(&mut self, nth_chain: usize, scorer: &S, tracker: &mut T) -> Option<Vanished>
	where
		S: RensaScorer + ?Sized,
		T: RensaTracker + ?Sized,
	{
		let mut erased = [[false; MAP_HEIGHT]; MAP_WIDTH];
		let mut visited = [[false; MAP_HEIGHT]; MAP_WIDTH];
		let mut group_sizes = [0usize; MAX_GROUPS];
		let mut num_groups = 0;
		let mut used_colors: u32 = 0;

		let mut stack = [(0usize, 0usize); VISIBLE_CELLS];
		let mut group = [(0usize, 0usize); VISIBLE_CELLS];

		let cells = self.cells();
		for x in 1..=WIDTH {
			let top = self.height(x).min(HEIGHT);
			for y in 1..=top {
				let kind = cells[x][y];
				if !kind.is_color() || visited[x][y] {
					continue;
				}

				let group_size = collect_group(cells, x, y, kind, &mut visited, &mut stack, &mut group);
				if group_size < PUYO_ERASE_NUM {
					continue;
				}

				for &(gx, gy) in &group[..group_size] {
					erased[gx][gy] = true;
				}
				group_sizes[num_groups] = group_size;
				num_groups += 1;
				used_colors |= 1 << (kind as u8);
			}
		}

		if num_groups == 0 {
			return None;
		}

		//消える色ぷよに隣接するおじゃま
		for x in 1..=WIDTH {
			for y in 1..=HEIGHT {
				if !erased[x][y] || !cells[x][y].is_color() {
					continue;
				}

				for (nx, ny) in [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)] {
					if ny <= HEIGHT && cells[nx][ny] == PuyoKind::Ojama {
						erased[nx][ny] = true;
					}
				}
			}
		}

		let mut num_erased = 0;
		let mut num_color_erased = 0;
		let cells = self.cells_mut();
		for x in 1..=WIDTH {
			for y in 1..=HEIGHT {
				if !erased[x][y] {
					continue;
				}

				if cells[x][y].is_color() {
					tracker.color_puyo_is_vanished(x, y, nth_chain);
					num_color_erased += 1;
				} else {
					tracker.ojama_puyo_is_vanished(x, y, nth_chain);
				}
				num_erased += 1;
				cells[x][y] = PuyoKind::Empty;
			}
		}

		let coef = scorer.coef(nth_chain, &group_sizes[..num_groups], used_colors.count_ones() as usize);
		let score = scorer.score(num_color_erased, coef);

		Some(Vanished {
			num_erased,
			num_color_erased,
			coef,
			score,
		})
	}

	///落ちた最大段数を返す
	fn drop_after_vanish<T>(&mut self, tracker: &mut T) -> usize
	where
		T: RensaTracker + ?Sized,
	{
		let mut max_drop = 0;

		for x in 1..=WIDTH {
			//消えた後もheightは上限として使える
			let height = self.height(x);
			let cells = self.cells_mut();

			let mut write_y = 1;
			for y in 1..=height {
				let kind = cells[x][y];
				if kind.is_empty() {
					continue;
				}

				if y != write_y {
					cells[x][write_y] = kind;
					cells[x][y] = PuyoKind::Empty;
					tracker.puyo_is_dropped(x, y, write_y);
					max_drop = max_drop.max(y - write_y);
				}
				write_y += 1;
			}

			self.set_height_unchecked(x, write_y - 1);
		}

		max_drop
	}
}

/// Flood fills the 4-connected group of `kind` from `(x, y)` within the visible rows.
/// Members are written to `group`; returns their count.
fn collect_group(
	cells: &[[PuyoKind; MAP_HEIGHT]; MAP_WIDTH],
	x: usize,
	y: usize,
	kind: PuyoKind,
	visited: &mut [[bool; MAP_HEIGHT]; MAP_WIDTH],
	stack: &mut [(usize, usize); VISIBLE_CELLS],
	group: &mut [(usize, usize); VISIBLE_CELLS],
) -> usize {
	let mut stack_len = 0;
	let mut group_len = 0;

	visited[x][y] = true;
	stack[stack_len] = (x, y);
	stack_len += 1;

	while stack_len > 0 {
		stack_len -= 1;
		let (cx, cy) = stack[stack_len];
		group[group_len] = (cx, cy);
		group_len += 1;

		for (nx, ny) in [(cx - 1, cy), (cx + 1, cy), (cx, cy - 1), (cx, cy + 1)] {
			if ny > HEIGHT || visited[nx][ny] || cells[nx][ny] != kind {
				continue;
			}

			visited[nx][ny] = true;
			stack[stack_len] = (nx, ny);
			stack_len += 1;
		}
	}

	group_len
}
