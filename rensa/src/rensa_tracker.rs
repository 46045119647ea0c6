//! Trackers observe how a rensa vanishes: in which chain a puyo vanished, the coefficient of each
//! chain, where vanished puyos came from, and so on. Pass one to `CoreField::simulate_with_tracker`.
//!
//! The simulation calls the hooks in this order for every chain: one vanish hook per erased cell
//! (column by column, bottom to top), one `puyo_is_dropped` per cell moved by gravity (same order),
//! then `nth_chain_done` once.

use crate::field::{MAP_HEIGHT, MAP_WIDTH};
use crate::rensa_result::{RensaChainTrackResult, RensaCoefResult, RensaVanishingPositionResult};

pub trait RensaTracker {
	fn color_puyo_is_vanished(&mut self, x: usize, y: usize, nth_chain: usize);
	fn ojama_puyo_is_vanished(&mut self, x: usize, y: usize, nth_chain: usize);
	fn puyo_is_dropped(&mut self, x: usize, from_y: usize, to_y: usize);
	fn nth_chain_done(&mut self, nth_chain: usize, num_erased_puyo: usize, coef: usize);
}

impl<T: RensaTracker + ?Sized> RensaTracker for &mut T {
	#[inline]
	fn color_puyo_is_vanished(&mut self, x: usize, y: usize, nth_chain: usize) {
		(**self).color_puyo_is_vanished(x, y, nth_chain)
	}
	#[inline]
	fn ojama_puyo_is_vanished(&mut self, x: usize, y: usize, nth_chain: usize) {
		(**self).ojama_puyo_is_vanished(x, y, nth_chain)
	}
	#[inline]
	fn puyo_is_dropped(&mut self, x: usize, from_y: usize, to_y: usize) {
		(**self).puyo_is_dropped(x, from_y, to_y)
	}
	#[inline]
	fn nth_chain_done(&mut self, nth_chain: usize, num_erased_puyo: usize, coef: usize) {
		(**self).nth_chain_done(nth_chain, num_erased_puyo, coef)
	}
}

type YTable = [[usize; MAP_HEIGHT]; MAP_WIDTH];

fn identity_y() -> YTable {
	let mut table = [[0; MAP_HEIGHT]; MAP_WIDTH];
	for column in table.iter_mut() {
		for (y, v) in column.iter_mut().enumerate() {
			*v = y;
		}
	}
	table
}

///何も記録しない
#[derive(Debug, Clone, Copy, Default)]
pub struct RensaNonTracker;

impl RensaTracker for RensaNonTracker {
	#[inline(always)]
	fn color_puyo_is_vanished(&mut self, _x: usize, _y: usize, _nth_chain: usize) {}
	#[inline(always)]
	fn ojama_puyo_is_vanished(&mut self, _x: usize, _y: usize, _nth_chain: usize) {}
	#[inline(always)]
	fn puyo_is_dropped(&mut self, _x: usize, _from_y: usize, _to_y: usize) {}
	#[inline(always)]
	fn nth_chain_done(&mut self, _nth_chain: usize, _num_erased_puyo: usize, _coef: usize) {}
}

/// Tracks in which chain each puyo vanished, keyed by its position before simulation.
#[derive(Debug, Clone)]
pub struct RensaChainTracker {
	original_y: YTable,
	result: RensaChainTrackResult,
}

impl Default for RensaChainTracker {
	fn default() -> Self {
		RensaChainTracker::new()
	}
}

impl RensaChainTracker {
	pub fn new() -> Self {
		RensaChainTracker {
			original_y: identity_y(),
			result: RensaChainTrackResult::default(),
		}
	}

	pub fn result(&self) -> &RensaChainTrackResult {
		&self.result
	}

	pub fn into_result(self) -> RensaChainTrackResult {
		self.result
	}
}

impl RensaTracker for RensaChainTracker {
	#[inline]
	fn color_puyo_is_vanished(&mut self, x: usize, y: usize, nth_chain: usize) {
		self.result.set_erased_at(x, self.original_y[x][y], nth_chain);
	}
	#[inline]
	fn ojama_puyo_is_vanished(&mut self, x: usize, y: usize, nth_chain: usize) {
		self.result.set_erased_at(x, self.original_y[x][y], nth_chain);
	}
	#[inline]
	fn puyo_is_dropped(&mut self, x: usize, from_y: usize, to_y: usize) {
		self.original_y[x][to_y] = self.original_y[x][from_y];
	}
	#[inline]
	fn nth_chain_done(&mut self, _nth_chain: usize, _num_erased_puyo: usize, _coef: usize) {}
}

/// Same as `RensaChainTracker`, but writes into a result owned by the caller.
/// The result must be initialised (e.g. `RensaChainTrackResult::default()`) before the first simulation;
/// reusing it across simulations accumulates their records.
#[derive(Debug)]
pub struct RensaChainPointerTracker<'a> {
	original_y: YTable,
	result: &'a mut RensaChainTrackResult,
}

impl<'a> RensaChainPointerTracker<'a> {
	pub fn new(result: &'a mut RensaChainTrackResult) -> Self {
		RensaChainPointerTracker {
			original_y: identity_y(),
			result,
		}
	}

	pub fn result(&self) -> &RensaChainTrackResult {
		self.result
	}
}

impl RensaTracker for RensaChainPointerTracker<'_> {
	#[inline]
	fn color_puyo_is_vanished(&mut self, x: usize, y: usize, nth_chain: usize) {
		self.result.set_erased_at(x, self.original_y[x][y], nth_chain);
	}
	#[inline]
	fn ojama_puyo_is_vanished(&mut self, x: usize, y: usize, nth_chain: usize) {
		self.result.set_erased_at(x, self.original_y[x][y], nth_chain);
	}
	#[inline]
	fn puyo_is_dropped(&mut self, x: usize, from_y: usize, to_y: usize) {
		self.original_y[x][to_y] = self.original_y[x][from_y];
	}
	#[inline]
	fn nth_chain_done(&mut self, _nth_chain: usize, _num_erased_puyo: usize, _coef: usize) {}
}

#[derive(Debug, Clone, Default)]
pub struct RensaCoefTracker {
	result: RensaCoefResult,
}

impl RensaCoefTracker {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn result(&self) -> &RensaCoefResult {
		&self.result
	}
}

impl RensaTracker for RensaCoefTracker {
	#[inline]
	fn color_puyo_is_vanished(&mut self, _x: usize, _y: usize, _nth_chain: usize) {}
	#[inline]
	fn ojama_puyo_is_vanished(&mut self, _x: usize, _y: usize, _nth_chain: usize) {}
	#[inline]
	fn puyo_is_dropped(&mut self, _x: usize, _from_y: usize, _to_y: usize) {}
	#[inline]
	fn nth_chain_done(&mut self, nth_chain: usize, num_erased_puyo: usize, coef: usize) {
		self.result.set_coef(nth_chain, num_erased_puyo, coef);
	}
}

/// Classifies every vanished color puyo as base (did not move in the previous gravity pass)
/// or falling (moved from `from_y` in the previous gravity pass).
///
/// Each entry of `y_at_prev_rensa` is stamped with the epoch of the gravity pass that wrote it.
/// `nth_chain_done` advances `epoch`, which retires every older entry at once. The epoch never
/// goes back, so a tracker reused for another simulation starts clean.
#[derive(Debug, Clone)]
pub struct RensaVanishingPositionTracker {
	y_at_prev_rensa: YTable,
	written_in: YTable,
	epoch: usize,
	result: RensaVanishingPositionResult,
}

impl Default for RensaVanishingPositionTracker {
	fn default() -> Self {
		RensaVanishingPositionTracker::new()
	}
}

impl RensaVanishingPositionTracker {
	pub fn new() -> Self {
		RensaVanishingPositionTracker {
			y_at_prev_rensa: [[0; MAP_HEIGHT]; MAP_WIDTH],
			written_in: [[0; MAP_HEIGHT]; MAP_WIDTH],
			epoch: 1,
			result: RensaVanishingPositionResult::default(),
		}
	}

	pub fn result(&self) -> &RensaVanishingPositionResult {
		&self.result
	}

	#[inline]
	fn prev_y(&self, x: usize, y: usize, nth_chain: usize) -> usize {
		if nth_chain >= 2 && self.written_in[x][y] == self.epoch - 1 {
			self.y_at_prev_rensa[x][y]
		} else {
			0
		}
	}
}

impl RensaTracker for RensaVanishingPositionTracker {
	fn color_puyo_is_vanished(&mut self, x: usize, y: usize, nth_chain: usize) {
		let prev_y = self.prev_y(x, y, nth_chain);
		if prev_y == 0 {
			self.result.set_base_puyo(x, y, nth_chain);
		} else {
			self.result.set_falling_puyo(x, prev_y, y, nth_chain);
		}
	}
	#[inline]
	fn ojama_puyo_is_vanished(&mut self, _x: usize, _y: usize, _nth_chain: usize) {}
	#[inline]
	fn puyo_is_dropped(&mut self, x: usize, from_y: usize, to_y: usize) {
		self.y_at_prev_rensa[x][to_y] = from_y;
		self.written_in[x][to_y] = self.epoch;
	}
	#[inline]
	fn nth_chain_done(&mut self, _nth_chain: usize, _num_erased_puyo: usize, _coef: usize) {
		self.epoch += 1;
	}
}

/// Keeps, for every cell, the row its puyo occupied before the simulation started.
/// A row left empty by a drop reads as `0`.
#[derive(Debug, Clone)]
pub struct RensaYPositionTracker {
	original_y: YTable,
}

impl Default for RensaYPositionTracker {
	fn default() -> Self {
		RensaYPositionTracker::new()
	}
}

impl RensaYPositionTracker {
	pub fn new() -> Self {
		RensaYPositionTracker {
			original_y: identity_y(),
		}
	}

	#[inline]
	pub fn original_y(&self, x: usize, y: usize) -> usize {
		self.original_y[x][y]
	}
}

impl RensaTracker for RensaYPositionTracker {
	#[inline]
	fn color_puyo_is_vanished(&mut self, _x: usize, _y: usize, _nth_chain: usize) {}
	#[inline]
	fn ojama_puyo_is_vanished(&mut self, _x: usize, _y: usize, _nth_chain: usize) {}
	#[inline]
	fn puyo_is_dropped(&mut self, x: usize, from_y: usize, to_y: usize) {
		debug_assert_ne!(from_y, to_y);
		self.original_y[x][to_y] = self.original_y[x][from_y];
		self.original_y[x][from_y] = 0;
	}
	#[inline]
	fn nth_chain_done(&mut self, _nth_chain: usize, _num_erased_puyo: usize, _coef: usize) {}
}
