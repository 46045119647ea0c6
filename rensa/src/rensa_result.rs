use crate::field::{HEIGHT, MAP_HEIGHT, MAP_WIDTH, PLAYABLE_HEIGHT, PUYO_ERASE_NUM, WIDTH};
use crate::position::{FallingPuyo, Position};

///1回のシミュレーションで起こりうる最大連鎖数+1
pub const MAX_CHAIN: usize = WIDTH * PLAYABLE_HEIGHT / PUYO_ERASE_NUM + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RensaResult {
	pub chains: usize,
	pub score: usize,
	pub frames: usize,
	///最後の連鎖で何も落ちなかった
	pub quick: bool,
}

impl RensaResult {
	pub fn new(chains: usize, score: usize, frames: usize, quick: bool) -> Self {
		RensaResult {
			chains,
			score,
			frames,
			quick,
		}
	}
}

/// For every erased puyo, the chain that erased it, stored at its position in the field before simulation.
/// `0` means the puyo was never erased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RensaChainTrackResult {
	erased_at: [[usize; MAP_HEIGHT]; MAP_WIDTH],
}

impl Default for RensaChainTrackResult {
	fn default() -> Self {
		RensaChainTrackResult {
			erased_at: [[0; MAP_HEIGHT]; MAP_WIDTH],
		}
	}
}

impl RensaChainTrackResult {
	pub fn new() -> Self {
		Self::default()
	}

	#[inline]
	pub fn set_erased_at(&mut self, x: usize, y: usize, nth_chain: usize) {
		self.erased_at[x][y] = nth_chain;
	}

	#[inline]
	pub fn erased_at(&self, x: usize, y: usize) -> usize {
		self.erased_at[x][y]
	}

	#[inline]
	pub fn is_erased(&self, x: usize, y: usize) -> bool {
		self.erased_at[x][y] != 0
	}

	pub fn max_chain(&self) -> usize {
		self.erased_at.iter().flat_map(|column| column.iter()).copied().max().unwrap_or(0)
	}

	/// Rows `PLAYABLE_HEIGHT..=1`; each cell is the chain number in base 36, `.` when never erased.
	pub fn to_rows(&self) -> Vec<String> {
		(1..=PLAYABLE_HEIGHT)
			.rev()
			.map(|y| {
				(1..=WIDTH)
					.map(|x| match self.erased_at[x][y] {
						0 => '.',
						n => std::char::from_digit(n as u32, 36).unwrap_or('+'),
					})
					.collect()
			})
			.collect()
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RensaCoefResult {
	chains: usize,
	num_erased: [usize; MAX_CHAIN],
	coef: [usize; MAX_CHAIN],
}

impl Default for RensaCoefResult {
	fn default() -> Self {
		RensaCoefResult {
			chains: 0,
			num_erased: [0; MAX_CHAIN],
			coef: [0; MAX_CHAIN],
		}
	}
}

impl RensaCoefResult {
	pub fn set_coef(&mut self, nth_chain: usize, num_erased: usize, coef: usize) {
		debug_assert!(nth_chain >= 1 && nth_chain < MAX_CHAIN, "nth_chain out of range: {}", nth_chain);
		self.num_erased[nth_chain] = num_erased;
		self.coef[nth_chain] = coef;
		self.chains = self.chains.max(nth_chain);
	}

	pub fn chains(&self) -> usize {
		self.chains
	}

	pub fn num_erased(&self, nth_chain: usize) -> usize {
		self.num_erased[nth_chain]
	}

	pub fn coef(&self, nth_chain: usize) -> usize {
		self.coef[nth_chain]
	}
}

///1連鎖で消える色ぷよの最大数
const MAX_VANISHED_PER_CHAIN: usize = WIDTH * HEIGHT;

/// Per chain, which erased puyos stayed put since the previous gravity pass (base)
/// and which had just fallen (falling). Fixed capacity, nothing is allocated while tracking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RensaVanishingPositionResult {
	base_puyos: [[Position; MAX_VANISHED_PER_CHAIN]; MAX_CHAIN],
	num_base_puyos: [usize; MAX_CHAIN],
	falling_puyos: [[FallingPuyo; MAX_VANISHED_PER_CHAIN]; MAX_CHAIN],
	num_falling_puyos: [usize; MAX_CHAIN],
	size: usize,
}

impl Default for RensaVanishingPositionResult {
	fn default() -> Self {
		RensaVanishingPositionResult {
			base_puyos: [[Position::default(); MAX_VANISHED_PER_CHAIN]; MAX_CHAIN],
			num_base_puyos: [0; MAX_CHAIN],
			falling_puyos: [[FallingPuyo::default(); MAX_VANISHED_PER_CHAIN]; MAX_CHAIN],
			num_falling_puyos: [0; MAX_CHAIN],
			size: 0,
		}
	}
}

impl RensaVanishingPositionResult {
	pub fn set_base_puyo(&mut self, x: usize, y: usize, nth_chain: usize) {
		debug_assert!(nth_chain >= 1 && nth_chain < MAX_CHAIN, "nth_chain out of range: {}", nth_chain);
		let n = self.num_base_puyos[nth_chain];
		self.base_puyos[nth_chain][n] = Position::new(x, y);
		self.num_base_puyos[nth_chain] = n + 1;
		self.size = self.size.max(nth_chain);
	}

	pub fn set_falling_puyo(&mut self, x: usize, from_y: usize, to_y: usize, nth_chain: usize) {
		debug_assert!(nth_chain >= 1 && nth_chain < MAX_CHAIN, "nth_chain out of range: {}", nth_chain);
		let n = self.num_falling_puyos[nth_chain];
		self.falling_puyos[nth_chain][n] = FallingPuyo { x, from_y, to_y };
		self.num_falling_puyos[nth_chain] = n + 1;
		self.size = self.size.max(nth_chain);
	}

	///記録がある最大の連鎖数
	pub fn size(&self) -> usize {
		self.size
	}

	pub fn base_puyos_at(&self, nth_chain: usize) -> &[Position] {
		if nth_chain >= MAX_CHAIN {
			return &[];
		}
		&self.base_puyos[nth_chain][..self.num_base_puyos[nth_chain]]
	}

	pub fn falling_puyos_at(&self, nth_chain: usize) -> &[FallingPuyo] {
		if nth_chain >= MAX_CHAIN {
			return &[];
		}
		&self.falling_puyos[nth_chain][..self.num_falling_puyos[nth_chain]]
	}
}
