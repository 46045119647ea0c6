use crate::field::PUYO_ERASE_NUM;

/// Scoring rule injected into the simulation.
pub trait RensaScorer {
	/// `group_sizes` holds the size of every group erased in this chain, `num_colors` the number of distinct colors.
	fn coef(&self, nth_chain: usize, group_sizes: &[usize], num_colors: usize) -> usize;

	fn score(&self, num_color_erased: usize, coef: usize) -> usize {
		10 * num_color_erased * coef
	}
}

impl<F> RensaScorer for F
where
	F: Fn(usize, &[usize], usize) -> usize,
{
	fn coef(&self, nth_chain: usize, group_sizes: &[usize], num_colors: usize) -> usize {
		self(nth_chain, group_sizes, num_colors)
	}
}

///通常ルールの得点表
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScorer;

impl StandardScorer {
	#[inline]
	pub fn chain_bonus(nth_chain: usize) -> usize {
		match nth_chain {
			0 => panic!("nth_chain starts from 1"),
			1 => 0,
			2 => 8,
			3 => 16,
			4 => 32,
			5 => 64,
			6 => 96,
			7 => 128,
			//8以降
			_ => 128 + (nth_chain - 7) * 32
		}
	}

	#[inline]
	pub fn link_bonus(group_size: usize) -> usize {
		match group_size {
			0..=PUYO_ERASE_NUM => 0,
			5 => 2,
			6 => 3,
			7 => 4,
			8 => 5,
			9 => 6,
			10 => 7,
			_ => 10
		}
	}

	#[inline]
	pub fn color_bonus(num_colors: usize) -> usize {
		match num_colors {
			0 | 1 => 0,
			2 => 3,
			3 => 6,
			4 => 12,
			_ => 24
		}
	}
}

impl RensaScorer for StandardScorer {
	fn coef(&self, nth_chain: usize, group_sizes: &[usize], num_colors: usize) -> usize {
		let link: usize = group_sizes.iter().map(|&size| Self::link_bonus(size)).sum();
		let bonus = Self::chain_bonus(nth_chain) + link + Self::color_bonus(num_colors);
		bonus.max(1)
	}
}
