use rand::Rng;

use crate::field::{CoreField, HEIGHT, WIDTH};
use crate::puyo_kind::{PuyoKind, COLOR_PUYOS};

/// Fills every column from the floor with a random number of random puyos, so the field is stable.
/// `ojama_rate` is the probability (0.0..=1.0) that a cell is ojama instead of a color.
pub fn random_field<R: Rng + ?Sized>(rng: &mut R, num_colors: usize, ojama_rate: f64) -> CoreField {
	assert!((1..=COLOR_PUYOS.len()).contains(&num_colors), "num_colors must be 1..={}", COLOR_PUYOS.len());

	let mut field = CoreField::new();
	for x in 1..=WIDTH {
		let height = rng.gen_range(0..=HEIGHT);
		for _ in 0..height {
			let kind = if rng.gen_bool(ojama_rate) {
				PuyoKind::Ojama
			} else {
				COLOR_PUYOS[rng.gen_range(0..num_colors)]
			};
			field.drop_puyo_on(x, kind);
		}
	}

	field
}
