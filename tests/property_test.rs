mod common;

use common::{Event, RecordingTracker};
use proptest::prelude::*;
use rensa::field::{PLAYABLE_HEIGHT, WIDTH};
use rensa::puyo_kind::COLOR_PUYOS;
use rensa::{
	CoreField, PuyoKind, RensaChainTracker, RensaCoefTracker, RensaNonTracker, RensaYPositionTracker,
};

///0..4は色、4はおじゃま
fn field_from_columns(columns: &[Vec<u8>]) -> CoreField {
	let mut field = CoreField::new();
	for (i, column) in columns.iter().enumerate() {
		for &code in column {
			let kind = match code {
				4 => PuyoKind::Ojama,
				c => COLOR_PUYOS[c as usize],
			};
			field.drop_puyo_on(i + 1, kind);
		}
	}
	field
}

fn arb_field() -> impl Strategy<Value = CoreField> {
	prop::collection::vec(prop::collection::vec(0u8..5, 0..=PLAYABLE_HEIGHT - 1), WIDTH)
		.prop_map(|columns| field_from_columns(&columns))
}

proptest! {
	#[test]
	fn rensa_keeps_field_invariants(field in arb_field()) {
		let before = field.count_puyos();
		let mut field = field;
		let mut tracker = RecordingTracker::default();

		let result = field.simulate_with_tracker(&mut tracker);

		prop_assert!(result.chains <= before / 4);
		prop_assert!(field.is_stable());

		//消えた数 = 各連鎖のvanishイベント数
		let mut vanished_in_step = 0;
		let mut total_erased = 0;
		let mut steps = 0;
		for event in &tracker.events {
			match *event {
				Event::Color(..) | Event::Ojama(..) => vanished_in_step += 1,
				Event::Drop(..) => {}
				Event::Done(nth_chain, num_erased, coef) => {
					steps += 1;
					prop_assert_eq!(nth_chain, steps);
					prop_assert_eq!(vanished_in_step, num_erased);
					prop_assert!(coef >= 1);
					total_erased += num_erased;
					vanished_in_step = 0;
				}
			}
		}
		prop_assert_eq!(vanished_in_step, 0);
		prop_assert_eq!(steps, result.chains);
		prop_assert_eq!(before - field.count_puyos(), total_erased);
		prop_assert_eq!(result.chains == 0, result.score == 0);
	}

	#[test]
	fn drops_move_down_in_column_order(field in arb_field()) {
		let mut field = field;
		let mut tracker = RecordingTracker::default();

		field.simulate_with_tracker(&mut tracker);

		let mut previous: Option<(usize, usize)> = None;
		for event in &tracker.events {
			match *event {
				Event::Drop(x, from_y, to_y) => {
					prop_assert!(from_y > to_y);
					if let Some(prev) = previous {
						prop_assert!(prev < (x, from_y));
					}
					previous = Some((x, from_y));
				}
				Event::Done(..) => previous = None,
				_ => {}
			}
		}
	}

	#[test]
	fn trackers_do_not_change_the_result(field in arb_field()) {
		let plain = field.clone().simulate_with_tracker(&mut RensaNonTracker);

		let mut coef_tracker = RensaCoefTracker::new();
		let with_coef = field.clone().simulate_with_tracker(&mut coef_tracker);
		prop_assert_eq!(plain, with_coef);
		prop_assert_eq!(coef_tracker.result().chains(), plain.chains);

		let mut chain_tracker = RensaChainTracker::new();
		let mut tracked = field.clone();
		let with_chain = tracked.simulate_with_tracker(&mut chain_tracker);
		prop_assert_eq!(plain, with_chain);

		let result = chain_tracker.result();
		prop_assert_eq!(result.max_chain(), plain.chains);
		let erased_cells = (1..=WIDTH)
			.flat_map(|x| (1..=PLAYABLE_HEIGHT).map(move |y| (x, y)))
			.filter(|&(x, y)| result.is_erased(x, y))
			.count();
		prop_assert_eq!(erased_cells, field.count_puyos() - tracked.count_puyos());
	}

	#[test]
	fn survivors_map_back_to_their_original_rows(field in arb_field()) {
		let original = field.clone();
		let mut field = field;
		let mut tracker = RensaYPositionTracker::new();

		field.simulate_with_tracker(&mut tracker);

		for x in 1..=WIDTH {
			for y in 1..=field.height(x) {
				let from = tracker.original_y(x, y);
				prop_assert!(from >= y);
				prop_assert_eq!(original.get(x, from), field.get(x, y));
			}
		}
	}
}
