use std::io::{stdout, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};

use rensa::field::{CoreField, MAP_WIDTH, PLAYABLE_HEIGHT};
use rensa::puyo_kind::PuyoKind;
use rensa::rensa_result::RensaChainTrackResult;

pub struct Console {}

impl Console {
	pub fn print_field(field: &CoreField) -> std::io::Result<()> {
		let mut stdout = stdout();
		Self::write_field(&mut stdout, field, None)?;
		stdout.flush()
	}

	///消えたぷよに何連鎖目で消えたかを重ねて表示
	pub fn print_chain_track(field: &CoreField, track: &RensaChainTrackResult) -> std::io::Result<()> {
		let mut stdout = stdout();
		Self::write_field(&mut stdout, field, Some(track))?;
		stdout.flush()
	}

	/// Writes the field with walls, top row first, two columns per cell.
	pub fn write_field<W: Write>(out: &mut W, field: &CoreField, track: Option<&RensaChainTrackResult>) -> std::io::Result<()> {
		for y in (0..=PLAYABLE_HEIGHT).rev() {
			for x in 0..MAP_WIDTH {
				let kind = field.get(x, y);
				let label = match track.map(|t| t.erased_at(x, y)) {
					Some(n) if n > 0 => format!("{:>2}", n),
					_ => "  ".to_owned(),
				};

				queue!(
					out,
					SetBackgroundColor(Self::get_color(&kind)),
					SetForegroundColor(Color::Black),
					Print(label),
				)?;
			}

			queue!(out, ResetColor, Print("\n"))?;
		}

		Ok(())
	}

	fn get_color(puyo_kind: &PuyoKind) -> Color {
		match puyo_kind {
			PuyoKind::Empty => Color::White,
			PuyoKind::Blue => Color::Blue,
			PuyoKind::Red => Color::Red,
			PuyoKind::Green => Color::Green,
			PuyoKind::Purple => Color::Rgb { r: 128, g: 0, b: 128 },
			PuyoKind::Yellow => Color::Yellow,
			PuyoKind::Ojama => Color::Grey,
			PuyoKind::Wall => Color::DarkBlue,
		}
	}
}
