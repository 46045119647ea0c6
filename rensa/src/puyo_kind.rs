use strum::{Display, EnumIter};

pub const COLOR_PUYOS: [PuyoKind; 5] = [PuyoKind::Red, PuyoKind::Blue, PuyoKind::Yellow, PuyoKind::Green, PuyoKind::Purple];

#[repr(u8)]
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone, Default, EnumIter, Display)]
pub enum PuyoKind {
	#[default]
	Empty = 0,
	Ojama = 1,
	Wall = 2,
	Red = 4,
	Blue = 5,
	Yellow = 6,
	Green = 7,
	Purple = 8,
}


impl PuyoKind {
	#[inline]
	pub fn is_color(&self) -> bool {
		(*self as u8) >= PuyoKind::Red as u8
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		*self == PuyoKind::Empty
	}

	///パターン文字からの変換、未知の文字はNone
	pub fn from_char(c: char) -> Option<PuyoKind> {
		match c {
			'.' | 'E' | ' ' => Some(PuyoKind::Empty),
			'O' => Some(PuyoKind::Ojama),
			'W' => Some(PuyoKind::Wall),
			'R' => Some(PuyoKind::Red),
			'B' => Some(PuyoKind::Blue),
			'Y' => Some(PuyoKind::Yellow),
			'G' => Some(PuyoKind::Green),
			'P' => Some(PuyoKind::Purple),
			_ => None
		}
	}

	pub fn to_char(&self) -> char {
		match self {
			PuyoKind::Empty => '.',
			PuyoKind::Ojama => 'O',
			PuyoKind::Wall => 'W',
			PuyoKind::Red => 'R',
			PuyoKind::Blue => 'B',
			PuyoKind::Yellow => 'Y',
			PuyoKind::Green => 'G',
			PuyoKind::Purple => 'P',
		}
	}
}
