#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
	pub x: usize,
	pub y: usize,
}

impl Position {
	pub fn new(x: usize, y: usize) -> Position {
		Position {
			x,
			y,
		}
	}
}

///連鎖中に落下してから消えたぷよ。from_yは直前の連鎖での位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FallingPuyo {
	pub x: usize,
	pub from_y: usize,
	pub to_y: usize,
}
