#![allow(dead_code)]

use rensa::RensaTracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
	Color(usize, usize, usize),
	Ojama(usize, usize, usize),
	Drop(usize, usize, usize),
	Done(usize, usize, usize),
}

/// Records every hook call in order.
#[derive(Debug, Default)]
pub struct RecordingTracker {
	pub events: Vec<Event>,
}

impl RensaTracker for RecordingTracker {
	fn color_puyo_is_vanished(&mut self, x: usize, y: usize, nth_chain: usize) {
		self.events.push(Event::Color(x, y, nth_chain));
	}
	fn ojama_puyo_is_vanished(&mut self, x: usize, y: usize, nth_chain: usize) {
		self.events.push(Event::Ojama(x, y, nth_chain));
	}
	fn puyo_is_dropped(&mut self, x: usize, from_y: usize, to_y: usize) {
		self.events.push(Event::Drop(x, from_y, to_y));
	}
	fn nth_chain_done(&mut self, nth_chain: usize, num_erased_puyo: usize, coef: usize) {
		self.events.push(Event::Done(nth_chain, num_erased_puyo, coef));
	}
}

impl RecordingTracker {
	pub fn drops(&self) -> Vec<Event> {
		self.events.iter().copied().filter(|e| matches!(e, Event::Drop(..))).collect()
	}
}
