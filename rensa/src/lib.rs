pub mod puyo_kind;
pub mod position;
pub mod field;
pub mod pattern_field;
pub mod rensa_result;
pub mod rensa_tracker;
pub mod score;
pub mod rensa;
pub mod random;

pub use field::CoreField;
pub use pattern_field::PatternField;
pub use puyo_kind::PuyoKind;
pub use rensa::RensaStep;
pub use rensa_result::{RensaChainTrackResult, RensaCoefResult, RensaResult, RensaVanishingPositionResult};
pub use rensa_tracker::{
	RensaChainPointerTracker, RensaChainTracker, RensaCoefTracker, RensaNonTracker, RensaTracker,
	RensaVanishingPositionTracker, RensaYPositionTracker,
};
pub use score::{RensaScorer, StandardScorer};
