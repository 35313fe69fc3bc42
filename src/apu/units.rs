//! Sequencer building blocks shared between the sound channels.

mod divider;
mod envelope;
mod frame;
mod lencounter;
mod sweep;

pub use divider::Divider;
pub use envelope::Envelope;
pub use frame::{FrameCounter, Step};
pub use lencounter::LengthCounter;
pub use sweep::Sweep;
