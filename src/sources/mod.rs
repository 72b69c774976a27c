//! Operand sources producing waveforms on demand.

mod constant;
#[cfg(feature = "noise")]
mod white;

pub use constant::{ConstantSource, WaveformSource};
#[cfg(feature = "noise")]
pub use white::WhiteNoise;
