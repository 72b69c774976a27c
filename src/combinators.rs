//! Signal combinators usable as calculator operators.
//!
//! Each combinator here implements [`UnaryOperator`] or [`BinaryOperator`]
//! over [`Waveform`], so it can be dropped onto a calculator strip at any
//! tier. Binary combinators work on the overlapping part of their inputs and
//! keep the left operand's sample rate.

use crate::{BinaryOperator, UnaryOperator, Waveform};

/// Adds two signals together (mixing).
///
/// When mixing several signals, follow up with [`Gain`] to avoid clipping.
///
/// # Examples
///
/// ```
/// use sigcalc::{BinaryOperator, Waveform, combinators::Add};
///
/// let a = Waveform::new(44100.0, vec![0.25, 0.5]);
/// let b = Waveform::new(44100.0, vec![0.25, -0.5]);
/// assert_eq!(Add.apply(a, b).samples(), &[0.5, 0.0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Add;

impl BinaryOperator<Waveform> for Add {
    fn apply(&self, left: Waveform, right: Waveform) -> Waveform {
        left.zip_with(&right, |a, b| a + b)
    }
}

/// Subtracts the right signal from the left one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Subtract;

impl BinaryOperator<Waveform> for Subtract {
    fn apply(&self, left: Waveform, right: Waveform) -> Waveform {
        left.zip_with(&right, |a, b| a - b)
    }
}

/// Multiplies two signals together (amplitude modulation / ring modulation).
///
/// When one signal is a slow modulator, this creates tremolo. When both are
/// in the audio range, this creates ring modulation.
///
/// # Examples
///
/// ```
/// use sigcalc::{BinaryOperator, Waveform, combinators::Multiply};
///
/// let carrier = Waveform::new(44100.0, vec![1.0, -1.0, 1.0]);
/// let envelope = Waveform::new(44100.0, vec![0.0, 0.5, 1.0]);
/// assert_eq!(Multiply.apply(carrier, envelope).samples(), &[0.0, -0.5, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Multiply;

impl BinaryOperator<Waveform> for Multiply {
    fn apply(&self, left: Waveform, right: Waveform) -> Waveform {
        left.zip_with(&right, |a, b| a * b)
    }
}

/// Takes the minimum of two signals at each sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct Min;

impl BinaryOperator<Waveform> for Min {
    fn apply(&self, left: Waveform, right: Waveform) -> Waveform {
        left.zip_with(&right, f64::min)
    }
}

/// Takes the maximum of two signals at each sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct Max;

impl BinaryOperator<Waveform> for Max {
    fn apply(&self, left: Waveform, right: Waveform) -> Waveform {
        left.zip_with(&right, f64::max)
    }
}

/// Crossfades between two signals (0.0 = all left, 1.0 = all right).
///
/// The mix is clamped to `[0.0, 1.0]`.
///
/// # Examples
///
/// ```
/// use sigcalc::{BinaryOperator, Waveform, combinators::Crossfade};
///
/// let a = Waveform::constant(44100.0, 1.0, 2);
/// let b = Waveform::constant(44100.0, 3.0, 2);
/// assert_eq!(Crossfade { mix: 0.5 }.apply(a, b).samples(), &[2.0, 2.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Crossfade {
    pub mix: f64,
}

impl BinaryOperator<Waveform> for Crossfade {
    fn apply(&self, left: Waveform, right: Waveform) -> Waveform {
        let mix = self.mix.clamp(0.0, 1.0);
        left.zip_with(&right, |a, b| a * (1.0 - mix) + b * mix)
    }
}

/// Scales a signal by a factor (gain/attenuation).
///
/// Values greater than 1.0 amplify the signal, values between 0.0 and 1.0
/// attenuate it.
#[derive(Debug, Clone, Copy)]
pub struct Gain {
    pub gain: f64,
}

impl UnaryOperator<Waveform> for Gain {
    fn apply(&self, input: Waveform) -> Waveform {
        input.map(|x| x * self.gain)
    }
}

/// Adds a DC offset to a signal.
#[derive(Debug, Clone, Copy)]
pub struct Offset {
    pub offset: f64,
}

impl UnaryOperator<Waveform> for Offset {
    fn apply(&self, input: Waveform) -> Waveform {
        input.map(|x| x + self.offset)
    }
}

/// Inverts/negates a signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Invert;

impl UnaryOperator<Waveform> for Invert {
    fn apply(&self, input: Waveform) -> Waveform {
        input.map(|x| -x)
    }
}

/// Absolute value (full-wave rectification).
#[derive(Debug, Clone, Copy, Default)]
pub struct Abs;

impl UnaryOperator<Waveform> for Abs {
    fn apply(&self, input: Waveform) -> Waveform {
        input.map(f64::abs)
    }
}

/// Clips a signal to a range (hard clipping).
///
/// # Examples
///
/// ```
/// use sigcalc::{UnaryOperator, Waveform, combinators::Clamp};
///
/// let w = Waveform::new(44100.0, vec![-2.0, 0.2, 2.0]);
/// let clipped = Clamp { min: -0.5, max: 0.5 }.apply(w);
/// assert_eq!(clipped.samples(), &[-0.5, 0.2, 0.5]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Clamp {
    pub min: f64,
    pub max: f64,
}

impl UnaryOperator<Waveform> for Clamp {
    fn apply(&self, input: Waveform) -> Waveform {
        input.map(|x| x.clamp(self.min, self.max))
    }
}

/// Silences samples whose magnitude does not exceed a threshold (noise gate).
#[derive(Debug, Clone, Copy)]
pub struct Gate {
    pub threshold: f64,
}

impl UnaryOperator<Waveform> for Gate {
    fn apply(&self, input: Waveform) -> Waveform {
        input.map(|x| if x.abs() > self.threshold { x } else { 0.0 })
    }
}

/// Applies a function to each sample.
///
/// # Examples
///
/// ```
/// use sigcalc::{UnaryOperator, Waveform, combinators::Map};
///
/// let cube = Map { func: |x: f64| x * x * x };
/// let w = Waveform::new(44100.0, vec![2.0, -1.0]);
/// assert_eq!(cube.apply(w).samples(), &[8.0, -1.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Map<F>
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    pub func: F,
}

impl<F> UnaryOperator<Waveform> for Map<F>
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn apply(&self, input: Waveform) -> Waveform {
        input.map(&self.func)
    }
}
