//! Sampled signal type used by the built-in operators and sources.

use std::sync::Arc;

/// A finite, immutable run of samples at a fixed sample rate.
///
/// Cloning a waveform shares its samples. Every transformation builds a new
/// sample buffer, so a waveform held by one part of an expression can never
/// change because another part operated on it.
///
/// # Examples
///
/// ```
/// use sigcalc::Waveform;
///
/// let w = Waveform::new(44100.0, vec![0.0, 0.5, 1.0]);
/// assert_eq!(w.len(), 3);
/// assert_eq!(w.sample_rate(), 44100.0);
/// assert_eq!(w.map(|x| x * 2.0).samples(), &[0.0, 1.0, 2.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    sample_rate: f64,
    samples: Arc<[f64]>,
}

impl Waveform {
    /// Creates a waveform from samples.
    ///
    /// # Arguments
    ///
    /// * `sample_rate` - Sample rate in Hz
    /// * `samples` - Sample values, typically between -1.0 and 1.0
    pub fn new(sample_rate: f64, samples: impl Into<Arc<[f64]>>) -> Self {
        Self {
            sample_rate,
            samples: samples.into(),
        }
    }

    /// A waveform holding `len` copies of `value`.
    pub fn constant(sample_rate: f64, value: f64, len: usize) -> Self {
        Self::new(sample_rate, vec![value; len])
    }

    /// A waveform of `len` zero samples.
    pub fn silence(sample_rate: f64, len: usize) -> Self {
        Self::constant(sample_rate, 0.0, len)
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Applies `f` to every sample.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Waveform {
        Self::new(self.sample_rate, self.samples.iter().map(|&s| f(s)).collect::<Vec<_>>())
    }

    /// Combines two waveforms sample by sample.
    ///
    /// The result has the sample rate of `self` and the length of the
    /// shorter input.
    pub fn zip_with(&self, other: &Waveform, f: impl Fn(f64, f64) -> f64) -> Waveform {
        let samples: Vec<f64> = self
            .samples
            .iter()
            .zip(other.samples.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Self::new(self.sample_rate, samples)
    }
}
