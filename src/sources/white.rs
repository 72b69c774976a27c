//! White noise source.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{SignalProducer, Waveform};

/// A white noise source.
///
/// White noise has equal power across all frequencies. Each sample is a
/// random value uniformly distributed between -1.0 and 1.0, and every call
/// to [`current_value`](SignalProducer::current_value) draws a fresh block.
pub struct WhiteNoise<R: Rng = StdRng> {
    /// Sample rate in Hz
    sample_rate: f64,
    /// Samples per block
    len: usize,
    /// Random number generator
    rng: Mutex<R>,
}

impl WhiteNoise<StdRng> {
    /// Creates a white noise source seeded from the operating system.
    ///
    /// # Arguments
    ///
    /// * `sample_rate` - Sample rate in Hz (e.g., 44100.0 for CD quality)
    /// * `len` - Number of samples in each block
    ///
    /// # Examples
    ///
    /// ```
    /// use sigcalc::{SignalProducer, WhiteNoise};
    ///
    /// let noise = WhiteNoise::new(44100.0, 64);
    /// assert_eq!(noise.current_value().len(), 64);
    /// ```
    pub fn new(sample_rate: f64, len: usize) -> Self {
        Self::with_rng(sample_rate, len, StdRng::from_entropy())
    }
}

impl<R: Rng> WhiteNoise<R> {
    /// Creates a white noise source with a custom RNG.
    ///
    /// # Examples
    ///
    /// ```
    /// use sigcalc::{SignalProducer, WhiteNoise};
    /// use rand::SeedableRng;
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let noise = WhiteNoise::with_rng(44100.0, 16, rng);
    /// let block = noise.current_value();
    /// ```
    pub fn with_rng(sample_rate: f64, len: usize, rng: R) -> Self {
        Self {
            sample_rate,
            len,
            rng: Mutex::new(rng),
        }
    }
}

impl<R: Rng + Send> SignalProducer<Waveform> for WhiteNoise<R> {
    fn current_value(&self) -> Waveform {
        let mut rng = self.rng.lock();
        let samples: Vec<f64> = (0..self.len).map(|_| rng.gen_range(-1.0..=1.0)).collect();
        Waveform::new(self.sample_rate, samples)
    }
}
