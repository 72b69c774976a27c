//! Fixed and replaceable waveform sources.

use parking_lot::RwLock;

use crate::{SignalProducer, Waveform};

/// A source that always returns the same constant waveform.
///
/// # Examples
///
/// ```
/// use sigcalc::{ConstantSource, SignalProducer};
///
/// let dc = ConstantSource::new(44100.0, 0.5, 4);
/// assert_eq!(dc.current_value().samples(), &[0.5; 4]);
/// ```
#[derive(Debug, Clone)]
pub struct ConstantSource {
    waveform: Waveform,
}

impl ConstantSource {
    pub fn new(sample_rate: f64, value: f64, len: usize) -> Self {
        Self {
            waveform: Waveform::constant(sample_rate, value, len),
        }
    }

    pub fn value(&self) -> f64 {
        self.waveform.samples().first().copied().unwrap_or(0.0)
    }
}

impl SignalProducer<Waveform> for ConstantSource {
    fn current_value(&self) -> Waveform {
        self.waveform.clone()
    }
}

/// A source holding a waveform that its owner can swap out.
///
/// This models an upstream generator whose output changes between
/// evaluations: a compiled expression reading from it sees the new
/// waveform the next time it is evaluated.
///
/// # Examples
///
/// ```
/// use sigcalc::{SignalProducer, Waveform, WaveformSource};
///
/// let source = WaveformSource::new(Waveform::silence(44100.0, 2));
/// source.replace(Waveform::constant(44100.0, 1.0, 2));
/// assert_eq!(source.current_value().samples(), &[1.0, 1.0]);
/// ```
#[derive(Debug)]
pub struct WaveformSource {
    current: RwLock<Waveform>,
}

impl WaveformSource {
    pub fn new(waveform: Waveform) -> Self {
        Self {
            current: RwLock::new(waveform),
        }
    }

    /// Replaces the held waveform, returning the previous one.
    pub fn replace(&self, waveform: Waveform) -> Waveform {
        std::mem::replace(&mut *self.current.write(), waveform)
    }
}

impl SignalProducer<Waveform> for WaveformSource {
    fn current_value(&self) -> Waveform {
        self.current.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_source() {
        let source = ConstantSource::new(8000.0, -0.25, 3);
        assert_eq!(source.value(), -0.25);
        assert_eq!(source.current_value().samples(), &[-0.25; 3]);
        assert_eq!(source.current_value().sample_rate(), 8000.0);
    }

    #[test]
    fn test_waveform_source_replace() {
        let source = WaveformSource::new(Waveform::new(8000.0, vec![1.0]));
        let old = source.replace(Waveform::new(8000.0, vec![2.0]));
        assert_eq!(old.samples(), &[1.0]);
        assert_eq!(source.current_value().samples(), &[2.0]);
    }
}
