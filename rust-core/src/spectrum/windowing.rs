//! Window functions applied before the FFT
//!
//! The default rectangular window leaves samples untouched.

use serde::Deserialize;
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowFunction {
    /// No tapering
    #[default]
    Rectangular,

    /// w[n] = 0.5 - 0.5*cos(2πn/(M-1))
    Hann,

    /// w[n] = 0.54 - 0.46*cos(2πn/(M-1))
    Hamming,

    /// w[n] = 0.42 - 0.5*cos(2πn/(M-1)) + 0.08*cos(4πn/(M-1))
    Blackman,
}

impl WindowFunction {
    /// Window coefficients w[n] for n = 0..length
    pub fn coefficients(&self, length: usize) -> Vec<f64> {
        if length <= 1 || *self == WindowFunction::Rectangular {
            return vec![1.0; length];
        }

        let m = (length - 1) as f64;
        (0..length)
            .map(|n| {
                let angle = 2.0 * PI * n as f64 / m;
                match self {
                    WindowFunction::Hann => 0.5 - 0.5 * angle.cos(),
                    WindowFunction::Hamming => 0.54 - 0.46 * angle.cos(),
                    WindowFunction::Blackman => {
                        0.42 - 0.5 * angle.cos() + 0.08 * (2.0 * angle).cos()
                    }
                    WindowFunction::Rectangular => 1.0,
                }
            })
            .collect()
    }

    /// Apply window in-place
    pub fn apply(&self, signal: &mut [f64]) {
        if *self == WindowFunction::Rectangular {
            return;
        }
        let window = self.coefficients(signal.len());
        for (s, w) in signal.iter_mut().zip(window.iter()) {
            *s *= w;
        }
    }

    /// Amplitude correction factor (length / Σw)
    ///
    /// Multiply FFT magnitudes by this to undo the window's attenuation.
    pub fn amplitude_correction(&self, length: usize) -> f64 {
        if length == 0 || *self == WindowFunction::Rectangular {
            return 1.0;
        }
        let sum: f64 = self.coefficients(length).iter().sum();
        if sum > 0.0 {
            length as f64 / sum
        } else {
            1.0
        }
    }
}
