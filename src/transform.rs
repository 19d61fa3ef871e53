//! Transform helper for coordinate projection

use eyre::{ensure, Result};
use serde::{Deserialize, Serialize};

/// Linear data -> pixel mapping in coefficient form: `pixel = value * m + c`.
///
/// This is the only shape of pixel space the core ever sees; the caller
/// derives the coefficients from whatever scale stack it renders with.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearTransform {
    m: f64,
    c: f64,
}

impl LinearTransform {
    pub const IDENTITY: Self = Self { m: 1.0, c: 0.0 };

    pub const fn from_coefficients(m: f64, c: f64) -> Self {
        Self { m, c }
    }

    /// Maps `domain.0` to `range.0` and `domain.1` to `range.1`.
    /// A collapsed domain is widened by 0.5 on each side to keep the
    /// slope finite.
    pub fn from_domain_range(domain: (f64, f64), range: (f64, f64)) -> Result<Self> {
        ensure!(
            domain.0.is_finite() && domain.1.is_finite(),
            "non-finite domain ({}, {})",
            domain.0,
            domain.1
        );
        ensure!(
            range.0.is_finite() && range.1.is_finite(),
            "non-finite range ({}, {})",
            range.0,
            range.1
        );
        let (mut d_min, mut d_max) = domain;
        if (d_max - d_min).abs() < f64::EPSILON {
            d_min -= 0.5;
            d_max += 0.5;
        }
        let m = (range.1 - range.0) / (d_max - d_min);
        let c = range.0 - m * d_min;
        Ok(Self { m, c })
    }

    pub fn map(&self, value: f64) -> f64 {
        let res = value * self.m + self.c;
        if res.is_nan() || res.is_infinite() {
            0.0
        } else {
            res
        }
    }

    pub fn invert(&self, pixel: f64) -> f64 {
        if self.m == 0.0 {
            return 0.0;
        }
        (pixel - self.c) / self.m
    }

    /// Returns (m, c) such that `pixel = value * m + c`.
    pub fn coefficients(&self) -> (f64, f64) {
        (self.m, self.c)
    }
}
