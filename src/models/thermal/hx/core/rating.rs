use std::{fmt, ops::Range};

/// Qualitative band for an exchanger's effectiveness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PerformanceRating {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl PerformanceRating {
    /// Classifies an effectiveness given in percent.
    ///
    /// Thresholds are inclusive lower bounds: 80 and above is excellent,
    /// 60 good, 40 fair, anything else (including `NaN`) poor.
    #[must_use]
    pub fn classify(effectiveness_pct: f64) -> Self {
        if effectiveness_pct >= 80.0 {
            Self::Excellent
        } else if effectiveness_pct >= 60.0 {
            Self::Good
        } else if effectiveness_pct >= 40.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }

    /// Colour token for the gauge needle.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Excellent => "green",
            Self::Good => "limegreen",
            Self::Fair => "orange",
            Self::Poor => "red",
        }
    }

    /// Gauge band covered by this rating, in percent.
    #[must_use]
    pub fn band(self) -> Range<f64> {
        match self {
            Self::Poor => 0.0..40.0,
            Self::Fair => 40.0..60.0,
            Self::Good => 60.0..80.0,
            Self::Excellent => 80.0..100.0,
        }
    }

    /// Background colour of the gauge band.
    #[must_use]
    pub fn band_color(self) -> &'static str {
        match self {
            Self::Poor => "#fee2e2",
            Self::Fair => "#fde68a",
            Self::Good => "#bbf7d0",
            Self::Excellent => "#86efac",
        }
    }
}

impl fmt::Display for PerformanceRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `(label, colour)` for an effectiveness given in percent.
#[must_use]
pub fn classify(effectiveness_pct: f64) -> (&'static str, &'static str) {
    let rating = PerformanceRating::classify(effectiveness_pct);
    (rating.label(), rating.color())
}
