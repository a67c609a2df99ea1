// File: crates/plot-core/src/axis.rs
// Summary: Axis model with labels, ranges and tick placement.

use crate::grid::{format_tick, nice_step, nice_ticks, tick_decimals};

/// Upper bound on the number of tick intervals per axis.
pub const TICK_TARGET: usize = 9;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self {
        Self::new("X", 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new("Y", 0.0, 1.0)
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    /// Expand both ends by `fraction` of the span (0.05 adds 5% each side).
    pub fn with_margin(mut self, fraction: f64) -> Self {
        let pad = self.span().abs() * fraction.max(0.0);
        self.min -= pad;
        self.max += pad;
        self
    }

    /// Major tick positions inside the axis range.
    pub fn ticks(&self) -> Vec<f64> {
        nice_ticks(self.min, self.max, TICK_TARGET)
    }

    /// Major ticks paired with their labels, all printed with the same precision.
    pub fn tick_labels(&self) -> Vec<(f64, String)> {
        let decimals = tick_decimals(nice_step(self.span().abs(), TICK_TARGET));
        self.ticks()
            .into_iter()
            .map(|t| (t, format_tick(t, decimals)))
            .collect()
    }
}
