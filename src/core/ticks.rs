use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// Rounding applied to the mean tick of [`ValueTickPolicy::BoundsAndMean`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TickRounding {
    #[default]
    None,
    Floor,
}

/// Chooses which values receive a tick label and grid line on the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ValueTickPolicy {
    /// Ticks at `0`, `mean + mean_offset` (optionally floored) and `max`.
    BoundsAndMean {
        mean_offset: f64,
        rounding: TickRounding,
    },
    /// Round 1/2/5 x 10^k steps covering `[0, max]`.
    Nice { count: usize },
}

impl ValueTickPolicy {
    #[must_use]
    pub const fn bar_default() -> Self {
        Self::BoundsAndMean {
            mean_offset: 1.0,
            rounding: TickRounding::Floor,
        }
    }

    #[must_use]
    pub const fn line_default() -> Self {
        Self::BoundsAndMean {
            mean_offset: 1.0,
            rounding: TickRounding::None,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        match self {
            Self::BoundsAndMean { mean_offset, .. } if !mean_offset.is_finite() => Err(
                ChartError::InvalidData("tick mean offset must be finite".to_owned()),
            ),
            Self::Nice { count } if count == 0 || count > 64 => Err(ChartError::InvalidData(
                "nice tick count must be in 1..=64".to_owned(),
            )),
            _ => Ok(self),
        }
    }

    /// Tick values for a dataset with the given mean and max, ascending.
    #[must_use]
    pub fn select(self, mean: f64, max: f64) -> SmallVec<[f64; 8]> {
        match self {
            Self::BoundsAndMean {
                mean_offset,
                rounding,
            } => {
                let mean_tick = match rounding {
                    TickRounding::None => mean + mean_offset,
                    TickRounding::Floor => (mean + mean_offset).floor(),
                };
                let mut ticks: SmallVec<[f64; 8]> = SmallVec::new();
                ticks.push(0.0);
                ticks.push(mean_tick);
                ticks.push(max);
                ticks.sort_by(f64::total_cmp);
                ticks.dedup();
                ticks
            }
            Self::Nice { count } => nice_ticks(max, count),
        }
    }
}

fn nice_ticks(max: f64, count: usize) -> SmallVec<[f64; 8]> {
    let step = nice_step(max / count.max(1) as f64);
    if step == 0.0 {
        return SmallVec::from_slice(&[0.0, max]);
    }

    let stop = (max / step).floor();
    let mut ticks = SmallVec::new();
    let mut i = 0.0;
    while i <= stop {
        ticks.push(i * step);
        i += 1.0;
    }
    ticks
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let base = 10_f64.powf(step.log10().floor());
    let error = step / base;
    let nice = if error >= 50_f64.sqrt() {
        10.0
    } else if error >= 10_f64.sqrt() {
        5.0
    } else if error >= 2_f64.sqrt() {
        2.0
    } else {
        1.0
    };
    nice * base
}
