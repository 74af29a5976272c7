use itertools::Itertools;
use serde::{Deserialize, Serialize};
use simple_error::SimpleError;

pub const DEFAULT_ISI_BIN_WIDTH: usize = 2;
pub const DEFAULT_ISI_MAX: usize = 100;

/// Differences between consecutive spike steps.
pub fn inter_spike_intervals(spike_ts: &[usize]) -> Vec<usize> {
    spike_ts
        .iter()
        .tuple_windows()
        .map(|(earlier, later)| later - earlier)
        .collect()
}

pub fn mean(values: &[usize]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<usize>() as f64 / values.len() as f64)
    }
}

/// Fixed-width histogram of inter-spike intervals over `[0, max]`. An interval equal to `max`
/// falls into the last bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsiHistogram {
    pub bin_width: usize,
    pub counts: Vec<usize>,
    /// Intervals beyond `max`.
    pub num_dropped: usize,
}

impl IsiHistogram {
    pub fn build(intervals: &[usize], bin_width: usize, max: usize) -> Result<Self, SimpleError> {
        if bin_width == 0 {
            return Err(SimpleError::new("bin_width must be strictly positive"));
        }

        Ok(Self::fill(intervals, bin_width, max))
    }

    pub fn with_default_layout(intervals: &[usize]) -> Self {
        Self::fill(intervals, DEFAULT_ISI_BIN_WIDTH, DEFAULT_ISI_MAX)
    }

    fn fill(intervals: &[usize], bin_width: usize, max: usize) -> Self {
        let num_bins = (max + bin_width - 1) / bin_width;
        let mut counts = vec![0; num_bins];
        let mut num_dropped = 0;

        for &interval in intervals {
            if interval < max {
                counts[interval / bin_width] += 1;
            } else if interval == max && num_bins > 0 {
                counts[num_bins - 1] += 1;
            } else {
                num_dropped += 1;
            }
        }

        Self {
            bin_width,
            counts,
            num_dropped,
        }
    }

    /// Lower edge of every bin.
    pub fn bin_starts(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.counts.len()).map(move |bin| bin * self.bin_width)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum::<usize>() + self.num_dropped
    }
}

#[cfg(test)]
pub mod test_util {
    use float_cmp::{assert_approx_eq, ApproxEq};
    use std::fmt::Debug;

    pub fn assert_approx_eq_slice<T>(left: &[T], right: &[T])
    where
        T: ApproxEq + Debug + Copy,
    {
        assert_eq!(left.len(), right.len());

        for item in left.iter().zip(right) {
            assert_approx_eq!(T, *item.0, *item.1);
        }
    }
}
