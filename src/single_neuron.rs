//! Single leaky integrator under independent excitatory and inhibitory Poisson input.
//!
//! The threshold is fixed at 1.0. A crossing is recorded at the step it happens and the voltage
//! is held at exactly 1.0 for that step; the fall back to 0 only happens at the start of the
//! following step. The voltage trace therefore shows every spike as a one-step plateau at the
//! threshold.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::SimulationResult;
use crate::params::{self, SingleNeuronParams};
use crate::poisson::{DriveSource, PoissonDrive, Rate};
use crate::util;

pub const SPIKE_THRESHOLD: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleNeuronTrace {
    pub spike_ts: Vec<usize>,
    pub voltages: Vec<f64>,
}

impl SingleNeuronTrace {
    pub fn num_spikes(&self) -> usize {
        self.spike_ts.len()
    }

    pub fn inter_spike_intervals(&self) -> Vec<usize> {
        util::inter_spike_intervals(&self.spike_ts)
    }

    pub fn mean_inter_spike_interval(&self) -> Option<f64> {
        util::mean(&self.inter_spike_intervals())
    }

    pub fn isi_histogram(&self) -> util::IsiHistogram {
        util::IsiHistogram::with_default_layout(&self.inter_spike_intervals())
    }
}

pub fn simulate_single_neuron<D: DriveSource>(
    params: &SingleNeuronParams,
    drive: &mut D,
) -> SimulationResult<SingleNeuronTrace> {
    params::validate_single_neuron_params(params)?;

    let exc_rate = Rate::new(params.exc_rate)?;
    let inh_rate = Rate::new(params.inh_rate)?;

    let mut spike_ts = Vec::new();
    let mut voltages = Vec::with_capacity(params.num_steps);
    let mut v = 0.0;

    for t in 0..params.num_steps {
        let exc = drive.count(&exc_rate) as f64;
        let inh = drive.count(&inh_rate) as f64;

        // exact comparison: only the clamp below produces this value
        if v == SPIKE_THRESHOLD {
            v = 0.0;
        }

        v += -params.beta * v + params.alpha * (exc - inh) + params.constant_drive;

        if v > SPIKE_THRESHOLD {
            spike_ts.push(t);
            v = SPIKE_THRESHOLD;
        }

        voltages.push(v);
    }

    Ok(SingleNeuronTrace { spike_ts, voltages })
}

/// Runs with Poisson input from a generator seeded with `seed`.
pub fn simulate_single_neuron_seeded(
    params: &SingleNeuronParams,
    seed: u64,
) -> SimulationResult<SingleNeuronTrace> {
    let mut drive = PoissonDrive::new(StdRng::seed_from_u64(seed));
    simulate_single_neuron(params, &mut drive)
}
