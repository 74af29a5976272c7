use serde::{Deserialize, Serialize};

use crate::connectivity::Population;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// First step not yet simulated.
    pub t: usize,
    pub neuron_states: Vec<NeuronState>,
    pub rate_history: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeuronState {
    pub voltage: f64,
    pub population: Population,
    pub num_spikes: usize,
}
