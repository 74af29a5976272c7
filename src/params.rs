use serde::{Deserialize, Serialize};
use simple_error::SimpleError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleNeuronParams {
    pub num_steps: usize,
    pub alpha: f64,
    pub beta: f64,
    pub exc_rate: f64,
    pub inh_rate: f64,
    pub constant_drive: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkParams {
    pub num_steps: usize,
    pub num_neurons: usize,
    pub excitatory_fraction: f64,
    /// Relative strength of inhibition (g).
    pub balance: f64,
    /// External drive relative to the drive needed to reach threshold without feedback
    /// (v_ext / v_thr).
    pub ext_drive_ratio: f64,
    pub tau_membrane: f64,
    pub threshold: f64,
    pub reset_voltage: f64,
    pub delay: usize,
    pub refractory_period: usize,
    pub connect_density: f64,
    pub synaptic_weight: f64,
    pub refractory_gate: RefractoryGate,
    pub technical_params: TechnicalParams,
}

/// Which earlier raster entry re-arms the refractory override.
///
/// In both variants the override only applies if the neuron did not spike `delay` steps ago.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefractoryGate {
    /// The neuron spiked exactly `refractory_period` steps ago.
    Period,
    /// The neuron spiked in the previous step.
    PreviousStep,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalParams {
    pub seed_override: Option<u64>,
}

impl NetworkParams {
    pub fn num_excitatory(&self) -> usize {
        (self.num_neurons as f64 * self.excitatory_fraction).round() as usize
    }

    pub fn num_inhibitory(&self) -> usize {
        self.num_neurons - self.num_excitatory()
    }

    /// Number of leading steps without dynamics, so that every delayed lookup is in range.
    pub fn warm_up_steps(&self) -> usize {
        self.delay.max(self.refractory_period)
    }

    pub fn exc_in_degree(&self) -> usize {
        (self.connect_density * self.num_excitatory() as f64).ceil() as usize
    }

    pub fn inh_in_degree(&self) -> usize {
        (self.connect_density * self.num_inhibitory() as f64).ceil() as usize
    }

    /// External rate that drives an isolated neuron exactly to threshold.
    pub fn threshold_rate(&self) -> f64 {
        self.threshold / (self.synaptic_weight * self.tau_membrane)
    }

    /// Mean number of external events per neuron and step.
    pub fn ext_rate(&self) -> f64 {
        self.ext_drive_ratio * self.threshold_rate()
    }
}

impl Default for SingleNeuronParams {
    fn default() -> Self {
        Self {
            num_steps: 1000,
            alpha: 0.1,
            beta: 0.01,
            exc_rate: 12.0,
            inh_rate: 12.0,
            constant_drive: 0.0,
        }
    }
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self {
            num_steps: 250,
            num_neurons: 1000,
            excitatory_fraction: 0.8,
            balance: 5.0,
            ext_drive_ratio: 10.0,
            tau_membrane: 20.0,
            threshold: 20.0,
            reset_voltage: 10.0,
            delay: 2,
            refractory_period: 3,
            connect_density: 0.1,
            synaptic_weight: 0.1,
            refractory_gate: RefractoryGate::Period,
            technical_params: TechnicalParams::default(),
        }
    }
}

impl Default for TechnicalParams {
    fn default() -> Self {
        Self {
            seed_override: None,
        }
    }
}

pub fn validate_single_neuron_params(params: &SingleNeuronParams) -> Result<(), SimpleError> {
    if params.num_steps == 0 {
        return Err(SimpleError::new("num_steps must be strictly positive"));
    }

    if !params.alpha.is_finite() {
        return Err(SimpleError::new("alpha must be finite"));
    }

    if !params.beta.is_finite() {
        return Err(SimpleError::new("beta must be finite"));
    }

    validate_rate("exc_rate", params.exc_rate)?;
    validate_rate("inh_rate", params.inh_rate)?;

    if !params.constant_drive.is_finite() {
        return Err(SimpleError::new("constant_drive must be finite"));
    }

    Ok(())
}

pub fn validate_network_params(params: &NetworkParams) -> Result<(), SimpleError> {
    if params.num_neurons == 0 {
        return Err(SimpleError::new("num_neurons must be strictly positive"));
    }

    if !(0.0..=1.0).contains(&params.excitatory_fraction) {
        return Err(SimpleError::new("excitatory_fraction must be in [0, 1]"));
    }

    if !params.balance.is_finite() || params.balance < 0.0 {
        return Err(SimpleError::new("balance must be finite and not negative"));
    }

    validate_rate("ext_drive_ratio", params.ext_drive_ratio)?;

    if !(params.tau_membrane > 0.0) {
        return Err(SimpleError::new("tau_membrane must be strictly positive"));
    }

    if !params.threshold.is_finite() || !params.reset_voltage.is_finite() {
        return Err(SimpleError::new("threshold and reset_voltage must be finite"));
    }

    if params.reset_voltage >= params.threshold {
        return Err(SimpleError::new(
            "reset_voltage must be less than threshold",
        ));
    }

    if params.delay == 0 {
        return Err(SimpleError::new("delay must be strictly positive"));
    }

    if params.refractory_period == 0 {
        return Err(SimpleError::new(
            "refractory_period must be strictly positive",
        ));
    }

    if params.num_steps <= params.warm_up_steps() {
        return Err(SimpleError::new(format!(
            "num_steps must be greater than max(delay, refractory_period) = {}",
            params.warm_up_steps()
        )));
    }

    if !(0.0..=1.0).contains(&params.connect_density) {
        return Err(SimpleError::new("connect_density must be in [0, 1]"));
    }

    if !(params.synaptic_weight > 0.0) || !params.synaptic_weight.is_finite() {
        return Err(SimpleError::new(
            "synaptic_weight must be finite and strictly positive",
        ));
    }

    validate_rate("ext_rate", params.ext_rate())?;

    Ok(())
}

fn validate_rate(name: &str, rate: f64) -> Result<(), SimpleError> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(SimpleError::new(format!(
            "{} must be finite and not negative",
            name
        )));
    }

    Ok(())
}
