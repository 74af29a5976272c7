use crate::connectivity::{ConnectivityTable, Population};
use crate::error::{SimulationError, SimulationResult};
use crate::neuron::Neuron;
use crate::params::{self, NetworkParams, RefractoryGate};
use crate::poisson::{DriveSource, PoissonDrive, Rate};
use crate::spike_raster::SpikeRaster;
use crate::state_snapshot::{NeuronState, StateSnapshot};
use crate::types::HashMap;
use itertools::Itertools;
use log::{info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Builds a run with Poisson drive and connectivity drawn from one generator, seeded from
/// `technical_params.seed_override` or from entropy.
pub fn create_network_simulation(
    params: NetworkParams,
) -> SimulationResult<NetworkSimulation<PoissonDrive<StdRng>>> {
    params::validate_network_params(&params)?;

    let mut rng = match params.technical_params.seed_override {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let connectivity = ConnectivityTable::sample(&params, &mut rng)?;

    NetworkSimulation::new(params, connectivity, PoissonDrive::new(rng))
}

/// Default network, varying only the run length, the balance `g` and `v_ext / v_thr`.
pub fn simulate_network(
    num_steps: usize,
    balance: f64,
    ext_drive_ratio: f64,
) -> SimulationResult<NetworkSimulation<PoissonDrive<StdRng>>> {
    create_network_simulation(NetworkParams {
        num_steps,
        balance,
        ext_drive_ratio,
        ..NetworkParams::default()
    })
}

#[derive(Debug)]
pub struct StepBatch<'a> {
    pub t: usize,
    /// Neurons crossing threshold in this step, each mapped to its new spike steps.
    pub new_spikes: HashMap<usize, Vec<usize>>,
    /// Neurons whose raster bit was set by the refractory override.
    pub forced_nids: Vec<usize>,
    pub rate: f64,
    pub rate_history: &'a [f64],
}

impl StepBatch<'_> {
    pub fn spiking_nids(&self) -> Vec<usize> {
        self.new_spikes.keys().copied().sorted().collect()
    }
}

#[derive(Debug)]
pub struct NetworkSimulation<D: DriveSource> {
    params: NetworkParams,
    connectivity: ConnectivityTable,
    neurons: Vec<Neuron>,
    raster: SpikeRaster,
    rate_history: Vec<f64>,
    ext_rate: Rate,
    drive: D,
    tick_period: usize,
    total_spikes: usize,
}

impl<D: DriveSource> NetworkSimulation<D> {
    pub fn new(
        params: NetworkParams,
        connectivity: ConnectivityTable,
        drive: D,
    ) -> SimulationResult<Self> {
        params::validate_network_params(&params)?;

        if connectivity.num_neurons() != params.num_neurons
            || connectivity.num_excitatory() != params.num_excitatory()
        {
            return Err(SimulationError::invalid_parameter(format!(
                "connectivity for {} neurons ({} excitatory) does not match params with {} neurons ({} excitatory)",
                connectivity.num_neurons(),
                connectivity.num_excitatory(),
                params.num_neurons,
                params.num_excitatory()
            )));
        }

        let ext_rate = Rate::new(params.ext_rate())?;
        let warm_up_steps = params.warm_up_steps();

        info!(
            "network run: {} neurons, steps {}..{}, external rate {}",
            params.num_neurons, warm_up_steps, params.num_steps, ext_rate.value()
        );

        let mut raster = SpikeRaster::new(params.num_neurons, warm_up_steps + 1);
        raster.advance_to(warm_up_steps - 1);

        Ok(Self {
            neurons: vec![Neuron::new(); params.num_neurons],
            raster,
            rate_history: vec![0.0; warm_up_steps],
            ext_rate,
            drive,
            tick_period: warm_up_steps,
            total_spikes: 0,
            connectivity,
            params,
        })
    }

    pub fn params(&self) -> &NetworkParams {
        &self.params
    }

    pub fn connectivity(&self) -> &ConnectivityTable {
        &self.connectivity
    }

    pub fn get_num_neurons(&self) -> usize {
        self.neurons.len()
    }

    /// Next step to be simulated.
    pub fn get_tick_period(&self) -> usize {
        self.tick_period
    }

    pub fn is_exhausted(&self) -> bool {
        self.tick_period >= self.params.num_steps
    }

    pub fn rate_history(&self) -> &[f64] {
        &self.rate_history
    }

    pub fn total_spikes(&self) -> usize {
        self.total_spikes
    }

    pub fn spike_history(&self, nid: usize) -> &[usize] {
        self.neurons[nid].get_spike_ts()
    }

    pub fn voltage(&self, nid: usize) -> f64 {
        self.neurons[nid].get_voltage()
    }

    pub fn population(&self, nid: usize) -> Population {
        self.connectivity.population(nid)
    }

    /// Raster bit of `nid` at step `t`, if `t` is still inside the retained window.
    pub fn is_marked(&self, t: usize, nid: usize) -> Option<bool> {
        if nid < self.neurons.len() && self.raster.is_within_horizon(t) {
            Some(self.raster.is_marked(t, nid))
        } else {
            None
        }
    }

    pub fn next_step(&mut self) -> Option<StepBatch<'_>> {
        if self.is_exhausted() {
            None
        } else {
            Some(self.step())
        }
    }

    pub fn try_next_step(&mut self) -> SimulationResult<StepBatch<'_>> {
        if self.is_exhausted() {
            Err(SimulationError::ExhaustedSequence)
        } else {
            Ok(self.step())
        }
    }

    /// Simulates all remaining steps and returns how many were run.
    pub fn run_to_end(&mut self) -> usize {
        let mut num_steps = 0;
        while self.next_step().is_some() {
            num_steps += 1;
        }
        num_steps
    }

    pub fn state_snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            t: self.tick_period,
            neuron_states: self
                .neurons
                .iter()
                .enumerate()
                .map(|(nid, neuron)| NeuronState {
                    voltage: neuron.get_voltage(),
                    population: self.connectivity.population(nid),
                    num_spikes: neuron.get_spike_ts().len(),
                })
                .collect(),
            rate_history: self.rate_history.clone(),
        }
    }

    fn step(&mut self) -> StepBatch<'_> {
        let t = self.tick_period;
        let params = &self.params;
        let delayed_t = t - params.delay;
        let gate_t = match params.refractory_gate {
            RefractoryGate::Period => t - params.refractory_period,
            RefractoryGate::PreviousStep => t - 1,
        };

        self.raster.advance_to(t);

        let mut new_spikes = HashMap::default();
        let mut forced_nids = Vec::new();

        for (nid, neuron) in self.neurons.iter_mut().enumerate() {
            let drive_ext = self.drive.count(&self.ext_rate) as f64;

            let exc_input = self
                .raster
                .count_marked(delayed_t, self.connectivity.exc_sources(nid))
                as f64;
            let inh_input = self
                .raster
                .count_marked(delayed_t, self.connectivity.inh_sources(nid))
                as f64;

            let drive = exc_input - params.balance * inh_input;
            let ri = params.synaptic_weight * (drive + drive_ext);

            neuron.integrate(ri, params);

            if self.raster.is_marked(gate_t, nid) && !self.raster.is_marked(delayed_t, nid) {
                neuron.force_reset(params);
                self.raster.mark(t, nid);
                forced_nids.push(nid);
            } else if neuron.check_spike(t, params) {
                self.raster.mark(t, nid);
                new_spikes.insert(nid, vec![t]);
            }
        }

        let num_spikes = new_spikes.len();
        let rate = num_spikes as f64 / self.neurons.len() as f64;

        self.rate_history.push(rate);
        self.total_spikes += num_spikes;
        self.tick_period += 1;

        trace!(
            "t = {}: {} spikes, {} forced",
            t,
            num_spikes,
            forced_nids.len()
        );

        if self.is_exhausted() {
            info!(
                "network run exhausted after step {}: {} spikes in total",
                t, self.total_spikes
            );
        }

        StepBatch {
            t,
            new_spikes,
            forced_nids,
            rate,
            rate_history: &self.rate_history,
        }
    }
}
