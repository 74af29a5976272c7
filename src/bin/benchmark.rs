use std::time::Instant;

use lifnet::network::create_network_simulation;

#[path = "../scenario_params.rs"]
mod scenario_params;

fn main() {
    let params = scenario_params::get_scenario_params();
    let num_neurons = params.num_neurons;
    let synapses_per_neuron = params.exc_in_degree() + params.inh_in_degree();

    let mut sim = create_network_simulation(params).unwrap();

    let wall_start = Instant::now();
    let mut spike_count = 0usize;
    let mut forced_count = 0usize;
    let mut num_steps = 0usize;

    while let Some(batch) = sim.next_step() {
        spike_count += batch.new_spikes.len();
        forced_count += batch.forced_nids.len();
        num_steps += 1;
    }

    let wall_time = wall_start.elapsed();
    let neuron_updates = (num_steps * num_neurons) as f64;
    let synapse_reads = neuron_updates * synapses_per_neuron as f64;
    let update_throughput = neuron_updates / wall_time.as_secs_f64();

    eprintln!("Spikes per step: {}", spike_count as f64 / num_steps as f64);
    eprintln!("Forced raster marks per step: {}", forced_count as f64 / num_steps as f64);
    eprintln!(
        "Neuron update throughput: {:.3e} ({:.3} ns per update)",
        update_throughput,
        1e9 / update_throughput
    );
    eprintln!(
        "Synapse read throughput: {:.3e}",
        synapse_reads / wall_time.as_secs_f64()
    );
}
