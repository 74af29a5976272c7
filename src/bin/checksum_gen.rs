use lifnet::{
    network::create_network_simulation, params::SingleNeuronParams,
    single_neuron::simulate_single_neuron_seeded,
};

#[path = "../scenario_params.rs"]
mod scenario_params;

fn main() {
    let mut params = scenario_params::get_scenario_params();
    params.num_steps = 300;

    let mut sim = create_network_simulation(params).unwrap();

    let mut neuron_checksum = 0;
    let mut forced_checksum = 0;

    while let Some(batch) = sim.next_step() {
        for nid in batch.new_spikes.keys() {
            neuron_checksum += batch.t * nid;
        }

        for nid in &batch.forced_nids {
            forced_checksum += batch.t * nid;
        }
    }

    let snapshot = sim.state_snapshot();

    let voltage_checksum: f64 = snapshot
        .neuron_states
        .iter()
        .map(|neuron_state| neuron_state.voltage)
        .sum();

    let rate_checksum: f64 = snapshot.rate_history.iter().sum();

    println!("network result:");
    println!("...neuron checksum: {}", neuron_checksum);
    println!("...forced checksum: {}", forced_checksum);
    println!("...total spikes: {}", sim.total_spikes());
    println!("...voltages checksum: {}", voltage_checksum);
    println!("...rate checksum: {}", rate_checksum);

    let trace = simulate_single_neuron_seeded(&SingleNeuronParams::default(), 0).unwrap();

    let spike_checksum: usize = trace.spike_ts.iter().sum();
    let trace_checksum: f64 = trace.voltages.iter().sum();

    println!("single neuron result:");
    println!("...spike checksum: {}", spike_checksum);
    println!("...trace checksum: {}", trace_checksum);
    println!(
        "...isi histogram: {}",
        serde_json::to_string(&trace.isi_histogram()).unwrap()
    );
}
