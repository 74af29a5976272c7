use lifnet::params::NetworkParams;

pub fn get_scenario_params() -> NetworkParams {
    let params_yaml_str = r#"
num_steps: 1000
num_neurons: 1000
excitatory_fraction: 0.8
balance: 4.5
ext_drive_ratio: 0.9
tau_membrane: 20.0
threshold: 20.0
reset_voltage: 10.0
delay: 2
refractory_period: 3
connect_density: 0.1
synaptic_weight: 0.1
refractory_gate: Period
technical_params:
  seed_override: 0
"#;

    serde_yaml::from_str(params_yaml_str).unwrap()
}
