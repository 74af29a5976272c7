//! Discrete-time simulation of leaky integrate-and-fire neurons under stochastic drive.
//!
//! Two engines are provided:
//!
//! - [`single_neuron`]: one neuron with independent excitatory and inhibitory Poisson input,
//!   simulated eagerly into a spike list and a voltage trace.
//! - [`network`]: a sparsely connected excitatory/inhibitory population with synaptic delay and
//!   refractory override, advanced one step per call to
//!   [`network::NetworkSimulation::next_step`].
//!
//! ```
//! use lifnet::network::simulate_network;
//!
//! let mut sim = simulate_network(50, 5.0, 2.0).unwrap();
//!
//! while let Some(batch) = sim.next_step() {
//!     assert!((0.0..=1.0).contains(&batch.rate));
//!     assert_eq!(batch.rate_history.len(), batch.t + 1);
//! }
//! ```

pub mod connectivity;
pub mod error;
pub mod network;
pub mod params;
pub mod poisson;
pub mod single_neuron;
pub mod state_snapshot;
pub mod util;

mod neuron;
mod spike_raster;
mod types;
