use crate::params::NetworkParams;

#[derive(Debug, Clone)]
pub struct Neuron {
    voltage: f64,
    spike_ts: Vec<usize>,
}

impl Neuron {
    pub fn new() -> Self {
        Self {
            voltage: 0.0,
            spike_ts: Vec::new(),
        }
    }

    pub fn get_voltage(&self) -> f64 {
        self.voltage
    }

    pub fn get_spike_ts(&self) -> &[usize] {
        &self.spike_ts
    }

    /// One Euler step of the leaky membrane with input `ri` (already scaled by the synaptic
    /// weight).
    pub fn integrate(&mut self, ri: f64, params: &NetworkParams) {
        let dv = -self.voltage / params.tau_membrane + ri;
        self.voltage += dv;
    }

    pub fn check_spike(&mut self, t: usize, params: &NetworkParams) -> bool {
        if self.voltage > params.threshold {
            self.spike(t, params);
            true
        } else {
            false
        }
    }

    pub fn spike(&mut self, t: usize, params: &NetworkParams) {
        self.spike_ts.push(t);
        self.voltage = params.reset_voltage;
    }

    /// Clamps to the reset voltage without recording a spike.
    pub fn force_reset(&mut self, params: &NetworkParams) {
        self.voltage = params.reset_voltage;
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use float_cmp::assert_approx_eq;

    fn params() -> NetworkParams {
        NetworkParams {
            num_neurons: 1,
            ..NetworkParams::default()
        }
    }

    #[test]
    fn leak() {
        let params = params();
        let mut sut = Neuron::new();

        sut.integrate(5.0, &params);
        assert_approx_eq!(f64, sut.get_voltage(), 5.0);

        sut.integrate(0.0, &params);
        assert_approx_eq!(f64, sut.get_voltage(), 5.0 * (1.0 - 1.0 / 20.0));

        sut.integrate(0.0, &params);
        assert_approx_eq!(f64, sut.get_voltage(), 5.0 * (1.0 - 1.0 / 20.0f64).powi(2));
    }

    #[test]
    fn spike_after_crossing() {
        let params = params();
        let mut sut = Neuron::new();

        sut.integrate(15.0, &params);
        assert!(!sut.check_spike(4, &params));
        assert!(sut.get_spike_ts().is_empty());

        sut.integrate(6.0, &params);
        assert_approx_eq!(f64, sut.get_voltage(), 15.0 * (1.0 - 1.0 / 20.0) + 6.0);
        assert!(sut.check_spike(5, &params));
        assert_eq!(sut.get_spike_ts(), &[5]);
        assert_approx_eq!(f64, sut.get_voltage(), params.reset_voltage);
    }

    #[test]
    fn threshold_is_strict() {
        let params = params();
        let mut sut = Neuron::new();

        sut.integrate(params.threshold, &params);
        assert!(!sut.check_spike(0, &params));
    }

    #[test]
    fn check_spike_no_duplicate() {
        let params = params();
        let mut sut = Neuron::new();
        sut.integrate(100.0, &params);

        assert!(sut.check_spike(1, &params));
        assert!(!sut.check_spike(1, &params));
        assert_eq!(sut.get_spike_ts(), &[1]);
    }

    #[test]
    fn ipsp_prevents_spike() {
        let params = params();
        let mut sut = Neuron::new();

        sut.integrate(19.0, &params);
        sut.integrate(2.0 - 0.5, &params);

        assert!(!sut.check_spike(2, &params));
    }

    #[test]
    fn forced_reset_records_nothing() {
        let params = params();
        let mut sut = Neuron::new();

        sut.integrate(3.0, &params);
        sut.force_reset(&params);

        assert_approx_eq!(f64, sut.get_voltage(), params.reset_voltage);
        assert!(sut.get_spike_ts().is_empty());
    }
}
