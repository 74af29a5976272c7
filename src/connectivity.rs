use log::debug;
use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{SimulationError, SimulationResult};
use crate::params::NetworkParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Population {
    Excitatory,
    Inhibitory,
}

impl Population {
    /// Excitatory neurons occupy the ids `0..num_excitatory`, inhibitory ones the rest.
    pub fn of(nid: usize, num_excitatory: usize) -> Population {
        if nid < num_excitatory {
            Population::Excitatory
        } else {
            Population::Inhibitory
        }
    }
}

/// Draws `count` distinct integers from `[low, high)` without replacement.
pub fn select<R: Rng + ?Sized>(
    low: usize,
    high: usize,
    count: usize,
    rng: &mut R,
) -> SimulationResult<Vec<usize>> {
    if low > high {
        return Err(SimulationError::invalid_parameter(format!(
            "empty range [{}, {})",
            low, high
        )));
    }

    if count > high - low {
        return Err(SimulationError::invalid_parameter(format!(
            "cannot select {} distinct values from [{}, {})",
            count, low, high
        )));
    }

    Ok(index::sample(rng, high - low, count)
        .into_iter()
        .map(|offset| low + offset)
        .collect())
}

/// Fixed in-degree sources of every neuron, frozen at construction.
#[derive(Debug, Clone)]
pub struct ConnectivityTable {
    num_excitatory: usize,
    exc_sources: Vec<Vec<usize>>,
    inh_sources: Vec<Vec<usize>>,
}

impl ConnectivityTable {
    pub fn sample<R: Rng + ?Sized>(params: &NetworkParams, rng: &mut R) -> SimulationResult<Self> {
        let num_neurons = params.num_neurons;
        let num_excitatory = params.num_excitatory();
        let exc_in_degree = params.exc_in_degree();
        let inh_in_degree = params.inh_in_degree();

        let mut exc_sources = Vec::with_capacity(num_neurons);
        let mut inh_sources = Vec::with_capacity(num_neurons);

        for _ in 0..num_neurons {
            exc_sources.push(select(0, num_excitatory, exc_in_degree, rng)?);
            inh_sources.push(select(num_excitatory, num_neurons, inh_in_degree, rng)?);
        }

        debug!(
            "sampled connectivity for {} neurons: {} excitatory and {} inhibitory sources each",
            num_neurons, exc_in_degree, inh_in_degree
        );

        Ok(Self {
            num_excitatory,
            exc_sources,
            inh_sources,
        })
    }

    pub fn num_neurons(&self) -> usize {
        self.exc_sources.len()
    }

    pub fn num_excitatory(&self) -> usize {
        self.num_excitatory
    }

    pub fn population(&self, nid: usize) -> Population {
        Population::of(nid, self.num_excitatory)
    }

    pub fn exc_sources(&self, nid: usize) -> &[usize] {
        &self.exc_sources[nid]
    }

    pub fn inh_sources(&self, nid: usize) -> &[usize] {
        &self.inh_sources[nid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{distributions::Uniform, prelude::Distribution, rngs::StdRng, SeedableRng};

    #[test]
    fn select_distinct_within_range() {
        let mut rng = StdRng::seed_from_u64(0);
        let low_dist = Uniform::from(0..50);
        let width_dist = Uniform::from(0..50);

        for _ in 0..200 {
            let low = low_dist.sample(&mut rng);
            let high = low + width_dist.sample(&mut rng);
            let count = Uniform::from(0..=(high - low)).sample(&mut rng);

            let selection = select(low, high, count, &mut rng).unwrap();

            assert_eq!(selection.len(), count);
            assert!(selection.iter().all(|value| (low..high).contains(value)));
            assert_eq!(selection.iter().unique().count(), count);
        }
    }

    #[test]
    fn select_full_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let selection = select(5, 12, 7, &mut rng).unwrap();
        assert_eq!(selection.into_iter().sorted().collect_vec(), (5..12).collect_vec());
    }

    #[test]
    fn select_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(select(3, 3, 0, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn select_too_many() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = select(10, 15, 6, &mut rng);

        assert_eq!(
            result.unwrap_err(),
            SimulationError::invalid_parameter("cannot select 6 distinct values from [10, 15)")
        );
    }

    #[test]
    fn select_inverted_range() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            select(10, 5, 0, &mut rng),
            Err(SimulationError::InvalidParameter(_))
        ));
    }

    #[test]
    fn table_respects_partitions() {
        let params = NetworkParams {
            num_neurons: 100,
            ..NetworkParams::default()
        };
        let mut rng = StdRng::seed_from_u64(2);

        let sut = ConnectivityTable::sample(&params, &mut rng).unwrap();

        assert_eq!(sut.num_neurons(), 100);
        assert_eq!(sut.num_excitatory(), 80);

        for nid in 0..100 {
            let exc = sut.exc_sources(nid);
            let inh = sut.inh_sources(nid);

            assert_eq!(exc.len(), 8);
            assert_eq!(inh.len(), 2);
            assert!(exc
                .iter()
                .all(|&src| sut.population(src) == Population::Excitatory));
            assert!(inh
                .iter()
                .all(|&src| sut.population(src) == Population::Inhibitory));
            assert_eq!(exc.iter().unique().count(), exc.len());
            assert_eq!(inh.iter().unique().count(), inh.len());
        }
    }

    #[test]
    fn table_is_seed_deterministic() {
        let params = NetworkParams {
            num_neurons: 50,
            ..NetworkParams::default()
        };

        let first = ConnectivityTable::sample(&params, &mut StdRng::seed_from_u64(9)).unwrap();
        let second = ConnectivityTable::sample(&params, &mut StdRng::seed_from_u64(9)).unwrap();

        for nid in 0..50 {
            assert_eq!(first.exc_sources(nid), second.exc_sources(nid));
            assert_eq!(first.inh_sources(nid), second.inh_sources(nid));
        }
    }

    #[test]
    fn population_boundaries() {
        assert_eq!(Population::of(0, 8), Population::Excitatory);
        assert_eq!(Population::of(7, 8), Population::Excitatory);
        assert_eq!(Population::of(8, 8), Population::Inhibitory);
    }
}
