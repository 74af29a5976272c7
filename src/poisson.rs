use rand::prelude::Distribution;
use rand::Rng;
use statrs::distribution::Poisson;

use crate::error::{SimulationError, SimulationResult};

/// Mean number of events per step, together with the distribution it is drawn from.
///
/// A zero rate carries no distribution. Any other rate is finite, positive and has its Poisson
/// distribution built once in [`Rate::new`].
#[derive(Debug, Clone)]
pub struct Rate {
    lambda: f64,
    dist: Option<Poisson>,
}

impl Rate {
    pub const ZERO: Rate = Rate {
        lambda: 0.0,
        dist: None,
    };

    pub fn new(lambda: f64) -> SimulationResult<Self> {
        if !lambda.is_finite() || lambda < 0.0 {
            return Err(SimulationError::invalid_parameter(format!(
                "Poisson rate must be finite and not negative, got {}",
                lambda
            )));
        }

        if lambda == 0.0 {
            return Ok(Rate::ZERO);
        }

        let dist = Poisson::new(lambda).map_err(|e| {
            SimulationError::invalid_parameter(format!("Poisson rate {}: {}", lambda, e))
        })?;

        Ok(Rate {
            lambda,
            dist: Some(dist),
        })
    }

    pub fn value(&self) -> f64 {
        self.lambda
    }

    pub fn is_zero(&self) -> bool {
        self.dist.is_none()
    }

    pub fn distribution(&self) -> Option<&Poisson> {
        self.dist.as_ref()
    }
}

impl PartialEq for Rate {
    fn eq(&self, other: &Self) -> bool {
        self.lambda == other.lambda
    }
}

/// Source of per-step event counts driving the neurons.
pub trait DriveSource {
    fn draw(&mut self, rate: &Rate) -> u64;

    /// Like `draw`, but a zero rate yields 0 without consulting the source.
    fn count(&mut self, rate: &Rate) -> u64 {
        if rate.is_zero() {
            0
        } else {
            self.draw(rate)
        }
    }
}

impl<T: DriveSource + ?Sized> DriveSource for &mut T {
    fn draw(&mut self, rate: &Rate) -> u64 {
        (**self).draw(rate)
    }
}

/// Poisson distributed counts from an owned generator.
#[derive(Debug, Clone)]
pub struct PoissonDrive<R: Rng> {
    rng: R,
}

impl<R: Rng> PoissonDrive<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

impl<R: Rng> DriveSource for PoissonDrive<R> {
    fn draw(&mut self, rate: &Rate) -> u64 {
        match rate.distribution() {
            Some(dist) => dist.sample(&mut self.rng) as u64,
            // zero rate
            None => 0,
        }
    }
}
