use simple_error::SimpleError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum SimulationError {
    /// A parameter or sampling request is outside its valid domain.
    InvalidParameter(SimpleError),
    /// A network run was resumed after its last step.
    ExhaustedSequence,
}

impl SimulationError {
    pub fn invalid_parameter<S: Into<String>>(msg: S) -> Self {
        SimulationError::InvalidParameter(SimpleError::new(msg))
    }
}

impl From<SimpleError> for SimulationError {
    fn from(err: SimpleError) -> Self {
        SimulationError::InvalidParameter(err)
    }
}

impl PartialEq for SimulationError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SimulationError::InvalidParameter(a), SimulationError::InvalidParameter(b)) => {
                a.as_str() == b.as_str()
            }
            (SimulationError::ExhaustedSequence, SimulationError::ExhaustedSequence) => true,
            _ => false,
        }
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimulationError::InvalidParameter(e) => write!(f, "invalid parameter: {}", e),
            SimulationError::ExhaustedSequence => write!(f, "simulation already exhausted"),
        }
    }
}

impl Error for SimulationError {}

pub type SimulationResult<T> = Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = SimulationError::invalid_parameter("num_neurons must be strictly positive");
        assert_eq!(
            err.to_string(),
            "invalid parameter: num_neurons must be strictly positive"
        );
        assert_eq!(
            SimulationError::ExhaustedSequence.to_string(),
            "simulation already exhausted"
        );
    }

    #[test]
    fn from_simple_error() {
        let err: SimulationError = SimpleError::new("bad").into();
        assert_eq!(err, SimulationError::invalid_parameter("bad"));
    }
}
