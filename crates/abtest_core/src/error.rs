/// Errors produced by the power calculations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PowerError {
    /// An input lies outside its mathematical domain
    #[error("invalid {parameter} ({value}): {reason}")]
    Domain {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// The requested quantity has no finite value (e.g. zero effect size)
    #[error("undefined result: {reason}")]
    UndefinedResult { reason: &'static str },
}

impl PowerError {
    pub(crate) fn domain(parameter: &'static str, value: f64, reason: &'static str) -> Self {
        PowerError::Domain {
            parameter,
            value,
            reason,
        }
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, PowerError::Domain { .. })
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, PowerError::UndefinedResult { .. })
    }
}

pub type Result<T> = std::result::Result<T, PowerError>;
