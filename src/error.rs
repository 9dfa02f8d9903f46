use crate::name::TimerName;
use thiserror::Error;

/// Errors returned by timer and registry operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A dynamic value could not be used as a timer name
    #[error("Timer name must be a String or Symbol")]
    InvalidNameKind {
        /// Kind of the rejected value, e.g. `number`
        kind: &'static str,
    },

    /// The registry holds no timer with this name
    #[error("No timer named {0}")]
    UnknownTimer(TimerName),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::InvalidNameKind { kind: "number" };
        assert_eq!(err.to_string(), "Timer name must be a String or Symbol");

        let err = Error::UnknownTimer(TimerName::from("fake"));
        assert_eq!(err.to_string(), "No timer named :fake");

        let err = Error::UnknownTimer(TimerName::from("cool neat".to_string()));
        assert_eq!(err.to_string(), "No timer named \"cool neat\"");
    }
}
