//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("No council members configured")]
    EmptyRoster,

    #[error("Council roster has {0} members, the anonymization alphabet supports at most 26")]
    RosterTooLarge(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_too_large_display() {
        let err = DomainError::RosterTooLarge(30);
        assert!(err.to_string().contains("30"));
        assert!(err.to_string().contains("26"));
    }
}
