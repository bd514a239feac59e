//! Configuration validation.
//!
//! Parsing turns raw environment strings into typed values; validation
//! checks the ranges the types alone cannot express.

use crate::config::loader::ConfigError;

/// Validate a parsed port number.
///
/// Accepts 1..=65535. Port 0 (ephemeral) is rejected.
pub fn validate_port(port: i64) -> Result<u16, ConfigError> {
    match u16::try_from(port) {
        Ok(p) if p >= 1 => Ok(p),
        _ => Err(ConfigError::PortOutOfRange(port)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_port_bounds() {
        assert_eq!(validate_port(1).unwrap(), 1);
        assert_eq!(validate_port(65535).unwrap(), 65535);
        assert!(matches!(validate_port(0), Err(ConfigError::PortOutOfRange(0))));
        assert!(matches!(validate_port(65536), Err(ConfigError::PortOutOfRange(65536))));
        assert!(matches!(validate_port(-1), Err(ConfigError::PortOutOfRange(-1))));
    }
}
