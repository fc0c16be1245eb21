//! Severity profile: the fixed severity → (slowdown, risk rate) table.

use super::HazardError;

/// Effect of a hazard severity on traversal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Multiplier applied to the base traversal time (≥ 1).
    pub slowdown: f64,
    /// Risk accrued per base hour of traversal (≥ 0).
    pub risk_rate: f64,
}

impl Coefficients {
    /// Coefficients for traversal with no active hazard.
    pub const CLEAR: Coefficients = Coefficients {
        slowdown: 1.0,
        risk_rate: 0.0,
    };
}

/// Immutable mapping from severity label to coefficients.
///
/// Labels match exactly (case-sensitive).
#[derive(Debug, Clone, PartialEq)]
pub struct SeverityProfile {
    entries: Vec<(&'static str, Coefficients)>,
}

impl SeverityProfile {
    /// The standard table: `low = (1.1, 1)`, `medium = (1.5, 2)`,
    /// `high = (2.0, 3)`.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                (
                    "low",
                    Coefficients {
                        slowdown: 1.1,
                        risk_rate: 1.0,
                    },
                ),
                (
                    "medium",
                    Coefficients {
                        slowdown: 1.5,
                        risk_rate: 2.0,
                    },
                ),
                (
                    "high",
                    Coefficients {
                        slowdown: 2.0,
                        risk_rate: 3.0,
                    },
                ),
            ],
        }
    }

    /// Look up the coefficients for a label.
    pub fn coefficients(&self, severity: &str) -> Result<Coefficients, HazardError> {
        self.entries
            .iter()
            .find(|(label, _)| *label == severity)
            .map(|(_, c)| *c)
            .ok_or_else(|| HazardError::UnknownSeverity(severity.to_string()))
    }
}

impl Default for SeverityProfile {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table() {
        let profile = SeverityProfile::standard();

        assert_eq!(
            profile.coefficients("low").unwrap(),
            Coefficients {
                slowdown: 1.1,
                risk_rate: 1.0
            }
        );
        assert_eq!(
            profile.coefficients("medium").unwrap(),
            Coefficients {
                slowdown: 1.5,
                risk_rate: 2.0
            }
        );
        assert_eq!(
            profile.coefficients("high").unwrap(),
            Coefficients {
                slowdown: 2.0,
                risk_rate: 3.0
            }
        );
    }

    #[test]
    fn labels_are_case_sensitive() {
        let profile = SeverityProfile::standard();
        assert!(profile.coefficients("High").is_err());
        assert!(profile.coefficients("").is_err());
    }

    #[test]
    fn every_entry_slows_and_is_non_negative() {
        let profile = SeverityProfile::standard();
        for (label, c) in &profile.entries {
            assert_eq!(profile.coefficients(label).unwrap(), *c);
            assert!(c.slowdown >= 1.0);
            assert!(c.risk_rate >= 0.0);
        }
    }

    #[test]
    fn clear_is_identity() {
        assert_eq!(Coefficients::CLEAR.slowdown, 1.0);
        assert_eq!(Coefficients::CLEAR.risk_rate, 0.0);
    }
}
