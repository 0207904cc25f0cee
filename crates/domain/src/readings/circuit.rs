//! Heating circuit (Heizkreis) readings and operating-mode selection.

use serde::{Deserialize, Serialize};

/// Instantaneous readings of one heating circuit (HK1 or HK2).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatingCircuit {
    /// Flow temperature setpoint in °C (Vorlauf SOLL).
    pub flow_target_temp: f64,
    /// Measured flow temperature in °C (Vorlauf IST).
    pub flow_actual_temp: f64,
    /// Party override active.
    pub party: bool,
    /// Vacation override active (Ferien).
    pub vacation: bool,
    /// Program selector on automatic (vs. manual).
    pub automatic: bool,
    /// Day program active (vs. night setback, Tagbetrieb).
    pub day_mode: bool,
    /// Circuit pump running.
    pub pump: bool,
}

impl HeatingCircuit {
    /// Resolve the displayed operating mode.
    ///
    /// The overrides form a priority chain: Party beats everything, then
    /// vacation, then the automatic/manual selector combined with the
    /// day/night program.
    #[must_use]
    pub fn mode(&self) -> CircuitMode {
        if self.party {
            CircuitMode::Party
        } else if self.vacation {
            CircuitMode::Vacation
        } else if self.automatic {
            CircuitMode::Automatic {
                day: self.day_mode,
            }
        } else {
            CircuitMode::Manual {
                day: self.day_mode,
            }
        }
    }
}

/// Resolved operating mode of a heating circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitMode {
    /// Party override — day program regardless of schedule.
    Party,
    /// Vacation override — night setback regardless of schedule.
    Vacation,
    /// Scheduled operation.
    Automatic {
        /// Day program currently active.
        day: bool,
    },
    /// Manually selected program.
    Manual {
        /// Day program currently active.
        day: bool,
    },
}

impl std::fmt::Display for CircuitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Party => f.write_str("Party"),
            Self::Vacation => f.write_str("Ferien"),
            Self::Automatic { day } => {
                write!(f, "Auto ({})", if *day { "Tag" } else { "Nacht" })
            }
            Self::Manual { day } => {
                write!(f, "Manuell ({})", if *day { "Tag" } else { "Nacht" })
            }
        }
    }
}
