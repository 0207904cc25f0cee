//! Boiler (Kessel) readings and derived burner/pump logic.

use serde::{Deserialize, Serialize};

/// Instantaneous boiler readings.
///
/// The boiler has a single pump whose water is routed either through the
/// heating circuits or through the hot-water tank, depending on the
/// three-way valve. The dashboard never shows the raw pump flag — it shows
/// the two derived pumps ([`heating_pump_active`](Self::heating_pump_active)
/// and [`hot_water_pump_active`](Self::hot_water_pump_active)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoilerReadings {
    /// Measured boiler water temperature in °C (Kessel IST).
    pub actual_temp: f64,
    /// Boiler temperature setpoint in °C (Kessel SOLL).
    pub target_temp: f64,
    /// Boiler pump running (Kesselpumpe).
    pub pump: bool,
    /// Three-way valve switched to the hot-water tank (3-Wege-Ventil).
    pub three_way_valve: bool,
    /// Burner requested (Brenner).
    pub burner: bool,
    /// Hot-water loading in progress (WW-Bereitung).
    pub hot_water_loading: bool,
    /// Flame detected (Flamme).
    pub flame: bool,
    /// Ionisation current of the flame in µA (Flammenstrom).
    pub flame_current: f64,
    /// Current burner output in percent (Momentane Leistung).
    pub current_output: f64,
    /// Maximum configured burner output in percent.
    pub max_output: f64,
    /// Summer mode active — heating circuits disabled (Sommerbetrieb).
    pub summer_mode: bool,
}

impl BoilerReadings {
    /// Whether boiler water currently flows into the heating circuits.
    #[must_use]
    pub fn heating_pump_active(&self) -> bool {
        self.pump && !self.three_way_valve
    }

    /// Whether boiler water currently flows into the hot-water tank.
    #[must_use]
    pub fn hot_water_pump_active(&self) -> bool {
        self.pump && self.three_way_valve
    }

    /// Classify what the burner is doing right now.
    #[must_use]
    pub fn burner_activity(&self) -> BurnerActivity {
        if !self.burner {
            BurnerActivity::Off
        } else if self.hot_water_loading {
            BurnerActivity::HotWater
        } else {
            BurnerActivity::Heating
        }
    }
}

/// What the burner is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurnerActivity {
    /// Burner off.
    Off,
    /// Burner firing for the heating circuits.
    Heating,
    /// Burner firing to load the hot-water tank.
    HotWater,
}

impl std::fmt::Display for BurnerActivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Off => f.write_str("- aus -"),
            Self::Heating => f.write_str("Heizen"),
            Self::HotWater => f.write_str("WW-Bereitung"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boiler(pump: bool, valve: bool) -> BoilerReadings {
        BoilerReadings {
            actual_temp: 50.0,
            target_temp: 65.0,
            pump,
            three_way_valve: valve,
            burner: false,
            hot_water_loading: false,
            flame: false,
            flame_current: 0.0,
            current_output: 0.0,
            max_output: 75.0,
            summer_mode: false,
        }
    }

    #[test]
    fn should_route_pump_to_heating_when_valve_off() {
        let readings = boiler(true, false);
        assert!(readings.heating_pump_active());
        assert!(!readings.hot_water_pump_active());
    }

    #[test]
    fn should_route_pump_to_hot_water_when_valve_on() {
        let readings = boiler(true, true);
        assert!(!readings.heating_pump_active());
        assert!(readings.hot_water_pump_active());
    }

    #[test]
    fn should_report_no_pump_when_boiler_pump_off() {
        let readings = boiler(false, true);
        assert!(!readings.heating_pump_active());
        assert!(!readings.hot_water_pump_active());
    }

    #[test]
    fn should_classify_burner_off() {
        let readings = boiler(false, false);
        assert_eq!(readings.burner_activity(), BurnerActivity::Off);
    }

    #[test]
    fn should_classify_burner_heating() {
        let mut readings = boiler(true, false);
        readings.burner = true;
        assert_eq!(readings.burner_activity(), BurnerActivity::Heating);
    }

    #[test]
    fn should_classify_burner_loading_hot_water() {
        let mut readings = boiler(true, true);
        readings.burner = true;
        readings.hot_water_loading = true;
        assert_eq!(readings.burner_activity(), BurnerActivity::HotWater);
    }

    #[test]
    fn should_display_activity_labels() {
        assert_eq!(BurnerActivity::Off.to_string(), "- aus -");
        assert_eq!(BurnerActivity::Heating.to_string(), "Heizen");
        assert_eq!(BurnerActivity::HotWater.to_string(), "WW-Bereitung");
    }
}
