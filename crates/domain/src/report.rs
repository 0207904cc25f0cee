//! Status report building — the pure mapping from sensor readings to the
//! labeled, colored rows the dashboard displays.
//!
//! This is the semantic heart of the dashboard: every `flag → (label, color)`
//! rule lives here so it can be tested without any HTTP or template
//! machinery. Rendering the same readings twice yields the same report.

use crate::readings::{DailyCounters, SensorSnapshot};
use crate::time::format_runtime;

/// Background color of a value cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowColor {
    /// No highlight.
    None,
    /// A pump is running.
    Green,
    /// The burner or flame is active.
    Red,
    /// Attention — hot water below its target band.
    Yellow,
}

impl RowColor {
    /// CSS class applied to the value cell; empty for [`RowColor::None`].
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Green => "green",
            Self::Red => "red",
            Self::Yellow => "yellow",
        }
    }
}

/// One labeled value row of a section.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Left cell — the German sensor label.
    pub label: &'static str,
    /// Right cell — the formatted value.
    pub value: String,
    /// Highlight of the value cell.
    pub color: RowColor,
}

impl Row {
    fn plain(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            color: RowColor::None,
        }
    }

    fn colored(label: &'static str, value: impl Into<String>, color: RowColor) -> Self {
        Self {
            label,
            value: value.into(),
            color,
        }
    }
}

/// One titled table of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Table header (e.g. "Heizung").
    pub title: &'static str,
    /// Rows in display order.
    pub rows: Vec<Row>,
}

/// Build the six dashboard sections from the current readings.
#[must_use]
pub fn build_sections(snapshot: &SensorSnapshot, today: &DailyCounters) -> Vec<Section> {
    vec![
        heating_section(snapshot),
        circuits_section(snapshot),
        hot_water_section(snapshot),
        ambient_section(snapshot),
        daily_activity_section(today),
        operating_status_section(snapshot),
    ]
}

fn on_off(on: bool) -> &'static str {
    if on { "- an -" } else { "- aus -" }
}

fn active_inactive(active: bool) -> &'static str {
    if active { "- aktiv -" } else { "- inaktiv -" }
}

fn green_if(on: bool) -> RowColor {
    if on { RowColor::Green } else { RowColor::None }
}

fn fmt_temp(value: f64) -> String {
    format!("{value:.1} °C")
}

fn fmt_temp_pair(target: f64, actual: f64) -> String {
    format!("{target:.1} / {actual:.1} °C")
}

fn heating_section(snapshot: &SensorSnapshot) -> Section {
    let boiler = &snapshot.boiler;
    let heating_pump = boiler.heating_pump_active();
    let flame = if boiler.flame {
        format!("- an, {:.1} µA -", boiler.flame_current)
    } else {
        "- aus -".to_string()
    };

    Section {
        title: "Heizung",
        rows: vec![
            Row::plain("Kessel IST", fmt_temp(boiler.actual_temp)),
            Row::plain("Kessel SOLL", fmt_temp(boiler.target_temp)),
            Row::colored("Vorlaufpumpe", on_off(heating_pump), green_if(heating_pump)),
            Row::colored(
                "Brenner",
                boiler.burner_activity().to_string(),
                if boiler.burner {
                    RowColor::Red
                } else {
                    RowColor::None
                },
            ),
            Row::colored(
                "Flamme",
                flame,
                if boiler.flame {
                    RowColor::Red
                } else {
                    RowColor::None
                },
            ),
            Row::plain(
                "Momentane Leistung",
                format!(
                    "{:.0} / {:.0} %",
                    boiler.current_output, boiler.max_output
                ),
            ),
            Row::plain("Sommerbetrieb", active_inactive(boiler.summer_mode)),
        ],
    }
}

fn circuits_section(snapshot: &SensorSnapshot) -> Section {
    let hk1 = &snapshot.hk1;
    let hk2 = &snapshot.hk2;

    Section {
        title: "Heizkreise",
        rows: vec![
            Row::plain(
                "Heizkreis 1 Soll/Ist",
                fmt_temp_pair(hk1.flow_target_temp, hk1.flow_actual_temp),
            ),
            Row::plain("Betriebsart HK1", hk1.mode().to_string()),
            Row::colored("Pumpe HK1", active_inactive(hk1.pump), green_if(hk1.pump)),
            Row::plain(
                "Heizkreis 2 Soll/Ist",
                fmt_temp_pair(hk2.flow_target_temp, hk2.flow_actual_temp),
            ),
            Row::plain("Betriebsart HK2", hk2.mode().to_string()),
            Row::colored("Pumpe HK2", active_inactive(hk2.pump), green_if(hk2.pump)),
            Row::plain(
                "Mischersteuerung HK2",
                format!("{:.0}", snapshot.mixer_position),
            ),
            Row::plain("Rücklauf IST", fmt_temp(snapshot.return_temp)),
        ],
    }
}

fn hot_water_section(snapshot: &SensorSnapshot) -> Section {
    let ww = &snapshot.hot_water;
    let ww_pump = snapshot.boiler.hot_water_pump_active();

    Section {
        title: "Warmwasser",
        rows: vec![
            Row::colored(
                "Warmwasser IST",
                fmt_temp(ww.actual_temp),
                if ww.temp_ok {
                    RowColor::None
                } else {
                    RowColor::Yellow
                },
            ),
            Row::plain("Warmwasser SOLL", fmt_temp(ww.target_temp)),
            Row::plain("Betriebsart", if ww.day_mode { "Tag" } else { "Nacht" }),
            Row::colored("WW-Pumpe", on_off(ww_pump), green_if(ww_pump)),
            Row::colored(
                "Zirkulationspumpe",
                on_off(ww.circulation_pump),
                green_if(ww.circulation_pump),
            ),
            Row::plain("WW-Vorrang", on_off(ww.priority)),
        ],
    }
}

fn ambient_section(snapshot: &SensorSnapshot) -> Section {
    let ambient = &snapshot.ambient;

    Section {
        title: "Sonstige Temperaturen",
        rows: vec![
            Row::plain("Außen", fmt_temp(ambient.outdoor_temp)),
            Row::plain("Außen gedämpft", fmt_temp(ambient.outdoor_temp_damped)),
            Row::plain("Raumtemp. IST", fmt_temp(ambient.room_actual_temp)),
            Row::plain("Raumtemp. SOLL", fmt_temp(ambient.room_target_temp)),
        ],
    }
}

fn daily_activity_section(today: &DailyCounters) -> Section {
    Section {
        title: "Heutige Aktivität",
        rows: vec![
            Row::plain("Brennerlaufzeit", format_runtime(today.burner_runtime_secs)),
            Row::plain("Brennerstarts", today.burner_starts.to_string()),
            Row::plain(
                "Heizungs-Brennerlaufzeit",
                format_runtime(today.heating_runtime_secs),
            ),
            Row::plain(
                "Warmwasserbereitungszeit",
                format_runtime(today.hot_water_runtime_secs),
            ),
            Row::plain("Warmwasserbereitungen", today.hot_water_cycles.to_string()),
        ],
    }
}

fn operating_status_section(snapshot: &SensorSnapshot) -> Section {
    let totals = &snapshot.totals;

    Section {
        title: "Betriebsstatus",
        rows: vec![
            Row::plain("Brennerlaufzeit", format_runtime(totals.burner_runtime_secs)),
            Row::plain("Brennerstarts", totals.burner_starts.to_string()),
            Row::plain("Systemdruck", format!("{:.2} bar", totals.system_pressure)),
            Row::plain("Servicecode", totals.service_code.clone()),
            Row::plain("Fehlercode", totals.error_code.clone()),
        ],
    }
}
