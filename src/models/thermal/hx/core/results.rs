use std::fmt;

use crate::support::hx::{
    CapacitanceRate, CapacityRatio, FlowConfiguration, Lmtd, Ntu, TerminalDifferences,
};
use uom::si::{
    area::square_meter,
    f64::{Area, Power, Ratio},
    power::kilowatt,
    ratio::{percent, ratio},
    temperature_interval::degree_celsius as delta_celsius,
};

use super::PerformanceRating;

/// Everything one evaluation produces.
#[derive(Debug, Clone, Copy)]
pub struct ExchangerResult {
    /// Flow arrangement the result was computed for.
    pub configuration: FlowConfiguration,

    /// Heat given up by the hot stream, `m_hot * Cp_hot * (Th_in - Th_out)`.
    pub q_hot: Power,

    /// Heat taken up by the cold stream, `m_cold * Cp_cold * (Tc_out - Tc_in)`.
    pub q_cold: Power,

    /// Mean of [`q_hot`](Self::q_hot) and [`q_cold`](Self::q_cold); the duty
    /// used for sizing.
    pub q_avg: Power,

    pub terminal_differences: TerminalDifferences,

    pub lmtd: Lmtd,

    /// Heat transfer area required for `q_avg`, `Q / (U * LMTD)`.
    pub area: Area,

    pub c_hot: CapacitanceRate,
    pub c_cold: CapacitanceRate,
    pub c_ratio: CapacityRatio,

    /// `Q / (C_min * (Th_in - Tc_in))`.
    ///
    /// Exceeds one when the supplied temperatures claim more heat than the
    /// inlets can deliver.
    pub effectiveness: Ratio,

    pub ntu: Ntu,

    /// `|Q_hot - Q_cold| / Q_avg`.
    pub heat_balance_error: Ratio,
}

impl ExchangerResult {
    /// Working heat duty.
    #[must_use]
    pub fn q(&self) -> Power {
        self.q_avg
    }

    #[must_use]
    pub fn c_min(&self) -> CapacitanceRate {
        CapacitanceRate::min_max([self.c_hot, self.c_cold]).0
    }

    #[must_use]
    pub fn c_max(&self) -> CapacitanceRate {
        CapacitanceRate::min_max([self.c_hot, self.c_cold]).1
    }

    #[must_use]
    pub fn effectiveness_pct(&self) -> f64 {
        self.effectiveness.get::<percent>()
    }

    #[must_use]
    pub fn heat_balance_error_pct(&self) -> f64 {
        self.heat_balance_error.get::<percent>()
    }

    /// Classifies this result's effectiveness.
    #[must_use]
    pub fn rating(&self) -> PerformanceRating {
        PerformanceRating::classify(self.effectiveness_pct())
    }

    /// Reports the heat balance error if it exceeds `tolerance`.
    ///
    /// A large mismatch means the two energy balances disagree, usually
    /// because one of the readings is off. It never prevents sizing.
    #[must_use]
    pub fn heat_imbalance(&self, tolerance: Ratio) -> Option<HeatImbalance> {
        (self.heat_balance_error > tolerance).then_some(HeatImbalance {
            q_hot: self.q_hot,
            q_cold: self.q_cold,
            error: self.heat_balance_error,
        })
    }
}

impl fmt::Display for ExchangerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Configuration: {}", self.configuration)?;
        writeln!(f, "Heat Duty (kW): {:.2}", self.q().get::<kilowatt>())?;
        writeln!(f, "LMTD (°C): {:.2}", self.lmtd.get::<delta_celsius>())?;
        writeln!(f, "Area (m²): {:.2}", self.area.get::<square_meter>())?;
        writeln!(f, "Effectiveness (%): {:.1}", self.effectiveness_pct())?;
        writeln!(f, "NTU: {:.2}", self.ntu.get::<ratio>())?;
        writeln!(f, "Cmin / Cmax: {:.3}", self.c_ratio.get::<ratio>())?;
        writeln!(f, "Q_hot (kW): {:.2}", self.q_hot.get::<kilowatt>())?;
        writeln!(f, "Q_cold (kW): {:.2}", self.q_cold.get::<kilowatt>())?;
        writeln!(
            f,
            "Heat Balance Error (%): {:.1}",
            self.heat_balance_error_pct()
        )?;
        write!(f, "Performance Rating: {}", self.rating())
    }
}

/// The hot and cold energy balances disagree by more than a tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatImbalance {
    pub q_hot: Power,
    pub q_cold: Power,
    pub error: Ratio,
}

impl fmt::Display for HeatImbalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "heat balance error {:.1}% (hot stream {:.2} kW, cold stream {:.2} kW)",
            self.error.get::<percent>(),
            self.q_hot.get::<kilowatt>(),
            self.q_cold.get::<kilowatt>(),
        )
    }
}
