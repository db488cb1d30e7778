//! Volume and temperature units, and the display preferences that select them.

use serde::{Deserialize, Serialize};

/// Rounds to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats a number without a trailing `.0` when it is whole.
///
/// ```
/// assert_eq!(gt_core::units::format_number(6.0), "6");
/// assert_eq!(gt_core::units::format_number(6.25), "6.25");
/// ```
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Formats a measurement so whole values keep one decimal place.
///
/// ```
/// assert_eq!(gt_core::units::format_decimal(6.0), "6.0");
/// assert_eq!(gt_core::units::format_decimal(6.25), "6.25");
/// ```
pub fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Units for liquid volume. Stored values are always millilitres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeUnit {
    #[default]
    Ml,
    L,
    /// US gallon.
    Gal,
    /// Imperial gallon.
    UkGal,
    Tsp,
    Tbsp,
}

impl VolumeUnit {
    /// Millilitres in one of this unit.
    #[must_use]
    pub const fn millilitres(self) -> f64 {
        match self {
            Self::Ml => 1.0,
            Self::L => 1000.0,
            Self::Gal => 3785.411_784,
            Self::UkGal => 4546.09,
            Self::Tsp => 4.928_921_593_75,
            Self::Tbsp => 14.786_764_781_25,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ml => "ml",
            Self::L => "l",
            Self::Gal => "gal",
            Self::UkGal => "ukgal",
            Self::Tsp => "tsp",
            Self::Tbsp => "tbsp",
        }
    }

    /// Converts `value` in this unit to `to`, rounded to two decimals.
    #[must_use]
    pub fn convert(self, to: Self, value: f64) -> f64 {
        if self == to {
            return value;
        }
        round2(value * self.millilitres() / to.millilitres())
    }
}

/// Units for temperature. Stored values are always degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TempUnit {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TempUnit {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Celsius => "C",
            Self::Fahrenheit => "F",
            Self::Kelvin => "K",
        }
    }

    /// Converts `value` in this unit to `to`, rounded to two decimals.
    #[must_use]
    pub fn convert(self, to: Self, value: f64) -> f64 {
        if self == to {
            return value;
        }
        let celsius = match self {
            Self::Celsius => value,
            Self::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            Self::Kelvin => value - 273.15,
        };
        let converted = match to {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            Self::Kelvin => celsius + 273.15,
        };
        round2(converted)
    }
}

/// User preferences that affect how measurements are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayPrefs {
    /// Unit for additive dosages.
    pub measurement_unit: VolumeUnit,
    /// Unit for the amount of water delivered.
    pub delivery_unit: VolumeUnit,
    pub temperature_unit: TempUnit,
    /// Show dissolved solids as EC instead of PPM.
    pub tds_ec: bool,
}

impl Default for DisplayPrefs {
    fn default() -> Self {
        Self {
            measurement_unit: VolumeUnit::Ml,
            delivery_unit: VolumeUnit::L,
            temperature_unit: TempUnit::Celsius,
            tds_ec: false,
        }
    }
}
