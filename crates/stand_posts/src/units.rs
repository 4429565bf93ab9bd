//! Unit handling for grid spacing.
//!
//! Spacing is entered in one of the survey units of [`LinearUnit`] and converted into the
//! linear unit of the working spatial reference ([`WorkingUnit`]) before the grid is built.
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Meters in one international foot.
pub const METERS_PER_FOOT: f64 = 0.3048;
/// Meters in one Gunter's chain.
pub const METERS_PER_CHAIN: f64 = 20.1168;
/// Feet in one Gunter's chain.
pub const FEET_PER_CHAIN: f64 = 66.0;

/// Unit the grid spacing is expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LinearUnit {
    #[default]
    Feet,
    Meters,
    Chains,
}

impl LinearUnit {
    pub const ALL: [LinearUnit; 3] = [LinearUnit::Feet, LinearUnit::Meters, LinearUnit::Chains];

    /// The working unit with the same length, if there is one.
    pub fn working_unit(self) -> Option<WorkingUnit> {
        match self {
            LinearUnit::Feet => Some(WorkingUnit::Foot),
            LinearUnit::Meters => Some(WorkingUnit::Meter),
            LinearUnit::Chains => None,
        }
    }

    pub fn meters_per_unit(self) -> f64 {
        match self {
            LinearUnit::Feet => METERS_PER_FOOT,
            LinearUnit::Meters => 1.0,
            LinearUnit::Chains => METERS_PER_CHAIN,
        }
    }
}

impl FromStr for LinearUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "feet" | "foot" | "ft" => Ok(LinearUnit::Feet),
            "meters" | "meter" | "metres" | "metre" | "m" => Ok(LinearUnit::Meters),
            "chains" | "chain" | "ch" => Ok(LinearUnit::Chains),
            _ => Err(Error::InvalidUnit(s.to_owned())),
        }
    }
}

impl fmt::Display for LinearUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LinearUnit::Feet => "Feet",
            LinearUnit::Meters => "Meters",
            LinearUnit::Chains => "Chains",
        })
    }
}

/// Linear unit of a projected working spatial reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WorkingUnit {
    Meter,
    Foot,
}

impl WorkingUnit {
    /// Resolves the linear-unit name reported by a spatial reference.
    ///
    /// `None` and angular units mean the reference is geographic and are rejected with
    /// [`Error::UnprojectedReference`]; any other unknown name is an [`Error::InvalidUnit`].
    pub fn from_reference(linear_unit_name: Option<&str>) -> Result<Self> {
        let Some(name) = linear_unit_name else {
            return Err(Error::UnprojectedReference("no linear unit".into()));
        };
        match name.trim().to_ascii_lowercase().as_str() {
            "degree" | "degrees" | "radian" | "radians" | "grad" | "gradian" | "gon" => {
                Err(Error::UnprojectedReference(format!("angular unit '{name}'")))
            }
            _ => name.parse(),
        }
    }

    /// Converts `value` expressed in `from` into this unit.
    ///
    /// Matching units pass the value through untouched.
    pub fn convert(self, value: f64, from: LinearUnit) -> f64 {
        match (from, self) {
            (LinearUnit::Feet, WorkingUnit::Foot) | (LinearUnit::Meters, WorkingUnit::Meter) => {
                value
            }
            (LinearUnit::Feet, WorkingUnit::Meter) => value * METERS_PER_FOOT,
            (LinearUnit::Chains, WorkingUnit::Meter) => value * METERS_PER_CHAIN,
            (LinearUnit::Meters, WorkingUnit::Foot) => value / METERS_PER_FOOT,
            (LinearUnit::Chains, WorkingUnit::Foot) => value * FEET_PER_CHAIN,
        }
    }
}

impl FromStr for WorkingUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "meter" | "meters" | "metre" | "metres" => Ok(WorkingUnit::Meter),
            "foot" | "feet" => Ok(WorkingUnit::Foot),
            _ => Err(Error::InvalidUnit(s.to_owned())),
        }
    }
}

impl fmt::Display for WorkingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WorkingUnit::Meter => "Meter",
            WorkingUnit::Foot => "Foot",
        })
    }
}

/// Converts a spacing value in `input_unit` into the unit named by `target_unit_name`.
pub fn normalize(value: f64, input_unit: LinearUnit, target_unit_name: &str) -> Result<f64> {
    let target: WorkingUnit = target_unit_name.parse()?;
    Ok(target.convert(value, input_unit))
}

/// Normalizes horizontal and vertical spacing independently.
pub fn normalize_pair(
    spacing_x: f64,
    spacing_y: f64,
    input_unit: LinearUnit,
    target: WorkingUnit,
) -> (f64, f64) {
    (
        target.convert(spacing_x, input_unit),
        target.convert(spacing_y, input_unit),
    )
}
