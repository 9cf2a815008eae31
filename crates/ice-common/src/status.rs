//! Status vocabulary for ice reports.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IceError;

/// Skating safety classification for a lake.
///
/// Classification is a fixed-priority decision: evidence of no ice wins
/// over everything, explicit safe signals win over warnings, and the
/// absence of any recognized signal means `Uncertain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IceStatus {
    Safe,
    Uncertain,
    Warning,
    NoIce,
}

impl IceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IceStatus::Safe => "safe",
            IceStatus::Uncertain => "uncertain",
            IceStatus::Warning => "warning",
            IceStatus::NoIce => "no_ice",
        }
    }
}

impl fmt::Display for IceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IceStatus {
    type Err = IceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "safe" => Ok(IceStatus::Safe),
            "uncertain" => Ok(IceStatus::Uncertain),
            "warning" => Ok(IceStatus::Warning),
            "no_ice" => Ok(IceStatus::NoIce),
            other => Err(IceError::UnknownStatus(other.to_string())),
        }
    }
}

/// Where a report came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportSource {
    Official,
    Forecast,
    Satellite,
    User,
}

impl ReportSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportSource::Official => "official",
            ReportSource::Forecast => "forecast",
            ReportSource::Satellite => "satellite",
            ReportSource::User => "user",
        }
    }
}

impl fmt::Display for ReportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportSource {
    type Err = IceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "official" => Ok(ReportSource::Official),
            "forecast" => Ok(ReportSource::Forecast),
            "satellite" => Ok(ReportSource::Satellite),
            "user" => Ok(ReportSource::User),
            other => Err(IceError::UnknownSource(other.to_string())),
        }
    }
}

/// Reported surface condition.
///
/// The wire value for a plowed track is the Swedish `plogad`, inherited
/// from the upstream feed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceCondition {
    Smooth,
    Rough,
    SnowCovered,
    #[serde(rename = "plogad")]
    Plowed,
}

impl SurfaceCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            SurfaceCondition::Smooth => "smooth",
            SurfaceCondition::Rough => "rough",
            SurfaceCondition::SnowCovered => "snow_covered",
            SurfaceCondition::Plowed => "plogad",
        }
    }
}

impl fmt::Display for SurfaceCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SurfaceCondition {
    type Err = IceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "smooth" => Ok(SurfaceCondition::Smooth),
            "rough" => Ok(SurfaceCondition::Rough),
            "snow_covered" => Ok(SurfaceCondition::SnowCovered),
            "plogad" => Ok(SurfaceCondition::Plowed),
            other => Err(IceError::UnknownSurface(other.to_string())),
        }
    }
}

/// Quality bucket for forecast-derived conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastQuality {
    Good,
    Moderate,
    Poor,
}

impl ForecastQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastQuality::Good => "good",
            ForecastQuality::Moderate => "moderate",
            ForecastQuality::Poor => "poor",
        }
    }
}

impl fmt::Display for ForecastQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
