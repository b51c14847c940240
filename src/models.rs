use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InputError;

/// Metres in a kilometre
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MINUTES_IN_HOUR: f64 = 60.0;

/// Activity types supported by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    Running,
    SportsWalking,
    Swimming,
}

impl ActivityType {
    pub const ALL: [ActivityType; 3] = [
        ActivityType::Running,
        ActivityType::SportsWalking,
        ActivityType::Swimming,
    ];

    /// Distance covered by one action unit, in metres
    pub fn step_length_m(&self) -> f64 {
        match self {
            ActivityType::Running | ActivityType::SportsWalking => 0.65,
            ActivityType::Swimming => 1.38,
        }
    }

    /// Label shown in summaries
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Running => "Running",
            ActivityType::SportsWalking => "SportsWalking",
            ActivityType::Swimming => "Swimming",
        }
    }

    /// Package code for this activity
    pub fn code(&self) -> WorkoutCode {
        match self {
            ActivityType::Running => WorkoutCode::Run,
            ActivityType::SportsWalking => WorkoutCode::Wlk,
            ActivityType::Swimming => WorkoutCode::Swm,
        }
    }

    /// Positional constructor fields, in package order
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            ActivityType::Running => &["action_count", "duration_hours", "weight_kg"],
            ActivityType::SportsWalking => {
                &["action_count", "duration_hours", "weight_kg", "height_cm"]
            }
            ActivityType::Swimming => &[
                "action_count",
                "duration_hours",
                "weight_kg",
                "pool_length_m",
                "pool_count",
            ],
        }
    }

    /// Number of raw values a package for this activity carries
    pub fn arity(&self) -> usize {
        self.field_names().len()
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Short codes used by sensor packages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutCode {
    #[serde(rename = "SWM")]
    Swm,
    #[serde(rename = "RUN")]
    Run,
    #[serde(rename = "WLK")]
    Wlk,
}

impl WorkoutCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutCode::Swm => "SWM",
            WorkoutCode::Run => "RUN",
            WorkoutCode::Wlk => "WLK",
        }
    }

    pub fn activity(&self) -> ActivityType {
        match self {
            WorkoutCode::Swm => ActivityType::Swimming,
            WorkoutCode::Run => ActivityType::Running,
            WorkoutCode::Wlk => ActivityType::SportsWalking,
        }
    }
}

impl FromStr for WorkoutCode {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "SWM" => Ok(WorkoutCode::Swm),
            "RUN" => Ok(WorkoutCode::Run),
            "WLK" => Ok(WorkoutCode::Wlk),
            other => Err(InputError::UnknownCode {
                code: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Measurements shared by every workout: action count, duration and body weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SessionFields")]
pub struct Session {
    /// Steps or strokes counted by the sensor
    action_count: u32,

    /// Duration in hours
    duration_hours: f64,

    /// Athlete weight in kilograms
    weight_kg: f64,
}

impl Session {
    /// Create a session, rejecting a non-positive duration or weight
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Result<Self, InputError> {
        Ok(Self {
            action_count,
            duration_hours: positive("duration_hours", duration_hours)?,
            weight_kg: positive("weight_kg", weight_kg)?,
        })
    }

    pub fn action_count(&self) -> u32 {
        self.action_count
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

/// Unchecked session fields as they appear in serialized form
#[derive(Deserialize)]
struct SessionFields {
    action_count: u32,
    duration_hours: f64,
    weight_kg: f64,
}

impl TryFrom<SessionFields> for Session {
    type Error = InputError;

    fn try_from(fields: SessionFields) -> Result<Self, Self::Error> {
        Session::new(fields.action_count, fields.duration_hours, fields.weight_kg)
    }
}

/// Accept a finite value strictly greater than zero
pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64, InputError> {
    if !value.is_finite() {
        return Err(InputError::InvalidValue {
            field,
            value,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(InputError::InvalidValue {
            field,
            value,
            reason: "must be positive",
        });
    }
    Ok(value)
}

/// Accept a finite value greater than or equal to zero
pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64, InputError> {
    if !value.is_finite() {
        return Err(InputError::InvalidValue {
            field,
            value,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(InputError::InvalidValue {
            field,
            value,
            reason: "must not be negative",
        });
    }
    Ok(value)
}

/// Convert a raw package value into an action count
pub(crate) fn action_count(value: f64) -> Result<u32, InputError> {
    let value = non_negative("action_count", value)?;
    if value.fract() != 0.0 {
        return Err(InputError::InvalidValue {
            field: "action_count",
            value,
            reason: "must be a whole number",
        });
    }
    if value > f64::from(u32::MAX) {
        return Err(InputError::InvalidValue {
            field: "action_count",
            value,
            reason: "is too large",
        });
    }
    Ok(value as u32)
}
