//! Sensor package factory
//!
//! A package is a short activity code plus the positional values of that
//! activity's constructor. The code table is a closed enum, so an unknown
//! code is always an error and never falls back to a default activity.

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::models::{action_count, WorkoutCode};
use crate::running::Running;
use crate::swimming::Swimming;
use crate::training::Workout;
use crate::walking::SportsWalking;

/// Raw readings of one workout as delivered by the sensor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub code: String,
    pub values: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            values,
        }
    }

    pub fn read(&self) -> Result<Workout, InputError> {
        read_package(&self.code, &self.values)
    }
}

/// Build the workout a package describes
pub fn read_package(code: &str, values: &[f64]) -> Result<Workout, InputError> {
    let code: WorkoutCode = code.parse()?;
    build_workout(code, values)
}

/// Build a workout for an already parsed code
pub fn build_workout(code: WorkoutCode, values: &[f64]) -> Result<Workout, InputError> {
    let activity = code.activity();
    tracing::debug!(%code, %activity, values = ?values, "Reading package");

    let workout = match (code, values) {
        (WorkoutCode::Run, &[action, duration, weight]) => {
            Running::new(action_count(action)?, duration, weight)?.into()
        }
        (WorkoutCode::Wlk, &[action, duration, weight, height]) => {
            SportsWalking::new(action_count(action)?, duration, weight, height)?.into()
        }
        (WorkoutCode::Swm, &[action, duration, weight, pool_length, pool_count]) => {
            Swimming::new(action_count(action)?, duration, weight, pool_length, pool_count)?.into()
        }
        _ => {
            return Err(InputError::ArityMismatch {
                activity,
                expected: activity.arity(),
                actual: values.len(),
            })
        }
    };

    Ok(workout)
}
