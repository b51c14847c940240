//! Swimming workouts
//!
//! Distance still follows the stroke count, but mean speed is derived from
//! pool geometry: pool length times the number of pool lengths swum.

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::models::{non_negative, positive, ActivityType, Session, M_IN_KM};
use crate::training::Training;

/// Speed shift of the swimming calorie formula
pub const CALORIES_SPEED_SHIFT: f64 = 1.1;

/// Weight multiplier of the swimming calorie formula
pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Pool swimming workout measured in strokes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SwimmingFields")]
pub struct Swimming {
    session: Session,

    /// Pool length in metres
    pool_length_m: f64,

    /// Number of pool lengths swum
    pool_count: f64,
}

#[derive(Deserialize)]
struct SwimmingFields {
    session: Session,
    pool_length_m: f64,
    pool_count: f64,
}

impl TryFrom<SwimmingFields> for Swimming {
    type Error = InputError;

    fn try_from(fields: SwimmingFields) -> Result<Self, Self::Error> {
        Ok(Self {
            session: fields.session,
            pool_length_m: positive("pool_length_m", fields.pool_length_m)?,
            pool_count: non_negative("pool_count", fields.pool_count)?,
        })
    }
}

impl Swimming {
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_count: f64,
    ) -> Result<Self, InputError> {
        Ok(Self {
            session: Session::new(action_count, duration_hours, weight_kg)?,
            pool_length_m: positive("pool_length_m", pool_length_m)?,
            pool_count: non_negative("pool_count", pool_count)?,
        })
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    pub fn pool_count(&self) -> f64 {
        self.pool_count
    }
}

impl Training for Swimming {
    fn activity(&self) -> ActivityType {
        ActivityType::Swimming
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn mean_speed(&self) -> f64 {
        self.pool_length_m * self.pool_count / M_IN_KM / self.session.duration_hours()
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + CALORIES_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.session.weight_kg()
    }
}
