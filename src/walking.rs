//! Sports walking workouts
//!
//! The speed-dependent part of the calorie formula uses the squared mean
//! speed floor-divided by the walker's height. Replacing the floor division
//! with a true division changes every reported value.

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::models::{positive, ActivityType, Session, MINUTES_IN_HOUR};
use crate::training::{floor_div, Training};

/// Weight multiplier of the walking calorie formula
pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;

/// Speed/height multiplier of the walking calorie formula
pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Sports walking workout measured in steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WalkingFields")]
pub struct SportsWalking {
    session: Session,

    /// Walker height in centimetres
    height_cm: f64,
}

#[derive(Deserialize)]
struct WalkingFields {
    session: Session,
    height_cm: f64,
}

impl TryFrom<WalkingFields> for SportsWalking {
    type Error = InputError;

    fn try_from(fields: WalkingFields) -> Result<Self, Self::Error> {
        Ok(Self {
            session: fields.session,
            height_cm: positive("height_cm", fields.height_cm)?,
        })
    }
}

impl SportsWalking {
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self, InputError> {
        Ok(Self {
            session: Session::new(action_count, duration_hours, weight_kg)?,
            height_cm: positive("height_cm", height_cm)?,
        })
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Squared mean speed floor-divided by height
    pub fn speed_height_ratio(&self) -> f64 {
        floor_div(self.mean_speed().powi(2), self.height_cm)
    }
}

impl Training for SportsWalking {
    fn activity(&self) -> ActivityType {
        ActivityType::SportsWalking
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn spent_calories(&self) -> f64 {
        let weight = self.session.weight_kg();
        (CALORIES_WEIGHT_MULTIPLIER * weight
            + self.speed_height_ratio() * CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * self.session.duration_hours()
            * MINUTES_IN_HOUR
    }
}
