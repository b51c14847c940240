//! Running workouts
//!
//! Energy expenditure grows linearly with mean speed and is scaled by body
//! weight and duration in minutes.

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::models::{ActivityType, Session, MINUTES_IN_HOUR, M_IN_KM};
use crate::training::Training;

/// Speed multiplier of the running calorie formula
pub const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;

/// Speed shift of the running calorie formula
pub const CALORIES_SPEED_SHIFT: f64 = 20.0;

/// Running workout measured in steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Running {
    session: Session,
}

impl Running {
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Result<Self, InputError> {
        Ok(Self {
            session: Session::new(action_count, duration_hours, weight_kg)?,
        })
    }
}

impl Training for Running {
    fn activity(&self) -> ActivityType {
        ActivityType::Running
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn spent_calories(&self) -> f64 {
        (CALORIES_SPEED_MULTIPLIER * self.mean_speed() - CALORIES_SPEED_SHIFT)
            * self.session.weight_kg()
            / M_IN_KM
            * self.session.duration_hours()
            * MINUTES_IN_HOUR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_run() {
        let run = Running::new(15000, 1.0, 75.0).unwrap();

        assert!((run.distance() - 9.75).abs() < 1e-9);
        assert!((run.mean_speed() - 9.75).abs() < 1e-9);
        assert!((run.spent_calories() - 699.75).abs() < 1e-9);
    }

    #[test]
    fn test_speed_scales_with_duration() {
        let run = Running::new(10000, 0.5, 70.0).unwrap();

        assert!((run.distance() - 6.5).abs() < 1e-9);
        assert!((run.mean_speed() - 13.0).abs() < 1e-9);
        // (18 * 13 - 20) * 70 / 1000 * 0.5 * 60
        assert!((run.spent_calories() - 449.4).abs() < 1e-9);
    }

    #[test]
    fn test_slow_run_has_negative_calories() {
        // Below 20/18 km/h the formula goes negative; it is reported as is
        let run = Running::new(100, 1.0, 70.0).unwrap();
        assert!(run.spent_calories() < 0.0);
    }

    #[test]
    fn test_rejects_zero_duration() {
        let err = Running::new(15000, 0.0, 75.0).unwrap_err();
        assert!(matches!(
            err,
            InputError::InvalidValue {
                field: "duration_hours",
                ..
            }
        ));
    }
}
