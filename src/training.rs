//! Shared computation contract for all workouts
//!
//! [`Training`] supplies the default distance and speed formulas and leaves
//! the calorie formula to each activity. [`Workout`] is the closed set of
//! activities the factory can produce.

use serde::{Deserialize, Serialize};

use crate::models::{ActivityType, Session, M_IN_KM};
use crate::running::Running;
use crate::summary::TrainingSummary;
use crate::swimming::Swimming;
use crate::walking::SportsWalking;

/// Distance, speed and calorie computations of a completed workout
pub trait Training {
    /// Activity this workout belongs to
    fn activity(&self) -> ActivityType;

    /// Measurements common to every activity
    fn session(&self) -> &Session;

    /// Distance in kilometres
    fn distance(&self) -> f64 {
        f64::from(self.session().action_count()) * self.activity().step_length_m() / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.session().duration_hours()
    }

    /// Spent energy in kilocalories
    fn spent_calories(&self) -> f64;

    /// Collect all computed metrics into a summary
    fn summary(&self) -> TrainingSummary {
        let summary = TrainingSummary::new(
            self.activity().label(),
            self.session().duration_hours(),
            self.distance(),
            self.mean_speed(),
            self.spent_calories(),
        );

        tracing::trace!(
            activity = %self.activity(),
            distance = summary.distance,
            speed = summary.speed,
            calories = summary.calories,
            "Computed training summary"
        );

        summary
    }
}

/// A workout of any supported activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "activity")]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(w) => w,
            Workout::SportsWalking(w) => w,
            Workout::Swimming(w) => w,
        }
    }
}

impl Training for Workout {
    fn activity(&self) -> ActivityType {
        self.as_training().activity()
    }

    fn session(&self) -> &Session {
        self.as_training().session()
    }

    fn distance(&self) -> f64 {
        self.as_training().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.as_training().mean_speed()
    }

    fn spent_calories(&self) -> f64 {
        self.as_training().spent_calories()
    }
}

impl From<Running> for Workout {
    fn from(value: Running) -> Self {
        Workout::Running(value)
    }
}

impl From<SportsWalking> for Workout {
    fn from(value: SportsWalking) -> Self {
        Workout::SportsWalking(value)
    }
}

impl From<Swimming> for Workout {
    fn from(value: Swimming) -> Self {
        Workout::Swimming(value)
    }
}

/// Floating-point floor division with the sign rules of a floored modulo.
///
/// Matches `a // b` on floats: the quotient is derived from the remainder
/// rather than from `(a / b).floor()`, which can be off by one when `a / b`
/// rounds up to an integer.
pub(crate) fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && ((b < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floor = div.floor();
    if div - floor > 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running() -> Workout {
        Running::new(15000, 1.0, 75.0).unwrap().into()
    }

    #[test]
    fn test_workout_delegates_to_variant() {
        let workout = running();
        assert_eq!(workout.activity(), ActivityType::Running);
        assert!((workout.distance() - 9.75).abs() < 1e-9);
        assert!((workout.mean_speed() - 9.75).abs() < 1e-9);
        assert!((workout.spent_calories() - 699.75).abs() < 1e-9);
    }

    #[test]
    fn test_summary_uses_activity_label() {
        let summary = running().summary();
        assert_eq!(summary.training_type, "Running");
        assert_eq!(summary.duration, 1.0);
    }

    #[test]
    fn test_workout_serialization() {
        let workout: Workout = Swimming::new(720, 1.0, 80.0, 25.0, 40.0).unwrap().into();
        let json = serde_json::to_string(&workout).unwrap();
        assert!(json.contains("\"activity\":\"Swimming\""));

        let restored: Workout = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, workout);
    }

    #[test]
    fn test_deserialization_rejects_degenerate_workouts() {
        let zero_duration = r#"{"activity":"Running","session":{"action_count":15000,"duration_hours":0.0,"weight_kg":-5.0}}"#;
        assert!(serde_json::from_str::<Workout>(zero_duration).is_err());

        let flat_walker = r#"{"activity":"SportsWalking","session":{"action_count":9000,"duration_hours":1.0,"weight_kg":75.0},"height_cm":0.0}"#;
        let err = serde_json::from_str::<Workout>(flat_walker).unwrap_err();
        assert!(err.to_string().contains("height_cm"));

        let no_pool = r#"{"activity":"Swimming","session":{"action_count":720,"duration_hours":1.0,"weight_kg":80.0},"pool_length_m":25.0,"pool_count":-1.0}"#;
        assert!(serde_json::from_str::<Workout>(no_pool).is_err());
    }

    #[test]
    fn test_floor_div() {
        assert_eq!(floor_div(34.2225, 180.0), 0.0);
        assert_eq!(floor_div(7.0, 2.0), 3.0);
        assert_eq!(floor_div(-7.0, 2.0), -4.0);
        assert_eq!(floor_div(7.0, -2.0), -4.0);
        assert_eq!(floor_div(360.0, 180.0), 2.0);
        // 1 / 0.1 rounds to 10.0 but 0.1 fits only nine times
        assert_eq!(floor_div(1.0, 0.1), 9.0);
    }

    // Property-based tests using proptest
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_distance_follows_step_length(
            actions in 0u32..100_000u32,
            duration in 0.1f64..5.0f64,
            weight in 30.0f64..150.0f64,
        ) {
            let run = Running::new(actions, duration, weight).unwrap();
            let swim = Swimming::new(actions, duration, weight, 25.0, 10.0).unwrap();

            prop_assert_eq!(run.distance(), f64::from(actions) * 0.65 / 1000.0);
            prop_assert_eq!(swim.distance(), f64::from(actions) * 1.38 / 1000.0);
            prop_assert_eq!(run.mean_speed(), run.distance() / duration);
        }

        #[test]
        fn test_swimming_speed_ignores_strokes(
            actions in 0u32..100_000u32,
            duration in 0.1f64..5.0f64,
            pool_length in 10.0f64..60.0f64,
            pool_count in 0.0f64..200.0f64,
        ) {
            let swim = Swimming::new(actions, duration, 70.0, pool_length, pool_count).unwrap();
            prop_assert_eq!(swim.mean_speed(), pool_length * pool_count / 1000.0 / duration);
        }

        #[test]
        fn test_calories_grow_with_speed(
            actions in 0u32..50_000u32,
            extra in 1u32..50_000u32,
            duration in 0.1f64..5.0f64,
            weight in 30.0f64..150.0f64,
            height in 120.0f64..220.0f64,
        ) {
            let slow = Running::new(actions, duration, weight).unwrap();
            let fast = Running::new(actions + extra, duration, weight).unwrap();
            prop_assert!(fast.spent_calories() >= slow.spent_calories());

            let slow = SportsWalking::new(actions, duration, weight, height).unwrap();
            let fast = SportsWalking::new(actions + extra, duration, weight, height).unwrap();
            prop_assert!(fast.speed_height_ratio() >= slow.speed_height_ratio());
            prop_assert!(fast.spent_calories() >= slow.spent_calories());

            let slow = Swimming::new(0, duration, weight, 25.0, f64::from(actions)).unwrap();
            let fast = Swimming::new(0, duration, weight, 25.0, f64::from(actions + extra)).unwrap();
            prop_assert!(fast.spent_calories() >= slow.spent_calories());
        }

        #[test]
        fn test_render_always_three_decimals(
            duration in 0.001f64..1000.0f64,
            actions in 0u32..1_000_000u32,
            weight in 1.0f64..500.0f64,
        ) {
            let rendered = Running::new(actions, duration, weight).unwrap().summary().render();
            let numbers: Vec<&str> = rendered
                .split(|c: char| c != '.' && c != '-' && !c.is_ascii_digit())
                .filter(|part| part.chars().any(|c| c.is_ascii_digit()))
                .collect();

            prop_assert_eq!(numbers.len(), 4);
            for number in numbers {
                let decimals = number.split('.').nth(1).unwrap_or("");
                prop_assert_eq!(decimals.len(), 3);
            }
        }
    }
}
