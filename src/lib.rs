// Library interface for TrainStats modules
// Integration tests and the CLI binary go through these exports

pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod logging;
pub mod models;
pub mod package;
pub mod running;
pub mod summary;
pub mod swimming;
pub mod training;
pub mod walking;

// Re-export commonly used types for convenience
pub use models::{ActivityType, Session, WorkoutCode};
pub use training::{Training, Workout};
pub use running::Running;
pub use walking::SportsWalking;
pub use swimming::Swimming;
pub use summary::{MessageLocale, TrainingSummary};
pub use package::{build_workout, read_package, Package};
pub use export::ExportFormat;
pub use error::{InputError, TrainStatsError, Result};
pub use logging::{LogConfig, LogLevel, LogFormat};
