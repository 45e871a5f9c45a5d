pub mod audio;
pub mod chart;
pub mod config;
pub mod error;
pub mod gameplay;
pub mod input;
pub mod time;

pub use chart::{Chart, ChartNote, NoteShape, NoteType};
pub use config::GameplayConfig;
pub use error::{ChartError, ConfigError};
pub use gameplay::session::{PlaySession, SessionContext};
