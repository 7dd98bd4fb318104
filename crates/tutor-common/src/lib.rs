pub mod errors;
pub mod id;

pub use errors::{ConfigError, TutorError};
pub use id::SessionId;
