pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ChatError, ConfigError};
pub use events::InboundEvent;
pub use id::{new_correlation_id, new_id, SessionId};
pub use types::{ModelId, UnknownModelId};

pub type Result<T> = std::result::Result<T, ChatError>;
