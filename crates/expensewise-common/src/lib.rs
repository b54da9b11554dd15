pub mod errors;
pub mod id;

pub use errors::{ConfigError, ExpenseWiseError};
pub use id::SessionId;
