pub mod errors;
pub mod messages;

pub use errors::UnknownMessageError;
pub use messages::Message;
