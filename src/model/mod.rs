pub mod attendance;
pub mod message;
