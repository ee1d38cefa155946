//! Domain reducers. Each module handles one slice of the message space and
//! returns `true` when it consumed the message.

pub mod chat;
pub mod dashboard;
pub mod deploy;
pub mod review;
pub mod session;
pub mod wizard;
