mod client;
mod error;

pub use gemini_live_types as types;

pub use client::{
    connect, connect_with_capacity, Config, ConfigBuilder, EventsRx, Session, SessionEvent, State,
};
pub use error::{LiveError, SequenceError};
