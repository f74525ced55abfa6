use thiserror::Error;

use crate::client::State;

/// A message was sent at a point in the session lifecycle where the protocol
/// does not allow it. Reported synchronously to the caller; nothing is
/// transmitted and session state is unaffected.
#[derive(Error, Debug)]
pub enum SequenceError {
    #[error("session is not ready to send, state: {0:?}")]
    NotReady(State),

    #[error("setup was already sent for this session")]
    SetupAlreadySent,
}

#[derive(Error, Debug)]
pub enum LiveError {
    #[error("protocol sequence error: {0}")]
    Sequence(#[from] SequenceError),

    #[error("transport error: {0}")]
    Transport(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("failed to serialize outgoing message: {0}")]
    Serialize(serde_json::Error),

    #[error("setup failed: {0}")]
    SetupFailed(String),

    #[error("connection closed")]
    ConnectionClosed,
}
