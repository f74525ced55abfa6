use std::sync::{Arc, Mutex};

use futures_util::{SinkExt, StreamExt};
use tokio_tungstenite::tungstenite::protocol::CloseFrame;
use tokio_tungstenite::tungstenite::Message;

use gemini_live_types::messages::{
    LiveFunctionResponse, ServerContent, ServerMessage, ToolCall, ToolCallCancellation,
};
use gemini_live_types::session::LiveConfig;
use gemini_live_types::{Blob, ClientMessage, DecodeError};

use crate::error::{LiveError, SequenceError};

mod codec;
mod config;
mod consts;
mod utils;

pub use config::{Config, ConfigBuilder};

pub type EventsRx = tokio::sync::broadcast::Receiver<SessionEvent>;
type EventsTx = tokio::sync::broadcast::Sender<SessionEvent>;
type OutboundTx = tokio::sync::mpsc::Sender<Outbound>;

/// Session lifecycle. `Failed` and `Closed` are terminal; a new session must
/// be established from scratch after either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Connecting,
    AwaitingSetupAck,
    Ready,
    Closed,
    Failed,
}

/// Events surfaced to subscribers, in arrival order.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A decoded server content message: model turn parts, turn completion,
    /// or an interruption signal.
    Content(ServerContent),
    /// The server asks the client to execute functions and reply with a
    /// correlated tool response.
    ToolCall(ToolCall),
    /// Previously issued tool calls should be abandoned. Advisory: a late
    /// tool response is still transmitted if the caller sends one.
    ToolCallCancellation(ToolCallCancellation),
    /// The transport failed; the session is terminal.
    TransportError(String),
    /// The channel closed; the session is terminal.
    Closed {
        code: Option<u16>,
        reason: Option<String>,
    },
}

#[derive(Debug, Clone)]
enum Readiness {
    Pending,
    Ready,
    Failed(String),
}

#[derive(Debug, PartialEq)]
enum Outbound {
    Frame(String),
    Close,
}

struct Shared {
    state: Mutex<State>,
    ready_tx: tokio::sync::watch::Sender<Readiness>,
    events_tx: EventsTx,
    outbound_tx: OutboundTx,
}

impl Shared {
    fn state(&self) -> State {
        self.state.lock().map(|state| *state).unwrap_or(State::Failed)
    }

    fn set_state(&self, next: State) {
        if let Ok(mut state) = self.state.lock() {
            *state = next;
        }
    }

    /// Moves to a terminal state, returning false if the session already
    /// reached one. Ensures terminal side effects run exactly once.
    fn enter_terminal(&self, next: State) -> bool {
        match self.state.lock() {
            Ok(mut state) => {
                if matches!(*state, State::Closed | State::Failed) {
                    false
                } else {
                    *state = next;
                    true
                }
            }
            Err(_) => false,
        }
    }

    fn ingest(&self, decoded: Result<serde_json::Value, DecodeError>) {
        let value = match decoded {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("dropping frame that could not be decoded: {}", e);
                return;
            }
        };
        let message = match ServerMessage::from_value(&value) {
            Ok(message) => message,
            Err(e) => {
                tracing::error!("dropping invalid frame: {}, value => {:?}", e, value);
                return;
            }
        };
        self.dispatch(message);
    }

    fn dispatch(&self, message: ServerMessage) {
        match self.state() {
            State::AwaitingSetupAck => match message {
                ServerMessage::SetupComplete(_) => {
                    self.set_state(State::Ready);
                    let _ = self.ready_tx.send(Readiness::Ready);
                    tracing::info!("setup complete");
                }
                other => {
                    // the protocol does not emit content before setup
                    // completes, so receipt here is drift, not an error
                    tracing::debug!("ignoring message before setup completed: {:?}", other);
                }
            },
            State::Ready => match message {
                ServerMessage::SetupComplete(_) => {
                    tracing::debug!("ignoring duplicate setupComplete");
                }
                ServerMessage::ServerContent(content) => {
                    self.publish(SessionEvent::Content(content));
                }
                ServerMessage::ToolCall(call) => {
                    self.publish(SessionEvent::ToolCall(call));
                }
                ServerMessage::ToolCallCancellation(cancellation) => {
                    self.publish(SessionEvent::ToolCallCancellation(cancellation));
                }
            },
            state => {
                tracing::debug!("dropping message received in state {:?}", state);
            }
        }
    }

    fn publish(&self, event: SessionEvent) {
        if self.events_tx.send(event).is_err() {
            tracing::debug!("no active subscribers for session event");
        }
    }

    fn reject_pending_ready(&self, reason: &str) {
        if matches!(&*self.ready_tx.borrow(), Readiness::Pending) {
            let _ = self.ready_tx.send(Readiness::Failed(reason.to_string()));
        }
    }

    fn transport_failed(&self, reason: &str) {
        if !self.enter_terminal(State::Failed) {
            return;
        }
        tracing::error!("transport error: {}", reason);
        self.reject_pending_ready(reason);
        self.publish(SessionEvent::TransportError(reason.to_string()));
        let _ = self.outbound_tx.try_send(Outbound::Close);
    }

    fn transport_closed(&self, frame: Option<CloseFrame<'_>>) {
        if !self.enter_terminal(State::Closed) {
            return;
        }
        let code = frame.as_ref().map(|f| u16::from(f.code));
        let reason = frame
            .as_ref()
            .map(|f| f.reason.to_string())
            .filter(|reason| !reason.is_empty());
        tracing::info!("connection closed, code: {:?}, reason: {:?}", code, reason);
        self.reject_pending_ready("connection closed before setup completed");
        self.publish(SessionEvent::Closed { code, reason });
        let _ = self.outbound_tx.try_send(Outbound::Close);
    }
}

/// One handshake-then-stream lifecycle over a single channel. Sessions are
/// independent: no state is shared between instances.
pub struct Session {
    shared: Arc<Shared>,
    outbound_tx: OutboundTx,
    ready_rx: tokio::sync::watch::Receiver<Readiness>,
    send_handle: tokio::task::JoinHandle<()>,
    recv_handle: tokio::task::JoinHandle<()>,
}

impl Session {
    /// Resolves once the server acknowledges setup, or fails if the session
    /// reaches a terminal state first. Multiple callers may wait; the result
    /// never changes after the first resolution.
    pub async fn ready(&self) -> Result<(), LiveError> {
        let mut ready_rx = self.ready_rx.clone();
        let readiness = ready_rx
            .wait_for(|readiness| !matches!(readiness, Readiness::Pending))
            .await
            .map_err(|_| LiveError::ConnectionClosed)?;
        match &*readiness {
            Readiness::Failed(reason) => Err(LiveError::SetupFailed(reason.clone())),
            _ => Ok(()),
        }
    }

    /// Validates and transmits one outgoing message. Fails without sending
    /// anything if the session is not ready or the message is a second setup.
    pub async fn send(&self, message: ClientMessage) -> Result<(), LiveError> {
        if matches!(message, ClientMessage::Setup(_)) {
            return Err(SequenceError::SetupAlreadySent.into());
        }
        let state = self.shared.state();
        if state != State::Ready {
            return Err(SequenceError::NotReady(state).into());
        }
        let text = serde_json::to_string(&message).map_err(LiveError::Serialize)?;
        self.outbound_tx
            .send(Outbound::Frame(text))
            .await
            .map_err(|_| LiveError::ConnectionClosed)
    }

    /// Sends a complete single-part text turn from the user.
    pub async fn send_text_turn(&self, text: &str) -> Result<(), LiveError> {
        self.send(ClientMessage::text_turn(text)).await
    }

    /// Sends one chunk of streamed media as a self-contained message.
    pub async fn send_realtime_chunk(&self, chunk: Blob) -> Result<(), LiveError> {
        self.send(ClientMessage::realtime_input(chunk)).await
    }

    /// Replies to a tool call with correlated function responses.
    pub async fn send_tool_response(
        &self,
        responses: Vec<LiveFunctionResponse>,
    ) -> Result<(), LiveError> {
        self.send(ClientMessage::tool_response(responses)).await
    }

    pub fn subscribe(&self) -> EventsRx {
        self.shared.events_tx.subscribe()
    }

    pub fn state(&self) -> State {
        self.shared.state()
    }

    /// Requests a client-initiated close of the underlying channel.
    pub async fn close(&self) -> Result<(), LiveError> {
        self.outbound_tx
            .send(Outbound::Close)
            .await
            .map_err(|_| LiveError::ConnectionClosed)
    }

    /// Waits for the session's transport tasks to finish.
    pub async fn join(self) {
        let _ = self.recv_handle.await;
        let _ = self.send_handle.await;
    }
}

pub async fn connect(config: Config, live_config: LiveConfig) -> Result<Session, LiveError> {
    connect_with_capacity(consts::DEFAULT_CAPACITY, config, live_config).await
}

pub async fn connect_with_capacity(
    capacity: usize,
    config: Config,
    live_config: LiveConfig,
) -> Result<Session, LiveError> {
    let request = utils::build_request(&config)?;
    let (ws_stream, _) = tokio_tungstenite::connect_async(request).await?;
    tracing::debug!("connected, sending setup for model {}", live_config.model());
    let (mut write, mut read) = ws_stream.split();

    let (outbound_tx, mut outbound_rx) = tokio::sync::mpsc::channel(capacity);
    let (events_tx, _) = tokio::sync::broadcast::channel(capacity);
    let (ready_tx, ready_rx) = tokio::sync::watch::channel(Readiness::Pending);

    let shared = Arc::new(Shared {
        state: Mutex::new(State::Connecting),
        ready_tx,
        events_tx,
        outbound_tx: outbound_tx.clone(),
    });

    // the transport is open: the one setup message goes out before anything
    // else can be queued
    let setup =
        serde_json::to_string(&ClientMessage::Setup(live_config)).map_err(LiveError::Serialize)?;
    write.send(Message::Text(setup)).await?;
    shared.set_state(State::AwaitingSetupAck);

    let writer_shared = shared.clone();
    let send_handle = tokio::spawn(async move {
        while let Some(outbound) = outbound_rx.recv().await {
            match outbound {
                Outbound::Frame(text) => {
                    if let Err(e) = write.send(Message::Text(text)).await {
                        writer_shared.transport_failed(&e.to_string());
                        break;
                    }
                }
                Outbound::Close => {
                    if let Err(e) = write.send(Message::Close(None)).await {
                        tracing::debug!("close frame was not delivered: {}", e);
                    }
                    break;
                }
            }
        }
    });

    let reader_shared = shared.clone();
    let recv_handle = tokio::spawn(async move {
        while let Some(message) = read.next().await {
            let message = match message {
                Err(e) => {
                    reader_shared.transport_failed(&e.to_string());
                    break;
                }
                Ok(message) => message,
            };
            match message {
                Message::Text(text) => reader_shared.ingest(codec::decode_text(&text)),
                Message::Binary(bytes) => reader_shared.ingest(codec::decode_binary(bytes)),
                Message::Close(frame) => {
                    reader_shared.transport_closed(frame);
                    break;
                }
                _ => {}
            }
        }
        reader_shared.transport_closed(None);
    });

    Ok(Session {
        shared,
        outbound_tx,
        ready_rx,
        send_handle,
        recv_handle,
    })
}
