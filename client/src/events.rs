//! # Client Events
//!
//! Session lifecycle notifications for the UI layer.
//!
//! The API client never navigates anywhere itself. When a session ends
//! unrecoverably it publishes [`ClientEvent::SessionExpired`] on an
//! `async_channel`; whatever owns the UI listens and routes the user back to
//! the unauthenticated home screen.
//!
//! ```rust,no_run
//! use restaurant_client::events::{event_channel, ClientEvent};
//!
//! # async fn demo() {
//! let (tx, rx) = event_channel();
//! // hand `tx` to ApiClient::builder(..).events(tx)
//! while let Ok(event) = rx.recv().await {
//!     if let ClientEvent::SessionExpired { .. } = event {
//!         // navigate to the landing page
//!     }
//! }
//! # }
//! ```

use async_channel::{Receiver, Sender};

/// Events emitted by the API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    /// Login or registration stored a fresh token pair
    LoggedIn { user_id: u64 },
    /// Access token was refreshed after a 401
    TokensRefreshed,
    /// Refresh failed; stored tokens are cleared and the user must sign in again
    SessionExpired { reason: String },
    /// User logged out
    LoggedOut,
}

/// Sending half handed to the client.
pub type EventSender = Sender<ClientEvent>;

/// Receiving half kept by the UI.
pub type EventReceiver = Receiver<ClientEvent>;

/// Create an unbounded event channel.
pub fn event_channel() -> (EventSender, EventReceiver) {
    async_channel::unbounded()
}
