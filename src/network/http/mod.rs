//! Blocking HTTP exchange executor.
//!
//! The connection here is not a raw byte pipe: it is an open, caller
//! configured request/response channel to an HTTP endpoint. Method, URL,
//! headers and deadlines are all settled before the exchange starts; the
//! connection object owns the wire framing and exposes only the pieces the
//! executor needs, which the [`Exchange`] trait captures.

use heapless::String;

use crate::network::{Connection, Read, Write};

pub mod client;

pub use client::{Client, ResponseHandler};

/// The single status code routed to [`ResponseHandler::on_success`].
///
/// Every other status, including the rest of the 2xx family, is routed to
/// [`ResponseHandler::on_error`].
pub const OK: u16 = 200;

/// Maximum length of a response reason phrase.
pub const MAX_STATUS_MESSAGE_LEN: usize = 64;

/// An open, caller-configured HTTP exchange.
///
/// Writing through [`Write`](crate::network::Write) feeds the request body;
/// reading through [`Read`](crate::network::Read) yields the response body
/// once [`Exchange::status_code`] has returned. The exchange is one-shot:
/// after [`Disconnect::disconnect`](crate::network::Disconnect::disconnect)
/// the channel is gone.
pub trait Exchange: Connection {
    /// Complete the request side of the exchange.
    ///
    /// Called once the body has been fully written and flushed; no writes may
    /// follow. Implementations typically half-close the stream or finish the
    /// request framing here.
    fn end_request(&mut self) -> Result<(), <Self as Write>::Error>;

    /// Block until the response status line is available and return the
    /// status code.
    fn status_code(&mut self) -> Result<u16, <Self as Read>::Error>;

    /// The reason phrase from the status line, if the server sent one.
    fn status_message(&mut self) -> Option<String<MAX_STATUS_MESSAGE_LEN>>;
}
