use crate::network::error::Error;
use crate::network::{Disconnect, Read, Write};

use super::{Exchange, OK};

/// Handles the outcome of an exchange.
///
/// A two-variant capability supplied by the caller: exactly one of the two
/// methods is invoked per executed exchange.
pub trait ResponseHandler {
    /// Called when the exchange finishes with an [`OK`](super::OK) status.
    ///
    /// The stream is closed by the client after the method returns, so the
    /// body must be fully consumed in this method itself.
    fn on_success<R: Read>(&mut self, body: &mut R);

    /// Called when the exchange finishes with any other status.
    ///
    /// `message` is the reason phrase from the status line, if any.
    fn on_error(&mut self, status_code: u16, message: Option<&str>);
}

/// A client for executing a single HTTP exchange synchronously.
///
/// The client takes exclusive ownership of the connection for the duration of
/// one write-then-read cycle and releases it on every exit path. This must
/// never be called from a UI or event-loop thread.
pub struct Client<C: Exchange> {
    connection: C,
}

impl<C: Exchange> Client<C> {
    /// Create a client around an open, fully configured connection.
    pub fn new(connection: C) -> Self {
        Self { connection }
    }

    /// Execute the exchange on the underlying connection.
    ///
    /// If `body` is present it is written fully, flushed, and the request
    /// side is closed before the status is read. A `200 OK` status hands the
    /// response stream to [`ResponseHandler::on_success`]; every other status
    /// goes to [`ResponseHandler::on_error`] together with the reason phrase,
    /// if any. Transport failures while writing or reading are returned as
    /// [`Error`] and never routed through the handler.
    ///
    /// The connection is disconnected exactly once before this returns,
    /// whichever path is taken. Consumes the client: the exchange is one-shot
    /// and the connection is not reusable afterwards.
    pub fn execute<H: ResponseHandler>(
        self,
        body: Option<&[u8]>,
        handler: &mut H,
    ) -> Result<(), Error> {
        let mut connection = self.connection;
        let result = exchange(&mut connection, body, handler);
        // Released exactly once, on every exit path.
        let _ = connection.disconnect();
        result
    }
}

/// Fallible part of the exchange; the caller releases the connection
/// regardless of the result.
fn exchange<C, H>(connection: &mut C, body: Option<&[u8]>, handler: &mut H) -> Result<(), Error>
where
    C: Exchange,
    H: ResponseHandler,
{
    if let Some(body) = body {
        // Write::write may accept fewer bytes than offered.
        let mut written = 0;
        while written < body.len() {
            match connection.write(&body[written..]) {
                Ok(0) => return Err(Error::WriteError),
                Ok(n) => written += n,
                Err(_) => return Err(Error::WriteError),
            }
        }
        connection.flush().map_err(|_| Error::WriteError)?;
        connection.end_request().map_err(|_| Error::WriteError)?;
    }

    let status_code = connection.status_code().map_err(|_| Error::ReadError)?;
    if status_code != OK {
        let message = connection.status_message();
        handler.on_error(status_code, message.as_deref());
    } else {
        handler.on_success(connection);
    }

    Ok(())
}
