//! Mock exchange implementation for executor testing

use std::cell::RefCell;
use std::rc::Rc;

use heapless::{String, Vec};
use http_oneshot::network::error::Error;
use http_oneshot::network::http::{Exchange, MAX_STATUS_MESSAGE_LEN};
use http_oneshot::network::{Connection, Disconnect, Read, Write};

/// Which operation the mock should fail, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Nothing,
    Write,
    Flush,
    EndRequest,
    StatusCode,
    Read,
}

/// Everything the mock observed while the executor drove it.
///
/// Kept behind an `Rc` handle because the executor consumes the connection;
/// the handle is the only way for a test to look at the aftermath.
#[derive(Debug, Default)]
pub struct ExchangeLog {
    /// Raw bytes written as the request body.
    pub writes: Vec<u8, 1024>,
    /// Number of flush calls.
    pub flushes: usize,
    /// Whether the request side was closed.
    pub request_ended: bool,
    /// Snapshot of (bytes written, request ended) taken when the status line
    /// was first read.
    pub at_status: Option<(usize, bool)>,
    /// Number of disconnect calls.
    pub released: u32,
}

/// Scripted exchange for driving the executor without a network.
pub struct MockExchange {
    status_code: u16,
    status_message: Option<&'static str>,
    body: &'static [u8],
    read_pos: usize,
    fail_on: FailOn,
    log: Rc<RefCell<ExchangeLog>>,
}

impl MockExchange {
    /// Create a mock scripted to return the given status, reason phrase and
    /// response body, together with the observation handle.
    pub fn new(
        status_code: u16,
        status_message: Option<&'static str>,
        body: &'static [u8],
    ) -> (Self, Rc<RefCell<ExchangeLog>>) {
        Self::scripted(status_code, status_message, body, FailOn::Nothing)
    }

    /// Create a mock that fails the given operation. The exchange is
    /// otherwise scripted as a bare `200 OK`.
    pub fn failing(fail_on: FailOn) -> (Self, Rc<RefCell<ExchangeLog>>) {
        Self::scripted(200, None, b"", fail_on)
    }

    fn scripted(
        status_code: u16,
        status_message: Option<&'static str>,
        body: &'static [u8],
        fail_on: FailOn,
    ) -> (Self, Rc<RefCell<ExchangeLog>>) {
        let log = Rc::new(RefCell::new(ExchangeLog::default()));
        let mock = Self {
            status_code,
            status_message,
            body,
            read_pos: 0,
            fail_on,
            log: Rc::clone(&log),
        };
        (mock, log)
    }
}

impl Read for MockExchange {
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.fail_on == FailOn::Read {
            return Err(Error::ReadError);
        }
        if self.read_pos >= self.body.len() {
            return Ok(0);
        }

        let remaining = self.body.len() - self.read_pos;
        let to_read = core::cmp::min(buf.len(), remaining);

        buf[..to_read].copy_from_slice(&self.body[self.read_pos..self.read_pos + to_read]);
        self.read_pos += to_read;

        Ok(to_read)
    }
}

impl Write for MockExchange {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if self.fail_on == FailOn::Write {
            return Err(Error::WriteError);
        }
        self.log
            .borrow_mut()
            .writes
            .extend_from_slice(buf)
            .map_err(|_| Error::WriteError)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        if self.fail_on == FailOn::Flush {
            return Err(Error::WriteError);
        }
        self.log.borrow_mut().flushes += 1;
        Ok(())
    }
}

impl Disconnect for MockExchange {
    type Error = Error;

    fn disconnect(self) -> Result<(), Self::Error> {
        self.log.borrow_mut().released += 1;
        Ok(())
    }
}

impl Connection for MockExchange {}

impl Exchange for MockExchange {
    fn end_request(&mut self) -> Result<(), Error> {
        if self.fail_on == FailOn::EndRequest {
            return Err(Error::WriteError);
        }
        self.log.borrow_mut().request_ended = true;
        Ok(())
    }

    fn status_code(&mut self) -> Result<u16, Error> {
        if self.fail_on == FailOn::StatusCode {
            return Err(Error::ReadError);
        }
        let mut log = self.log.borrow_mut();
        if log.at_status.is_none() {
            log.at_status = Some((log.writes.len(), log.request_ended));
        }
        Ok(self.status_code)
    }

    fn status_message(&mut self) -> Option<String<MAX_STATUS_MESSAGE_LEN>> {
        self.status_message.map(|m| String::try_from(m).unwrap())
    }
}
