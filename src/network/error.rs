//! Common error types for network operations

/// A common error type for network operations.
///
/// This enum defines a set of common errors that can occur when driving an
/// exchange over a connection. It is designed to be simple and portable for
/// `no_std` environments.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// An operation was attempted on a connection that is not open.
    NotOpen,
    /// An error occurred while writing or finishing the request body.
    WriteError,
    /// An error occurred while reading the response status or body.
    ReadError,
    /// A timeout occurred. Deadlines are configured on the connection before
    /// the exchange begins, never by the executor.
    Timeout,
    /// The connection was closed by the peer mid-exchange.
    ConnectionClosed,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::NotOpen => defmt::write!(f, "NotOpen"),
            Error::WriteError => defmt::write!(f, "WriteError"),
            Error::ReadError => defmt::write!(f, "ReadError"),
            Error::Timeout => defmt::write!(f, "Timeout"),
            Error::ConnectionClosed => defmt::write!(f, "ConnectionClosed"),
        }
    }
}
