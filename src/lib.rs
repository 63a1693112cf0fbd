//! # http-oneshot - Blocking HTTP exchange executor
//!
//! A small Rust library that executes a single HTTP request/response exchange
//! over a connection the caller has already opened and configured. It is
//! designed for embedded systems and supports `no_std` environments.
//!
//! The executor does exactly one thing: write the request body (if any), block
//! until the response status is available, hand the outcome to a
//! caller-supplied handler, and release the connection. It never opens
//! connections, never retries, and never spawns threads. Everything around the
//! exchange (method, URL, headers, TLS, deadlines, background dispatch) is
//! the caller's responsibility and must be settled on the connection object
//! before the exchange starts.
//!
//! ## Features
//!
//! - **Connection agnostic**: works with any transport implementing the
//!   [`network`] traits
//! - **Two-path outcome**: response body stream on a `200 OK` status, status
//!   code plus optional reason phrase on everything else
//! - **Guaranteed release**: the connection is disconnected exactly once on
//!   every exit path, including I/O failures
//! - Fixed-size buffers for predictable memory usage
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! http-oneshot = "0.1.0"
//! ```
//!
//! ### Executing an exchange
//!
//! ```rust,no_run
//! use http_oneshot::network::Read;
//! use http_oneshot::network::http::{Client, ResponseHandler};
//! # use http_oneshot::network::http::{Exchange, MAX_STATUS_MESSAGE_LEN};
//! # use http_oneshot::network::{Connection, Disconnect, Write};
//! # struct MockExchange;
//! # impl http_oneshot::network::Read for MockExchange {
//! #     type Error = ();
//! #     fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> { Ok(0) }
//! # }
//! # impl Write for MockExchange {
//! #     type Error = ();
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl Disconnect for MockExchange {
//! #     type Error = ();
//! #     fn disconnect(self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl Connection for MockExchange {}
//! # impl Exchange for MockExchange {
//! #     fn end_request(&mut self) -> Result<(), ()> { Ok(()) }
//! #     fn status_code(&mut self) -> Result<u16, ()> { Ok(200) }
//! #     fn status_message(&mut self) -> Option<heapless::String<MAX_STATUS_MESSAGE_LEN>> { None }
//! # }
//!
//! struct Collector;
//!
//! impl ResponseHandler for Collector {
//!     fn on_success<R: Read>(&mut self, body: &mut R) {
//!         // The stream is only valid inside this method; consume it here.
//!         let mut buf = [0u8; 128];
//!         while let Ok(n) = body.read(&mut buf) {
//!             if n == 0 {
//!                 break;
//!             }
//!         }
//!     }
//!
//!     fn on_error(&mut self, status_code: u16, message: Option<&str>) {
//!         let _ = (status_code, message);
//!     }
//! }
//!
//! // An open, fully configured connection handed in by the caller.
//! let connection = MockExchange;
//! let client = Client::new(connection);
//!
//! // client.execute(Some(br#"{"hello":"world"}"#), &mut Collector)?;
//! ```
//!
//! ## Threading
//!
//! [`Client::execute`](network::http::Client::execute) blocks the calling
//! thread for the whole write-and-read cycle. It must never be called from a
//! UI or event-loop thread; dispatch it to a background execution context.
//! The executor itself provides no threading, queuing, or cancellation.
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, etc.)
//! - Linux-based IoT devices (Raspberry Pi, etc.)
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Network abstraction layer providing the connection traits and the HTTP
/// exchange executor.
///
/// Callers implement the connection traits for their transport, configure the
/// exchange out of band, and hand the open connection to
/// [`Client`](crate::network::http::Client) for a single request/response
/// cycle.
pub mod network;
