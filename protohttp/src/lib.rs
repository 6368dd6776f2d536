//
// License CC0: https://creativecommons.org/publicdomain/zero/1.0/
//

//! HTTP requests and responses in a compact binary envelope.
//!
//! A message is first converted from plain values (status code or method,
//! path, headers, optional body) into a Protocol Buffers message.  That is
//! serialized, and if the result is [`COMPRESSION_THRESHOLD`] bytes or more,
//! compressed with zlib.  Either way it is wrapped in an [`Envelope`] that says
//! which encoding was used and whether it holds a request or a response.
//!
//! ```
//! # fn main() -> Result<(), protohttp::Error> {
//! let resp = protohttp::response_to_protobuf(
//!     200,
//!     Some([("content-type", "application/json")]),
//!     Some(&b"{\"message\": \"Hello, World!\"}"[..]),
//! )?;
//! let buf = protohttp::serialize_response(&resp)?;
//! assert_eq!(protohttp::deserialize_response(&buf)?, resp);
//! # Ok(())
//! # }
//! ```

#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)] // Too lazy to document.

mod codec;
mod compress;
mod convert;
mod err;
mod schema;

#[cfg(feature = "decode")]
pub use codec::{deserialize_request, deserialize_response};
#[cfg(feature = "encode")]
pub use codec::{serialize_request, serialize_response};
pub use codec::COMPRESSION_THRESHOLD;
#[cfg(feature = "encode")]
pub use compress::compress;
#[cfg(feature = "decode")]
pub use compress::decompress;
pub use convert::{request_to_protobuf, response_to_protobuf};
pub use err::{Error, Res};
pub use schema::{
    envelope, Body, Envelope, Header, HttpMethod, HttpRequest, HttpResponse, HttpStatus,
    PayloadKind,
};
