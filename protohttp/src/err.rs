use crate::schema::PayloadKind;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required input was missing or empty.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// The status code has no counterpart in the schema.
    #[error("unsupported HTTP status code: {0}")]
    UnsupportedStatus(u16),
    /// The method token has no counterpart in the schema.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
    /// There was no message to serialize.
    #[error("{0} is nil")]
    NilInput(&'static str),
    /// The outer envelope could not be parsed.
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(#[source] prost::DecodeError),
    /// The decompressed message could not be parsed.
    #[error("malformed payload: {0}")]
    MalformedPayload(#[source] prost::DecodeError),
    /// An uncompressed envelope carried no message.
    #[error("envelope carries no message")]
    MissingPayload,
    /// The envelope holds a request where a response was expected, or the reverse.
    #[error("expected a {expected:?} payload, found a {found:?}")]
    PayloadKindMismatch {
        expected: PayloadKind,
        found: PayloadKind,
    },
    /// The envelope encoding tag is not one we know.
    #[error("unknown encoding: {0}")]
    UnknownEncoding(i32),
    /// The compressor failed, or `decompress` was given a bad stream.
    #[error("compression failed: {0}")]
    Compression(#[source] std::io::Error),
    /// A compressed envelope held a blob that would not inflate.
    #[error("decompression failed: {0}")]
    Decompression(#[source] std::io::Error),
}

pub type Res<T> = Result<T, Error>;
