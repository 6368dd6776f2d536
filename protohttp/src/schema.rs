//! Protocol Buffers messages for HTTP requests, responses and the envelope
//! that carries them.
//!
//! ```text
//! message Header       { string key = 1; string value = 2; }
//! message Body         { bytes content = 1; }
//! message HttpRequest  { optional HttpMethod method = 1; string path = 2;
//!                        repeated Header headers = 3; optional Body body = 4; }
//! message HttpResponse { optional HttpStatus status = 1;
//!                        repeated Header headers = 2; optional Body body = 3; }
//! message Envelope {
//!   enum Encoding { UNCOMPRESSED = 0; COMPRESSED = 1; }
//!   optional Encoding encoding = 1;
//!   oneof payload { HttpRequest request = 2; HttpResponse response = 3; bytes compressed_data = 4; }
//!   optional PayloadKind kind = 5;
//! }
//! ```

macro_rules! closed_enum {
    {
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($v:ident = $wire:literal => $k:literal,)*
        }
        fn $from:ident($arg:ty);
        fn $to:ident() -> $out:ty;
    } => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum $name {
            $($v = $wire,)*
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$v,)*];

            #[must_use]
            pub fn $from(k: $arg) -> Option<Self> {
                match k {
                    $($k => Some(Self::$v),)*
                    _ => None,
                }
            }

            #[must_use]
            pub fn $to(self) -> $out {
                match self {
                    $(Self::$v => $k,)*
                }
            }
        }
    };
}

closed_enum! {
    /// The request methods that can be carried.  Tokens match exactly,
    /// so "get" is not a method.
    pub enum HttpMethod {
        Get = 1 => "GET",
        Post = 2 => "POST",
        Put = 3 => "PUT",
        Delete = 4 => "DELETE",
        Patch = 5 => "PATCH",
        Head = 6 => "HEAD",
        Options = 7 => "OPTIONS",
    }
    fn from_token(&str);
    fn as_str() -> &'static str;
}

closed_enum! {
    /// The status codes that can be carried.  The wire value is the code itself.
    pub enum HttpStatus {
        Continue = 100 => 100,
        SwitchingProtocols = 101 => 101,
        Ok = 200 => 200,
        Created = 201 => 201,
        Accepted = 202 => 202,
        NoContent = 204 => 204,
        MovedPermanently = 301 => 301,
        Found = 302 => 302,
        NotModified = 304 => 304,
        BadRequest = 400 => 400,
        Unauthorized = 401 => 401,
        PaymentRequired = 402 => 402,
        Forbidden = 403 => 403,
        NotFound = 404 => 404,
        MethodNotAllowed = 405 => 405,
        NotAcceptable = 406 => 406,
        RequestTimeout = 408 => 408,
        Conflict = 409 => 409,
        Gone = 410 => 410,
        PayloadTooLarge = 413 => 413,
        UriTooLong = 414 => 414,
        UnsupportedMediaType = 415 => 415,
        TooManyRequests = 429 => 429,
        InternalServerError = 500 => 500,
        NotImplemented = 501 => 501,
        BadGateway = 502 => 502,
        ServiceUnavailable = 503 => 503,
        GatewayTimeout = 504 => 504,
        HttpVersionNotSupported = 505 => 505,
    }
    fn from_code(u16);
    fn code() -> u16;
}

/// Whether an envelope holds a request or a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PayloadKind {
    Request = 1,
    Response = 2,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct Header {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(string, tag = "2")]
    pub value: String,
}

/// Message content.  A present `Body` with no content is an empty body,
/// which is not the same thing as having no `Body` at all.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct Body {
    #[prost(bytes = "vec", tag = "1")]
    pub content: Vec<u8>,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct HttpRequest {
    #[prost(enumeration = "HttpMethod", optional, tag = "1")]
    pub method: Option<i32>,
    #[prost(string, tag = "2")]
    pub path: String,
    #[prost(message, repeated, tag = "3")]
    pub headers: Vec<Header>,
    #[prost(message, optional, tag = "4")]
    pub body: Option<Body>,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct HttpResponse {
    #[prost(enumeration = "HttpStatus", optional, tag = "1")]
    pub status: Option<i32>,
    #[prost(message, repeated, tag = "2")]
    pub headers: Vec<Header>,
    #[prost(message, optional, tag = "3")]
    pub body: Option<Body>,
}

/// The outer wrapper.  `kind` is absent from envelopes written before it was
/// added, in which case the reader has to know what it is decoding.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct Envelope {
    #[prost(enumeration = "envelope::Encoding", optional, tag = "1")]
    pub encoding: Option<i32>,
    #[prost(oneof = "envelope::Payload", tags = "2, 3, 4")]
    pub payload: Option<envelope::Payload>,
    #[prost(enumeration = "PayloadKind", optional, tag = "5")]
    pub kind: Option<i32>,
}

pub mod envelope {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Encoding {
        Uncompressed = 0,
        Compressed = 1,
    }

    #[derive(Clone, PartialEq, Eq, ::prost::Oneof)]
    pub enum Payload {
        #[prost(message, tag = "2")]
        Request(super::HttpRequest),
        #[prost(message, tag = "3")]
        Response(super::HttpResponse),
        #[prost(bytes = "vec", tag = "4")]
        CompressedData(Vec<u8>),
    }

    impl Payload {
        /// The kind of message embedded here, if any.
        #[must_use]
        pub fn kind(&self) -> Option<super::PayloadKind> {
            match self {
                Self::Request(_) => Some(super::PayloadKind::Request),
                Self::Response(_) => Some(super::PayloadKind::Response),
                Self::CompressedData(_) => None,
            }
        }
    }
}
