use crate::err::{Error, Res};
use crate::schema::{Body, Header, HttpMethod, HttpRequest, HttpResponse, HttpStatus};
use std::fmt;
use std::str::FromStr;

impl HttpStatus {
    /// The canonical reason phrase.
    #[must_use]
    pub fn reason(self) -> &'static str {
        match self {
            Self::Continue => "Continue",
            Self::SwitchingProtocols => "Switching Protocols",
            Self::Ok => "OK",
            Self::Created => "Created",
            Self::Accepted => "Accepted",
            Self::NoContent => "No Content",
            Self::MovedPermanently => "Moved Permanently",
            Self::Found => "Found",
            Self::NotModified => "Not Modified",
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::PaymentRequired => "Payment Required",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::MethodNotAllowed => "Method Not Allowed",
            Self::NotAcceptable => "Not Acceptable",
            Self::RequestTimeout => "Request Timeout",
            Self::Conflict => "Conflict",
            Self::Gone => "Gone",
            Self::PayloadTooLarge => "Payload Too Large",
            Self::UriTooLong => "URI Too Long",
            Self::UnsupportedMediaType => "Unsupported Media Type",
            Self::TooManyRequests => "Too Many Requests",
            Self::InternalServerError => "Internal Server Error",
            Self::NotImplemented => "Not Implemented",
            Self::BadGateway => "Bad Gateway",
            Self::ServiceUnavailable => "Service Unavailable",
            Self::GatewayTimeout => "Gateway Timeout",
            Self::HttpVersionNotSupported => "HTTP Version Not Supported",
        }
    }
}

impl fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}

impl TryFrom<u16> for HttpStatus {
    type Error = Error;

    fn try_from(code: u16) -> Res<Self> {
        Self::from_code(code).ok_or(Error::UnsupportedStatus(code))
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = Error;

    fn from_str(s: &str) -> Res<Self> {
        Self::from_token(s).ok_or_else(|| Error::UnsupportedMethod(String::from(s)))
    }
}

impl Header {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

fn build_headers<I, K, V>(headers: Option<I>) -> Res<Vec<Header>>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let headers = headers.ok_or(Error::InvalidInput("headers cannot be nil"))?;
    Ok(headers
        .into_iter()
        .map(|(k, v)| Header::new(k, v))
        .collect())
}

fn first_header<'a>(headers: &'a [Header], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|h| h.key == name)
        .map(|h| h.value.as_str())
}

/// Build a response message.
///
/// `headers` is taken in iteration order, so a `HashMap` produces an
/// unpredictable order; use `sort_headers` afterwards if that matters.
/// `None` for `headers` is rejected; an empty collection is fine.
/// `None` for `body` leaves the body out entirely, where `Some` of an empty
/// buffer produces an empty body.
pub fn response_to_protobuf<I, K, V>(
    status: u16,
    headers: Option<I>,
    body: Option<impl Into<Vec<u8>>>,
) -> Res<HttpResponse>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let status = HttpStatus::try_from(status)?;
    let headers = build_headers(headers)?;
    Ok(HttpResponse {
        status: Some(i32::from(status)),
        headers,
        body: body.map(|b| Body { content: b.into() }),
    })
}

/// Build a request message.  Method tokens are case-sensitive.
/// Absent headers and an empty path are both rejected.
pub fn request_to_protobuf<I, K, V>(
    method: &str,
    path: &str,
    headers: Option<I>,
    body: Option<impl Into<Vec<u8>>>,
) -> Res<HttpRequest>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let method = method.parse::<HttpMethod>()?;
    let headers = build_headers(headers)?;
    if path.is_empty() {
        return Err(Error::InvalidInput("path cannot be empty"));
    }
    Ok(HttpRequest {
        method: Some(i32::from(method)),
        path: String::from(path),
        headers,
        body: body.map(|b| Body { content: b.into() }),
    })
}

impl HttpRequest {
    /// The method, if one is set and it is one we know.
    #[must_use]
    pub fn http_method(&self) -> Option<HttpMethod> {
        self.method.and_then(|m| HttpMethod::try_from(m).ok())
    }

    /// Body content.  `None` when there is no body, which differs from
    /// `Some(&[])`.
    #[must_use]
    pub fn content(&self) -> Option<&[u8]> {
        self.body.as_ref().map(|b| &b.content[..])
    }

    /// Gets the value from the first instance of the header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        first_header(&self.headers, name)
    }

    /// Order headers by key, leaving same-key headers in their original order.
    /// This makes the encoding independent of the order headers were supplied in.
    pub fn sort_headers(&mut self) {
        self.headers.sort_by(|a, b| a.key.cmp(&b.key));
    }
}

impl HttpResponse {
    /// The status, if one is set and it is one we know.
    #[must_use]
    pub fn http_status(&self) -> Option<HttpStatus> {
        self.status.and_then(|s| HttpStatus::try_from(s).ok())
    }

    /// Body content.  `None` when there is no body, which differs from
    /// `Some(&[])`.
    #[must_use]
    pub fn content(&self) -> Option<&[u8]> {
        self.body.as_ref().map(|b| &b.content[..])
    }

    /// Gets the value from the first instance of the header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        first_header(&self.headers, name)
    }

    /// See `HttpRequest::sort_headers`.
    pub fn sort_headers(&mut self) {
        self.headers.sort_by(|a, b| a.key.cmp(&b.key));
    }
}
