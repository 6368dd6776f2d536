use crate::err::{Error, Res};
use crate::schema::{
    envelope::{Encoding, Payload},
    Envelope, HttpRequest, HttpResponse, PayloadKind,
};
#[cfg(feature = "decode")]
use crate::compress::inflate;
#[cfg(feature = "encode")]
use crate::compress::compress;
use log::trace;
use prost::Message;

/// Messages that encode to this many bytes or more are compressed.
pub const COMPRESSION_THRESHOLD: usize = 100;

/// A message that can travel in an envelope.
pub(crate) trait Model: Message + Default + Clone {
    const KIND: PayloadKind;

    /// Embed a copy of this message, uncompressed.
    #[cfg(feature = "encode")]
    fn embed(&self) -> Payload;

    /// Take the message out of a payload holding this kind.
    #[cfg(feature = "decode")]
    fn extract(payload: Payload) -> Option<Self>;
}

impl Model for HttpRequest {
    const KIND: PayloadKind = PayloadKind::Request;

    #[cfg(feature = "encode")]
    fn embed(&self) -> Payload {
        Payload::Request(self.clone())
    }

    #[cfg(feature = "decode")]
    fn extract(payload: Payload) -> Option<Self> {
        if let Payload::Request(r) = payload {
            Some(r)
        } else {
            None
        }
    }
}

impl Model for HttpResponse {
    const KIND: PayloadKind = PayloadKind::Response;

    #[cfg(feature = "encode")]
    fn embed(&self) -> Payload {
        Payload::Response(self.clone())
    }

    #[cfg(feature = "decode")]
    fn extract(payload: Payload) -> Option<Self> {
        if let Payload::Response(r) = payload {
            Some(r)
        } else {
            None
        }
    }
}

impl Envelope {
    /// The encoding tag.  An envelope without one is uncompressed.
    pub fn encoding_tag(&self) -> Res<Encoding> {
        match self.encoding {
            None => Ok(Encoding::Uncompressed),
            Some(e) => Encoding::try_from(e).map_err(|_| Error::UnknownEncoding(e)),
        }
    }

    /// Whether this holds a request or a response, if the writer said so.
    #[must_use]
    pub fn payload_kind(&self) -> Option<PayloadKind> {
        self.kind.and_then(|k| PayloadKind::try_from(k).ok())
    }
}

#[cfg(feature = "encode")]
fn seal<M: Model>(model: &M) -> Res<Vec<u8>> {
    let data = model.encode_to_vec();
    let env = if data.len() < COMPRESSION_THRESHOLD {
        trace!("{:?}: {} bytes, uncompressed", M::KIND, data.len());
        Envelope {
            encoding: Some(Encoding::Uncompressed.into()),
            payload: Some(model.embed()),
            kind: Some(M::KIND.into()),
        }
    } else {
        let compressed = compress(&data)?;
        trace!(
            "{:?}: {} bytes, compressed to {}",
            M::KIND,
            data.len(),
            compressed.len()
        );
        Envelope {
            encoding: Some(Encoding::Compressed.into()),
            payload: Some(Payload::CompressedData(compressed)),
            kind: Some(M::KIND.into()),
        }
    };
    Ok(env.encode_to_vec())
}

#[cfg(feature = "decode")]
fn open<M: Model>(data: &[u8]) -> Res<M> {
    let env = Envelope::decode(data).map_err(Error::MalformedEnvelope)?;
    let encoding = env.encoding_tag()?;
    trace!(
        "envelope: {:?}, kind {:?}, {} bytes",
        encoding,
        env.payload_kind(),
        data.len()
    );
    if let Some(found) = env.payload_kind() {
        if found != M::KIND {
            return Err(Error::PayloadKindMismatch {
                expected: M::KIND,
                found,
            });
        }
    }

    match encoding {
        Encoding::Uncompressed => {
            let payload = env.payload.ok_or(Error::MissingPayload)?;
            let found = payload.kind().ok_or(Error::MissingPayload)?;
            if found != M::KIND {
                return Err(Error::PayloadKindMismatch {
                    expected: M::KIND,
                    found,
                });
            }
            M::extract(payload).ok_or(Error::MissingPayload)
        }
        Encoding::Compressed => {
            // Without a kind, the caller's choice decides what this is.
            // A missing or misplaced blob is read as empty, which does not inflate.
            let compressed = if let Some(Payload::CompressedData(c)) = env.payload {
                c
            } else {
                Vec::new()
            };
            let data = inflate(&compressed).map_err(Error::Decompression)?;
            M::decode(&data[..]).map_err(Error::MalformedPayload)
        }
    }
}

/// Encode a response into an envelope.  Passing `None` is an error.
#[cfg(feature = "encode")]
pub fn serialize_response<'a>(resp: impl Into<Option<&'a HttpResponse>>) -> Res<Vec<u8>> {
    seal(resp.into().ok_or(Error::NilInput("response"))?)
}

/// Encode a request into an envelope.  Passing `None` is an error.
#[cfg(feature = "encode")]
pub fn serialize_request<'a>(req: impl Into<Option<&'a HttpRequest>>) -> Res<Vec<u8>> {
    seal(req.into().ok_or(Error::NilInput("request"))?)
}

#[cfg(feature = "decode")]
pub fn deserialize_response(data: &[u8]) -> Res<HttpResponse> {
    open(data)
}

#[cfg(feature = "decode")]
pub fn deserialize_request(data: &[u8]) -> Res<HttpRequest> {
    open(data)
}
