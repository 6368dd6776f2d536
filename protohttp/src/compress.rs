use crate::err::{Error, Res};
#[cfg(feature = "decode")]
use flate2::read::ZlibDecoder;
#[cfg(feature = "encode")]
use flate2::{write::ZlibEncoder, Compression};
use std::io;
#[cfg(feature = "decode")]
use std::io::Read;
#[cfg(feature = "encode")]
use std::io::Write;

/// Compress `data` into a single zlib stream.
#[cfg(feature = "encode")]
pub fn compress(data: &[u8]) -> Res<Vec<u8>> {
    deflate(data).map_err(Error::Compression)
}

/// Inflate a zlib stream produced by `compress`.
/// A bad header, a corrupt stream, or a failed checksum is an error.
#[cfg(feature = "decode")]
pub fn decompress(data: &[u8]) -> Res<Vec<u8>> {
    inflate(data).map_err(Error::Compression)
}

#[cfg(feature = "encode")]
fn deflate(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

#[cfg(feature = "decode")]
pub(crate) fn inflate(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(data);
    let mut buf = Vec::with_capacity(data.len() * 2);
    decoder.read_to_end(&mut buf)?;
    Ok(buf)
}
