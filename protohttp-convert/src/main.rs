//
// License CC0: https://creativecommons.org/publicdomain/zero/1.0/
//

#![deny(clippy::pedantic)]

use log::{debug, info};
use protohttp::{HttpRequest, HttpResponse};
use std::{
    fs::{self, File},
    io::{self, Read, Write},
    path::PathBuf,
};
use structopt::StructOpt;

#[derive(thiserror::Error, Debug)]
enum Error {
    #[error(transparent)]
    Protohttp(#[from] protohttp::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("hex error: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("header needs a colon: {0}")]
    BadHeader(String),
}

type Res<T> = Result<T, Error>;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "protohttp",
    about = "Build, encode and decode protohttp envelopes."
)]
struct Args {
    /// Decode an envelope and print the message it holds.
    #[structopt(long, short = "d")]
    decode: bool,

    /// Envelopes are hex rather than binary.
    #[structopt(long, short = "x")]
    hex: bool,

    /// The envelope holds a request (decoding only).
    #[structopt(long, short = "r")]
    request: bool,

    /// Request method; encodes a request instead of a response.
    #[structopt(long, short = "m")]
    method: Option<String>,

    /// Request path.
    #[structopt(long, short = "p", default_value = "/")]
    path: String,

    /// Response status code.
    #[structopt(long, short = "s", default_value = "200")]
    status: u16,

    /// A header, as "Name: value".  Can be repeated.
    #[structopt(long = "header", short = "H")]
    headers: Vec<String>,

    /// File holding the body.  Without this, there is no body.
    #[structopt(long, short = "b")]
    body: Option<PathBuf>,

    /// Input file for decoding.
    #[structopt(long, short = "i")]
    input: Option<PathBuf>,

    /// Output file.
    #[structopt(long, short = "o")]
    output: Option<PathBuf>,
}

impl Args {
    fn headers(&self) -> Res<Vec<(String, String)>> {
        self.headers
            .iter()
            .map(|h| {
                let (k, v) = h.split_once(':').ok_or_else(|| Error::BadHeader(h.clone()))?;
                Ok((String::from(k.trim()), String::from(v.trim())))
            })
            .collect()
    }

    fn read_input(&self) -> Res<Vec<u8>> {
        let mut buf = Vec::new();
        if let Some(infile) = &self.input {
            File::open(infile)?.read_to_end(&mut buf)?;
        } else {
            io::stdin().read_to_end(&mut buf)?;
        }
        if self.hex {
            let text = String::from_utf8_lossy(&buf);
            buf = hex::decode(text.trim())?;
        }
        Ok(buf)
    }

    fn encode(&self) -> Res<Vec<u8>> {
        let headers = self.headers()?;
        let body = self.body.as_ref().map(fs::read).transpose()?;
        let buf = if let Some(method) = &self.method {
            let req = protohttp::request_to_protobuf(method, &self.path, Some(headers), body)?;
            protohttp::serialize_request(&req)?
        } else {
            let resp = protohttp::response_to_protobuf(self.status, Some(headers), body)?;
            protohttp::serialize_response(&resp)?
        };
        info!("Envelope: {} bytes", buf.len());
        Ok(if self.hex {
            let mut text = hex::encode(buf).into_bytes();
            text.push(b'\n');
            text
        } else {
            buf
        })
    }

    fn decode(&self) -> Res<Vec<u8>> {
        let buf = self.read_input()?;
        debug!("Envelope: {}", hex::encode(&buf));
        let mut out = Vec::new();
        if self.request {
            write_request(&protohttp::deserialize_request(&buf)?, &mut out)?;
        } else {
            write_response(&protohttp::deserialize_response(&buf)?, &mut out)?;
        }
        Ok(out)
    }
}

fn write_fields(
    headers: &[protohttp::Header],
    content: Option<&[u8]>,
    w: &mut impl Write,
) -> io::Result<()> {
    for h in headers {
        writeln!(w, "Header: {} = {}", h.key, h.value)?;
    }
    if let Some(content) = content {
        writeln!(w, "Body: {}", String::from_utf8_lossy(content))?;
    }
    Ok(())
}

fn write_response(resp: &HttpResponse, w: &mut impl Write) -> io::Result<()> {
    match resp.http_status() {
        Some(s) => writeln!(w, "Status: {s}")?,
        None => writeln!(w, "Status: {:?}", resp.status)?,
    }
    write_fields(&resp.headers, resp.content(), w)
}

fn write_request(req: &HttpRequest, w: &mut impl Write) -> io::Result<()> {
    match req.http_method() {
        Some(m) => writeln!(w, "Method: {m}")?,
        None => writeln!(w, "Method: {:?}", req.method)?,
    }
    writeln!(w, "Path: {}", req.path)?;
    write_fields(&req.headers, req.content(), w)
}

fn main() -> Res<()> {
    env_logger::try_init()?;
    let args = Args::from_args();

    let out = if args.decode {
        args.decode()?
    } else {
        args.encode()?
    };

    let mut output: Box<dyn Write> = if let Some(outfile) = &args.output {
        Box::new(File::create(outfile)?)
    } else {
        Box::new(io::stdout())
    };
    output.write_all(&out)?;
    output.flush()?;
    Ok(())
}
