// Rather than grapple with #[cfg(...)] for every variable and import.
#![cfg(all(feature = "encode", feature = "decode"))]

use protohttp::{
    deserialize_request, deserialize_response,
    envelope::{Encoding, Payload},
    request_to_protobuf, response_to_protobuf, serialize_request, serialize_response, Envelope,
    Error, HttpMethod, HttpStatus,
};
use prost::Message;
use std::collections::HashMap;

const NO_BODY: Option<Vec<u8>> = None;

// 200 with "a: b" and no body.
const SMALL_RESPONSE: &str = "0800 1a0b 08c801 1206 0a0161 120162 2802";
// GET / with no headers and no body.
const SMALL_REQUEST: &str = "0800 1205 0801 12012f 2801";

fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s.replace(' ', "")).unwrap()
}

fn init() {
    let _ = env_logger::try_init();
}

#[test]
fn small_response_vector() {
    let resp = response_to_protobuf(200, Some([("a", "b")]), NO_BODY).unwrap();
    let buf = serialize_response(&resp).unwrap();
    println!("result: {}", hex::encode(&buf));
    assert_eq!(buf, unhex(SMALL_RESPONSE));
    assert_eq!(deserialize_response(&buf).unwrap(), resp);
}

#[test]
fn small_request_vector() {
    let req = request_to_protobuf("GET", "/", Some(Vec::<(&str, &str)>::new()), NO_BODY).unwrap();
    let buf = serialize_request(&req).unwrap();
    println!("result: {}", hex::encode(&buf));
    assert_eq!(buf, unhex(SMALL_REQUEST));
    assert_eq!(deserialize_request(&buf).unwrap(), req);
}

#[test]
fn envelope_without_kind() {
    // Envelopes that predate the kind field end before it.
    let full = unhex(SMALL_RESPONSE);
    let legacy = &full[..full.len() - 2];
    let resp = deserialize_response(legacy).unwrap();
    assert_eq!(resp.http_status(), Some(HttpStatus::Ok));
    assert_eq!(resp.header("a"), Some("b"));
    assert_eq!(resp.content(), None);
}

#[test]
fn every_status_round_trips() {
    init();
    for status in HttpStatus::ALL {
        for body in [None, Some(Vec::new()), Some(vec![0x5a; 1000])] {
            let resp = response_to_protobuf(
                status.code(),
                Some([("server", "protohttp")]),
                body.clone(),
            )
            .unwrap();
            let out = deserialize_response(&serialize_response(&resp).unwrap()).unwrap();
            assert_eq!(out.http_status(), Some(*status));
            assert_eq!(out.content(), body.as_deref());
            assert_eq!(out, resp);
        }
    }
}

#[test]
fn every_method_round_trips() {
    init();
    for method in HttpMethod::ALL {
        for body in [None, Some(Vec::new()), Some(b"x".repeat(250))] {
            let req = request_to_protobuf(
                method.as_str(),
                "/resource/1?q=a",
                Some([("accept", "*/*"), ("accept", "text/plain")]),
                body.clone(),
            )
            .unwrap();
            let out = deserialize_request(&serialize_request(&req).unwrap()).unwrap();
            assert_eq!(out.http_method(), Some(*method));
            assert_eq!(out.path, "/resource/1?q=a");
            assert_eq!(out.content(), body.as_deref());
            assert_eq!(out, req);
        }
    }
}

#[test]
fn absent_and_empty_body_survive() {
    for size in [0_usize, 200] {
        let headers: Vec<(String, String)> = (0..size / 20)
            .map(|i| (format!("x-header-{i}"), format!("value number {i}")))
            .collect();
        let none = response_to_protobuf(204, Some(headers.clone()), NO_BODY).unwrap();
        let empty = response_to_protobuf(204, Some(headers), Some(Vec::new())).unwrap();
        let none = deserialize_response(&serialize_response(&none).unwrap()).unwrap();
        let empty = deserialize_response(&serialize_response(&empty).unwrap()).unwrap();
        assert_eq!(none.content(), None);
        assert_eq!(empty.content(), Some(&[][..]));
    }
}

#[test]
fn hash_map_headers() {
    let headers = HashMap::from([
        ("Content-Type", "application/json"),
        ("Cache-Control", "no-cache"),
    ]);
    let body = br#"{"message": "Hello, World!"}"#;
    let resp = response_to_protobuf(200, Some(headers.clone()), Some(&body[..])).unwrap();
    let out = deserialize_response(&serialize_response(&resp).unwrap()).unwrap();
    let got: HashMap<&str, &str> = out
        .headers
        .iter()
        .map(|h| (h.key.as_str(), h.value.as_str()))
        .collect();
    assert_eq!(got, headers);
    assert_eq!(out.content(), Some(&body[..]));
}

#[test]
fn sorted_headers_encode_identically() {
    let pairs = [
        ("user-agent", "ProtoClient/1.0"),
        ("accept", "application/json"),
        ("x-trace", "1"),
    ];
    let mut forward = request_to_protobuf("GET", "https://example.com/api", Some(pairs), NO_BODY)
        .unwrap();
    let mut backward = request_to_protobuf(
        "GET",
        "https://example.com/api",
        Some(pairs.into_iter().rev()),
        NO_BODY,
    )
    .unwrap();
    assert_ne!(
        serialize_request(&forward).unwrap(),
        serialize_request(&backward).unwrap()
    );
    forward.sort_headers();
    backward.sort_headers();
    assert_eq!(
        serialize_request(&forward).unwrap(),
        serialize_request(&backward).unwrap()
    );
}

#[test]
fn compressed_is_smaller() {
    let req = request_to_protobuf(
        "POST",
        "/logs",
        Some([("content-type", "text/plain")]),
        Some(b"the same line again\n".repeat(100)),
    )
    .unwrap();
    let buf = serialize_request(&req).unwrap();
    let env = Envelope::decode(&buf[..]).unwrap();
    assert_eq!(env.encoding_tag().unwrap(), Encoding::Compressed);
    assert!(buf.len() < req.encoded_len() / 4);
}

#[test]
fn flipped_bytes_never_decode_silently() {
    let resp = response_to_protobuf(
        500,
        Some([("content-type", "text/plain")]),
        Some(b"internal error, please retry later. ".repeat(10)),
    )
    .unwrap();
    let env = Envelope::decode(&serialize_response(&resp).unwrap()[..]).unwrap();
    let Some(Payload::CompressedData(ref blob)) = env.payload else {
        panic!("expected a compressed payload");
    };
    // Header and checksum bytes.
    for i in [0, 1, blob.len() - 1, blob.len() - 2] {
        let mut bad = blob.clone();
        bad[i] ^= 0x01;
        let mut corrupt = env.clone();
        corrupt.payload = Some(Payload::CompressedData(bad));
        match deserialize_response(&corrupt.encode_to_vec()) {
            Err(Error::Decompression(_)) => {}
            other => panic!("byte {i}: unexpected {other:?}"),
        }
    }
}

#[test]
fn garbage() {
    for g in [&[0xff_u8][..], &[0x0a, 0xff], &[0x1a, 0x05, 0x08]] {
        assert!(matches!(
            deserialize_response(g),
            Err(Error::MalformedEnvelope(_))
        ));
    }
}
