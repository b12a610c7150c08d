//! Request parser
//!
//! This module decodes the bytes of one bounded read into a
//! [`Request`]. The grammar is a simplified HTTP-like format:
//!
//! ```text
//! METHOD SP PATH [SP ...] CRLF
//! Name: Value CRLF
//! ...
//! CRLF
//! body bytes
//! ```
//!
//! The parser never fails. Missing pieces degrade to empty fields: a
//! buffer without a request line yields an empty method and path, a
//! header line without a `": "` separator is skipped, and a buffer
//! without the blank separator line yields an empty body. Callers cannot
//! distinguish an empty request from a malformed one; that leniency is
//! part of the contract.

use std::collections::HashMap;

use bytes::{Bytes, BytesMut};

use crate::protocol::Request;

/// Parses one raw request buffer into a [`Request`].
///
/// The request line is split on single spaces: the first token is the
/// method, the second the path, anything after that (typically the
/// protocol version) is ignored. Header names and values are split on the
/// *first* `": "` occurrence, so a value may itself contain `": "` and is
/// preserved verbatim. Duplicate header names are last-write-wins. Header
/// names are not case-normalized and values are not decoded in any way.
///
/// The request line and header lines are interpreted as UTF-8 with lossy
/// replacement; body bytes pass through untouched.
pub fn parse(raw: &[u8]) -> Request {
    let lines = split_crlf(raw);
    let Some((request_line, rest)) = lines.split_first() else {
        return Request::new("", "", HashMap::new(), Bytes::new());
    };

    let mut tokens = request_line.split(|&b| b == b' ');
    let method = tokens.next().map(lossy).unwrap_or_default();
    let path = tokens.next().map(lossy).unwrap_or_default();

    let mut headers = HashMap::new();
    let mut body = Bytes::new();
    for (i, line) in rest.iter().enumerate() {
        if line.is_empty() {
            // blank line: everything after it is the body
            body = join_crlf(&rest[i + 1..]);
            break;
        }
        if let Some(pos) = find_separator(line) {
            headers.insert(lossy(&line[..pos]), lossy(&line[pos + 2..]));
        }
    }

    Request::new(method, path, headers, body)
}

/// Splits on every CRLF. Like the usual string split, n separators yield
/// n + 1 pieces, so the empty input yields one empty line and a trailing
/// CRLF yields a trailing empty line.
fn split_crlf(raw: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i + 1 < raw.len() {
        if raw[i] == b'\r' && raw[i + 1] == b'\n' {
            lines.push(&raw[start..i]);
            start = i + 2;
            i = start;
        } else {
            i += 1;
        }
    }
    lines.push(&raw[start..]);
    lines
}

fn join_crlf(lines: &[&[u8]]) -> Bytes {
    let Some((first, rest)) = lines.split_first() else {
        return Bytes::new();
    };
    let mut buf = BytesMut::from(*first);
    for line in rest {
        buf.extend_from_slice(b"\r\n");
        buf.extend_from_slice(line);
    }
    buf.freeze()
}

/// Position of the first `": "` in a header line, if any.
fn find_separator(line: &[u8]) -> Option<usize> {
    line.windows(2).position(|window| window == b": ")
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
