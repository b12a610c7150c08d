use bytes::BytesMut;

use crate::protocol::{Response, STATUS_HEADER};

/// Serializes a [`Response`] into `dst`.
///
/// The status line is written first, verbatim, followed by CRLF. Every
/// other header is written as `Name: Value` CRLF — the reserved status
/// entry is excluded, and because the headers live in a map the order of
/// these lines is unspecified and not stable across calls. A blank CRLF
/// line terminates the header block, then the raw body bytes follow with
/// no framing of their own.
pub fn encode(response: &Response, dst: &mut BytesMut) {
    dst.extend_from_slice(response.status_line().as_bytes());
    dst.extend_from_slice(b"\r\n");
    for (name, value) in response.headers() {
        if name == STATUS_HEADER {
            continue;
        }
        dst.extend_from_slice(name.as_bytes());
        dst.extend_from_slice(b": ");
        dst.extend_from_slice(value.as_bytes());
        dst.extend_from_slice(b"\r\n");
    }
    dst.extend_from_slice(b"\r\n");
    dst.extend_from_slice(response.body());
}
