//! Byte-level framing: one bounded read in, one serialized response out.

use std::time::Duration;

use gatelink_domain::http::{MAX_REQUEST_BYTES, Response};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::ServerError;

/// Read the request bytes with a single bounded read.
///
/// Returns `Ok(None)` when the peer closed without sending anything.
///
/// # Errors
///
/// Returns [`ServerError::ReadTimeout`] if nothing arrives in time, or
/// [`ServerError::Io`] if the read fails.
pub async fn read_request<S>(
    stream: &mut S,
    timeout: Duration,
) -> Result<Option<Vec<u8>>, ServerError>
where
    S: AsyncRead + Unpin,
{
    let mut buf = vec![0u8; MAX_REQUEST_BYTES];
    let read = tokio::time::timeout(timeout, stream.read(&mut buf))
        .await
        .map_err(|_| ServerError::ReadTimeout(timeout))??;
    if read == 0 {
        return Ok(None);
    }
    buf.truncate(read);
    Ok(Some(buf))
}

/// Serialize a response: status line, headers, blank line, body.
#[must_use]
pub fn encode_response(response: &Response) -> Vec<u8> {
    let head = format!(
        "HTTP/1.1 {status}\r\n\
         Content-Type: {content_type}\r\n\
         Connection: close\r\n\
         Content-Length: {length}\r\n\
         \r\n",
        status = response.status,
        content_type = response.content_type,
        length = response.content_length(),
    );
    let mut bytes = head.into_bytes();
    bytes.extend_from_slice(response.body.as_bytes());
    bytes
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::io::AsyncWriteExt;

    use super::*;

    #[test]
    fn should_encode_headers_and_body() {
        let bytes = encode_response(&Response::not_found());
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "HTTP/1.1 404 Not Found\r\n\
             Content-Type: text/plain; charset=utf-8\r\n\
             Connection: close\r\n\
             Content-Length: 9\r\n\
             \r\n\
             Not Found"
        );
    }

    #[test]
    fn should_encode_cooldown_answer() {
        let bytes = encode_response(&Response::cooling_down(Duration::from_millis(3_200)));
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("HTTP/1.1 429 Too Many Requests\r\n"));
        assert!(text.contains("Content-Length: 26\r\n"));
        assert!(text.ends_with("\r\n\r\nCooldown active. Wait 3.2s"));
    }

    #[tokio::test]
    async fn should_cap_request_at_max_bytes() {
        let (mut client, mut server) = tokio::io::duplex(4 * MAX_REQUEST_BYTES);
        client.write_all(&[b'a'; 3 * MAX_REQUEST_BYTES]).await.unwrap();
        let request = read_request(&mut server, Duration::from_secs(1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(request.len(), MAX_REQUEST_BYTES);
    }

    #[tokio::test]
    async fn should_return_none_for_closed_peer() {
        let (client, mut server) = tokio::io::duplex(64);
        drop(client);
        let request = read_request(&mut server, Duration::from_secs(1)).await.unwrap();
        assert!(request.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn should_time_out_on_silent_peer() {
        let (_client, mut server) = tokio::io::duplex(64);
        let err = read_request(&mut server, Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(matches!(err, ServerError::ReadTimeout(_)));
    }
}
