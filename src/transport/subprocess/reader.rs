//! Stream draining logic for the subprocess invoker

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::Result;

use super::config::READ_CHUNK_SIZE;

/// Read `stream` until EOF and decode everything it produced as text
///
/// Bytes are accumulated before decoding so a multi-byte character split
/// across two reads is not mangled. Invalid UTF-8 is replaced, never rejected.
pub(super) async fn drain<R>(mut stream: R, label: &'static str) -> Result<String>
where
    R: AsyncRead + Unpin,
{
    let mut collected = Vec::new();
    let mut buffer = vec![0u8; READ_CHUNK_SIZE];

    loop {
        match stream.read(&mut buffer).await? {
            0 => break, // EOF
            n => {
                log::trace!("{label}: read {n} bytes");
                collected.extend_from_slice(&buffer[..n]);
            }
        }
    }

    Ok(String::from_utf8_lossy(&collected).into_owned())
}
