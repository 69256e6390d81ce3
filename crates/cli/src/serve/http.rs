use std::io::BufRead;
use std::io::Read;
use std::io::Write;

use crate::route::Response;
use crate::serve::error::Result;
use crate::serve::error::ServeError;

// Upper bound for the request line and each header line.
const MAX_LINE_LEN: u64 = 8 * 1024;

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct RequestLine {
    pub(crate) method: String,
    pub(crate) target: String,
}

/// Reads the request line and skips the headers that follow it.
pub(crate) fn read_request<R: BufRead>(reader: &mut R) -> Result<RequestLine> {
    let line = read_line(reader)?;

    let mut parts = line.split_whitespace();
    let request = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(method), Some(target), Some(version), None) if version.starts_with("HTTP/") => {
            RequestLine {
                method: method.to_owned(),
                target: target.to_owned(),
            }
        }
        _ => return Err(ServeError::MalformedRequest(line)),
    };

    loop {
        let header = read_line(reader)?;
        if header.is_empty() {
            break;
        }
    }

    Ok(request)
}

fn read_line<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut buf = Vec::new();
    reader.by_ref().take(MAX_LINE_LEN).read_until(b'\n', &mut buf)?;

    let line = String::from_utf8_lossy(&buf);
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

pub(crate) fn write_response<W: Write>(writer: &mut W, response: &Response) -> Result<()> {
    write!(
        writer,
        "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {len}\r\nConnection: close\r\n\r\n",
        status = response.status,
        content_type = response.content_type,
        len = response.body.len()
    )?;
    writer.write_all(response.body.as_bytes())?;
    writer.flush()?;

    Ok(())
}
