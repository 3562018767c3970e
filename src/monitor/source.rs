//! Streams of log lines from stdin or a serial port

use super::frame::RawFrame;
use super::log_line::{self, ParseError};
use log::debug;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_stream::wrappers::LinesStream;
use tokio_stream::{Stream, StreamExt};

/// A non-empty input line and the frame parsed from it
#[derive(Debug)]
pub struct SourceLine {
    pub line: String,
    pub frame: Result<RawFrame, ParseError>,
}

pub fn read_frames<R>(reader: R) -> impl Stream<Item = io::Result<SourceLine>>
where
    R: AsyncBufRead + Unpin,
{
    LinesStream::new(reader.lines()).filter_map(|line| match line {
        Ok(line) => {
            let line = line.trim().to_string();
            if line.is_empty() {
                return None;
            }
            let frame = log_line::parse(&line);
            if let Err(e) = &frame {
                debug!("Failed to parse '{}': {}", line, e);
            }
            Some(Ok(SourceLine { line, frame }))
        }
        Err(e) => Some(Err(e)),
    })
}

pub fn stdin() -> tokio::io::BufReader<tokio::io::Stdin> {
    tokio::io::BufReader::new(tokio::io::stdin())
}

#[cfg(feature = "serial")]
pub fn open_serial(
    port: &str,
    baud_rate: u32,
) -> Result<tokio::io::BufReader<tokio_serial::SerialStream>, tokio_serial::Error> {
    let serial = tokio_serial::SerialStream::open(&tokio_serial::new(port, baud_rate))?;
    Ok(tokio::io::BufReader::new(serial))
}

#[cfg(test)]
mod test {
    use super::read_frames;
    use crate::monitor::frame::FrameStatus;
    use tokio_stream::StreamExt;

    #[tokio::test]
    async fn read_test() {
        let input: &[u8] = b"{00000001-08 000000ff}\n\n  \ngarbage\r\n{00000002*01 00000000}\n";
        let lines: Vec<_> = read_frames(input).collect().await;
        assert_eq!(lines.len(), 3);
        let first = lines[0].as_ref().unwrap();
        assert_eq!(first.frame.as_ref().unwrap().value, 0xff);
        let second = lines[1].as_ref().unwrap();
        assert_eq!(second.line, "garbage");
        assert!(second.frame.is_err());
        let third = lines[2].as_ref().unwrap();
        assert_eq!(third.frame.as_ref().unwrap().status, FrameStatus::Timeout);
    }
}
