use std::io::Read;

use crate::delimiter::Delimiter;
use crate::record::FIELD_SEPARATOR;

const READ_CHUNK_SIZE: usize = 8192;

/// Lazy scanner splitting the raw bytes of a drained trace log into
/// per-record field groups.
///
/// The stream yields, for each pair of successive delimiter occurrences,
/// the text in between split on the field separator. Chunks without any
/// field separator are inter-record text (the command echoed by the shell,
/// nesting-depth prefixes) and are skipped. Bytes after the last delimiter
/// are a trailing partial record and are never yielded.
///
/// The stream is finite and can only be restarted by reopening the log.
pub struct RecordStream<R> {
    reader: R,
    delimiter: Vec<u8>,
    buf: Vec<u8>,
    /// Whether a delimiter opening the current chunk has been seen.
    started: bool,
    eof: bool,
}

impl<R: Read> RecordStream<R> {
    /// Creates a record stream over the raw bytes of a trace log.
    pub fn new(reader: R, delimiter: &Delimiter) -> Self {
        Self {
            reader,
            delimiter: delimiter.as_str().as_bytes().to_vec(),
            buf: Vec::new(),
            started: false,
            eof: false,
        }
    }

    /// Extracts the chunk closed by the next delimiter in the buffer, if
    /// the buffer contains one.
    fn split_off_chunk(&mut self) -> Option<Vec<u8>> {
        let pos = self
            .buf
            .windows(self.delimiter.len())
            .position(|window| window == self.delimiter)?;

        let mut rest = self.buf.split_off(pos + self.delimiter.len());
        std::mem::swap(&mut self.buf, &mut rest);

        rest.truncate(pos);

        Some(rest)
    }

    fn fill_buf(&mut self) -> std::io::Result<()> {
        let mut chunk = [0u8; READ_CHUNK_SIZE];

        let n = self.reader.read(&mut chunk)?;
        if n == 0 {
            self.eof = true;
        } else {
            self.buf.extend_from_slice(&chunk[..n]);
        }

        Ok(())
    }
}

impl<R: Read> Iterator for RecordStream<R> {
    type Item = crate::Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(chunk) = self.split_off_chunk() else {
                if self.eof {
                    // whatever is left never got closed by a delimiter:
                    // trailing partial record, dropped
                    return None;
                }

                if let Err(e) = self.fill_buf() {
                    return Some(Err(crate::Error::LogRead(e)));
                }

                continue;
            };

            // the bytes before the very first delimiter are not part of
            // any record
            if !self.started {
                self.started = true;
                continue;
            }

            let text = String::from_utf8_lossy(&chunk);
            if !text.contains(FIELD_SEPARATOR) {
                continue;
            }

            return Some(Ok(text
                .split(FIELD_SEPARATOR)
                .map(str::to_owned)
                .collect()));
        }
    }
}
