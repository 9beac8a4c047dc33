// Line oriented question and answer over any async reader and writer.
//
// Answers are read as raw bytes. Invalid UTF-8 is replaced rather than rejected, so a
// garbled line becomes an odd answer instead of ending the session.

use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    buffer: Vec<u8>,
}

impl<R, W> Prompter<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            buffer: Vec::new(),
        }
    }

    /// Print `prompt` and read one answer. `None` once the input is exhausted.
    pub async fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.say(prompt).await?;
        self.buffer.clear();
        if self.reader.read_until(b'\n', &mut self.buffer).await? == 0 {
            return Ok(None);
        }
        let line = strip_line_ending(&self.buffer);
        Ok(Some(String::from_utf8_lossy(line).into_owned()))
    }

    pub async fn say(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
