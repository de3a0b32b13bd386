//! Password batch output to stdout, a file, or a clipboard buffer.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;
use zeroize::Zeroize;

use super::{GenerateError, GenerationConfig, charset, generate};
use crate::entropy::RandomSource;

const BUF_CAPACITY: usize = 8 * 1024;

/// Buffered writer that wipes its buffer after every flush and on drop.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(BUF_CAPACITY),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        let result = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        result
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > BUF_CAPACITY {
            self.flush_buf()?;
        }
        if data.len() >= BUF_CAPACITY {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
        self.buf.zeroize();
    }
}

/// Where a batch goes.
pub enum Target<'a> {
    Stdout,
    File(&'a Path),
    /// Collected into one newline-separated string for the clipboard.
    Clipboard,
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("failed to write passwords: {0}")]
    Io(#[from] io::Error),
}

/// Generate `count` passwords into `target`.
/// Returns the joined passwords for [`Target::Clipboard`], `None` otherwise.
pub fn write_batch<R>(
    config: &GenerationConfig,
    count: usize,
    rng: &mut R,
    target: Target<'_>,
) -> Result<Option<String>, OutputError>
where
    R: RandomSource + ?Sized,
{
    match target {
        Target::Clipboard => {
            let mut passwords = String::with_capacity(joined_capacity(config, count));
            for _ in 0..count {
                let mut pass = generate(config, rng)?;
                passwords.push_str(&pass);
                passwords.push('\n');
                pass.zeroize();
            }
            Ok(Some(passwords))
        }
        Target::File(path) => {
            let mut out = SecureBufWriter::new(open_append(path)?);
            write_to(config, count, rng, &mut out)?;
            out.flush()?;
            Ok(None)
        }
        Target::Stdout => {
            let stdout = io::stdout();
            let mut out = SecureBufWriter::new(stdout.lock());
            write_to(config, count, rng, &mut out)?;
            out.flush()?;
            Ok(None)
        }
    }
}

/// Write `count` newline-terminated passwords to `out`.
pub fn write_to<R, W>(
    config: &GenerationConfig,
    count: usize,
    rng: &mut R,
    out: &mut W,
) -> Result<(), OutputError>
where
    R: RandomSource + ?Sized,
    W: Write,
{
    for _ in 0..count {
        let mut pass = generate(config, rng)?;
        pass.push('\n');
        let written = out.write_all(pass.as_bytes());
        pass.zeroize();
        written?;
    }
    Ok(())
}

/// Upper bound on the joined batch size, so the buffer never reallocates
/// and leaves stale copies behind.
fn joined_capacity(config: &GenerationConfig, count: usize) -> usize {
    let widest = charset::build(config)
        .iter()
        .map(|c| c.len_utf8())
        .max()
        .unwrap_or(1);
    count.saturating_mul(config.max_length.saturating_mul(widest).saturating_add(1))
}

fn open_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::RngSource;

    #[test]
    fn writes_one_line_per_password() {
        let config = GenerationConfig::default().with_length(10);
        let mut out = Vec::new();
        write_to(&config, 5, &mut RngSource::seeded(1), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.chars().count() == 10));
    }

    #[test]
    fn clipboard_target_joins_passwords() {
        let config = GenerationConfig::default().with_length(6);
        let joined = write_batch(&config, 3, &mut RngSource::seeded(9), Target::Clipboard)
            .unwrap()
            .unwrap();
        assert_eq!(joined.lines().count(), 3);
        assert!(joined.ends_with('\n'));
    }

    #[test]
    fn clipboard_buffer_is_reserved_up_front() {
        let config = GenerationConfig {
            min_length: 4,
            max_length: 20,
            special_chars_list: "\u{00a7}\u{20ac}".into(),
            ..Default::default()
        };
        let reserved = joined_capacity(&config, 50);
        let joined = write_batch(&config, 50, &mut RngSource::seeded(2), Target::Clipboard)
            .unwrap()
            .unwrap();
        assert!(joined.len() <= reserved);
        assert!(joined.capacity() >= reserved);
    }

    #[test]
    fn file_target_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.txt");
        let config = GenerationConfig::default().with_length(8);
        let mut rng = RngSource::seeded(5);

        write_batch(&config, 2, &mut rng, Target::File(&path)).unwrap();
        write_batch(&config, 3, &mut rng, Target::File(&path)).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn generation_error_surfaces() {
        let config = GenerationConfig {
            allow_capital_letters: false,
            use_numbers: false,
            use_special_chars: false,
            exclude_chars: crate::pass::charset::LOWERCASE.into(),
            ..Default::default()
        };
        let mut out = Vec::new();
        let err = write_to(&config, 1, &mut RngSource::seeded(0), &mut out).unwrap_err();
        assert!(matches!(err, OutputError::Generate(GenerateError::EmptyPool)));
        assert!(out.is_empty());
    }

    #[test]
    fn secure_writer_flushes_large_writes() {
        let mut sink = Vec::new();
        {
            let mut w = SecureBufWriter::new(&mut sink);
            w.write_all(&[b'x'; BUF_CAPACITY + 10]).unwrap();
            w.write_all(b"tail").unwrap();
        }
        assert_eq!(sink.len(), BUF_CAPACITY + 14);
        assert!(sink.ends_with(b"tail"));
    }
}
