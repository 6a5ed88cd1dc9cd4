//! Opening the pipeline's input and output.
//!
//! A missing path means stdin/stdout. Files are checked up front so a bad
//! path fails before anything is decoded or written.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use castedit_common::{CasteditError, CasteditResult};

/// Where a cast is read from.
pub struct InputStream {
    source: PathBuf,
    reader: Box<dyn BufRead>,
}

/// Where a cast is written to.
pub struct OutputStream {
    target: PathBuf,
    writer: Box<dyn Write>,
}

const STDIN: &str = "<stdin>";
const STDOUT: &str = "<stdout>";

/// Open `path` for reading, or stdin when `None`.
///
/// Fails with [`CasteditError::FileNotFound`] or
/// [`CasteditError::IsDirectory`] for unusable paths.
pub fn open_input(path: Option<&Path>) -> CasteditResult<InputStream> {
    let Some(path) = path else {
        return Ok(InputStream {
            source: PathBuf::from(STDIN),
            reader: Box::new(io::stdin().lock()),
        });
    };

    let file = File::open(path).map_err(|e| CasteditError::path_io(path, e))?;
    let metadata = file
        .metadata()
        .map_err(|e| CasteditError::path_io(path, e))?;
    if metadata.is_dir() {
        return Err(CasteditError::IsDirectory {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(path = %path.display(), bytes = metadata.len(), "opened input");
    Ok(InputStream {
        source: path.to_path_buf(),
        reader: Box::new(BufReader::new(file)),
    })
}

/// Create or truncate `path` for writing, or stdout when `None`.
pub fn open_output(path: Option<&Path>) -> CasteditResult<OutputStream> {
    let Some(path) = path else {
        return Ok(OutputStream {
            target: PathBuf::from(STDOUT),
            writer: Box::new(BufWriter::new(io::stdout().lock())),
        });
    };

    let file = File::create(path).map_err(|e| CasteditError::path_io(path, e))?;
    tracing::debug!(path = %path.display(), "opened output");
    Ok(OutputStream {
        target: path.to_path_buf(),
        writer: Box::new(BufWriter::new(file)),
    })
}

/// Reject writing to the file being read: it would be truncated before
/// it is decoded.
pub(crate) fn ensure_distinct(input: Option<&Path>, output: Option<&Path>) -> CasteditResult<()> {
    let (Some(input), Some(output)) = (input, output) else {
        return Ok(());
    };
    if !output.exists() {
        return Ok(());
    }
    let same = match (input.canonicalize(), output.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => input == output,
    };
    if same {
        return Err(CasteditError::invalid_argument(format!(
            "output {} is the same file as the input",
            output.display()
        )));
    }
    Ok(())
}

impl InputStream {
    /// Wrap an arbitrary reader, labelled `source` in logs.
    pub fn from_reader(source: impl Into<PathBuf>, reader: impl BufRead + 'static) -> Self {
        Self {
            source: source.into(),
            reader: Box::new(reader),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}

impl OutputStream {
    /// Wrap an arbitrary writer, labelled `target` in logs.
    pub fn from_writer(target: impl Into<PathBuf>, writer: impl Write + 'static) -> Self {
        Self {
            target: target.into(),
            writer: Box::new(writer),
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }
}

impl Read for InputStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

impl BufRead for InputStream {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.reader.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.reader.consume(amt)
    }
}

impl Write for OutputStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl fmt::Debug for InputStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputStream")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for OutputStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputStream")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "castedit-streams-{name}-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_input_is_file_not_found() {
        let dir = scratch_dir("missing");
        let err = open_input(Some(&dir.join("nope.cast"))).unwrap_err();
        assert!(matches!(err, CasteditError::FileNotFound { .. }));
    }

    #[test]
    fn test_directory_input_is_rejected() {
        let dir = scratch_dir("dir");
        let err = open_input(Some(&dir)).unwrap_err();
        assert!(matches!(err, CasteditError::IsDirectory { .. }));
    }

    #[test]
    fn test_output_is_truncated() {
        let dir = scratch_dir("truncate");
        let path = dir.join("out.cast");
        std::fs::write(&path, "old contents that are long").unwrap();

        let mut out = open_output(Some(&path)).unwrap();
        out.write_all(b"new").unwrap();
        out.flush().unwrap();
        drop(out);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_same_file_for_input_and_output_is_rejected() {
        let dir = scratch_dir("same");
        let path = dir.join("demo.cast");
        std::fs::write(&path, "{}").unwrap();

        assert!(ensure_distinct(Some(&path), Some(&path)).is_err());
        assert!(ensure_distinct(Some(&path), Some(&dir.join("other.cast"))).is_ok());
        assert!(ensure_distinct(Some(&path), None).is_ok());
        assert!(ensure_distinct(None, Some(&path)).is_ok());
    }
}
