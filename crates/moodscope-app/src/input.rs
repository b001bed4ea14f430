//! Transcript providers: where the text to analyze comes from.

use std::io::{self, Read};
use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading input text.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read standard input: {0}")]
    Stdin(#[source] io::Error),
}

/// A source of text to analyze.
pub trait TranscriptProvider {
    /// Reads the full transcript.
    fn transcript(&mut self) -> Result<String, InputError>;

    /// Short description for logs.
    fn describe(&self) -> String;
}

/// Text passed directly on the command line.
pub struct ArgumentProvider {
    text: String,
}

impl ArgumentProvider {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TranscriptProvider for ArgumentProvider {
    fn transcript(&mut self) -> Result<String, InputError> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        "argument".to_string()
    }
}

/// Text read from a file.
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TranscriptProvider for FileProvider {
    fn transcript(&mut self) -> Result<String, InputError> {
        std::fs::read_to_string(&self.path).map_err(|source| InputError::File {
            path: self.path.clone(),
            source,
        })
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Text read to the end of a reader, standard input by default.
pub struct StdinProvider<R = io::Stdin> {
    reader: R,
}

impl StdinProvider {
    pub fn new() -> Self {
        Self { reader: io::stdin() }
    }
}

impl Default for StdinProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Read> StdinProvider<R> {
    /// Reads from an arbitrary reader instead of stdin.
    pub fn from_reader(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> TranscriptProvider for StdinProvider<R> {
    fn transcript(&mut self) -> Result<String, InputError> {
        let mut text = String::new();
        self.reader
            .read_to_string(&mut text)
            .map_err(InputError::Stdin)?;
        Ok(text)
    }

    fn describe(&self) -> String {
        "stdin".to_string()
    }
}

/// Picks the provider for `moodscope analyze`: the argument, then the file,
/// then stdin.
pub fn select_provider(
    text: Option<String>,
    file: Option<PathBuf>,
) -> Box<dyn TranscriptProvider> {
    match (text, file) {
        (Some(text), _) => Box::new(ArgumentProvider::new(text)),
        (None, Some(path)) => Box::new(FileProvider::new(path)),
        (None, None) => Box::new(StdinProvider::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_provider() {
        let mut provider = ArgumentProvider::new("hello there");
        assert_eq!(provider.transcript().unwrap(), "hello there");
        assert_eq!(provider.describe(), "argument");
    }

    #[test]
    fn test_file_provider() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        std::fs::write(&path, "A great day.\nReally!").unwrap();

        let mut provider = FileProvider::new(&path);
        assert_eq!(provider.transcript().unwrap(), "A great day.\nReally!");
    }

    #[test]
    fn test_missing_file() {
        let mut provider = FileProvider::new("/nonexistent/moodscope/input.txt");
        assert!(matches!(
            provider.transcript(),
            Err(InputError::File { .. })
        ));
    }

    #[test]
    fn test_reader_provider() {
        let mut provider = StdinProvider::from_reader("piped text 😊".as_bytes());
        assert_eq!(provider.transcript().unwrap(), "piped text 😊");
        assert_eq!(provider.describe(), "stdin");
    }

    #[test]
    fn test_select_provider_prefers_argument() {
        let provider = select_provider(Some("text".into()), Some("ignored.txt".into()));
        assert_eq!(provider.describe(), "argument");

        let provider = select_provider(None, Some("input.txt".into()));
        assert_eq!(provider.describe(), "file input.txt");

        let provider = select_provider(None, None);
        assert_eq!(provider.describe(), "stdin");
    }
}
