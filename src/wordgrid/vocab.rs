use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use fst::{IntoStreamer, Set, SetBuilder, Streamer};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum VocabError {
    #[error("failed to read word list '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to build word set: {0}")]
    Fst(#[from] fst::Error),

    #[error("word set holds a non UTF-8 entry")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Anything able to hand the solver an ordered list of candidate words
pub trait WordSource {
    fn words(&self) -> Result<Vec<String>, VocabError>;
}

/// Words kept exactly as given, duplicates and order included
#[derive(Debug, Clone, Default)]
pub struct InMemoryWords {
    words: Vec<String>,
}

impl InMemoryWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl WordSource for InMemoryWords {
    fn words(&self) -> Result<Vec<String>, VocabError> {
        Ok(self.words.clone())
    }
}

/// Where a line-delimited word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineInput {
    File(PathBuf),
    Stdin,
    Url(String),
}

/// One word per line, read from a file, stdin or an http(s) URL. Lines are trimmed and lowercased, blank
/// lines are skipped and repeats collapse into one entry.
#[derive(Debug, Clone)]
pub struct PerLineWords {
    input: LineInput,
}

impl PerLineWords {
    pub fn file<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            input: LineInput::File(path.into()),
        }
    }

    pub fn stdin() -> Self {
        Self {
            input: LineInput::Stdin,
        }
    }

    pub fn url<S: Into<String>>(url: S) -> Self {
        Self {
            input: LineInput::Url(url.into()),
        }
    }

    /// `-` stands for stdin, `http://` and `https://` for a download, anything else is a path
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::stdin()
        } else if is_url(arg) {
            Self::url(arg)
        } else {
            Self::file(arg)
        }
    }

    pub fn input(&self) -> &LineInput {
        &self.input
    }

    fn label(&self) -> PathBuf {
        match &self.input {
            LineInput::File(path) => path.clone(),
            LineInput::Stdin => PathBuf::from("<stdin>"),
            LineInput::Url(url) => PathBuf::from(url),
        }
    }
}

impl WordSource for PerLineWords {
    fn words(&self) -> Result<Vec<String>, VocabError> {
        let vocab = match &self.input {
            LineInput::File(path) => {
                let file = File::open(path).map_err(|source| VocabError::Io {
                    path: path.clone(),
                    source,
                })?;
                Vocabulary::from_reader(BufReader::new(file))
            }
            LineInput::Stdin => Vocabulary::from_reader(io::stdin().lock()),
            LineInput::Url(url) => {
                info!("Sending request to {}", url);
                let response = reqwest::blocking::get(url.as_str())?.error_for_status()?;
                Vocabulary::from_reader(BufReader::new(response))
            }
        }
        .map_err(|e| match e {
            VocabError::Io { source, .. } => VocabError::Io {
                path: self.label(),
                source,
            },
            other => other,
        })?;

        if vocab.is_empty() {
            warn!(source = %self.label().display(), "word list holds no words");
        } else {
            info!(words = vocab.len(), source = %self.label().display(), "loaded word list");
        }
        vocab.words()
    }
}

/// Deduplicated, sorted word set backed by an fst
pub struct Vocabulary {
    set: Set<Vec<u8>>,
}

impl Vocabulary {
    pub fn from_words<I, S>(words: I) -> Result<Self, VocabError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // The fst builder wants its keys sorted and unique
        let entries = words
            .into_iter()
            .filter_map(|w| normalize(w.as_ref()))
            .collect::<BTreeSet<_>>();

        let mut build = SetBuilder::memory();
        build.extend_iter(entries)?;
        let set = Set::new(build.into_inner()?)?;
        debug!(words = set.len(), "built vocabulary");
        Ok(Self { set })
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, VocabError> {
        let mut lines = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|source| VocabError::Io {
                path: PathBuf::new(),
                source,
            })?;
            lines.push(line);
        }
        Self::from_words(lines)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// All words in lexicographic byte order
    pub fn words(&self) -> Result<Vec<String>, VocabError> {
        let mut stream = self.set.into_stream();
        let mut words = Vec::with_capacity(self.set.len());
        while let Some(key) = stream.next() {
            words.push(String::from_utf8(key.to_vec())?);
        }
        Ok(words)
    }
}

fn is_url(arg: &str) -> bool {
    let lower = arg.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Trimmed and lowercased, or None for a blank line
fn normalize(line: &str) -> Option<String> {
    let word = line.trim();
    if word.is_empty() {
        None
    } else {
        Some(word.to_lowercase())
    }
}
