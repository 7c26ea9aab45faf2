use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("failed to access '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in '{path}': {source}", path = path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode JSON: {0}")]
    Encode(#[from] serde_json::Error),
}

pub fn to_json_string<T: Serialize>(data: &T, pretty: bool) -> Result<String, SerializationError> {
    let text = if pretty {
        serde_json::to_string_pretty(data)?
    } else {
        serde_json::to_string(data)?
    };
    Ok(text)
}

pub fn save_to_disk<T: Serialize, TPath: AsRef<Path>>(
    data: &T,
    path: TPath,
) -> Result<(), SerializationError> {
    let path = path.as_ref();
    let io_err = |source| SerializationError::Io {
        path: path.to_path_buf(),
        source,
    };
    // Write all bytes to the target file
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)?;
    writer.flush().map_err(io_err)
}

pub fn load_from_disk<T: DeserializeOwned, TPath: AsRef<Path>>(
    path: TPath,
) -> Result<T, SerializationError> {
    let path = path.as_ref();
    // Open the file and read all bytes
    let file = File::open(path).map_err(|source| SerializationError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| SerializationError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        grid: String,
        width: usize,
    }

    #[test]
    fn test_disk_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.json");
        let sample = Sample {
            grid: "abcd".into(),
            width: 2,
        };
        save_to_disk(&sample, &path).unwrap();
        let loaded: Sample = load_from_disk(&path).unwrap();
        assert_eq!(loaded, sample);
    }

    #[test]
    fn test_bad_json_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ \"grid\": ").unwrap();
        let err = load_from_disk::<Sample, _>(&path).unwrap_err();
        assert!(matches!(err, SerializationError::Json { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_from_disk::<Sample, _>("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SerializationError::Io { .. }));
    }

    #[test]
    fn test_to_json_string() {
        let sample = Sample {
            grid: "a".into(),
            width: 1,
        };
        assert_eq!(
            to_json_string(&sample, false).unwrap(),
            r#"{"grid":"a","width":1}"#
        );
    }
}
