//! Writing match results to timestamped text files.
//!
//! The engine never touches the filesystem; callers hand its output to an
//! [`Exporter`] after the search is done. The timestamp is always passed in so
//! file names are reproducible in tests.

use std::fmt::Display;
use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use log::info;
use tempfile::NamedTempFile;

use crate::engine::GroupedMatches;
use crate::error::{LetterbankError, Result};

/// Prefix of every exported file name.
pub const FILE_PREFIX: &str = "anagram_results_";

/// Build the export file name for a moment in time: `anagram_results_%Y%m%d_%H%M%S.txt`.
pub fn file_name<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("{FILE_PREFIX}{}.txt", at.format("%Y%m%d_%H%M%S"))
}

/// One word per line, no trailing newline.
pub fn render_flat(words: &[String]) -> String {
    words.join("\n")
}

/// One section per length, longest first: a header line with the length,
/// then the words of that length joined by `", "`. Sections are separated by
/// a blank line.
pub fn render_grouped(groups: &GroupedMatches) -> String {
    groups
        .iter()
        .map(|(length, words)| {
            let joined: Vec<&str> = words.iter().map(String::as_str).collect();
            format!("{length}\n{}", joined.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Writes rendered results into a directory.
#[derive(Debug, Clone)]
pub struct Exporter {
    dir: PathBuf,
}

impl Exporter {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write a flat word list. Returns the path of the new file.
    ///
    /// An existing file with the same name is never overwritten.
    pub fn export_flat<Tz>(&self, words: &[String], at: &DateTime<Tz>) -> Result<PathBuf>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.write(&file_name(at), &render_flat(words))
    }

    /// Write length-grouped results. Returns the path of the new file.
    pub fn export_grouped<Tz>(&self, groups: &GroupedMatches, at: &DateTime<Tz>) -> Result<PathBuf>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.write(&file_name(at), &render_grouped(groups))
    }

    fn write(&self, name: &str, content: &str) -> Result<PathBuf> {
        if self.dir.exists() && !self.dir.is_dir() {
            return Err(LetterbankError::export(format!(
                "{} is not a directory",
                self.dir.display()
            )));
        }
        fs::create_dir_all(&self.dir)?;

        let path = self.dir.join(name);
        let temp_file = NamedTempFile::new_in(&self.dir)?;
        {
            let mut writer = BufWriter::new(&temp_file);
            writer.write_all(content.as_bytes())?;
            writer.flush()?;
        }
        temp_file.persist_noclobber(&path).map_err(|e| {
            if e.error.kind() == ErrorKind::AlreadyExists {
                LetterbankError::export(format!("{} already exists", path.display()))
            } else {
                LetterbankError::Io(e.error)
            }
        })?;

        info!("results saved to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    fn grouped() -> GroupedMatches {
        let mut groups = GroupedMatches::new();
        groups.insert(2, "בא".to_string());
        groups.insert(2, "אב".to_string());
        groups.insert(3, "אבג".to_string());
        groups
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(&at()), "anagram_results_20240309_140507.txt");
    }

    #[test]
    fn test_render_flat() {
        let words = vec!["אבג".to_string(), "אב".to_string()];
        assert_eq!(render_flat(&words), "אבג\nאב");
        assert_eq!(render_flat(&[]), "");
    }

    #[test]
    fn test_render_grouped() {
        assert_eq!(render_grouped(&grouped()), "3\nאבג\n\n2\nאב, בא");
        assert_eq!(render_grouped(&GroupedMatches::new()), "");
    }

    #[test]
    fn test_export_flat_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(dir.path().join("out"));
        let words = vec!["listen".to_string(), "silent".to_string()];

        let path = exporter.export_flat(&words, &at()).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "anagram_results_20240309_140507.txt"
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "listen\nsilent");
    }

    #[test]
    fn test_export_grouped_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(dir.path());

        let path = exporter.export_grouped(&grouped(), &at()).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "3\nאבג\n\n2\nאב, בא");
    }

    #[test]
    fn test_export_into_file_path_fails() {
        let file = NamedTempFile::new().unwrap();
        let exporter = Exporter::new(file.path());
        let result = exporter.export_flat(&["ab".to_string()], &at());
        assert!(matches!(result, Err(LetterbankError::Export(_))));
    }

    #[test]
    fn test_export_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(dir.path());

        let first = exporter.export_flat(&["first".to_string()], &at()).unwrap();
        let second = exporter.export_flat(&["second".to_string()], &at());

        assert!(matches!(second, Err(LetterbankError::Export(_))));
        assert_eq!(fs::read_to_string(&first).unwrap(), "first");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
