//! File-backed documents: the storage boundary around [`IniDocument`].
//!
//! An [`IniFile`] ties one document to one path for its lifetime.
//! Re-loading with a different path retargets the same instance. Reads
//! and writes go through `std::fs`; everything between load and save is
//! pure in-memory work on the document.

use std::path::{Path, PathBuf};

use crate::document::{IniDocument, KeyLookup};
use crate::error::{IniError, IniResult};
use crate::parser::IniParser;

/// An INI document bound to a file path.
pub struct IniFile {
    /// Path the document was loaded from, set at load time
    path: Option<PathBuf>,

    /// Parsed tree; `None` until the first successful load
    document: Option<IniDocument>,
}

impl IniFile {
    /// Create a file with no path and no document. Every query misses
    /// and every mutation fails with [`IniError::NotLoaded`] until
    /// [`IniFile::load`] succeeds.
    pub fn new() -> Self {
        Self {
            path: None,
            document: None,
        }
    }

    /// Load and parse `path` in one step.
    pub fn open(path: impl AsRef<Path>) -> IniResult<Self> {
        let mut file = Self::new();
        file.load(path, false)?;
        Ok(file)
    }

    /// Load a document from `path`, replacing any previous tree.
    ///
    /// With `clear` set, the file is not read at all and an empty line
    /// sequence is parsed instead; this is how a document is created or
    /// reset. The path is remembered either way, so a later
    /// [`IniFile::save`] writes there.
    pub fn load(&mut self, path: impl AsRef<Path>, clear: bool) -> IniResult<()> {
        let path = path.as_ref();

        self.document = None;
        self.path = Some(path.to_path_buf());

        let lines = if clear { Vec::new() } else { read_lines(path)? };
        self.document = Some(IniParser::parse_document(&lines)?);
        Ok(())
    }

    /// Serialize the document and write it to the load path.
    ///
    /// A document that serializes to zero lines is reported as
    /// [`IniError::EmptyDocument`] and nothing is written.
    pub fn save(&self) -> IniResult<()> {
        let document = self.document.as_ref().ok_or(IniError::NotLoaded)?;
        let path = self.path.as_ref().ok_or(IniError::NotLoaded)?;

        let lines = document.to_lines();
        if lines.is_empty() {
            return Err(IniError::EmptyDocument);
        }

        let mut contents = lines.join("\n");
        contents.push('\n');
        std::fs::write(path, contents)
            .map_err(|e| IniError::io(path.display().to_string(), e.to_string()))
    }

    /// The path this document is bound to.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether a document has been parsed.
    pub fn is_loaded(&self) -> bool {
        self.document.is_some()
    }

    /// The parsed document, if any.
    pub fn document(&self) -> Option<&IniDocument> {
        self.document.as_ref()
    }

    /// Mutable access to the parsed document, if any.
    pub fn document_mut(&mut self) -> Option<&mut IniDocument> {
        self.document.as_mut()
    }

    /// Whether the named section exists. False when nothing is loaded.
    pub fn section_exists(&self, section: &str) -> bool {
        self.document
            .as_ref()
            .is_some_and(|document| document.section_exists(section))
    }

    /// Whether the section exists and contains `key`.
    pub fn key_exists(&self, section: &str, key: &str) -> bool {
        self.document
            .as_ref()
            .is_some_and(|document| document.key_exists(section, key))
    }

    /// Look up a key; see [`IniDocument::get_value`]. Misses (including
    /// "nothing loaded") are `None`, never errors.
    pub fn get_value(&self, section: &str, key: &str) -> Option<KeyLookup<'_>> {
        self.document.as_ref()?.get_value(section, key)
    }

    /// Set a value; see [`IniDocument::set_value`]. Fails with
    /// [`IniError::NotLoaded`] when no document has been parsed.
    pub fn set_value(&mut self, section: &str, key: &str, value: &str) -> IniResult<()> {
        match &mut self.document {
            Some(document) => document.set_value(section, key, value),
            None => Err(IniError::NotLoaded),
        }
    }

    /// Set a value and persist immediately. When the mutation fails
    /// nothing changed, so no write is attempted.
    pub fn set_value_and_save(&mut self, section: &str, key: &str, value: &str) -> IniResult<()> {
        self.set_value(section, key, value)?;
        self.save()
    }
}

impl Default for IniFile {
    fn default() -> Self {
        Self::new()
    }
}

fn read_lines(path: &Path) -> IniResult<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| IniError::io(path.display().to_string(), e.to_string()))?;
    Ok(content.lines().map(str::to_string).collect())
}
