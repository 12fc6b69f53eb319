//! Document model for parsed INI files.
//!
//! Every tree node keeps the raw text of the line it came from, so an
//! unmutated document serializes back to exactly the lines it was parsed
//! from. Only lines touched by [`IniDocument::set_value`] have their raw
//! text regenerated, always to the canonical `key=value` form.
//!
//! The main types are:
//! - [`IniDocument`] - the parsed document: an ordered list of sections
//! - [`Section`] - an optional header plus ordered content entries
//! - [`Entry`] - one classified physical line within a section
//! - [`KeyLookup`] - the outcome of a key lookup (value vs. bare flag)

use std::collections::HashMap;

use crate::error::IniResult;
use crate::parser::IniParser;

/// Index key for the header-less section that precedes the first
/// `[...]` header. Distinct from any name a header can produce, since
/// extracted names have their brackets stripped.
pub const IMPLICIT_SECTION_KEY: &str = "##VirtualSection##";

/// A parsed INI document with full source fidelity.
#[derive(Debug, Clone)]
pub struct IniDocument {
    /// Sections in physical order. The implicit section, if any, is first.
    pub sections: Vec<Section>,

    /// Mapping from section name to its position in `sections`.
    /// Later sections with the same name overwrite the mapping; every
    /// section stays in the physical sequence regardless.
    section_index: HashMap<String, usize>,
}

/// One section: an optional header line plus its content entries.
#[derive(Debug, Clone)]
pub struct Section {
    /// Header line, absent only for the implicit section
    pub header: Option<SectionHeader>,

    /// Content entries in physical order
    pub entries: Vec<Entry>,

    /// Whether this is the header-less implicit section
    pub implicit: bool,

    /// Mapping from key name to its position in `entries`.
    /// Duplicate keys overwrite the mapping, last occurrence wins.
    key_index: HashMap<String, usize>,
}

/// A `[...]` header line with its extracted name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeader {
    /// The header line verbatim
    pub raw: String,

    /// Text between the leading `[` and the final character of the
    /// trimmed line, trimmed of surrounding whitespace
    pub name: String,
}

/// One classified physical line within a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Empty or whitespace-only line
    Blank { raw: String },

    /// `#` or `//` comment; `text` is the body after the marker
    Comment { raw: String, text: String },

    /// Line with no `=` past its first character, kept as a present key
    /// with no value
    BareKey { raw: String, key: String },

    /// `key=value` line
    Pair {
        raw: String,
        key: String,
        value: String,
    },
}

/// Outcome of a key lookup.
///
/// Distinguishes "key present with a value" from "key present as a bare
/// flag"; a missing key is `None` at the lookup call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyLookup<'a> {
    /// The key comes from a `key=value` line and carries this value
    Value(&'a str),

    /// The key exists as a bare line with no value
    Bare,
}

impl<'a> KeyLookup<'a> {
    /// The stored value, or `None` for a bare key.
    pub fn value(self) -> Option<&'a str> {
        match self {
            KeyLookup::Value(value) => Some(value),
            KeyLookup::Bare => None,
        }
    }
}

impl SectionHeader {
    /// Build a header from its raw line.
    ///
    /// The name is taken from the trimmed line by dropping the first and
    /// last characters, then trimming again. An unclosed header like
    /// `[general` therefore loses its final character; nothing validates
    /// that the bracket was ever closed.
    pub fn from_raw(raw: String) -> Self {
        let trimmed = raw.trim();
        let inner = trimmed.strip_prefix('[').unwrap_or(trimmed);
        let inner = match inner.char_indices().next_back() {
            Some((idx, _)) => &inner[..idx],
            None => inner,
        };
        let name = inner.trim().to_string();

        Self { raw, name }
    }
}

impl Entry {
    /// The physical line this entry serializes to.
    pub fn raw(&self) -> &str {
        match self {
            Entry::Blank { raw }
            | Entry::Comment { raw, .. }
            | Entry::BareKey { raw, .. }
            | Entry::Pair { raw, .. } => raw,
        }
    }

    /// The key this entry is indexed under, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Entry::BareKey { key, .. } | Entry::Pair { key, .. } => Some(key),
            _ => None,
        }
    }

    /// The stored value for a pair entry.
    pub fn value(&self) -> Option<&str> {
        match self {
            Entry::Pair { value, .. } => Some(value),
            _ => None,
        }
    }
}

impl Section {
    /// Create an empty section with the given header.
    pub fn new(header: Option<SectionHeader>) -> Self {
        let implicit = header.is_none();
        Self {
            header,
            entries: Vec::new(),
            implicit,
            key_index: HashMap::new(),
        }
    }

    /// The name this section is indexed under: the extracted header name,
    /// or the implicit-section sentinel.
    pub fn index_name(&self) -> &str {
        match &self.header {
            Some(header) => &header.name,
            None => IMPLICIT_SECTION_KEY,
        }
    }

    /// Rebuild the key index from the current entries.
    pub fn rebuild_index(&mut self) {
        self.key_index.clear();
        for (idx, entry) in self.entries.iter().enumerate() {
            if let Some(key) = entry.key() {
                self.key_index.insert(key.to_string(), idx);
            }
        }
    }

    /// Whether the key index contains `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.key_index.contains_key(key)
    }

    /// The indexed entry for `key`: the last occurrence when the key
    /// appears more than once.
    pub fn entry_for(&self, key: &str) -> Option<&Entry> {
        self.key_index.get(key).map(|&idx| &self.entries[idx])
    }

    fn set_value(&mut self, key: &str, value: &str) {
        let pair = Entry::Pair {
            raw: format!("{}={}", key, value),
            key: key.to_string(),
            value: value.to_string(),
        };

        match self.key_index.get(key) {
            // Overwrites a pair in place and promotes a bare key to a
            // pair; either way the raw text is regenerated.
            Some(&idx) => self.entries[idx] = pair,
            None => {
                self.entries.push(pair);
                self.key_index.insert(key.to_string(), self.entries.len() - 1);
            }
        }
    }
}

impl IniDocument {
    /// Create an empty document with zero sections.
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            section_index: HashMap::new(),
        }
    }

    /// Parse a document from a string, splitting it into physical lines.
    ///
    /// An empty string parses to a document with zero sections.
    pub fn parse(input: &str) -> IniResult<Self> {
        let lines: Vec<String> = input.lines().map(str::to_string).collect();
        IniParser::parse_document(&lines)
    }

    /// Rebuild the section index and every section's key index from the
    /// current tree. Needed after structural edits made outside
    /// [`IniDocument::set_value`].
    pub fn rebuild_index(&mut self) {
        self.section_index.clear();
        for (idx, section) in self.sections.iter_mut().enumerate() {
            section.rebuild_index();
            self.section_index
                .insert(section.index_name().to_string(), idx);
        }
    }

    /// Resolve a section by name; the empty name resolves to the
    /// implicit section. Duplicate names resolve to the last occurrence.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.section_index
            .get(Self::lookup_name(name))
            .map(|&idx| &self.sections[idx])
    }

    /// Mutable variant of [`IniDocument::section`].
    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        match self.section_index.get(Self::lookup_name(name)) {
            Some(&idx) => Some(&mut self.sections[idx]),
            None => None,
        }
    }

    /// Whether a section with this name exists (empty name: the implicit
    /// section).
    pub fn section_exists(&self, name: &str) -> bool {
        self.section_index.contains_key(Self::lookup_name(name))
    }

    /// Whether `section` exists and its key index contains `key`.
    pub fn key_exists(&self, section: &str, key: &str) -> bool {
        self.section(section)
            .is_some_and(|section| section.contains_key(key))
    }

    /// Look up a key within a section.
    ///
    /// `None` means section or key not found. A found key reports
    /// [`KeyLookup::Value`] when it carries a value and
    /// [`KeyLookup::Bare`] when the line had no `=`, so "absent" and
    /// "present but valueless" stay distinguishable.
    pub fn get_value(&self, section: &str, key: &str) -> Option<KeyLookup<'_>> {
        match self.section(section)?.entry_for(key)? {
            Entry::Pair { value, .. } => Some(KeyLookup::Value(value)),
            Entry::BareKey { .. } => Some(KeyLookup::Bare),
            _ => None,
        }
    }

    /// Set `key` to `value` inside `section`, creating both on demand.
    ///
    /// An existing pair has its value overwritten; a bare key is
    /// promoted to a pair. Either way the entry's raw text becomes
    /// `key=value`, discarding whatever spacing the original line had.
    /// Untouched entries keep their raw text verbatim. A missing section
    /// is synthesized through the regular section parser and appended to
    /// the end of the document.
    pub fn set_value(&mut self, section_name: &str, key: &str, value: &str) -> IniResult<()> {
        if let Some(&idx) = self.section_index.get(Self::lookup_name(section_name)) {
            self.sections[idx].set_value(key, value);
            return Ok(());
        }

        let mut lines = Vec::new();
        if !section_name.is_empty() {
            lines.push(format!("[{}]", section_name));
        }
        lines.push(format!("{}={}", key, value));

        let mut cursor = 0;
        let mut section = IniParser::parse_section(&lines, &mut cursor)?;
        section.rebuild_index();

        let name = section.index_name().to_string();
        self.sections.push(section);
        self.section_index.insert(name, self.sections.len() - 1);
        Ok(())
    }

    /// Reconstitute the full line sequence in structural order.
    ///
    /// A document with zero sections produces an empty sequence, which
    /// callers should treat as "nothing to write".
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for section in &self.sections {
            if let Some(header) = &section.header {
                lines.push(header.raw.clone());
            }
            for entry in &section.entries {
                lines.push(entry.raw().to_string());
            }
        }
        lines
    }

    /// Serialize to a string, one line per physical line.
    pub fn serialize(&self) -> String {
        let mut output = String::new();
        for line in self.to_lines() {
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    fn lookup_name(name: &str) -> &str {
        if name.is_empty() {
            IMPLICIT_SECTION_KEY
        } else {
            name
        }
    }
}

impl Default for IniDocument {
    fn default() -> Self {
        Self::new()
    }
}
