//! # Ini-edit
//!
//! A format-preserving parser and editor for INI configuration files.
//!
//! The crate parses INI-style text into an editable document tree,
//! supports lookup and mutation of section/key values, and serializes
//! the tree back to text with minimal alteration: every line the caller
//! did not explicitly change comes back verbatim, including blank lines,
//! comments and whatever spacing the original had around `=`.
//!
//! ## Features
//!
//! - **Lossless round-trips**: parse-then-serialize reproduces the input
//!   line for line
//! - **Indexed lookup**: section and key indexes give O(1) access on top
//!   of the ordered line sequence
//! - **In-place mutation**: [`IniDocument::set_value`] rewrites only the
//!   touched line, creating sections and keys on demand
//! - **Bare keys**: a line with no `=` is a present key without a value,
//!   distinct from a missing key
//! - **File binding**: [`IniFile`] ties a document to a path for
//!   load/edit/save workflows
//!
//! ## Example
//!
//! ```rust
//! use ini_edit::{IniDocument, KeyLookup};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut document = IniDocument::parse(
//!     "# database settings\n\
//!      [database]\n\
//!      host = 127.0.0.1\n\
//!      port=5432\n\
//!      readonly",
//! )?;
//!
//! assert_eq!(
//!     document.get_value("database", "host"),
//!     Some(KeyLookup::Value("127.0.0.1"))
//! );
//! assert_eq!(
//!     document.get_value("database", "readonly"),
//!     Some(KeyLookup::Bare)
//! );
//!
//! document.set_value("database", "port", "5433")?;
//! document.set_value("database", "readonly", "true")?;
//!
//! // untouched lines keep their original spacing; edited ones normalize
//! assert_eq!(
//!     document.serialize(),
//!     "# database settings\n[database]\nhost = 127.0.0.1\nport=5433\nreadonly=true\n"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Editing files on disk
//!
//! ```rust,no_run
//! use ini_edit::IniFile;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut file = IniFile::open("app.ini")?;
//! file.set_value_and_save("window", "width", "1280")?;
//! # Ok(())
//! # }
//! ```

// Module declarations
mod document;
mod error;
mod file;
mod parser;

// Public API exports
pub use document::{Entry, IniDocument, KeyLookup, Section, SectionHeader, IMPLICIT_SECTION_KEY};
pub use error::{IniError, IniResult};
pub use file::IniFile;
pub use parser::{IniParser, LineClass};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_parsing() {
        let document = IniDocument::parse("[s]\nkey=123").unwrap();
        assert_eq!(document.get_value("s", "key"), Some(KeyLookup::Value("123")));
    }

    #[test]
    fn test_round_trip() {
        let input = "# header\n[s]\nkey = value\n\nflag";
        let document = IniDocument::parse(input).unwrap();
        assert_eq!(document.serialize(), format!("{}\n", input));
    }

    #[test]
    fn test_set_then_get() {
        let mut document = IniDocument::parse("").unwrap();
        document.set_value("s", "key", "value").unwrap();
        assert_eq!(
            document.get_value("s", "key"),
            Some(KeyLookup::Value("value"))
        );
    }
}
