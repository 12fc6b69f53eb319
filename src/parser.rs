use pest::Parser;
use pest_derive::Parser;

use crate::document::{Entry, IniDocument, Section, SectionHeader};
use crate::error::IniResult;

#[derive(Parser)]
#[grammar = "ini.pest"]
pub struct IniParser;

/// Classification of a single physical line.
///
/// Borrowed fields point into the trimmed portion of the input line, so
/// extraction never copies. The classification order is fixed: blank,
/// comment, pair, bare key, section start. A line whose first character
/// is `=` has no key text and is a bare key, not a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty or whitespace-only line
    Blank,

    /// Comment starting with `#` or `//`; holds the text after the marker
    Comment { text: &'a str },

    /// `key=value` line; key is right-trimmed, value left-trimmed
    Pair { key: &'a str, value: &'a str },

    /// Line with no `=` past its first character; the whole trimmed text is the key
    BareKey { key: &'a str },

    /// A `[...]` line: not section content, it opens the next section
    SectionStart,
}

impl IniParser {
    /// Classify one physical line of an INI document.
    ///
    /// Returns [`LineClass::SectionStart`] without consuming anything when
    /// the line would open a new section; callers scanning section content
    /// stop there.
    pub fn classify(line: &str) -> IniResult<LineClass<'_>> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(LineClass::Blank);
        }

        let mut pairs = IniParser::parse(Rule::line, trimmed)?;
        let kind = pairs.next().unwrap().into_inner().next().unwrap();

        Ok(match kind.as_rule() {
            Rule::comment => {
                let text = kind.into_inner().next().unwrap().as_str();
                LineClass::Comment {
                    text: text.trim_start(),
                }
            }
            Rule::pair => {
                let mut inner = kind.into_inner();
                let key = inner.next().unwrap().as_str().trim_end();
                let value = inner.next().unwrap().as_str().trim_start();
                LineClass::Pair { key, value }
            }
            Rule::header => LineClass::SectionStart,
            _ => LineClass::BareKey { key: trimmed },
        })
    }

    /// Parse a full ordered line sequence into a document.
    ///
    /// An empty sequence parses to a document with zero sections. The
    /// returned document is fully indexed.
    pub fn parse_document(lines: &[String]) -> IniResult<IniDocument> {
        let mut document = IniDocument::new();

        let mut cursor = 0;
        while cursor < lines.len() {
            let section = Self::parse_section(lines, &mut cursor)?;
            document.sections.push(section);
        }

        document.rebuild_index();
        Ok(document)
    }

    /// Parse one section starting at the cursor position.
    ///
    /// A line that is blank or does not open with `[` starts a header-less
    /// implicit section whose content begins at the cursor itself.
    /// Content consumes lines until the next `[...]` line, which is left
    /// for the following section.
    pub(crate) fn parse_section(lines: &[String], cursor: &mut usize) -> IniResult<Section> {
        let first = &lines[*cursor];
        let trimmed = first.trim();

        let header = if trimmed.is_empty() || !trimmed.starts_with('[') {
            None
        } else {
            *cursor += 1;
            Some(SectionHeader::from_raw(first.clone()))
        };

        let mut section = Section::new(header);

        while *cursor < lines.len() {
            let line = &lines[*cursor];
            let entry = match Self::classify(line)? {
                LineClass::Blank => Entry::Blank { raw: line.clone() },
                LineClass::Comment { text } => Entry::Comment {
                    raw: line.clone(),
                    text: text.to_string(),
                },
                LineClass::Pair { key, value } => Entry::Pair {
                    raw: line.clone(),
                    key: key.to_string(),
                    value: value.to_string(),
                },
                LineClass::BareKey { key } => Entry::BareKey {
                    raw: line.clone(),
                    key: key.to_string(),
                },
                LineClass::SectionStart => break,
            };
            section.entries.push(entry);
            *cursor += 1;
        }

        Ok(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(line: &str) -> LineClass<'_> {
        IniParser::classify(line).unwrap()
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify(""), LineClass::Blank);
        assert_eq!(classify("   "), LineClass::Blank);
        assert_eq!(classify("\t \t"), LineClass::Blank);
    }

    #[test]
    fn test_hash_comment() {
        assert_eq!(classify("# hello"), LineClass::Comment { text: "hello" });
        assert_eq!(classify("#hello"), LineClass::Comment { text: "hello" });
        assert_eq!(classify("  # indented"), LineClass::Comment { text: "indented" });
        assert_eq!(classify("#"), LineClass::Comment { text: "" });
    }

    #[test]
    fn test_slash_comment() {
        assert_eq!(classify("// hello"), LineClass::Comment { text: "hello" });
        assert_eq!(classify("//x=1"), LineClass::Comment { text: "x=1" });
        assert_eq!(classify("//"), LineClass::Comment { text: "" });
    }

    #[test]
    fn test_single_slash_is_not_a_comment() {
        // one slash has no comment marker; "/x = 1" is a pair
        assert_eq!(
            classify("/x = 1"),
            LineClass::Pair {
                key: "/x",
                value: "1"
            }
        );
        assert_eq!(classify("/"), LineClass::BareKey { key: "/" });
    }

    #[test]
    fn test_pair() {
        assert_eq!(
            classify("key=value"),
            LineClass::Pair {
                key: "key",
                value: "value"
            }
        );
        assert_eq!(
            classify("  key  =  value  "),
            LineClass::Pair {
                key: "key",
                value: "value"
            }
        );
    }

    #[test]
    fn test_pair_splits_on_first_equals() {
        assert_eq!(
            classify("a=b=c"),
            LineClass::Pair {
                key: "a",
                value: "b=c"
            }
        );
    }

    #[test]
    fn test_pair_with_empty_value() {
        assert_eq!(classify("key="), LineClass::Pair { key: "key", value: "" });
    }

    #[test]
    fn test_leading_equals_is_bare_key() {
        assert_eq!(classify("=value"), LineClass::BareKey { key: "=value" });
        assert_eq!(classify("="), LineClass::BareKey { key: "=" });
    }

    #[test]
    fn test_bare_key() {
        assert_eq!(classify("flag"), LineClass::BareKey { key: "flag" });
        assert_eq!(classify("  flag  "), LineClass::BareKey { key: "flag" });
    }

    #[test]
    fn test_section_start() {
        assert_eq!(classify("[section]"), LineClass::SectionStart);
        assert_eq!(classify("  [section]"), LineClass::SectionStart);
        assert_eq!(classify("[unclosed"), LineClass::SectionStart);
    }

    #[test]
    fn test_bracketed_pair_is_a_pair() {
        // `=` past index 0 wins over the bracket
        assert_eq!(
            classify("[a=b]"),
            LineClass::Pair {
                key: "[a",
                value: "b]"
            }
        );
    }

    #[test]
    fn test_parse_empty_sequence() {
        let document = IniParser::parse_document(&[]).unwrap();
        assert!(document.sections.is_empty());
    }

    #[test]
    fn test_parse_section_stops_at_next_header() {
        let lines: Vec<String> = ["[a]", "x=1", "[b]", "y=2"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let mut cursor = 0;
        let section = IniParser::parse_section(&lines, &mut cursor).unwrap();
        assert_eq!(cursor, 2);
        assert_eq!(section.header.as_ref().unwrap().name, "a");
        assert_eq!(section.entries.len(), 1);
    }

    #[test]
    fn test_parse_implicit_section_consumes_no_header() {
        let lines: Vec<String> = ["x=1", "y=2"].iter().map(|s| s.to_string()).collect();

        let mut cursor = 0;
        let section = IniParser::parse_section(&lines, &mut cursor).unwrap();
        assert_eq!(cursor, 2);
        assert!(section.header.is_none());
        assert!(section.implicit);
        assert_eq!(section.entries.len(), 2);
    }
}
