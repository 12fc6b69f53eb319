use ini_edit::{Entry, IniDocument, IniParser, KeyLookup, LineClass};

#[test]
fn test_leading_equals_line_is_a_bare_key() {
    let document = IniDocument::parse("[s]\n=orphan").unwrap();

    // `=` at index 0 means no key text, so the whole line is the key
    assert_eq!(document.get_value("s", "=orphan"), Some(KeyLookup::Bare));
    assert_eq!(document.serialize(), "[s]\n=orphan\n");
}

#[test]
fn test_bracketed_pair_inside_section_body() {
    // `[a=b]` mid-section contains `=` past index 0, so it is a pair,
    // not a new section
    let document = IniDocument::parse("[s]\n[a=b]\nx=1").unwrap();

    assert_eq!(document.sections.len(), 1);
    assert_eq!(document.get_value("s", "[a"), Some(KeyLookup::Value("b]")));
    assert_eq!(document.get_value("s", "x"), Some(KeyLookup::Value("1")));
}

#[test]
fn test_bracketed_pair_at_document_start_is_a_header() {
    // the same line at a section boundary opens a section instead
    let document = IniDocument::parse("[a=b]\nx=1").unwrap();

    assert_eq!(document.sections.len(), 1);
    assert!(document.section_exists("a=b"));
    assert_eq!(document.get_value("a=b", "x"), Some(KeyLookup::Value("1")));
}

#[test]
fn test_unclosed_header_drops_final_character() {
    let document = IniDocument::parse("[genera\nx=1").unwrap();
    assert!(document.section_exists("gener"));
}

#[test]
fn test_empty_header_name() {
    let document = IniDocument::parse("[]\nx=1").unwrap();

    // `[]` indexes under the empty name, which the empty-name lookup
    // cannot reach: that resolves to the implicit-section sentinel
    assert!(!document.section_exists(""));
    assert_eq!(document.get_value("", "x"), None);
    assert_eq!(document.sections[0].index_name(), "");
}

#[test]
fn test_header_name_is_trimmed() {
    let document = IniDocument::parse("  [  padded name  ]  \nx=1").unwrap();
    assert!(document.section_exists("padded name"));
    assert_eq!(document.serialize(), "  [  padded name  ]  \nx=1\n");
}

#[test]
fn test_comment_markers() {
    let document =
        IniDocument::parse("#plain\n# spaced\n//slashed\n// slash spaced\n / not a comment")
            .unwrap();

    let section = &document.sections[0];
    let texts: Vec<_> = section
        .entries
        .iter()
        .filter_map(|e| match e {
            Entry::Comment { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(texts, vec!["plain", "spaced", "slashed", "slash spaced"]);

    // a single slash is no marker; with no `=` the line is a bare key
    assert_eq!(
        document.get_value("", "/ not a comment"),
        Some(KeyLookup::Bare)
    );
}

#[test]
fn test_classifier_is_exposed() {
    assert_eq!(
        IniParser::classify("  theme = dark  ").unwrap(),
        LineClass::Pair {
            key: "theme",
            value: "dark"
        }
    );
    assert_eq!(IniParser::classify("[s]").unwrap(), LineClass::SectionStart);
}

#[test]
fn test_unicode_lines() {
    let input = "[résumé]\nnom = Noël\n# café\n";
    let document = IniDocument::parse(input).unwrap();

    assert!(document.section_exists("résumé"));
    assert_eq!(
        document.get_value("résumé", "nom"),
        Some(KeyLookup::Value("Noël"))
    );
    assert_eq!(document.serialize(), input);
}

#[test]
fn test_document_of_only_blanks_and_comments() {
    let input = "\n# nothing here\n\n";
    let document = IniDocument::parse(input).unwrap();

    assert_eq!(document.sections.len(), 1);
    assert!(document.sections[0].implicit);
    assert_eq!(document.serialize(), input);
}

#[test]
fn test_header_only_document() {
    let document = IniDocument::parse("[empty]").unwrap();

    assert!(document.section_exists("empty"));
    assert!(document.sections[0].entries.is_empty());
    assert_eq!(document.serialize(), "[empty]\n");
}
