//! Parse a document, query it, and show that serialization reproduces
//! the input byte for byte.
//!
//! ```bash
//! cargo run --example round_trip
//! ```

use ini_edit::{IniDocument, KeyLookup};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = "\
# Window placement
[window]
width   =  1280
height  =  720
floating

[theme]
name = gruvbox
";

    let document = IniDocument::parse(input)?;

    println!("sections: {}", document.sections.len());
    println!(
        "window width: {:?}",
        document.get_value("window", "width")
    );
    println!(
        "floating is a bare key: {}",
        document.get_value("window", "floating") == Some(KeyLookup::Bare)
    );

    let output = document.serialize();
    assert_eq!(output, input);
    println!("round-trip identical: {}", output == input);

    Ok(())
}
