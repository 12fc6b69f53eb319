//! Load a file, edit a few values, and save it back. Untouched lines
//! keep their formatting; edited lines normalize to `key=value`.
//!
//! ```bash
//! cargo run --example edit_and_save
//! ```

use ini_edit::IniFile;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::temp_dir().join("ini_edit_demo.ini");
    std::fs::write(
        &path,
        "# demo config\n[server]\nhost   =   localhost\nport   =   8080\n",
    )?;

    let mut file = IniFile::open(&path)?;
    println!("loaded {}", path.display());

    file.set_value("server", "port", "9090")?;
    file.set_value("logging", "level", "debug")?;
    file.save()?;

    println!("after edit:\n{}", std::fs::read_to_string(&path)?);

    // a one-shot variant that persists immediately
    file.set_value_and_save("server", "host", "0.0.0.0")?;
    println!("after set_value_and_save:\n{}", std::fs::read_to_string(&path)?);

    std::fs::remove_file(&path).ok();
    Ok(())
}
