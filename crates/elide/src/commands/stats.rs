use elide_pipeline::size;
use std::path::Path;

pub fn run(input: &Path) -> anyhow::Result<()> {
    let data = std::fs::read(input)?;
    println!("{}: {} bytes", input.display(), size(&data));

    if let Ok(text) = String::from_utf8(data) {
        println!("{} characters, {} words", text.chars().count(), text.split_whitespace().count());
    } else {
        println!("(binary blob)");
    }
    Ok(())
}
