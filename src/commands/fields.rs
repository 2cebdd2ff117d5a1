use anyhow::Result;
use ffmetactl::metadata::ALIASES;

/// Run the fields command - list the ffmetadata key to book field mapping
pub fn run() -> Result<()> {
    println!("ffmetadata key -> book field:");
    println!();

    for (key, field) in ALIASES {
        let shape = if field.is_list() { " (list)" } else { "" };
        println!("  {:<14} {}{}", key, field.name(), shape);
    }

    println!();
    println!("Any other key is kept as-is. Chapter keys: TIMEBASE, START, END, title");
    println!("Grouping format: \"<series>, Book <index>\"");

    Ok(())
}
