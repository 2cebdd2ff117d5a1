use anyhow::Result;
use colored::Colorize;
use ffmetactl::metadata::parse_grouping;

/// Print the series name and index parsed from a grouping string
pub fn run(text: &str, json: bool) -> Result<()> {
    let (series, index) = parse_grouping(text);

    if json {
        let value = serde_json::json!({ "series": series, "series_index": index });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{:>12}: {}", "Series".cyan(), series);
        println!("{:>12}: {}", "Index".cyan(), index);
    }

    Ok(())
}
