use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::info;

// Include default keywords at compile time
const DEFAULT_KEYWORDS_BYTES: &[u8] = include_bytes!("../default_complaint_keywords.txt");

const DEFAULT_KEYWORD_FILE: &str = "complaint_keywords.txt";

/// Load the complaint keyword list. An explicitly given file must exist; with
/// no file given, a `complaint_keywords.txt` in the working directory wins,
/// falling back to the embedded defaults.
pub fn load_keywords(keyword_file_path: Option<&Path>) -> Result<Vec<String>> {
    let start_time = Instant::now();
    let mut keywords = Vec::new();

    if let Some(path) = keyword_file_path {
        info!(action = "load", component = "keyword_file", file_path = ?path, "Loading keywords from specified file");
        if !path.exists() {
            anyhow::bail!("Keyword file not found: {:?}", path);
        }

        let content = fs::read_to_string(path)?;
        keywords.extend(parse_keyword_lines(&content));
    } else {
        let default_file = Path::new(DEFAULT_KEYWORD_FILE);
        if default_file.exists() {
            info!(action = "load", component = "default_keyword_file", file_path = ?default_file, "Loading keywords from default file");
            let content = fs::read_to_string(default_file)?;
            keywords.extend(parse_keyword_lines(&content));
        }

        if keywords.is_empty() {
            info!(
                action = "load",
                component = "embedded_keywords",
                "Using embedded default keywords"
            );
            let default_content = std::str::from_utf8(DEFAULT_KEYWORDS_BYTES)
                .context("Failed to decode embedded default keywords")?;
            keywords.extend(parse_keyword_lines(default_content));
        }
    }

    if keywords.is_empty() {
        anyhow::bail!("Keyword list is empty; nothing to analyze");
    }

    info!(
        action = "complete",
        component = "keyword_loading",
        keyword_count = keywords.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Loaded complaint keywords"
    );
    Ok(keywords)
}

fn parse_keyword_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn init_default_keywords() -> Result<()> {
    let default_file = Path::new(DEFAULT_KEYWORD_FILE);

    if default_file.exists() {
        anyhow::bail!(
            "complaint_keywords.txt already exists. Remove it first if you want to reinitialize."
        );
    }

    let default_content = std::str::from_utf8(DEFAULT_KEYWORDS_BYTES)
        .context("Failed to decode embedded default keywords")?;

    fs::write(default_file, default_content)?;
    println!("Created complaint_keywords.txt with default keywords");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_defaults_are_the_five_shipped_keywords() {
        let content = std::str::from_utf8(DEFAULT_KEYWORDS_BYTES).expect("embedded utf-8");
        assert_eq!(
            parse_keyword_lines(content),
            vec!["delay", "refund", "error", "broken", "complaint"]
        );
    }

    #[test]
    fn keyword_lines_skip_comments_and_blanks() {
        let parsed = parse_keyword_lines("# heading\n\n  delay  \nrefund\n# trailing\n");
        assert_eq!(parsed, vec!["delay", "refund"]);
    }

    #[test]
    fn explicit_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "slow\nmissing parts").expect("write");

        let keywords = load_keywords(Some(file.path())).expect("should load");
        assert_eq!(keywords, vec!["slow", "missing parts"]);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = load_keywords(Some(Path::new("/no/such/keywords.txt"))).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn empty_explicit_file_is_an_error() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        let err = load_keywords(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }
}
