use std::path::PathBuf;

use clap::Parser;
use cs_catalog::CatalogConfig;

#[derive(Debug, Parser)]
#[command(name = "cs_catalog_tui", version, about = "Counter-Strike item catalog browser")]
pub struct CliArgs {
    /// Fetch one category, print it and exit
    #[arg(long)]
    pub headless: bool,

    /// Category to fetch (e.g. weapons, music-kits). Interactive mode opens on it
    #[arg(long, short = 'c', value_name = "CATEGORY", value_parser = parse_category)]
    pub category: Option<cs_catalog::Category>,

    /// Print headless results as JSON
    #[arg(long, conflicts_with = "html")]
    pub json: bool,

    /// Print headless results as HTML markup
    #[arg(long)]
    pub html: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the catalog API root
    #[arg(long = "api-root", value_name = "URL")]
    pub api_root: Option<String>,

    /// Override the catalog language segment
    #[arg(long, value_name = "LANG")]
    pub language: Option<String>,

    /// Write interactive-mode logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl CliArgs {
    /// Command-line values win over `.env` and the process environment.
    pub fn apply_overrides(&self, config: &mut CatalogConfig) {
        if let Some(root) = non_empty(self.api_root.as_deref()) {
            config.api_root = root;
        }
        if let Some(language) = non_empty(self.language.as_deref()) {
            config.language = language;
        }
    }

    pub const fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.html {
            OutputFormat::Html
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn parse_category(value: &str) -> Result<cs_catalog::Category, String> {
    cs_catalog::Category::parse(value).ok_or_else(|| {
        let known = cs_catalog::Category::ALL
            .iter()
            .map(|category| category.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!("unknown category `{value}` (expected one of: {known})")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_catalog::Category;

    #[test]
    fn parses_headless_category_and_format() {
        let args = CliArgs::parse_from(["cs_catalog_tui", "--headless", "-c", "music_kits", "--json"]);
        assert!(args.headless);
        assert_eq!(args.category, Some(Category::MusicKits));
        assert_eq!(args.output_format(), OutputFormat::Json);
    }

    #[test]
    fn rejects_unknown_category() {
        let result = CliArgs::try_parse_from(["cs_catalog_tui", "--category", "gloves"]);
        assert!(result.is_err());
    }

    #[test]
    fn json_and_html_conflict() {
        let result = CliArgs::try_parse_from(["cs_catalog_tui", "--json", "--html"]);
        assert!(result.is_err());
    }

    #[test]
    fn overrides_replace_configured_values() {
        let args = CliArgs::parse_from([
            "cs_catalog_tui",
            "--api-root",
            "http://localhost:8080/api",
            "--language",
            "de",
        ]);
        let mut config = CatalogConfig::default();

        args.apply_overrides(&mut config);

        assert_eq!(
            config.category_url(Category::Keys),
            "http://localhost:8080/api/de/keys.json"
        );
    }

    #[test]
    fn blank_overrides_keep_the_defaults() {
        let args = CliArgs::parse_from(["cs_catalog_tui", "--language", " "]);
        let mut config = CatalogConfig::default();

        args.apply_overrides(&mut config);

        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn category_is_accepted_without_headless() {
        let args = CliArgs::parse_from(["cs_catalog_tui", "--category", "agents"]);
        assert!(!args.headless);
        assert_eq!(args.category, Some(Category::Agents));
    }
}
