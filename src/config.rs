// ABOUTME: Validated export configuration built from CLI flags
// ABOUTME: Missing url/project map to their dedicated configuration errors

use crate::auth::resolve_api_key;
use crate::cli::Cli;
use crate::{Error, Result};
use reqwest::Url;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub output: PathBuf,
    pub base_url: Url,
    pub api_key: Option<String>,
    pub project: String,
    pub clean: bool,
}

impl ExportConfig {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let url = cli.url.ok_or(Error::MissingUrl)?;
        let base_url = parse_base_url(&url)?;
        let project = cli.project.ok_or(Error::MissingProject)?;

        Ok(ExportConfig {
            output: cli.output,
            base_url,
            api_key: resolve_api_key(cli.key),
            project,
            clean: cli.clean,
        })
    }

    /// Base URL without the trailing slash, ready for endpoint concatenation.
    pub fn base_url_str(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| Error::InvalidUrl(format!("{}: {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::InvalidUrl(format!("unsupported scheme {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(url: Option<&str>, project: Option<&str>) -> Cli {
        Cli {
            output: PathBuf::from("content"),
            url: url.map(Into::into),
            key: Some("k".into()),
            project: project.map(Into::into),
            clean: false,
        }
    }

    #[test]
    fn test_from_cli_valid() {
        let config =
            ExportConfig::from_cli(cli(Some("https://demo.getmesh.io/api/v1/"), Some("demo")))
                .unwrap();
        assert_eq!(config.project, "demo");
        assert_eq!(config.base_url_str(), "https://demo.getmesh.io/api/v1");
        assert_eq!(config.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_missing_url_checked_first() {
        let err = ExportConfig::from_cli(cli(None, None)).unwrap_err();
        assert!(matches!(err, Error::MissingUrl));
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn test_missing_project() {
        let err = ExportConfig::from_cli(cli(Some("http://localhost:8080/api/v1"), None))
            .unwrap_err();
        assert!(matches!(err, Error::MissingProject));
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn test_invalid_url() {
        let err = ExportConfig::from_cli(cli(Some("not a url"), Some("demo"))).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));

        let err = ExportConfig::from_cli(cli(Some("ftp://host/api"), Some("demo"))).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }
}
