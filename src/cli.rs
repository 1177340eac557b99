// ABOUTME: Command-line interface definitions using clap
// ABOUTME: Flags for output, connection, credentials and cleanup

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mesh2hugo")]
#[command(about = "Export a Gentics Mesh project into a Hugo content directory", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output directory
    #[arg(short, long, default_value = "content")]
    pub output: PathBuf,

    /// Mesh API URL (e.g. https://demo.getmesh.io/api/v1/)
    #[arg(long)]
    pub url: Option<String>,

    /// API key (falls back to MESH_API_KEY, otherwise anonymous)
    #[arg(short = 'k', long)]
    pub key: Option<String>,

    /// Project name to export
    #[arg(short, long)]
    pub project: Option<String>,

    /// Clean output directory before exporting
    #[arg(short, long)]
    pub clean: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["mesh2hugo", "--url", "http://x", "-p", "demo"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("content"));
        assert_eq!(cli.project.as_deref(), Some("demo"));
        assert!(cli.key.is_none());
        assert!(!cli.clean);
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "mesh2hugo", "-o", "out", "--url", "http://x", "-k", "secret", "-p", "demo", "-c",
        ])
        .unwrap();
        assert_eq!(cli.output, PathBuf::from("out"));
        assert_eq!(cli.key.as_deref(), Some("secret"));
        assert!(cli.clean);
    }

    #[test]
    fn test_missing_values_parse_as_none() {
        let cli = Cli::try_parse_from(["mesh2hugo", "-c"]).unwrap();
        assert!(cli.url.is_none());
        assert!(cli.project.is_none());
    }
}
