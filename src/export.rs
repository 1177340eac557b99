// ABOUTME: Core export loop from content source to output directory
// ABOUTME: Walks nodes and languages sequentially and reports progress

use crate::{
    api::{ContentSource, LinkType},
    model::NodeResponse,
    project::{output_filename, project_binary, project_document},
    schema::{Schema, SchemaCache, Segment},
    storage::{copy_stream, write_document, OutputDir},
    Result,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub nodes: usize,
    pub documents: usize,
    pub binaries: usize,
    pub skipped: usize,
}

enum Written {
    Document,
    Binary,
    Skipped,
}

pub fn export_project(
    source: &dyn ContentSource,
    project: &str,
    output: &OutputDir,
) -> Result<ExportReport> {
    let schemas = SchemaCache::build(source.list_schemas(project)?);
    tracing::info!(project, schemas = schemas.len(), "loaded schemas");

    println!("Fetching node list...");
    let nodes = source.list_nodes(project, LinkType::Short)?;

    let pb = ProgressBar::new(nodes.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40}] {pos}/{len} nodes")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-"),
    );

    let mut report = ExportReport {
        nodes: nodes.len(),
        ..Default::default()
    };

    for node in &nodes {
        let schema = schemas.get(&node.schema.uuid)?;

        for lang in node.available_languages.keys() {
            let record =
                source.fetch_localized_node(project, &node.uuid, lang, LinkType::Short)?;

            match export_record(source, project, output, &record, lang, schema, &pb)? {
                Written::Document => report.documents += 1,
                Written::Binary => report.binaries += 1,
                Written::Skipped => report.skipped += 1,
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message(format!(
        "exported {} nodes ({} documents, {} binaries, {} skipped)",
        report.nodes, report.documents, report.binaries, report.skipped
    ));

    Ok(report)
}

fn announce(pb: &ProgressBar, record: &NodeResponse, lang: &str, target: &Path) {
    pb.suspend(|| println!("Exporting {}/{} => {}", record.uuid, lang, target.display()));
}

fn export_record(
    source: &dyn ContentSource,
    project: &str,
    output: &OutputDir,
    record: &NodeResponse,
    lang: &str,
    schema: &Schema,
    pb: &ProgressBar,
) -> Result<Written> {
    let Some(node_path) = record.path.as_deref() else {
        tracing::warn!(node = %record.uuid, lang, "node has no path, skipping");
        return Ok(Written::Skipped);
    };

    match schema.classify_segment()? {
        Segment::Binary(field_key) => {
            let target = output.binary_path(node_path)?;
            announce(pb, record, lang, &target);
            let mut stream = project_binary(source, project, record, lang, &field_key)?;
            let bytes = copy_stream(&target, &mut stream)?;
            tracing::debug!(node = %record.uuid, lang, bytes, "binary copied");
            Ok(Written::Binary)
        }
        Segment::Textual => {
            let document = project_document(record, schema)?;
            let target = output.document_path(node_path, output_filename(schema))?;
            announce(pb, record, lang, &target);
            write_document(&target, &document)?;
            Ok(Written::Document)
        }
    }
}
