//! flowdoc-idgen - next-identifier lookup over document snapshots.
//!
//! Loads a document (or workflow definition) snapshot from JSON and prints
//! the identifier the allocator would assign next for a given kind and
//! prefix. Useful for inspecting snapshots and for scripting fixtures.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use flowdoc_id::{next_element_id, next_step_id};
use flowdoc_model::{Document, ElementKind, StepKind, WorkflowDefinition};

#[derive(Debug, Parser)]
#[command(name = "flowdoc-idgen", about = "Next-identifier lookup over document snapshots")]
struct Cli {
    /// Path to a document snapshot (JSON)
    #[arg(long, conflicts_with = "workflow")]
    document: Option<PathBuf>,

    /// Path to a workflow-definition snapshot (JSON)
    #[arg(long)]
    workflow: Option<PathBuf>,

    /// Element or step kind, by its camelCase name (e.g. userTask, humanStep)
    #[arg(long)]
    kind: Option<String>,

    /// Identifier prefix (e.g. task, pool, messageFlow)
    #[arg(long)]
    prefix: Option<String>,

    /// Print every identifier in the snapshot instead of allocating
    #[arg(long)]
    list_ids: bool,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("invalid snapshot: {}", path.display()))
}

fn kind_and_prefix(cli: &Cli) -> Result<(&str, &str)> {
    match (cli.kind.as_deref(), cli.prefix.as_deref()) {
        (Some(kind), Some(prefix)) => Ok((kind, prefix)),
        _ => bail!("--kind and --prefix are required unless --list-ids is given"),
    }
}

fn run(cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.workflow {
        let workflow: WorkflowDefinition = read_json(path)?;

        if cli.list_ids {
            for step in &workflow.steps {
                if let Some(id) = step.id() {
                    println!("{id}");
                }
            }
            return Ok(());
        }

        let (kind, prefix) = kind_and_prefix(cli)?;
        let kind: StepKind = kind
            .parse()
            .with_context(|| format!("not a step kind: {kind}"))?;
        println!("{}", next_step_id(&workflow, kind, prefix));
        return Ok(());
    }

    let Some(path) = &cli.document else {
        bail!("one of --document or --workflow is required");
    };
    let document: Document = read_json(path)?;

    if cli.list_ids {
        for id in document.all_ids() {
            println!("{id}");
        }
        return Ok(());
    }

    let (kind, prefix) = kind_and_prefix(cli)?;
    let kind: ElementKind = kind
        .parse()
        .with_context(|| format!("not an element kind: {kind}"))?;
    let id = next_element_id(&document, kind, prefix)
        .with_context(|| format!("scan failed for {}", path.display()))?;
    println!("{id}");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(&cli)
}
