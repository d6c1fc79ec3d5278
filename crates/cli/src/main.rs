//! Zettel CLI - progress overviews for a JSON project archive.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use zettel_core::Node;
use zettel_report::{
    active_sprints, publish_all, resolve_links, AreaReport, ArchiveOverview, ProjectReport,
    ReportConfig, ZettelDocument,
};
use zettel_storage::{ArchiveSource, JsonArchive, MemorySink, ZettelDir, ZettelSink};

#[derive(Parser)]
#[command(name = "zettel")]
#[command(about = "Progress overview zettels for a project archive", long_about = None)]
struct Cli {
    /// Archive root (area zettel names are relative to it)
    #[arg(long, global = true)]
    archive: Option<PathBuf>,

    /// Projects root to walk (defaults to <archive>/projects)
    #[arg(long, global = true)]
    projects: Option<PathBuf>,

    /// Zettelkasten output directory
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// Front-matter date (YYYY-MM-DD, defaults to today)
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    /// Extra regex of paths to skip while walking
    #[arg(long = "ignore", global = true)]
    ignore: Vec<String>,

    /// Render without writing files
    #[arg(long, global = true)]
    dry_run: bool,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the zettel of a single project file
    Project {
        /// Project JSON file
        file: PathBuf,
    },
    /// Write one zettel per area
    Areas,
    /// Write the archive-wide overview zettel
    Overview,
    /// Resolve links in active sprints and write their zettels
    Sprints,
    /// Print statistics as JSON
    Stats {
        /// Project JSON file (whole archive when omitted)
        file: Option<PathBuf>,
    },
}

impl Cli {
    fn config(&self) -> ReportConfig {
        let mut config = ReportConfig::default();
        if let Some(archive) = &self.archive {
            config = config.with_archive_root(archive);
        }
        if let Some(projects) = &self.projects {
            config = config.with_projects_root(projects);
        }
        if let Some(out) = &self.out {
            config = config.with_zettel_dir(out);
        }
        if let Some(date) = self.date {
            config = config.with_date(date);
        }
        if !self.ignore.is_empty() {
            let mut patterns = config.ignore.clone();
            patterns.extend(self.ignore.iter().cloned());
            config = config.with_ignore(patterns);
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = cli.config();
    let archive = JsonArchive::new(&config.projects_root).with_ignore(&config.ignore)?;

    let dry_run = MemorySink::new();
    let sink: Box<dyn ZettelSink> = if cli.dry_run {
        Box::new(dry_run.clone())
    } else {
        Box::new(ZettelDir::new(&config.zettel_dir))
    };

    match &cli.command {
        Commands::Project { file } => {
            let project = archive
                .load_project(file)
                .await
                .with_context(|| format!("Failed to load {}", file.display()))?;
            let doc = ProjectReport::new(&config).build(&project)?;
            write(&[doc], sink.as_ref()).await?;
        }
        Commands::Areas => {
            let tree = load_tree(&archive).await?;
            let docs = AreaReport::new(&config).build_all(&tree);
            write(&docs, sink.as_ref()).await?;
        }
        Commands::Overview => {
            let tree = load_tree(&archive).await?;
            let doc = ArchiveOverview::new(&config).build(&tree);
            write(&[doc], sink.as_ref()).await?;
        }
        Commands::Sprints => {
            let tree = load_tree(&archive).await?;
            let mut docs = Vec::new();
            for sprint in active_sprints(&tree) {
                let mut sprint = sprint.clone();
                let links = resolve_links(&mut sprint, &tree);
                info!("Sprint {}: {} links resolved", sprint.name, links);
                docs.push(ProjectReport::new(&config).build(&sprint)?);
            }
            if docs.is_empty() {
                println!("No active sprints");
            }
            write(&docs, sink.as_ref()).await?;
        }
        Commands::Stats { file } => {
            let node = match file {
                Some(file) => archive.load_project(file).await?,
                None => load_tree(&archive).await?,
            };
            println!("{}", serde_json::to_string_pretty(&node.stats())?);
        }
    }

    if cli.dry_run {
        for (name, contents) in dry_run.written().await {
            println!("{} ({} bytes)", name, contents.len());
        }
    }

    Ok(())
}

async fn load_tree(archive: &JsonArchive) -> Result<Node> {
    archive
        .load_area_tree()
        .await
        .with_context(|| format!("Failed to walk {}", archive.root().display()))
}

async fn write(docs: &[ZettelDocument], sink: &dyn ZettelSink) -> Result<()> {
    let written = publish_all(docs, sink).await?;
    info!("Wrote {} zettels", written.len());
    Ok(())
}
