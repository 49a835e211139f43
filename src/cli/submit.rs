//! Tool submission command.

use crate::cli::browse::StorageArgs;
use crate::cli::common::{open_session, print_json, CliError, CliResult};
use crate::constants::DEFAULT_SUBMISSION_AUTHOR;
use crate::models::{Category, ToolDraft};
use clap::Args;

/// Submit a new tool to the catalog
///
/// Submitted tools are listed first for the rest of the run. They are only
/// kept across runs when `catalog.persist_submissions` is enabled.
#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    /// Tool name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Short description
    #[arg(long, value_name = "TEXT")]
    pub description: String,

    /// Category label or slug
    #[arg(long, value_name = "CATEGORY")]
    pub category: Category,

    /// Cover image URL
    #[arg(long, value_name = "URL")]
    pub image_url: String,

    /// Source repository URL
    #[arg(long, value_name = "URL")]
    pub github_url: String,

    /// Live demo URL
    #[arg(long, value_name = "URL")]
    pub demo_url: Option<String>,

    /// Comma-separated tags
    #[arg(long, value_name = "TAGS", value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Author shown on the listing
    #[arg(long, value_name = "NAME", default_value = DEFAULT_SUBMISSION_AUTHOR)]
    pub author: String,

    /// Screenshot URL (repeatable)
    #[arg(long = "screenshot", value_name = "URL")]
    pub screenshots: Vec<String>,

    /// Flag the tool as featured
    #[arg(long)]
    pub featured: bool,

    /// Output the created tool as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub storage: StorageArgs,
}

impl AddArgs {
    /// Builds the draft, trimming tags and dropping empty ones.
    pub fn to_draft(&self) -> ToolDraft {
        let tags = self
            .tags
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        ToolDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category,
            image_url: self.image_url.clone(),
            github_url: self.github_url.clone(),
            demo_url: self.demo_url.clone().filter(|u| !u.is_empty()),
            tags,
            author: self.author.clone(),
            screenshots: (!self.screenshots.is_empty()).then(|| self.screenshots.clone()),
            featured: self.featured.then_some(true),
        }
    }

    /// Execute the add command
    pub fn execute(&self) -> CliResult<()> {
        let mut session = open_session(self.storage.ephemeral)?;
        let tool = session
            .submit(self.to_draft())
            .map_err(|e| CliError::io(format!("Failed to submit tool: {e:#}")))?;

        if self.json {
            return print_json(&tool);
        }

        println!("Tool '{}' added with ID {}.", tool.name, tool.id);
        println!(
            "Catalog now lists {} tools; '{}' is first.",
            session.catalog().tools().len(),
            tool.name
        );
        Ok(())
    }
}
