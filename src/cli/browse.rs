//! Read-only catalog commands: list, show, featured, trending, categories.

use crate::cli::common::{open_session, print_json, CliError, CliResult};
use crate::constants::{APP_BINARY_NAME, CATEGORY_PREVIEW_LEN, TAG_PREVIEW_LEN};
use crate::models::{Category, SearchFilters, SortBy, Tool};
use crate::services::{CatalogStore, SessionStore};
use clap::Args;
use serde::Serialize;

/// Storage selection shared by every catalog command.
#[derive(Debug, Clone, Default, Args)]
pub struct StorageArgs {
    /// Keep likes and saves in memory only for this run
    #[arg(long)]
    pub ephemeral: bool,
}

/// List tools with optional search, category filter, sort, and paging
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Case-insensitive text matched against name, description, and tags
    #[arg(short, long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Category label or slug (e.g. "React Tools" or react-tools)
    #[arg(short, long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Sort order: newest, likes, or views
    #[arg(long, value_name = "KEY")]
    pub sort: Option<SortBy>,

    /// Page number (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub storage: StorageArgs,
}

/// Show one tool in detail
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Tool ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub storage: StorageArgs,
}

/// List featured tools
#[derive(Debug, Clone, Args)]
pub struct FeaturedArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub storage: StorageArgs,
}

/// List trending tools
#[derive(Debug, Clone, Args)]
pub struct TrendingArgs {
    /// Rank the whole catalog by likes * 2 + views instead of the top tools by likes
    #[arg(long)]
    pub by_score: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub storage: StorageArgs,
}

/// Summarize every category
#[derive(Debug, Clone, Args)]
pub struct CategoriesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub storage: StorageArgs,
}

/// List the tools in one category
#[derive(Debug, Clone, Args)]
pub struct CategoryArgs {
    /// Category label or slug
    #[arg(value_name = "CATEGORY")]
    pub category: Category,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub storage: StorageArgs,
}

// JSON response types
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ToolItem<'a> {
    #[serde(flatten)]
    tool: &'a Tool,
    liked: bool,
    saved: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse<'a> {
    filters: &'a SearchFilters,
    page: usize,
    total_pages: usize,
    total_items: usize,
    tools: Vec<ToolItem<'a>>,
}

#[derive(Debug, Serialize)]
struct ToolsResponse<'a> {
    tools: Vec<ToolItem<'a>>,
    count: usize,
}

#[derive(Debug, Serialize)]
struct CategoryItem {
    category: &'static str,
    slug: String,
    count: usize,
    preview: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CategoriesResponse {
    categories: Vec<CategoryItem>,
}

pub(crate) fn tool_item<'a>(store: &CatalogStore<SessionStore>, tool: &'a Tool) -> ToolItem<'a> {
    ToolItem {
        tool,
        liked: store.is_liked(&tool.id),
        saved: store.is_saved(&tool.id),
    }
}

/// Prints one table row per tool, marking liked (`*`) and saved (`+`) entries.
pub(crate) fn print_tool_rows<'a>(
    store: &CatalogStore<SessionStore>,
    tools: impl IntoIterator<Item = &'a Tool>,
) {
    for tool in tools {
        let liked = if store.is_liked(&tool.id) { '*' } else { ' ' };
        let saved = if store.is_saved(&tool.id) { '+' } else { ' ' };
        let mut tags = tool.preview_tags(TAG_PREVIEW_LEN).join(", ");
        let hidden = tool.tags.len().saturating_sub(TAG_PREVIEW_LEN);
        if hidden > 0 {
            tags.push_str(&format!(" +{hidden}"));
        }
        println!(
            "{liked}{saved} {:<36}  {:<24} {:<20} {:>6} likes {:>7} views  {}",
            tool.id,
            tool.name,
            tool.category.label(),
            tool.likes,
            tool.views,
            tags
        );
    }
}

fn print_tool_list<'a>(
    store: &CatalogStore<SessionStore>,
    tools: &'a [Tool],
    json: bool,
    heading: &str,
) -> CliResult<()> {
    if json {
        let items: Vec<ToolItem<'a>> = tools.iter().map(|t| tool_item(store, t)).collect();
        return print_json(&ToolsResponse {
            count: items.len(),
            tools: items,
        });
    }

    if tools.is_empty() {
        println!("No tools found.");
    } else {
        println!("{} ({}):", heading, tools.len());
        println!();
        print_tool_rows(store, tools);
    }
    Ok(())
}

/// Resolves a category argument to its canonical label. Unknown values pass
/// through untouched and simply match nothing.
fn normalize_category(raw: &str) -> String {
    raw.parse::<Category>()
        .map_or_else(|_| raw.to_string(), |c| c.label().to_string())
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        if self.page == 0 {
            return Err(CliError::validation("Page numbers start at 1"));
        }

        let mut session = open_session(self.storage.ephemeral)?;
        let store = session.catalog_mut();

        store.set_filters(SearchFilters {
            search: self.search.clone(),
            category: self.category.as_deref().map(normalize_category),
            sort_by: self.sort,
        });
        store.set_page(self.page);

        let store = session.catalog();
        let page = store.current_page();

        if self.json {
            let response = ListResponse {
                filters: store.filters(),
                page: page.number,
                total_pages: page.total_pages,
                total_items: page.total_items,
                tools: page.items.iter().map(|t| tool_item(store, t)).collect(),
            };
            return print_json(&response);
        }

        if page.total_items == 0 {
            println!("No tools match the current filters.");
            return Ok(());
        }

        println!(
            "Tools (page {} of {}, {} total):",
            page.number, page.total_pages, page.total_items
        );
        println!();
        print_tool_rows(store, &page.items);
        println!();
        println!("Run `{APP_BINARY_NAME} show <ID>` for details.");
        Ok(())
    }
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let session = open_session(self.storage.ephemeral)?;
        let store = session.catalog();

        let tool = store
            .find(&self.id)
            .ok_or_else(|| CliError::not_found(format!("Tool '{}' not found", self.id)))?;

        if self.json {
            return print_json(&tool_item(store, tool));
        }

        println!("{}", tool.name);
        println!("{}", "=".repeat(tool.name.chars().count()));
        println!("{}", tool.description);
        println!();
        println!("  ID:          {}", tool.id);
        println!("  Category:    {}", tool.category);
        println!("  Author:      {}", tool.author);
        println!("  Added:       {}", tool.created_at.format("%Y-%m-%d"));
        println!("  Likes:       {}", tool.likes);
        println!("  Views:       {}", tool.views);
        println!("  GitHub:      {}", tool.github_url);
        if let Some(demo) = &tool.demo_url {
            println!("  Demo:        {demo}");
        }
        println!("  Image:       {}", tool.image_url);
        if !tool.tags.is_empty() {
            println!("  Tags:        {}", tool.tags.join(", "));
        }
        if let Some(screenshots) = tool.screenshots.as_ref().filter(|s| !s.is_empty()) {
            println!("  Screenshots:");
            for url in screenshots {
                println!("    - {url}");
            }
        }
        println!(
            "  Liked:       {}",
            if store.is_liked(&tool.id) { "yes" } else { "no" }
        );
        println!(
            "  Saved:       {}",
            if store.is_saved(&tool.id) { "yes" } else { "no" }
        );
        Ok(())
    }
}

impl FeaturedArgs {
    /// Execute the featured command
    pub fn execute(&self) -> CliResult<()> {
        let session = open_session(self.storage.ephemeral)?;
        let store = session.catalog();
        let featured: Vec<Tool> = store.featured_tools().into_iter().cloned().collect();
        print_tool_list(store, &featured, self.json, "Featured tools")
    }
}

impl TrendingArgs {
    /// Execute the trending command
    pub fn execute(&self) -> CliResult<()> {
        let session = open_session(self.storage.ephemeral)?;
        let store = session.catalog();

        if self.by_score {
            let ranked = store.trending_by_score();
            print_tool_list(store, &ranked, self.json, "Trending tools by score")
        } else {
            let top = store.trending_tools();
            print_tool_list(store, &top, self.json, "Trending tools")
        }
    }
}

impl CategoriesArgs {
    /// Execute the categories command
    pub fn execute(&self) -> CliResult<()> {
        let session = open_session(self.storage.ephemeral)?;
        let overview = session.catalog().category_overview();

        if self.json {
            let categories = overview
                .into_iter()
                .map(|summary| CategoryItem {
                    category: summary.category.label(),
                    slug: summary.category.slug(),
                    count: summary.count,
                    preview: summary.preview.into_iter().map(|t| t.name).collect(),
                })
                .collect();
            return print_json(&CategoriesResponse { categories });
        }

        println!("Categories:");
        println!();
        for summary in overview {
            let preview: Vec<&str> = summary
                .preview
                .iter()
                .take(CATEGORY_PREVIEW_LEN)
                .map(|t| t.name.as_str())
                .collect();
            println!(
                "  {:<20} {:>3}  {}",
                summary.category.label(),
                summary.count,
                preview.join(", ")
            );
        }
        Ok(())
    }
}

impl CategoryArgs {
    /// Execute the category command
    pub fn execute(&self) -> CliResult<()> {
        let session = open_session(self.storage.ephemeral)?;
        let store = session.catalog();
        let tools: Vec<Tool> = store
            .tools_by_category(self.category)
            .into_iter()
            .cloned()
            .collect();
        print_tool_list(store, &tools, self.json, self.category.label())
    }
}
