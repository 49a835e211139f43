//! Like, save, and preference commands.

use crate::cli::browse::StorageArgs;
use crate::cli::common::{open_session, print_json, CliError, CliResult};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Toggle the like on a tool
///
/// Only the set of liked tools is stored. Like counts start from the catalog
/// values on every run, so the printed count reflects this run alone.
#[derive(Debug, Clone, Args)]
pub struct LikeArgs {
    /// Tool ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub storage: StorageArgs,
}

/// Toggle the bookmark on a tool
#[derive(Debug, Clone, Args)]
pub struct SaveArgs {
    /// Tool ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub storage: StorageArgs,
}

/// Inspect or change stored preferences
#[derive(Debug, Clone, Args)]
pub struct PrefsArgs {
    /// Preferences subcommand
    #[command(subcommand)]
    pub command: PrefsCommand,
}

/// Preference subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum PrefsCommand {
    /// Show liked tools, saved tools, and theme
    Show(PrefsShowArgs),
    /// Set the theme preference
    Theme(PrefsThemeArgs),
}

/// Show stored preferences
#[derive(Debug, Clone, Args)]
pub struct PrefsShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Set the theme preference
#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
pub struct PrefsThemeArgs {
    /// Prefer the dark theme
    #[arg(long)]
    pub dark: bool,

    /// Prefer the light theme
    #[arg(long)]
    pub light: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct ToggleResponse<'a> {
    id: &'a str,
    liked: bool,
    saved: bool,
    likes: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrefsResponse<'a> {
    liked_tools: &'a [String],
    saved_tools: &'a [String],
    dark_mode: bool,
}

/// Which preference set a toggle command flips.
#[derive(Debug, Clone, Copy)]
enum Toggle {
    Like,
    Save,
}

fn run_toggle(toggle: Toggle, id: &str, json: bool, ephemeral: bool) -> CliResult<()> {
    let mut session = open_session(ephemeral)?;
    let store = session.catalog_mut();

    let state = match toggle {
        Toggle::Like => store.toggle_like(id),
        Toggle::Save => store.toggle_save(id),
    }
    .ok_or_else(|| CliError::not_found(format!("Tool '{id}' not found")))?;

    let store = session.catalog();
    if !ephemeral {
        let (kind, stored, current) = match toggle {
            Toggle::Like => ("liked", store.preferences().liked_tools(), store.liked_tools()),
            Toggle::Save => ("saved", store.preferences().saved_tools(), store.saved_tools()),
        };
        if stored != current {
            return Err(CliError::io(format!(
                "Failed to persist {kind} tools to {}; '{id}' was not updated",
                session.config().storage.data_file.display()
            )));
        }
    }

    let likes = store.find(id).map_or(0, |t| t.likes);

    if json {
        return print_json(&ToggleResponse {
            id,
            liked: store.is_liked(id),
            saved: store.is_saved(id),
            likes,
        });
    }

    let message = match (toggle, state) {
        (Toggle::Like, true) => format!("Liked '{id}' ({likes} likes)."),
        (Toggle::Like, false) => format!("Removed like from '{id}' ({likes} likes)."),
        (Toggle::Save, true) => format!("Saved '{id}'."),
        (Toggle::Save, false) => format!("Removed '{id}' from saved tools."),
    };
    println!("{message}");
    Ok(())
}

impl LikeArgs {
    /// Execute the like command
    pub fn execute(&self) -> CliResult<()> {
        run_toggle(Toggle::Like, &self.id, self.json, self.storage.ephemeral)
    }
}

impl SaveArgs {
    /// Execute the save command
    pub fn execute(&self) -> CliResult<()> {
        run_toggle(Toggle::Save, &self.id, self.json, self.storage.ephemeral)
    }
}

impl PrefsArgs {
    /// Execute the prefs command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            PrefsCommand::Show(args) => args.execute(),
            PrefsCommand::Theme(args) => args.execute(),
        }
    }
}

impl PrefsShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let session = open_session(false)?;
        let store = session.catalog();
        let dark_mode = store.preferences().dark_mode();

        if self.json {
            return print_json(&PrefsResponse {
                liked_tools: store.liked_tools(),
                saved_tools: store.saved_tools(),
                dark_mode,
            });
        }

        println!("Theme: {}", if dark_mode { "dark" } else { "light" });
        println!();
        println!("Liked tools ({}):", store.liked_tools().len());
        for id in store.liked_tools() {
            let name = store.find(id).map_or("(unknown)", |t| t.name.as_str());
            println!("  {:<36}  {}", id, name);
        }
        println!();
        println!("Saved tools ({}):", store.saved_tools().len());
        for id in store.saved_tools() {
            let name = store.find(id).map_or("(unknown)", |t| t.name.as_str());
            println!("  {:<36}  {}", id, name);
        }
        Ok(())
    }
}

impl PrefsThemeArgs {
    /// Execute the theme command
    pub fn execute(&self) -> CliResult<()> {
        let mut session = open_session(false)?;
        let dark = self.dark && !self.light;

        session
            .catalog_mut()
            .preferences_mut()
            .set_dark_mode(dark)
            .map_err(|e| CliError::io(format!("Failed to save theme preference: {e:#}")))?;

        println!("Theme set to {}.", if dark { "dark" } else { "light" });
        Ok(())
    }
}
