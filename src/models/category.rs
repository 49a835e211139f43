//! Closed set of catalog categories.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Catalog category a tool is listed under.
///
/// Serialized as its display label (e.g. `"React Tools"`), which is also the
/// form stored in persisted user tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// React libraries and hooks
    #[serde(rename = "React Tools")]
    ReactTools,
    /// Editor extensions
    #[serde(rename = "VSCode Extensions")]
    VsCodeExtensions,
    /// Public and mock APIs
    #[serde(rename = "APIs")]
    Apis,
    /// Design tooling
    #[serde(rename = "Design Tools")]
    DesignTools,
    /// Command-line tools
    #[serde(rename = "CLI Tools")]
    CliTools,
    /// General developer utilities
    #[serde(rename = "Developer Utilities")]
    DeveloperUtilities,
    /// Project starters
    #[serde(rename = "Starter Templates")]
    StarterTemplates,
    /// Component libraries
    #[serde(rename = "UI Kits")]
    UiKits,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 8] = [
        Self::ReactTools,
        Self::VsCodeExtensions,
        Self::Apis,
        Self::DesignTools,
        Self::CliTools,
        Self::DeveloperUtilities,
        Self::StarterTemplates,
        Self::UiKits,
    ];

    /// Returns the display label, which is also the serialized form.
    pub const fn label(self) -> &'static str {
        match self {
            Self::ReactTools => "React Tools",
            Self::VsCodeExtensions => "VSCode Extensions",
            Self::Apis => "APIs",
            Self::DesignTools => "Design Tools",
            Self::CliTools => "CLI Tools",
            Self::DeveloperUtilities => "Developer Utilities",
            Self::StarterTemplates => "Starter Templates",
            Self::UiKits => "UI Kits",
        }
    }

    /// Returns the kebab-case slug (e.g. `react-tools`).
    pub fn slug(self) -> String {
        self.label().to_lowercase().replace(' ', "-")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    /// Parses a label (case-insensitive) or a kebab-case slug.
    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(needle) || c.slug() == needle)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|c| c.label()).collect();
                anyhow::anyhow!(
                    "Unknown category '{}'. Expected one of: {}",
                    needle,
                    known.join(", ")
                )
            })
    }
}
