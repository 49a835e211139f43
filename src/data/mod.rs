//! Static seed catalog embedded in the binary.

use crate::models::Tool;
use anyhow::{Context, Result};

const SEED_TOOLS_JSON: &str = include_str!("seed_tools.json");

/// Parses the embedded seed catalog.
///
/// The collection is seeded once at startup; the returned order is the
/// catalog's insertion order.
pub fn seed_tools() -> Result<Vec<Tool>> {
    serde_json::from_str(SEED_TOOLS_JSON).context("Failed to parse embedded seed catalog")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use std::collections::HashSet;

    #[test]
    fn test_seed_parses() {
        let tools = seed_tools().unwrap();
        assert_eq!(tools.len(), 8);
        assert_eq!(tools[0].id, "1");
        assert_eq!(tools[0].category, Category::ReactTools);
    }

    #[test]
    fn test_seed_ids_unique() {
        let tools = seed_tools().unwrap();
        let ids: HashSet<&str> = tools.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), tools.len());
    }

    #[test]
    fn test_seed_featured() {
        let featured: Vec<String> = seed_tools()
            .unwrap()
            .into_iter()
            .filter(Tool::is_featured)
            .map(|t| t.id)
            .collect();
        assert_eq!(featured, ["1", "2", "4", "8"]);
    }
}
