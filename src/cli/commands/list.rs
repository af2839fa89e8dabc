//! `pwmvault list` — list entries, optionally filtered by tag or query.
//!
//! Filters combine: an entry passes when it carries *any* of the
//! requested tags and matches the free-text query.

use crate::cli::output;
use crate::cli::{prompt_password, vault_path, Cli};
use crate::errors::Result;
use crate::vault::{Entry, VaultStore};

/// Execute the `list` command.
pub fn execute(cli: &Cli, tags: &[String], query: Option<&str>) -> Result<()> {
    let path = vault_path(cli)?;
    let master = prompt_password()?;
    let store = VaultStore::open(&path, master.as_bytes())?;

    let filtered: Vec<Entry> = store
        .entries()
        .iter()
        .filter(|e| matches_tags(e, tags))
        .filter(|e| query.map_or(true, |q| e.matches_query(q)))
        .cloned()
        .collect();

    output::print_entries_table(&filtered);

    if filtered.len() < store.entry_count() {
        output::info(&format!(
            "{} of {} entries shown",
            filtered.len(),
            store.entry_count()
        ));
    }

    Ok(())
}

/// No tag filter means every entry passes; otherwise any match counts.
fn matches_tags(entry: &Entry, tags: &[String]) -> bool {
    tags.is_empty() || tags.iter().any(|t| entry.has_tag(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_with_tags(tags: &str) -> Entry {
        Entry {
            tags: tags.into(),
            ..Entry::default()
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(matches_tags(&entry_with_tags(""), &[]));
        assert!(matches_tags(&entry_with_tags("a,b"), &[]));
    }

    #[test]
    fn any_tag_match_passes() {
        let entry = entry_with_tags("finance,important");
        assert!(matches_tags(&entry, &["finance".into()]));
        assert!(matches_tags(&entry, &["nope".into(), "important".into()]));
        assert!(!matches_tags(&entry, &["nope".into()]));
    }
}
