// src/core/names.rs
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::sanitize::upper_first;

/// `mike-trout` → `M. Trout`, the form boxscore tables and panels use.
///
/// Only the first two hyphen pieces count, so a slug with a hyphenated surname
/// keeps its first half. `None` when there is no hyphen or the first name is empty.
pub fn display_name(slug: &str) -> Option<String> {
    let mut parts = slug.split('-');
    let first = parts.next()?;
    let last = parts.next()?;
    let initial = first.chars().next()?;
    Some(join!(&initial.to_uppercase().to_string(), ". ", &upper_first(last)))
}

/// Last non-empty path segment of a player page link.
/// `/mlb/players/playerpage/2044511/mike-trout/` → `mike-trout`.
pub fn slug_from_link(link: &str) -> Option<&str> {
    link.trim_end_matches('/').rsplit('/').next().filter(|s| !s.is_empty())
}

/// Numeric player id segment, the one right before the slug.
pub fn id_from_link(link: &str) -> Option<&str> {
    let mut segs = link.trim_end_matches('/').rsplit('/');
    segs.next()?;
    segs.next().filter(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerKey {
    pub name: String,
    pub id: Option<String>,
    pub link: String,
}

/// Display names for the player page links seen in boxscores.
///
/// Boxscore tables only carry `F. Last`, so two players sharing an initial and
/// surname are indistinguishable there. The index makes those collisions visible.
#[derive(Clone, Debug, Default)]
pub struct PlayerIndex {
    by_link: BTreeMap<String, PlayerKey>,
}

impl PlayerIndex {
    pub fn new() -> Self { Self::default() }

    pub fn from_links<I, S>(links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::new();
        index.extend(links);
        index
    }

    /// Add links; repeats and links without a usable slug are skipped.
    pub fn extend<I, S>(&mut self, links: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for link in links {
            let link = link.as_ref();
            if self.by_link.contains_key(link) { continue; }
            let Some(name) = slug_from_link(link).and_then(display_name) else {
                logd!("Skipping player link without a name slug: {link}");
                continue;
            };
            self.by_link.insert(s!(link), PlayerKey {
                name,
                id: id_from_link(link).map(String::from),
                link: s!(link),
            });
        }
    }

    pub fn len(&self) -> usize { self.by_link.len() }
    pub fn is_empty(&self) -> bool { self.by_link.is_empty() }

    pub fn keys(&self) -> impl Iterator<Item = &PlayerKey> {
        self.by_link.values()
    }

    /// Display names claimed by more than one distinct player, sorted.
    pub fn duplicate_names(&self) -> Vec<String> {
        let mut ids_by_name: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for key in self.by_link.values() {
            // without an id the link itself identifies the player
            let ident = key.id.as_deref().unwrap_or(&key.link);
            ids_by_name.entry(&key.name).or_default().insert(ident);
        }
        ids_by_name
            .into_iter()
            .filter(|(_, ids)| ids.len() > 1)
            .map(|(name, _)| s!(name))
            .collect()
    }
}
