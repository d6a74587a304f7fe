use std::collections::HashMap;

use serde::Serialize;

use crate::models::Idea;

/// Narrows the collection to ideas whose title, description, or any tag
/// contains the query, case-insensitively. The empty query is the identity
/// and relative order is preserved; a query matching nothing yields an
/// empty list, which is a normal result rather than an error.
pub fn filter_ideas(ideas: &[Idea], query: &str) -> Vec<Idea> {
    if query.is_empty() {
        return ideas.to_vec();
    }

    let needle = query.to_lowercase();
    ideas
        .iter()
        .filter(|idea| matches_query(idea, &needle))
        .cloned()
        .collect()
}

fn matches_query(idea: &Idea, needle: &str) -> bool {
    idea.title.to_lowercase().contains(needle)
        || idea.description.to_lowercase().contains(needle)
        || idea.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub name: String,
    pub count: usize,
}

/// Tag occurrence counts for the sidebar, most used first. Ties break on
/// tag name so the listing is stable across requests.
pub fn popular_tags(ideas: &[Idea], limit: usize) -> Vec<TagCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for idea in ideas {
        for tag in &idea.tags {
            *counts.entry(tag.as_str()).or_default() += 1;
        }
    }

    let mut tags: Vec<TagCount> = counts
        .into_iter()
        .map(|(name, count)| TagCount {
            name: name.to_string(),
            count,
        })
        .collect();
    tags.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    tags.truncate(limit);
    tags
}
