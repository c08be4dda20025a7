use std::collections::HashSet;

/// URL-safe identifier for a display name: trimmed, lowercased, whitespace
/// runs collapsed into a single `-`.
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Trims tag names, drops blanks and collapses duplicates that share a slug,
/// keeping the first spelling seen.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();

    tags.into_iter()
        .filter_map(|tag| {
            let tag = tag.as_ref().trim();
            let slug = slugify(tag);
            if slug.is_empty() || !seen.insert(slug) {
                return None;
            }

            Some(tag.to_owned())
        })
        .collect()
}
