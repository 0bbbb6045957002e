use crate::models::{FormSubmission, MAX_LINKS};
use std::collections::HashSet;

/// Keeps at most `max` values, dropping the tail.
pub fn clamp_strings(mut values: Vec<String>, max: usize) -> Vec<String> {
    values.truncate(max);
    values
}

/// Drops empty and repeated values, keeping first occurrences in order.
pub fn unique_strings<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| !v.is_empty() && seen.insert(v.clone()))
        .collect()
}

/// Links from a multipart form: every repeated `links` value first, then
/// `link1`..`link5`.
pub fn form_links(form: &FormSubmission) -> Vec<String> {
    let repeated = form.values("links").iter().map(|v| v.trim().to_string());
    let numbered = (1..=MAX_LINKS).map(|i| form.value(&format!("link{}", i)).trim().to_string());

    clamp_strings(unique_strings(repeated.chain(numbered)), MAX_LINKS)
}

/// Decodes a stored JSON string list. Empty or malformed text is an empty
/// list.
pub fn decode_string_list(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Option<Vec<String>>>(raw) {
        Ok(values) => values.unwrap_or_default(),
        Err(e) => {
            tracing::debug!("Ignoring malformed string list {:?}: {}", raw, e);
            Vec::new()
        }
    }
}
