//! Topical filtering and summary rendering of search results.

use crate::types::OrganicResult;

/// Lower-cased substrings; any hit in `title + snippet` keeps the result.
pub const RELEVANCE_TERMS: [&str; 6] = ["formula 1", "f1", "grand prix", "fia", "motorsport", "racing"];

/// Results rendered into the summary block.
pub const MAX_SUMMARY_RESULTS: usize = 8;

/// Qualifies the user query for the search provider.
pub fn search_query(query: &str) -> String {
    format!("Formula 1 F1 {query} 2025 official FIA")
}

/// Plain substring match, so `"f1"` also hits words like `"f150"`.
pub fn is_relevant(result: &OrganicResult) -> bool {
    let haystack = format!("{}{}", result.title, result.snippet).to_lowercase();
    RELEVANCE_TERMS.iter().any(|term| haystack.contains(term))
}

pub fn render_snippet(result: &OrganicResult) -> String {
    format!(
        "**{}**\n{}\nSource: {}\n",
        result.title, result.snippet, result.link
    )
}

/// Renders every relevant result, in provider order.
pub fn relevant_snippets(results: &[OrganicResult]) -> Vec<String> {
    results
        .iter()
        .filter(|r| is_relevant(r))
        .map(render_snippet)
        .collect()
}

/// First [`MAX_SUMMARY_RESULTS`] snippets joined with a newline.
pub fn summary_block(snippets: &[String]) -> String {
    snippets
        .iter()
        .take(MAX_SUMMARY_RESULTS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}
