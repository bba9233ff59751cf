//! Plain-text rendering of a result set

const EMPTY_PLACEHOLDER: &str = "Your dark comedy masterpieces will appear here...\nIf you dare to generate them.";

/// Numbered listing in display order, or the placeholder when empty
pub fn render_results(results: &[String]) -> String {
    if results.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    results
        .iter()
        .enumerate()
        .map(|(index, joke)| format!("{}. {}", index + 1, joke))
        .collect::<Vec<_>>()
        .join("\n")
}
