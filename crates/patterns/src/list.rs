/// Splits a comma-separated pattern string into its non-empty, trimmed tokens.
///
/// Order is preserved and duplicates are kept; the function never fails.
///
/// # Examples
///
/// ```
/// use patterns::parse_list;
///
/// assert_eq!(parse_list(" .git, node_modules ,,"), vec![".git", "node_modules"]);
/// assert!(parse_list("").is_empty());
/// ```
#[must_use]
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}
