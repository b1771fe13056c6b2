/// Case-insensitive substring test: true if any keyword occurs in `text`.
///
/// No tokenization or stemming. Empty text or no keywords never match.
pub fn matches<S: AsRef<str>>(text: &str, keywords: &[S]) -> bool {
    if text.is_empty() {
        return false;
    }
    let haystack = text.to_lowercase();
    keywords
        .iter()
        .any(|k| haystack.contains(&k.as_ref().to_lowercase()))
}
