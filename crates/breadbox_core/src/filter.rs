/// Static card content as supplied by the platform at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSpec {
    pub title: String,
    pub keywords: String,
}

impl CardSpec {
    pub fn new(title: impl Into<String>, keywords: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            keywords: keywords.into(),
        }
    }
}

/// Substring containment filter: a card matches iff the lowercased query is a
/// contiguous substring of its lowercased keywords or title.
///
/// The empty query matches everything.
pub fn matches_query(query: &str, title: &str, keywords: &str) -> bool {
    let query = query.to_lowercase();
    keywords.to_lowercase().contains(&query) || title.to_lowercase().contains(&query)
}
