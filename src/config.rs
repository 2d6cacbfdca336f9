pub const PAGE_URL: &str = "https://en.wikipedia.org/wiki/Outline_of_the_Marvel_Cinematic_Universe";
pub const BASE_URL: &str = "https://en.wikipedia.org";

/// Film titles live in the second table of the article body, one per row header.
pub const LINK_QUERY: &str =
    "#mw-content-text > div:first-of-type > table:nth-of-type(2) > tbody > tr > th > i > a";

const USER_AGENT: &str = "Mozilla/5.0 (compatible; LinkScraper/0.1)";

/// Fixed inputs of a scrape run. The binary always uses `ScrapeConfig::default()`.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub page_url: String,
    /// Prepended verbatim to every extracted href.
    pub base_url: String,
    pub link_query: String,
    pub user_agent: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            page_url: PAGE_URL.to_string(),
            base_url: BASE_URL.to_string(),
            link_query: LINK_QUERY.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}
