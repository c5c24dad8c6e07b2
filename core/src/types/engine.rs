use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// Characters escaped when a query is appended to a URL template.
/// Matches component encoding: alphanumerics and `- _ . ! ~ * ' ( )`
/// pass through.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Search providers selectable from the search bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    #[default]
    Google,
    Bing,
    ChatGpt,
    Wikipedia,
    YouTube,
    Twitch,
    Reddit,
    Pinterest,
}

/// Registry entry for one search provider.
pub struct EngineInfo {
    pub name: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

impl SearchEngine {
    pub const ALL: [SearchEngine; 8] = [
        SearchEngine::Google,
        SearchEngine::Bing,
        SearchEngine::ChatGpt,
        SearchEngine::Wikipedia,
        SearchEngine::YouTube,
        SearchEngine::Twitch,
        SearchEngine::Reddit,
        SearchEngine::Pinterest,
    ];

    pub fn info(self) -> &'static EngineInfo {
        match self {
            SearchEngine::Google => &EngineInfo {
                name: "Google",
                icon: "fab fa-google",
                url: "https://www.google.com/search?q=",
            },
            SearchEngine::Bing => &EngineInfo {
                name: "Bing",
                icon: "fab fa-microsoft",
                url: "https://www.bing.com/search?q=",
            },
            SearchEngine::ChatGpt => &EngineInfo {
                name: "ChatGPT",
                icon: "fas fa-robot",
                url: "https://chat.openai.com/?prompt=",
            },
            SearchEngine::Wikipedia => &EngineInfo {
                name: "Wikipedia",
                icon: "fab fa-wikipedia-w",
                url: "https://en.wikipedia.org/wiki/Special:Search?search=",
            },
            SearchEngine::YouTube => &EngineInfo {
                name: "YouTube",
                icon: "fab fa-youtube",
                url: "https://www.youtube.com/results?search_query=",
            },
            SearchEngine::Twitch => &EngineInfo {
                name: "Twitch",
                icon: "fab fa-twitch",
                url: "https://www.twitch.tv/search?term=",
            },
            SearchEngine::Reddit => &EngineInfo {
                name: "Reddit",
                icon: "fab fa-reddit",
                url: "https://www.reddit.com/search/?q=",
            },
            SearchEngine::Pinterest => &EngineInfo {
                name: "Pinterest",
                icon: "fab fa-pinterest",
                url: "https://www.pinterest.com/search/pins/?q=",
            },
        }
    }

    /// Full navigation target for a query. ChatGPT ignores the query and
    /// always yields its fixed URL.
    pub fn search_url(self, query: &str) -> String {
        let info = self.info();
        if matches!(self, SearchEngine::ChatGpt) {
            return info.url.to_string();
        }
        format!("{}{}", info.url, utf8_percent_encode(query, QUERY_COMPONENT))
    }
}
