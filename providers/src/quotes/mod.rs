//! Random short quote via the Quotable API, with a compiled-in fallback.

use crate::ProviderError;
use log::debug;
use rand::seq::SliceRandom;
use serde::Deserialize;

const QUOTE_URL: &str = "https://api.quotable.io/random";

/// Shown when the quote service is unreachable.
const FALLBACK_QUOTES: [(&str, &str); 3] = [
    ("The only way to do great work is to love what you do.", "Steve Jobs"),
    ("Innovation distinguishes between a leader and a follower.", "Steve Jobs"),
    ("Stay hungry, stay foolish.", "Steve Jobs"),
];

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Quote {
    pub content: String,
    pub author: String,
}

fn fallback_quote() -> Quote {
    let (content, author) = FALLBACK_QUOTES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(FALLBACK_QUOTES[0]);

    Quote {
        content: content.to_string(),
        author: author.to_string(),
    }
}

pub(crate) fn parse_quote(body: &str) -> Result<Quote, ProviderError> {
    Ok(serde_json::from_str(body)?)
}

pub struct QuoteClient {
    max_length: u32,
}

impl QuoteClient {
    pub fn new(max_length: u32) -> Self {
        Self { max_length }
    }

    /// Fetches a random short quote. Any failure falls back to the
    /// compiled-in list; callers never see an error.
    pub fn random(&self) -> Quote {
        match self.fetch() {
            Ok(quote) => quote,
            Err(err) => {
                debug!("quote fetch failed, using fallback: {err}");
                fallback_quote()
            }
        }
    }

    fn fetch(&self) -> Result<Quote, ProviderError> {
        let body = ureq::get(QUOTE_URL)
            .query("maxLength", &self.max_length.to_string())
            .call()?
            .into_string()?;
        parse_quote(&body)
    }
}

#[cfg(test)]
mod tests;
