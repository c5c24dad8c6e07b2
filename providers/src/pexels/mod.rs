//! Pexels image search: the curated feed shown before any query, and
//! query search. Failures are typed so the caller can render a
//! placeholder ("Failed to load images") instead of crashing the modal.

use crate::ProviderError;
use serde::Deserialize;
use std::io::Read;

const CURATED_URL: &str = "https://api.pexels.com/v1/curated";
const SEARCH_URL: &str = "https://api.pexels.com/v1/search";
const PER_PAGE: u32 = 12;

/// Cap on a downloaded wallpaper image (50 MiB).
const MAX_IMAGE_BYTES: u64 = 50 * 1024 * 1024;

/// One search result, reduced to what the picker renders.
#[derive(Clone, Debug, PartialEq)]
pub struct Photo {
    /// Medium-size rendition shown in the result grid.
    pub thumbnail_url: String,
    /// Large rendition downloaded when the photo is picked.
    pub large_url: String,
    pub photographer: String,
    pub alt: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    photos: Vec<RawPhoto>,
}

#[derive(Debug, Deserialize)]
struct RawPhoto {
    src: RawSources,
    #[serde(default)]
    photographer: String,
    #[serde(default)]
    alt: String,
}

#[derive(Debug, Deserialize)]
struct RawSources {
    medium: String,
    large2x: String,
}

impl From<RawPhoto> for Photo {
    fn from(raw: RawPhoto) -> Self {
        Self {
            thumbnail_url: raw.src.medium,
            large_url: raw.src.large2x,
            photographer: raw.photographer,
            alt: raw.alt,
        }
    }
}

pub(crate) fn parse_photos(body: &str) -> Result<Vec<Photo>, ProviderError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response.photos.into_iter().map(Photo::from).collect())
}

pub struct PexelsClient {
    api_key: String,
}

impl PexelsClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// The curated feed shown before any search.
    pub fn curated(&self) -> Result<Vec<Photo>, ProviderError> {
        self.request(CURATED_URL, None)
    }

    /// Query search. An empty query returns no results without issuing a
    /// request.
    pub fn search(&self, query: &str) -> Result<Vec<Photo>, ProviderError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        self.request(SEARCH_URL, Some(query))
    }

    fn request(&self, url: &str, query: Option<&str>) -> Result<Vec<Photo>, ProviderError> {
        let mut request = ureq::get(url)
            .set("Authorization", &self.api_key)
            .query("per_page", &PER_PAGE.to_string());

        if let Some(query) = query {
            request = request.query("query", query);
        }

        let body = request.call()?.into_string()?;
        parse_photos(&body)
    }
}

/// Downloads a picked image so it can be staged as wallpaper media.
/// Returns the bytes and the response content type.
pub fn download_image(url: &str) -> Result<(Vec<u8>, String), ProviderError> {
    let response = ureq::get(url).call()?;
    let mime = response.content_type().to_string();

    let mut bytes = Vec::new();
    response
        .into_reader()
        .take(MAX_IMAGE_BYTES)
        .read_to_end(&mut bytes)?;

    Ok((bytes, mime))
}

#[cfg(test)]
mod tests;
