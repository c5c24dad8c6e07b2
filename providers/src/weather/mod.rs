//! Current weather via OpenWeatherMap, with an IP-geolocation fallback
//! when no coordinates are available.

use crate::ProviderError;
use log::debug;
use serde::Deserialize;

const WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const IP_LOCATION_URL: &str = "https://ipapi.co/json/";

/// Placeholder line used on every failure path.
pub const UNAVAILABLE: &str = "Weather unavailable";

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    main: MainReading,
    weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
struct MainReading {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct IpLocation {
    latitude: f64,
    longitude: f64,
}

/// Formats the top-bar line: `"{rounded temp}°C, {description}"`.
pub(crate) fn parse_weather(body: &str) -> Result<String, ProviderError> {
    let response: WeatherResponse = serde_json::from_str(body)?;
    let condition = response
        .weather
        .first()
        .ok_or(ProviderError::MissingField("weather"))?;

    Ok(format!(
        "{}°C, {}",
        response.main.temp.round() as i64,
        condition.description
    ))
}

pub(crate) fn parse_ip_location(body: &str) -> Result<(f64, f64), ProviderError> {
    let location: IpLocation = serde_json::from_str(body)?;
    Ok((location.latitude, location.longitude))
}

pub struct WeatherClient {
    api_key: String,
}

impl WeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Weather line for known coordinates. Failures degrade to
    /// [`UNAVAILABLE`]; the caller renders whatever comes back.
    pub fn by_coordinates(&self, lat: f64, lon: f64) -> String {
        match self.fetch(lat, lon) {
            Ok(line) => line,
            Err(err) => {
                debug!("weather fetch failed: {err}");
                UNAVAILABLE.to_string()
            }
        }
    }

    /// Weather line with coordinates resolved from the caller's IP, for
    /// when geolocation is denied or absent.
    pub fn by_ip(&self) -> String {
        match locate_by_ip() {
            Ok((lat, lon)) => self.by_coordinates(lat, lon),
            Err(err) => {
                debug!("IP geolocation failed: {err}");
                UNAVAILABLE.to_string()
            }
        }
    }

    fn fetch(&self, lat: f64, lon: f64) -> Result<String, ProviderError> {
        let body = ureq::get(WEATHER_URL)
            .query("lat", &lat.to_string())
            .query("lon", &lon.to_string())
            .query("units", "metric")
            .query("appid", &self.api_key)
            .call()?
            .into_string()?;
        parse_weather(&body)
    }
}

fn locate_by_ip() -> Result<(f64, f64), ProviderError> {
    let body = ureq::get(IP_LOCATION_URL).call()?.into_string()?;
    parse_ip_location(&body)
}

#[cfg(test)]
mod tests;
