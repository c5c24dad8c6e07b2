use crate::ProviderError;
use crate::weather::{parse_ip_location, parse_weather};

#[test]
fn formats_rounded_temperature_and_description() {
    let body = r#"{"main":{"temp":21.6},"weather":[{"description":"clear sky"}]}"#;
    assert_eq!(parse_weather(body).unwrap(), "22°C, clear sky");
}

#[test]
fn rounds_negative_temperatures() {
    let body = r#"{"main":{"temp":-3.4},"weather":[{"description":"snow"}]}"#;
    assert_eq!(parse_weather(body).unwrap(), "-3°C, snow");
}

#[test]
fn empty_conditions_list_is_an_error() {
    let body = r#"{"main":{"temp":10.0},"weather":[]}"#;
    assert!(matches!(
        parse_weather(body),
        Err(ProviderError::MissingField("weather"))
    ));
}

#[test]
fn malformed_payload_is_an_error() {
    assert!(parse_weather("not json").is_err());
}

#[test]
fn parses_ip_location_coordinates() {
    let body = r#"{"ip":"1.2.3.4","latitude":52.52,"longitude":13.405,"city":"Berlin"}"#;
    assert_eq!(parse_ip_location(body).unwrap(), (52.52, 13.405));
}
