use crate::quotes::{FALLBACK_QUOTES, Quote, fallback_quote, parse_quote};

#[test]
fn parses_the_quote_payload() {
    let body = r#"{"content":"Stay hungry, stay foolish.","author":"Steve Jobs","length":26}"#;

    let quote = parse_quote(body).unwrap();
    assert_eq!(
        quote,
        Quote {
            content: "Stay hungry, stay foolish.".to_string(),
            author: "Steve Jobs".to_string(),
        }
    );
}

#[test]
fn malformed_payload_is_an_error() {
    assert!(parse_quote("{oops").is_err());
    assert!(parse_quote(r#"{"content":"x"}"#).is_err());
}

#[test]
fn fallback_comes_from_the_compiled_in_list() {
    let quote = fallback_quote();
    assert!(
        FALLBACK_QUOTES
            .iter()
            .any(|(content, author)| *content == quote.content && *author == quote.author)
    );
}
