//! Rotating greeting and search placeholder texts.

use rand::seq::SliceRandom;

const GREETINGS: [&str; 6] = [
    "Hello, {name}!",
    "Hi there, {name}!",
    "Welcome back, {name}!",
    "Good to see you, {name}!",
    "Hey {name}, ready to explore?",
    "How's it going, {name}?",
];

const PLACEHOLDERS: [&str; 6] = [
    "Search the web...",
    "What are you looking for?",
    "Ask anything...",
    "Find something interesting...",
    "Explore the internet...",
    "Search with {engine}...",
];

pub(crate) fn greeting_for(name: &str) -> String {
    let template = GREETINGS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(GREETINGS[0]);
    template.replace("{name}", name)
}

pub(crate) fn search_placeholder(engine_name: &str) -> String {
    let template = PLACEHOLDERS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(PLACEHOLDERS[0]);
    template.replace("{engine}", engine_name)
}
