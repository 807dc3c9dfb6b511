//! Pulls translations and example sentences out of a dictionary response.
//!
//! Every missing key is treated as "nothing here": the walk stops and that
//! branch contributes no entries.

use std::sync::LazyLock;

use cidian_types::{ExampleSentence, TranslationEntry};
use regex::Regex;
use serde_json::Value;

pub const DEFAULT_EXAMPLE_COUNT: usize = 3;

/// Translation groups of the first English-Chinese headword
const TRANSLATION_GROUPS: &str = "/ec/word/0/trs";
/// Meaning list inside one translation item, a string or a list of strings
const MEANINGS: &str = "/l/i";
const SENTENCE_PAIRS: &str = "/blng_sents_part/sentence-pair";

/// Leading run of letters, dots and brackets ending in `.`, `]` or `)`,
/// then whitespace, then the meaning
static PART_OF_SPEECH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^([A-Za-z.\[\]()]*[.\])])\s+(.+)$").expect("part of speech pattern")
});

/// Split `"n. a test"` into marker and meaning
pub fn parse_translation(raw: &str) -> TranslationEntry {
    match PART_OF_SPEECH.captures(raw) {
        Some(caps) => TranslationEntry::new(&caps[1], &caps[2]),
        None => TranslationEntry::new("", raw),
    }
}

pub fn extract_translations(response: &Value) -> Vec<TranslationEntry> {
    let Some(groups) = response.pointer(TRANSLATION_GROUPS).and_then(Value::as_array) else {
        return Vec::new();
    };

    groups
        .iter()
        .filter_map(|group| group.get("tr").and_then(Value::as_array))
        .flatten()
        .filter_map(|item| item.pointer(MEANINGS))
        .flat_map(meaning_strings)
        .map(parse_translation)
        .collect()
}

/// Anything that is neither a string nor a list of strings is skipped
fn meaning_strings(node: &Value) -> Vec<&str> {
    match node {
        Value::String(text) => vec![text.as_str()],
        Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

/// Remove the `<b>` highlighting the API wraps around the headword.
/// Repeats until no tag is left, so removing one tag can't expose another.
pub fn strip_bold(sentence: &str) -> String {
    let mut text = sentence.to_string();
    loop {
        let stripped = text.replace("<b>", "").replace("</b>", "");
        if stripped == text {
            return text;
        }
        text = stripped;
    }
}

/// Pairs with an English side among the first `count` sentence pairs
pub fn extract_examples(response: &Value, count: usize) -> Vec<ExampleSentence> {
    let Some(pairs) = response.pointer(SENTENCE_PAIRS).and_then(Value::as_array) else {
        return Vec::new();
    };

    pairs
        .iter()
        .take(count)
        .filter_map(example_from_pair)
        .collect()
}

fn example_from_pair(pair: &Value) -> Option<ExampleSentence> {
    let english = pair.get("sentence-eng")?.as_str()?;

    Some(ExampleSentence {
        english: strip_bold(english),
        chinese: string_field(pair, "sentence-translation"),
        source: string_field(pair, "source"),
    })
}

fn string_field(node: &Value, key: &str) -> String {
    node.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
