//! Name normalization shared by every generated identifier.
//!
//! Folder names such as `CreateEnrichment`, `lock-quotas` or `web client` are
//! turned into identifiers. The output is used as tree keys, so the same input
//! must always produce the same output.

/// Split a raw name into words.
///
/// Boundaries are lower-to-upper transitions (`webClient` -> `web`, `Client`),
/// acronym ends (`HTTPServer` -> `HTTP`, `Server`) and any run of characters
/// that are not ASCII letters or digits.
fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(prev) = current.chars().last() {
            let lower_to_upper =
                (prev.is_ascii_lowercase() || prev.is_ascii_digit()) && c.is_ascii_uppercase();
            let acronym_end = prev.is_ascii_uppercase()
                && c.is_ascii_uppercase()
                && chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if lower_to_upper || acronym_end {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str, index: usize) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) if index > 0 && first.is_ascii_digit() => {
            format!("_{}{}", first, chars.as_str().to_ascii_lowercase())
        }
        Some(first) => {
            let mut out = first.to_ascii_uppercase().to_string();
            out.push_str(&chars.as_str().to_ascii_lowercase());
            out
        }
    }
}

/// Convert a string to PascalCase (e.g., "create-enrichment" -> "CreateEnrichment")
pub fn to_pascal_case(s: &str) -> String {
    split_words(s)
        .iter()
        .enumerate()
        .map(|(i, word)| capitalize(word, i))
        .collect()
}

/// Convert a string to camelCase (e.g., "CreateEnrichment" -> "createEnrichment")
pub fn to_camel_case(s: &str) -> String {
    split_words(s)
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                word.to_ascii_lowercase()
            } else {
                capitalize(word, i)
            }
        })
        .collect()
}
