//! Tolerant JSON recovery from raw model output.
//!
//! Gemini responses are supposed to be pure JSON when `responseMimeType` is
//! set, but in practice they can arrive wrapped in markdown fences, prefixed
//! with prose, or followed by trailing metadata. These helpers pull a usable
//! JSON array out of that text without ever panicking on garbage input.

/// Remove markdown code-fence markers (```json / ```) anywhere in the text.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Scanner state for one forward pass over the candidate text.
#[derive(Default)]
struct ScanState {
    depth: u32,
    in_string: bool,
    escape_next: bool,
}

/// Extract the first balanced JSON array from `text`.
///
/// Starts at the first `[` and walks forward counting bracket depth, ignoring
/// brackets inside string literals and honoring backslash escapes so an
/// escaped quote cannot end a string early. Returns the exact `[...]`
/// substring, or `None` when there is no `[` or the brackets never balance
/// (e.g. a response truncated by a token limit).
pub fn extract_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;

    let mut state = ScanState::default();
    // JSON's structural characters are all ASCII, so a byte scan is safe and
    // the returned slice boundaries always fall on UTF-8 char boundaries.
    for (offset, byte) in text.as_bytes()[start..].iter().enumerate() {
        if state.escape_next {
            state.escape_next = false;
            continue;
        }

        match byte {
            b'\\' if state.in_string => state.escape_next = true,
            b'"' => state.in_string = !state.in_string,
            _ if state.in_string => {}
            b'[' => state.depth += 1,
            b']' => {
                state.depth -= 1;
                if state.depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }

    // Brackets never balanced.
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_plain_array() {
        let text = r#"[{"id": 1}, {"id": 2}]"#;
        assert_eq!(extract_json_array(text), Some(text));
    }

    #[test]
    fn test_extracts_array_surrounded_by_prose() {
        let array = r#"[{"id": 1, "title": "Senso-ji"}]"#;
        let text = format!("Here is your itinerary:\n{}\nEnjoy the trip!", array);
        assert_eq!(extract_json_array(&text), Some(array));
    }

    #[test]
    fn test_ignores_brackets_inside_strings() {
        let array = r#"[{"title": "[not real] brackets", "note": "a ] stray"}]"#;
        let text = format!("prefix {} suffix", array);
        assert_eq!(extract_json_array(&text), Some(array));
    }

    #[test]
    fn test_escaped_quote_does_not_end_string() {
        let array = r#"[{"title": "a \" b", "desc": "fine"}]"#;
        assert_eq!(extract_json_array(array), Some(array));
    }

    #[test]
    fn test_escaped_backslash_before_closing_quote() {
        // The string ends in an escaped backslash; the quote after it really
        // does close the string.
        let array = r#"[{"path": "C:\\temp\\"}, {"path": "ok"}]"#;
        assert_eq!(extract_json_array(array), Some(array));
    }

    #[test]
    fn test_nested_arrays_balance() {
        let array = r#"[[1, [2, 3]], [4]]"#;
        let text = format!("data: {} end", array);
        assert_eq!(extract_json_array(&text), Some(array));
    }

    #[test]
    fn test_no_array_returns_none() {
        assert_eq!(extract_json_array("no json here"), None);
        assert_eq!(extract_json_array(r#"{"an": "object"}"#), None);
    }

    #[test]
    fn test_truncated_array_returns_none() {
        let text = r#"[{"id": 1}, {"id": 2"#;
        assert_eq!(extract_json_array(text), None);
    }

    #[test]
    fn test_unclosed_string_returns_none() {
        let text = r#"[{"title": "never closed]"#;
        assert_eq!(extract_json_array(text), None);
    }

    #[test]
    fn test_strip_code_fences() {
        let fenced = "```json\n[{\"id\": 1}]\n```";
        assert_eq!(strip_code_fences(fenced), "[{\"id\": 1}]");
    }

    #[test]
    fn test_strip_code_fences_without_language_tag() {
        let fenced = "```\n[1, 2]\n```";
        assert_eq!(strip_code_fences(fenced), "[1, 2]");
    }

    #[test]
    fn test_strip_code_fences_leaves_plain_text() {
        assert_eq!(strip_code_fences("  [1, 2]  "), "[1, 2]");
    }
}
