/// Returns the trimmed text following the first `"<key>:"` in `line`.
///
/// The delimiter is matched case-insensitively, the value keeps the line's
/// original casing. A missing delimiter yields an empty string.
pub fn extract_value_after_key(line: &str, key: &str) -> String {
    let delimiter = format!("{}:", key.to_ascii_lowercase());
    // ASCII lowering keeps byte offsets aligned with `line`.
    let lower = line.to_ascii_lowercase();
    match lower.find(&delimiter) {
        Some(pos) => line[pos + delimiter.len()..].trim().to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_keeps_original_casing() {
        assert_eq!(extract_value_after_key("Name: Jane Doe", "name"), "Jane Doe");
        assert_eq!(
            extract_value_after_key("EMAIL:   Jane@X.com  ", "email"),
            "Jane@X.com"
        );
    }

    #[test]
    fn test_missing_delimiter_is_empty() {
        assert_eq!(extract_value_after_key("Jane Doe", "name"), "");
        assert_eq!(extract_value_after_key("Name - Jane", "name"), "");
        assert_eq!(extract_value_after_key("", "phone"), "");
    }

    #[test]
    fn test_first_delimiter_wins() {
        assert_eq!(
            extract_value_after_key("Name: Jane Email: jane@x.com", "email"),
            "jane@x.com"
        );
        assert_eq!(
            extract_value_after_key("Name: Jane Email: jane@x.com", "name"),
            "Jane Email: jane@x.com"
        );
    }

    #[test]
    fn test_non_ascii_prefix_does_not_shift_offsets() {
        assert_eq!(
            extract_value_after_key("Résumé name: Zoë", "name"),
            "Zoë"
        );
    }

    #[test]
    fn test_substring_key_inside_word() {
        // "username:" still carries the "name:" delimiter.
        assert_eq!(extract_value_after_key("Username: jd", "name"), "jd");
    }
}
