//! Utility functions

/// Returns the trimmed value when it has visible content.
pub fn has_value(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Replaces `{0}` in a message template, the way resource strings are written.
pub fn format_message(template: &str, arg: impl std::fmt::Display) -> String {
    template.replace("{0}", &arg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_value() {
        assert_eq!(has_value(Some(" nav ")), Some("nav"));
        assert_eq!(has_value(Some("   ")), None);
        assert_eq!(has_value(None), None);
    }

    #[test]
    fn test_format_message() {
        assert_eq!(
            format_message(crate::constants::ENTITY_NOT_FOUND, 42),
            "Entity with key 42 not found"
        );
    }
}
