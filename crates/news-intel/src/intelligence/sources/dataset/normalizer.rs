/// Canonical column name: invisible marks stripped, trimmed, lowercased.
pub(crate) fn normalize_column(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_byte_order_mark_and_case() {
        assert_eq!(normalize_column("\u{feff}Text"), "text");
        assert_eq!(normalize_column("  LABEL "), "label");
    }
}
