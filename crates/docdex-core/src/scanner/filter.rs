/// The matching predicate deciding which directory entries are indexed.

/// `true` if an entry belongs in the index.
///
/// The file-type check binds only to the `.pdf` branch: a regular file named
/// `*.pdf` matches, and *any* entry — directories included — whose name ends
/// with the bare suffix `jpg` (no dot required) matches. Both checks are
/// case-sensitive. The precedence is intentional; do not regroup.
pub fn matches_entry(name: &str, is_file: bool) -> bool {
    is_file && name.ends_with(".pdf") || name.ends_with("jpg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_requires_regular_file() {
        assert!(matches_entry("report.pdf", true));
        assert!(!matches_entry("report.pdf", false));
    }

    #[test]
    fn test_jpg_suffix_matches_any_entry_type() {
        assert!(matches_entry("photo.jpg", true));
        assert!(matches_entry("scansjpg", false));
        assert!(matches_entry("holiday.jpg", false));
    }

    #[test]
    fn test_jpg_must_be_a_suffix() {
        assert!(!matches_entry("jpgx.txt", true));
        assert!(!matches_entry("photo.jpeg", true));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(!matches_entry("REPORT.PDF", true));
        assert!(!matches_entry("PHOTO.JPG", true));
    }

    #[test]
    fn test_other_extensions_do_not_match() {
        assert!(!matches_entry("notes.txt", true));
        assert!(!matches_entry("index.html", true));
        assert!(!matches_entry("pdf", true));
    }
}
