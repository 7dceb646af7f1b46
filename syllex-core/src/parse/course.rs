use std::sync::LazyLock;

use regex::Regex;

use crate::consts::COURSE_CODE_NOT_FOUND;

use super::strategy::{Strategy, first_match};

static LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Código de la unidad didáctica\s*:\s*(\d+)").expect("course label pattern")
});

static SHAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b3\d{4}\b").expect("course shape pattern"));

const CHAIN: &[Strategy<u32>] = &[label_code, shape_code];

/// Extracts the course code from the reconstructed page text.
///
/// Runs the course chain in order — label-anchored first, then the
/// shape-anchored fallback — and returns [`COURSE_CODE_NOT_FOUND`] when
/// neither strategy matches.
pub fn extract_course_code(text: &str) -> u32 {
    first_match(text, CHAIN).unwrap_or(COURSE_CODE_NOT_FOUND)
}

/// Captures the digits following the literal course-code label.
///
/// The label is matched accent-sensitively; a digit run too large for `u32`
/// declines so the fallback gets a chance.
fn label_code(text: &str) -> Option<u32> {
    LABEL_RE
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}

/// Falls back to the first standalone 5-digit numeral starting with `3`.
///
/// Covers documents where the label was reworded or dropped; the leading
/// `3` reflects the course numbering convention observed in the corpus.
fn shape_code(text: &str) -> Option<u32> {
    SHAPE_RE
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_path() {
        let text = "Código de la unidad didáctica: 12345 otros datos";
        assert_eq!(extract_course_code(text), 12345);
    }

    #[test]
    fn test_label_tolerates_spacing() {
        let text = "Código de la unidad didáctica  :  34210";
        assert_eq!(extract_course_code(text), 34210);
    }

    #[test]
    fn test_label_wins_over_shape() {
        // A 5-digit 3xxxx token appears earlier in the text, but the
        // label-anchored strategy runs first.
        let text = "ref 31111 Código de la unidad didáctica: 12345";
        assert_eq!(extract_course_code(text), 12345);
    }

    #[test]
    fn test_shape_fallback() {
        let text = "xx 34210 yy";
        assert_eq!(extract_course_code(text), 34210);
    }

    #[test]
    fn test_shape_requires_standalone_token() {
        // 34210 embedded in a longer digit run is not a course code.
        assert_eq!(extract_course_code("serie 134210 fin"), 0);
        assert_eq!(extract_course_code("serie 342105 fin"), 0);
    }

    #[test]
    fn test_accent_sensitive_label() {
        // Unaccented label wording misses the label strategy; with no 3xxxx
        // token either, the sentinel comes back.
        let text = "Codigo de la unidad didactica: 12345";
        assert_eq!(extract_course_code(text), 0);
    }

    #[test]
    fn test_sentinel_when_nothing_matches() {
        assert_eq!(extract_course_code(""), COURSE_CODE_NOT_FOUND);
        assert_eq!(extract_course_code("sin números"), COURSE_CODE_NOT_FOUND);
        assert_eq!(extract_course_code("xx 44210 yy"), COURSE_CODE_NOT_FOUND);
    }
}
