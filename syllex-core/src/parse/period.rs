use std::sync::LazyLock;

use regex::Regex;

use crate::consts::{ACADEMIC_CODE_LEN, PERIOD_SCAN_WINDOW};

use super::strategy::{Strategy, first_match, fold_diacritics};

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b20\d{2}[\d\s\-]*").expect("period year pattern"));

static YEAR_DASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d$").expect("period year-dash pattern"));

static WINDOW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"20\d{4}").expect("period window pattern"));

const CHAIN: &[Strategy<String>] = &[year_anchored, label_window];

/// Extracts the academic-period code from the reconstructed page text.
///
/// Runs the period chain in order — year-anchored first, then the
/// label-anchored fallback — and returns `None` when neither matches. A
/// returned code is always exactly [`ACADEMIC_CODE_LEN`] ASCII digits.
pub fn extract_academic_code(text: &str) -> Option<String> {
    first_match(text, CHAIN)
}

/// Matches a `20xx` year token and whatever digits, dashes, or spaces trail
/// it, then compacts the match into a 6-digit code.
///
/// `YYYY-N` rewrites to `YYYY` + `N` + `0` (`2025-1` becomes `202510`, the
/// convention for a first-semester period). Anything else keeps its first
/// 6 digits, and is accepted only when exactly 6 remain.
fn year_anchored(text: &str) -> Option<String> {
    let matched = YEAR_RE.find(text)?;

    let cleaned: String = matched
        .as_str()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();

    if YEAR_DASH_RE.is_match(&cleaned) {
        let mut code = cleaned.replace('-', "");
        code.push('0');
        return Some(code);
    }

    let digits: String = cleaned
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(ACADEMIC_CODE_LEN)
        .collect();

    (digits.len() == ACADEMIC_CODE_LEN).then_some(digits)
}

/// Falls back to searching near a period label.
///
/// The label is located case- and diacritic-insensitively — first
/// "periodo académico", then "periodo" alone. The [`PERIOD_SCAN_WINDOW`]
/// characters after the match are reduced to their digits and scanned for a
/// 6-digit run with the `20` prefix.
fn label_window(text: &str) -> Option<String> {
    let folded = fold_diacritics(text);

    let label_end = ["periodo academico", "periodo"]
        .iter()
        .find_map(|label| folded.find(label).map(|idx| idx + label.len()))?;

    let window: String = folded[label_end..]
        .chars()
        .take(PERIOD_SCAN_WINDOW)
        .collect();
    let digits: String = window.chars().filter(|c| c.is_ascii_digit()).collect();

    WINDOW_RE.find(&digits).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_compaction() {
        let text = "Periodo académico: 2025-1";
        assert_eq!(extract_academic_code(text).as_deref(), Some("202510"));
    }

    #[test]
    fn test_dash_compaction_any_semester_digit() {
        let text = "Periodo académico: 2024-2 aprobado";
        assert_eq!(extract_academic_code(text).as_deref(), Some("202420"));
    }

    #[test]
    fn test_dash_compaction_with_spaces() {
        // Spaces inside the match are stripped before the shape check.
        let text = "Periodo académico: 2025 - 1";
        assert_eq!(extract_academic_code(text).as_deref(), Some("202510"));
    }

    #[test]
    fn test_year_anchored_needs_no_label() {
        let text = "Vigente desde 2024-2 según resolución";
        assert_eq!(extract_academic_code(text).as_deref(), Some("202420"));
    }

    #[test]
    fn test_long_run_keeps_first_six_digits() {
        let text = "Periodo académico: 2025-10";
        assert_eq!(extract_academic_code(text).as_deref(), Some("202510"));
    }

    #[test]
    fn test_short_run_is_rejected() {
        // "2024 2" cleans to five digits: too short for the year strategy,
        // and the label window's digit run has no 20-prefixed 6-digit match
        // either, so the whole chain declines.
        let text = "Periodo: 2024 2";
        assert_eq!(extract_academic_code(text), None);
    }

    #[test]
    fn test_label_window_fallback() {
        // The code is glued to a letter, so the year token never matches at
        // a word boundary; the label window still finds it.
        let text = "Periodo académico ref A202510 vigente";
        assert_eq!(extract_academic_code(text).as_deref(), Some("202510"));
    }

    #[test]
    fn test_label_window_case_and_accent_insensitive() {
        let text = "PERIODO ACADÉMICO ref A202420";
        assert_eq!(extract_academic_code(text).as_deref(), Some("202420"));
    }

    #[test]
    fn test_plain_periodo_label_fallback() {
        let text = "Periodo lectivo ref A202510";
        assert_eq!(extract_academic_code(text).as_deref(), Some("202510"));
    }

    #[test]
    fn test_window_is_bounded() {
        // The digit run sits past the 50-character window: not found.
        let filler = "x".repeat(60);
        let text = format!("Periodo {filler} A202510");
        assert_eq!(extract_academic_code(&text), None);
    }

    #[test]
    fn test_none_when_nothing_matches() {
        assert_eq!(extract_academic_code(""), None);
        assert_eq!(extract_academic_code("sin fechas ni etiquetas"), None);
    }

    #[test]
    fn test_result_is_six_ascii_digits() {
        let samples = [
            "Periodo académico: 2025-1",
            "Vigente 2024-2",
            "Periodo académico: 2025-10",
            "Periodo ref A202510",
        ];

        for text in samples {
            let code = extract_academic_code(text).unwrap();
            assert_eq!(code.len(), ACADEMIC_CODE_LEN, "{text}");
            assert!(code.chars().all(|c| c.is_ascii_digit()), "{text}");
        }
    }
}
