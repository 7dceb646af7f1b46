/// A single extraction attempt over the reconstructed page text.
///
/// Strategies are pure and stateless: they read the text, and either
/// produce a value or decline. Fallback behavior comes from chaining, not
/// from the strategies themselves.
pub type Strategy<T> = fn(&str) -> Option<T>;

/// Evaluates a strategy chain in order and returns the first hit.
///
/// Later strategies act as fallbacks; a `None` from every strategy means
/// the field is absent from the document (the caller supplies the
/// sentinel).
pub fn first_match<T>(text: &str, chain: &[Strategy<T>]) -> Option<T> {
    chain.iter().find_map(|strategy| strategy(text))
}

/// Lowercases `text` and folds Spanish diacritics to their ASCII base.
///
/// Label wording varies across source documents ("Periodo Académico",
/// "PERIODO ACADEMICO", ...), so label searches run over this folded form.
/// Every folded character maps to exactly one output character, which keeps
/// character offsets meaningful for window extraction, and digits are left
/// untouched.
pub fn fold_diacritics(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' | 'ü' => 'u',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}
