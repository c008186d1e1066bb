// crates/trails-core/src/text.rs

/// Convert a string into a folded key suitable for substring matching.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Śravaṇabeḷagoḷa` -> `Sravanabelagola`)
/// 2\) Normalize to lowercase
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII, so queries typed without
/// diacritics still hit transliterated place names.
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after folding.
///
/// Case-insensitive and accent-insensitive, via [`fold_key`].
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}
