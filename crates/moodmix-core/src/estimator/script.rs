//! Script family detection.

/// Which scoring strategy a piece of text needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptFamily {
    /// Whitespace/punctuation separated words (English and friends).
    LatinToken,
    /// Character based text without word boundaries (Chinese).
    Ideograph,
}

const CJK_UNIFIED_IDEOGRAPHS: std::ops::RangeInclusive<char> = '\u{4E00}'..='\u{9FFF}';

/// Classifies `text` as ideograph script if it contains at least one CJK
/// unified ideograph, otherwise as Latin-token script.
pub fn classify_script(text: &str) -> ScriptFamily {
    if text.chars().any(|c| CJK_UNIFIED_IDEOGRAPHS.contains(&c)) {
        ScriptFamily::Ideograph
    } else {
        ScriptFamily::LatinToken
    }
}
