//! Textual rewriting applied before tokenizing.

/// Keypad glyphs and their ASCII equivalents.
pub const GLYPHS: [(char, char); 3] = [('×', '*'), ('÷', '/'), ('−', '-')];

/// Rewrite keypad input into the tokenizer's ASCII alphabet.
///
/// `×`, `÷` and `−` become `*`, `/` and `-`. Every `%` is then replaced by
/// `/100` in a single pass, so `"50%"` reads as `"50/100"`.
pub fn normalize(input: &str) -> String {
    let ascii: String = input
        .chars()
        .map(|c| {
            GLYPHS
                .iter()
                .find(|(glyph, _)| *glyph == c)
                .map_or(c, |&(_, ascii)| ascii)
        })
        .collect();

    ascii.replace('%', "/100")
}
