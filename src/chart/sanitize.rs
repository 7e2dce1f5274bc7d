use unicode_normalization::UnicodeNormalization;

/// Normalize a raw completion so downstream pattern matching behaves the same
/// no matter which typographic flourishes the model emitted.
///
/// Applied in order: canonical decomposition (NFD), hyphen/dash variants to
/// `-`, smart single quotes to `'`, smart double quotes to `"`, non-breaking
/// spaces to plain spaces, and finally every remaining non-ASCII code point is
/// dropped. Output is therefore pure ASCII, which also makes the function
/// idempotent.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.nfd() {
        match ch {
            '\u{2010}'..='\u{2015}' => out.push('-'),
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{201C}' | '\u{201D}' => out.push('"'),
            '\u{00A0}' | '\u{202F}' => out.push(' '),
            c if c.is_ascii() => out.push(c),
            _ => {}
        }
    }
    out
}
