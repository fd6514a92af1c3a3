//! Placeholder substitution for embedded prompt templates.

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Replace every `{{name}}` in `template` with the value `lookup` returns for `name`.
///
/// Substitution is a single left-to-right pass: inserted values are copied
/// as-is and never scanned for placeholders themselves. Placeholders that
/// `lookup` does not know, and unterminated `{{`, are kept literally.
pub fn fill_placeholders<'a, F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        let Some(end) = after_open.find(CLOSE) else {
            out.push_str(&rest[start..]);
            return out;
        };

        let name = after_open[..end].trim();
        match lookup(name) {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[start..start + OPEN.len() + end + CLOSE.len()]),
        }
        rest = &after_open[end + CLOSE.len()..];
    }

    out.push_str(rest);
    out
}
