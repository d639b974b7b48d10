//! Capture-group substitution for alternate templates.

/// Expand `$N` tokens in `template` with the N-th capture group.
///
/// `captures[0]` is group 1. A group that did not participate in the match
/// expands to the empty string. Tokens naming group 0 or a group beyond
/// `captures.len()` are kept literally, as is a `$` with no digits after it.
/// Substituted text is not scanned again.
pub fn expand_template(template: &str, captures: &[Option<&str>]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(dollar) = rest.find('$') {
        out.push_str(&rest[..dollar]);
        let after = &rest[dollar + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        let token = &rest[dollar..dollar + 1 + digits];

        match after[..digits].parse::<usize>() {
            Ok(index) if (1..=captures.len()).contains(&index) => {
                out.push_str(captures[index - 1].unwrap_or(""));
            }
            _ => out.push_str(token),
        }
        rest = &rest[dollar + 1 + digits..];
    }

    out.push_str(rest);
    out
}
