pub const ELLIPSIS: char = '…';

pub fn error_chain_fmt(
    e: &dyn std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{e}")?;

    let mut current = e.source();
    while let Some(cause) = current {
        // `{:#?}` asks for Debug causes, anything else gets Display
        if f.alternate() {
            writeln!(f, "Caused by:\n\t{cause:?}")?;
        } else {
            writeln!(f, "Caused by:\n\t{cause}")?;
        }
        current = cause.source();
    }
    Ok(())
}

/// Keeps at most `max_chars` characters, appending `…` when anything was cut.
pub fn truncate_for_log(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some((cut, _)) => {
            let mut truncated = s[..cut].to_string();
            truncated.push(ELLIPSIS);
            truncated
        }
    }
}
