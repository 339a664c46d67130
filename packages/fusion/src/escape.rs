/// Quotes an attribute string. Only single quotes are escaped, everything
/// else is taken as the author wrote it.
pub fn quote_string_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "\\'"))
}

/// Quotes raw markup text, backslash-escaping quotes, backslashes and NUL.
pub fn quote_text(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        match c {
            '\'' | '"' | '\\' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '\0' => quoted.push_str("\\0"),
            _ => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}

/// Removes every whitespace run that contains a newline. Runs without a
/// newline are kept as they are.
pub fn normalize_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    let mut run = String::new();
    let mut run_has_newline = false;

    for c in text.chars() {
        if c.is_whitespace() {
            run.push(c);
            run_has_newline |= c == '\n';
            continue;
        }
        if !run_has_newline {
            normalized.push_str(&run);
        }
        run.clear();
        run_has_newline = false;
        normalized.push(c);
    }
    if !run_has_newline {
        normalized.push_str(&run);
    }

    normalized
}
