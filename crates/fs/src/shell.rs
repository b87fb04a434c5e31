//! Quoting of arguments destined for a shell command line.

/// Wrap `s` in double quotes, escaping any embedded double quote.
///
/// Single quotes and other shell metacharacters are left alone; the
/// surrounding double quotes neutralize them.
pub fn shell_quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        if c == '"' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Quote each argument and join them with single spaces.
pub fn shell_quote_args<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .map(|arg| shell_quote(arg.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}
