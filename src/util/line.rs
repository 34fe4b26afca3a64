/// Marker that starts a comment running to the end of the line.
pub const COMMENT_MARKER: &str = "//";

/// Truncates a line at the first comment marker.
///
/// # Example
/// ```
/// use calcflow::util::line::remove_comment;
///
/// assert_eq!(remove_comment("2 + 3 // five"), "2 + 3 ");
/// assert_eq!(remove_comment("2 + 3"), "2 + 3");
/// ```
#[must_use]
pub fn remove_comment(line: &str) -> &str {
    line.find(COMMENT_MARKER).map_or(line, |index| &line[..index])
}

/// Splits an assignment at its first `=` into a target name and the
/// expression.
///
/// The name is trimmed; a blank name counts as no assignment. Without an `=`
/// the whole line is the expression.
///
/// # Example
/// ```
/// use calcflow::util::line::extract_variable;
///
/// assert_eq!(extract_variable(" x = 5 + 12"), (Some("x"), " 5 + 12"));
/// assert_eq!(extract_variable("5 + 12"), (None, "5 + 12"));
/// ```
#[must_use]
pub fn extract_variable(line: &str) -> (Option<&str>, &str) {
    match line.split_once('=') {
        Some((name, expression)) => {
            let name = name.trim();
            ((!name.is_empty()).then_some(name), expression)
        },
        None => (None, line),
    }
}
