/// Flattens pasted text for a single-line field.
///
/// Line breaks (`\n`, `\r\n`, lone `\r`) become one space each.
///
/// ```
/// use metaform_foundation::text::filter_for_single_line;
///
/// assert_eq!(filter_for_single_line("12\r\n34"), "12 34");
/// ```
pub fn filter_for_single_line(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}
