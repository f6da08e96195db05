//! Identifier casing

/// Convert an underscore-delimited identifier into UpperCamelCase.
///
/// Segments after the first are title-cased, all segments are joined, and
/// the first character of the result is uppercased. Empty segments (from
/// leading, trailing or doubled underscores) contribute nothing.
///
/// ```
/// use houseflow_codegen::utils::to_camel_case;
///
/// assert_eq!(to_camel_case("ac_unit"), "AcUnit");
/// assert_eq!(to_camel_case("foo"), "Foo");
/// ```
pub fn to_camel_case(ident: &str) -> String {
    let mut segments = ident.split('_');
    let mut joined = String::with_capacity(ident.len());
    if let Some(first) = segments.next() {
        joined.push_str(first);
    }
    for segment in segments {
        joined.push_str(&title_case(segment));
    }
    capitalize(&joined)
}

fn title_case(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
