/// Whether a `class` attribute value carries `token` as a whole word.
pub fn has_class_token(class_attr: &str, token: &str) -> bool {
    !token.is_empty() && class_attr.split_ascii_whitespace().any(|item| item == token)
}

/// Target id of an in-page link such as `#about` or `index.html#about`.
pub fn fragment_target(href: &str) -> Option<&str> {
    let (_, fragment) = href.split_once('#')?;
    let fragment = fragment.trim();
    if fragment.is_empty() {
        return None;
    }
    Some(fragment)
}
