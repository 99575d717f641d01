//! Component name derivation for generated pages.

const SUFFIX: &str = "Page";

/// Builds the component identifier for a route prefix.
///
/// Each segment is split on runs of non-alphanumeric characters and every
/// part is capitalized, e.g. `["blog", "my-post"]` becomes `BlogMyPostPage`.
pub fn identifier<S: AsRef<str>>(segments: &[S]) -> String {
    let mut name: String = segments
        .iter()
        .flat_map(|segment| segment.as_ref().split(|c: char| !c.is_alphanumeric()))
        .map(capitalize)
        .collect();
    name.push_str(SUFFIX);
    name
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
