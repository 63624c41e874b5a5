//! Path arithmetic for generated-file imports.

/// Strip the schema file extension from a unit identifier.
pub fn strip_extension<'a>(path: &'a str, extension: &str) -> &'a str {
    path.strip_suffix(extension).unwrap_or(path)
}

/// Directory part of a unit identifier (empty for bare file names).
fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..idx],
        None => "",
    }
}

/// Compute the relative module specifier from the directory of `from` to the
/// already-extension-stripped identifier `to`.
///
/// The result ascends `../` once per directory level `from` sits below the
/// common prefix, then descends into the suffix of `to`, so it only depends
/// on where the two identifiers diverge:
///
/// - `api/a/b.proto` -> `api/c/d` yields `../c/d`
/// - `api/a/b.proto` -> `api/a/e` yields `./e`
pub fn relative_specifier(from: &str, to: &str) -> String {
    let from_dir: Vec<&str> = parent_dir(from).split('/').filter(|s| !s.is_empty()).collect();
    let to_segments: Vec<&str> = to.split('/').filter(|s| !s.is_empty()).collect();

    let common = from_dir
        .iter()
        .zip(to_segments.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let ups = from_dir.len() - common;
    let mut specifier = String::new();
    if ups == 0 {
        specifier.push_str("./");
    } else {
        for _ in 0..ups {
            specifier.push_str("../");
        }
    }
    specifier.push_str(&to_segments[common..].join("/"));
    specifier
}
