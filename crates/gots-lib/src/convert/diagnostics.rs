//! Package comments and load diagnostics.

use std::sync::LazyLock;

use regex::Regex;

static IGNORE_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)@typescript-ignore:?(?P<ignored_types>.*?)(?:\*/|$)")
        .expect("valid directive pattern")
});

static MISSING_IMPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"could not import (\S+)").expect("valid import pattern"));

/// Names listed by `@typescript-ignore A, B` directives, in order.
pub fn ignored_types(comments: &[String]) -> Vec<String> {
    let mut names = Vec::new();
    for comment in comments {
        let Some(caps) = IGNORE_DIRECTIVE.captures(comment) else {
            continue;
        };
        let listed = &caps["ignored_types"];
        names.extend(
            listed
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        );
    }
    names
}

/// Human-readable summary for a package load error.
pub fn package_error_hint(error: &str) -> String {
    if !error.contains("could not import") {
        return "parsing package".to_string();
    }
    match MISSING_IMPORT.captures(error) {
        Some(caps) => format!(
            "parsing package, suggest running 'go get {}' where calling the go generator to include the referenced package.",
            &caps[1]
        ),
        None => "parsing package, import unavailable to generating code, try to add the package as a reference to the go generator".to_string(),
    }
}
