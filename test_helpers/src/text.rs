//! Text normalisation for values captured by behavioural step placeholders.

/// Strips one layer of matching single or double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    if let Some(stripped) = trimmed.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        return stripped;
    }
    if let Some(stripped) = trimmed
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
    {
        return stripped;
    }
    trimmed
}

/// Normalises a scalar placeholder by trimming and unquoting one outer layer.
#[must_use]
pub fn normalize_scalar(value: &str) -> String {
    unquote(value).trim().to_owned()
}

/// Joins docstring lines back together after trimming each one.
///
/// Gherkin docstrings keep the feature file's indentation; TOML written from
/// them must not inherit it.
#[must_use]
pub fn dedent_docstring(docstring: &str) -> String {
    docstring
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
