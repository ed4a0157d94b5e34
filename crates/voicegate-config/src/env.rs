use std::sync::OnceLock;

use regex::Regex;

/// Matches `{{ env.VAR }}` and `{{ env.VAR | default("fallback") }}`
fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*env\.(?<var>[A-Za-z0-9_]+)\s*(?:\|\s*default\("(?<default>[^"]*)"\))?\s*\}\}"#)
            .expect("must be valid regex")
    })
}

/// Expand `{{ env.VAR }}` placeholders in a raw TOML string
///
/// A placeholder without a `default("…")` clause errors when the variable is
/// unset. TOML comment lines are passed through unchanged so that commented
/// examples never require the variable to exist.
pub fn expand_env(input: &str) -> Result<String, String> {
    let mut output = String::with_capacity(input.len());

    for (i, line) in input.lines().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        if line.trim_start().starts_with('#') {
            output.push_str(line);
            continue;
        }

        output.push_str(&expand_line(line)?);
    }

    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}

fn expand_line(line: &str) -> Result<String, String> {
    let mut expanded = String::with_capacity(line.len());
    let mut cursor = 0;

    for captures in placeholder_re().captures_iter(line) {
        let matched = captures.get(0).expect("capture 0 always present");
        let var_name = &captures["var"];

        expanded.push_str(&line[cursor..matched.start()]);

        match std::env::var(var_name) {
            Ok(value) => expanded.push_str(&value),
            Err(_) => match captures.name("default") {
                Some(default) => expanded.push_str(default.as_str()),
                None => return Err(format!("environment variable not found: `{var_name}`")),
            },
        }

        cursor = matched.end();
    }

    expanded.push_str(&line[cursor..]);
    Ok(expanded)
}
