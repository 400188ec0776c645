// Shared prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it;
// this file holds what they have in common.

/// Fills `{name}` placeholders in a prompt template in a single pass.
///
/// Substituted values are never rescanned, so a resume that happens to contain
/// `{job_title}` is sent verbatim. Unknown placeholders are left untouched.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let extra: usize = values.iter().map(|(_, value)| value.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let replaced = after_open.find('}').and_then(|close| {
            let name = &after_open[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after_open[close + 1..];
            }
            None => {
                out.push('{');
                rest = after_open;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_all_placeholders() {
        let filled = fill_template(
            "Role: {job_title}\nResume:\n{resume_text}",
            &[("job_title", "Data Engineer"), ("resume_text", "SQL, Python")],
        );
        assert_eq!(filled, "Role: Data Engineer\nResume:\nSQL, Python");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let filled = fill_template(
            "{resume_text} / {job_title}",
            &[("job_title", "SRE"), ("resume_text", "I wrote {job_title} templates")],
        );
        assert_eq!(filled, "I wrote {job_title} templates / SRE");
    }

    #[test]
    fn test_unknown_and_unclosed_braces_are_kept() {
        let filled = fill_template("{\"score\": {unknown}} {job_title", &[("job_title", "x")]);
        assert_eq!(filled, "{\"score\": {unknown}} {job_title");
    }

    #[test]
    fn test_repeated_placeholder() {
        let filled = fill_template("{a}-{a}", &[("a", "1")]);
        assert_eq!(filled, "1-1");
    }
}
