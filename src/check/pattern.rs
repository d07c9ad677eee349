// Unit name pattern matching

/// Suffix that makes a pattern match every instance of a template unit
pub const TEMPLATE_WILDCARD: &str = "@*";

/// Separator between a template name and its instance identifier
pub const TEMPLATE_SEPARATOR: char = '@';

/// Match a unit name against a critical/ignore pattern.
///
/// `foo@*` matches `foo@1.service` and `foo@bar`; any other pattern must be
/// equal to the unit name.
pub fn matches(pattern: &str, unit_name: &str) -> bool {
    if let Some(template) = pattern.strip_suffix(TEMPLATE_WILDCARD) {
        if let Some((unit_template, _instance)) = unit_name.split_once(TEMPLATE_SEPARATOR) {
            return template == unit_template;
        }
    }

    pattern == unit_name
}

/// Returns true if any pattern matches the unit name
pub fn matches_any<S: AsRef<str>>(patterns: &[S], unit_name: &str) -> bool {
    patterns.iter().any(|p| matches(p.as_ref(), unit_name))
}
