use fastpath_config::NameCase;

/// Canonical form of a raw city name: surrounding whitespace trimmed, then
/// case-folded. Returns `None` for names that are blank after trimming.
pub fn normalize_city_name(raw: &str, case: NameCase) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(match case {
        NameCase::Upper => trimmed.to_uppercase(),
        NameCase::Lower => trimmed.to_lowercase(),
        NameCase::Preserve => trimmed.to_string(),
    })
}
