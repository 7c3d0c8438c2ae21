use std::collections::HashMap;
use std::sync::LazyLock;

use super::dictionary::SKILL_TAXONOMY;
use super::CategorizedSkillSet;

/// Lower-cased alias or canonical spelling → canonical skill.
///
/// Canonical spellings are inserted last so "react native" resolves to
/// React Native even though React lists it as an alias.
static ALIAS_TO_CANONICAL: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for definition in SKILL_TAXONOMY {
        for alias in definition.aliases {
            map.entry(alias.to_string()).or_insert(definition.canonical);
        }
    }
    for definition in SKILL_TAXONOMY {
        map.insert(definition.canonical.to_lowercase(), definition.canonical);
    }
    map
});

/// Scans `text` for every alias in the taxonomy and returns the canonical skills found.
///
/// Purely presence-based: an alias counts once it appears as a standalone token,
/// regardless of how often or where. Each canonical skill lands in its own
/// category at most once.
pub fn extract_skills(text: &str) -> CategorizedSkillSet {
    let haystack = text.to_lowercase();
    let mut extracted = CategorizedSkillSet::default();

    for definition in SKILL_TAXONOMY {
        if definition
            .aliases
            .iter()
            .any(|alias| contains_alias(&haystack, alias))
        {
            extracted.insert(definition.category, definition.canonical);
        }
    }

    extracted
}

/// Maps one raw skill name to its canonical form, if the taxonomy knows it.
pub fn canonical_skill(raw: &str) -> Option<&'static str> {
    let key = raw.trim().to_lowercase();
    if key.is_empty() {
        return None;
    }
    ALIAS_TO_CANONICAL.get(&key).copied()
}

/// True when `alias` occurs in `haystack` with no alphanumeric neighbour on either side.
///
/// A trailing version number is allowed, so "c++17", "java8" and "python3.11"
/// still contain their alias.
pub(crate) fn contains_alias(haystack: &str, alias: &str) -> bool {
    if alias.is_empty() {
        return false;
    }
    haystack.match_indices(alias).any(|(start, matched)| {
        let before = haystack[..start].chars().next_back();
        let rest = &haystack[start + matched.len()..];
        let after = rest[version_suffix_len(rest)..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    })
}

/// Length of a leading "17", "8" or "3.11" style version in `rest`, else 0.
fn version_suffix_len(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    if !bytes.first().is_some_and(u8::is_ascii_digit) {
        return 0;
    }
    let mut end = 0;
    while end < bytes.len() {
        let dotted_digit = bytes[end] == b'.' && bytes.get(end + 1).is_some_and(u8::is_ascii_digit);
        if bytes[end].is_ascii_digit() || dotted_digit {
            end += 1;
        } else {
            break;
        }
    }
    end
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}
