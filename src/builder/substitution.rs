//! Placeholder token substitution.
//!
//! Templates carry literal `{{KEY}}` tokens. Substitution is applied one
//! mapping entry at a time, in the mapping's insertion order, each entry
//! replacing every occurrence of its token in the text produced so far.
//! A value emitted by an earlier entry is therefore visible to later
//! entries; callers that rely on that ordering get it from the JSON
//! object's key order.

use indexmap::IndexMap;

/// Replace every `{{key}}` occurrence for each mapping entry, sequentially.
///
/// Keys are matched as literal text, never as patterns. Placeholders whose
/// key is absent from the mapping are left verbatim; there is no escaping
/// mechanism for literal `{{...}}` text.
pub fn apply_replacements(template: &str, replacements: &IndexMap<String, String>) -> String {
    replacements
        .iter()
        .fold(template.to_owned(), |text, (key, value)| {
            text.replace(&format!("{{{{{key}}}}}"), value)
        })
}
