use crate::models::PreferenceSet;
use std::collections::BTreeSet;

/// Count the tags a product shares with the customer's preferences
///
/// This is the size of the intersection between the two sets. Both sides
/// are sets, so a tag is counted at most once.
#[inline]
pub fn count_matches(tags: &BTreeSet<String>, preferences: &PreferenceSet) -> usize {
    // Walk the smaller side
    if tags.len() <= preferences.len() {
        tags.iter().filter(|tag| preferences.contains(tag)).count()
    } else {
        preferences.iter().filter(|pref| tags.contains(*pref)).count()
    }
}
