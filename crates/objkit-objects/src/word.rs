use std::collections::{BTreeMap, HashMap};

use objkit_common::warning::warn_once;

/// Build a word from letters and the positions they occupy.
///
/// Positions that no letter claims are skipped. If two letters claim the
/// same position, which one ends up there is unspecified and a warning is
/// printed.
///
/// ```
/// use std::collections::HashMap;
/// use objkit_objects::make_word;
///
/// let letters = HashMap::from([('a', vec![0, 1]), ('b', vec![2, 3]), ('c', vec![4, 5])]);
/// assert_eq!(make_word(&letters), "aabbcc");
/// ```
#[must_use]
pub fn make_word(letters: &HashMap<char, Vec<usize>>) -> String {
    // Keyed by position, so the cost follows the number of letters placed
    // rather than the largest position.
    let mut slots: BTreeMap<usize, char> = BTreeMap::new();
    for (&letter, positions) in letters {
        for &position in positions {
            match slots.insert(position, letter) {
                Some(previous) if previous != letter => warn_once(
                    "word",
                    &format!("position {position} claimed by both '{previous}' and '{letter}'"),
                ),
                _ => {}
            }
        }
    }
    slots.into_values().collect()
}
