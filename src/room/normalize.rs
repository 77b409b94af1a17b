/// Keep only ASCII letters, lowercased, in their original order.
///
/// `"Room A"`, `"room,a!"` and `"ROOM-A 1"` all fold to `"rooma"`. An input
/// with no letters folds to the empty string.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
