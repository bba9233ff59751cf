//! Nearest-neighbour label lookup for continuous controls

/// Distances closer than this are treated as equal
const TIE_EPSILON: f64 = 1e-9;

/// Madness slider labels, ascending by key
pub const MADNESS_LABELS: &[(f64, &str)] = &[
    (0.1, "HOA meeting"),
    (0.2, "golf"),
    (0.3, "Steven Seagal movies"),
    (0.4, "creative writing class"),
    (0.5, "moderately creative"),
    (0.6, "very creative"),
    (0.7, "acid trip"),
    (0.8, "mild schizophrenia"),
    (0.9, "full schizophrenia"),
    (1.0, "maximum chaos"),
];

/// Return the label whose key is nearest to `value`.
///
/// The table is scanned in order and a later entry only replaces the current
/// best when it is strictly nearer, so on a tie the earlier (lower) key wins.
/// Distances within `TIE_EPSILON` count as ties: decimal keys such as 0.5 and
/// 0.6 are not exact in f64, and without the epsilon 0.55 would resolve upward.
/// `table` must be non-empty; an empty table yields an empty label.
pub fn resolve<'a>(value: f64, table: &[(f64, &'a str)]) -> &'a str {
    let mut entries = table.iter();
    let Some(&(first_key, first_label)) = entries.next() else {
        return "";
    };

    let mut best_distance = (first_key - value).abs();
    let mut best_label = first_label;
    for &(key, label) in entries {
        let distance = (key - value).abs();
        if distance < best_distance - TIE_EPSILON {
            best_distance = distance;
            best_label = label;
        }
    }
    best_label
}

/// Label for a madness value
pub fn madness_label(value: f64) -> &'static str {
    resolve(value, MADNESS_LABELS)
}
