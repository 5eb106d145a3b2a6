use std::hash::Hash;

/// Invert a map by swapping keys and values, e.g. class ids to labels into labels to class ids.
/// When a value repeats, the last key wins.
pub fn invert_map<K, V, MK, MV>(original: MK) -> MV
where
    K: Hash + Eq,
    V: Hash + Eq,
    MK: IntoIterator<Item = (K, V)>,
    MV: FromIterator<(V, K)>,
{
    original
        .into_iter()
        .map(|(key, value)| (value, key))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_invert_map() {
        let label2id: HashMap<&str, usize> = invert_map([(0, "O"), (1, "B-PER"), (2, "O")]);

        assert_eq!(label2id.len(), 2);
        assert_eq!(label2id["O"], 2);
        assert_eq!(label2id["B-PER"], 1);
    }
}
