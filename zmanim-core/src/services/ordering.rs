use crate::models::ZmanResult;

/// Well-known zman keys in chronological order.
pub const CANONICAL_ORDER: [&str; 14] = [
    "alos_hashachar",
    "misheyakir",
    "sunrise",
    "sof_zman_shma_mga",
    "sof_zman_shma_gra",
    "sof_zman_tfila_mga",
    "sof_zman_tfila_gra",
    "chatzos",
    "mincha_gedola",
    "mincha_ketana",
    "plag_hamincha",
    "sunset",
    "tzais",
    "tzais_72",
];

/// Position of a key in the output; unknown keys share the last rank.
pub fn order_rank(key: &str) -> usize {
    CANONICAL_ORDER
        .iter()
        .position(|k| *k == key)
        .unwrap_or(CANONICAL_ORDER.len())
}

/// Sort results into canonical order; unknown keys keep their relative order.
pub fn sort_results(results: &mut [ZmanResult]) {
    results.sort_by_key(|r| order_rank(&r.key));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys_ranked() {
        assert_eq!(order_rank("alos_hashachar"), 0);
        assert!(order_rank("sunrise") < order_rank("chatzos"));
        assert!(order_rank("sunset") < order_rank("tzais_72"));
        assert_eq!(order_rank("candle_lighting"), CANONICAL_ORDER.len());
    }
}
