//! Random sample arrays for the "generate" action

use crate::validate::ELEMENT_RANGE;
use rand::Rng;

/// Default number of elements, matching the classic six-box demo
pub const DEFAULT_RANDOM_LEN: usize = 6;

/// Draw `len` values uniformly from the allowed element range
pub fn random_array<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<u32> {
    let low = *ELEMENT_RANGE.start() as u32;
    let high = *ELEMENT_RANGE.end() as u32;
    (0..len).map(|_| rng.gen_range(low..=high)).collect()
}

/// Format values the way they are typed into the array field
pub fn format_array(values: &[u32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::parse_array;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generated_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let values = random_array(DEFAULT_RANDOM_LEN, &mut rng);
            assert_eq!(values.len(), DEFAULT_RANDOM_LEN);
            assert!(values.iter().all(|v| (1..=100).contains(v)));
        }
    }

    #[test]
    fn formatted_output_parses_back() {
        let mut rng = StdRng::seed_from_u64(42);
        let values = random_array(9, &mut rng);
        assert_eq!(parse_array(&format_array(&values)).unwrap(), values);
    }

    #[test]
    fn format_uses_comma_space() {
        assert_eq!(format_array(&[5, 3, 8]), "5, 3, 8");
        assert_eq!(format_array(&[]), "");
    }
}
