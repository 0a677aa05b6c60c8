// Input validation
//
// Turns the raw array/target text into values the trace generators accept.
// Either the whole input is valid or nothing is returned.

use crate::error::{InputField, SearchError};
use std::num::IntErrorKind;
use std::ops::RangeInclusive;

/// Allowed element and target values
pub const ELEMENT_RANGE: RangeInclusive<i64> = 1..=100;

/// Parse a comma-separated list like `"5, 3, 8, 1"`.
///
/// Every piece must be an integer; blank pieces (`"1,,2"`) and decimals are
/// rejected. The numeric check covers all pieces before any range check.
pub fn parse_array(input: &str) -> Result<Vec<u32>, SearchError> {
    if input.trim().is_empty() {
        return Err(SearchError::EmptyInput);
    }

    let parsed = input
        .split(',')
        .map(|piece| parse_integer(piece.trim(), InputField::Array))
        .collect::<Result<Vec<i64>, _>>()?;

    parsed
        .into_iter()
        .map(|value| in_range(value, InputField::Array))
        .collect()
}

/// Parse the target number
pub fn parse_target(input: &str) -> Result<u32, SearchError> {
    let value = parse_integer(input.trim(), InputField::Target)?;
    in_range(value, InputField::Target)
}

/// Integers too long for i64 still count as numbers; they saturate so the
/// range check rejects them as out of range.
fn parse_integer(piece: &str, field: InputField) -> Result<i64, SearchError> {
    piece.parse::<i64>().or_else(|e| match e.kind() {
        IntErrorKind::PosOverflow => Ok(i64::MAX),
        IntErrorKind::NegOverflow => Ok(i64::MIN),
        _ => Err(SearchError::NonNumericInput {
            field,
            value: piece.to_string(),
        }),
    })
}

fn in_range(value: i64, field: InputField) -> Result<u32, SearchError> {
    if ELEMENT_RANGE.contains(&value) {
        // Range check above keeps this lossless
        Ok(value as u32)
    } else {
        Err(SearchError::OutOfRangeInput { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_spaced_list() {
        assert_eq!(parse_array(" 5, 3 ,8,1 ").unwrap(), vec![5, 3, 8, 1]);
    }

    #[test]
    fn single_value_is_an_array() {
        assert_eq!(parse_array("42").unwrap(), vec![42]);
    }

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(parse_array("   "), Err(SearchError::EmptyInput));
        assert_eq!(parse_array(""), Err(SearchError::EmptyInput));
    }

    #[test]
    fn rejects_non_integers() {
        for bad in ["1,,2", "1, two", "3.5", "1,2,"] {
            assert!(
                matches!(
                    parse_array(bad),
                    Err(SearchError::NonNumericInput {
                        field: InputField::Array,
                        ..
                    })
                ),
                "expected {bad:?} to be rejected as non-numeric"
            );
        }
    }

    #[test]
    fn numeric_check_runs_before_range_check() {
        // 500 is out of range, but "x" is reported first
        assert!(matches!(
            parse_array("500, x"),
            Err(SearchError::NonNumericInput { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_elements() {
        assert_eq!(
            parse_array("1, 101"),
            Err(SearchError::OutOfRangeInput {
                field: InputField::Array,
                value: 101
            })
        );
        assert!(parse_array("0").is_err());
        assert!(parse_array("-4").is_err());
    }

    #[test]
    fn oversized_integers_are_out_of_range() {
        assert_eq!(
            parse_array("5, 99999999999999999999"),
            Err(SearchError::OutOfRangeInput {
                field: InputField::Array,
                value: i64::MAX
            })
        );
        assert_eq!(
            parse_array("-99999999999999999999"),
            Err(SearchError::OutOfRangeInput {
                field: InputField::Array,
                value: i64::MIN
            })
        );
        assert_eq!(
            parse_target("123456789012345678901234567890"),
            Err(SearchError::OutOfRangeInput {
                field: InputField::Target,
                value: i64::MAX
            })
        );
        // Overflow never masks a non-numeric piece elsewhere in the list
        assert!(matches!(
            parse_array("99999999999999999999, abc"),
            Err(SearchError::NonNumericInput { .. })
        ));
    }

    #[test]
    fn range_bounds_are_inclusive() {
        assert_eq!(parse_array("1,100").unwrap(), vec![1, 100]);
        assert_eq!(parse_target("100").unwrap(), 100);
        assert_eq!(parse_target(" 1 ").unwrap(), 1);
    }

    #[test]
    fn target_errors() {
        assert!(matches!(
            parse_target(""),
            Err(SearchError::NonNumericInput {
                field: InputField::Target,
                ..
            })
        ));
        assert_eq!(
            parse_target("250"),
            Err(SearchError::OutOfRangeInput {
                field: InputField::Target,
                value: 250
            })
        );
    }
}
