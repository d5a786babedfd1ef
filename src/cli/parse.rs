use crate::pass::GenerateError;

/// Validate the raw `--length` value. Anything that is not a whole number
/// greater than zero is an `InvalidLength`.
pub fn parse_length(raw: &str) -> Result<usize, GenerateError> {
    match raw.trim().parse::<i64>() {
        Ok(n) if n > 0 => {
            usize::try_from(n).map_err(|_| GenerateError::InvalidLength(raw.to_string()))
        }
        _ => Err(GenerateError::InvalidLength(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_whole_numbers() {
        assert_eq!(parse_length("12"), Ok(12));
        assert_eq!(parse_length("1"), Ok(1));
        assert_eq!(parse_length(" 64 "), Ok(64));
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert_eq!(
            parse_length("0"),
            Err(GenerateError::InvalidLength("0".into()))
        );
        assert_eq!(
            parse_length("-5"),
            Err(GenerateError::InvalidLength("-5".into()))
        );
    }

    #[test]
    fn rejects_missing_and_non_numeric() {
        for raw in ["", "   ", "abc", "12abc", "3.5", "0x10"] {
            assert!(
                matches!(parse_length(raw), Err(GenerateError::InvalidLength(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_overflow() {
        assert!(parse_length("99999999999999999999999").is_err());
    }
}
