use crate::error::InputError;

/// Parses a "row col" line as typed by a human.
pub fn parse_coords(line: &str) -> Result<(isize, isize), InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(InputError::WrongArity(tokens.len()));
    }
    let nums = tokens
        .iter()
        .map(|t| t.parse::<isize>().map_err(|_| InputError::NotANumber(t.to_string())))
        .collect::<Result<Vec<isize>, InputError>>()?;
    Ok((nums[0], nums[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_numbers() {
        assert_eq!(parse_coords("3 4"), Ok((3, 4)));
        assert_eq!(parse_coords("  0\t10 \n"), Ok((0, 10)));
        assert_eq!(parse_coords("-1 2"), Ok((-1, 2)));
    }

    #[test]
    fn malformed() {
        assert_eq!(parse_coords(""), Err(InputError::WrongArity(0)));
        assert_eq!(parse_coords("1"), Err(InputError::WrongArity(1)));
        assert_eq!(parse_coords("1 2 3"), Err(InputError::WrongArity(3)));
        assert_eq!(parse_coords("a 2"), Err(InputError::NotANumber("a".to_string())));
        assert_eq!(parse_coords("1 2.5"), Err(InputError::NotANumber("2.5".to_string())));
    }
}
