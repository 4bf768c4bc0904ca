use crate::error::{GeoscanError, ParseError, Result};

use super::point::Point;

fn parse_numbers<'a>(tokens: impl Iterator<Item = &'a str>) -> Result<Vec<f64>> {
    tokens
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| GeoscanError::from(ParseError::InvalidNumber(token.to_owned())))
        })
        .collect()
}

/// Parses exactly `N` whitespace-separated numbers.
pub(crate) fn parse_fixed<const N: usize>(s: &str) -> Result<[f64; N]> {
    let numbers = parse_numbers(s.split_whitespace())?;
    let found = numbers.len();
    numbers
        .try_into()
        .map_err(|_| GeoscanError::from(ParseError::WrongTokenCount { expected: N, found }))
}

fn pair_up(numbers: &[f64]) -> Result<Vec<Point>> {
    if numbers.len() % 2 != 0 {
        return Err(ParseError::WrongTokenCount {
            expected: numbers.len() + 1,
            found: numbers.len(),
        }
        .into());
    }
    numbers
        .chunks_exact(2)
        .map(|xy| Point::new(xy[0], xy[1]))
        .collect()
}

/// Parses `"x0 y0 x1 y1 ..."` into points.
pub(crate) fn parse_points(s: &str) -> Result<Vec<Point>> {
    pair_up(&parse_numbers(s.split_whitespace())?)
}

/// Parses `"n x0 y0 ... x(n-1) y(n-1)"` into `n` points.
pub(crate) fn parse_counted_points(s: &str) -> Result<Vec<Point>> {
    let mut tokens = s.split_whitespace();
    let count_token = tokens.next().ok_or(ParseError::MissingCount)?;
    let count = count_token
        .parse::<usize>()
        .map_err(|_| ParseError::InvalidNumber(count_token.to_owned()))?;
    let numbers = parse_numbers(tokens)?;
    let expected = count
        .checked_mul(2)
        .ok_or_else(|| ParseError::InvalidNumber(count_token.to_owned()))?;
    if numbers.len() != expected {
        return Err(ParseError::WrongTokenCount {
            expected,
            found: numbers.len(),
        }
        .into());
    }
    pair_up(&numbers)
}
