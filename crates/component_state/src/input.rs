//! Graceful parsing and formatting for free-text amount and date inputs.
//!
//! Parsers return [`ParseError`] instead of panicking; callers keep their last valid value when
//! parsing fails.

use chrono::NaiveDate;

use crate::error::ParseError;

/// Parses decimal amount text.
///
/// A leading currency symbol, surrounding whitespace, and `,`/`_` grouping separators are
/// accepted. A leading `-` may sit before or after the symbol.
///
/// # Errors
///
/// Returns [`ParseError::Empty`] for blank input and [`ParseError::InvalidAmount`] when the rest
/// is not a finite decimal number.
pub fn parse_amount(input: &str, currency_symbol: &str) -> Result<f64, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };
    let rest = if currency_symbol.is_empty() {
        rest
    } else {
        rest.strip_prefix(currency_symbol).unwrap_or(rest).trim_start()
    };
    let (negative, rest) = match rest.strip_prefix('-') {
        Some(inner) if !negative => (true, inner),
        _ => (negative, rest),
    };

    let digits: String = rest.chars().filter(|ch| *ch != ',' && *ch != '_').collect();
    let valid_shape = !digits.is_empty()
        && digits.chars().any(|ch| ch.is_ascii_digit())
        && digits.chars().all(|ch| ch.is_ascii_digit() || ch == '.')
        && digits.matches('.').count() <= 1;
    if !valid_shape {
        return Err(ParseError::InvalidAmount(input.to_string()));
    }

    let value: f64 = digits
        .parse()
        .map_err(|_| ParseError::InvalidAmount(input.to_string()))?;
    if !value.is_finite() {
        return Err(ParseError::InvalidAmount(input.to_string()));
    }
    Ok(if negative { -value } else { value })
}

/// Formats an amount with fixed `decimals`, comma thousands grouping and an optional leading
/// currency symbol.
pub fn format_amount(value: f64, decimals: usize, currency_symbol: &str) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (whole, fraction) = match fixed.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, ch) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = fixed.chars().all(|ch| ch == '0' || ch == '.');
    let sign = if value.is_sign_negative() && !is_zero { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{sign}{currency_symbol}{grouped}.{fraction}"),
        None => format!("{sign}{currency_symbol}{grouped}"),
    }
}

/// Parses date text with a `chrono` format string such as `%Y-%m-%d`.
///
/// # Errors
///
/// Returns [`ParseError::Empty`] for blank input and [`ParseError::InvalidDate`] otherwise.
pub fn parse_date(input: &str, format: &str) -> Result<NaiveDate, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    NaiveDate::parse_from_str(trimmed, format).map_err(|_| ParseError::InvalidDate {
        input: input.to_string(),
        format: format.to_string(),
    })
}

/// Formats a date with a `chrono` format string.
pub fn format_date(date: NaiveDate, format: &str) -> String {
    date.format(format).to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn amounts_accept_symbols_and_grouping() {
        assert_eq!(parse_amount("$1,234.50", "$"), Ok(1234.5));
        assert_eq!(parse_amount("  -$12 ", "$"), Ok(-12.0));
        assert_eq!(parse_amount("$-0.25", "$"), Ok(-0.25));
        assert_eq!(parse_amount("1_000", ""), Ok(1000.0));
    }

    #[test]
    fn malformed_amounts_are_rejected() {
        assert_eq!(parse_amount("   ", "$"), Err(ParseError::Empty));
        assert_eq!(
            parse_amount("12.3.4", "$"),
            Err(ParseError::InvalidAmount("12.3.4".to_string()))
        );
        assert!(parse_amount("abc", "$").is_err());
        assert!(parse_amount("$", "$").is_err());
        assert!(parse_amount("1e9", "").is_err());
    }

    #[test]
    fn amounts_format_with_fixed_decimals() {
        assert_eq!(format_amount(1234567.891, 2, "$"), "$1,234,567.89");
        assert_eq!(format_amount(-42.0, 2, ""), "-42.00");
        assert_eq!(format_amount(999.0, 0, "€"), "€999");
        assert_eq!(format_amount(-0.001, 2, "$"), "$0.00");
    }

    #[test]
    fn dates_round_trip_through_format() {
        let date = parse_date("2024-02-29", "%Y-%m-%d").expect("leap day");
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).expect("valid"));
        assert_eq!(format_date(date, "%d/%m/%Y"), "29/02/2024");
        assert_eq!(
            parse_date("2023-02-29", "%Y-%m-%d"),
            Err(ParseError::InvalidDate {
                input: "2023-02-29".to_string(),
                format: "%Y-%m-%d".to_string(),
            })
        );
    }
}
