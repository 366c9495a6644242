// src/core/innings.rs
//! Innings pitched use a thirds encoding: `6.1` is six innings and one out,
//! `6.2` six and two. The decimal digit is an out count, not a fraction.
use crate::error::{ParseError, Result};

/// `floor(ip) * 3 + round((ip * 10) mod 10)`.
pub fn innings_to_outs(ip: f64) -> Result<u32> {
    if !ip.is_finite() || ip < 0.0 {
        return Err(ParseError::InvalidInnings(ip.to_string()));
    }
    let whole = ip.floor();
    let thirds = ((ip * 10.0) % 10.0).round() as u32;
    // 0.95 rounds up to a full 10 tenths; still not a thirds digit
    if thirds > 2 {
        return Err(ParseError::InvalidInnings(ip.to_string()));
    }
    let too_many = || ParseError::InvalidInnings(ip.to_string());
    if whole > f64::from(u32::MAX) {
        return Err(too_many());
    }
    (whole as u32)
        .checked_mul(3)
        .and_then(|outs| outs.checked_add(thirds))
        .ok_or_else(too_many)
}

/// Raw `IP` cell text → outs.
pub fn parse_innings(cell: &str) -> Result<u32> {
    let ip: f64 = cell
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidInnings(s!(cell)))?;
    innings_to_outs(ip)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirds_become_outs() {
        assert_eq!(innings_to_outs(6.1).unwrap(), 19);
        assert_eq!(innings_to_outs(6.2).unwrap(), 20);
        assert_eq!(innings_to_outs(6.0).unwrap(), 18);
        assert_eq!(innings_to_outs(0.2).unwrap(), 2);
        assert_eq!(innings_to_outs(0.0).unwrap(), 0);
        assert_eq!(innings_to_outs(9.0).unwrap(), 27);
    }

    #[test]
    fn text_cells() {
        assert_eq!(parse_innings("7.1").unwrap(), 22);
        assert_eq!(parse_innings(" 5 ").unwrap(), 15);
        assert_eq!(parse_innings("0.1").unwrap(), 1);
    }

    #[test]
    fn out_of_domain_digits_fail() {
        assert!(innings_to_outs(6.3).is_err());
        assert!(innings_to_outs(6.5).is_err());
        assert!(innings_to_outs(-1.0).is_err());
        assert!(innings_to_outs(f64::NAN).is_err());
        assert!(parse_innings("--").is_err());
    }

    #[test]
    fn too_many_outs_fail() {
        assert!(matches!(parse_innings("2000000000"), Err(ParseError::InvalidInnings(_))));
        assert!(matches!(innings_to_outs(1e300), Err(ParseError::InvalidInnings(_))));
        // u32::MAX / 3 whole innings still fit
        assert_eq!(innings_to_outs(1_431_655_765.0).unwrap(), 4_294_967_295);
    }
}
