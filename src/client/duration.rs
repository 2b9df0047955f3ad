//! ISO 8601 durations as used by `contentDetails.duration`.

use super::error::Error;

/// Parse `P[nW][nD][T[nH][nM][nS]]` into whole seconds.
///
/// Fractional seconds are truncated. Year and month designators are
/// rejected since they have no fixed length.
pub fn parse_seconds(s: &str) -> Result<u64, Error> {
    let invalid = || Error::InvalidParams(format!("invalid ISO 8601 duration: {s}"));

    let rest = s.strip_prefix('P').ok_or_else(invalid)?;
    if rest.is_empty() {
        return Err(invalid());
    }

    let (date, time) = match rest.split_once('T') {
        Some((_, "")) => return Err(invalid()),
        Some((date, time)) => (date, time),
        None => (rest, ""),
    };

    let mut total: u64 = 0;
    for (segment, in_time) in [(date, false), (time, true)] {
        let mut number = String::new();
        let mut last_rank = 0;
        for c in segment.chars() {
            if c.is_ascii_digit() || c == '.' {
                number.push(c);
                continue;
            }
            if number.is_empty() {
                return Err(invalid());
            }
            // Designators appear at most once, largest unit first.
            let (rank, unit): (u8, u64) = match (c, in_time) {
                ('W', false) => (1, 7 * 86_400),
                ('D', false) => (2, 86_400),
                ('H', true) => (1, 3_600),
                ('M', true) => (2, 60),
                ('S', true) => (3, 1),
                _ => return Err(invalid()),
            };
            if rank <= last_rank {
                return Err(invalid());
            }
            last_rank = rank;

            let whole = match number.split_once('.') {
                None => number.as_str(),
                Some((whole, frac))
                    if c == 'S'
                        && !whole.is_empty()
                        && !frac.is_empty()
                        && frac.chars().all(|d| d.is_ascii_digit()) =>
                {
                    whole
                }
                Some(_) => return Err(invalid()),
            };
            let value: u64 = whole.parse().map_err(|_| invalid())?;
            total = value
                .checked_mul(unit)
                .and_then(|v| total.checked_add(v))
                .ok_or_else(invalid)?;
            number.clear();
        }
        if !number.is_empty() {
            return Err(invalid());
        }
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_video_lengths() {
        assert_eq!(parse_seconds("PT0S").unwrap(), 0);
        assert_eq!(parse_seconds("PT15S").unwrap(), 15);
        assert_eq!(parse_seconds("PT4M13S").unwrap(), 253);
        assert_eq!(parse_seconds("PT1H2M3S").unwrap(), 3723);
        assert_eq!(parse_seconds("PT2H").unwrap(), 7200);
    }

    #[test]
    fn parses_day_and_week_designators() {
        assert_eq!(parse_seconds("P1DT2H").unwrap(), 93_600);
        assert_eq!(parse_seconds("P1W").unwrap(), 604_800);
        assert_eq!(parse_seconds("P0D").unwrap(), 0);
    }

    #[test]
    fn truncates_fractional_seconds() {
        assert_eq!(parse_seconds("PT1.5S").unwrap(), 1);
    }

    #[test]
    fn rejects_malformed() {
        for bad in [
            "", "P", "PT", "T1S", "PT1X", "P1M", "PTS", "PT5", "1H", "PT1H1H", "PT3S1H",
            "PT1S2M", "P1D1W", "PT1.2.3S", "PT1.5M", "PT.5S", "PT1.S",
        ] {
            assert!(parse_seconds(bad).is_err(), "{bad} should be rejected");
        }
    }
}
