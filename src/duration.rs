//! ISO-8601 durations as the YouTube Data API reports them (`PT1H2M3S`).

use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;

use crate::error::{Error, Result};

static ISO_DURATION: OnceLock<Regex> = OnceLock::new();

fn iso_duration() -> &'static Regex {
    ISO_DURATION.get_or_init(|| {
        Regex::new(
            r"^P(?:(\d+)W)?(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+(?:\.\d+)?)S)?)?$",
        )
        .expect("duration pattern is valid")
    })
}

/// Parse an ISO-8601 duration such as `PT45S`, `PT1H2M` or `P1DT3H`.
///
/// Years and months are rejected; the API never emits them for video lengths.
pub fn parse_iso8601(text: &str) -> Result<Duration> {
    let invalid = || Error::Parse(format!("invalid ISO-8601 duration: {:?}", text));

    let caps = iso_duration().captures(text).ok_or_else(invalid)?;
    // "P" and "PT" alone match the pattern but carry no components
    if caps.iter().skip(1).all(|c| c.is_none()) {
        return Err(invalid());
    }

    let whole = |idx: usize| -> Result<u64> {
        caps.get(idx)
            .map(|m| m.as_str().parse::<u64>().map_err(|_| invalid()))
            .unwrap_or(Ok(0))
    };

    let mut secs: u64 = 0;
    for (idx, unit) in [(1, 7 * 86_400), (2, 86_400), (3, 3_600), (4, 60)] {
        secs = whole(idx)?
            .checked_mul(unit)
            .and_then(|part| secs.checked_add(part))
            .ok_or_else(invalid)?;
    }
    let fractional = caps
        .get(5)
        .map(|m| m.as_str().parse::<f64>().map_err(|_| invalid()))
        .unwrap_or(Ok(0.0))?;
    let fractional = Duration::try_from_secs_f64(fractional).map_err(|_| invalid())?;

    Duration::from_secs(secs)
        .checked_add(fractional)
        .ok_or_else(invalid)
}

/// Format as `H:MM:SS`, hours unbounded.
pub fn format_hms(duration: Duration) -> String {
    let total = duration.as_secs();
    format!("{}:{:02}:{:02}", total / 3600, (total / 60) % 60, total % 60)
}
