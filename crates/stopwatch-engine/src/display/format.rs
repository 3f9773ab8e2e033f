use std::fmt;
use std::time::Duration;

/// `Display` adapter rendering a duration as `MM:SS.CC`.
///
/// Truncates to hundredths of a second. Minutes are unbounded, so one hour
/// renders as `60:00.00` and there is no hour field.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Elapsed(pub Duration);

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hundredths = self.0.as_millis() / 10;
        let minutes = hundredths / 6_000;
        let seconds = (hundredths / 100) % 60;
        let centis = hundredths % 100;
        write!(f, "{minutes:02}:{seconds:02}.{centis:02}")
    }
}

/// Formats `elapsed` as `MM:SS.CC`.
pub fn format_elapsed(elapsed: Duration) -> String {
    Elapsed(elapsed).to_string()
}
