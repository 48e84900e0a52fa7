use crate::models::{ConditionsSnapshot, TEMPERATURE_SUFFIX};

const HASHTAG: &str = "#BogusBasinConditions";

/// Build the post text for a snapshot
pub fn format_message(snapshot: &ConditionsSnapshot, short_link: &str) -> String {
    [
        HASHTAG.to_string(),
        format!("Temp: {}", snapshot.temperature),
        format!("Wind: {}", snapshot.wind),
        format!("Snow Current: {}", snapshot.snow_depth),
        format!("Snow Last 24: {}", snapshot.snow_last_24_hours),
        format!("Full Report: {}", short_link),
    ]
    .join("\n")
}

/// Length of a message as logged before posting.
///
/// Counts Unicode scalar values, not UTF-16 units, so an emoji counts once.
/// The API applies its own weighting; this number is informational only.
pub fn message_length(message: &str) -> usize {
    message.chars().count()
}

/// Whether the snapshot carries a temperature reading.
///
/// Only an entirely empty reading is caught; a garbled value still passes.
pub fn is_valid(snapshot: &ConditionsSnapshot) -> bool {
    snapshot.temperature != TEMPERATURE_SUFFIX
}
