use serde::Serialize;

/// Suffix appended to the extracted temperature reading
pub const TEMPERATURE_SUFFIX: &str = "F";

/// Suffix appended to every snow measurement
pub const SNOW_SUFFIX: &str = "\"";

/// Conditions scraped from the resort page during a single run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionsSnapshot {
    pub temperature: String,
    pub wind: String,
    pub open_trail_count: String,
    pub open_trail_total: String,
    pub groomed_trail_count: String,
    pub groomed_trail_total: String,
    pub open_lift_count: String,
    pub open_lift_total: String,
    pub snow_depth: String,
    pub snow_last_48_hours: String,
    pub snow_last_24_hours: String,
    pub snow_overnight: String,
}

impl ConditionsSnapshot {
    /// Field names paired with their values, in page order
    pub fn fields(&self) -> [(&'static str, &str); 12] {
        [
            ("temperature", self.temperature.as_str()),
            ("wind", self.wind.as_str()),
            ("openTrailCount", self.open_trail_count.as_str()),
            ("openTrailTotal", self.open_trail_total.as_str()),
            ("groomedTrailCount", self.groomed_trail_count.as_str()),
            ("groomedTrailTotal", self.groomed_trail_total.as_str()),
            ("openLiftCount", self.open_lift_count.as_str()),
            ("openLiftTotal", self.open_lift_total.as_str()),
            ("snowDepth", self.snow_depth.as_str()),
            ("snowLast48Hours", self.snow_last_48_hours.as_str()),
            ("snowLast24Hours", self.snow_last_24_hours.as_str()),
            ("snowOvernight", self.snow_overnight.as_str()),
        ]
    }
}
