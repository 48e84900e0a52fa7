//! Extraction of the conditions fields from the rendered resort page.
//!
//! The selectors below mirror the markup of the resort's conditions page. The
//! site owns that markup, so a redesign there breaks extraction here and
//! nowhere else.

use crate::error::{ExtractError, FieldNotFound};
use crate::models::{ConditionsSnapshot, SNOW_SUFFIX, TEMPERATURE_SUFFIX};
use scraper::{Html, Selector};
use tracing::debug;

const TEMPERATURE: &str = "span#conditions-now-temp";
const WIND_SPEED: &str = "div#conditions-wind span#conditions-wind-speed";
const WIND_UNITS: &str = "div#conditions-wind span.units";
const WIND_DIRECTION: &str = "div#conditions-wind span#conditions-wind-direction";
const OPEN_TRAIL_COUNT: &str = "span#conditions-open-trails-count-open";
const OPEN_TRAIL_TOTAL: &str = "span#conditions-open-trails-count-total";
const GROOMED_TRAIL_COUNT: &str = "span#conditions-groomed-trails-count";
const GROOMED_TRAIL_TOTAL: &str = "span#conditions-groomed-trails-count-total";
const OPEN_LIFT_COUNT: &str = "span#conditions-lifts-count-open";
const OPEN_LIFT_TOTAL: &str = "span#conditions-lifts-count-total";
const SNOW_DEPTH: &str = "span#conditions-snow-current-depth";
const SNOW_LAST_48: &str = "span#conditions-snow-last-48";
const SNOW_LAST_24: &str = "span#conditions-snow-last-24";
const SNOW_OVERNIGHT: &str = "span#conditions-snow-overnight";

/// Parse the rendered conditions page into a snapshot
pub fn extract(html: &str) -> Result<ConditionsSnapshot, ExtractError> {
    let document = Html::parse_document(html);
    let mut page = Lookup {
        document: &document,
        missing: Vec::new(),
    };

    let wind = format!(
        "{} {} {}",
        page.text("windSpeed", WIND_SPEED),
        page.text("windUnits", WIND_UNITS).to_uppercase(),
        page.text("windDirection", WIND_DIRECTION).to_uppercase(),
    );

    let snapshot = ConditionsSnapshot {
        temperature: page.text("temperature", TEMPERATURE) + TEMPERATURE_SUFFIX,
        wind,
        open_trail_count: page.text("openTrailCount", OPEN_TRAIL_COUNT),
        open_trail_total: page.text("openTrailTotal", OPEN_TRAIL_TOTAL),
        groomed_trail_count: page.text("groomedTrailCount", GROOMED_TRAIL_COUNT),
        groomed_trail_total: page.text("groomedTrailTotal", GROOMED_TRAIL_TOTAL),
        open_lift_count: page.text("openLiftCount", OPEN_LIFT_COUNT),
        open_lift_total: page.text("openLiftTotal", OPEN_LIFT_TOTAL),
        snow_depth: page.text("snowDepth", SNOW_DEPTH) + SNOW_SUFFIX,
        snow_last_48_hours: page.text("snowLast48Hours", SNOW_LAST_48) + SNOW_SUFFIX,
        snow_last_24_hours: page.text("snowLast24Hours", SNOW_LAST_24) + SNOW_SUFFIX,
        snow_overnight: page.text("snowOvernight", SNOW_OVERNIGHT) + SNOW_SUFFIX,
    };

    if page.missing.is_empty() {
        Ok(snapshot)
    } else {
        Err(ExtractError {
            missing: page.missing,
        })
    }
}

/// Selector lookups against one document, recording every miss
struct Lookup<'a> {
    document: &'a Html,
    missing: Vec<FieldNotFound>,
}

impl Lookup<'_> {
    fn text(&mut self, field: &'static str, selector: &'static str) -> String {
        match find(self.document, field, selector) {
            Ok(text) => text,
            Err(miss) => {
                debug!("No node for {} at {}", miss.field, miss.selector);
                self.missing.push(miss);
                String::new()
            }
        }
    }
}

fn find(
    document: &Html,
    field: &'static str,
    selector: &'static str,
) -> Result<String, FieldNotFound> {
    // The table above is fixed CSS; every entry is checked by `selector_table_parses`
    let parsed = Selector::parse(selector).expect("conditions selectors are valid CSS");

    document
        .select(&parsed)
        .next()
        .map(|element| element.inner_html().trim().to_string())
        .ok_or(FieldNotFound { field, selector })
}
