//! Display helpers for timeline block captions.

use crate::timeline::TimelineBlock;
use chrono::NaiveDate;

/// Label shown instead of an end date for ongoing records.
pub const PRESENT_LABEL: &str = "Present";

/// Blocks shorter than this hide their description.
pub const DESCRIPTION_MIN_HEIGHT: f64 = 80.0;

/// Formats a date as short month and year, e.g. `Jan 2020`.
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

pub fn format_block_start(block: &TimelineBlock) -> String {
    format_month_year(block.start.date_naive())
}

/// End caption: `Present` for ongoing records, month/year otherwise.
pub fn format_block_end(block: &TimelineBlock) -> String {
    if block.ongoing {
        PRESENT_LABEL.to_string()
    } else {
        format_month_year(block.end.date_naive())
    }
}

/// Whether a block is tall enough to show its description.
pub fn shows_description(block: &TimelineBlock) -> bool {
    block.description.is_some() && block.height > DESCRIPTION_MIN_HEIGHT
}
