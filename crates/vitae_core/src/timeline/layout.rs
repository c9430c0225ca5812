//! Timeline layout engine.
//!
//! Converts experience date ranges into positioned blocks and year markers.
//! Overlap packing is a single greedy first-fit pass in input order, so the
//! number of groups depends on record order and is not minimal.

use crate::model::experience::{Experience, ExperienceId, ExperienceKind};
use crate::model::palette::Swatch;
use crate::timeline::config::LayoutConfig;
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

/// Positioned rectangle for one experience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineBlock {
    pub id: ExperienceId,
    pub title: String,
    pub description: Option<String>,
    pub kind: ExperienceKind,
    pub color: Swatch,
    pub start: DateTime<Utc>,
    /// Effective end; `now` for ongoing records.
    pub end: DateTime<Utc>,
    pub ongoing: bool,
    /// Distance from the top of the timeline in pixels.
    pub top: f64,
    pub height: f64,
    /// Index of the overlap group this block was packed into.
    pub group: usize,
    /// Column within the group.
    pub lane: usize,
    pub left: f64,
    pub width: f64,
}

impl TimelineBlock {
    /// Bottom edge in pixels.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn overlaps(&self, other: &TimelineBlock) -> bool {
        !(self.bottom() < other.top || self.top > other.bottom())
    }
}

/// Horizontal reference line for a calendar year boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearMarker {
    pub year: i32,
    pub position: f64,
}

/// Padded date bounds the pixel axis is mapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSpan {
    /// Oldest instant, drawn at the bottom.
    pub min: DateTime<Utc>,
    /// Most recent instant, drawn at the top.
    pub max: DateTime<Utc>,
}

impl TimelineSpan {
    fn total_ms(&self) -> i64 {
        (self.max - self.min).num_milliseconds()
    }

    fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.min && instant <= self.max
    }
}

/// Full layout result consumed by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineLayout {
    pub timeline_height: u32,
    /// Ordered group by group, lane by lane.
    pub blocks: Vec<TimelineBlock>,
    pub year_markers: Vec<YearMarker>,
    /// `None` for an empty timeline.
    pub span: Option<TimelineSpan>,
}

impl TimelineLayout {
    fn empty(config: &LayoutConfig) -> Self {
        Self {
            timeline_height: config.height_for(0),
            blocks: Vec::new(),
            year_markers: Vec::new(),
            span: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of overlap groups the blocks were packed into.
    pub fn group_count(&self) -> usize {
        self.blocks
            .iter()
            .map(|block| block.group + 1)
            .max()
            .unwrap_or(0)
    }
}

/// Lays out `experiences` on a vertical timeline.
///
/// `now` stands in for the end of every ongoing record. Passing the same
/// records, `now` and config always yields the same layout.
pub fn compute_timeline(
    experiences: &[Experience],
    now: DateTime<Utc>,
    config: &LayoutConfig,
) -> TimelineLayout {
    let Some(span) = padded_span(experiences, now, config.year_padding) else {
        return TimelineLayout::empty(config);
    };

    let timeline_height = config.height_for(experiences.len());
    let axis = Axis::new(span, timeline_height);

    let mut groups: Vec<Vec<TimelineBlock>> = Vec::new();
    for experience in experiences {
        let block = position_block(experience, now, &axis, config);
        match groups
            .iter_mut()
            .find(|group| group.iter().any(|member| block.overlaps(member)))
        {
            Some(group) => group.push(block),
            None => groups.push(vec![block]),
        }
    }

    let group_count = groups.len();
    let mut blocks = Vec::with_capacity(experiences.len());
    for (group_index, group) in groups.into_iter().enumerate() {
        let width = config.lane_width_for(group.len());
        for (lane, mut block) in group.into_iter().enumerate() {
            block.group = group_index;
            block.lane = lane;
            block.width = width;
            block.left = lane as f64 * (width + config.lane_gap);
            blocks.push(block);
        }
    }

    let year_markers = year_markers(&axis);

    debug!(
        "event=timeline_layout module=timeline status=ok records={} groups={} markers={} height={}",
        experiences.len(),
        group_count,
        year_markers.len(),
        timeline_height
    );

    TimelineLayout {
        timeline_height,
        blocks,
        year_markers,
        span: Some(span),
    }
}

/// Maps instants to vertical pixel offsets, newest at the top.
struct Axis {
    span: TimelineSpan,
    total_ms: i64,
    height: f64,
}

impl Axis {
    fn new(span: TimelineSpan, height: u32) -> Self {
        Self {
            span,
            total_ms: span.total_ms(),
            height: f64::from(height),
        }
    }

    fn offset(&self, instant: DateTime<Utc>) -> f64 {
        // Padding keeps the span positive; a degenerate span pins
        // everything to the top instead of dividing by zero.
        if self.total_ms <= 0 {
            return 0.0;
        }
        let from_top = (self.span.max - instant).num_milliseconds() as f64;
        from_top / self.total_ms as f64 * self.height
    }
}

fn position_block(
    experience: &Experience,
    now: DateTime<Utc>,
    axis: &Axis,
    config: &LayoutConfig,
) -> TimelineBlock {
    let start = start_of_day(experience.start_date);
    let end = effective_end(experience, now);
    let start_offset = axis.offset(start);
    let end_offset = axis.offset(end);

    TimelineBlock {
        id: experience.id,
        title: experience.title.clone(),
        description: experience.description.clone(),
        kind: experience.kind,
        color: experience.color,
        start,
        end,
        ongoing: experience.is_ongoing(),
        top: start_offset.min(end_offset),
        height: (start_offset - end_offset)
            .abs()
            .max(config.min_block_height),
        group: 0,
        lane: 0,
        left: 0.0,
        width: 0.0,
    }
}

fn year_markers(axis: &Axis) -> Vec<YearMarker> {
    (axis.span.min.year()..=axis.span.max.year())
        .filter_map(|year| NaiveDate::from_ymd_opt(year, 1, 1).map(|jan1| (year, jan1)))
        .map(|(year, jan1)| (year, start_of_day(jan1)))
        .filter(|(_, instant)| axis.span.contains(*instant))
        .map(|(year, instant)| YearMarker {
            year,
            position: axis.offset(instant),
        })
        .collect()
}

fn padded_span(
    experiences: &[Experience],
    now: DateTime<Utc>,
    padding_years: i32,
) -> Option<TimelineSpan> {
    let instants = experiences.iter().flat_map(|experience| {
        [
            start_of_day(experience.start_date),
            effective_end(experience, now),
        ]
    });

    let (min, max) = instants.fold(None, |bounds, instant| match bounds {
        None => Some((instant, instant)),
        Some((min, max)) => Some((instant.min(min), instant.max(max))),
    })?;

    Some(TimelineSpan {
        min: shift_years(min, -padding_years),
        max: shift_years(max, padding_years),
    })
}

fn effective_end(experience: &Experience, now: DateTime<Utc>) -> DateTime<Utc> {
    experience.end_date.map(start_of_day).unwrap_or(now)
}

/// Midnight UTC, the instant a bare calendar date stands for.
pub(crate) fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

/// Moves `instant` by whole calendar years keeping month, day and time.
///
/// Feb 29 landing on a non-leap year rolls over to Mar 1.
pub(crate) fn shift_years(instant: DateTime<Utc>, years: i32) -> DateTime<Utc> {
    let target = instant.year().saturating_add(years);
    if let Some(shifted) = instant.with_year(target) {
        return shifted;
    }
    NaiveDate::from_ymd_opt(target, 3, 1)
        .map(|date| Utc.from_utc_datetime(&date.and_time(instant.time())))
        .unwrap_or(instant)
}
