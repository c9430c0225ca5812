//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose form validation, palette and timeline layout to Dart via FRB.
//! - Translate plain string DTOs to and from core types.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The record list lives on the UI side; every call is stateless.
//! - Dates cross the boundary as `YYYY-MM-DD`, instants as epoch millis.

use chrono::{DateTime, NaiveDate, Utc};
use log::warn;
use uuid::Uuid;
use vitae_core::form::parse_form_date;
use vitae_core::format::{format_block_end, format_block_start, shows_description};
use vitae_core::{
    compute_timeline, core_version as core_version_inner, init_logging as init_logging_inner,
    parse_swatch, ping as ping_inner, Experience, ExperienceDraft, ExperienceKind, LayoutConfig,
    TimelineBlock, PALETTE,
};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One palette entry for the color picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchItem {
    /// Display name (`Blue`).
    pub name: String,
    /// Class value stored on records (`bg-blue-500`).
    pub value: String,
}

/// Raw form values as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExperienceFormInput {
    pub title: String,
    pub description: String,
    /// `work|education`.
    pub kind: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    /// Class value; blank selects the default swatch.
    pub color: String,
}

/// A stored record as held by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceItem {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub kind: String,
    pub start_date: String,
    /// `None` while ongoing.
    pub end_date: Option<String>,
    pub color: String,
}

/// Field-level validation issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssueItem {
    /// `title|start_date|end_date|kind|color`.
    pub field: String,
    pub message: String,
}

/// Validation result envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResponse {
    pub ok: bool,
    pub issues: Vec<FieldIssueItem>,
}

/// Result envelope for record creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceActionResponse {
    pub ok: bool,
    /// Created record on success.
    pub experience: Option<ExperienceItem>,
    pub issues: Vec<FieldIssueItem>,
    pub message: String,
}

/// Positioned block ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineBlockItem {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub kind: String,
    pub color: String,
    pub start_label: String,
    /// `Present` for ongoing records.
    pub end_label: String,
    pub ongoing: bool,
    pub show_description: bool,
    pub top: f64,
    pub height: f64,
    pub left: f64,
    pub width: f64,
    pub group: u32,
    pub lane: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearMarkerItem {
    pub year: i32,
    pub position: f64,
}

/// Layout result envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineResponse {
    pub ok: bool,
    pub message: String,
    pub timeline_height: u32,
    pub blocks: Vec<TimelineBlockItem>,
    pub year_markers: Vec<YearMarkerItem>,
}

impl TimelineResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            timeline_height: LayoutConfig::default().empty_height,
            blocks: Vec::new(),
            year_markers: Vec::new(),
        }
    }
}

/// Lists the color palette in picker order.
#[flutter_rust_bridge::frb(sync)]
pub fn palette_swatches() -> Vec<SwatchItem> {
    PALETTE
        .iter()
        .map(|swatch| SwatchItem {
            name: swatch.name().to_string(),
            value: swatch.class_value().to_string(),
        })
        .collect()
}

/// Validates form input without creating anything.
///
/// # FFI contract
/// - Sync call, pure.
/// - Never panics; reports every failing field.
#[flutter_rust_bridge::frb(sync)]
pub fn validate_experience(input: ExperienceFormInput) -> ValidationResponse {
    let issues = match to_draft(&input) {
        Ok(draft) => match draft.validate(false) {
            Ok(_) => Vec::new(),
            Err(err) => to_issue_items(&err),
        },
        Err(issues) => issues,
    };
    ValidationResponse {
        ok: issues.is_empty(),
        issues,
    }
}

/// Turns valid form input into a new record with a fresh id.
///
/// # FFI contract
/// - Sync call, pure apart from id generation.
/// - On failure `experience` is `None` and `issues` lists field problems;
///   the UI may ignore the failure to keep the form open unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn create_experience(input: ExperienceFormInput) -> ExperienceActionResponse {
    let validated = to_draft(&input).and_then(|draft| {
        draft
            .validate(false)
            .map_err(|err| to_issue_items(&err))
    });

    match validated {
        Ok(validated) => {
            let experience = validated.into_experience(Uuid::new_v4());
            ExperienceActionResponse {
                ok: true,
                experience: Some(to_experience_item(&experience)),
                issues: Vec::new(),
                message: "Experience created.".to_string(),
            }
        }
        Err(issues) => {
            warn!(
                "event=ffi_create_experience module=ffi status=rejected issues={}",
                issues.len()
            );
            ExperienceActionResponse {
                ok: false,
                experience: None,
                message: format!("create_experience failed: {} invalid field(s)", issues.len()),
                issues,
            }
        }
    }
}

/// Computes the timeline layout for the UI's current record list.
///
/// # FFI contract
/// - Sync call, pure given `now_epoch_ms`.
/// - Never panics; a malformed record fails the whole call with a message.
#[flutter_rust_bridge::frb(sync)]
pub fn timeline_layout(records: Vec<ExperienceItem>, now_epoch_ms: i64) -> TimelineResponse {
    let Some(now) = DateTime::<Utc>::from_timestamp_millis(now_epoch_ms) else {
        return TimelineResponse::failure(format!(
            "timeline_layout failed: now_epoch_ms {now_epoch_ms} out of range"
        ));
    };

    let experiences = match records
        .iter()
        .map(to_experience)
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(experiences) => experiences,
        Err(err) => return TimelineResponse::failure(format!("timeline_layout failed: {err}")),
    };

    let layout = compute_timeline(&experiences, now, &LayoutConfig::default());
    TimelineResponse {
        ok: true,
        message: String::new(),
        timeline_height: layout.timeline_height,
        blocks: layout.blocks.iter().map(to_block_item).collect(),
        year_markers: layout
            .year_markers
            .iter()
            .map(|marker| YearMarkerItem {
                year: marker.year,
                position: marker.position,
            })
            .collect(),
    }
}

fn to_draft(input: &ExperienceFormInput) -> Result<ExperienceDraft, Vec<FieldIssueItem>> {
    let mut issues = Vec::new();

    let kind = if input.kind.trim().is_empty() {
        Some(ExperienceKind::default())
    } else {
        ExperienceKind::parse(&input.kind)
    };
    if kind.is_none() {
        issues.push(FieldIssueItem {
            field: "kind".to_string(),
            message: format!("unknown experience type `{}`", input.kind.trim()),
        });
    }

    let color = if input.color.trim().is_empty() {
        Ok(Default::default())
    } else {
        parse_swatch(&input.color)
    };
    if let Err(err) = &color {
        issues.push(FieldIssueItem {
            field: "color".to_string(),
            message: err.to_string(),
        });
    }

    match (kind, color) {
        (Some(kind), Ok(color)) if issues.is_empty() => {
            let mut draft = ExperienceDraft {
                title: input.title.clone(),
                description: input.description.clone(),
                kind,
                start_date: input.start_date.clone(),
                end_date: input.end_date.clone(),
                current: false,
                color,
            };
            draft.set_current(input.current);
            Ok(draft)
        }
        _ => Err(issues),
    }
}

fn to_issue_items(err: &vitae_core::DraftValidationError) -> Vec<FieldIssueItem> {
    err.issues
        .iter()
        .map(|issue| FieldIssueItem {
            field: issue.field.as_str().to_string(),
            message: issue.to_string(),
        })
        .collect()
}

fn to_experience(item: &ExperienceItem) -> Result<Experience, String> {
    let id = Uuid::parse_str(item.id.trim())
        .map_err(|_| format!("invalid experience id `{}`", item.id))?;
    let kind = ExperienceKind::parse(&item.kind)
        .ok_or_else(|| format!("unknown experience type `{}`", item.kind))?;
    let start_date = required_date(&item.start_date)?;
    let end_date = match item.end_date.as_deref() {
        Some(raw) => parse_item_date(raw)?,
        None => None,
    };
    let color = parse_swatch(&item.color).map_err(|err| err.to_string())?;

    let experience = Experience::with_id(id, kind, item.title.clone(), start_date)
        .map_err(|err| err.to_string())?
        .ending(end_date)
        .colored(color);
    Ok(match &item.description {
        Some(text) => experience.described(text.clone()),
        None => experience,
    })
}

fn required_date(raw: &str) -> Result<NaiveDate, String> {
    parse_item_date(raw)?.ok_or_else(|| "start_date is required".to_string())
}

fn parse_item_date(raw: &str) -> Result<Option<NaiveDate>, String> {
    parse_form_date(raw).map_err(|_| format!("invalid date `{}`", raw.trim()))
}

fn to_experience_item(experience: &Experience) -> ExperienceItem {
    ExperienceItem {
        id: experience.id.to_string(),
        title: experience.title.clone(),
        description: experience.description.clone(),
        kind: experience.kind.as_str().to_string(),
        start_date: experience.start_date.format("%Y-%m-%d").to_string(),
        end_date: experience
            .end_date
            .map(|date| date.format("%Y-%m-%d").to_string()),
        color: experience.color.class_value().to_string(),
    }
}

fn to_block_item(block: &TimelineBlock) -> TimelineBlockItem {
    TimelineBlockItem {
        id: block.id.to_string(),
        title: block.title.clone(),
        description: block.description.clone(),
        kind: block.kind.as_str().to_string(),
        color: block.color.class_value().to_string(),
        start_label: format_block_start(block),
        end_label: format_block_end(block),
        ongoing: block.ongoing,
        show_description: shows_description(block),
        top: block.top,
        height: block.height,
        left: block.left,
        width: block.width,
        group: u32::try_from(block.group).unwrap_or(u32::MAX),
        lane: u32::try_from(block.lane).unwrap_or(u32::MAX),
    }
}
