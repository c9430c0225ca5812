use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use vitae_core::{compute_timeline, Experience, ExperienceKind, LayoutConfig, TimelineLayout};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn record(title: &str, start: NaiveDate, end: Option<NaiveDate>) -> Experience {
    Experience::new(ExperienceKind::Work, title, start)
        .unwrap()
        .ending(end)
}

fn layout(records: &[Experience], now: DateTime<Utc>) -> TimelineLayout {
    compute_timeline(records, now, &LayoutConfig::default())
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn empty_input_uses_default_height_and_no_output() {
    let result = layout(&[], at(2024, 1, 1));

    assert_eq!(result.timeline_height, 400);
    assert!(result.blocks.is_empty());
    assert!(result.year_markers.is_empty());
    assert!(result.span.is_none());
    assert!(result.is_empty());
    assert_eq!(result.group_count(), 0);
}

#[test]
fn height_is_floored_at_600_then_grows_per_record() {
    let now = at(2024, 1, 1);
    let few: Vec<_> = (0..3)
        .map(|i| record("r", ymd(2010 + i, 1, 1), Some(ymd(2010 + i, 6, 1))))
        .collect();
    assert_eq!(layout(&few, now).timeline_height, 600);

    let many: Vec<_> = (0..7)
        .map(|i| record("r", ymd(2010 + i, 1, 1), Some(ymd(2010 + i, 6, 1))))
        .collect();
    assert_eq!(layout(&many, now).timeline_height, 700);
}

#[test]
fn overlapping_engineer_and_degree_share_one_group() {
    let records = vec![
        record("Engineer", ymd(2020, 1, 1), Some(ymd(2022, 6, 1))),
        record("Degree", ymd(2018, 9, 1), Some(ymd(2022, 5, 1))),
    ];
    let result = layout(&records, at(2024, 1, 1));

    assert!(!result.is_empty());
    assert_eq!(result.group_count(), 1);
    assert_eq!(result.blocks.len(), 2);
    assert_eq!(result.blocks[0].title, "Engineer");
    assert_eq!(result.blocks[1].title, "Degree");
    for block in &result.blocks {
        assert_eq!(block.width, 200.0);
    }
    assert_eq!(result.blocks[0].left, 0.0);
    assert_eq!(result.blocks[1].left, 210.0);
    assert_eq!(result.blocks[0].lane, 0);
    assert_eq!(result.blocks[1].lane, 1);
}

#[test]
fn ongoing_record_spans_to_now_with_padded_year_markers() {
    let records = vec![record("A", ymd(2021, 1, 1), None)];
    let result = layout(&records, at(2024, 1, 1));

    let span = result.span.expect("non-empty layout has a span");
    assert_eq!(span.min, at(2020, 1, 1));
    assert_eq!(span.max, at(2025, 1, 1));

    let years: Vec<i32> = result.year_markers.iter().map(|m| m.year).collect();
    assert_eq!(years, vec![2020, 2021, 2022, 2023, 2024, 2025]);
    assert_close(result.year_markers[0].position, 600.0);
    assert_close(result.year_markers[5].position, 0.0);

    let block = &result.blocks[0];
    assert!(block.ongoing);
    assert_eq!(block.end, at(2024, 1, 1));
    assert_eq!(block.width, 200.0);
    assert_eq!(block.left, 0.0);

    // 2020-01-01..2025-01-01 is 1827 days; 2024 is a leap year.
    assert_close(block.top, 366.0 / 1827.0 * 600.0);
    assert_close(block.bottom(), 1461.0 / 1827.0 * 600.0);
}

#[test]
fn same_day_record_gets_minimum_block_height() {
    let records = vec![
        record("Hackathon", ymd(2019, 5, 4), Some(ymd(2019, 5, 4))),
        record("Workshop", ymd(2019, 5, 4), Some(ymd(2019, 5, 6))),
    ];
    let result = layout(&records, at(2024, 1, 1));

    for block in &result.blocks {
        assert!(block.height >= 20.0, "height {}", block.height);
    }
    assert_eq!(result.blocks[0].height, 20.0);
}

#[test]
fn disjoint_ranges_form_separate_full_width_groups() {
    let records = vec![
        record("Early", ymd(2000, 1, 1), Some(ymd(2001, 1, 1))),
        record("Late", ymd(2010, 1, 1), Some(ymd(2011, 1, 1))),
    ];
    let result = layout(&records, at(2024, 1, 1));

    assert_eq!(result.group_count(), 2);
    for block in &result.blocks {
        assert_eq!(block.lane, 0);
        assert_eq!(block.left, 0.0);
        assert_eq!(block.width, 200.0);
    }
}

#[test]
fn first_fit_grouping_depends_on_input_order() {
    let a = record("A", ymd(2000, 1, 1), Some(ymd(2002, 1, 1)));
    let b = record("B", ymd(2004, 1, 1), Some(ymd(2006, 1, 1)));
    let bridge = record("Bridge", ymd(2001, 1, 1), Some(ymd(2005, 1, 1)));
    let now = at(2024, 1, 1);

    let split = layout(&[a.clone(), b.clone(), bridge.clone()], now);
    assert_eq!(split.group_count(), 2);
    let titles: Vec<&str> = split.blocks.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "Bridge", "B"]);

    let merged = layout(&[bridge, a, b], now);
    assert_eq!(merged.group_count(), 1);
    assert_eq!(merged.blocks.len(), 3);
}

#[test]
fn blocks_in_one_group_never_share_a_left_offset() {
    let records: Vec<_> = (0..4)
        .map(|i| record("Overlap", ymd(2015, 1, 1 + i), Some(ymd(2020, 1, 1))))
        .collect();
    let result = layout(&records, at(2024, 1, 1));

    assert_eq!(result.group_count(), 1);
    let lefts: Vec<f64> = result.blocks.iter().map(|b| b.left).collect();
    assert_eq!(lefts, vec![0.0, 160.0, 320.0, 480.0]);
    for block in &result.blocks {
        assert_eq!(block.width, 150.0);
    }
}

#[test]
fn crowded_group_width_respects_configured_floor() {
    let records: Vec<_> = (0..7)
        .map(|_| record("Same", ymd(2015, 1, 1), Some(ymd(2020, 1, 1))))
        .collect();
    let now = at(2024, 1, 1);

    let unbounded = layout(&records, now);
    assert_close(unbounded.blocks[0].width, 600.0 / 7.0);

    let floored = compute_timeline(
        &records,
        now,
        &LayoutConfig {
            min_lane_width: Some(100.0),
            ..LayoutConfig::default()
        },
    );
    assert_eq!(floored.blocks[0].width, 100.0);
    assert_eq!(floored.blocks[6].left, 6.0 * 110.0);
}

#[test]
fn missing_end_matches_explicit_end_at_now() {
    let now = at(2023, 3, 1);
    let ongoing = layout(&[record("Job", ymd(2019, 1, 1), None)], now);
    let closed = layout(&[record("Job", ymd(2019, 1, 1), Some(ymd(2023, 3, 1)))], now);

    let (a, b) = (&ongoing.blocks[0], &closed.blocks[0]);
    assert!(a.ongoing);
    assert!(!b.ongoing);
    assert_eq!(a.end, b.end);
    assert_eq!(a.top, b.top);
    assert_eq!(a.height, b.height);
    assert_eq!(a.width, b.width);
    assert_eq!(ongoing.year_markers, closed.year_markers);
    assert_eq!(ongoing.span, closed.span);
}

#[test]
fn year_markers_skip_jan_first_outside_padded_bounds() {
    let records = vec![record("Stint", ymd(2015, 3, 10), Some(ymd(2016, 7, 1)))];
    let result = layout(&records, at(2024, 1, 1));

    let span = result.span.unwrap();
    assert_eq!(span.min, at(2014, 3, 10));
    assert_eq!(span.max, at(2017, 7, 1));

    let years: Vec<i32> = result.year_markers.iter().map(|m| m.year).collect();
    assert_eq!(years, vec![2015, 2016, 2017]);
    for pair in result.year_markers.windows(2) {
        assert!(pair[0].position > pair[1].position);
    }
}

#[test]
fn layout_is_idempotent_for_same_input_and_now() {
    let records = vec![
        record("One", ymd(2012, 2, 1), Some(ymd(2016, 8, 1))),
        record("Two", ymd(2014, 9, 1), None),
        record("Three", ymd(2005, 1, 1), Some(ymd(2008, 1, 1))),
    ];
    let now = at(2024, 6, 30);

    assert_eq!(layout(&records, now), layout(&records, now));
}

#[test]
fn different_now_only_moves_ongoing_records() {
    let records = vec![
        record("Closed", ymd(2012, 2, 1), Some(ymd(2016, 8, 1))),
        record("Open", ymd(2014, 9, 1), None),
    ];
    let earlier = layout(&records, at(2020, 1, 1));
    let later = layout(&records, at(2022, 1, 1));

    assert_eq!(earlier.blocks[0].end, later.blocks[0].end);
    assert_eq!(earlier.blocks[1].end, at(2020, 1, 1));
    assert_eq!(later.blocks[1].end, at(2022, 1, 1));
}

#[test]
fn reversed_range_is_laid_out_permissively() {
    let records = vec![record("Backwards", ymd(2022, 1, 1), Some(ymd(2020, 1, 1)))];
    let result = layout(&records, at(2024, 1, 1));

    assert_eq!(result.span.unwrap().min, at(2019, 1, 1));
    assert_eq!(result.span.unwrap().max, at(2023, 1, 1));

    // Span 2019-01-01..2023-01-01 is 1461 days. The block is drawn from the
    // newer date (start, 365 days below the top) down to the older end date
    // (1096 days below the top), so its height is the full distance.
    let block = &result.blocks[0];
    assert_close(block.top, 365.0 / 1461.0 * 600.0);
    assert_close(block.height, 731.0 / 1461.0 * 600.0);
    assert_close(block.bottom(), 1096.0 / 1461.0 * 600.0);
}

#[test]
fn zero_span_without_padding_pins_blocks_to_top() {
    let records = vec![record("Instant", ymd(2020, 1, 1), Some(ymd(2020, 1, 1)))];
    let config = LayoutConfig {
        year_padding: 0,
        ..LayoutConfig::default()
    };
    let result = compute_timeline(&records, at(2024, 1, 1), &config);

    let block = &result.blocks[0];
    assert_eq!(block.top, 0.0);
    assert_eq!(block.height, 20.0);
    assert_eq!(result.year_markers.len(), 1);
    assert_eq!(result.year_markers[0].year, 2020);
    assert_eq!(result.year_markers[0].position, 0.0);
}
