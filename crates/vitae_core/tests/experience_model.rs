use chrono::NaiveDate;
use uuid::Uuid;
use vitae_core::{Experience, ExperienceKind, ExperienceValidationError, Swatch};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn experience_new_sets_defaults() {
    let experience = Experience::new(ExperienceKind::Work, "Engineer", ymd(2020, 1, 1)).unwrap();

    assert!(!experience.id.is_nil());
    assert_eq!(experience.kind, ExperienceKind::Work);
    assert_eq!(experience.title, "Engineer");
    assert_eq!(experience.description, None);
    assert_eq!(experience.end_date, None);
    assert_eq!(experience.color, Swatch::Blue);
    assert!(experience.is_ongoing());
}

#[test]
fn experience_new_rejects_blank_title() {
    let err = Experience::new(ExperienceKind::Education, "   ", ymd(2018, 9, 1)).unwrap_err();
    assert_eq!(err, ExperienceValidationError::EmptyTitle);
}

#[test]
fn experience_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let experience = Experience::with_id(id, ExperienceKind::Education, "Degree", ymd(2018, 9, 1))
        .unwrap()
        .ending(Some(ymd(2022, 5, 1)))
        .described("Computer science")
        .colored(Swatch::Teal);

    let json = serde_json::to_value(&experience).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["type"], "education");
    assert_eq!(json["title"], "Degree");
    assert_eq!(json["description"], "Computer science");
    assert_eq!(json["start_date"], "2018-09-01");
    assert_eq!(json["end_date"], "2022-05-01");
    assert_eq!(json["color"], "bg-teal-500");

    let decoded: Experience = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, experience);
}

#[test]
fn deserialize_defaults_optional_fields() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "Freelance",
        "type": "work",
        "start_date": "2021-01-01"
    });

    let decoded: Experience = serde_json::from_value(value).unwrap();
    assert!(decoded.is_ongoing());
    assert_eq!(decoded.color, Swatch::Blue);
    assert_eq!(decoded.description, None);
}

#[test]
fn deserialize_rejects_empty_title() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "",
        "type": "work",
        "start_date": "2021-01-01",
        "end_date": null,
        "color": "bg-red-500"
    });

    let err = serde_json::from_value::<Experience>(value).unwrap_err();
    assert!(
        err.to_string()
            .contains("experience title must not be empty"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_unknown_color() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "Job",
        "type": "work",
        "start_date": "2021-01-01",
        "color": "bg-black-500"
    });

    assert!(serde_json::from_value::<Experience>(value).is_err());
}
