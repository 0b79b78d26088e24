//! Integration tests for snapshot ingestion from the data layer's JSON shapes.

use bracket_engine::{MatchStatus, SnapshotError, Tournament, TournamentFormat};

const SNAPSHOT: &str = r#"{
    "id": "7f1c6a52-7a0e-4b8e-9a51-2f3d2c5e9b10",
    "name": "Autumn Open",
    "format": "single_elimination",
    "teams": [
        { "id": 1, "name": "Falcons", "logoUrl": "https://img/falcons.png" },
        { "id": 2, "name": "Wolves" }
    ],
    "matches": [
        {
            "id": 100, "round": 1, "matchNumber": 1,
            "team1Id": 1, "team2Id": 2,
            "team1Score": 13, "team2Score": 9,
            "winnerId": 1, "status": "completed",
            "scheduledTime": "2026-10-01T18:00:00Z"
        },
        { "id": 101, "round": 2, "team1Id": 1, "team2Id": null, "status": "in_progress" },
        { "id": 102, "round": 2, "matchNumber": 2 }
    ]
}"#;

#[test]
fn parses_data_layer_shapes() {
    let t = Tournament::from_json(SNAPSHOT).unwrap();
    assert_eq!(t.name, "Autumn Open");
    assert_eq!(t.format, TournamentFormat::SingleElimination);
    assert_eq!(t.teams[0].logo_url.as_deref(), Some("https://img/falcons.png"));
    assert_eq!(t.teams[1].logo_url, None);

    let first = &t.matches[0];
    assert_eq!(first.winner_id, Some(1));
    assert_eq!(first.team1_score, Some(13.0));
    assert!(first.scheduled_time.is_some());
    assert_eq!(first.loser_id(), Some(2));

    let second = &t.matches[1];
    assert_eq!(second.match_number, None);
    assert_eq!(second.team2_id, None);
    assert_eq!(second.status, MatchStatus::InProgress);
    assert_eq!(t.matches[2].status, MatchStatus::Scheduled);
    assert_eq!(second.status.label(), "In Progress");
    assert!(!second.is_decided());
}

#[test]
fn snapshot_builds_bracket() {
    let t = Tournament::from_json(SNAPSHOT).unwrap();
    let rounds = t.bracket();
    assert_eq!(rounds.len(), 2);
    assert_eq!(rounds[1].name, "Finals");
    // absent match number sorts as 0, ahead of match number 2
    assert_eq!(rounds[1].matches[0].id(), 101);
    assert_eq!(rounds[1].matches[0].team2.name, "TBD");
    let link = rounds[0].matches[0].progression.unwrap();
    assert_eq!(link.next_match_id, 101);
    assert!((t.completion() - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn duplicate_match_ids_are_rejected() {
    let json = r#"{
        "id": "7f1c6a52-7a0e-4b8e-9a51-2f3d2c5e9b10",
        "name": "Dupes",
        "matches": [ { "id": 1, "round": 1 }, { "id": 1, "round": 2 } ]
    }"#;
    assert_eq!(
        Tournament::from_json(json),
        Err(SnapshotError::DuplicateMatchId(1))
    );
}

#[test]
fn malformed_json_is_reported() {
    let err = Tournament::from_json(r#"{ "name": 5 }"#).unwrap_err();
    assert!(matches!(err, SnapshotError::Malformed(_)));
    assert!(err.to_string().starts_with("Malformed tournament snapshot"));
}

#[test]
fn format_labels() {
    assert_eq!(TournamentFormat::Swiss.label(), "Swiss");
    assert!(TournamentFormat::SingleElimination.has_bracket_engine());
    assert!(!TournamentFormat::DoubleElimination.has_bracket_engine());
    assert!(!TournamentFormat::RoundRobin.has_bracket_engine());
}

#[test]
fn fractional_and_negative_scores_are_accepted() {
    let json = r#"{
        "id": "7f1c6a52-7a0e-4b8e-9a51-2f3d2c5e9b10",
        "name": "Decimal League",
        "matches": [
            { "id": 1, "round": 1, "team1Id": 1, "team2Id": 2,
              "team1Score": 2.5, "team2Score": -1, "winnerId": 1, "status": "completed" }
        ]
    }"#;
    let t = Tournament::from_json(json).unwrap();
    assert_eq!(t.matches[0].team1_score, Some(2.5));
    assert_eq!(t.matches[0].team2_score, Some(-1.0));
    assert_eq!(t.completion(), 100.0);
}

#[test]
fn logo_urls_serialize_as_null_when_absent() {
    let t = Tournament::from_json(SNAPSHOT).unwrap();
    let team = serde_json::to_value(&t.teams[1]).unwrap();
    assert!(team["logoUrl"].is_null());
    assert!(team.as_object().unwrap().contains_key("logoUrl"));

    let rounds = t.bracket();
    let slot = serde_json::to_value(&rounds[1].matches[0].team2).unwrap();
    assert!(slot.as_object().unwrap().contains_key("logoUrl"));
    assert!(slot["logoUrl"].is_null());
}
