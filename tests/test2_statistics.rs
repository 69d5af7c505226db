use serde_json::json;

use fairway_site::controller::profile::statistics::extract_statistics;
use fairway_site::model::scalar::Scalar;

mod common;

#[test]
fn fixture_summary_and_entries() {
    let doc = common::profile_doc();
    let stats = extract_statistics(&doc);

    let summary = stats.summary.expect("fixture has headline rows");
    assert_eq!(summary.tournament_wins, Some(3.0));
    assert_eq!(summary.tournament_top_ten_finishes, Some(12.0));
    assert_eq!(summary.total_number_of_birdies, Some(214.0));
    assert_eq!(summary.driving_distance, Some(252.4));
    assert_eq!(
        summary.biggest_comeback_margin,
        Some(Scalar::Text("Playoff".to_string()))
    );

    let descriptions = common::descriptions(&stats.entries);
    // The LPGA row, the blank description and the n/a row are gone.
    assert!(!descriptions.contains(&""));
    assert!(!descriptions.contains(&"Rounds Under Par"));
    assert_eq!(
        descriptions.iter().filter(|d| **d == "Scoring Average").count(),
        1
    );
}

#[test]
fn rows_tagged_for_another_tour_are_skipped() {
    let doc = json!({
        "STATISTICS": {
            "STATISTIC": [
                { "DESCRIPTION": "Tournament Wins", "VALUE": "12", "TOUR": "LET" },
                { "DESCRIPTION": "Tournament Wins", "VALUE": "99", "TOUR": "LPGA" }
            ]
        }
    });
    let stats = extract_statistics(&doc);
    assert_eq!(stats.summary.unwrap().tournament_wins, Some(12.0));
    assert_eq!(stats.entries.len(), 1);
}

#[test]
fn untagged_rows_count_as_ours() {
    let doc = json!({
        "STATISTICS": {
            "STATISTIC": [
                { "DESCRIPTION": "Tournament Wins", "VALUE": "4" }
            ]
        }
    });
    let stats = extract_statistics(&doc);
    assert_eq!(stats.summary.unwrap().tournament_wins, Some(4.0));
}

#[test]
fn single_statistic_object_is_treated_as_a_list() {
    let doc = json!({
        "Statistics": {
            "Statistic": { "DESCRIPTION": "Tournament Wins", "VALUE": "2" }
        }
    });
    let stats = extract_statistics(&doc);
    assert_eq!(stats.summary.unwrap().tournament_wins, Some(2.0));
    assert_eq!(stats.entries.len(), 1);
}

#[test]
fn flat_statistics_array_is_accepted() {
    let doc = json!({
        "statistics": [
            { "DESCRIPTION": "Scoring Average", "VALUE": "70.5" }
        ]
    });
    let stats = extract_statistics(&doc);
    assert_eq!(stats.entries.len(), 1);
    assert_eq!(
        stats.entries[0].value,
        Some(Scalar::Number(70.5))
    );
}

#[test]
fn rows_without_description_or_figures_are_dropped() {
    let doc = json!({
        "STATISTICS": {
            "STATISTIC": [
                { "DESCRIPTION": "", "VALUE": "10" },
                { "DESCRIPTION": "Cuts Made", "VALUE": "" },
                { "DESCRIPTION": "Rounds Played", "PLAYED": "120" }
            ]
        }
    });
    let stats = extract_statistics(&doc);
    assert_eq!(common::descriptions(&stats.entries), vec!["Rounds Played"]);
    assert_eq!(stats.entries[0].played, Some(120.0));
}

#[test]
fn summary_exists_once_any_label_matched_even_without_a_number() {
    let doc = json!({
        "STATISTICS": {
            "STATISTIC": [
                { "DESCRIPTION": "TOURNAMENT WINS", "VALUE": "", "PLAYED": "7" }
            ]
        }
    });
    let stats = extract_statistics(&doc);
    let summary = stats.summary.expect("label matched");
    assert_eq!(summary.tournament_wins, None);
}

#[test]
fn driving_distance_falls_back_to_the_code() {
    let doc = json!({
        "STATISTICS": {
            "STATISTIC": [
                { "DESCRIPTION": "Tournament Wins", "VALUE": "1", "TOUR": "LET" },
                { "DESCRIPTION": "Avg Drive", "VALUE": "250 yds", "CODE": "S155", "TOUR": "LET" }
            ]
        }
    });
    let stats = extract_statistics(&doc);
    assert_eq!(stats.summary.unwrap().driving_distance, Some(250.0));
}

#[test]
fn code_fallback_alone_creates_the_summary() {
    let doc = json!({
        "STATISTICS": {
            "STATISTIC": [
                { "DESCRIPTION": "Avg Drive", "VALUE": "248", "CODE": "S155" }
            ]
        }
    });
    let stats = extract_statistics(&doc);
    let summary = stats.summary.expect("fallback fills an empty summary");
    assert_eq!(summary.driving_distance, Some(248.0));
    assert_eq!(summary.tournament_wins, None);
}

#[test]
fn cross_tour_code_row_never_feeds_the_fallback() {
    let doc = json!({
        "STATISTICS": {
            "STATISTIC": [
                { "DESCRIPTION": "Tournament Wins", "VALUE": "1", "TOUR": "LET" },
                { "DESCRIPTION": "Avg Drive", "VALUE": "280", "CODE": "S155", "TOUR": "LPGA" }
            ]
        }
    });
    let stats = extract_statistics(&doc);
    assert_eq!(stats.summary.unwrap().driving_distance, None);
}

#[test]
fn legacy_root_level_labels_are_recognized() {
    let doc = json!({
        "Tournament Wins": "5",
        "Driving Distance": "251.3",
        "Biggest Comeback Margin": "Final hole"
    });
    let stats = extract_statistics(&doc);
    let summary = stats.summary.expect("legacy labels present");
    assert_eq!(summary.tournament_wins, Some(5.0));
    assert_eq!(summary.driving_distance, Some(251.3));
    assert_eq!(
        summary.biggest_comeback_margin,
        Some(Scalar::Text("Final hole".to_string()))
    );
}

#[test]
fn deep_scan_harvests_entries_from_nested_arrays() {
    let doc = json!({
        "PROFILE": {
            "SECTIONS": [
                { "ROWS": [
                    { "DESCRIPTION": "Scoring Average", "VALUE": "71.2" }
                ]}
            ]
        }
    });
    let stats = extract_statistics(&doc);
    assert_eq!(common::descriptions(&stats.entries), vec!["Scoring Average"]);
    assert!(stats.summary.is_none());
}

#[test]
fn empty_document_yields_empty_result() {
    let stats = extract_statistics(&json!({}));
    assert!(stats.summary.is_none());
    assert!(stats.entries.is_empty());
}
