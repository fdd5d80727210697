//! Integration tests for schedule assembly, time projection, and rendering.

use chrono::{DateTime, Duration, TimeZone, Utc};
use match_display_web::{
    build_schedule, format_display_time, render_schedule_page, Match, MatchState, ScheduleEntry,
    StateFilter, Tournament, TournamentData,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 1, 21, 30, 0).unwrap()
}

fn tournament(id: u64, name: &str, matches: Vec<Match>) -> TournamentData {
    TournamentData {
        tournament: Tournament {
            id,
            name: name.to_string(),
            url: name.to_lowercase(),
            timezone: None,
        },
        matches,
    }
}

fn open_match(id: u64, tournament_id: u64, play_order: i64) -> Match {
    Match {
        id,
        tournament_id,
        state: MatchState::Open,
        player1_id: Some(id * 10 + 1),
        player2_id: Some(id * 10 + 2),
        player1_prereq_match_id: None,
        player2_prereq_match_id: None,
        player1_name: Some(format!("P{id}a")),
        player2_name: Some(format!("P{id}b")),
        suggested_play_order: Some(play_order),
        round: 2,
        updated_at: None,
        underway_at: None,
    }
}

fn build(tournaments: &[TournamentData], filter: StateFilter) -> Vec<ScheduleEntry> {
    build_schedule(
        tournaments,
        filter,
        now(),
        chrono_tz::UTC,
        Duration::minutes(1),
        Duration::minutes(3),
    )
}

#[test]
fn times_start_at_lead_and_step_by_delay() {
    let t = tournament(
        1,
        "T1",
        vec![open_match(11, 1, 1), open_match(12, 1, 2), open_match(13, 1, 3)],
    );
    let entries = build(&[t], StateFilter::Open);
    assert_eq!(entries.len(), 3);
    for (i, entry) in entries.iter().enumerate() {
        let projected = now() + Duration::minutes(1) + Duration::minutes(3) * i as i32;
        assert_eq!(entry.time, format_display_time(projected, chrono_tz::UTC));
    }
}

#[test]
fn display_time_is_twelve_hour_with_zone_abbreviation() {
    // 21:30 UTC on July 1st is 2:30 PM in Los Angeles (DST).
    let t = format_display_time(now(), chrono_tz::America::Los_Angeles);
    assert_eq!(t, "02:30 PM PDT");
    assert_eq!(format_display_time(now(), chrono_tz::UTC), "09:30 PM UTC");
}

#[test]
fn entries_carry_match_and_tournament_fields() {
    let m = Match {
        underway_at: Some(now()),
        ..open_match(11, 1, 4)
    };
    let t = tournament(1, "Sonoran Showdown", vec![m]);
    let entries = build(&[t], StateFilter::Open);

    let e = &entries[0];
    assert_eq!(e.id, 11);
    assert_eq!(e.player1, "P11a");
    assert_eq!(e.player2, "P11b");
    assert_eq!(e.tournament, "Sonoran Showdown");
    assert_eq!(e.status, MatchState::Open);
    assert_eq!(e.round, 2);
    assert_eq!(e.suggested_play_order, Some(4));
    assert_eq!(e.underway_at, Some(now()));
}

#[test]
fn unresolved_slots_render_as_placeholder() {
    let m = Match {
        player1_name: None,
        ..open_match(11, 1, 1)
    };
    let entries = build(&[tournament(1, "T1", vec![m])], StateFilter::Open);
    assert_eq!(entries[0].player1, "???");
    assert_eq!(entries[0].player2, "P11b");
}

#[test]
fn next_opponent_is_wired_into_open_entries_only() {
    let a = open_match(11, 1, 1);
    let successor = Match {
        state: MatchState::Pending,
        player1_id: None,
        player1_name: None,
        player1_prereq_match_id: Some(11),
        player2_name: Some("RoboCrusher".to_string()),
        suggested_play_order: Some(2),
        ..open_match(12, 1, 2)
    };
    let t = tournament(1, "T1", vec![a, successor]);
    let entries = build(&[t], StateFilter::All);

    let open_entry = entries.iter().find(|e| e.id == 11).unwrap();
    assert_eq!(open_entry.next_match_id, Some(12));
    assert_eq!(open_entry.next_opponent_label, "RoboCrusher");

    let pending_entry = entries.iter().find(|e| e.id == 12).unwrap();
    assert_eq!(pending_entry.next_match_id, None);
    assert_eq!(pending_entry.next_opponent_label, "");
}

#[test]
fn schedule_json_round_trips_field_names() {
    let entries = build(
        &[tournament(1, "T1", vec![open_match(11, 1, 1)])],
        StateFilter::Open,
    );
    let value = serde_json::to_value(&entries).unwrap();
    let first = &value[0];
    for key in [
        "id",
        "time",
        "player1",
        "player2",
        "tournament",
        "status",
        "next_match_id",
        "next_opponent_label",
        "round",
        "suggested_play_order",
        "underway_at",
    ] {
        assert!(first.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(first["status"], "open");
}

#[test]
fn rendered_page_lists_matches_and_refreshes() {
    let entries = build(
        &[tournament(1, "T1", vec![open_match(11, 1, 1)])],
        StateFilter::Open,
    );
    let html = render_schedule_page(&entries);
    assert!(html.contains("<meta http-equiv=\"refresh\" content=\"20\">"));
    assert!(html.contains("P11a vs P11b"));
    assert!(html.contains("(T1)"));
}

#[test]
fn rendered_page_escapes_upstream_names() {
    let m = Match {
        player1_name: Some("<script>alert(1)</script>".to_string()),
        player2_name: Some("Fish & Chips".to_string()),
        ..open_match(11, 1, 1)
    };
    let html = render_schedule_page(&build(&[tournament(1, "T1", vec![m])], StateFilter::Open));
    assert!(!html.contains("<script>alert"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("Fish &amp; Chips"));
}
