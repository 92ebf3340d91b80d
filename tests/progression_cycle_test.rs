//! Integration test: a hunter's journey from E-Rank to S-Rank
//!
//! Tests the full flow: new profile → earn EXP → spend points → keep a streak

use chrono::NaiveDate;
use hunter::character::allocation::{allocate_stat, allocate_stat_by_name};
use hunter::character::rank::{rank_for_level, Rank};
use hunter::core::events::{apply_event, HunterEvent};
use hunter::core::experience::{apply_experience, exp_for_next_level};
use hunter::core::streak::update_streak;
use hunter::{HunterProfile, ProgressionError, StatType};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// EXP needed to go from a fresh level 1 profile to `target` level
fn total_exp_to_reach(target: u32) -> u64 {
    let mut total = 100; // level 1 -> 2 uses the starting threshold
    for level in 2..target {
        total += exp_for_next_level(level);
    }
    total
}

#[test]
fn test_rank_climb_from_e_to_s() {
    let mut profile = HunterProfile::new("Sung Jinwoo".to_string(), day(2025, 4, 18));
    let mut ranks_seen = vec![profile.rank];

    // Earn EXP in modest daily chunks, as quest rewards would arrive
    while profile.level < 20 {
        let (next, report) = apply_experience(&profile, 50).unwrap();
        if report.rank_changed() {
            ranks_seen.push(report.rank_after);
        }
        profile = next;
    }

    assert_eq!(profile.rank, Rank::S);
    assert_eq!(
        ranks_seen,
        vec![Rank::E, Rank::D, Rank::C, Rank::B, Rank::A, Rank::S],
        "Every rank should be passed through in order"
    );
    assert_eq!(profile.stat_points, (profile.level - 1) * 3);
}

#[test]
fn test_exact_exp_lands_on_level_boundary() {
    let profile = HunterProfile::new("Exact".to_string(), day(2025, 4, 18));
    let needed = total_exp_to_reach(10);

    let (at_ten, report) = apply_experience(&profile, needed as i64).unwrap();
    assert_eq!(at_ten.level, 10);
    assert_eq!(at_ten.exp, 0);
    assert_eq!(at_ten.rank, Rank::B);
    assert_eq!(report.levels_gained, 9);

    let (short, _) = apply_experience(&profile, needed as i64 - 1).unwrap();
    assert_eq!(short.level, 9);
    assert_eq!(short.exp, exp_for_next_level(9) - 1);
    assert_eq!(short.rank, Rank::C);
}

#[test]
fn test_single_award_equals_many_small_awards() {
    let start = HunterProfile::new("Split".to_string(), day(2025, 4, 18));

    let (lump, _) = apply_experience(&start, 5_000).unwrap();

    let mut chunked = start.clone();
    for _ in 0..100 {
        chunked = apply_experience(&chunked, 50).unwrap().0;
    }

    assert_eq!(lump, chunked);
}

#[test]
fn test_earned_points_can_all_be_spent() {
    let profile = HunterProfile::new("Spender".to_string(), day(2025, 4, 18));
    let (mut profile, report) = apply_experience(&profile, 400).unwrap();
    assert_eq!(profile.stat_points, report.stat_points_granted);
    let points = profile.stat_points;
    assert!(points > 0);

    let order = ["strength", "intelligence", "endurance", "charisma", "luck"];
    for i in 0..points as usize {
        profile = allocate_stat_by_name(&profile, order[i % order.len()]).unwrap();
    }

    assert_eq!(profile.stat_points, 0);
    assert_eq!(profile.stats.total(), 25 + points as u64);
    assert_eq!(
        allocate_stat(&profile, StatType::Luck),
        Err(ProgressionError::NoStatPointsAvailable)
    );
}

#[test]
fn test_streak_scenario() {
    let mut profile = HunterProfile::new("Streaker".to_string(), day(2025, 4, 1));
    profile.last_active_date = day(2025, 4, 18);
    profile.streak_days = 3;

    let (profile, _) = update_streak(&profile, day(2025, 4, 19));
    assert_eq!(profile.streak_days, 4);

    let (profile, change) = update_streak(&profile, day(2025, 4, 19));
    assert!(change.is_unchanged());
    assert_eq!(profile.streak_days, 4);

    let (profile, _) = update_streak(&profile, day(2025, 4, 25));
    assert_eq!(profile.streak_days, 1);
    assert_eq!(profile.last_active_date, day(2025, 4, 25));
}

#[test]
fn test_week_of_daily_check_ins() {
    let start = day(2025, 4, 18);
    let mut profile = HunterProfile::new("Daily".to_string(), start);

    for offset in 1..=7 {
        let today = start + chrono::Days::new(offset);
        profile = update_streak(&profile, today).0;
        // Checking in twice on the same day changes nothing
        profile = update_streak(&profile, today).0;
    }

    assert_eq!(profile.streak_days, 7);
    assert_eq!(profile.last_active_date, day(2025, 4, 25));
}

#[test]
fn test_event_sequence_through_dispatch() {
    let start = HunterProfile::new(String::new(), day(2025, 4, 18));

    let events = vec![
        HunterEvent::SetHunterName("Cha Hae-In".to_string()),
        HunterEvent::UpdateStreak(day(2025, 4, 19)),
        HunterEvent::AddExperience(250),
        HunterEvent::AllocateStat(StatType::Strength),
        HunterEvent::AllocateStat(StatType::Strength),
        HunterEvent::UpdateStreak(day(2025, 4, 20)),
    ];

    let mut profile = start;
    for event in events {
        profile = apply_event(&profile, event).unwrap().profile;
    }

    assert_eq!(profile.name, "Cha Hae-In");
    assert_eq!(profile.level, 3);
    assert_eq!(profile.rank, rank_for_level(3));
    assert_eq!(profile.stats.get(StatType::Strength), 7);
    assert_eq!(profile.stat_points, 4);
    assert_eq!(profile.streak_days, 2);
    assert!(profile.validate().is_ok());
}

#[test]
fn test_rejected_events_in_sequence_are_skipped() {
    let mut profile = HunterProfile::new("Careful".to_string(), day(2025, 4, 18));
    let mut rejected = Vec::new();

    let events = vec![
        HunterEvent::AllocateStat(StatType::Luck),
        HunterEvent::AddExperience(-10),
        HunterEvent::SetHunterName(" ".to_string()),
        HunterEvent::AddExperience(100),
        HunterEvent::AllocateStat(StatType::Luck),
    ];

    for event in events {
        match apply_event(&profile, event) {
            Ok(outcome) => profile = outcome.profile,
            Err(e) => rejected.push(e),
        }
    }

    assert_eq!(
        rejected,
        vec![
            ProgressionError::NoStatPointsAvailable,
            ProgressionError::InvalidAmount(-10),
            ProgressionError::InvalidName,
        ]
    );
    assert_eq!(profile.name, "Careful");
    assert_eq!(profile.level, 2);
    assert_eq!(profile.stats.get(StatType::Luck), 6);
    assert_eq!(profile.stat_points, 2);
}
