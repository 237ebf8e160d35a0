use std::path::PathBuf;

use super::builder::target_name;
use super::matcher::{TrackMatcher, digits, number_width};
use super::*;

fn t(number: u32, title: &str, artists: &[&str]) -> TrackDescriptor {
    TrackDescriptor::new(
        number,
        Some(title.to_string()),
        artists.iter().map(|a| a.to_string()).collect(),
    )
}

fn unit(tracks: Vec<TrackDescriptor>, files: &[&str]) -> CollectionUnit {
    CollectionUnit {
        location: PathBuf::from("/music/Album"),
        tracks,
        pool: FilePool::new(files.iter().copied()),
    }
}

fn plan(tracks: Vec<TrackDescriptor>, files: &[&str]) -> UnitPlan {
    build_plan(unit(tracks, files), &PlanOptions::default())
}

/// Rename the pool the way executing every `Move` would.
fn apply_moves(files: &[&str], plan: &UnitPlan) -> Vec<String> {
    let mut out: Vec<String> = files.iter().map(|f| f.to_string()).collect();
    for entry in &plan.entries {
        if let PlanEntry::Move { from, to } = entry {
            out.retain(|f| f != from && f != to);
            out.push(to.clone());
        }
    }
    out
}

#[test]
fn exact_match_is_skipped() {
    let p = plan(vec![t(1, "Intro", &["DJ X"])], &["01 Intro [DJ X].wav"]);
    assert_eq!(
        p.entries,
        vec![PlanEntry::Skip {
            path: "01 Intro [DJ X].wav".into()
        }]
    );
    assert!(p.residual.is_empty());
    assert!(!p.count_mismatch());
}

#[test]
fn differing_name_is_moved() {
    let p = plan(vec![t(2, "Groove", &["A", "B"])], &["02 Untitled.wav"]);
    assert_eq!(
        p.entries,
        vec![PlanEntry::Move {
            from: "02 Untitled.wav".into(),
            to: "02 Groove [A, B].wav".into()
        }]
    );
    assert_eq!(p.moves(), 1);
}

#[test]
fn illegal_characters_in_target_are_replaced() {
    let p = plan(vec![t(3, "Rock:Roll?", &[])], &["03 Track 3.wav"]);
    assert_eq!(
        p.entries,
        vec![PlanEntry::Move {
            from: "03 Track 3.wav".into(),
            to: "03 Rock_Roll_ [].wav".into()
        }]
    );
}

#[test]
fn slash_in_artist_cannot_escape_the_folder() {
    let p = plan(vec![t(1, "Thunderstruck", &["AC/DC"])], &["01 x.wav"]);
    assert_eq!(
        p.entries,
        vec![PlanEntry::Move {
            from: "01 x.wav".into(),
            to: "01 Thunderstruck [AC_DC].wav".into()
        }]
    );
}

#[test]
fn unmatched_track_leaves_pool_unchanged() {
    let files = ["01 One.wav", "02 Two.wav"];
    let track = t(9, "Nine", &["N"]);
    let p = plan(vec![track.clone()], &files);
    assert_eq!(p.entries, vec![PlanEntry::Unmatched { track }]);
    assert_eq!(p.residual, vec!["01 One.wav".to_string(), "02 Two.wav".to_string()]);
}

#[test]
fn count_mismatch_is_reported_and_extra_tracks_are_unmatched() {
    let tracks = vec![t(1, "A", &["X"]), t(2, "B", &["X"]), t(3, "C", &["X"])];
    let p = plan(tracks, &["01 a.wav", "02 b.wav"]);
    assert!(p.count_mismatch());
    assert_eq!(p.file_count, 2);
    assert_eq!(p.track_count, 3);

    let consumed = p.entries.iter().filter(|e| e.source().is_some()).count();
    assert_eq!(consumed, 2);
    assert_eq!(p.unmatched().map(|tr| tr.number).collect::<Vec<_>>(), vec![3]);
}

#[test]
fn entries_follow_track_order_not_file_order() {
    let tracks = vec![t(3, "C", &[]), t(1, "A", &[]), t(2, "B", &[])];
    let p = plan(tracks, &["01 a.wav", "02 b.wav", "03 c.wav"]);
    let sources: Vec<&str> = p.entries.iter().filter_map(PlanEntry::source).collect();
    assert_eq!(sources, vec!["03 c.wav", "01 a.wav", "02 b.wav"]);
}

#[test]
fn each_file_is_consumed_at_most_once() {
    // The same track number twice in the metadata must not grab the same file twice.
    let tracks = vec![t(1, "A", &[]), t(1, "A again", &[]), t(2, "B", &[])];
    let p = plan(tracks, &["01 a.wav", "01 b.wav", "02 c.wav"]);

    let mut sources: Vec<&str> = p.entries.iter().filter_map(PlanEntry::source).collect();
    let total = sources.len();
    sources.sort();
    sources.dedup();
    assert_eq!(sources.len(), total);
    assert_eq!(p.entries[0].source(), Some("01 a.wav"));
    assert_eq!(p.entries[1].source(), Some("01 b.wav"));
}

#[test]
fn duplicate_prefix_uses_first_file_and_leaves_the_rest() {
    let p = plan(vec![t(1, "A", &[])], &["01 zz.wav", "01 aa.wav"]);
    assert_eq!(p.entries[0].source(), Some("01 aa.wav"));
    assert_eq!(p.residual, vec!["01 zz.wav".to_string()]);
}

#[test]
fn extension_is_case_insensitive_and_normalized() {
    let p = plan(vec![t(4, "Loud", &["Z"])], &["04 LOUD.WAV"]);
    assert_eq!(
        p.entries,
        vec![PlanEntry::Move {
            from: "04 LOUD.WAV".into(),
            to: "04 Loud [Z].wav".into()
        }]
    );
}

#[test]
fn prefix_requires_padding_space_and_a_name() {
    let track = t(1, "A", &[]);
    let m = TrackMatcher::new(2, vec!["wav".into()]);
    assert!(m.matches(&track, "01 x.wav"));
    assert!(m.matches(&track, "01 x.y.Wav"));
    assert!(!m.matches(&track, "1 x.wav"));
    assert!(!m.matches(&track, "01x.wav"));
    assert!(!m.matches(&track, "01 .wav"));
    assert!(!m.matches(&track, "01 x.flac"));
    assert!(!m.matches(&track, "011 x.wav"));
    assert!(!m.matches(&track, "01 x"));
}

#[test]
fn configured_extensions_are_all_recognized() {
    let options = PlanOptions {
        min_number_width: 2,
        extensions: vec!["wav".into(), "flac".into()],
    };
    let p = build_plan(
        unit(vec![t(1, "A", &[]), t(2, "B", &[])], &["01 a.FLAC", "02 b.wav"]),
        &options,
    );
    assert_eq!(
        p.entries,
        vec![
            PlanEntry::Move {
                from: "01 a.FLAC".into(),
                to: "01 A [].flac".into()
            },
            PlanEntry::Move {
                from: "02 b.wav".into(),
                to: "02 B [].wav".into()
            },
        ]
    );
}

#[test]
fn missing_title_uses_placeholder() {
    let track = TrackDescriptor::new(5, None, vec!["Solo".into()]);
    assert_eq!(track.title, UNKNOWN_TITLE);
    assert_eq!(target_name(&track, 2, "wav"), "05 Unknown Track [Solo].wav");
}

#[test]
fn number_width_widens_only_for_large_discs() {
    assert_eq!(digits(0), 1);
    assert_eq!(digits(9), 1);
    assert_eq!(digits(10), 2);
    assert_eq!(digits(100), 3);

    let small: Vec<_> = (1..=12).map(|n| t(n, "x", &[])).collect();
    assert_eq!(number_width(&small, 2), 2);
    let large: Vec<_> = (1..=120).map(|n| t(n, "x", &[])).collect();
    assert_eq!(number_width(&large, 2), 3);
    assert_eq!(number_width(&[], 2), 2);
}

#[test]
fn large_disc_matches_three_digit_prefixes() {
    let tracks: Vec<_> = (1..=100).map(|n| t(n, "x", &[])).collect();
    let p = plan(tracks, &["001 first.wav", "100 last.wav"]);
    assert_eq!(p.entries[0].source(), Some("001 first.wav"));
    assert_eq!(p.entries[99].source(), Some("100 last.wav"));
    assert_eq!(
        p.entries[99],
        PlanEntry::Move {
            from: "100 last.wav".into(),
            to: "100 x [].wav".into()
        }
    );
}

#[test]
fn planning_twice_gives_the_same_plan() {
    let tracks = vec![t(1, "A", &["X"]), t(2, "B", &["Y"])];
    let files = ["01 a.wav", "02 B [Y].wav", "07 stray.wav"];
    let first = plan(tracks.clone(), &files);
    let second = plan(tracks, &files);
    assert_eq!(first.entries, second.entries);
    assert_eq!(first.residual, second.residual);
}

#[test]
fn replanning_after_moves_only_skips() {
    let tracks = vec![
        t(1, "Intro", &["DJ X"]),
        t(2, "Rock:Roll?", &[]),
        t(3, "Groove", &["A", "B"]),
        t(4, "Missing", &["M"]),
    ];
    let files = ["01 Intro [DJ X].wav", "02 untitled.WAV", "03 whatever.wav", "09 extra.wav"];

    let first = plan(tracks.clone(), &files);
    assert!(first.moves() > 0);

    let renamed = apply_moves(&files, &first);
    let renamed: Vec<&str> = renamed.iter().map(String::as_str).collect();
    let second = plan(tracks, &renamed);

    assert_eq!(second.moves(), 0);
    assert!(second.entries.iter().all(|e| matches!(
        e,
        PlanEntry::Skip { .. } | PlanEntry::Unmatched { .. }
    )));
    assert_eq!(second.entries.len(), first.entries.len());
}

#[test]
fn file_pool_partition_keeps_snapshot_order() {
    let mut pool = FilePool::new(["c.wav", "a.wav", "b.wav", "a.wav"]);
    assert_eq!(pool.len(), 3);
    assert_eq!(pool.take_first(|n| n.starts_with('b')), Some("b.wav".to_string()));
    assert_eq!(pool.take_first(|n| n.starts_with('b')), None);
    assert!(!pool.contains_available("b.wav"));
    assert_eq!(pool.available().collect::<Vec<_>>(), vec!["a.wav", "c.wav"]);
    assert_eq!(pool.len(), 3);
    assert_eq!(
        pool.into_remaining(),
        vec!["a.wav".to_string(), "c.wav".to_string()]
    );
}
