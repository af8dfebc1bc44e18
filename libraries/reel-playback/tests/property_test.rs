//! Property-based tests for the playback manager
//!
//! Uses proptest to verify invariants across many random operation
//! sequences: the player and the library must stay coherent no matter
//! what a user throws at them.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reel_core::types::{Video, VideoId};
use reel_library::VideoLibrary;
use reel_playback::{PlaybackManager, PlaybackState};
use std::collections::HashSet;

// ===== Helpers =====

/// Ids the generated operations draw from; ops may reference ids the
/// generated catalog does not contain, exercising the rejection paths
const ID_POOL: &[&str] = &["video0", "video1", "video2", "video3", "video4", "video5"];

const PLAYLIST_POOL: &[&str] = &["alpha", "Beta", "GAMMA"];

#[derive(Debug, Clone)]
enum Op {
    Play(usize),
    PlayRandom(u64),
    Stop,
    Pause,
    Resume,
    Flag(usize),
    Unflag(usize),
    CreatePlaylist(usize),
    DeletePlaylist(usize),
    AddToPlaylist(usize, usize),
    RemoveFromPlaylist(usize, usize),
    ClearPlaylist(usize),
}

fn arbitrary_catalog() -> impl Strategy<Value = Vec<Video>> {
    prop::collection::vec(any::<bool>(), ID_POOL.len()).prop_map(|included| {
        ID_POOL
            .iter()
            .zip(included)
            .filter(|(_, include)| *include)
            .map(|(id, _)| Video::new(VideoId::new(*id), format!("Title {id}"), vec![]))
            .collect()
    })
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    let video = 0..ID_POOL.len();
    let playlist = 0..PLAYLIST_POOL.len();

    let playback = prop_oneof![
        video.clone().prop_map(Op::Play),
        any::<u64>().prop_map(Op::PlayRandom),
        Just(Op::Stop),
        Just(Op::Pause),
        Just(Op::Resume),
        video.clone().prop_map(Op::Flag),
        video.clone().prop_map(Op::Unflag),
    ];
    let playlists = prop_oneof![
        playlist.clone().prop_map(Op::CreatePlaylist),
        playlist.clone().prop_map(Op::DeletePlaylist),
        (playlist.clone(), video.clone()).prop_map(|(p, v)| Op::AddToPlaylist(p, v)),
        (playlist.clone(), video).prop_map(|(p, v)| Op::RemoveFromPlaylist(p, v)),
        playlist.prop_map(Op::ClearPlaylist),
    ];
    prop_oneof![playback, playlists]
}

fn arbitrary_ops() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(arbitrary_op(), 1..40)
}

/// Apply one operation, ignoring rejections; rejections are valid
/// outcomes whose only requirement is not breaking the invariants
fn apply(op: &Op, manager: &mut PlaybackManager, library: &mut VideoLibrary) {
    match op {
        Op::Play(v) => {
            manager.play(library, &VideoId::new(ID_POOL[*v])).ok();
        }
        Op::PlayRandom(seed) => {
            let mut rng = StdRng::seed_from_u64(*seed);
            manager.play_random_with(library, &mut rng).ok();
        }
        Op::Stop => {
            manager.stop().ok();
        }
        Op::Pause => {
            manager.pause().ok();
        }
        Op::Resume => {
            manager.resume().ok();
        }
        Op::Flag(v) => {
            manager
                .flag(library, &VideoId::new(ID_POOL[*v]), Some("reason"))
                .ok();
        }
        Op::Unflag(v) => {
            manager.unflag(library, &VideoId::new(ID_POOL[*v])).ok();
        }
        Op::CreatePlaylist(p) => {
            library.create_playlist(PLAYLIST_POOL[*p]).ok();
        }
        Op::DeletePlaylist(p) => {
            library.delete_playlist(PLAYLIST_POOL[*p]).ok();
        }
        Op::AddToPlaylist(p, v) => {
            library
                .add_to_playlist(PLAYLIST_POOL[*p], &VideoId::new(ID_POOL[*v]))
                .ok();
        }
        Op::RemoveFromPlaylist(p, v) => {
            library
                .remove_from_playlist(PLAYLIST_POOL[*p], &VideoId::new(ID_POOL[*v]))
                .ok();
        }
        Op::ClearPlaylist(p) => {
            library.clear_playlist(PLAYLIST_POOL[*p]).ok();
        }
    }
}

fn check_invariants(
    manager: &PlaybackManager,
    library: &VideoLibrary,
) -> Result<(), TestCaseError> {
    // Stopped exactly when nothing is loaded
    prop_assert_eq!(
        manager.state() == PlaybackState::Stopped,
        manager.current_video().is_none(),
        "state and current video disagree"
    );

    // The loaded video always exists in the catalog and is never flagged
    if let Some(current) = manager.current_video() {
        let in_library = library.video(&current.id);
        prop_assert!(in_library.is_some(), "loaded video missing from catalog");
        prop_assert!(
            !in_library.is_some_and(Video::is_flagged),
            "a flagged video stayed loaded"
        );
    }

    // Playlist members are unique and all resolve to catalog entries
    for playlist in library.playlists() {
        let unique: HashSet<_> = playlist.videos().iter().collect();
        prop_assert_eq!(unique.len(), playlist.len(), "duplicate playlist member");
        for member in playlist.videos() {
            prop_assert!(
                library.video(member).is_some(),
                "playlist member missing from catalog"
            );
        }
    }

    Ok(())
}

// ===== Property Tests =====

proptest! {
    /// Property: no operation sequence can break the player/library
    /// coherence invariants
    #[test]
    fn invariants_hold_under_arbitrary_operations(
        catalog in arbitrary_catalog(),
        ops in arbitrary_ops()
    ) {
        let mut library = VideoLibrary::from_videos(catalog);
        let mut manager = PlaybackManager::new();

        for op in &ops {
            apply(op, &mut manager, &mut library);
            check_invariants(&manager, &library)?;
        }
    }

    /// Property: random play only ever lands on unflagged videos, for
    /// any catalog, flag subset, and RNG seed
    #[test]
    fn random_play_selects_only_unflagged(
        catalog in arbitrary_catalog(),
        flagged in prop::collection::vec(any::<bool>(), ID_POOL.len()),
        seed in any::<u64>()
    ) {
        let mut library = VideoLibrary::from_videos(catalog);
        let mut manager = PlaybackManager::new();

        for (id, flag) in ID_POOL.iter().zip(flagged) {
            if flag {
                manager.flag(&mut library, &VideoId::new(*id), None).ok();
            }
        }
        manager.drain_events();

        let mut rng = StdRng::seed_from_u64(seed);
        manager.play_random_with(&library, &mut rng).unwrap();

        match manager.current_video() {
            Some(current) => {
                prop_assert!(!library.video(&current.id).is_some_and(Video::is_flagged));
            }
            None => {
                // Nothing playable: the signal event is the whole outcome
                let playable = library.videos().iter().any(|video| !video.is_flagged());
                prop_assert!(!playable, "playable videos existed but none was chosen");
            }
        }
    }

    /// Property: draining twice never yields events twice
    #[test]
    fn drained_events_are_gone(
        catalog in arbitrary_catalog(),
        ops in arbitrary_ops()
    ) {
        let mut library = VideoLibrary::from_videos(catalog);
        let mut manager = PlaybackManager::new();

        for op in &ops {
            apply(op, &mut manager, &mut library);
        }

        manager.drain_events();
        prop_assert!(manager.drain_events().is_empty());
        prop_assert!(!manager.has_pending_events());
    }
}
