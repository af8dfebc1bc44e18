//! Integration tests for the playback manager
//!
//! These tests verify whole playback scenarios and workflows against a
//! real library, including moderation and the event stream the shell
//! renders from.

use reel_core::types::{Video, VideoId};
use reel_library::VideoLibrary;
use reel_playback::{PlaybackError, PlaybackEvent, PlaybackManager, PlaybackState};

// ===== Test Helpers =====

fn create_test_video(id: &str, title: &str, tags: &[&str]) -> Video {
    Video::new(
        VideoId::new(id),
        title,
        tags.iter().map(ToString::to_string).collect(),
    )
}

fn create_test_library() -> VideoLibrary {
    VideoLibrary::from_videos(vec![
        create_test_video("funny_dogs_video_id", "Funny Dogs", &["#dog", "#animal"]),
        create_test_video("amazing_cats_video_id", "Amazing Cats", &["#cat", "#animal"]),
        create_test_video("nothing_video_id", "Video about nothing", &[]),
    ])
}

// ===== Integration Tests =====

#[test]
fn test_play_pause_resume_workflow() {
    let library = create_test_library();
    let mut manager = PlaybackManager::new();
    let id = VideoId::new("amazing_cats_video_id");

    // Start in stopped state
    assert_eq!(manager.state(), PlaybackState::Stopped);
    assert!(manager.current_video().is_none());

    // Play
    manager.play(&library, &id).unwrap();
    assert_eq!(manager.state(), PlaybackState::Playing);

    // Pause
    manager.pause().unwrap();
    assert_eq!(manager.state(), PlaybackState::Paused);
    assert_eq!(manager.current_video().unwrap().title, "Amazing Cats");

    // Resume
    manager.resume().unwrap();
    assert_eq!(manager.state(), PlaybackState::Playing);

    // Stop clears the video
    manager.stop().unwrap();
    assert_eq!(manager.state(), PlaybackState::Stopped);
    assert!(manager.current_video().is_none());

    let events = manager.drain_events();
    assert_eq!(
        events,
        vec![
            PlaybackEvent::Started {
                title: "Amazing Cats".to_string()
            },
            PlaybackEvent::Paused {
                title: "Amazing Cats".to_string()
            },
            PlaybackEvent::Resumed {
                title: "Amazing Cats".to_string()
            },
            PlaybackEvent::Stopped {
                title: "Amazing Cats".to_string()
            },
        ]
    );
}

#[test]
fn test_pause_resume_survive_across_replacement() {
    let library = create_test_library();
    let mut manager = PlaybackManager::new();

    // Pause the first video, then play another on top of it
    manager
        .play(&library, &VideoId::new("funny_dogs_video_id"))
        .unwrap();
    manager.pause().unwrap();
    manager
        .play(&library, &VideoId::new("amazing_cats_video_id"))
        .unwrap();

    // The replacement starts fresh: playing, not paused
    assert_eq!(manager.state(), PlaybackState::Playing);
    let err = manager.resume().unwrap_err();
    assert!(matches!(err, PlaybackError::NotPaused));
}

#[test]
fn test_replacement_event_order() {
    let library = create_test_library();
    let mut manager = PlaybackManager::new();

    manager
        .play(&library, &VideoId::new("funny_dogs_video_id"))
        .unwrap();
    manager.drain_events();
    manager
        .play(&library, &VideoId::new("amazing_cats_video_id"))
        .unwrap();

    // The old video stops before the new one starts
    assert_eq!(
        manager.drain_events(),
        vec![
            PlaybackEvent::StoppedPrevious {
                title: "Funny Dogs".to_string()
            },
            PlaybackEvent::Started {
                title: "Amazing Cats".to_string()
            },
        ]
    );
}

#[test]
fn test_invalid_requests_leave_no_trace() {
    let library = create_test_library();
    let mut manager = PlaybackManager::new();

    // Nothing loaded: stop, pause, and resume are all rejected
    assert!(matches!(
        manager.stop().unwrap_err(),
        PlaybackError::NothingPlaying
    ));
    assert!(matches!(
        manager.pause().unwrap_err(),
        PlaybackError::NothingPlaying
    ));
    assert!(matches!(
        manager.resume().unwrap_err(),
        PlaybackError::NothingPlaying
    ));

    // Unknown video
    assert!(matches!(
        manager.play(&library, &VideoId::new("missing")).unwrap_err(),
        PlaybackError::VideoNotFound(_)
    ));

    // Rejected requests queue no events
    assert!(!manager.has_pending_events());
    assert_eq!(manager.state(), PlaybackState::Stopped);
}

#[test]
fn test_flag_workflow_blocks_and_unflag_restores() {
    let mut library = create_test_library();
    let mut manager = PlaybackManager::new();
    let id = VideoId::new("amazing_cats_video_id");

    // Flag while it is playing: playback stops, then the flag lands
    manager.play(&library, &id).unwrap();
    manager.drain_events();
    manager
        .flag(&mut library, &id, Some("dont_like_cats"))
        .unwrap();

    assert_eq!(manager.state(), PlaybackState::Stopped);
    assert_eq!(
        manager.drain_events(),
        vec![
            PlaybackEvent::Stopped {
                title: "Amazing Cats".to_string()
            },
            PlaybackEvent::Flagged {
                title: "Amazing Cats".to_string(),
                reason: "dont_like_cats".to_string(),
            },
        ]
    );

    // While flagged, the video cannot be played
    assert!(matches!(
        manager.play(&library, &id).unwrap_err(),
        PlaybackError::VideoFlagged(_)
    ));

    // Unflagging makes it playable again
    manager.unflag(&mut library, &id).unwrap();
    manager.play(&library, &id).unwrap();
    assert_eq!(manager.state(), PlaybackState::Playing);
}

#[test]
fn test_flag_blocks_playlist_addition_until_unflagged() {
    let mut library = create_test_library();
    let mut manager = PlaybackManager::new();
    let id = VideoId::new("amazing_cats_video_id");
    library.create_playlist("watch_later").unwrap();

    manager.flag(&mut library, &id, None).unwrap();
    let err = library.add_to_playlist("watch_later", &id).unwrap_err();
    assert!(matches!(
        err,
        reel_library::LibraryError::VideoFlagged(_)
    ));

    manager.unflag(&mut library, &id).unwrap();
    library.add_to_playlist("watch_later", &id).unwrap();
    assert_eq!(library.playlist("watch_later").unwrap().len(), 1);
}

#[test]
fn test_random_play_always_picks_a_playable_video() {
    let mut library = create_test_library();
    let mut manager = PlaybackManager::new();
    manager
        .flag(&mut library, &VideoId::new("funny_dogs_video_id"), None)
        .unwrap();
    manager.drain_events();

    for _ in 0..50 {
        manager.play_random(&library).unwrap();
        let current = manager.current_video().unwrap();
        assert!(
            !library.video(&current.id).unwrap().is_flagged(),
            "random play selected a flagged video: {}",
            current.title
        );
    }
}

#[test]
fn test_random_play_replaces_the_current_video() {
    let library = create_test_library();
    let mut manager = PlaybackManager::new();

    manager
        .play(&library, &VideoId::new("nothing_video_id"))
        .unwrap();
    manager.drain_events();
    manager.play_random(&library).unwrap();

    // Whatever was picked, the old video reported a full stop first
    let events = manager.drain_events();
    assert!(matches!(
        &events[0],
        PlaybackEvent::Stopped { title } if title == "Video about nothing"
    ));
    assert!(matches!(&events[1], PlaybackEvent::Started { .. }));
    assert_eq!(manager.state(), PlaybackState::Playing);
}

#[test]
fn test_flag_then_pause_is_rejected() {
    let mut library = create_test_library();
    let mut manager = PlaybackManager::new();
    let id = VideoId::new("amazing_cats_video_id");

    manager.play(&library, &id).unwrap();
    manager.flag(&mut library, &id, None).unwrap();

    // The forced stop unloaded the video, so pause now has no target
    assert!(matches!(
        manager.pause().unwrap_err(),
        PlaybackError::NothingPlaying
    ));
}
