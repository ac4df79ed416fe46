//! Last-call-wins resolution
//!
//! A play request that is still resolving when a newer one is issued must
//! not touch the player once it completes, whether it succeeds or fails.

mod common;

use cadence_playback::{PlayOutcome, PlaybackState};
use common::{history_ids, reference_for, Harness};

#[tokio::test]
async fn stale_success_is_discarded() {
    let h = Harness::with_playlist(&["a", "b", "c"]).await;
    let release_a = h.resolver.gate("a");

    let first = tokio::spawn({
        let controller = h.controller.clone();
        async move { controller.play(0).await }
    });
    h.resolver.wait_for_calls(1).await;

    // Cursor moves as soon as the request is issued
    assert_eq!(h.controller.cursor().await, Some(0));

    let second = h.controller.play(1).await.unwrap();
    assert!(matches!(second, PlayOutcome::Started { .. }));

    release_a.send(()).unwrap();
    let first = first.await.unwrap().unwrap();

    assert_eq!(first, PlayOutcome::Superseded);
    assert_eq!(h.controller.cursor().await, Some(1));
    assert_eq!(
        h.controller.current_track().await.unwrap().id().as_str(),
        "b"
    );
    assert_eq!(history_ids(&h.controller.history().await), vec!["b"]);
    assert_eq!(h.output.loaded(), vec![reference_for("b")]);
}

#[tokio::test]
async fn stale_failure_does_not_roll_back() {
    let h = Harness::with_playlist(&["a", "b", "c"]).await;
    h.resolver.fail("a");
    let release_a = h.resolver.gate("a");

    let first = tokio::spawn({
        let controller = h.controller.clone();
        async move { controller.play(0).await }
    });
    h.resolver.wait_for_calls(1).await;

    h.controller.play(2).await.unwrap();

    release_a.send(()).unwrap();
    let first = first.await.unwrap();

    assert_eq!(first, Ok(PlayOutcome::Superseded));
    assert_eq!(h.controller.cursor().await, Some(2));
    assert_eq!(h.controller.state().await, PlaybackState::Playing);
}

#[tokio::test]
async fn failure_after_supersede_restores_original_cursor() {
    let h = Harness::with_playlist(&["a", "b", "c", "d"]).await;
    h.controller.play(3).await.unwrap();

    let release_a = h.resolver.gate("a");
    let first = tokio::spawn({
        let controller = h.controller.clone();
        async move { controller.play(0).await }
    });
    h.resolver.wait_for_calls(2).await;

    // The newer request fails; the cursor goes back to where it was before
    // either request was issued
    h.resolver.fail("b");
    assert!(h.controller.play(1).await.is_err());
    assert_eq!(h.controller.cursor().await, Some(3));

    release_a.send(()).unwrap();
    assert_eq!(first.await.unwrap(), Ok(PlayOutcome::Superseded));
    assert_eq!(h.controller.cursor().await, Some(3));
    assert_eq!(
        h.controller.current_track().await.unwrap().id().as_str(),
        "d"
    );
}

#[tokio::test]
async fn new_playlist_invalidates_pending_resolution() {
    let h = Harness::with_playlist(&["a", "b"]).await;
    let release_a = h.resolver.gate("a");

    let first = tokio::spawn({
        let controller = h.controller.clone();
        async move { controller.play(0).await }
    });
    h.resolver.wait_for_calls(1).await;

    h.controller
        .replace_playlist(common::tracks(&["x", "y", "z"]))
        .await;

    release_a.send(()).unwrap();
    assert_eq!(first.await.unwrap(), Ok(PlayOutcome::Superseded));
    assert_eq!(h.controller.cursor().await, None);
    assert_eq!(h.controller.state().await, PlaybackState::Idle);
    assert!(h.controller.current_track().await.is_none());
}
