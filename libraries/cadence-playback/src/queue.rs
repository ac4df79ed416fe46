//! Queue preview
//!
//! Read-only look at the tracks that follow the cursor. The preview always
//! walks the playlist in sequential order, whether or not shuffle is on.

use cadence_core::Track;

/// Default number of upcoming tracks shown
pub const DEFAULT_PREVIEW_SIZE: usize = 5;

/// Up to `n` tracks following `cursor`, wrapping around the end
///
/// The current index is never included and no track appears twice, so the
/// result holds `min(n, len - 1)` tracks. An absent cursor counts as index 0.
///
/// ```text
/// tracks = [A, B, C, D], cursor = 2, n = 5  =>  [D, A, B]
/// ```
pub fn preview(tracks: &[Track], cursor: Option<usize>, n: usize) -> Vec<Track> {
    let len = tracks.len();
    if len <= 1 {
        return Vec::new();
    }

    let current = cursor.unwrap_or(0) % len;
    (1..len)
        .take(n)
        .map(|offset| tracks[(current + offset) % len].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracks(ids: &[&str]) -> Vec<Track> {
        ids.iter().map(|id| Track::new(*id, *id)).collect()
    }

    fn ids(preview: &[Track]) -> Vec<&str> {
        preview.iter().map(|t| t.id().as_str()).collect()
    }

    #[test]
    fn empty_and_single_track_have_no_preview() {
        assert!(preview(&[], Some(0), 5).is_empty());
        assert!(preview(&tracks(&["a"]), Some(0), 5).is_empty());
    }

    #[test]
    fn short_playlist_returns_every_other_track() {
        let list = tracks(&["a", "b", "c"]);
        let upcoming = preview(&list, Some(0), 5);
        assert_eq!(ids(&upcoming), vec!["b", "c"]);
    }

    #[test]
    fn wraps_around_end() {
        let list = tracks(&["a", "b", "c", "d"]);
        let upcoming = preview(&list, Some(2), 5);
        assert_eq!(ids(&upcoming), vec!["d", "a", "b"]);
    }

    #[test]
    fn limits_to_n() {
        let list = tracks(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        let upcoming = preview(&list, Some(6), 5);
        assert_eq!(ids(&upcoming), vec!["h", "a", "b", "c", "d"]);
    }

    #[test]
    fn absent_cursor_counts_as_first_track() {
        let list = tracks(&["a", "b", "c"]);
        let upcoming = preview(&list, None, 5);
        assert_eq!(ids(&upcoming), vec!["b", "c"]);
    }

    #[test]
    fn zero_n_is_empty() {
        let list = tracks(&["a", "b", "c"]);
        assert!(preview(&list, Some(0), 0).is_empty());
    }
}
