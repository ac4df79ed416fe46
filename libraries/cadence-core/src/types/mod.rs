mod ids;
mod reference;
mod track;

pub use ids::TrackId;
pub use reference::{DownloadableReference, PlayableReference};
pub use track::{Track, PLACEHOLDER_THUMBNAIL, UNKNOWN_ARTIST};
