use crate::uploads::Video;

pub const DEFAULT_DISPLAY: usize = 5;

/// Keep the `n` most viewed videos, most viewed first.
///
/// The sort is stable, so equal view counts keep their listing order (newest first).
pub fn top_by_views(mut videos: Vec<Video>, n: usize) -> Vec<Video> {
    videos.sort_by(|a, b| b.view_count.cmp(&a.view_count));
    videos.truncate(n);
    videos
}
