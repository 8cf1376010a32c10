use crate::domain::model::{DirectoryStats, HasLikes, HasViews};

/// Sum of view counts, missing counts as zero. Saturates instead of overflowing.
pub fn total_views<T: HasViews>(items: &[T]) -> i64 {
    items
        .iter()
        .map(|item| item.views().unwrap_or(0))
        .fold(0i64, |acc, views| acc.saturating_add(views))
}

/// Sum of like-list lengths. Duplicate ids within one list are counted.
pub fn total_likes<T: HasLikes>(items: &[T]) -> usize {
    items
        .iter()
        .map(|item| item.likes().map_or(0, <[String]>::len))
        .sum()
}

/// The item with the most views; the first one wins a tie.
pub fn top_by_views<T: HasViews>(items: &[T]) -> Option<&T> {
    let mut iter = items.iter();
    let mut top = iter.next()?;

    for item in iter {
        if item.views().unwrap_or(0) > top.views().unwrap_or(0) {
            top = item;
        }
    }

    Some(top)
}

pub fn summarize<T: HasViews + HasLikes + Clone>(items: &[T]) -> DirectoryStats<T> {
    DirectoryStats {
        total_startups: items.len(),
        total_views: total_views(items),
        total_likes: total_likes(items),
        top_startup: top_by_views(items).cloned(),
    }
}
