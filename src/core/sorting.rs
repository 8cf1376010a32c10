use crate::core::dates::parse_timestamp;
use crate::domain::model::{HasCategory, HasCreatedAt, HasLikes, HasViews, SortKey};
use std::cmp::Reverse;

/// Return a sorted copy of `items`; the input is left untouched.
///
/// All orderings are stable. Timestamps that do not parse are kept after every
/// parseable one in both `Newest` and `Oldest` order.
pub fn sort<T>(items: &[T], key: SortKey) -> Vec<T>
where
    T: HasCreatedAt + HasViews + HasLikes + Clone,
{
    let mut sorted = items.to_vec();

    match key {
        SortKey::Newest => {
            sorted.sort_by_cached_key(|item| Reverse(parse_timestamp(item.created_at())));
        }
        SortKey::Oldest => {
            sorted.sort_by_cached_key(|item| match parse_timestamp(item.created_at()) {
                Some(dt) => (false, Some(dt)),
                None => (true, None),
            });
        }
        SortKey::MostViewed => {
            sorted.sort_by_key(|item| Reverse(item.views().unwrap_or(0)));
        }
        SortKey::MostLiked => {
            sorted.sort_by_key(|item| Reverse(item.likes().map_or(0, <[String]>::len)));
        }
    }

    sorted
}

/// Sort by a key given as text, e.g. a query parameter. Unrecognised names
/// return the items in their original order.
pub fn sort_by_name<T>(items: &[T], key: &str) -> Vec<T>
where
    T: HasCreatedAt + HasViews + HasLikes + Clone,
{
    match key.parse::<SortKey>() {
        Ok(key) => sort(items, key),
        Err(e) => {
            tracing::debug!("{}, keeping input order", e);
            items.to_vec()
        }
    }
}

/// Keep items in `category`. `"all"` or an empty category keeps everything.
pub fn filter_by_category<T>(items: &[T], category: &str) -> Vec<T>
where
    T: HasCategory + Clone,
{
    if category.is_empty() || category == "all" {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.category() == Some(category))
        .cloned()
        .collect()
}
