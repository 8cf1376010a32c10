//! Like toggling over a plain list of user ids.
//!
//! The list is treated as a set when toggling (every copy of the id is removed)
//! but counted as stored, so duplicate ids from older data each count once.

use crate::domain::model::LikeSet;

/// Unlike when `user_id` is present, otherwise like by appending it.
pub fn toggle(likes: &[String], user_id: &str) -> LikeSet {
    if has_liked(Some(likes), user_id) {
        likes.iter().filter(|id| *id != user_id).cloned().collect()
    } else {
        let mut next = likes.to_vec();
        next.push(user_id.to_string());
        next
    }
}

pub fn has_liked(likes: Option<&[String]>, user_id: &str) -> bool {
    likes.is_some_and(|likes| likes.iter().any(|id| id == user_id))
}

pub fn count(likes: Option<&[String]>) -> usize {
    likes.map_or(0, <[String]>::len)
}
