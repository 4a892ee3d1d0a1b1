//! Local feed bookkeeping.

use redsocial_shared::{increment_likes, Post};

/// Bump the like count of every post with `post_id` after a successful like.
///
/// The count the service sends back is not consulted. Returns whether any
/// post matched.
pub fn apply_like(posts: &mut [Post], post_id: &str) -> bool {
    let mut matched = false;
    for post in posts.iter_mut().filter(|p| p.id == post_id) {
        post.likes = increment_likes(&post.likes);
        matched = true;
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, likes: &str) -> Post {
        Post {
            id: id.into(),
            message: format!("message {id}"),
            likes: likes.into(),
            ..Post::default()
        }
    }

    #[test]
    fn increments_only_the_liked_post() {
        let mut posts = vec![post("1", "4"), post("2", "0")];

        assert!(apply_like(&mut posts, "2"));

        assert_eq!(posts[0].likes, "4");
        assert_eq!(posts[1].likes, "1");
    }

    #[test]
    fn keeps_order_and_ignores_unknown_ids() {
        let mut posts = vec![post("b", "1"), post("a", "1")];

        assert!(!apply_like(&mut posts, "zzz"));

        let ids: Vec<_> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
        assert_eq!(posts[0].likes, "1");
    }

    #[test]
    fn repeated_likes_accumulate() {
        let mut posts = vec![post("1", "")];
        apply_like(&mut posts, "1");
        apply_like(&mut posts, "1");
        assert_eq!(posts[0].likes, "2");
    }
}
