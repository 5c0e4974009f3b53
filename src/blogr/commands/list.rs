use crate::clock::Clock;
use crate::commands::{CmdResult, DisplayPost};
use crate::error::Result;
use crate::posts::PostStore;
use crate::store::StorageAdapter;

pub fn run<S: StorageAdapter, C: Clock>(store: &PostStore<S, C>) -> Result<CmdResult> {
    let listed = store
        .posts()
        .iter()
        .enumerate()
        .map(|(i, post)| DisplayPost {
            index: i + 1,
            post: post.clone(),
        })
        .collect();
    Ok(CmdResult::default().with_listed_posts(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::manual::ManualClock;
    use crate::store::memory::fixtures::{post, store_with};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_in_store_order_with_one_based_indexes() {
        let mut store = PostStore::new(
            store_with(&[post(5, "Newest"), post(3, "Older")]),
            ManualClock::at(0),
        );
        store.hydrate(None).unwrap();

        let result = run(&store).unwrap();
        assert_eq!(result.listed_posts.len(), 2);
        assert_eq!(result.listed_posts[0].index, 1);
        assert_eq!(result.listed_posts[0].post.title, "Newest");
        assert_eq!(result.listed_posts[1].index, 2);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = PostStore::new(InMemoryStore::new(), ManualClock::at(0));
        let result = run(&store).unwrap();
        assert!(result.listed_posts.is_empty());
    }
}
