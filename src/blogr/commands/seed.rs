use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::posts::{Hydration, PostStore};
use crate::store::StorageAdapter;

/// Hydrate-or-seed from a markup string. Persisted data always wins; the
/// markup is only scanned on a never-written store.
pub fn run<S: StorageAdapter, C: Clock>(
    store: &mut PostStore<S, C>,
    markup: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.hydrate(Some(markup))? {
        Hydration::Loaded(count) => {
            result.add_message(CmdMessage::info(format!(
                "Storage already holds {} post(s); markup ignored.",
                count
            )));
        }
        Hydration::Seeded(0) => {
            result.add_message(CmdMessage::info(
                "No post cards found in markup; starting with an empty list.",
            ));
        }
        Hydration::Seeded(count) => {
            result.add_message(CmdMessage::success(format!(
                "Seeded {} post(s) from markup.",
                count
            )));
        }
        // hydrate(Some(..)) never reports Unseeded
        Hydration::Unseeded => {}
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::manual::ManualClock;
    use crate::store::memory::fixtures::{post, store_with};
    use crate::store::memory::InMemoryStore;

    const MARKUP: &str = r##"<div id="posts-container">
      <article class="blog-card"><h3>Card</h3><p>Text</p></article>
    </div>"##;

    #[test]
    fn seeds_a_fresh_store() {
        let mut store = PostStore::new(InMemoryStore::new(), ManualClock::at(1_000));
        let result = run(&mut store, MARKUP).unwrap();

        assert_eq!(store.len(), 1);
        assert!(result.messages[0].content.contains("Seeded 1 post(s)"));
        // The seeded list was persisted right away.
        assert_eq!(store.adapter().load().unwrap().len(), 1);
    }

    #[test]
    fn persisted_data_wins_over_markup() {
        let mut store = PostStore::new(
            store_with(&[post(1, "Kept")]),
            ManualClock::at(1_000),
        );
        let result = run(&mut store, MARKUP).unwrap();

        assert_eq!(store.posts()[0].title, "Kept");
        assert!(result.messages[0].content.contains("markup ignored"));
    }

    #[test]
    fn cardless_markup_seeds_and_persists_an_empty_list() {
        let mut store = PostStore::new(InMemoryStore::new(), ManualClock::at(1_000));
        let result = run(&mut store, "<div id=\"posts-container\"></div>").unwrap();

        assert!(store.is_empty());
        assert!(result.messages[0].content.contains("No post cards"));
        assert_eq!(store.adapter().load(), Some(vec![]));

        // Running the seed again now reports the persisted (empty) list.
        let result = run(&mut store, MARKUP).unwrap();
        assert!(store.is_empty());
        assert!(result.messages[0].content.contains("markup ignored"));
    }
}
