//! The post store: the ordered in-memory list and its only mutators.
//!
//! Storage and time come in through the [`StorageAdapter`] and [`Clock`]
//! traits, so every rule here (newest-first insertion, the silent no-op on
//! a bad delete index, the clamped restore position, the undo window) is
//! testable with an in-memory backend and a hand-cranked clock.

use crate::clock::Clock;
use crate::error::Result;
use crate::model::{Post, PostDraft};
use crate::seed;
use crate::store::StorageAdapter;
use crate::undo::{UndoController, UndoState};

/// How a store got its initial list on startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hydration {
    /// Persisted data existed (possibly an explicitly empty list) and was
    /// used verbatim; markup was not scanned.
    Loaded(usize),
    /// Nothing persisted: the list was derived from markup and written back
    /// immediately, empty or not, so the next load never re-scans.
    Seeded(usize),
    /// Nothing persisted and no markup available; the store starts empty
    /// and nothing is written until the first mutation.
    Unseeded,
}

/// Ordered list of posts plus the pending-deletion slot.
///
/// Display order is insertion order, newest first. All mutations persist the
/// full list through the adapter before returning; callers re-render the
/// whole projection afterwards.
pub struct PostStore<S: StorageAdapter, C: Clock> {
    adapter: S,
    clock: C,
    posts: Vec<Post>,
    undo: UndoController,
}

impl<S: StorageAdapter, C: Clock> PostStore<S, C> {
    pub fn new(adapter: S, clock: C) -> Self {
        Self {
            adapter,
            clock,
            posts: Vec::new(),
            undo: UndoController::new(),
        }
    }

    /// Startup population. Persisted data always wins over markup; only a
    /// never-written (or unreadable) store falls back to seed extraction.
    pub fn hydrate(&mut self, markup: Option<&str>) -> Result<Hydration> {
        if let Some(list) = self.adapter.load() {
            let count = list.len();
            self.posts = list;
            return Ok(Hydration::Loaded(count));
        }
        match markup {
            Some(html) => {
                self.posts = seed::extract_posts(html, &self.clock);
                // Persist even an empty result: "empty, but present" is what
                // keeps a later startup from scanning the markup again.
                self.adapter.save(&self.posts)?;
                Ok(Hydration::Seeded(self.posts.len()))
            }
            None => {
                self.posts.clear();
                Ok(Hydration::Unseeded)
            }
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn adapter(&self) -> &S {
        &self.adapter
    }

    /// Builds a post from the draft and inserts it at the front
    /// (newest-first). The id is the clock's current milliseconds, bumped
    /// past any id already held so uniqueness survives same-millisecond
    /// inserts and a still-restorable deletion.
    pub fn add(&mut self, draft: PostDraft) -> Result<&Post> {
        let now = self.clock.now();
        self.undo.expire_if_due(now);

        let mut id = now.timestamp_millis();
        if let Some(max) = self.max_held_id() {
            if id <= max {
                id = max + 1;
            }
        }
        self.posts.insert(0, Post::new(id, draft));
        self.adapter.save(&self.posts)?;
        Ok(&self.posts[0])
    }

    /// Removes the post at `index` and arms the undo window with it. An
    /// out-of-range index does nothing and returns `None`. A delete while
    /// another deletion is still pending forfeits the earlier record.
    pub fn delete_at(&mut self, index: usize) -> Result<Option<Post>> {
        let now = self.clock.now();
        self.undo.expire_if_due(now);

        if index >= self.posts.len() {
            return Ok(None);
        }
        let post = self.posts.remove(index);
        self.undo.arm(post.clone(), index, now);
        self.adapter.save(&self.posts)?;
        Ok(Some(post))
    }

    /// Reinserts the pending deletion at its original position, clamped to
    /// the current length when posts were added meanwhile. Returns `None`
    /// when there is nothing restorable (idle or expired).
    pub fn restore(&mut self) -> Result<Option<Post>> {
        let now = self.clock.now();
        let pending = match self.undo.take(now) {
            Some(pending) => pending,
            None => return Ok(None),
        };
        let at = pending.index.min(self.posts.len());
        self.posts.insert(at, pending.post);
        self.adapter.save(&self.posts)?;
        Ok(Some(self.posts[at].clone()))
    }

    /// Clears an overdue pending deletion. Returns whether the undo window
    /// just closed, so an interactive caller can say so once.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        self.undo.expire_if_due(now)
    }

    pub fn undo_state(&self) -> UndoState {
        self.undo.state(self.clock.now())
    }

    /// Lookup for the single-post view: the id arrives as a query-string
    /// value and is compared textually.
    pub fn find_by_id(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.id.to_string() == id)
    }

    /// Highest id currently held, counting a still-pending deletion: a
    /// restore must never bring back a duplicate.
    fn max_held_id(&self) -> Option<i64> {
        self.posts
            .iter()
            .map(|post| post.id)
            .chain(self.undo.peek().map(|pending| pending.post.id))
            .max()
    }
}
