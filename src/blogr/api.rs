//! # API Facade
//!
//! Thin entry point over the command layer: dispatches, normalizes inputs,
//! returns structured [`CmdResult`]s. No business logic, no I/O of its own,
//! no presentation concerns; those live in `commands/*` and the CLI
//! respectively.
//!
//! Generic over [`StorageAdapter`] and [`Clock`], so the same facade runs
//! against the file store with the system clock in production and against
//! the in-memory store with a manual clock in tests.

use crate::clock::Clock;
use crate::commands;
use crate::config::BlogrConfig;
use crate::error::Result;
use crate::model::PostDraft;
use crate::posts::{Hydration, PostStore};
use crate::store::StorageAdapter;
use crate::undo::UndoState;
use std::path::PathBuf;

/// The main API facade for blogr operations.
///
/// Owns the hydrated [`PostStore`] for one session (the CLI's one-shot run
/// or a whole interactive shell) plus the config the renderer-facing
/// commands read.
pub struct BlogrApi<S: StorageAdapter, C: Clock> {
    store: PostStore<S, C>,
    config: BlogrConfig,
    data_dir: PathBuf,
}

impl<S: StorageAdapter, C: Clock> BlogrApi<S, C> {
    pub fn new(store: PostStore<S, C>, config: BlogrConfig, data_dir: PathBuf) -> Self {
        Self {
            store,
            config,
            data_dir,
        }
    }

    /// Startup population without markup: load persisted data or start
    /// empty. Seeding from markup goes through [`Self::seed_from_markup`].
    pub fn hydrate(&mut self) -> Result<Hydration> {
        self.store.hydrate(None)
    }

    pub fn add_blog(&mut self, draft: PostDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    /// Delete by 0-based position; out of range is a reported no-op.
    pub fn delete_blog_by_index(&mut self, index: usize) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, index)
    }

    pub fn undo_delete(&mut self) -> Result<commands::CmdResult> {
        commands::undo::run(&mut self.store)
    }

    pub fn list_posts(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn seed_from_markup(&mut self, markup: &str) -> Result<commands::CmdResult> {
        commands::seed::run(&mut self.store, markup)
    }

    pub fn render_listing(&self) -> Result<commands::CmdResult> {
        commands::publish::run(&self.store, &self.config.site_title)
    }

    pub fn render_post(&self, id: Option<&str>) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn config_cmd(&mut self, action: commands::config::ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(&self.data_dir, action)?;
        if let Some(config) = &result.config {
            // Keep the live session in step with what was just persisted.
            self.config = config.clone();
        }
        Ok(result)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.data_dir)
    }

    /// Lazy expiry check; returns whether the undo window just closed.
    pub fn tick(&mut self) -> bool {
        self.store.tick()
    }

    pub fn undo_state(&self) -> UndoState {
        self.store.undo_state()
    }

    pub fn config(&self) -> &BlogrConfig {
        &self.config
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, DisplayPost, MessageLevel};
