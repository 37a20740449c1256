use std::sync::{PoisonError, RwLock};

use once_cell::sync;
use tracing::debug;

pub const DEFAULT_TITLE: &str = "global object";

static INSTANCE: sync::Lazy<Singleton> = sync::Lazy::new(Singleton::new);

/// プロセス全体で一つだけ存在するオブジェクト
///
/// Created on first access and never dropped. The title is last-write-wins
/// across threads.
#[derive(Debug)]
pub struct Singleton {
    title: RwLock<String>,
}

impl Singleton {
    fn new() -> Self {
        Self {
            title: RwLock::new(DEFAULT_TITLE.to_owned()),
        }
    }

    pub fn instance() -> &'static Singleton {
        &INSTANCE
    }

    pub fn title(&self) -> String {
        self.title
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_title(&self, title: String) {
        let mut guard = self.title.write().unwrap_or_else(PoisonError::into_inner);
        debug!("タイトルを変更: {:?} -> {:?}", *guard, title);
        *guard = title;
    }
}
