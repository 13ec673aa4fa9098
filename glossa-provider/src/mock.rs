//! Mock translation provider for tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use glossa_core::{GlossaError, Result, TranslationProvider};

enum Behavior {
    /// Uppercase the input (deterministic, visibly "translated").
    Uppercase,
    /// Fail every call.
    Fail,
    /// Pop scripted responses in order; fail once exhausted.
    Scripted(Mutex<VecDeque<String>>),
}

pub struct MockProvider {
    name: String,
    behavior: Behavior,
    calls: AtomicU32,
}

impl MockProvider {
    pub fn uppercase(name: impl Into<String>) -> Self {
        Self { name: name.into(), behavior: Behavior::Uppercase, calls: AtomicU32::new(0) }
    }

    pub fn failing(name: impl Into<String>) -> Self {
        Self { name: name.into(), behavior: Behavior::Fail, calls: AtomicU32::new(0) }
    }

    pub fn scripted(name: impl Into<String>, responses: Vec<&str>) -> Self {
        Self {
            name: name.into(),
            behavior: Behavior::Scripted(Mutex::new(
                responses.into_iter().map(String::from).collect(),
            )),
            calls: AtomicU32::new(0),
        }
    }

    /// Number of translate calls observed.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslationProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn translate(&self, text: &str, _source_lang: &str, _target_lang: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            Behavior::Uppercase => Ok(text.to_uppercase()),
            Behavior::Fail => {
                Err(GlossaError::Provider(format!("{}: simulated failure", self.name)))
            }
            Behavior::Scripted(queue) => queue
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| GlossaError::Provider(format!("{}: script exhausted", self.name))),
        }
    }
}
