//! Registry of prompts keyed by type descriptor.
//!
//! Lookups that miss synthesize a prompt from the descriptor's shape and
//! cache it, so every later request for the same descriptor receives the
//! same shared instance:
//!
//! - `Primitive(k)` delegates to the prompt for `Boxed(k)`
//! - `List(e)` wraps the prompt for `e`, with primitive elements made nullable
//! - `Structural(P)` introspects `P`
//! - `Named(_)` has no synthesis rule and must be registered

use parking_lot::RwLock;
use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::sync::{Arc, OnceLock};

use crate::config::Settings;
use crate::error::{PromptError, PromptResult};
use crate::io::Session;
use crate::prompts::{AnswerParser, BoxedPrompt, LinePrompt, ListPrompt, Prompt};
use crate::types::{PrimitiveKind, PromptValue, TypeDescriptor};
use crate::{debug_event, log_event};

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Shared mapping from [`TypeDescriptor`] to [`Prompt`].
///
/// Safe to share between threads. Resolution never holds the lock while a
/// prompt is synthesized; when two threads synthesize the same descriptor
/// concurrently, the first insertion wins and both receive it.
pub struct Registry {
    prompts: RwLock<HashMap<TypeDescriptor, Arc<dyn Prompt>>>,
    yes_no: Arc<dyn Prompt>,
    settings: Arc<Settings>,
}

impl Registry {
    /// Registry seeded with the built-in leaf prompts and default settings.
    pub fn new() -> Self {
        Self::with_settings(Arc::new(Settings::default()))
    }

    pub fn with_settings(settings: Arc<Settings>) -> Self {
        let mut prompts: HashMap<TypeDescriptor, Arc<dyn Prompt>> = HashMap::new();
        prompts.insert(TypeDescriptor::Text, Arc::new(LinePrompt::text()));
        for kind in PrimitiveKind::ALL {
            prompts.insert(TypeDescriptor::Boxed(kind), Arc::new(LinePrompt::boxed(kind)));
        }

        Self {
            prompts: RwLock::new(prompts),
            yes_no: Arc::new(LinePrompt::yes_no()),
            settings,
        }
    }

    /// Process-wide registry, created with default settings on first use.
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(Registry::new)
    }

    /// Create the process-wide registry with `settings`.
    ///
    /// Returns `false` if it already exists; the settings are then unused.
    pub fn install_global(settings: Settings) -> bool {
        let installed = GLOBAL.set(Registry::with_settings(Arc::new(settings))).is_ok();
        if !installed {
            tracing::warn!("[registry] global registry already initialized, settings ignored");
        }
        installed
    }

    /// Register `prompt` for `descriptor`, replacing any previous entry.
    ///
    /// Composite prompts already synthesized keep the element prompts they
    /// were built with.
    pub fn register(&self, descriptor: TypeDescriptor, prompt: Arc<dyn Prompt>) {
        log_event!("registry", "registered", "{descriptor}");
        self.prompts.write().insert(descriptor, prompt);
    }

    /// Register a single-line prompt that parses answers with `parser`.
    pub fn register_parser(&self, descriptor: TypeDescriptor, parser: impl AnswerParser + 'static) {
        let prompt = LinePrompt::new(descriptor.clone(), parser);
        self.register(descriptor, Arc::new(prompt));
    }

    /// Prompt for `descriptor`, synthesizing and caching it on a miss.
    pub fn resolve(&self, descriptor: &TypeDescriptor) -> PromptResult<Arc<dyn Prompt>> {
        let cached = self.prompts.read().get(descriptor).cloned();
        if let Some(prompt) = cached {
            return Ok(prompt);
        }

        let prompt = self.synthesize(descriptor)?;
        let mut prompts = self.prompts.write();
        Ok(prompts.entry(descriptor.clone()).or_insert(prompt).clone())
    }

    /// Prompt for the Rust type `T`.
    pub fn resolve_for<T: PromptValue>(&self) -> PromptResult<Arc<dyn Prompt>> {
        self.resolve(&T::descriptor())
    }

    fn synthesize(&self, descriptor: &TypeDescriptor) -> PromptResult<Arc<dyn Prompt>> {
        debug_event!("registry", "synthesizing", "{descriptor}");
        let prompt: Arc<dyn Prompt> = match descriptor {
            TypeDescriptor::Primitive(kind) => {
                let boxed = self.resolve(&TypeDescriptor::Boxed(*kind))?;
                Arc::new(BoxedPrompt::new(*kind, boxed))
            }
            // Elements must be able to end the list, so they are always nullable
            TypeDescriptor::List(element) if element.is_primitive() => {
                self.resolve(&TypeDescriptor::list_of(element.as_ref().clone().boxed()))?
            }
            TypeDescriptor::List(element) => Arc::new(ListPrompt::new(self.resolve(element)?)),
            TypeDescriptor::Structural(structural) => structural.synthesize()?,
            // Only reachable when a seeded entry was replaced and is no longer cached
            TypeDescriptor::Text => Arc::new(LinePrompt::text()),
            TypeDescriptor::Boxed(kind) => Arc::new(LinePrompt::boxed(*kind)),
            TypeDescriptor::Named(_) => {
                return Err(PromptError::UnsupportedType {
                    descriptor: descriptor.clone(),
                });
            }
        };
        Ok(prompt)
    }

    /// Whether a prompt is cached for `descriptor`.
    pub fn contains(&self, descriptor: &TypeDescriptor) -> bool {
        self.prompts.read().contains_key(descriptor)
    }

    /// Number of cached prompts.
    pub fn len(&self) -> usize {
        self.prompts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.read().is_empty()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The `y`/`n` prompt used for skip questions.
    pub fn yes_no(&self) -> Arc<dyn Prompt> {
        self.yes_no.clone()
    }

    /// Open a session that reads answers from `input` and writes prompts to `output`.
    pub fn session<'a>(&'a self, input: impl BufRead + 'a, output: impl Write + 'a) -> Session<'a> {
        Session::new(self, input, output)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
