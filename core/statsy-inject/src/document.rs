//! Page abstraction used by the injector.

use statsy_queue::BrowserGlobals;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A `<script>` element in the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptElement {
    pub src: String,
    pub defer: bool,
}

impl ScriptElement {
    pub fn deferred(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            defer: true,
        }
    }
}

/// The parts of a DOM document the injector touches.
pub trait Document: Send {
    /// Scripts currently present in `<head>`, in document order.
    fn head_scripts(&self) -> Vec<ScriptElement>;

    /// Appends a script element to `<head>`.
    fn append_head_script(&mut self, script: ScriptElement);

    /// Equivalent of `head.querySelector('script[src*="..."]')`.
    fn has_head_script_containing(&self, src: &str) -> bool {
        self.head_scripts().iter().any(|s| s.src.contains(src))
    }
}

/// A document that only models its head scripts.
#[derive(Debug, Clone, Default)]
pub struct HeadDocument {
    scripts: Vec<ScriptElement>,
}

impl HeadDocument {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Document for HeadDocument {
    fn head_scripts(&self) -> Vec<ScriptElement> {
        self.scripts.clone()
    }

    fn append_head_script(&mut self, script: ScriptElement) {
        self.scripts.push(script);
    }
}

/// Everything a page exposes to the SDK: its globals and its document.
pub struct BrowserContext {
    globals: BrowserGlobals,
    document: Mutex<Box<dyn Document>>,
}

impl BrowserContext {
    pub fn new(document: impl Document + 'static) -> Self {
        Self {
            globals: BrowserGlobals::new(),
            document: Mutex::new(Box::new(document)),
        }
    }

    /// A context backed by an empty [`HeadDocument`].
    pub fn headless() -> Self {
        Self::new(HeadDocument::new())
    }

    pub fn globals(&self) -> &BrowserGlobals {
        &self.globals
    }

    pub fn document(&self) -> MutexGuard<'_, Box<dyn Document>> {
        self.document.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Resets the page globals (unload). The document is left untouched.
    pub fn teardown(&self) {
        self.globals.teardown();
    }
}

impl std::fmt::Debug for BrowserContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowserContext")
            .field("globals", &self.globals)
            .field("head_scripts", &self.document().head_scripts().len())
            .finish()
    }
}
