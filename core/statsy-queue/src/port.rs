//! The dispatch port: handler slot and pre-load backlog.

use crate::QueuedCommand;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Receives commands once the tracking script has loaded.
pub trait CommandHandler: Send + Sync {
    fn handle(&self, command: QueuedCommand);
}

impl<F> CommandHandler for F
where
    F: Fn(QueuedCommand) + Send + Sync,
{
    fn handle(&self, command: QueuedCommand) {
        self(command)
    }
}

/// What currently occupies the handler slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerState {
    /// Nothing installed; calls are dropped.
    Empty,
    /// The bootstrap queue is installed; calls are buffered.
    Queueing,
    /// A real handler is attached; calls are delivered directly.
    Attached,
}

enum Slot {
    Queue,
    Handler(Arc<dyn CommandHandler>),
}

#[derive(Default)]
struct PortState {
    slot: Option<Slot>,
    /// Created on the first buffered call.
    backlog: Option<Vec<QueuedCommand>>,
}

/// Process-wide command channel for one browser context.
///
/// Commands issued while the queue is installed are kept in call order and
/// handed to the handler passed to [`DispatchPort::attach`] in that order.
#[derive(Default)]
pub struct DispatchPort {
    state: Mutex<PortState>,
}

impl DispatchPort {
    pub fn new() -> Self {
        Self::default()
    }

    // A panicking handler must not take tracking down with it.
    fn lock(&self) -> MutexGuard<'_, PortState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Installs the buffering handler unless a handler is already installed.
    ///
    /// Returns true if the queue was installed by this call.
    pub fn ensure_queue(&self) -> bool {
        let mut state = self.lock();
        if state.slot.is_some() {
            return false;
        }
        state.slot = Some(Slot::Queue);
        debug!("Installed pre-load command queue");
        true
    }

    pub fn state(&self) -> HandlerState {
        match self.lock().slot {
            None => HandlerState::Empty,
            Some(Slot::Queue) => HandlerState::Queueing,
            Some(Slot::Handler(_)) => HandlerState::Attached,
        }
    }

    pub fn is_installed(&self) -> bool {
        self.state() != HandlerState::Empty
    }

    /// Invokes the installed handler with `command`.
    ///
    /// Returns false if nothing is installed and the command was dropped.
    pub fn call(&self, command: QueuedCommand) -> bool {
        let handler = {
            let mut guard = self.lock();
            let state = &mut *guard;
            match &state.slot {
                None => {
                    debug!("No command handler installed, dropping {:?}", command.name);
                    return false;
                }
                Some(Slot::Queue) => {
                    state.backlog.get_or_insert_with(Vec::new).push(command);
                    return true;
                }
                Some(Slot::Handler(handler)) => Arc::clone(handler),
            }
        }; // lock released before the handler runs

        handler.handle(command);
        true
    }

    /// Replaces the current handler and drains the backlog into it.
    ///
    /// The queue stays installed while draining, so commands issued during
    /// the drain are appended and delivered after the older ones. Returns the
    /// number of drained commands.
    ///
    /// If the handler panics, the command it was handling is lost and the
    /// rest of the batch goes back to the front of the backlog. The queue
    /// stays installed, so a later `attach` delivers them.
    pub fn attach(&self, handler: impl CommandHandler + 'static) -> usize {
        let handler: Arc<dyn CommandHandler> = Arc::new(handler);
        let mut drained = 0;

        loop {
            let pending = {
                let mut state = self.lock();
                match state.backlog.take() {
                    Some(pending) if !pending.is_empty() => pending,
                    _ => {
                        state.slot = Some(Slot::Handler(Arc::clone(&handler)));
                        break;
                    }
                }
            };

            drained += pending.len();
            let mut batch = Requeue {
                port: self,
                pending: pending.into_iter(),
            };
            for command in batch.pending.by_ref() {
                handler.handle(command);
            }
        }

        debug!("Attached command handler, drained {} queued commands", drained);
        drained
    }

    /// A snapshot of the commands still waiting for a handler.
    pub fn backlog(&self) -> Vec<QueuedCommand> {
        self.lock().backlog.clone().unwrap_or_default()
    }

    pub fn backlog_len(&self) -> usize {
        self.lock().backlog.as_ref().map_or(0, Vec::len)
    }

    /// Clears the slot and discards the backlog (page unload).
    ///
    /// Returns the number of discarded commands.
    pub fn teardown(&self) -> usize {
        let mut state = self.lock();
        let discarded = state.backlog.take().map_or(0, |b| b.len());
        state.slot = None;
        discarded
    }
}

/// Undelivered part of a drain batch. Put back into the backlog when a
/// handler unwinds.
struct Requeue<'a> {
    port: &'a DispatchPort,
    pending: std::vec::IntoIter<QueuedCommand>,
}

impl Drop for Requeue<'_> {
    fn drop(&mut self) {
        if !std::thread::panicking() {
            return;
        }
        let rest: Vec<QueuedCommand> = self.pending.by_ref().collect();
        if rest.is_empty() {
            return;
        }
        let mut state = self.port.lock();
        state
            .backlog
            .get_or_insert_with(Vec::new)
            .splice(0..0, rest);
    }
}

impl std::fmt::Debug for DispatchPort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchPort")
            .field("state", &self.state())
            .field("backlog_len", &self.backlog_len())
            .finish()
    }
}
