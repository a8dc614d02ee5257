//! Browser-side command channel for Statsy.
//!
//! The tracking script is loaded asynchronously, so anything a page tracks
//! before it arrives has to be buffered. This crate owns that channel:
//!
//! - [`DispatchPort`]: the handler slot plus the pre-load backlog. Until a
//!   real handler is attached every command is appended to the backlog;
//!   attaching drains it in FIFO order.
//! - [`ClientDispatcher`]: forwards named events to the port.
//! - [`BrowserGlobals`]: the global-compatible view (`statsy`, `statsyq`,
//!   `statsyConfig`) the external script contract expects.
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use statsy_queue::{ClientDispatcher, DispatchPort, QueuedCommand};
//!
//! let port = Arc::new(DispatchPort::new());
//! port.ensure_queue();
//!
//! let dispatcher = ClientDispatcher::new(Arc::clone(&port));
//! dispatcher.dispatch_pageview();
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! port.attach(move |command: QueuedCommand| sink.lock().unwrap().push(command.name));
//!
//! assert_eq!(*seen.lock().unwrap(), vec!["pageview".to_string()]);
//! ```

mod command;
mod dispatcher;
mod globals;
mod port;

pub use command::{CommandPayload, QueuedCommand, EVENT_MIDDLEWARE_COMMAND};
pub use dispatcher::ClientDispatcher;
pub use globals::{BrowserGlobals, TrackerConfig, BACKLOG_GLOBAL, CONFIG_GLOBAL, HANDLER_GLOBAL};
pub use port::{CommandHandler, DispatchPort, HandlerState};
