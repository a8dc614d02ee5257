//! Commands sent through the global channel.

use statsy_types::{Props, SharedMiddleware};

/// Reserved command name used to register an event middleware.
pub const EVENT_MIDDLEWARE_COMMAND: &str = "eventMiddleware";

/// The argument that accompanies a command name.
#[derive(Debug, Clone)]
pub enum CommandPayload {
    /// Properties of a tracked event.
    Props(Props),
    /// A middleware registered under [`EVENT_MIDDLEWARE_COMMAND`].
    Middleware(SharedMiddleware),
}

/// A `(commandName, payload?)` pair as seen by the tracking script.
#[derive(Debug, Clone)]
pub struct QueuedCommand {
    pub name: String,
    pub payload: Option<CommandPayload>,
}

impl QueuedCommand {
    /// An event command with optional properties.
    pub fn event(name: impl Into<String>, props: Option<Props>) -> Self {
        Self {
            name: name.into(),
            payload: props.map(CommandPayload::Props),
        }
    }

    /// The middleware registration command.
    pub fn middleware(middleware: SharedMiddleware) -> Self {
        Self {
            name: EVENT_MIDDLEWARE_COMMAND.to_string(),
            payload: Some(CommandPayload::Middleware(middleware)),
        }
    }

    pub fn is_middleware(&self) -> bool {
        self.name == EVENT_MIDDLEWARE_COMMAND
    }

    /// The event properties, if this command carries any.
    pub fn props(&self) -> Option<&Props> {
        match &self.payload {
            Some(CommandPayload::Props(props)) => Some(props),
            _ => None,
        }
    }
}
