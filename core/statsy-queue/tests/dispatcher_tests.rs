use statsy_queue::{
    BrowserGlobals, ClientDispatcher, CommandPayload, DispatchPort, QueuedCommand,
    TrackerConfig, BACKLOG_GLOBAL, CONFIG_GLOBAL, EVENT_MIDDLEWARE_COMMAND, HANDLER_GLOBAL,
};
use statsy_types::{Event, PropValue, Props, SharedMiddleware};
use std::sync::{Arc, Mutex};

fn props(key: &str, value: &str) -> Props {
    let mut props = Props::new();
    props.insert(key.to_string(), PropValue::from(value));
    props
}

// ── ClientDispatcher ─────────────────────────────────────────────

#[test]
fn dispatch_pageview_sends_pageview_without_payload() {
    let port = Arc::new(DispatchPort::new());
    port.ensure_queue();
    ClientDispatcher::new(Arc::clone(&port)).dispatch_pageview();

    let backlog = port.backlog();
    assert_eq!(backlog.len(), 1);
    assert_eq!(backlog[0].name, "pageview");
    assert!(backlog[0].payload.is_none());
}

#[test]
fn dispatch_forwards_name_and_props() {
    let port = Arc::new(DispatchPort::new());
    let seen: Arc<Mutex<Vec<QueuedCommand>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    port.attach(move |command: QueuedCommand| sink.lock().unwrap().push(command));

    let dispatcher = ClientDispatcher::new(port);
    dispatcher.dispatch("event name", Some(props("key", "value")));

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0].name, "event name");
    assert_eq!(seen[0].props(), Some(&props("key", "value")));
}

#[test]
fn dispatch_without_bootstrap_is_noop() {
    let port = Arc::new(DispatchPort::new());
    let dispatcher = ClientDispatcher::new(Arc::clone(&port));
    dispatcher.dispatch("click", None);
    assert!(!port.is_installed());
    assert_eq!(port.backlog_len(), 0);
}

#[test]
fn register_middleware_uses_reserved_command() {
    let port = Arc::new(DispatchPort::new());
    port.ensure_queue();
    let middleware = SharedMiddleware::new(|event: Event| Some(event));
    ClientDispatcher::new(Arc::clone(&port)).register_middleware(middleware.clone());

    let command = &port.backlog()[0];
    assert_eq!(command.name, EVENT_MIDDLEWARE_COMMAND);
    assert!(command.is_middleware());
    assert!(command.props().is_none());
    match &command.payload {
        Some(CommandPayload::Middleware(registered)) => assert!(registered.ptr_eq(&middleware)),
        other => panic!("unexpected payload: {other:?}"),
    }
}

// ── BrowserGlobals ───────────────────────────────────────────────

#[test]
fn global_names_match_script_contract() {
    assert_eq!(HANDLER_GLOBAL, "statsy");
    assert_eq!(BACKLOG_GLOBAL, "statsyq");
    assert_eq!(CONFIG_GLOBAL, "statsyConfig");
}

#[test]
fn globals_dispatcher_shares_port() {
    let globals = BrowserGlobals::new();
    globals.port().ensure_queue();
    globals.dispatcher().dispatch_pageview();
    assert_eq!(globals.port().backlog_len(), 1);
}

#[test]
fn config_slot_roundtrip_and_teardown() {
    let globals = BrowserGlobals::new();
    assert!(globals.config().is_none());

    globals.set_config(TrackerConfig {
        auto_track_pageviews: false,
    });
    assert_eq!(
        globals.config(),
        Some(TrackerConfig {
            auto_track_pageviews: false
        })
    );

    globals.port().ensure_queue();
    globals.teardown();
    assert!(globals.config().is_none());
    assert!(!globals.port().is_installed());
}

#[test]
fn tracker_config_serializes_camel_case() {
    let json = serde_json::to_string(&TrackerConfig::default()).unwrap();
    assert_eq!(json, r#"{"autoTrackPageviews":true}"#);
}
