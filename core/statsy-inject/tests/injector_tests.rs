use pretty_assertions::assert_eq;
use statsy_inject::{
    BrowserContext, Document, HeadDocument, InjectError, InjectOutcome, RuntimeMode,
    ScriptElement, ScriptInjector,
};
use statsy_queue::{HandlerState, TrackerConfig, EVENT_MIDDLEWARE_COMMAND};
use statsy_types::{Event, InjectionConfig};

fn production() -> ScriptInjector {
    ScriptInjector::new(RuntimeMode::Production)
}

// ── Happy path ───────────────────────────────────────────────────

#[test]
fn inject_appends_deferred_script() {
    let context = BrowserContext::headless();
    let config = InjectionConfig::new("testSiteId").with_tracking_domain("test.domain");

    let outcome = production().inject(Some(&context), &config).unwrap();
    assert_eq!(
        outcome,
        InjectOutcome::Injected {
            src: "https://test.domain/testSiteId.js".to_string()
        }
    );

    let scripts = context.document().head_scripts();
    assert_eq!(
        scripts,
        vec![ScriptElement {
            src: "https://test.domain/testSiteId.js".to_string(),
            defer: true,
        }]
    );
}

#[test]
fn inject_installs_queue_and_config() {
    let context = BrowserContext::headless();
    let config = InjectionConfig::new("abc").with_auto_track_pageviews(false);

    production().inject(Some(&context), &config).unwrap();

    assert_eq!(context.globals().port().state(), HandlerState::Queueing);
    assert_eq!(
        context.globals().config(),
        Some(TrackerConfig {
            auto_track_pageviews: false
        })
    );
}

#[test]
fn inject_uses_default_domain() {
    let context = BrowserContext::headless();
    production()
        .inject(Some(&context), &InjectionConfig::new("abc"))
        .unwrap();
    assert_eq!(
        context.document().head_scripts()[0].src,
        "https://statsy.observer/abc.js"
    );
}

#[test]
fn inject_strips_scheme_from_custom_domain() {
    let context = BrowserContext::headless();
    let config = InjectionConfig::new("abc").with_tracking_domain("https://custom.example");
    production().inject(Some(&context), &config).unwrap();
    assert_eq!(
        context.document().head_scripts()[0].src,
        "https://custom.example/abc.js"
    );
}

// ── Idempotence ──────────────────────────────────────────────────

#[test]
fn inject_twice_appends_one_script() {
    let context = BrowserContext::headless();
    let config = InjectionConfig::new("abc");
    let injector = production();

    injector.inject(Some(&context), &config).unwrap();
    let second = injector.inject(Some(&context), &config).unwrap();

    assert_eq!(
        second,
        InjectOutcome::AlreadyPresent {
            src: "https://statsy.observer/abc.js".to_string()
        }
    );
    assert_eq!(context.document().head_scripts().len(), 1);
}

#[test]
fn inject_skips_when_matching_script_already_in_head() {
    let mut document = HeadDocument::new();
    document.append_head_script(ScriptElement {
        src: "https://statsy.observer/abc.js?v=2".to_string(),
        defer: false,
    });
    let context = BrowserContext::new(document);

    let outcome = production()
        .inject(Some(&context), &InjectionConfig::new("abc"))
        .unwrap();
    assert!(matches!(outcome, InjectOutcome::AlreadyPresent { .. }));
    assert_eq!(context.document().head_scripts().len(), 1);
}

#[test]
fn different_sites_get_separate_scripts() {
    let context = BrowserContext::headless();
    let injector = production();
    injector
        .inject(Some(&context), &InjectionConfig::new("one"))
        .unwrap();
    injector
        .inject(Some(&context), &InjectionConfig::new("two"))
        .unwrap();
    assert_eq!(context.document().head_scripts().len(), 2);
}

// ── Middleware registration ──────────────────────────────────────

#[test]
fn middleware_is_registered_before_events() {
    let context = BrowserContext::headless();
    let config = InjectionConfig::new("abc").with_event_middleware(|event: Event| Some(event));

    production().inject(Some(&context), &config).unwrap();
    context.globals().dispatcher().dispatch_pageview();

    let backlog = context.globals().port().backlog();
    assert_eq!(backlog.len(), 2);
    assert_eq!(backlog[0].name, EVENT_MIDDLEWARE_COMMAND);
    assert_eq!(backlog[1].name, "pageview");
}

#[test]
fn no_middleware_means_no_registration() {
    let context = BrowserContext::headless();
    production()
        .inject(Some(&context), &InjectionConfig::new("abc"))
        .unwrap();
    assert_eq!(context.globals().port().backlog_len(), 0);
}

// ── Policy gates and errors ──────────────────────────────────────

#[test]
fn inject_outside_browser_is_noop() {
    let outcome = production()
        .inject(None, &InjectionConfig::new("abc"))
        .unwrap();
    assert_eq!(outcome, InjectOutcome::SkippedNotBrowser);
}

#[test]
fn inject_in_development_appends_nothing() {
    let context = BrowserContext::headless();
    let injector = ScriptInjector::new(RuntimeMode::Development);

    let outcome = injector
        .inject(Some(&context), &InjectionConfig::new("abc"))
        .unwrap();

    assert_eq!(outcome, InjectOutcome::SkippedDevelopment);
    assert!(context.document().head_scripts().is_empty());
    assert!(!context.globals().port().is_installed());
    assert!(context.globals().config().is_none());
}

#[test]
fn test_mode_still_injects() {
    let context = BrowserContext::headless();
    let injector = ScriptInjector::new(RuntimeMode::Test);
    injector
        .inject(Some(&context), &InjectionConfig::new("abc"))
        .unwrap();
    assert_eq!(context.document().head_scripts().len(), 1);
}

#[test]
fn empty_site_id_is_rejected() {
    let context = BrowserContext::headless();
    let result = production().inject(Some(&context), &InjectionConfig::new("  "));
    assert!(matches!(result, Err(InjectError::MissingSiteId)));
    assert!(context.document().head_scripts().is_empty());
}

#[test]
fn teardown_keeps_document_but_resets_globals() {
    let context = BrowserContext::headless();
    production()
        .inject(Some(&context), &InjectionConfig::new("abc"))
        .unwrap();
    context.teardown();

    assert!(!context.globals().port().is_installed());
    assert_eq!(context.document().head_scripts().len(), 1);
    assert!(format!("{context:?}").contains("head_scripts"));
}
