use serial_test::serial;
use statsy_inject::{RuntimeMode, MODE_ENV_VARS};

fn clear_mode_vars() {
    for name in MODE_ENV_VARS {
        // SAFETY: tests touching the environment are serialized.
        unsafe { std::env::remove_var(name) };
    }
}

#[test]
fn parse_known_modes() {
    assert_eq!(RuntimeMode::parse("development"), RuntimeMode::Development);
    assert_eq!(RuntimeMode::parse("production"), RuntimeMode::Production);
    assert_eq!(RuntimeMode::parse(" test "), RuntimeMode::Test);
    assert_eq!(
        RuntimeMode::parse("staging"),
        RuntimeMode::Other("staging".to_string())
    );
    assert!(RuntimeMode::parse("development").is_development());
    assert!(!RuntimeMode::parse("staging").is_development());
}

#[test]
#[serial]
fn from_env_defaults_to_production() {
    clear_mode_vars();
    assert_eq!(RuntimeMode::from_env(), RuntimeMode::Production);
}

#[test]
#[serial]
fn from_env_reads_node_env() {
    clear_mode_vars();
    unsafe { std::env::set_var("NODE_ENV", "development") };
    assert_eq!(RuntimeMode::from_env(), RuntimeMode::Development);
    clear_mode_vars();
}

#[test]
#[serial]
fn statsy_env_takes_priority() {
    clear_mode_vars();
    unsafe {
        std::env::set_var("STATSY_ENV", "production");
        std::env::set_var("NODE_ENV", "development");
    }
    assert_eq!(RuntimeMode::from_env(), RuntimeMode::Production);
    clear_mode_vars();
}

#[test]
#[serial]
fn empty_values_are_skipped() {
    clear_mode_vars();
    unsafe {
        std::env::set_var("STATSY_ENV", "");
        std::env::set_var("NODE_ENV", "development");
    }
    assert_eq!(RuntimeMode::from_env(), RuntimeMode::Development);
    clear_mode_vars();
}
