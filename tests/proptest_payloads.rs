//! Property-based tests using proptest
//!
//! These tests verify action parsing, payload defaulting, and environment
//! selection against randomized inputs.

use opalskill::{ApplicationTools, Config, DomainTools, Environment, Error};
use proptest::prelude::*;
use serde_json::{json, Value};

const VALID_ACTIONS: &[&str] = &["list", "read", "create", "update", "delete", "installer_urls"];

/// Generate arbitrary scalar JSON values
fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[ -~]{0,20}".prop_map(Value::from),
    ]
}

/// Generate arbitrary flat JSON payload objects
fn arb_payload() -> impl Strategy<Value = Value> {
    prop::collection::btree_map("[a-z_]{1,12}", arb_scalar(), 0..6)
        .prop_map(|map| Value::Object(map.into_iter().collect()))
}

/// Generate action names outside the enumerated set
fn arb_unknown_action() -> impl Strategy<Value = String> {
    "[a-z_]{1,16}".prop_filter("must not be a valid action", |s| {
        !VALID_ACTIONS.contains(&s.as_str())
    })
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime")
}

fn test_config() -> Config {
    Config::new("test-token", Environment::Production)
}

/// A loopback URL with nothing listening on it, so connecting is refused.
fn refused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

proptest! {
    /// Unknown action names are rejected for any payload, with the offending
    /// name echoed back
    #[test]
    fn prop_unknown_action_always_invalid(action in arb_unknown_action(), payload in arb_payload()) {
        let rt = runtime();
        let tools = DomainTools::new(test_config());

        let err = rt
            .block_on(tools.handle(&action, Some(payload)))
            .unwrap_err();

        match err {
            Error::InvalidAction { resource, action: name } => {
                prop_assert_eq!(resource, "domain");
                prop_assert_eq!(name, action);
            }
            other => prop_assert!(false, "expected InvalidAction, got {:?}", other),
        }
    }

    /// The installer catalogue is identical no matter what payload rides along
    #[test]
    fn prop_installer_urls_payload_invariant(payload in arb_payload()) {
        let rt = runtime();
        let tools = ApplicationTools::new(test_config());

        let baseline = rt.block_on(tools.handle("installer_urls", None)).unwrap();
        let with_payload = rt
            .block_on(tools.handle("installer_urls", Some(payload)))
            .unwrap();

        prop_assert_eq!(baseline, with_payload);
    }

    /// Environment selection follows the fixed precedence: ENV_DEV, then
    /// ENV_STAGING, else production
    #[test]
    fn prop_environment_precedence(
        dev in prop::option::of("[a-z0-9]{0,4}"),
        staging in prop::option::of("[a-z0-9]{0,4}"),
        prod in prop::option::of("[a-z0-9]{0,4}"),
    ) {
        let lookup = |name: &str| match name {
            "ENV_DEV" => dev.clone(),
            "ENV_STAGING" => staging.clone(),
            "ENV_PROD" => prod.clone(),
            _ => None,
        };

        let expected = if dev.as_deref().is_some_and(|v| !v.is_empty()) {
            Environment::Development
        } else if staging.as_deref().is_some_and(|v| !v.is_empty()) {
            Environment::Staging
        } else {
            Environment::Production
        };

        prop_assert_eq!(Environment::from_env_with(lookup), expected);
    }

    /// Create payloads that carry the required fields are accepted up to the
    /// transport boundary even with arbitrary extra fields
    #[test]
    fn prop_create_accepts_extra_fields(extra in arb_payload()) {
        let rt = runtime();
        let tools = DomainTools::new(test_config().with_base_url(refused_base_url()));

        let mut payload = extra;
        payload["name"] = json!("example.com");

        // Nothing listens on the base URL, so reaching the transport
        // manifests as a connection error rather than a payload rejection.
        let err = rt.block_on(tools.handle("create", Some(payload))).unwrap_err();
        prop_assert!(matches!(err, Error::Http(_)), "got {:?}", err);
    }
}
