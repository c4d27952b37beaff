use super::*;
use serial_test::serial;
use std::collections::HashMap;
use std::env;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn test_defaults_applied_when_only_site_url_set() {
    let lookup = lookup_from(&[(ENV_SITE_PREFIX, "https://cms.example.com/")]);
    let settings = Settings::from_lookup(None, &lookup).unwrap();

    assert_eq!(settings.site_url, "https://cms.example.com");
    assert_eq!(settings.auth, AuthConfig::None);
    assert_eq!(settings.retry, RetryPolicy::default());
    assert_eq!(settings.retry.max_attempts(), 3);
    assert_eq!(settings.retry.min_backoff(), Duration::from_secs(1));
    assert_eq!(settings.retry.max_backoff(), Duration::from_secs(5));
    assert_eq!(settings.request_timeout, Duration::from_secs(30));
}

#[test]
fn test_missing_site_url_is_fatal() {
    let lookup = lookup_from(&[]);
    let err = Settings::from_lookup(None, &lookup).unwrap_err();
    assert!(matches!(err, ConfigError::Missing { ref name } if name == ENV_SITE_PREFIX));
}

#[test]
fn test_flag_overrides_env_site_url() {
    let lookup = lookup_from(&[(ENV_SITE_PREFIX, "https://env.example.com")]);
    let settings =
        Settings::from_lookup(Some("https://flag.example.com/sub/".to_string()), &lookup).unwrap();
    assert_eq!(settings.site_url, "https://flag.example.com/sub");
}

#[test]
fn test_relative_site_url_rejected() {
    let lookup = lookup_from(&[(ENV_SITE_PREFIX, "cms.example.com")]);
    let err = Settings::from_lookup(None, &lookup).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidUrl { .. }));

    let lookup = lookup_from(&[(ENV_SITE_PREFIX, "ftp://cms.example.com")]);
    let err = Settings::from_lookup(None, &lookup).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidUrl { .. }));
}

#[test]
fn test_site_url_with_query_or_fragment_rejected() {
    for raw in ["https://x.com/?a=b", "https://x.com/#f", "https://x.com/sub?"] {
        let lookup = lookup_from(&[(ENV_SITE_PREFIX, raw)]);
        let err = Settings::from_lookup(None, &lookup).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }), "{raw}");
    }
    assert!(Settings::new("https://x.com/?a=b").is_err());
}

#[test]
fn test_zero_request_timeout_rejected() {
    let base = (ENV_SITE_PREFIX, "https://cms.example.com");
    for raw in ["0", "0.0"] {
        let lookup = lookup_from(&[base, (ENV_REQUEST_TIMEOUT, raw)]);
        assert!(matches!(
            Settings::from_lookup(None, &lookup),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}

#[test]
fn test_auth_type_spellings() {
    for (raw, mode) in [
        ("anonymous", "none"),
        ("NONE", "none"),
        ("apikey", "apikey"),
        ("api-key", "apikey"),
        ("AccessKey", "accesskey"),
        ("access_key", "accesskey"),
    ] {
        let lookup = lookup_from(&[
            (ENV_SITE_PREFIX, "https://cms.example.com"),
            (ENV_AUTH_TYPE, raw),
        ]);
        let settings = Settings::from_lookup(None, &lookup).unwrap();
        assert_eq!(settings.auth.mode(), mode, "auth type {raw}");
    }
}

#[test]
fn test_unknown_auth_type_rejected() {
    let lookup = lookup_from(&[
        (ENV_SITE_PREFIX, "https://cms.example.com"),
        (ENV_AUTH_TYPE, "kerberos"),
    ]);
    let err = Settings::from_lookup(None, &lookup).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownAuthType { ref value } if value == "kerberos"));
}

#[test]
fn test_api_key_mode_carries_key() {
    let lookup = lookup_from(&[
        (ENV_SITE_PREFIX, "https://cms.example.com"),
        (ENV_AUTH_TYPE, "apikey"),
        (ENV_API_KEY, "secret-key"),
    ]);
    let settings = Settings::from_lookup(None, &lookup).unwrap();
    assert_eq!(
        settings.auth,
        AuthConfig::ApiKey {
            key: Some("secret-key".to_string())
        }
    );
}

#[test]
fn test_api_key_mode_tolerates_absent_key() {
    let lookup = lookup_from(&[
        (ENV_SITE_PREFIX, "https://cms.example.com"),
        (ENV_AUTH_TYPE, "apikey"),
        (ENV_API_KEY, "   "),
    ]);
    let settings = Settings::from_lookup(None, &lookup).unwrap();
    assert_eq!(settings.auth, AuthConfig::ApiKey { key: None });
}

#[test]
fn test_username_password_requires_both_credentials() {
    let lookup = lookup_from(&[
        (ENV_SITE_PREFIX, "https://cms.example.com"),
        (ENV_AUTH_TYPE, "usernamepassword"),
        (ENV_USERNAME, "editor"),
    ]);
    let err = Settings::from_lookup(None, &lookup).unwrap_err();
    assert!(matches!(err, ConfigError::MissingCredential { ref name, .. } if name == ENV_PASSWORD));
}

#[test]
fn test_username_password_defaults_client_id() {
    let lookup = lookup_from(&[
        (ENV_SITE_PREFIX, "https://cms.example.com"),
        (ENV_AUTH_TYPE, "usernamepassword"),
        (ENV_USERNAME, "editor"),
        (ENV_PASSWORD, "hunter2"),
    ]);
    let settings = Settings::from_lookup(None, &lookup).unwrap();
    match settings.auth {
        AuthConfig::UsernamePassword(creds) => {
            assert_eq!(creds.username, "editor");
            assert_eq!(creds.password, "hunter2");
            assert_eq!(creds.client_id, "sitefinity");
            assert_eq!(creds.client_secret, "");
        }
        other => panic!("unexpected auth config: {other:?}"),
    }
}

#[test]
fn test_debug_output_redacts_secrets() {
    let auth = AuthConfig::UsernamePassword(PasswordCredentials {
        username: "editor".to_string(),
        password: "hunter2".to_string(),
        client_id: "sitefinity".to_string(),
        client_secret: "shh".to_string(),
    });
    let rendered = format!("{auth:?}");
    assert!(rendered.contains("editor"));
    assert!(!rendered.contains("hunter2"));
    assert!(!rendered.contains("shh"));

    let rendered = format!(
        "{:?}",
        AuthConfig::ApiKey {
            key: Some("abc123".to_string())
        }
    );
    assert!(!rendered.contains("abc123"));
}

#[test]
fn test_retry_tuning_parsed() {
    let lookup = lookup_from(&[
        (ENV_SITE_PREFIX, "https://cms.example.com"),
        (ENV_RETRY_MAX_ATTEMPTS, "5"),
        (ENV_RETRY_MIN_SECONDS, "0.5"),
        (ENV_RETRY_MAX_SECONDS, "8"),
        (ENV_REQUEST_TIMEOUT, "12.5"),
    ]);
    let settings = Settings::from_lookup(None, &lookup).unwrap();
    assert_eq!(settings.retry.max_attempts(), 5);
    assert_eq!(settings.retry.min_backoff(), Duration::from_millis(500));
    assert_eq!(settings.retry.max_backoff(), Duration::from_secs(8));
    assert_eq!(settings.request_timeout, Duration::from_millis(12_500));
}

#[test]
fn test_invalid_retry_values_rejected() {
    let base = (ENV_SITE_PREFIX, "https://cms.example.com");

    let lookup = lookup_from(&[base, (ENV_RETRY_MAX_ATTEMPTS, "0")]);
    assert!(matches!(
        Settings::from_lookup(None, &lookup),
        Err(ConfigError::InvalidRetry { .. })
    ));

    let lookup = lookup_from(&[base, (ENV_RETRY_MAX_ATTEMPTS, "three")]);
    assert!(matches!(
        Settings::from_lookup(None, &lookup),
        Err(ConfigError::InvalidValue { .. })
    ));

    let lookup = lookup_from(&[
        base,
        (ENV_RETRY_MIN_SECONDS, "6"),
        (ENV_RETRY_MAX_SECONDS, "5"),
    ]);
    assert!(matches!(
        Settings::from_lookup(None, &lookup),
        Err(ConfigError::InvalidRetry { .. })
    ));

    let lookup = lookup_from(&[base, (ENV_RETRY_MIN_SECONDS, "-1")]);
    assert!(matches!(
        Settings::from_lookup(None, &lookup),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
#[serial]
fn test_load_reads_process_environment() {
    unsafe {
        env::set_var(ENV_SITE_PREFIX, "https://process-env.example.com");
        env::set_var(ENV_AUTH_TYPE, "accesskey");
        env::set_var(ENV_ACCESS_KEY, "from-env");
    }

    let settings = Settings::load(None).unwrap();
    assert_eq!(settings.site_url, "https://process-env.example.com");
    assert_eq!(
        settings.auth,
        AuthConfig::AccessKey {
            key: Some("from-env".to_string())
        }
    );

    unsafe {
        env::remove_var(ENV_SITE_PREFIX);
        env::remove_var(ENV_AUTH_TYPE);
        env::remove_var(ENV_ACCESS_KEY);
    }
}
