use super::*;

/// # Safety
/// Callers hold `ENV_LOCK` so no other test touches the environment.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("BIND_ADDR");
        std::env::remove_var("PORT");
        std::env::remove_var("CORS_ALLOW_ORIGIN");
        std::env::remove_var("UIGEN_TEST_NUMBER");
    }
}

#[test]
fn env_parse_reads_and_falls_back() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_server_env() };
    assert_eq!(env_parse("UIGEN_TEST_NUMBER", 7_u32), 7);

    unsafe { std::env::set_var("UIGEN_TEST_NUMBER", " 42 ") };
    assert_eq!(env_parse("UIGEN_TEST_NUMBER", 7_u32), 42);

    unsafe { std::env::set_var("UIGEN_TEST_NUMBER", "forty-two") };
    assert_eq!(env_parse("UIGEN_TEST_NUMBER", 7_u32), 7);

    unsafe { clear_server_env() };
}

#[test]
fn from_env_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:8000");
    assert_eq!(cfg.cors_origin, CorsOrigin::Exact(DEFAULT_CORS_ALLOW_ORIGIN.into()));
}

#[test]
fn from_env_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("BIND_ADDR", "127.0.0.1");
        std::env::set_var("PORT", "9090");
        std::env::set_var("CORS_ALLOW_ORIGIN", "https://studio.example.com");
    }

    let cfg = ServerConfig::from_env();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:9090");
    assert_eq!(cfg.cors_origin, CorsOrigin::Exact("https://studio.example.com".into()));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_wildcard_origin() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("CORS_ALLOW_ORIGIN", "*");
    }

    assert_eq!(ServerConfig::from_env().cors_origin, CorsOrigin::Any);

    unsafe { clear_server_env() };
}

#[test]
fn from_env_bad_port_falls_back() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "99999");
        std::env::set_var("BIND_ADDR", "not-an-ip");
    }

    let cfg = ServerConfig::from_env();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);

    unsafe { clear_server_env() };
}
