#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use demosite_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8000"
databse: { url: "sqlite://x.db" } # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8000");
    assert_eq!(cfg.server.max_body_bytes, 2 * 1024 * 1024);
    assert_eq!(cfg.database.url, "sqlite://demosite.db");
    assert_eq!(cfg.database.max_connections, 5);
}

#[test]
fn full_config_round_trips_values() {
    let ok = r#"
version: 1
server:
  listen: "127.0.0.1:9000"
  max_body_bytes: 1024
database:
  url: "sqlite::memory:"
  max_connections: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 9000);
    assert_eq!(cfg.server.max_body_bytes, 1024);
    assert_eq!(cfg.database.max_connections, 1);
}

#[test]
fn rejects_unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert!(err.to_string().contains("unsupported config version"));
}

#[test]
fn rejects_bad_listen_address() {
    let bad = "version: 1\nserver:\n  listen: \"not-an-addr\"\n";
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("server.listen"));
}

#[test]
fn rejects_out_of_range_values() {
    let zero_body = "version: 1\nserver:\n  max_body_bytes: 0\n";
    assert!(config::load_from_str(zero_body).is_err());

    let many_conns = "version: 1\ndatabase:\n  max_connections: 500\n";
    assert!(config::load_from_str(many_conns).is_err());

    let postgres = "version: 1\ndatabase:\n  url: \"postgres://localhost/x\"\n";
    assert!(config::load_from_str(postgres).is_err());
}

#[test]
fn load_from_file_reads_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("demosite.yaml");
    std::fs::write(&path, "version: 1\nserver:\n  listen: \"127.0.0.1:8123\"\n").unwrap();

    let cfg = config::load_from_file(path.to_str().unwrap()).unwrap();
    assert_eq!(cfg.server.listen, "127.0.0.1:8123");
}

#[test]
fn missing_file_is_an_internal_error() {
    let err = config::load_from_file("/definitely/not/here.yaml").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INTERNAL");
}

// One test owns DEMOSITE_CONFIG so parallel tests never race on it.
#[test]
fn load_or_default_follows_env_path_and_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.yaml");
    std::fs::write(
        &path,
        "version: 1\nserver:\n  listen: \"127.0.0.1:8456\"\ndatabase:\n  max_connections: 2\n",
    )
    .unwrap();

    std::env::set_var(config::CONFIG_ENV, &path);
    let cfg = config::load_or_default().expect("configured file must load");
    assert_eq!(cfg.server.listen, "127.0.0.1:8456");
    assert_eq!(cfg.database.max_connections, 2);

    std::env::set_var(config::CONFIG_ENV, dir.path().join("missing.yaml"));
    let cfg = config::load_or_default().expect("missing file falls back");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8000");
    assert_eq!(cfg.server.max_body_bytes, 2 * 1024 * 1024);
    assert_eq!(cfg.database.url, "sqlite://demosite.db");
    assert_eq!(cfg.database.max_connections, 5);

    std::fs::write(&path, "version: 1\nbogus: true\n").unwrap();
    std::env::set_var(config::CONFIG_ENV, &path);
    let err = config::load_or_default().expect_err("invalid file must not fall back");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");

    std::env::remove_var(config::CONFIG_ENV);
}
