//! Startup sequencing: the store is provisioned before the listener binds

use dictionary_server::config::ServerConfig;
use dictionary_server::server;
use dictionary_server::storage::schema;
use dictionary_server::{Error, SqliteStore, StoreInitCause};
use std::net::{IpAddr, Ipv4Addr, TcpListener};

#[tokio::test]
async fn test_bind_failure_after_schema_sync() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("dictionaryDatabase.db");
    assert!(!db_path.exists());

    // Hold the port so the server cannot take it.
    let held = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = held.local_addr().unwrap().port();

    let config = ServerConfig {
        database: db_path.clone(),
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port,
    };

    let err = server::start_server(config).await.err().unwrap();
    match err {
        Error::Bind { addr, .. } => assert_eq!(addr.port(), port),
        other => panic!("expected Bind, got {other:?}"),
    }

    assert!(db_path.exists());
    let store = SqliteStore::open(&db_path).unwrap();
    assert_eq!(store.table_columns().unwrap(), schema::DICTIONARY_COLUMNS);
    assert_eq!(store.count_entries().unwrap(), 0);
}

#[tokio::test]
async fn test_store_failure_aborts_before_bind() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not_a_dir");
    std::fs::write(&blocker, b"file").unwrap();

    // Reserve a free port, then release it for the server to (not) use.
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();

    let config = ServerConfig {
        database: blocker.join("nested").join("dictionaryDatabase.db"),
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port,
    };

    let err = server::start_server(config).await.err().unwrap();
    assert!(matches!(err, Error::StoreInit { source: StoreInitCause::Io(_), .. }));

    // The listener never came up.
    assert!(TcpListener::bind(("127.0.0.1", port)).is_ok());
}
