//! Tests for the test harness itself.

use dogs_axum::FeatureModule;
use dogs_axum::testing::{SetupError, TEST_ENV_FILE, create_test_app, create_test_app_with_config};
use dogs_core::{AppConfig, DatabaseConfig, DogRepository, HttpConfig, NewDog, TableMaintenance};

#[test]
fn test_config_is_isolated_in_memory_store() {
    let config = AppConfig::from_env_file(std::path::Path::new(TEST_ENV_FILE)).unwrap();
    assert!(config.database.is_in_memory());
}

#[tokio::test]
async fn clear_all_tables_empties_every_table_and_keeps_sequence() {
    let app = create_test_app(FeatureModule::ALL).await.unwrap();

    let first = app
        .core()
        .dogs()
        .create(NewDog::new("Dingo", 3, "Beagle"))
        .await
        .unwrap();
    app.core()
        .dogs()
        .create(NewDog::new("Rex", 5, "Boxer"))
        .await
        .unwrap();

    app.clear_all_tables().await.unwrap();

    let tables = app.repos().tables.tables();
    assert!(!tables.is_empty());
    assert_eq!(app.repos().dogs.count().await.unwrap(), 0);

    let next = app
        .core()
        .dogs()
        .create(NewDog::new("Fido", 1, "Pug"))
        .await
        .unwrap();
    assert!(next.id > first.id + 1);

    app.close().await;
}

#[tokio::test]
async fn apps_do_not_share_data() {
    let first = create_test_app(FeatureModule::ALL).await.unwrap();
    let second = create_test_app(FeatureModule::ALL).await.unwrap();

    first
        .core()
        .dogs()
        .create(NewDog::new("Dingo", 3, "Beagle"))
        .await
        .unwrap();

    assert_eq!(first.repos().dogs.count().await.unwrap(), 1);
    assert_eq!(second.repos().dogs.count().await.unwrap(), 0);

    first.close().await;
    second.close().await;
}

#[tokio::test]
async fn file_backed_config_works() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        http: HttpConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: format!("sqlite://{}", dir.path().join("int.db").display()),
            max_connections: 2,
        },
    };

    let app = create_test_app_with_config(&config, FeatureModule::ALL)
        .await
        .unwrap();
    app.close().await;
}

#[tokio::test]
async fn unreachable_database_aborts_setup() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"file").unwrap();

    let config = AppConfig {
        http: HttpConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            // Parent path is a regular file, so the database cannot be created
            url: format!("sqlite://{}", blocker.join("dogs.db").display()),
            max_connections: 1,
        },
    };

    let result = create_test_app_with_config(&config, FeatureModule::ALL).await;
    assert!(matches!(result, Err(SetupError::Database(_))));
}
