use bet_middleware::config::{BookmakerCredentials, Config};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_from_path_with_valid_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    let config_content = r#"
[sportsbet_au]
username = "test_user"
password = "test_pass"
api_key = "test_key"
"#;

    fs::write(&config_path, config_content).unwrap();

    let config = Config::from_path(&config_path).unwrap();
    let credentials = config.sportsbet_au.unwrap();
    assert_eq!(credentials.username, "test_user");
    assert_eq!(credentials.password, "test_pass");
    assert_eq!(credentials.api_key, Some("test_key".to_string()));
}

#[test]
fn test_config_api_key_optional() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    fs::write(
        &config_path,
        "[sportsbet_au]\nusername = \"u\"\npassword = \"p\"\n",
    )
    .unwrap();

    let config = Config::from_path(&config_path).unwrap();
    assert_eq!(
        config.sportsbet_au,
        Some(BookmakerCredentials {
            username: "u".to_string(),
            password: "p".to_string(),
            api_key: None,
        })
    );
}

#[test]
fn test_config_empty_file_has_no_credentials() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "").unwrap();

    let config = Config::from_path(&config_path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_from_path_with_missing_file() {
    let dir = tempdir().unwrap();
    let result = Config::from_path(dir.path().join("config.toml"));

    assert!(result.is_err());
}

#[test]
fn test_config_from_path_with_invalid_toml() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    let invalid_content = r#"
[sportsbet_au
username = "test_user"
"#;

    fs::write(&config_path, invalid_content).unwrap();

    assert!(Config::from_path(&config_path).is_err());
}

#[test]
fn test_config_with_missing_fields() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    let incomplete_content = r#"
[sportsbet_au]
username = "test_user"
"#;

    fs::write(&config_path, incomplete_content).unwrap();

    assert!(Config::from_path(&config_path).is_err());
}

#[test]
fn test_config_new_reads_working_directory() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[sportsbet_au]\nusername = \"cwd_user\"\npassword = \"p\"\n",
    )
    .unwrap();

    let original_dir = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let result = Config::new();

    std::env::set_current_dir(original_dir).unwrap();

    assert_eq!(result.unwrap().sportsbet_au.unwrap().username, "cwd_user");
}
