use std::path::PathBuf;

use vernissage::config::{ConfigFlags, load_config_flags, parse_flag_tokens, save_config_flags};

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".vernissagerc");
    let content = r#"
# comment
--watch

--section artists
   
--log-file=vernissage.log
"#;
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert!(flags.watch);
    assert_eq!(flags.section.as_deref(), Some("artists"));
    assert_eq!(flags.log_file, Some(PathBuf::from("vernissage.log")));
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".vernissagerc");
    let content = "--watch\n--section artists\n--source ./catalogue\n";
    std::fs::write(&path, content).unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_args = vec![
        "vernissage".to_string(),
        "--section".to_string(),
        "exhibitions".to_string(),
        "--no-images".to_string(),
    ];
    let cli_flags = parse_flag_tokens(&cli_args);

    let effective = file_flags.union(&cli_flags);
    assert!(effective.watch, "file flags should remain enabled");
    assert!(effective.no_images, "cli flags should be applied");
    assert_eq!(effective.section.as_deref(), Some("exhibitions"));
    assert_eq!(
        effective.source.as_deref(),
        Some("./catalogue"),
        "file config should be preserved when CLI does not override"
    );
}

#[test]
fn test_parse_flag_tokens_handles_equals_syntax() {
    let args = vec![
        "vernissage".to_string(),
        "--source=https://example.org/catalogue".to_string(),
        "--log-file=run.log".to_string(),
    ];
    let flags = parse_flag_tokens(&args);
    assert_eq!(flags.source.as_deref(), Some("https://example.org/catalogue"));
    assert_eq!(flags.log_file, Some(PathBuf::from("run.log")));
}

#[test]
fn test_saved_flags_load_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config");
    let flags = ConfigFlags {
        source: Some("gallery".to_string()),
        watch: true,
        force_half_cell: true,
        ..ConfigFlags::default()
    };

    save_config_flags(&path, &flags).unwrap();
    let loaded = load_config_flags(&path).unwrap();
    assert_eq!(loaded, flags);
}

#[test]
fn test_missing_config_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let flags = load_config_flags(&dir.path().join("absent")).unwrap();
    assert_eq!(flags, ConfigFlags::default());
}
