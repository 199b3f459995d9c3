// ttsclean-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use ttsclean_core::{EmoteSet, FilterConfig};

#[test]
fn test_load_from_file() -> Result<()> {
    let yaml_content = r#"
filter_non_ascii: true
strip_urls: false
filter_bad_words: true
replace_usernames: true
tts_name_key: "ttsName"
strip_emotes: true
emotes:
  - LUL
  - Kappa
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let config = FilterConfig::load_from_file(file.path())?;
    assert!(config.filter_non_ascii);
    assert!(!config.strip_urls);
    assert_eq!(config.tts_name_key, "ttsName");
    assert_eq!(config.emotes.len(), 2);
    assert!(config.emotes.contains("Kappa"));
    Ok(())
}

#[test]
fn test_load_from_file_rejects_missing_toggles() -> Result<()> {
    // The core never invents defaults; a partial configuration is an error.
    let yaml_content = r#"
filter_non_ascii: true
strip_urls: true
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    assert!(FilterConfig::load_from_file(file.path()).is_err());
    Ok(())
}

#[test]
fn test_config_round_trips_through_yaml() -> Result<()> {
    let config = FilterConfig {
        filter_non_ascii: true,
        strip_urls: true,
        filter_bad_words: false,
        replace_usernames: true,
        tts_name_key: "speakAs".to_string(),
        strip_emotes: false,
        emotes: EmoteSet::parse_delimited("LUL", ','),
    };
    let yaml = serde_yml::to_string(&config)?;
    let back: FilterConfig = serde_yml::from_str(&yaml)?;
    assert_eq!(back, config);
    Ok(())
}
