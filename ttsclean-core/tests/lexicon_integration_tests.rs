// ttsclean-core/tests/lexicon_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use ttsclean_core::lexicon::{Lexicon, LexiconConfig};
use ttsclean_core::TtsCleanError;

#[test]
fn test_load_default_lexicon() {
    let config = LexiconConfig::load_default().unwrap();
    assert!(!config.words.is_empty());
    assert_eq!(config.version, "1.0.0");
    assert!(config.words.iter().any(|w| w == "fuck"));
}

#[test]
fn test_load_from_file() -> Result<()> {
    let yaml_content = r#"
version: "2.0.0"
words:
  - frick
  - heck
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let config = LexiconConfig::load_from_file(file.path())?;
    assert_eq!(config.version, "2.0.0");
    assert_eq!(config.words.len(), 2);

    let lexicon = Lexicon::compile(&config)?;
    assert!(lexicon.contains_word("FRICK"));
    assert!(!lexicon.contains_word("fuck"));
    Ok(())
}

#[test]
fn test_load_from_file_missing_version_fails() -> Result<()> {
    let yaml_content = r#"
words:
  - frick
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    assert!(LexiconConfig::load_from_file(file.path()).is_err());
    Ok(())
}

#[test]
fn test_load_from_missing_file_fails() {
    assert!(LexiconConfig::load_from_file("/nonexistent/lexicon.yaml").is_err());
}

#[test]
fn test_compile_rejects_invalid_words() {
    let config = LexiconConfig {
        version: "1.0.0".to_string(),
        words: vec!["ok".to_string(), "not ok".to_string()],
    };
    match Lexicon::compile(&config) {
        Err(TtsCleanError::LexiconValidation(msg)) => {
            assert!(msg.contains("not ok"));
        }
        other => panic!("expected LexiconValidation error, got {:?}", other),
    }
}
