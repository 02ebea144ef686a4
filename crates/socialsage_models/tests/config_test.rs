use socialsage_models::SocialSageConfig;
use std::io::Write;
use std::path::Path;

#[test]
fn partial_file_overrides_only_named_fields() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(file, "[gemini]")?;
    writeln!(file, "text_model = \"gemini-2.5-pro\"")?;
    writeln!(file, "[output]")?;
    writeln!(file, "directory = \"renders\"")?;

    let config = SocialSageConfig::from_file(file.path())?;

    assert_eq!(config.gemini().text_model(), "gemini-2.5-pro");
    assert_eq!(config.gemini().image_model(), "imagen-4.0-generate-001");
    assert_eq!(config.output().directory(), Path::new("renders"));
    Ok(())
}

#[test]
fn missing_file_is_a_config_error() {
    let err = SocialSageConfig::from_file("/nonexistent/socialsage.toml").unwrap_err();
    assert!(err.to_string().contains("Configuration Error"));
}
