//! Unit tests for loading validation configuration from files

use conform_schemas::{validate_batch, ObjectSchema, TypeCode, ValidationConfig};
use serde_json::json;
use std::io::Write;
use tempfile::Builder;

fn write_config(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[cfg(test)]
mod config_loading {
    use super::*;

    #[test]
    fn test_load_yaml_config() {
        let file = write_config(".yaml", "strict: true\nmax_errors: 10\ncorrelation_id: nightly-import\n");
        let config = ValidationConfig::from_path(file.path()).unwrap();

        assert_eq!(
            config,
            ValidationConfig::strict()
                .with_max_errors(10)
                .with_correlation_id("nightly-import")
        );
    }

    #[test]
    fn test_load_yml_extension() {
        let file = write_config(".yml", "fail_fast: true\n");
        let config = ValidationConfig::from_path(file.path()).unwrap();
        assert!(config.fail_fast);
        assert!(!config.strict);
    }

    #[test]
    fn test_load_json_config() {
        let file = write_config(".json", r#"{"fail_fast": true}"#);
        let config = ValidationConfig::from_path(file.path()).unwrap();
        assert_eq!(config, ValidationConfig::lenient().with_fail_fast());
    }

    #[test]
    fn test_invalid_config_is_a_configuration_error() {
        let file = write_config(".json", "strict = true");
        let error = ValidationConfig::from_path(file.path()).unwrap_err();
        assert!(matches!(error, conform_core::Error::Configuration { .. }));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let error = ValidationConfig::from_path(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(error, conform_core::Error::Io { .. }));
    }
}

#[cfg(test)]
mod config_driven_validation {
    use super::*;

    #[test]
    fn test_loaded_config_drives_batch_policy() {
        let schema = ObjectSchema::new().with_required_property("id", TypeCode::Integer, vec![]);
        let values = vec![json!({"id": 1, "note": "extra"}), json!({"id": 2})];

        let lenient = write_config(".yaml", "strict: false\n");
        let config = ValidationConfig::from_path(lenient.path()).unwrap();
        assert!(validate_batch(&schema, &values, &config).is_ok());

        let strict = write_config(".yaml", "strict: true\ncorrelation_id: batch-7\n");
        let config = ValidationConfig::from_path(strict.path()).unwrap();
        let error = validate_batch(&schema, &values, &config).unwrap_err();
        assert_eq!(error.correlation_id(), Some("batch-7"));
        assert_eq!(error.results()[0].path(), "0.note");
    }
}
