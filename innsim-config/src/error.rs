//! Error types for configuration loading and validation

use std::path::PathBuf;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Invalid configuration:\n{}", format_validation_errors(.0))]
    Validation(#[source] ValidationErrors),

    #[error("Configuration parsing error: {0}")]
    Parsing(#[from] figment::Error),
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    use std::fmt::Write;

    let mut output = String::new();
    for (field, errors) in errors.errors() {
        let _ = writeln!(output, "Section '{}':", field);
        write_kind(&mut output, field, errors);
    }
    output
}

fn write_kind(output: &mut String, path: &str, kind: &validator::ValidationErrorsKind) {
    use std::fmt::Write;
    use validator::ValidationErrorsKind;

    match kind {
        ValidationErrorsKind::Field(errors) => {
            for error in errors {
                let message = match &error.message {
                    Some(msg) => msg.to_string(),
                    None => error.code.to_string(),
                };
                let _ = writeln!(output, "  - {path}: {message}");
            }
        }
        ValidationErrorsKind::Struct(nested) => {
            for (field, kind) in nested.errors() {
                write_kind(output, &format!("{path}.{field}"), kind);
            }
        }
        ValidationErrorsKind::List(items) => {
            for (index, nested) in items {
                for (field, kind) in nested.errors() {
                    write_kind(output, &format!("{path}[{index}].{field}"), kind);
                }
            }
        }
    }
}

impl From<ValidationErrors> for ConfigError {
    fn from(errors: ValidationErrors) -> Self {
        ConfigError::Validation(errors)
    }
}
