use crate::adapters::outbound::formatters::{JsonManifestFormatter, NdjsonManifestFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ManifestFormatter;

/// Factory for creating manifest formatters
///
/// Selects the infrastructure adapter that renders the component list for
/// a given [`OutputFormat`].
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use cg_manifest::application::dto::OutputFormat;
    /// use cg_manifest::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Ndjson);
    /// assert_eq!(formatter.format(&[]).unwrap(), "");
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ManifestFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonManifestFormatter::new()),
            OutputFormat::Ndjson => Box::new(NdjsonManifestFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use cg_manifest::application::dto::OutputFormat;
    /// use cg_manifest::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Rendering component manifest as JSON...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Rendering component manifest as JSON...",
            OutputFormat::Ndjson => "📝 Rendering component manifest as NDJSON...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component_formatting::domain::{
        Component, ComponentRecord, ManifestEntry, NamedVersion,
    };

    fn entries() -> Vec<ManifestEntry> {
        vec![ComponentRecord::new(Component::Cargo {
            cargo: NamedVersion {
                name: Some("rustfmt".to_string()),
                version: Some("1.4.17-stable".to_string()),
            },
        })
        .into()]
    }

    #[test]
    fn test_create_json_formatter() {
        let output = FormatterFactory::create(OutputFormat::Json)
            .format(&entries())
            .unwrap();
        assert!(output.starts_with("[\n"));
    }

    #[test]
    fn test_create_ndjson_formatter() {
        let output = FormatterFactory::create(OutputFormat::Ndjson)
            .format(&entries())
            .unwrap();
        assert_eq!(
            output,
            "{\"Component\":{\"Type\":\"cargo\",\"Cargo\":{\"Name\":\"rustfmt\",\"Version\":\"1.4.17-stable\"}}}\n"
        );
    }

    #[test]
    fn test_progress_message_json() {
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Json),
            "📝 Rendering component manifest as JSON..."
        );
    }

    #[test]
    fn test_progress_message_ndjson() {
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Ndjson),
            "📝 Rendering component manifest as NDJSON..."
        );
    }
}
