use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "json" => ReportFormat::Json,
            _ => ReportFormat::Text,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub dataset_path: PathBuf,
    pub concurrency: usize,
    pub report_format: ReportFormat,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset or unparsable values
    /// fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            dataset_path: lookup("FITLOG_DATASET")
                .unwrap_or_else(|| "dataset.ndjson".to_string())
                .into(),
            concurrency: lookup("FITLOG_CONCURRENCY")
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(4)
                .max(1),
            report_format: lookup("FITLOG_REPORT_FORMAT")
                .map(|v| ReportFormat::parse(&v))
                .unwrap_or(ReportFormat::Text),
        }
    }

    /// A path given on the command line wins over `FITLOG_DATASET`.
    pub fn with_dataset_arg(mut self, arg: Option<String>) -> Self {
        if let Some(path) = arg {
            self.dataset_path = path.into();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config.dataset_path, PathBuf::from("dataset.ndjson"));
        assert_eq!(config.concurrency, 4);
        assert_eq!(config.report_format, ReportFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("FITLOG_DATASET", "export/production.ndjson"),
            ("FITLOG_CONCURRENCY", "16"),
            ("FITLOG_REPORT_FORMAT", "JSON"),
        ]);
        assert_eq!(config.dataset_path, PathBuf::from("export/production.ndjson"));
        assert_eq!(config.concurrency, 16);
        assert_eq!(config.report_format, ReportFormat::Json);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = config(&[("FITLOG_CONCURRENCY", "lots"), ("FITLOG_REPORT_FORMAT", "xml")]);
        assert_eq!(config.concurrency, 4);
        assert_eq!(config.report_format, ReportFormat::Text);

        assert_eq!(self::config(&[("FITLOG_CONCURRENCY", "0")]).concurrency, 1);
    }

    #[test]
    fn test_cli_arg_wins() {
        let config = config(&[("FITLOG_DATASET", "a.ndjson")])
            .with_dataset_arg(Some("b.ndjson".to_string()));
        assert_eq!(config.dataset_path, PathBuf::from("b.ndjson"));
    }
}
