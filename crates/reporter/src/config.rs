use std::path::PathBuf;

use huntboard_core::report::LabelStrategy;
use huntboard_core::{DialogConfig, DraftPolicy};

use crate::error::ReporterError;

/// Reporter configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReporterConfig {
    /// JSON draft to replay into the dialog.
    pub draft_path: PathBuf,
    /// Optional catalog override (JSON); the built-in catalog otherwise.
    pub catalog_path: Option<PathBuf>,
    pub dialog: DialogConfig,
}

impl ReporterConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var             | Default      |
    /// |---------------------|--------------|
    /// | `REPORT_DRAFT_PATH` | -- (required unless given as an argument) |
    /// | `CATALOG_PATH`      | built-in     |
    /// | `LABEL_STRATEGY`    | `monotonic`  |
    /// | `DRAFT_POLICY`      | `discard`    |
    pub fn from_env(draft_arg: Option<PathBuf>) -> Result<Self, ReporterError> {
        Self::from_lookup(draft_arg, |key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable lookup.
    pub fn from_lookup<F>(draft_arg: Option<PathBuf>, lookup: F) -> Result<Self, ReporterError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let draft_path = draft_arg
            .or_else(|| lookup("REPORT_DRAFT_PATH").map(PathBuf::from))
            .ok_or_else(|| {
                ReporterError::Config(
                    "REPORT_DRAFT_PATH must be set or a draft path passed as the first argument"
                        .to_string(),
                )
            })?;

        let catalog_path = lookup("CATALOG_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let label_strategy = match lookup("LABEL_STRATEGY") {
            Some(v) => LabelStrategy::from_str_value(v.trim())
                .map_err(|e| ReporterError::Config(e.to_string()))?,
            None => LabelStrategy::default(),
        };

        let draft_policy = match lookup("DRAFT_POLICY") {
            Some(v) => DraftPolicy::from_str_value(v.trim())
                .map_err(|e| ReporterError::Config(e.to_string()))?,
            None => DraftPolicy::default(),
        };

        Ok(Self {
            draft_path,
            catalog_path,
            dialog: DialogConfig {
                label_strategy,
                draft_policy,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply() {
        let cfg =
            ReporterConfig::from_lookup(None, lookup(&[("REPORT_DRAFT_PATH", "draft.json")]))
                .unwrap();
        assert_eq!(cfg.draft_path, PathBuf::from("draft.json"));
        assert!(cfg.catalog_path.is_none());
        assert_eq!(cfg.dialog.label_strategy, LabelStrategy::Monotonic);
        assert_eq!(cfg.dialog.draft_policy, DraftPolicy::Discard);
    }

    #[test]
    fn argument_wins_over_env() {
        let cfg = ReporterConfig::from_lookup(
            Some(PathBuf::from("cli.json")),
            lookup(&[("REPORT_DRAFT_PATH", "env.json")]),
        )
        .unwrap();
        assert_eq!(cfg.draft_path, PathBuf::from("cli.json"));
    }

    #[test]
    fn missing_draft_path_is_a_config_error() {
        assert_matches!(
            ReporterConfig::from_lookup(None, lookup(&[])),
            Err(ReporterError::Config(_))
        );
    }

    #[test]
    fn strategies_are_parsed() {
        let cfg = ReporterConfig::from_lookup(
            Some(PathBuf::from("d.json")),
            lookup(&[
                ("LABEL_STRATEGY", "positional"),
                ("DRAFT_POLICY", "preserve"),
                ("CATALOG_PATH", "catalog.json"),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.dialog.label_strategy, LabelStrategy::Positional);
        assert_eq!(cfg.dialog.draft_policy, DraftPolicy::Preserve);
        assert_eq!(cfg.catalog_path, Some(PathBuf::from("catalog.json")));
    }

    #[test]
    fn bad_strategy_is_rejected() {
        let result = ReporterConfig::from_lookup(
            Some(PathBuf::from("d.json")),
            lookup(&[("LABEL_STRATEGY", "sequential")]),
        );
        assert_matches!(result, Err(ReporterError::Config(msg)) if msg.contains("sequential"));
    }
}
