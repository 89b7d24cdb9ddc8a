//! Message catalog for table labels and notices.

use std::collections::HashMap;
use std::fmt::Display;
use std::sync::LazyLock;

use regex::Captures;
use regex::Regex;
use serde::Deserialize;
use serde::Serialize;

/// Caller overrides for the message catalog.
///
/// Every field is optional; anything left out falls back to the default.
/// Keys match the names hosts already use in their configuration files.
///
/// # Example
///
/// ```
/// use models_table::{CustomMessages, Messages};
///
/// let custom = CustomMessages {
///     search_label: Some("Find:".into()),
///     ..Default::default()
/// };
/// let messages = Messages::with_overrides(&custom);
/// assert_eq!(messages.search_label, "Find:");
/// assert_eq!(messages.no_data_to_show, "No records to show");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomMessages {
    #[serde(rename = "searchLabel")]
    pub search_label: Option<String>,
    #[serde(rename = "columns-title")]
    pub columns_title: Option<String>,
    #[serde(rename = "columns-showAll")]
    pub columns_show_all: Option<String>,
    #[serde(rename = "columns-hidAll")]
    pub columns_hide_all: Option<String>,
    #[serde(rename = "columns-restoreDefaults")]
    pub columns_restore_defaults: Option<String>,
    #[serde(rename = "tableSummary")]
    pub table_summary: Option<String>,
    #[serde(rename = "allColumnsAreHidden")]
    pub all_columns_are_hidden: Option<String>,
    #[serde(rename = "noDataToShow")]
    pub no_data_to_show: Option<String>,
}

impl CustomMessages {
    /// Builds overrides from loose key/value pairs.
    ///
    /// Unknown keys are logged and skipped.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut custom = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "searchLabel" => &mut custom.search_label,
                "columns-title" => &mut custom.columns_title,
                "columns-showAll" => &mut custom.columns_show_all,
                "columns-hidAll" => &mut custom.columns_hide_all,
                "columns-restoreDefaults" => &mut custom.columns_restore_defaults,
                "tableSummary" => &mut custom.table_summary,
                "allColumnsAreHidden" => &mut custom.all_columns_are_hidden,
                "noDataToShow" => &mut custom.no_data_to_show,
                other => {
                    log::warn!("Ignoring unknown table message key '{}'", other);
                    continue;
                }
            };
            *slot = Some(value.into());
        }
        custom
    }
}

/// Resolved messages used by one table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Messages {
    /// Label in front of the global search field.
    pub search_label: String,
    /// Columns dropdown title.
    pub columns_title: String,
    /// "Show all" entry of the columns dropdown.
    pub columns_show_all: String,
    /// "Hide all" entry of the columns dropdown.
    pub columns_hide_all: String,
    /// "Restore defaults" entry of the columns dropdown.
    pub columns_restore_defaults: String,
    /// Footer summary template with three `%@` placeholders: first, last, total.
    pub table_summary: String,
    /// Notice shown when every column is hidden.
    pub all_columns_are_hidden: String,
    /// Notice shown when there are no rows.
    pub no_data_to_show: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            search_label: "Search:".to_string(),
            columns_title: "Columns".to_string(),
            columns_show_all: "Show All".to_string(),
            columns_hide_all: "Hide All".to_string(),
            columns_restore_defaults: "Restore Defaults".to_string(),
            table_summary: "Show %@ - %@ of %@".to_string(),
            all_columns_are_hidden:
                "All columns are hidden. Use <strong>columns</strong>-dropdown to show some of them"
                    .to_string(),
            no_data_to_show: "No records to show".to_string(),
        }
    }
}

impl Messages {
    /// Default messages with the caller's overrides applied.
    pub fn with_overrides(custom: &CustomMessages) -> Self {
        let defaults = Self::default();
        let pick = |custom: &Option<String>, default: String| custom.clone().unwrap_or(default);

        Self {
            search_label: pick(&custom.search_label, defaults.search_label),
            columns_title: pick(&custom.columns_title, defaults.columns_title),
            columns_show_all: pick(&custom.columns_show_all, defaults.columns_show_all),
            columns_hide_all: pick(&custom.columns_hide_all, defaults.columns_hide_all),
            columns_restore_defaults: pick(
                &custom.columns_restore_defaults,
                defaults.columns_restore_defaults,
            ),
            table_summary: pick(&custom.table_summary, defaults.table_summary),
            all_columns_are_hidden: pick(
                &custom.all_columns_are_hidden,
                defaults.all_columns_are_hidden,
            ),
            no_data_to_show: pick(&custom.no_data_to_show, defaults.no_data_to_show),
        }
    }

    /// The messages as a key/value table, keyed like [`CustomMessages`].
    pub fn to_map(&self) -> HashMap<&'static str, &str> {
        HashMap::from([
            ("searchLabel", self.search_label.as_str()),
            ("columns-title", self.columns_title.as_str()),
            ("columns-showAll", self.columns_show_all.as_str()),
            ("columns-hidAll", self.columns_hide_all.as_str()),
            ("columns-restoreDefaults", self.columns_restore_defaults.as_str()),
            ("tableSummary", self.table_summary.as_str()),
            ("allColumnsAreHidden", self.all_columns_are_hidden.as_str()),
            ("noDataToShow", self.no_data_to_show.as_str()),
        ])
    }

    /// Formats the footer summary.
    pub fn summary(&self, first: usize, last: usize, total: usize) -> String {
        format_message(&self.table_summary, &[&first, &last, &total])
    }
}

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%@(\d+)?").expect("static regex"));

/// Fills `%@` placeholders in a message template.
///
/// Bare `%@` consume arguments left to right; `%@N` picks the N-th argument
/// (1-based) without consuming. Missing arguments render as nothing.
///
/// ```
/// use models_table::format_message;
///
/// assert_eq!(format_message("Show %@ - %@ of %@", &[&1, &10, &23]), "Show 1 - 10 of 23");
/// assert_eq!(format_message("%@2 before %@1", &[&"a", &"b"]), "b before a");
/// ```
pub fn format_message(template: &str, args: &[&dyn Display]) -> String {
    let mut next = 0;
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            let index = match caps.get(1) {
                Some(n) => n.as_str().parse::<usize>().ok().and_then(|n| n.checked_sub(1)),
                None => {
                    next += 1;
                    Some(next - 1)
                }
            };
            index
                .and_then(|i| args.get(i))
                .map(|arg| arg.to_string())
                .unwrap_or_default()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_fall_back_to_defaults() {
        let custom = CustomMessages {
            table_summary: Some("%@ to %@ (%@)".into()),
            ..Default::default()
        };
        let messages = Messages::with_overrides(&custom);
        assert_eq!(messages.table_summary, "%@ to %@ (%@)");
        assert_eq!(messages.columns_title, "Columns");
        assert_eq!(messages.summary(1, 10, 23), "1 to 10 (23)");
    }

    #[test]
    fn test_deserialize_custom_messages_host_keys() {
        let json = r#"{"columns-hidAll": "Nothing", "noDataToShow": "Empty"}"#;
        let custom: CustomMessages = serde_json::from_str(json).unwrap();
        let messages = Messages::with_overrides(&custom);
        assert_eq!(messages.columns_hide_all, "Nothing");
        assert_eq!(messages.no_data_to_show, "Empty");
        assert_eq!(messages.search_label, "Search:");
    }

    #[test]
    fn test_from_pairs_skips_unknown_keys() {
        let custom = CustomMessages::from_pairs([("searchLabel", "Find"), ("bogus", "x")]);
        assert_eq!(custom.search_label.as_deref(), Some("Find"));
        assert_eq!(custom, CustomMessages { search_label: Some("Find".into()), ..Default::default() });
    }

    #[test]
    fn test_format_message_missing_args() {
        assert_eq!(format_message("%@ and %@", &[&1]), "1 and ");
        assert_eq!(format_message("%@0 %@9", &[&1]), " ");
    }

    #[test]
    fn test_to_map_has_every_key() {
        let messages = Messages::default();
        let map = messages.to_map();
        assert_eq!(map.len(), 8);
        assert_eq!(map["tableSummary"], "Show %@ - %@ of %@");
    }
}
