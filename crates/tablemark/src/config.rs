//! Rendering configuration: alignment, sorting, exclusion, validation.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// Text alignment applied uniformly to every column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Center text; the separator marker is `:-:`.
    #[default]
    Center,
    /// Left-align text; the separator marker is `:-`.
    Left,
    /// Right-align text; the separator marker is `-:`.
    Right,
}

impl Align {
    /// The minimal separator marker for this alignment, as used by the
    /// compact line family.
    pub fn marker(self) -> &'static str {
        match self {
            Align::Center => ":-:",
            Align::Left => ":-",
            Align::Right => "-:",
        }
    }
}

/// How columns are reordered before rendering.
///
/// Sorting reorders columns (not rows) by header name. Data cells follow
/// their header: the column moves as a unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Keep the original column order.
    #[default]
    None,
    /// Case-insensitive ascending order of header names.
    Ascending,
    /// Case-insensitive descending order of header names.
    Descending,
    /// Order decided by the caller-supplied comparator in
    /// [`Config::sort_fn`].
    Custom,
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortMode::None => "none",
            SortMode::Ascending => "ascending",
            SortMode::Descending => "descending",
            SortMode::Custom => "custom",
        };
        write!(f, "{}", name)
    }
}

/// Three-way comparator over header names, used with [`SortMode::Custom`].
pub type SortFn = Arc<dyn Fn(&str, &str) -> Ordering + Send + Sync>;

/// Rendering configuration for [`convert`](crate::convert).
///
/// All fields are public and the type implements `Default`, so a config can
/// be built as a struct literal or through the fluent setters:
///
/// ```rust
/// use tablemark::{Align, Config};
///
/// let cfg = Config::new()
///     .align(Align::Left)
///     .caption("Quarterly totals")
///     .exclude("internal id");
/// ```
///
/// Comparisons for the built-in sort modes are case-insensitive ordinal
/// string compares; there is no locale-aware collation.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Alignment applied to every column.
    pub align: Align,

    /// Caption rendered as a leading HTML comment line.
    pub caption: Option<String>,

    /// Use the compact line family: no padding, single-character markers.
    pub compact: bool,

    /// Header names to drop from the output entirely. Names absent from
    /// the header are silently ignored.
    pub excluded_columns: Vec<String>,

    /// Column reordering mode.
    pub sort: SortMode,

    /// Comparator for [`SortMode::Custom`]; ignored (with a warning) for
    /// every other mode. Not part of the serialized representation.
    #[serde(skip)]
    pub sort_fn: Option<SortFn>,

    /// Emit debug-level diagnostics while converting.
    pub verbose: bool,
}

impl Config {
    /// Creates a configuration with all defaults: centered, beautiful,
    /// no caption, no exclusions, no sorting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set the table caption.
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Select the compact line family.
    pub fn compact(mut self) -> Self {
        self.compact = true;
        self
    }

    /// Exclude a column by header name.
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.excluded_columns.push(name.into());
        self
    }

    /// Set the column sort mode.
    pub fn sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Sort columns with a custom comparator (implies [`SortMode::Custom`]).
    pub fn sort_with(
        mut self,
        compare: impl Fn(&str, &str) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        self.sort = SortMode::Custom;
        self.sort_fn = Some(Arc::new(compare));
        self
    }

    /// Enable verbose diagnostics.
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Checks the configuration for internal consistency.
    ///
    /// Fails with [`TableError::MissingSortFunction`] when
    /// [`SortMode::Custom`] is selected without a comparator. Returns
    /// non-fatal warnings for inconsistencies that do not prevent
    /// conversion, such as a comparator supplied alongside a non-custom
    /// sort mode. [`convert`](crate::convert) forwards these warnings to
    /// the diagnostic log; they never affect the rendered output.
    pub fn validate(&self) -> Result<Vec<String>> {
        let mut warnings = Vec::new();

        if self.sort == SortMode::Custom && self.sort_fn.is_none() {
            return Err(TableError::MissingSortFunction);
        }

        if self.sort != SortMode::Custom && self.sort_fn.is_some() {
            warnings.push(format!(
                "sort function only applies when sort is {}; sort is {}, ignoring it",
                SortMode::Custom,
                self.sort
            ));
        }

        Ok(warnings)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("align", &self.align)
            .field("caption", &self.caption)
            .field("compact", &self.compact)
            .field("excluded_columns", &self.excluded_columns)
            .field("sort", &self.sort)
            .field("sort_fn", &self.sort_fn.as_ref().map(|_| "<comparator>"))
            .field("verbose", &self.verbose)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- enum tests ---

    #[test]
    fn align_default_is_center() {
        assert_eq!(Align::default(), Align::Center);
    }

    #[test]
    fn align_markers() {
        assert_eq!(Align::Center.marker(), ":-:");
        assert_eq!(Align::Left.marker(), ":-");
        assert_eq!(Align::Right.marker(), "-:");
    }

    #[test]
    fn align_serde_roundtrip() {
        let values = [Align::Center, Align::Left, Align::Right];
        for align in values {
            let json = serde_json::to_string(&align).unwrap();
            let parsed: Align = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, align);
        }
    }

    #[test]
    fn align_serde_rejects_unknown_variant() {
        assert!(serde_json::from_str::<Align>("\"diagonal\"").is_err());
    }

    #[test]
    fn sort_mode_default_is_none() {
        assert_eq!(SortMode::default(), SortMode::None);
    }

    #[test]
    fn sort_mode_serde_roundtrip() {
        let values = [
            SortMode::None,
            SortMode::Ascending,
            SortMode::Descending,
            SortMode::Custom,
        ];
        for sort in values {
            let json = serde_json::to_string(&sort).unwrap();
            let parsed: SortMode = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, sort);
        }
    }

    #[test]
    fn sort_mode_serde_rejects_unknown_variant() {
        assert!(serde_json::from_str::<SortMode>("\"random\"").is_err());
    }

    #[test]
    fn sort_mode_display() {
        assert_eq!(SortMode::Ascending.to_string(), "ascending");
        assert_eq!(SortMode::Custom.to_string(), "custom");
    }

    // --- Config tests ---

    #[test]
    fn config_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.align, Align::Center);
        assert!(cfg.caption.is_none());
        assert!(!cfg.compact);
        assert!(cfg.excluded_columns.is_empty());
        assert_eq!(cfg.sort, SortMode::None);
        assert!(cfg.sort_fn.is_none());
        assert!(!cfg.verbose);
    }

    #[test]
    fn config_fluent_setters() {
        let cfg = Config::new()
            .align(Align::Right)
            .caption("Totals")
            .compact()
            .exclude("id")
            .exclude("notes")
            .verbose();

        assert_eq!(cfg.align, Align::Right);
        assert_eq!(cfg.caption.as_deref(), Some("Totals"));
        assert!(cfg.compact);
        assert_eq!(cfg.excluded_columns, vec!["id", "notes"]);
        assert!(cfg.verbose);
    }

    #[test]
    fn sort_with_implies_custom_mode() {
        let cfg = Config::new().sort_with(|a, b| a.len().cmp(&b.len()));
        assert_eq!(cfg.sort, SortMode::Custom);
        assert!(cfg.sort_fn.is_some());
    }

    #[test]
    fn config_deserializes_from_partial_document() {
        let cfg: Config = serde_json::from_str(r#"{"align": "left", "compact": true}"#).unwrap();
        assert_eq!(cfg.align, Align::Left);
        assert!(cfg.compact);
        assert_eq!(cfg.sort, SortMode::None);
        assert!(cfg.sort_fn.is_none());
    }

    #[test]
    fn config_debug_masks_comparator() {
        let cfg = Config::new().sort_with(|a, b| a.cmp(b));
        let debug = format!("{:?}", cfg);
        assert!(debug.contains("<comparator>"));
    }

    // --- validation tests ---

    #[test]
    fn validate_default_config() {
        assert!(Config::default().validate().unwrap().is_empty());
    }

    #[test]
    fn validate_custom_sort_without_function() {
        let cfg = Config::new().sort(SortMode::Custom);
        assert!(matches!(
            cfg.validate().unwrap_err(),
            TableError::MissingSortFunction
        ));
    }

    #[test]
    fn validate_warns_on_unused_comparator() {
        let mut cfg = Config::new().sort_with(|a, b| a.cmp(b));
        cfg.sort = SortMode::Ascending;

        let warnings = cfg.validate().unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("ignoring"));
    }

    #[test]
    fn validate_custom_sort_with_function() {
        let cfg = Config::new().sort_with(|a, b| a.cmp(b));
        assert!(cfg.validate().unwrap().is_empty());
    }
}
