// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Dashboard chart card view model
//!
//! A chart card fetches a series from the API and offers up to four filters:
//! cumulative/periodic, denom, active/total accounts and duration. This
//! module keeps the filter state, derives the request for it, picks the
//! series out of the response and builds the option lists for each filter.
//!
//! # Example
//!
//! ```rust
//! use terra_display::chart::{ChartCard, ChartUrl, CumulativeType, FilterConfig, OptionConfig};
//!
//! let config = FilterConfig {
//!     kind: Some(OptionConfig::default()),
//!     ..FilterConfig::default()
//! };
//! let mut card = ChartCard::new("Transactions", "Daily transaction count", config);
//!
//! card.set_duration("7");
//! assert_eq!(card.request_count(), Some(7));
//!
//! card.set_kind(CumulativeType::Periodic);
//! let url = ChartUrl::by_filter(|f| format!("/v1/dashboard/tx_volume?type={}", f.kind));
//! assert_eq!(card.url(&url), "/v1/dashboard/tx_volume?type=periodic");
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::constants::DEFAULT_CHART_DURATIONS;
use crate::format::denom;

/// Cumulative or per-period series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CumulativeType {
    /// Running total since genesis
    #[default]
    Cumulative,
    /// Value per period
    Periodic,
}

impl CumulativeType {
    /// All variants in display order
    pub const ALL: [Self; 2] = [Self::Cumulative, Self::Periodic];

    /// Wire value
    pub const fn as_str(&self) -> &'static str {
        match self {
            CumulativeType::Cumulative => "cumulative",
            CumulativeType::Periodic => "periodic",
        }
    }

    /// Default label
    pub const fn label(&self) -> &'static str {
        match self {
            CumulativeType::Cumulative => "Cumulative",
            CumulativeType::Periodic => "Periodic",
        }
    }
}

impl std::fmt::Display for CumulativeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active or total accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Accounts with activity in the period
    Active,
    /// All accounts
    Total,
}

impl AccountType {
    /// All variants in display order
    pub const ALL: [Self; 2] = [Self::Active, Self::Total];

    /// Wire value
    pub const fn as_str(&self) -> &'static str {
        match self {
            AccountType::Active => "active",
            AccountType::Total => "total",
        }
    }

    /// Default label
    pub const fn label(&self) -> &'static str {
        match self {
            AccountType::Active => "Active",
            AccountType::Total => "Total",
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Initial value and choices for one filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionConfig<T> {
    /// Value selected at start
    pub initial: Option<T>,
    /// Choices offered; only durations use this
    pub list: Option<Vec<T>>,
}

impl<T> Default for OptionConfig<T> {
    fn default() -> Self {
        Self {
            initial: None,
            list: None,
        }
    }
}

impl<T> OptionConfig<T> {
    /// Config with only an initial value
    pub fn initial(value: T) -> Self {
        Self {
            initial: Some(value),
            list: None,
        }
    }
}

/// Which filters a chart offers
///
/// A filter is shown only when its entry is present, except duration which
/// is always shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Cumulative/periodic filter
    #[serde(rename = "type", default)]
    pub kind: Option<OptionConfig<CumulativeType>>,
    /// Denom filter
    #[serde(default)]
    pub denom: Option<OptionConfig<String>>,
    /// Active/total accounts filter
    #[serde(default)]
    pub account: Option<OptionConfig<AccountType>>,
    /// Duration filter
    #[serde(default)]
    pub duration: Option<OptionConfig<u32>>,
}

/// Current filter selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// Cumulative or periodic
    #[serde(rename = "type")]
    pub kind: CumulativeType,
    /// Selected denom code
    pub denom: Option<String>,
    /// Selected account type
    pub account: Option<AccountType>,
    /// Days of history, `0` for everything since genesis
    pub duration: u32,
}

/// Labels for the cumulative/periodic options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CumulativeLabels {
    /// Label for [`CumulativeType::Cumulative`]
    pub cumulative: String,
    /// Label for [`CumulativeType::Periodic`]
    pub periodic: String,
}

impl Default for CumulativeLabels {
    fn default() -> Self {
        Self {
            cumulative: CumulativeType::Cumulative.label().to_string(),
            periodic: CumulativeType::Periodic.label().to_string(),
        }
    }
}

impl CumulativeLabels {
    fn get(&self, kind: CumulativeType) -> &str {
        match kind {
            CumulativeType::Cumulative => &self.cumulative,
            CumulativeType::Periodic => &self.periodic,
        }
    }
}

/// Where a chart loads its series from
pub enum ChartUrl {
    /// The same endpoint for every filter
    Fixed(String),
    /// An endpoint derived from the filter
    ByFilter(Box<dyn Fn(&Filter) -> String + Send + Sync>),
}

impl ChartUrl {
    /// Endpoint derived from the filter
    pub fn by_filter(f: impl Fn(&Filter) -> String + Send + Sync + 'static) -> Self {
        Self::ByFilter(Box::new(f))
    }
}

impl std::fmt::Debug for ChartUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartUrl::Fixed(url) => f.debug_tuple("Fixed").field(url).finish(),
            ChartUrl::ByFilter(_) => f.write_str("ByFilter(..)"),
        }
    }
}

/// Chart response: one series, or one series per [`CumulativeType`]
///
/// Keys other than `cumulative` and `periodic` are kept but never selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartResponse<T> {
    /// A single series
    List(Vec<T>),
    /// Series keyed by the [`CumulativeType`] wire value
    ByType(HashMap<String, Vec<T>>),
}

impl<T> ChartResponse<T> {
    /// Series for the selected type
    pub fn results(&self, kind: CumulativeType) -> Option<&[T]> {
        match self {
            ChartResponse::List(items) => Some(items.as_slice()),
            ChartResponse::ByType(by_type) => by_type.get(kind.as_str()).map(Vec::as_slice),
        }
    }
}

/// Series entries that belong to a denom
pub trait HasDenom {
    /// Denom code of this entry
    fn denom(&self) -> Option<&str>;
}

/// One choice in a select filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Value submitted when chosen
    pub value: String,
    /// Text shown
    pub label: String,
    /// Whether the choice is unavailable with the current selection
    pub disabled: bool,
}

impl SelectOption {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    fn disabled_if(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// A select filter: current value plus choices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectFilter {
    /// Currently selected value
    pub value: String,
    /// Available choices
    pub options: Vec<SelectOption>,
}

/// Filters rendered for a chart card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartFilter {
    /// Cumulative/periodic, if configured
    #[serde(rename = "type")]
    pub kind: Option<SelectFilter>,
    /// Denom, if configured and results are loaded
    pub denom: Option<SelectFilter>,
    /// Active/total accounts, if configured
    pub account: Option<SelectFilter>,
    /// Duration, always present
    pub duration: SelectFilter,
}

/// Rendered chart card
#[derive(Debug, Clone, PartialEq)]
pub struct ChartCardView<V, C> {
    /// Card title
    pub title: String,
    /// Card description
    pub desc: String,
    /// Filters
    pub filter: ChartFilter,
    /// Headline value, once results are loaded
    pub value: Option<V>,
    /// Chart data, once results are loaded
    pub chart: Option<C>,
}

/// Label for a duration option
pub fn duration_label(days: u32) -> String {
    match days {
        0 => "From genesis".to_string(),
        1 => "Last day".to_string(),
        n => format!("{n} days"),
    }
}

/// Chart card state
#[derive(Debug, Clone)]
pub struct ChartCard {
    title: String,
    desc: String,
    config: FilterConfig,
    cumulative_labels: CumulativeLabels,
    filter: Filter,
}

impl ChartCard {
    /// Create a card with the configured initial filter values
    pub fn new(title: impl Into<String>, desc: impl Into<String>, config: FilterConfig) -> Self {
        let filter = Filter {
            kind: config
                .kind
                .as_ref()
                .and_then(|c| c.initial)
                .unwrap_or_default(),
            denom: config.denom.as_ref().and_then(|c| c.initial.clone()),
            account: config.account.as_ref().and_then(|c| c.initial),
            duration: config
                .duration
                .as_ref()
                .and_then(|c| c.initial)
                .unwrap_or(0),
        };

        Self {
            title: title.into(),
            desc: desc.into(),
            config,
            cumulative_labels: CumulativeLabels::default(),
            filter,
        }
    }

    /// Replace the cumulative/periodic labels
    pub fn with_cumulative_labels(mut self, labels: CumulativeLabels) -> Self {
        self.cumulative_labels = labels;
        self
    }

    /// Current filter
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Select cumulative or periodic
    pub fn set_kind(&mut self, kind: CumulativeType) {
        self.filter.kind = kind;
    }

    /// Select a denom
    pub fn set_denom(&mut self, denom: impl Into<String>) {
        self.filter.denom = Some(denom.into());
    }

    /// Select an account type
    pub fn set_account(&mut self, account: AccountType) {
        self.filter.account = Some(account);
    }

    /// Select a duration from its option value; non-numeric text selects `0`
    pub fn set_duration(&mut self, value: &str) {
        self.filter.duration = value.trim().parse().unwrap_or_else(|_| {
            tracing::debug!(value, "Non-numeric duration, using from genesis");
            0
        });
    }

    /// Endpoint for the current filter
    pub fn url(&self, url: &ChartUrl) -> String {
        match url {
            ChartUrl::Fixed(url) => url.clone(),
            ChartUrl::ByFilter(build) => build(&self.filter),
        }
    }

    /// `count` request parameter: `None` for everything since genesis, and
    /// at least three points for the one-day view
    pub fn request_count(&self) -> Option<u32> {
        match self.filter.duration {
            0 => None,
            1 => Some(3),
            days => Some(days),
        }
    }

    /// Build the filter option lists
    ///
    /// `results` is the loaded series; the denom filter needs it for its
    /// choices and is omitted until it is available.
    pub fn render_filter<T: HasDenom>(&self, results: Option<&[T]>) -> ChartFilter {
        let filter = &self.filter;

        let kind = self.config.kind.as_ref().map(|_| SelectFilter {
            value: filter.kind.as_str().to_string(),
            options: CumulativeType::ALL
                .into_iter()
                .map(|kind| {
                    SelectOption::new(kind.as_str(), self.cumulative_labels.get(kind))
                        .disabled_if(
                            kind == CumulativeType::Cumulative
                                && filter.account == Some(AccountType::Active),
                        )
                })
                .collect(),
        });

        let denom = match (&self.config.denom, results) {
            (Some(_), Some(results)) => Some(SelectFilter {
                value: filter.denom.clone().unwrap_or_default(),
                options: results
                    .iter()
                    .map(|item| {
                        let code = item.denom().unwrap_or_default();
                        SelectOption::new(code, denom(code))
                    })
                    .collect(),
            }),
            _ => None,
        };

        let account = self.config.account.as_ref().map(|_| SelectFilter {
            value: filter.account.map(|a| a.as_str()).unwrap_or_default().to_string(),
            options: AccountType::ALL
                .into_iter()
                .map(|account| {
                    SelectOption::new(account.as_str(), account.label()).disabled_if(
                        filter.kind == CumulativeType::Cumulative
                            && account == AccountType::Active,
                    )
                })
                .collect(),
        });

        let durations = self
            .config
            .duration
            .as_ref()
            .and_then(|c| c.list.clone())
            .unwrap_or_else(|| DEFAULT_CHART_DURATIONS.to_vec());

        ChartFilter {
            kind,
            denom,
            account,
            duration: SelectFilter {
                value: filter.duration.to_string(),
                options: durations
                    .into_iter()
                    .map(|days| SelectOption::new(days.to_string(), duration_label(days)))
                    .collect(),
            },
        }
    }

    /// Render the card from a loaded (or still loading) response
    pub fn render<T, V, C>(
        &self,
        response: Option<&ChartResponse<T>>,
        get_value: impl FnOnce(&[T], &Filter) -> V,
        get_chart: impl FnOnce(&[T], &Filter) -> C,
    ) -> ChartCardView<V, C>
    where
        T: HasDenom,
    {
        let results = response.and_then(|r| r.results(self.filter.kind));

        ChartCardView {
            title: self.title.clone(),
            desc: self.desc.clone(),
            filter: self.render_filter(results),
            value: results.map(|r| get_value(r, &self.filter)),
            chart: results.map(|r| get_chart(r, &self.filter)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Deserialize)]
    struct Point {
        denom: Option<String>,
        value: u64,
    }

    impl HasDenom for Point {
        fn denom(&self) -> Option<&str> {
            self.denom.as_deref()
        }
    }

    fn all_filters() -> FilterConfig {
        FilterConfig {
            kind: Some(OptionConfig::initial(CumulativeType::Periodic)),
            denom: Some(OptionConfig::initial("ukrw".to_string())),
            account: Some(OptionConfig::initial(AccountType::Total)),
            duration: Some(OptionConfig {
                initial: Some(14),
                list: Some(vec![0, 1, 14]),
            }),
        }
    }

    #[test]
    fn test_initial_filter_defaults() {
        let card = ChartCard::new("t", "d", FilterConfig::default());
        assert_eq!(card.filter().kind, CumulativeType::Cumulative);
        assert_eq!(card.filter().duration, 0);
        assert_eq!(card.filter().denom, None);
        assert_eq!(card.request_count(), None);
    }

    #[test]
    fn test_initial_filter_from_config() {
        let card = ChartCard::new("t", "d", all_filters());
        assert_eq!(card.filter().kind, CumulativeType::Periodic);
        assert_eq!(card.filter().denom.as_deref(), Some("ukrw"));
        assert_eq!(card.filter().account, Some(AccountType::Total));
        assert_eq!(card.request_count(), Some(14));
    }

    #[test]
    fn test_one_day_requests_three_points() {
        let mut card = ChartCard::new("t", "d", FilterConfig::default());
        card.set_duration("1");
        assert_eq!(card.request_count(), Some(3));
        card.set_duration("bogus");
        assert_eq!(card.request_count(), None);
    }

    #[test]
    fn test_unconfigured_filters_are_omitted() {
        let card = ChartCard::new("t", "d", FilterConfig::default());
        let filter = card.render_filter::<Point>(None);
        assert!(filter.kind.is_none());
        assert!(filter.denom.is_none());
        assert!(filter.account.is_none());

        let values: Vec<_> = filter.duration.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["0", "7", "14", "30"]);
        assert_eq!(filter.duration.options[0].label, "From genesis");
        assert_eq!(filter.duration.options[1].label, "7 days");
    }

    #[test]
    fn test_denom_filter_needs_results() {
        let card = ChartCard::new("t", "d", all_filters());
        assert!(card.render_filter::<Point>(None).denom.is_none());

        let results = vec![
            Point { denom: Some("uluna".into()), value: 1 },
            Point { denom: Some("ukrw".into()), value: 2 },
        ];
        let denom = card.render_filter(Some(results.as_slice())).denom.unwrap();
        assert_eq!(denom.value, "ukrw");
        assert_eq!(denom.options[0], SelectOption::new("uluna", "Luna"));
        assert_eq!(denom.options[1], SelectOption::new("ukrw", "KRT"));
    }

    #[test]
    fn test_cumulative_and_active_exclude_each_other() {
        let mut card = ChartCard::new("t", "d", all_filters());
        card.set_account(AccountType::Active);
        card.set_kind(CumulativeType::Periodic);

        let filter = card.render_filter::<Point>(None);
        let kind = filter.kind.unwrap();
        assert!(kind.options[0].disabled, "cumulative is disabled for active accounts");
        assert!(!kind.options[1].disabled);

        card.set_kind(CumulativeType::Cumulative);
        let account = card.render_filter::<Point>(None).account.unwrap();
        assert!(account.options[0].disabled, "active is disabled for cumulative");
        assert!(!account.options[1].disabled);
    }

    #[test]
    fn test_custom_cumulative_labels() {
        let card = ChartCard::new("t", "d", all_filters()).with_cumulative_labels(CumulativeLabels {
            cumulative: "Total".into(),
            periodic: "Daily".into(),
        });
        let kind = card.render_filter::<Point>(None).kind.unwrap();
        assert_eq!(kind.options[1].label, "Daily");
        assert_eq!(kind.value, "periodic");
    }

    #[test]
    fn test_response_shapes() {
        let list: ChartResponse<Point> =
            serde_json::from_str(r#"[{"denom":"uluna","value":1}]"#).unwrap();
        assert_eq!(list.results(CumulativeType::Periodic).unwrap().len(), 1);

        let by_type: ChartResponse<Point> = serde_json::from_str(
            r#"{"cumulative":[{"value":5},{"value":6}],"periodic":[{"value":1}]}"#,
        )
        .unwrap();
        assert_eq!(by_type.results(CumulativeType::Cumulative).unwrap().len(), 2);
        assert_eq!(by_type.results(CumulativeType::Periodic).unwrap()[0].value, 1);
    }

    #[test]
    fn test_by_type_response_ignores_extra_keys() {
        let response: ChartResponse<Point> = serde_json::from_str(
            r#"{"cumulative":[{"value":5}],"periodic":[{"value":1}],"total":[{"value":9}]}"#,
        )
        .unwrap();
        assert_eq!(response.results(CumulativeType::Cumulative).unwrap()[0].value, 5);
        assert_eq!(response.results(CumulativeType::Periodic).unwrap()[0].value, 1);

        let partial: ChartResponse<Point> =
            serde_json::from_str(r#"{"periodic":[{"value":2}]}"#).unwrap();
        assert!(partial.results(CumulativeType::Cumulative).is_none());
    }

    #[test]
    fn test_filter_config_from_json() {
        let config: FilterConfig = serde_json::from_str(
            r#"{"type":{"initial":"periodic"},"account":{"initial":"active"},"duration":{"list":[0,1]}}"#,
        )
        .unwrap();
        assert_eq!(config.kind, Some(OptionConfig::initial(CumulativeType::Periodic)));
        assert!(config.denom.is_none());
        assert_eq!(config.account, Some(OptionConfig::initial(AccountType::Active)));
        assert_eq!(
            config.duration,
            Some(OptionConfig {
                initial: None,
                list: Some(vec![0, 1]),
            })
        );

        let card = ChartCard::new("t", "d", config);
        assert_eq!(
            card.filter(),
            &Filter {
                kind: CumulativeType::Periodic,
                denom: None,
                account: Some(AccountType::Active),
                duration: 0,
            }
        );

        let filter = card.render_filter::<Point>(None);
        assert!(filter.denom.is_none());
        assert_eq!(filter.kind.unwrap().value, "periodic");
        assert_eq!(filter.account.unwrap().value, "active");
        let durations: Vec<_> = filter.duration.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(durations, ["0", "1"]);
        assert_eq!(filter.duration.value, "0");
    }

    #[test]
    fn test_empty_filter_config_from_json() {
        let config: FilterConfig = serde_json::from_str(r#"{"type":{}}"#).unwrap();
        assert_eq!(config.kind, Some(OptionConfig::default()));
        assert!(config.account.is_none());
        assert!(config.duration.is_none());
    }

    #[test]
    fn test_render_with_and_without_results() {
        let card = ChartCard::new("Accounts", "Registered accounts", FilterConfig::default());

        let loading = card.render::<Point, u64, Vec<u64>>(None, |_, _| 0, |_, _| vec![]);
        assert_eq!(loading.title, "Accounts");
        assert!(loading.value.is_none());
        assert!(loading.chart.is_none());

        let response = ChartResponse::List(vec![
            Point { denom: None, value: 3 },
            Point { denom: None, value: 4 },
        ]);
        let view = card.render(
            Some(&response),
            |points, _| points.iter().map(|p| p.value).sum::<u64>(),
            |points, _| points.iter().map(|p| p.value).collect::<Vec<_>>(),
        );
        assert_eq!(view.value, Some(7));
        assert_eq!(view.chart, Some(vec![3, 4]));
    }

    #[test]
    fn test_url() {
        let mut card = ChartCard::new("t", "d", all_filters());
        card.set_denom("uluna");
        assert_eq!(card.url(&ChartUrl::Fixed("/v1/x".into())), "/v1/x");
        let url = ChartUrl::by_filter(|f| format!("/v1/{}", f.denom.as_deref().unwrap_or("")));
        assert_eq!(card.url(&url), "/v1/uluna");
    }
}
