// Metric query strings and the requests/events that carry them
use crate::domain::wire_enum::wire_enum;
use crate::error::{Error, Result};

wire_enum! {
    /// Aggregation function applied to a metric, spelled as its query token.
    pub enum Aggregator("aggregator") {
        Average => "avg",
        Sum => "sum",
        Minimum => "min",
        Maximum => "max",
    }
}

const ALL_SCOPES: &str = "*";

/// Compose `<aggregator>:<metric>{<scope>}[ by {<group_by>}]`.
///
/// A missing scope becomes `*`; a missing grouping key drops the ` by {..}`
/// suffix entirely. The stacking flag that goes with the query is chosen by
/// the [`Request`] constructors: `create`, `grouped`, `grouped_with_stacking`
/// and `scoped`.
pub fn build_query(
    aggregator: Aggregator,
    metric: &str,
    scope: Option<&str>,
    group_by: Option<&str>,
) -> Result<String> {
    if metric.is_empty() {
        return Err(Error::invalid_argument("metric is empty"));
    }
    if scope.is_some_and(str::is_empty) {
        return Err(Error::invalid_argument("scope is empty"));
    }
    if group_by.is_some_and(str::is_empty) {
        return Err(Error::invalid_argument("group key is empty"));
    }

    let mut query = format!(
        "{}:{}{{{}}}",
        aggregator.as_wire(),
        metric,
        scope.unwrap_or(ALL_SCOPES)
    );
    if let Some(key) = group_by {
        query.push_str(&format!(" by {{{}}}", key));
    }
    Ok(query)
}

/// One metric series of a chart: the query plus whether it stacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    query: String,
    stacked: bool,
}

impl Request {
    /// Wrap an already composed query string.
    pub fn new(query: impl Into<String>, stacked: bool) -> Self {
        Self {
            query: query.into(),
            stacked,
        }
    }

    /// Ungrouped query over every scope, never stacked.
    pub fn create(aggregator: Aggregator, metric: &str) -> Result<Self> {
        Ok(Self::new(build_query(aggregator, metric, None, None)?, false))
    }

    /// Query over every scope broken down by `group_by`. Grouped series
    /// stack unless the caller says otherwise through
    /// [`Request::grouped_with_stacking`].
    pub fn grouped(aggregator: Aggregator, metric: &str, group_by: &str) -> Result<Self> {
        Self::grouped_with_stacking(aggregator, metric, group_by, true)
    }

    pub fn grouped_with_stacking(
        aggregator: Aggregator,
        metric: &str,
        group_by: &str,
        stacked: bool,
    ) -> Result<Self> {
        Ok(Self::new(
            build_query(aggregator, metric, None, Some(group_by))?,
            stacked,
        ))
    }

    /// Query restricted to `scope`, optionally grouped, with explicit stacking.
    pub fn scoped(
        aggregator: Aggregator,
        metric: &str,
        scope: &str,
        group_by: Option<&str>,
        stacked: bool,
    ) -> Result<Self> {
        Ok(Self::new(
            build_query(aggregator, metric, Some(scope), group_by)?,
            stacked,
        ))
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_stacked(&self) -> bool {
        self.stacked
    }

    pub fn set_stacked(&mut self, stacked: bool) {
        self.stacked = stacked;
    }
}

/// Event overlay query drawn on top of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    value: String,
}

impl Query {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
