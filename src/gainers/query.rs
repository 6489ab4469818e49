use crate::common::{CexExchange, QueryKind, query_defaults};
use serde::{Deserialize, Serialize};

/// Caller-supplied gainer query.
///
/// * `limit` - maximum number of results; `0` or negative means unlimited
/// * `ending_filter` - quote suffix a symbol must end with; empty matches everything
/// * `exclude_filter` - substring a symbol must not contain; empty excludes nothing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GainerQuery {
    pub limit: i64,
    pub ending_filter: String,
    pub exclude_filter: String,
}

impl GainerQuery {
    pub fn new(
        limit: i64,
        ending_filter: impl Into<String>,
        exclude_filter: impl Into<String>,
    ) -> Self {
        Self {
            limit,
            ending_filter: ending_filter.into(),
            exclude_filter: exclude_filter.into(),
        }
    }

    /// Query populated from the defaults table for this exchange and query kind.
    pub fn defaults_for(cex: CexExchange, kind: QueryKind) -> Self {
        let defaults = query_defaults(cex, kind);
        Self::new(
            defaults.limit,
            defaults.ending_filter,
            defaults.exclude_filter,
        )
    }

    /// Replaces only the fields the caller supplied; the rest keep their current value.
    pub fn with_overrides(
        mut self,
        limit: Option<i64>,
        ending_filter: Option<String>,
        exclude_filter: Option<String>,
    ) -> Self {
        if let Some(limit) = limit {
            self.limit = limit;
        }
        if let Some(ending_filter) = ending_filter {
            self.ending_filter = ending_filter;
        }
        if let Some(exclude_filter) = exclude_filter {
            self.exclude_filter = exclude_filter;
        }
        self
    }
}
