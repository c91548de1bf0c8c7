//! Catalog query parameters and their SQL translation.

use fintel_core::entities::FranchiseBrand;
use fintel_core::enums::SortKey;

/// Filters and ordering for a catalog listing.
///
/// `search` matches name or description. Blank `search` and blank
/// `sector` mean "no filter".
///
/// SQLite only folds ASCII case, so the sector filter and ordering run in
/// SQL while the search term is matched in Rust with full Unicode folding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FranchiseQuery {
    pub search: Option<String>,
    pub sector: Option<String>,
    pub sort: SortKey,
    pub limit: Option<u32>,
}

impl FranchiseQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    #[must_use]
    pub fn sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    #[must_use]
    pub const fn sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Trimmed search term, `None` when blank.
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }

    #[must_use]
    pub fn sector_filter(&self) -> Option<&str> {
        self.sector
            .as_deref()
            .map(str::trim)
            .filter(|sector| !sector.is_empty())
    }

    /// `WHERE` clause (possibly empty) and its positional parameters.
    /// Covers the sector only; see [`Self::matches_search`].
    #[must_use]
    pub fn where_clause(&self) -> (String, Vec<libsql::Value>) {
        match self.sector_filter() {
            Some(sector) => (
                " WHERE sector = ?1".to_string(),
                vec![libsql::Value::Text(sector.to_string())],
            ),
            None => (String::new(), Vec::new()),
        }
    }

    /// Row limit that can be pushed into SQL. With a search term the limit
    /// has to wait until after [`Self::matches_search`] has filtered.
    #[must_use]
    pub fn sql_limit(&self) -> Option<u32> {
        if self.search_term().is_some() {
            None
        } else {
            self.limit
        }
    }

    /// Case-insensitive substring match of the search term over name or
    /// description. Always true without a term.
    #[must_use]
    pub fn matches_search(&self, brand: &FranchiseBrand) -> bool {
        let Some(term) = self.search_term() else {
            return true;
        };
        let needle = term.to_lowercase();
        brand.name.to_lowercase().contains(&needle)
            || brand.description.to_lowercase().contains(&needle)
    }
}

/// `ORDER BY` body for a sort key. Rows with a NULL sort column trail in
/// every direction; ties break on name.
#[must_use]
pub const fn order_clause(sort: SortKey) -> &'static str {
    match sort {
        SortKey::Name => "name COLLATE NOCASE ASC, id ASC",
        SortKey::CostLow => {
            "startup_cost_min IS NULL, startup_cost_min ASC, name COLLATE NOCASE ASC"
        }
        SortKey::CostHigh => {
            "startup_cost_max IS NULL, startup_cost_max DESC, name COLLATE NOCASE ASC"
        }
        SortKey::Profit => {
            "net_profit_margin IS NULL, net_profit_margin DESC, name COLLATE NOCASE ASC"
        }
    }
}
