use destishare_types::{Category, CategoryFilter, OrderBy, DEFAULT_LIST_LIMIT};

/// Builder for list queries against the destinations table.
///
/// Defaults match the original list view: every category, most-recommended
/// first, capped at 1000 rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub category: CategoryFilter,
    pub order: OrderBy,
    pub limit: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            order: OrderBy::default(),
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = CategoryFilter::Only(category);
        self
    }

    pub fn filter(mut self, filter: CategoryFilter) -> Self {
        self.category = filter;
        self
    }

    pub fn order(mut self, order: OrderBy) -> Self {
        self.order = order;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Render as PostgREST query parameters.
    ///
    /// The equality filter is only present when a single category is
    /// selected; "all" means no filter parameter at all.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let CategoryFilter::Only(category) = &self.category {
            params.push(("category".to_string(), format!("eq.{}", category)));
        }

        let direction = if self.order.descending { "desc" } else { "asc" };
        params.push((
            "order".to_string(),
            format!("{}.{}", self.order.field.column(), direction),
        ));
        params.push(("limit".to_string(), self.limit.to_string()));

        params
    }
}
