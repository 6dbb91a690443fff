//! Query building for the three filter dialects the platform speaks
//!
//! IaaS and the pipeline service take OData-style `$filter`/`$top`/`$skip`;
//! the catalog service takes `search`/`size`/`page`; the orchestrator takes
//! `conditions`/`maxResult`/`startIndex`. One builder covers all three so
//! commands stay free of string plumbing.

/// Filter clauses plus paging, rendered per service dialect
#[derive(Debug, Clone, Default)]
pub struct Query {
    filters: Vec<(String, String)>,
    search: Option<String>,
    top: Option<u32>,
    skip: Option<u32>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an equality filter clause (`field eq 'value'` in OData)
    pub fn eq(mut self, field: &str, value: &str) -> Self {
        self.filters.push((field.to_string(), value.to_string()));
        self
    }

    /// Add an equality filter only when a value is present
    pub fn eq_opt(self, field: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.eq(field, v),
            None => self,
        }
    }

    /// Free-text search term (catalog and orchestrator dialects)
    pub fn search(mut self, term: &str) -> Self {
        self.search = Some(term.to_string());
        self
    }

    pub fn top(mut self, top: Option<u32>) -> Self {
        self.top = top;
        self
    }

    pub fn skip(mut self, skip: Option<u32>) -> Self {
        self.skip = skip;
        self
    }

    pub fn is_paged(&self) -> bool {
        self.top.is_some() || self.skip.is_some()
    }

    /// Render as OData query string, e.g.
    /// `?$filter=name eq 'x' and project eq 'y'&$top=20&$skip=40`
    pub fn to_odata(&self) -> String {
        let mut params: Vec<String> = Vec::new();

        if !self.filters.is_empty() {
            let clauses: Vec<String> = self
                .filters
                .iter()
                .map(|(field, value)| format!("{} eq '{}'", field, value))
                .collect();
            params.push(format!(
                "$filter={}",
                urlencoding::encode(&clauses.join(" and "))
            ));
        }
        if let Some(top) = self.top {
            params.push(format!("$top={}", top));
        }
        if let Some(skip) = self.skip {
            params.push(format!("$skip={}", skip));
        }

        render(params)
    }

    /// Render as catalog-style paging, e.g. `?search=web&size=20&page=2`.
    /// `page` is derived from skip/top since the service pages by index.
    pub fn to_page_params(&self) -> String {
        let mut params: Vec<String> = Vec::new();

        if let Some(search) = &self.search {
            params.push(format!("search={}", urlencoding::encode(search)));
        }
        if let Some(size) = self.top {
            params.push(format!("size={}", size));
            if let Some(skip) = self.skip {
                params.push(format!("page={}", skip / size.max(1)));
            }
        }

        render(params)
    }

    /// Render as orchestrator conditions, e.g.
    /// `?conditions=name~web&maxResult=20&startIndex=40`
    pub fn to_conditions(&self) -> String {
        let mut params: Vec<String> = Vec::new();

        if let Some(search) = &self.search {
            params.push(format!("conditions=name~{}", urlencoding::encode(search)));
        }
        if let Some(top) = self.top {
            params.push(format!("maxResult={}", top));
        }
        if let Some(skip) = self.skip {
            params.push(format!("startIndex={}", skip));
        }

        render(params)
    }
}

fn render(params: Vec<String>) -> String {
    if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.join("&"))
    }
}
