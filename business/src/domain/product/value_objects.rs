use super::errors::ProductError;
use super::model::Product;

/// Number of products per listing page. Not caller-configurable.
pub const PAGE_SIZE: i64 = 9;

/// Ordering applied to product prices when listing a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(ProductError::InvalidSort),
        }
    }
}

/// One-based page number whose offset is known to fit in an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNumber(i64);

impl PageNumber {
    pub fn new(page: i64) -> Result<Self, ProductError> {
        if page < 1 || (page - 1).checked_mul(PAGE_SIZE).is_none() {
            return Err(ProductError::InvalidPage);
        }
        Ok(Self(page))
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Zero-based number of rows to skip before this page.
    pub fn offset(&self) -> i64 {
        (self.0 - 1) * PAGE_SIZE
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self(1)
    }
}

impl std::str::FromStr for PageNumber {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let page = s.parse::<i64>().map_err(|_| ProductError::InvalidPage)?;
        Self::new(page)
    }
}

/// A validated listing request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingQuery {
    pub search: String,
    pub sort: SortDirection,
    pub page: PageNumber,
}

impl ListingQuery {
    /// Builds a query from raw request parameters.
    ///
    /// Missing or empty values fall back to defaults: empty search, ascending
    /// sort, first page.
    pub fn parse(
        search: Option<String>,
        sort: Option<String>,
        page: Option<String>,
    ) -> Result<Self, ProductError> {
        let sort = match non_empty(sort) {
            Some(raw) => raw.parse()?,
            None => SortDirection::default(),
        };
        let page = match non_empty(page) {
            Some(raw) => raw.parse()?,
            None => PageNumber::default(),
        };

        Ok(Self {
            search: search.unwrap_or_default(),
            sort,
            page,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Number of the last page holding `total` products. Zero when nothing matches.
pub fn last_page(total: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    (total + PAGE_SIZE - 1) / PAGE_SIZE
}

/// One page of a filtered, price-ordered listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub data: Vec<Product>,
    pub total: i64,
    pub page: i64,
    pub last_page: i64,
}

impl ProductPage {
    pub fn new(data: Vec<Product>, total: i64, page: PageNumber) -> Self {
        Self {
            data,
            total,
            page: page.value(),
            last_page: last_page(total),
        }
    }
}
