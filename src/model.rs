// Domain model for the dog search client
//
// Wire types mirror the JSON the dog API sends and accepts. Query types
// (sort, paging, filters) live here so both the API client and the search
// view agree on a single representation.

use serde::{Deserialize, Serialize};

/// A shelter dog as returned by `POST /dogs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub id: String,
    pub name: String,
    pub breed: String,
    pub age: u32,
    pub zip_code: String,
    /// Image URL
    pub img: String,
}

/// Response of `GET /dogs/search`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub result_ids: Vec<String>,
    pub total: u64,
}

/// Response of `POST /dogs/match`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MatchResponse {
    #[serde(rename = "match", default)]
    pub matched: Option<String>,
}

impl MatchResponse {
    /// The matched dog id, treating an empty string as no match
    pub fn id(&self) -> Option<&str> {
        self.matched.as_deref().filter(|id| !id.is_empty())
    }
}

/// Body of `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub name: String,
    pub email: String,
}

/// Dog fields the search endpoint can sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    Name,
    #[default]
    Breed,
    Age,
}

impl SortField {
    /// Field name as the API expects it in `sort=<field>:<dir>`
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Breed => "breed",
            SortField::Age => "age",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Order::Asc => Order::Desc,
            Order::Desc => Order::Asc,
        }
    }

    /// Arrow shown next to the active column header
    pub fn arrow(&self) -> &'static str {
        match self {
            Order::Asc => "▲",
            Order::Desc => "▼",
        }
    }
}

/// Rows per page offered by the pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    Five,
    Ten,
    #[default]
    TwentyFive,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Five, PageSize::Ten, PageSize::TwentyFive];

    pub fn get(self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
        }
    }

    /// Map a raw count onto an allowed size; anything else is rejected
    pub fn from_count(count: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.get() == count)
    }

    /// Next larger size, saturating at the largest
    pub fn larger(self) -> Self {
        match self {
            PageSize::Five => PageSize::Ten,
            PageSize::Ten | PageSize::TwentyFive => PageSize::TwentyFive,
        }
    }

    /// Next smaller size, saturating at the smallest
    pub fn smaller(self) -> Self {
        match self {
            PageSize::TwentyFive => PageSize::Ten,
            PageSize::Ten | PageSize::Five => PageSize::Five,
        }
    }
}

/// Committed filter values of the active search
///
/// Ages are kept exactly as typed. An empty string means "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub breeds: Vec<String>,
    pub zip_codes: Vec<String>,
    pub age_min: String,
    pub age_max: String,
}

impl Filters {
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
            && self.zip_codes.is_empty()
            && self.age_min.is_empty()
            && self.age_max.is_empty()
    }

    /// Number of active filter groups, shown next to the filter control
    pub fn active_count(&self) -> usize {
        [
            !self.breeds.is_empty(),
            !self.zip_codes.is_empty(),
            !self.age_min.is_empty(),
            !self.age_max.is_empty(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

/// Everything that determines which page of dogs is shown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub page_num: usize,
    pub page_size: PageSize,
    pub order: Order,
    pub order_by: SortField,
    pub filters: Filters,
}

impl SearchQuery {
    /// Offset of the first result on the current page
    pub fn from(&self) -> usize {
        self.page_size.get() * self.page_num
    }

    /// `sort` parameter value, e.g. `breed:asc`
    pub fn sort_param(&self) -> String {
        format!("{}:{}", self.order_by.as_str(), self.order.as_str())
    }

    /// Query pairs for `GET /dogs/search`
    ///
    /// Breeds and zip codes become repeated keys (`breeds=a&breeds=b`).
    /// Empty values are skipped so a stray comma never filters on "".
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("size", self.page_size.get().to_string()),
            ("from", self.from().to_string()),
            ("sort", self.sort_param()),
        ];

        if !self.filters.age_min.is_empty() {
            pairs.push(("ageMin", self.filters.age_min.clone()));
        }
        if !self.filters.age_max.is_empty() {
            pairs.push(("ageMax", self.filters.age_max.clone()));
        }
        for breed in self.filters.breeds.iter().filter(|b| !b.is_empty()) {
            pairs.push(("breeds", breed.clone()));
        }
        for zip in self.filters.zip_codes.iter().filter(|z| !z.is_empty()) {
            pairs.push(("zipCodes", zip.clone()));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_pairs() {
        let query = SearchQuery::default();
        assert_eq!(
            query.to_query_pairs(),
            vec![
                ("size", "25".to_string()),
                ("from", "0".to_string()),
                ("sort", "breed:asc".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_pairs_repeat_filter_keys() {
        let query = SearchQuery {
            page_num: 2,
            page_size: PageSize::Ten,
            order: Order::Desc,
            order_by: SortField::Age,
            filters: Filters {
                breeds: vec!["Akita".into(), "Boxer".into()],
                zip_codes: vec!["10001".into(), "".into()],
                age_min: "2".into(),
                age_max: String::new(),
            },
        };

        let pairs = query.to_query_pairs();
        assert!(pairs.contains(&("from", "20".to_string())));
        assert!(pairs.contains(&("sort", "age:desc".to_string())));
        assert!(pairs.contains(&("ageMin", "2".to_string())));
        assert!(!pairs.iter().any(|(k, _)| *k == "ageMax"));

        let breeds: Vec<_> = pairs.iter().filter(|(k, _)| *k == "breeds").collect();
        assert_eq!(breeds.len(), 2);
        let zips: Vec<_> = pairs.iter().filter(|(k, _)| *k == "zipCodes").collect();
        assert_eq!(zips, vec![&("zipCodes", "10001".to_string())]);
    }

    #[test]
    fn test_match_response_empty_is_none() {
        let parsed: MatchResponse = serde_json::from_str(r#"{"match": ""}"#).unwrap();
        assert_eq!(parsed.id(), None);

        let parsed: MatchResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(parsed.id(), None);

        let parsed: MatchResponse = serde_json::from_str(r#"{"match": "d9"}"#).unwrap();
        assert_eq!(parsed.id(), Some("d9"));
    }

    #[test]
    fn test_search_page_wire_names() {
        let parsed: SearchPage =
            serde_json::from_str(r#"{"resultIds": ["d1", "d2"], "total": 2, "next": "x"}"#)
                .unwrap();
        assert_eq!(parsed.result_ids, vec!["d1", "d2"]);
        assert_eq!(parsed.total, 2);
    }

    #[test]
    fn test_page_size_bounds() {
        assert_eq!(PageSize::from_count(10), Some(PageSize::Ten));
        assert_eq!(PageSize::from_count(7), None);
        assert_eq!(PageSize::TwentyFive.larger(), PageSize::TwentyFive);
        assert_eq!(PageSize::Five.smaller(), PageSize::Five);
    }
}
