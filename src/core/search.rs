// Matching policy for a search request.
//
// A query that parses as YYYY-MM-DD matches by calendar date only. Anything else is a
// case-insensitive keyword looked up in title and description. One mode per query.

use chrono::NaiveDate;

use crate::core::event::{Event, parse_date};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    OnDate(NaiveDate),
    Keyword(String),
}

impl SearchQuery {
    pub fn parse(query: &str) -> Self {
        match parse_date(query) {
            Some(date) => SearchQuery::OnDate(date),
            None => SearchQuery::Keyword(query.to_lowercase()),
        }
    }

    pub fn matches(&self, event: &Event) -> bool {
        match self {
            // events with an unparsable date never match
            SearchQuery::OnDate(date) => event.parsed_date() == Some(*date),
            SearchQuery::Keyword(keyword) => {
                event.title.to_lowercase().contains(keyword.as_str())
                    || event.description.to_lowercase().contains(keyword.as_str())
            }
        }
    }
}
