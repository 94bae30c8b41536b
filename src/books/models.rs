//! Provider payload types and normalized book records.
//!
//! The upstream volumes payload is partial and inconsistent, so every
//! field is optional. Normalized records preserve that optionality:
//! a field absent upstream stays absent, never defaulted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Top-level volumes search response.
#[derive(Debug, Clone, Deserialize)]
pub struct VolumesResponse {
    pub items: Option<Vec<Volume>>,
}

/// A single volume record from the provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    pub volume_info: VolumeInfo,
}

/// Volume metadata. All fields optional per the provider schema.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub description: Option<String>,
    pub published_date: Option<String>,
    pub preview_link: Option<String>,
    pub image_links: Option<ImageLinks>,
}

/// Cover image links for a volume.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageLinks {
    pub thumbnail: Option<String>,
}

/// Normalized result of a book-or-author lookup.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_link: Option<String>,
}

impl BookRecord {
    pub fn from_volume(volume: Volume) -> Self {
        let info = volume.volume_info;
        Self {
            title: info.title,
            authors: info.authors,
            description: info.description,
            published_date: info.published_date,
            preview_link: info.preview_link,
        }
    }
}

/// One entry in an author bibliography. The author is already known,
/// so the record carries no author list or description.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorBook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl AuthorBook {
    pub fn from_volume(volume: Volume) -> Self {
        let info = volume.volume_info;
        Self {
            title: info.title,
            published_date: info.published_date,
            preview_link: info.preview_link,
            thumbnail: info.image_links.and_then(|l| l.thumbnail),
        }
    }
}

/// One entry in a similar-books result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarBook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl SimilarBook {
    pub fn from_volume(volume: Volume) -> Self {
        let info = volume.volume_info;
        Self {
            title: info.title,
            authors: info.authors,
            published_date: info.published_date,
            preview_link: info.preview_link,
            thumbnail: info.image_links.and_then(|l| l.thumbnail),
        }
    }
}

/// Parse a provider published date.
///
/// The provider emits full dates, year-month, or bare years (or arbitrary
/// text). Missing month/day default to 1.
pub fn parse_published_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    // YYYY-MM
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d") {
        return Some(date);
    }
    // YYYY
    if let Ok(year) = raw.parse::<i32>() {
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }

    None
}

/// Shape a similar-books result set.
///
/// Keeps the provider's relevance order untouched and takes the first
/// `limit` volumes.
pub fn shape_similar(mut volumes: Vec<Volume>, limit: usize) -> Vec<SimilarBook> {
    volumes.truncate(limit);
    volumes.into_iter().map(SimilarBook::from_volume).collect()
}

/// Sort volumes by published date, newest first.
///
/// Volumes without a parsable date sort after all dated ones. The sort is
/// stable, so ties keep the provider's order.
pub fn sort_newest_first(volumes: &mut [Volume]) {
    volumes.sort_by_cached_key(|v| {
        Reverse(
            v.volume_info
                .published_date
                .as_deref()
                .and_then(parse_published_date),
        )
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volume(title: &str, published_date: Option<&str>) -> Volume {
        Volume {
            volume_info: VolumeInfo {
                title: Some(title.to_string()),
                published_date: published_date.map(|d| d.to_string()),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_parse_full_date() {
        assert_eq!(
            parse_published_date("1965-08-01"),
            NaiveDate::from_ymd_opt(1965, 8, 1)
        );
    }

    #[test]
    fn test_parse_year_month() {
        assert_eq!(
            parse_published_date("2003-04"),
            NaiveDate::from_ymd_opt(2003, 4, 1)
        );
    }

    #[test]
    fn test_parse_bare_year() {
        assert_eq!(
            parse_published_date("1965"),
            NaiveDate::from_ymd_opt(1965, 1, 1)
        );
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_published_date("unknown"), None);
        assert_eq!(parse_published_date(""), None);
    }

    #[test]
    fn test_sort_newest_first() {
        let mut volumes = vec![
            volume("old", Some("2018-03-01")),
            volume("new", Some("2020-01-15")),
            volume("undated", None),
            volume("middle", Some("2019")),
        ];

        sort_newest_first(&mut volumes);

        let titles: Vec<_> = volumes
            .iter()
            .map(|v| v.volume_info.title.as_deref().unwrap())
            .collect();
        assert_eq!(titles, vec!["new", "middle", "old", "undated"]);
    }

    #[test]
    fn test_sort_undated_after_all_dated() {
        // Includes a pre-1970 date, which still outranks a missing one
        let mut volumes = vec![
            volume("undated", None),
            volume("garbage", Some("n.d.")),
            volume("ancient", Some("1965-08-01")),
        ];

        sort_newest_first(&mut volumes);

        let titles: Vec<_> = volumes
            .iter()
            .map(|v| v.volume_info.title.as_deref().unwrap())
            .collect();
        assert_eq!(titles, vec!["ancient", "undated", "garbage"]);
    }

    #[test]
    fn test_bibliography_limit_drops_undated_last() {
        // Three books dated 2020, 2018, and none; limit 2 keeps the dated pair
        let mut volumes = vec![
            volume("undated", None),
            volume("older", Some("2018")),
            volume("newest", Some("2020")),
        ];

        sort_newest_first(&mut volumes);
        volumes.truncate(2);

        let books: Vec<_> = volumes.into_iter().map(AuthorBook::from_volume).collect();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].title.as_deref(), Some("newest"));
        assert_eq!(books[1].title.as_deref(), Some("older"));
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut volumes = vec![
            volume("first", Some("2020")),
            volume("second", Some("2020")),
            volume("third", Some("2020")),
        ];

        sort_newest_first(&mut volumes);

        let titles: Vec<_> = volumes
            .iter()
            .map(|v| v.volume_info.title.as_deref().unwrap())
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_shape_similar_keeps_provider_order() {
        // Deliberately non-chronological: relevance order must survive
        let volumes = vec![
            volume("first", Some("2001")),
            volume("second", Some("2020-06-01")),
            volume("third", None),
            volume("fourth", Some("2015")),
        ];

        let books = shape_similar(volumes, 5);

        let titles: Vec<_> = books.iter().map(|b| b.title.as_deref().unwrap()).collect();
        assert_eq!(titles, vec!["first", "second", "third", "fourth"]);
    }

    #[test]
    fn test_shape_similar_respects_limit() {
        let volumes = vec![
            volume("first", Some("2001")),
            volume("second", Some("2020")),
            volume("third", Some("2010")),
        ];

        let books = shape_similar(volumes, 2);

        let titles: Vec<_> = books.iter().map(|b| b.title.as_deref().unwrap()).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn test_book_record_preserves_only_present_fields() {
        let payload = r#"{
            "volumeInfo": {
                "title": "Dune",
                "authors": ["Frank Herbert"],
                "publishedDate": "1965-08-01"
            }
        }"#;
        let volume: Volume = serde_json::from_str(payload).unwrap();
        let record = BookRecord::from_volume(volume);

        assert_eq!(record.title.as_deref(), Some("Dune"));
        assert_eq!(record.authors, Some(vec!["Frank Herbert".to_string()]));
        assert_eq!(record.published_date.as_deref(), Some("1965-08-01"));
        assert!(record.description.is_none());
        assert!(record.preview_link.is_none());

        // Absent fields must not appear in serialized output
        let json = serde_json::to_value(&record).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("description"));
        assert!(!obj.contains_key("previewLink"));
    }

    #[test]
    fn test_thumbnail_extraction() {
        let payload = r#"{
            "volumeInfo": {
                "title": "Hyperion",
                "imageLinks": { "thumbnail": "http://example.com/t.jpg" }
            }
        }"#;
        let volume: Volume = serde_json::from_str(payload).unwrap();
        let book = AuthorBook::from_volume(volume);
        assert_eq!(book.thumbnail.as_deref(), Some("http://example.com/t.jpg"));
    }

    #[test]
    fn test_volumes_response_without_items() {
        let response: VolumesResponse = serde_json::from_str(r#"{"kind": "books#volumes"}"#).unwrap();
        assert!(response.items.is_none());
    }
}
