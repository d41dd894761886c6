//! Upstream title → addon protocol entities.
//!
//! Pure functions; the only place where catalog records are translated.
//! Missing upstream values become empty strings or empty lists.

use bioskop_core::manifest::ADDON_NAME;
use bioskop_core::types::{CatalogEntry, ContentType, FullMeta, StreamEntry};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::price::format_rupiah;
use crate::{Contributor, ContributorRole, UpstreamTitle};

/// Public site the playback links point at.
pub const SITE_URL: &str = "https://bioskoponline.com/";

/// Credits split by role, in upstream order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credits {
    pub cast: Vec<String>,
    pub writer: Vec<String>,
    pub director: Vec<String>,
}

/// Bucket contributors by role tag in a single pass. Unmatched roles are dropped.
pub fn classify_contributors(people: Vec<Contributor>) -> Credits {
    let mut credits = Credits::default();
    for person in people {
        let bucket = match person.role() {
            ContributorRole::Cast => &mut credits.cast,
            ContributorRole::Writer => &mut credits.writer,
            ContributorRole::Director => &mut credits.director,
            ContributorRole::Unmatched => continue,
        };
        bucket.push(person.name.unwrap_or_default());
    }
    credits
}

/// Catalog row for search results.
pub fn to_catalog_entry(title: UpstreamTitle) -> CatalogEntry {
    let images = title.images.unwrap_or_default();
    CatalogEntry {
        id: title.hashed_id.unwrap_or_default(),
        content_type: ContentType::Movie,
        name: title.name.unwrap_or_default(),
        poster: images.portrait.unwrap_or_default(),
        background: images.spotlight.unwrap_or_default(),
    }
}

/// Full metadata for `key`. `None` means the lookup failed and yields a stub
/// carrying only the requested id.
pub fn to_full_meta(title: Option<UpstreamTitle>, key: &str) -> FullMeta {
    let Some(title) = title else {
        return FullMeta::placeholder(key);
    };

    let images = title.images.unwrap_or_default();
    let credits = classify_contributors(title.people.unwrap_or_default());

    FullMeta {
        id: title.hashed_id.unwrap_or_else(|| key.to_string()),
        content_type: ContentType::Movie,
        name: title.name.unwrap_or_default(),
        poster: images.portrait.unwrap_or_default(),
        description: title.description.unwrap_or_default(),
        background: images.spotlight.unwrap_or_default(),
        // A missing duration renders as "0 min".
        runtime: format!("{} min", title.duration.unwrap_or(0)),
        release_info: title
            .release_date
            .as_deref()
            .map(release_year)
            .unwrap_or_default(),
        cast: credits.cast,
        writer: credits.writer,
        director: credits.director,
        genres: title
            .genres
            .into_iter()
            .flatten()
            .map(|g| g.name.unwrap_or_default())
            .collect(),
    }
}

/// Single playback link. The URL only depends on `key`, so it is built even
/// when the lookup failed (`title` is `None`).
pub fn to_stream_entry(title: Option<UpstreamTitle>, key: &str, site_url: &str) -> StreamEntry {
    let title_text = match title {
        Some(t) => {
            let name = t.name.unwrap_or_default();
            match t.price.and_then(|p| p.normal) {
                Some(normal) if normal > 0.0 => format!("{name}, {}", format_rupiah(normal)),
                _ => name,
            }
        }
        None => String::new(),
    };

    StreamEntry {
        name: ADDON_NAME.to_string(),
        title: title_text,
        external_url: format!("{}/film/{key}", site_url.trim_end_matches('/')),
    }
}

/// Four-digit year of an ISO date or date-time, or its leading digits.
pub fn release_year(date: &str) -> String {
    let date = date.trim();
    let year = DateTime::parse_from_rfc3339(date)
        .map(|d| d.year())
        .or_else(|_| NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S").map(|d| d.year()))
        .or_else(|_| NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S").map(|d| d.year()))
        .or_else(|_| NaiveDate::parse_from_str(date, "%Y-%m-%d").map(|d| d.year()));

    match year {
        Ok(y) => format!("{y:04}"),
        Err(_) => date
            .get(..4)
            .filter(|y| y.chars().all(|c| c.is_ascii_digit()))
            .unwrap_or_default()
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Genre, Price};
    use serde_json::json;

    fn person(name: &str, role: &str) -> Contributor {
        Contributor {
            id: None,
            name: Some(name.into()),
            role: Some(role.into()),
        }
    }

    fn avengers() -> UpstreamTitle {
        serde_json::from_value(json!({
            "hashed_id": "abc123",
            "name": "Avengers",
            "images": {
                "thumbnail": "t.jpg",
                "portrait": "p.jpg",
                "thumbnail_portrait": "tp.jpg",
                "spotlight": "s.jpg"
            },
            "description": "Earth's mightiest heroes.",
            "duration": 143,
            "release_date": "2012-04-25",
            "price": { "normal": 50000, "promo": null },
            "people": [
                { "id": 1, "name": "Robert Downey Jr.", "role": "Cast" },
                { "id": 2, "name": "Joss Whedon", "role": "Director" },
                { "id": 3, "name": "Zak Penn", "role": "Writer" },
                { "id": 4, "name": "Chris Evans", "role": "Cast" },
                { "id": 5, "name": "Kevin Feige", "role": "Producer" }
            ],
            "genres": [
                { "id": 1, "name": "Action" },
                { "id": 2, "name": "Sci-Fi" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn catalog_entry_from_search_hit() {
        let hit: UpstreamTitle = serde_json::from_value(json!({
            "hashed_id": "abc123",
            "name": "Avengers",
            "images": { "portrait": "p.jpg" }
        }))
        .unwrap();

        let entry = to_catalog_entry(hit);
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({
                "id": "abc123",
                "type": "movie",
                "name": "Avengers",
                "poster": "p.jpg",
                "background": ""
            })
        );
    }

    #[test]
    fn catalog_entry_without_images() {
        let entry = to_catalog_entry(UpstreamTitle {
            hashed_id: Some("k".into()),
            ..Default::default()
        });
        assert_eq!(entry.poster, "");
        assert_eq!(entry.background, "");
        assert_eq!(entry.name, "");
    }

    #[test]
    fn full_meta_maps_every_field() {
        let meta = to_full_meta(Some(avengers()), "abc123");
        assert_eq!(meta.id, "abc123");
        assert_eq!(meta.content_type, ContentType::Movie);
        assert_eq!(meta.name, "Avengers");
        assert_eq!(meta.poster, "p.jpg");
        assert_eq!(meta.background, "s.jpg");
        assert_eq!(meta.description, "Earth's mightiest heroes.");
        assert_eq!(meta.runtime, "143 min");
        assert_eq!(meta.release_info, "2012");
        assert_eq!(meta.cast, vec!["Robert Downey Jr.", "Chris Evans"]);
        assert_eq!(meta.writer, vec!["Zak Penn"]);
        assert_eq!(meta.director, vec!["Joss Whedon"]);
        assert_eq!(meta.genres, vec!["Action", "Sci-Fi"]);
    }

    #[test]
    fn full_meta_missing_duration_is_zero_minutes() {
        let meta = to_full_meta(Some(UpstreamTitle::default()), "k");
        assert_eq!(meta.runtime, "0 min");
        assert_eq!(meta.release_info, "");
        assert_eq!(meta.id, "k");
    }

    #[test]
    fn full_meta_lookup_failure_is_placeholder() {
        let meta = to_full_meta(None, "xyz");
        assert_eq!(meta, FullMeta::placeholder("xyz"));
        assert_eq!(meta.name, "");
        assert_eq!(meta.runtime, "");
        assert!(meta.cast.is_empty() && meta.genres.is_empty());
    }

    #[test]
    fn classification_is_a_partition() {
        let people = vec![
            person("A", "Cast"),
            person("B", "Writer"),
            person("C", "Director"),
            person("D", "cast"),
            person("E", "Composer"),
        ];
        let credits = classify_contributors(people);
        assert_eq!(credits.cast, vec!["A"]);
        assert_eq!(credits.writer, vec!["B"]);
        assert_eq!(credits.director, vec!["C"]);

        let all: Vec<&String> = credits
            .cast
            .iter()
            .chain(&credits.writer)
            .chain(&credits.director)
            .collect();
        assert_eq!(all.len(), 3);
        assert!(!all.iter().any(|n| n.as_str() == "D" || n.as_str() == "E"));
    }

    #[test]
    fn genres_keep_upstream_order() {
        let title = UpstreamTitle {
            genres: Some(vec![
                Genre { id: None, name: Some("Horror".into()) },
                Genre { id: None, name: Some("Drama".into()) },
                Genre { id: None, name: Some("Comedy".into()) },
            ]),
            ..Default::default()
        };
        assert_eq!(to_full_meta(Some(title), "k").genres, vec!["Horror", "Drama", "Comedy"]);
    }

    #[test]
    fn stream_title_carries_price() {
        let entry = to_stream_entry(Some(avengers()), "abc123", SITE_URL);
        assert_eq!(entry.title, "Avengers, Rp 50.000");
        assert_eq!(entry.external_url, "https://bioskoponline.com/film/abc123");
        assert_eq!(entry.name, ADDON_NAME);
    }

    #[test]
    fn stream_title_without_positive_price() {
        let mut title = avengers();
        title.price = Some(Price { normal: Some(0.0), promo: Some(10_000.0) });
        assert_eq!(to_stream_entry(Some(title.clone()), "abc123", SITE_URL).title, "Avengers");

        title.price = None;
        assert_eq!(to_stream_entry(Some(title), "abc123", SITE_URL).title, "Avengers");
    }

    #[test]
    fn stream_link_survives_failed_lookup() {
        let entry = to_stream_entry(None, "abc123", SITE_URL);
        assert_eq!(entry.title, "");
        assert_eq!(entry.external_url, "https://bioskoponline.com/film/abc123");
    }

    #[test]
    fn release_year_formats() {
        assert_eq!(release_year("2012-04-25"), "2012");
        assert_eq!(release_year("2019-12-05T00:00:00Z"), "2019");
        assert_eq!(release_year("2019-12-05T10:30:00+07:00"), "2019");
        assert_eq!(release_year("2021-01-01 08:00:00"), "2021");
        assert_eq!(release_year("2020"), "2020");
        assert_eq!(release_year("soon"), "");
    }
}
