pub mod bioskop;
pub mod lenient;
pub mod mapper;
pub mod price;
pub mod provider;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("upstream returned code {code}: {message}")]
    Status { code: i64, message: String },
    #[error("not found")]
    NotFound,
}

/// Response wrapper used by every catalog API endpoint.
///
/// The API is known to answer `code: 200` with `data: null`, so both have to
/// be checked before the payload is trusted.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default, deserialize_with = "lenient::int")]
    pub code: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub message: Option<String>,
    pub data: Option<T>,
}

pub const SUCCESS_CODE: i64 = 200;

impl<T> Envelope<T> {
    pub fn into_data(self) -> Result<T, CatalogError> {
        if self.code != Some(SUCCESS_CODE) {
            return Err(CatalogError::Status {
                code: self.code.unwrap_or_default(),
                message: self.message.unwrap_or_default(),
            });
        }
        self.data.ok_or(CatalogError::NotFound)
    }
}

/// A title record as the catalog API returns it. Any field may be missing,
/// `null` or of an unexpected type; all of those decode as `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpstreamTitle {
    #[serde(default, deserialize_with = "lenient::string")]
    pub hashed_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub images: Option<Images>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: Option<String>,
    /// Minutes.
    #[serde(default, deserialize_with = "lenient::int")]
    pub duration: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub price: Option<Price>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub people: Option<Vec<Contributor>>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub genres: Option<Vec<Genre>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Images {
    #[serde(default, deserialize_with = "lenient::string")]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub portrait: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub thumbnail_portrait: Option<String>,
    /// Wide artwork, used as the background.
    #[serde(default, deserialize_with = "lenient::string")]
    pub spotlight: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Price {
    #[serde(default, deserialize_with = "lenient::float")]
    pub normal: Option<f64>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub promo: Option<f64>,
}

/// Numeric or string identifier; the API is not consistent about which.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Int(i64),
    Str(String),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Contributor {
    #[serde(default, deserialize_with = "lenient::object")]
    pub id: Option<RawId>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub role: Option<String>,
}

impl Contributor {
    pub fn role(&self) -> ContributorRole {
        self.role
            .as_deref()
            .map_or(ContributorRole::Unmatched, ContributorRole::from_tag)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Genre {
    #[serde(default, deserialize_with = "lenient::object")]
    pub id: Option<RawId>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
}

/// Credit bucket a contributor lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContributorRole {
    Cast,
    Writer,
    Director,
    /// Any tag outside the three above; such contributors are dropped.
    Unmatched,
}

impl ContributorRole {
    /// Case-exact match on the upstream role tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Cast" => Self::Cast,
            "Writer" => Self::Writer,
            "Director" => Self::Director,
            _ => Self::Unmatched,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_success_yields_data() {
        let env: Envelope<Vec<UpstreamTitle>> = serde_json::from_value(json!({
            "code": 200,
            "message": "OK",
            "data": [{ "hashed_id": "abc123", "name": "Avengers", "images": { "portrait": "p.jpg" } }]
        }))
        .unwrap();

        let data = env.into_data().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].hashed_id.as_deref(), Some("abc123"));
        assert_eq!(
            data[0].images.as_ref().and_then(|i| i.portrait.as_deref()),
            Some("p.jpg")
        );
    }

    #[test]
    fn envelope_success_with_null_data_is_not_found() {
        let env: Envelope<UpstreamTitle> =
            serde_json::from_value(json!({ "code": 200, "message": "OK", "data": null })).unwrap();
        assert!(matches!(env.into_data(), Err(CatalogError::NotFound)));
    }

    #[test]
    fn envelope_non_success_code_is_status_error() {
        let env: Envelope<UpstreamTitle> =
            serde_json::from_value(json!({ "code": 404, "message": "Not Found" })).unwrap();
        match env.into_data() {
            Err(CatalogError::Status { code, message }) => {
                assert_eq!(code, 404);
                assert_eq!(message, "Not Found");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn title_tolerates_nulls_everywhere() {
        let title: UpstreamTitle = serde_json::from_value(json!({
            "hashed_id": "x",
            "name": null,
            "images": null,
            "price": { "normal": null },
            "people": null,
            "genres": [{ "id": 3, "name": "Drama" }]
        }))
        .unwrap();
        assert_eq!(title.name, None);
        assert_eq!(title.price.unwrap().normal, None);
        assert_eq!(title.genres.unwrap()[0].id, Some(RawId::Int(3)));
    }

    #[test]
    fn mistyped_hit_does_not_drop_its_siblings() {
        let env: Envelope<Vec<serde_json::Value>> = serde_json::from_value(json!({
            "code": 200,
            "data": [
                { "hashed_id": "a", "name": "Good", "duration": 95 },
                { "hashed_id": "b", "name": "Odd", "duration": "90", "images": "none" },
                "not a title",
                { "hashed_id": "c", "name": "Also good", "people": [{ "name": "X", "role": ["Cast"] }] }
            ]
        }))
        .unwrap();

        let titles = lenient::decode_items::<UpstreamTitle>(env.into_data().unwrap());
        let ids: Vec<_> = titles.iter().filter_map(|t| t.hashed_id.as_deref()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(titles[1].duration, Some(90));
        assert_eq!(titles[1].images, None);
        assert_eq!(titles[2].people.as_ref().unwrap()[0].role, None);
    }

    #[test]
    fn detail_with_string_price_keeps_its_fields() {
        let env: Envelope<UpstreamTitle> = serde_json::from_value(json!({
            "code": "200",
            "data": { "hashed_id": "abc123", "name": "Avengers", "price": { "normal": "50000" } }
        }))
        .unwrap();

        let title = env.into_data().unwrap();
        assert_eq!(title.name.as_deref(), Some("Avengers"));
        assert_eq!(title.price.unwrap().normal, Some(50_000.0));
    }

    #[test]
    fn role_tags_match_case_exactly() {
        assert_eq!(ContributorRole::from_tag("Cast"), ContributorRole::Cast);
        assert_eq!(ContributorRole::from_tag("Writer"), ContributorRole::Writer);
        assert_eq!(ContributorRole::from_tag("Director"), ContributorRole::Director);
        assert_eq!(ContributorRole::from_tag("cast"), ContributorRole::Unmatched);
        assert_eq!(ContributorRole::from_tag("Producer"), ContributorRole::Unmatched);

        let nameless = Contributor::default();
        assert_eq!(nameless.role(), ContributorRole::Unmatched);
    }
}
