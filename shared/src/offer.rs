use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

pub const GALLERY_MAX_IMAGES: usize = 6;

/// Listing identifier. Serialized as a string; deserializes from either a JSON
/// string or a JSON number so route comparison always works on the string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct OfferId(String);

impl OfferId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// String-normalized equality against a raw route parameter.
    pub fn matches_route(&self, route_id: &str) -> bool {
        self.0 == route_id
    }
}

impl fmt::Display for OfferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OfferId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl<'de> Deserialize<'de> for OfferId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self(text),
            RawId::Number(number) => Self(number.to_string()),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    pub name: String,
    pub avatar_url: String,
    #[serde(default)]
    pub is_pro: bool,
}

impl Host {
    pub fn status_label(&self) -> &'static str {
        if self.is_pro { "Pro" } else { "Non-Pro" }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferType {
    Apartment,
    Room,
    House,
    Hotel,
}

impl OfferType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Apartment => "apartment",
            Self::Room => "room",
            Self::House => "house",
            Self::Hotel => "hotel",
        }
    }
}

/// Full listing record as supplied by the data store. Never mutated client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferDetail {
    pub id: OfferId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: OfferType,
    pub price: u32,
    pub rating: f64,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub is_favorite: bool,
    pub bedrooms: u32,
    pub max_adults: u32,
    #[serde(default)]
    pub goods: Vec<String>,
    pub host: Host,
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub city: City,
    pub location: Location,
}

impl OfferDetail {
    /// CSS width for the star strip: 20% per rating point, clamped to 0..=100.
    pub fn rating_width(&self) -> String {
        rating_width(self.rating)
    }

    pub fn type_label(&self) -> String {
        self.kind.as_str().to_uppercase()
    }

    pub fn bedrooms_label(&self) -> String {
        match self.bedrooms {
            1 => "1 Bedroom".to_string(),
            n => format!("{n} Bedrooms"),
        }
    }

    pub fn adults_label(&self) -> String {
        match self.max_adults {
            1 => "Max 1 adult".to_string(),
            n => format!("Max {n} adults"),
        }
    }

    pub fn bookmark_label(&self) -> &'static str {
        if self.is_favorite {
            "In bookmarks"
        } else {
            "To bookmarks"
        }
    }

    pub fn gallery_images(&self) -> &[String] {
        let end = self.images.len().min(GALLERY_MAX_IMAGES);
        &self.images[..end]
    }

    /// First image, used as the card preview.
    pub fn preview_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

pub fn rating_width(rating: f64) -> String {
    let percent = (rating * 20.0).clamp(0.0, 100.0);
    format!("{}%", (percent * 10.0).round() / 10.0)
}


#[cfg(test)]
mod tests {
    use super::fixtures::offer;
    use super::{GALLERY_MAX_IMAGES, OfferDetail, OfferId, rating_width};

    #[test]
    fn offer_id_deserializes_from_string_or_number() {
        let text: OfferId = serde_json::from_str(r#""42""#).expect("string id");
        let number: OfferId = serde_json::from_str("42").expect("numeric id");
        assert_eq!(text, number);
        assert!(number.matches_route("42"));
        assert!(!number.matches_route("042"));
    }

    #[test]
    fn offer_detail_parses_camel_case_payload() {
        let json = r#"{
            "id": 7,
            "title": "Canal View Prinsengracht",
            "type": "hotel",
            "price": 320,
            "rating": 4.8,
            "isPremium": true,
            "isFavorite": false,
            "bedrooms": 1,
            "maxAdults": 2,
            "goods": ["Heating", "Kitchen"],
            "host": { "name": "Max", "avatarUrl": "img/avatar-max.jpg", "isPro": false },
            "description": "Nice.",
            "images": ["img/1.jpg"],
            "city": { "name": "Amsterdam", "location": { "latitude": 52.37, "longitude": 4.89, "zoom": 10 } },
            "location": { "latitude": 52.36, "longitude": 4.85, "zoom": 8 }
        }"#;
        let offer: OfferDetail = serde_json::from_str(json).expect("offer payload");
        assert_eq!(offer.id.as_str(), "7");
        assert_eq!(offer.type_label(), "HOTEL");
        assert_eq!(offer.bedrooms_label(), "1 Bedroom");
        assert_eq!(offer.adults_label(), "Max 2 adults");
        assert_eq!(offer.host.status_label(), "Non-Pro");
        assert_eq!(offer.rating_width(), "96%");
    }

    #[test]
    fn rating_width_is_clamped() {
        assert_eq!(rating_width(0.0), "0%");
        assert_eq!(rating_width(3.0), "60%");
        assert_eq!(rating_width(7.5), "100%");
        assert_eq!(rating_width(-1.0), "0%");
    }

    #[test]
    fn gallery_is_capped() {
        let mut offer = offer("1", "Amsterdam");
        offer.images = (0..10).map(|i| format!("img/{i}.jpg")).collect();
        assert_eq!(offer.gallery_images().len(), GALLERY_MAX_IMAGES);
        assert_eq!(offer.preview_image(), Some("img/0.jpg"));
    }

    #[test]
    fn bookmark_label_follows_favorite_flag() {
        let mut offer = offer("1", "Amsterdam");
        assert_eq!(offer.bookmark_label(), "To bookmarks");
        offer.is_favorite = true;
        assert_eq!(offer.bookmark_label(), "In bookmarks");
    }
}
