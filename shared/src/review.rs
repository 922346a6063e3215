use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::offer::OfferId;

pub const REVIEWS_SHOWN_MAX: usize = 10;
pub const REVIEW_COMMENT_CHARS: RangeInclusive<usize> = 50..=300;
pub const REVIEW_RATING: RangeInclusive<u8> = 1..=5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUser {
    pub name: String,
    pub avatar_url: String,
    #[serde(default)]
    pub is_pro: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub date: DateTime<Utc>,
    pub user: ReviewUser,
    pub comment: String,
    pub rating: f64,
}

impl Review {
    /// Human-readable month, e.g. "April 2019".
    pub fn date_label(&self) -> String {
        self.date.format("%B %Y").to_string()
    }

    /// Value for the `<time datetime>` attribute.
    pub fn date_attr(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

pub type ReviewsMap = BTreeMap<OfferId, Vec<Review>>;

/// Reviews for one listing. A listing without an entry has no reviews.
pub fn reviews_for<'a>(reviews: &'a ReviewsMap, id: &OfferId) -> &'a [Review] {
    reviews.get(id).map(Vec::as_slice).unwrap_or(&[])
}

/// Newest first, capped at `REVIEWS_SHOWN_MAX`. Equal dates keep their input order.
pub fn latest_reviews(reviews: &[Review]) -> Vec<&Review> {
    let mut sorted: Vec<&Review> = reviews.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(REVIEWS_SHOWN_MAX);
    sorted
}

/// Local state of the review form. Submission itself is handled elsewhere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewDraft {
    pub rating: Option<u8>,
    pub comment: String,
}

impl ReviewDraft {
    pub fn is_submittable(&self) -> bool {
        let rating_ok = self.rating.is_some_and(|r| REVIEW_RATING.contains(&r));
        rating_ok && REVIEW_COMMENT_CHARS.contains(&self.comment.chars().count())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{
        REVIEWS_SHOWN_MAX, Review, ReviewDraft, ReviewUser, ReviewsMap, latest_reviews,
        reviews_for,
    };
    use crate::offer::OfferId;

    fn review(id: &str, day: u32) -> Review {
        Review {
            id: id.to_string(),
            date: Utc
                .with_ymd_and_hms(2019, 4, day, 12, 0, 0)
                .single()
                .expect("valid date"),
            user: ReviewUser {
                name: "Max".to_string(),
                avatar_url: "img/avatar-max.jpg".to_string(),
                is_pro: false,
            },
            comment: "The house is very good, very happy, hygienic and simple living conditions around it are also very good.".to_string(),
            rating: 4.0,
        }
    }

    #[test]
    fn missing_key_yields_empty_slice() {
        let reviews = ReviewsMap::new();
        assert!(reviews_for(&reviews, &OfferId::from("k")).is_empty());
    }

    #[test]
    fn present_key_yields_its_sequence() {
        let mut reviews = ReviewsMap::new();
        reviews.insert(OfferId::from("1"), vec![review("a", 1), review("b", 2)]);
        let found = reviews_for(&reviews, &OfferId::from("1"));
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].id, "a");
    }

    #[test]
    fn reviews_map_parses_json_object() {
        let json = r#"{"3": [{
            "id": "r1",
            "date": "2019-05-08T14:13:56.569Z",
            "user": {"name": "Isaac", "avatarUrl": "img/avatar.jpg", "isPro": true},
            "comment": "Quiet street.",
            "rating": 3
        }]}"#;
        let reviews: ReviewsMap = serde_json::from_str(json).expect("reviews payload");
        let found = reviews_for(&reviews, &OfferId::from("3"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].date_label(), "May 2019");
        assert_eq!(found[0].date_attr(), "2019-05-08");
    }

    #[test]
    fn latest_reviews_sorts_newest_first_and_caps() {
        let reviews: Vec<Review> = (1..=12).map(|day| review(&day.to_string(), day)).collect();
        let latest = latest_reviews(&reviews);
        assert_eq!(latest.len(), REVIEWS_SHOWN_MAX);
        assert_eq!(latest[0].id, "12");
        assert_eq!(latest[REVIEWS_SHOWN_MAX - 1].id, "3");
    }

    #[test]
    fn draft_requires_rating_and_comment_length() {
        let mut draft = ReviewDraft::default();
        assert!(!draft.is_submittable());

        draft.comment = "x".repeat(50);
        assert!(!draft.is_submittable());

        draft.rating = Some(5);
        assert!(draft.is_submittable());

        draft.comment = "x".repeat(301);
        assert!(!draft.is_submittable());

        draft.comment = "x".repeat(300);
        draft.rating = Some(0);
        assert!(!draft.is_submittable());
    }
}
