use leptos::prelude::*;

use sixcities_shared::{OfferDetail, OfferId};

pub const NEAR_PLACES_PREFIX: &str = "near-places";
pub(crate) const BOOKMARK_ICON_USE: &str = r##"<use href="#icon-bookmark"></use>"##;

pub fn offer_href(id: &OfferId) -> String {
    format!("/offer/{}", urlencoding::encode(id.as_str()))
}

pub fn card_class(prefix: &str) -> String {
    format!("{prefix}__card place-card")
}

pub fn image_wrapper_class(prefix: &str) -> String {
    format!("{prefix}__image-wrapper place-card__image-wrapper")
}

/// Hover wiring for one card: entering reports the card's own id, leaving
/// reports nothing.
#[derive(Clone)]
pub struct CardHandlers {
    id: OfferId,
    on_enter: Callback<OfferId>,
    on_leave: Callback<()>,
}

impl CardHandlers {
    pub fn new(id: OfferId, on_enter: Callback<OfferId>, on_leave: Callback<()>) -> Self {
        Self {
            id,
            on_enter,
            on_leave,
        }
    }

    pub fn enter(&self) {
        self.on_enter.run(self.id.clone());
    }

    pub fn leave(&self) {
        self.on_leave.run(());
    }
}

/// One entry per listing, in collection order.
pub fn card_entries(
    offers: Vec<OfferDetail>,
    on_enter: Callback<OfferId>,
    on_leave: Callback<()>,
) -> Vec<(OfferDetail, CardHandlers)> {
    offers
        .into_iter()
        .map(|offer| {
            let handlers = CardHandlers::new(offer.id.clone(), on_enter, on_leave);
            (offer, handlers)
        })
        .collect()
}

/// Listing summary card.
#[component]
pub fn OfferCard(
    offer: OfferDetail,
    prefix: &'static str,
    handlers: CardHandlers,
) -> impl IntoView {
    let enter = handlers.clone();
    let href = offer_href(&offer.id);
    let bookmark_class = if offer.is_favorite {
        "place-card__bookmark-button place-card__bookmark-button--active button"
    } else {
        "place-card__bookmark-button button"
    };
    let preview = offer.preview_image().unwrap_or_default().to_owned();

    view! {
        <article
            class=card_class(prefix)
            on:mouseenter=move |_| enter.enter()
            on:mouseleave=move |_| handlers.leave()
        >
            {offer.is_premium.then(|| view! {
                <div class="place-card__mark">
                    <span>"Premium"</span>
                </div>
            })}
            <div class=image_wrapper_class(prefix)>
                <a href=href.clone()>
                    <img class="place-card__image" src=preview width="260" height="200" alt="Place image" />
                </a>
            </div>
            <div class="place-card__info">
                <div class="place-card__price-wrapper">
                    <div class="place-card__price">
                        <b class="place-card__price-value">{format!("€{}", offer.price)}</b>
                        <span class="place-card__price-text">"/\u{a0}night"</span>
                    </div>
                    <button class=bookmark_class type="button">
                        <svg
                            class="place-card__bookmark-icon"
                            width="18"
                            height="19"
                            inner_html=BOOKMARK_ICON_USE
                        ></svg>
                        <span class="visually-hidden">{offer.bookmark_label()}</span>
                    </button>
                </div>
                <div class="place-card__rating rating">
                    <div class="place-card__stars rating__stars">
                        <span style:width=offer.rating_width()></span>
                        <span class="visually-hidden">"Rating"</span>
                    </div>
                </div>
                <h2 class="place-card__name">
                    <a href=href>{offer.title.clone()}</a>
                </h2>
                <p class="place-card__type">{offer.kind.as_str()}</p>
            </div>
        </article>
    }
}

/// "Other places in the neighbourhood". An empty list renders no cards.
#[component]
pub fn NearbyList(
    offers: Vec<OfferDetail>,
    on_enter: Callback<OfferId>,
    on_leave: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="near-places__list places__list">
            {card_entries(offers, on_enter, on_leave)
                .into_iter()
                .map(|(offer, handlers)| {
                    view! { <OfferCard offer=offer prefix=NEAR_PLACES_PREFIX handlers=handlers /> }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use leptos::prelude::*;
    use sixcities_shared::{City, Host, Location, OfferDetail, OfferId, OfferType};

    use super::{NEAR_PLACES_PREFIX, card_class, card_entries, image_wrapper_class, offer_href};

    fn offer(id: &str) -> OfferDetail {
        OfferDetail {
            id: OfferId::from(id),
            title: format!("Place {id}"),
            kind: OfferType::Apartment,
            price: 120,
            rating: 4.2,
            is_premium: false,
            is_favorite: false,
            bedrooms: 2,
            max_adults: 3,
            goods: Vec::new(),
            host: Host {
                name: "Angelina".to_string(),
                avatar_url: "img/avatar-angelina.jpg".to_string(),
                is_pro: true,
            },
            description: String::new(),
            images: Vec::new(),
            city: City {
                name: "Amsterdam".to_string(),
                location: Location {
                    latitude: 52.370216,
                    longitude: 4.895168,
                    zoom: 10,
                },
            },
            location: Location {
                latitude: 52.36,
                longitude: 4.85,
                zoom: 8,
            },
        }
    }

    type Log = Arc<Mutex<Vec<String>>>;

    fn recording_callbacks() -> (Log, Callback<OfferId>, Callback<()>) {
        let log: Log = Arc::default();
        let enter_log = Arc::clone(&log);
        let leave_log = Arc::clone(&log);
        let on_enter = Callback::new(move |id: OfferId| {
            enter_log.lock().expect("log").push(format!("enter {id}"));
        });
        let on_leave = Callback::new(move |()| {
            leave_log.lock().expect("log").push("leave".to_string());
        });
        (log, on_enter, on_leave)
    }

    #[test]
    fn entering_a_card_reports_its_own_id() {
        let owner = Owner::new();
        owner.set();
        let (log, on_enter, on_leave) = recording_callbacks();

        let entries = card_entries(vec![offer("1"), offer("2")], on_enter, on_leave);
        entries[0].1.enter();

        assert_eq!(*log.lock().expect("log"), vec!["enter 1"]);
    }

    #[test]
    fn leaving_any_card_reports_leave_once() {
        let owner = Owner::new();
        owner.set();
        let (log, on_enter, on_leave) = recording_callbacks();

        let entries = card_entries(vec![offer("1"), offer("2")], on_enter, on_leave);
        entries[0].1.enter();
        entries[1].1.leave();

        assert_eq!(*log.lock().expect("log"), vec!["enter 1", "leave"]);
    }

    #[test]
    fn empty_collection_yields_no_cards() {
        let owner = Owner::new();
        owner.set();
        let (log, on_enter, on_leave) = recording_callbacks();

        assert!(card_entries(Vec::new(), on_enter, on_leave).is_empty());
        assert!(log.lock().expect("log").is_empty());
    }

    #[test]
    fn entries_keep_collection_order() {
        let owner = Owner::new();
        owner.set();
        let (_log, on_enter, on_leave) = recording_callbacks();

        let ids: Vec<String> = card_entries(vec![offer("3"), offer("1")], on_enter, on_leave)
            .into_iter()
            .map(|(offer, _)| offer.id.to_string())
            .collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn card_classes_carry_prefix() {
        assert_eq!(card_class(NEAR_PLACES_PREFIX), "near-places__card place-card");
        assert_eq!(
            image_wrapper_class(NEAR_PLACES_PREFIX),
            "near-places__image-wrapper place-card__image-wrapper"
        );
    }

    #[test]
    fn href_points_at_offer_route() {
        assert_eq!(offer_href(&OfferId::from("7")), "/offer/7");
        assert_eq!(offer_href(&OfferId::from("a b")), "/offer/a%20b");
    }
}
