use leptos::prelude::*;

use sixcities_shared::{
    DetailPage, DetailView, HoverSelection, Host, OfferDetail, OfferId, Point, SameCityNearby,
};

use crate::api::Catalog;
use crate::map_view::MapView;
use crate::nearby_list::{BOOKMARK_ICON_USE, NearbyList};
use crate::reviews::{ReviewForm, ReviewsList};
use crate::routing::{BrowserNavigator, CurrentRoute};

fn avatar_wrapper_class(host: &Host) -> &'static str {
    if host.is_pro {
        "offer__avatar-wrapper offer__avatar-wrapper--pro user__avatar-wrapper"
    } else {
        "offer__avatar-wrapper user__avatar-wrapper"
    }
}

fn bookmark_class(offer: &OfferDetail) -> &'static str {
    if offer.is_favorite {
        "offer__bookmark-button offer__bookmark-button--active button"
    } else {
        "offer__bookmark-button button"
    }
}

/// Detail page controller. Resolves the focal listing from the route id,
/// owns the hover selection, and redirects to the not-found route when the
/// id matches nothing.
#[component]
pub fn OfferPage(offer_id: String) -> impl IntoView {
    let catalog: RwSignal<Catalog> = expect_context();
    let CurrentRoute(route) = expect_context();
    let navigator = BrowserNavigator::new(route);
    let query = SameCityNearby::default();

    let page = Memo::new(move |_| {
        catalog.with(|catalog| {
            DetailPage::resolve(&catalog.offers, &catalog.reviews, &offer_id, &query)
        })
    });

    let selection = RwSignal::new(HoverSelection::new());

    // A new collection can drop the hovered listing; never keep a stale highlight.
    Effect::new(move || {
        page.with(|page| {
            let points: &[Point] = match page {
                DetailPage::Found(view) => &view.points,
                DetailPage::NotFound => &[],
            };
            let mut next = selection.get_untracked();
            if next.retain_in(points) {
                selection.set(next);
            }
        });
    });

    move || match page.get().enter(&navigator) {
        Some(detail) => view! { <OfferDetails detail=detail selection=selection /> }.into_any(),
        None => ().into_any(),
    }
}

#[component]
fn OfferGallery(images: Vec<String>, alt: String) -> impl IntoView {
    view! {
        <div class="offer__gallery">
            {images
                .into_iter()
                .map(|src| {
                    view! {
                        <div class="offer__image-wrapper">
                            <img class="offer__image" src=src alt=alt.clone() />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn OfferHost(host: Host, description: String) -> impl IntoView {
    view! {
        <div class="offer__host">
            <h2 class="offer__host-title">"Meet the host"</h2>
            <div class="offer__host-user user">
                <div class=avatar_wrapper_class(&host)>
                    <img
                        class="offer__avatar user__avatar"
                        src=host.avatar_url.clone()
                        width="74"
                        height="74"
                        alt="Host avatar"
                    />
                </div>
                <span class="offer__user-name">{host.name.clone()}</span>
                <span class="offer__user-status">{host.status_label()}</span>
            </div>
            <div class="offer__description">
                <p class="offer__text">{description}</p>
            </div>
        </div>
    }
}

#[component]
fn OfferDetails(detail: DetailView, selection: RwSignal<HoverSelection>) -> impl IntoView {
    let DetailView {
        offer,
        reviews,
        nearby,
        ..
    } = detail.clone();
    let detail = StoredValue::new(detail);

    let map_request = Memo::new(move |_| {
        detail.with_value(|detail| selection.with(|selection| detail.map_request(selection)))
    });

    let on_enter = Callback::new(move |id: OfferId| {
        detail.with_value(|detail| {
            selection.maybe_update(|selection| {
                let before = selection.clone();
                detail.on_card_enter(selection, &id);
                *selection != before
            });
        });
    });
    let on_leave = Callback::new(move |()| {
        detail.with_value(|detail| {
            selection.maybe_update(|selection| {
                let had_highlight = selection.highlighted().is_some();
                detail.on_card_leave(selection);
                had_highlight
            });
        });
    });

    view! {
        <div class="page">
            <main class="page__main page__main--offer">
                <section class="offer">
                    <div class="offer__gallery-container container">
                        <OfferGallery
                            images=offer.gallery_images().to_vec()
                            alt=offer.title.clone()
                        />
                    </div>
                    <div class="offer__container container">
                        <div class="offer__wrapper">
                            {offer.is_premium.then(|| view! {
                                <div class="offer__mark">
                                    <span>"Premium"</span>
                                </div>
                            })}
                            <div class="offer__name-wrapper">
                                <h1 class="offer__name">{offer.title.clone()}</h1>
                                <button class=bookmark_class(&offer) type="button">
                                    <svg
                                        class="offer__bookmark-icon"
                                        width="31"
                                        height="33"
                                        inner_html=BOOKMARK_ICON_USE
                                    ></svg>
                                    <span class="visually-hidden">{offer.bookmark_label()}</span>
                                </button>
                            </div>
                            <div class="offer__rating rating">
                                <div class="offer__stars rating__stars">
                                    <span style:width=offer.rating_width()></span>
                                    <span class="visually-hidden">"Rating"</span>
                                </div>
                                <span class="offer__rating-value rating__value">
                                    {offer.rating.to_string()}
                                </span>
                            </div>
                            <ul class="offer__features">
                                <li class="offer__feature offer__feature--entire">
                                    {offer.type_label()}
                                </li>
                                <li class="offer__feature offer__feature--bedrooms">
                                    {offer.bedrooms_label()}
                                </li>
                                <li class="offer__feature offer__feature--adults">
                                    {offer.adults_label()}
                                </li>
                            </ul>
                            <div class="offer__price">
                                <b class="offer__price-value">{format!("€{}", offer.price)}</b>
                                <span class="offer__price-text">"\u{a0}night"</span>
                            </div>
                            <div class="offer__inside">
                                <h2 class="offer__inside-title">"What's inside"</h2>
                                <ul class="offer__inside-list">
                                    {offer
                                        .goods
                                        .iter()
                                        .map(|good| view! {
                                            <li class="offer__inside-item">{good.clone()}</li>
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                            <OfferHost host=offer.host.clone() description=offer.description.clone() />
                            <section class="offer__reviews reviews">
                                <ReviewsList reviews=reviews />
                                <ReviewForm />
                            </section>
                        </div>
                    </div>
                </section>
                <div class="container">
                    <section class="near-places places">
                        <MapView request=map_request />
                        <h2 class="near-places__title">
                            "Other places in the neighbourhood"
                        </h2>
                        <NearbyList offers=nearby on_enter=on_enter on_leave=on_leave />
                    </section>
                </div>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use sixcities_shared::{City, Host, Location, OfferDetail, OfferId, OfferType};

    use super::{avatar_wrapper_class, bookmark_class};

    fn offer(is_favorite: bool, is_pro: bool) -> OfferDetail {
        OfferDetail {
            id: OfferId::from("1"),
            title: "Wood and stone place".to_string(),
            kind: OfferType::Room,
            price: 80,
            rating: 4.0,
            is_premium: false,
            is_favorite,
            bedrooms: 1,
            max_adults: 2,
            goods: Vec::new(),
            host: Host {
                name: "Max".to_string(),
                avatar_url: "img/avatar-max.jpg".to_string(),
                is_pro,
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

    #[test]
    fn bookmark_button_reflects_favorite() {
        assert_eq!(
            bookmark_class(&offer(true, false)),
            "offer__bookmark-button offer__bookmark-button--active button"
        );
        assert_eq!(bookmark_class(&offer(false, false)), "offer__bookmark-button button");
    }

    #[test]
    fn pro_hosts_get_pro_avatar_frame() {
        assert!(avatar_wrapper_class(&offer(false, true).host).contains("--pro"));
        assert!(!avatar_wrapper_class(&offer(false, false).host).contains("--pro"));
    }
}
