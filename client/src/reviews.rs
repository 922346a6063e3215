use leptos::prelude::*;

use sixcities_shared::{
    REVIEW_COMMENT_CHARS, Review, ReviewDraft, latest_reviews, rating_width,
};

const STAR_ICON_USE: &str = r##"<use href="#icon-star"></use>"##;
const RATING_TITLES: [(u8, &str); 5] = [
    (5, "perfect"),
    (4, "good"),
    (3, "not bad"),
    (2, "badly"),
    (1, "terribly"),
];

#[component]
fn ReviewItem(review: Review) -> impl IntoView {
    let date_attr = review.date_attr();
    let date_label = review.date_label();
    let stars = rating_width(review.rating);

    view! {
        <li class="reviews__item">
            <div class="reviews__user user">
                <div class="reviews__avatar-wrapper user__avatar-wrapper">
                    <img
                        class="reviews__avatar user__avatar"
                        src=review.user.avatar_url
                        width="54"
                        height="54"
                        alt="Reviews avatar"
                    />
                </div>
                <span class="reviews__user-name">{review.user.name}</span>
            </div>
            <div class="reviews__info">
                <div class="reviews__rating rating">
                    <div class="reviews__stars rating__stars">
                        <span style:width=stars></span>
                        <span class="visually-hidden">"Rating"</span>
                    </div>
                </div>
                <p class="reviews__text">{review.comment}</p>
                <time class="reviews__time" datetime=date_attr>{date_label}</time>
            </div>
        </li>
    }
}

/// Review count plus the newest reviews. Zero reviews renders an empty list.
#[component]
pub fn ReviewsList(reviews: Vec<Review>) -> impl IntoView {
    let total = reviews.len();
    let shown: Vec<Review> = latest_reviews(&reviews).into_iter().cloned().collect();

    view! {
        <h2 class="reviews__title">
            "Reviews · "
            <span class="reviews__amount">{total}</span>
        </h2>
        <ul class="reviews__list">
            {shown
                .into_iter()
                .map(|review| view! { <ReviewItem review=review /> })
                .collect_view()}
        </ul>
    }
}

/// Review form with local draft state only; submitting does not leave the page.
#[component]
pub fn ReviewForm() -> impl IntoView {
    let draft = RwSignal::new(ReviewDraft::default());
    let min_chars = *REVIEW_COMMENT_CHARS.start();

    view! {
        <form
            class="reviews__form form"
            action="#"
            method="post"
            on:submit=move |ev| ev.prevent_default()
        >
            <label class="reviews__label form__label" for="review">"Your review"</label>
            <div class="reviews__rating-form form__rating">
                {RATING_TITLES
                    .into_iter()
                    .map(|(value, title)| {
                        let input_id = format!("{value}-stars");
                        view! {
                            <input
                                class="form__rating-input visually-hidden"
                                name="rating"
                                value=value.to_string()
                                id=input_id.clone()
                                type="radio"
                                prop:checked=move || draft.with(|d| d.rating == Some(value))
                                on:change=move |_| draft.update(|d| d.rating = Some(value))
                            />
                            <label
                                for=input_id
                                class="reviews__rating-label form__rating-label"
                                title=title
                            >
                                <svg
                                    class="form__star-image"
                                    width="37"
                                    height="33"
                                    inner_html=STAR_ICON_USE
                                ></svg>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            <textarea
                class="reviews__textarea form__textarea"
                id="review"
                name="review"
                placeholder="Tell how was your stay, what you like and what can be improved"
                prop:value=move || draft.with(|d| d.comment.clone())
                on:input=move |ev| draft.update(|d| d.comment = event_target_value(&ev))
            ></textarea>
            <div class="reviews__button-wrapper">
                <p class="reviews__help">
                    "To submit review please make sure to set "
                    <span class="reviews__star">"rating"</span>
                    " and describe your stay with at least "
                    <b class="reviews__text-amount">{format!("{min_chars} characters")}</b>
                    "."
                </p>
                <button
                    class="reviews__submit form__submit button"
                    type="submit"
                    disabled=move || !draft.with(ReviewDraft::is_submittable)
                >
                    "Submit"
                </button>
            </div>
        </form>
    }
}
