use leptos::prelude::*;

const SPINNER_SIZE_PX: u32 = 64;

#[component]
pub fn Spinner() -> impl IntoView {
    let size = format!("{SPINNER_SIZE_PX}px");
    view! {
        <div class="spinner__container" role="progressbar" aria-label="Loading">
            <div
                class="spinner"
                style:width=size.clone()
                style:height=size
                style="border-radius: 50%; border: 4px solid rgba(68,129,195,0.25); border-top-color: #4481c3; animation: spinner-rotate 0.8s linear infinite;"
            ></div>
        </div>
    }
}
