use apogee_core::Visibility;
use apogee_core::model::RocketCatalog;
use apogee_core::view::{rocket_card_html, sort_rockets_newest};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub mode: Visibility,
}

/// The rocket catalog, newest build first. Cards are rebuilt per render so
/// unlocking private mode reveals the private notes without a re-fetch.
#[function_component(RocketsPage)]
pub fn rockets_page(p: &Props) -> Html {
    let catalog = use_state(RocketCatalog::empty);

    #[cfg(target_arch = "wasm32")]
    {
        let catalog = catalog.clone();
        use_effect_with((), move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                catalog.set(crate::data::fetch_catalog().await);
            });
            || {}
        });
    }

    let rockets = sort_rockets_newest(&catalog.rockets);
    html! {
        <div class="page rockets-page">
            <div class="container">
                <h1 class="page-title">{ "Our Rockets" }</h1>
                <section id="rocket-grid" class="rocket-grid">
                    { for rockets.iter().map(|rocket| {
                        Html::from_html_unchecked(rocket_card_html(rocket, p.mode).into())
                    }) }
                </section>
            </div>
        </div>
    }
}
