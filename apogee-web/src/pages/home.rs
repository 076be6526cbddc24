use crate::components::lightbox::Lightbox;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

const GALLERY: [(&str, &str); 4] = [
    (
        "launch day photos/state-championship-2025.jpg",
        "State championship winning flight",
    ),
    (
        "launch day photos/tarc-qualifier-2025.jpg",
        "TARC qualification attempt",
    ),
    (
        "launch day photos/record-altitude-2026.jpg",
        "Club altitude record flight",
    ),
    ("rocket images/green-thunder.jpg", "Green Thunder on the pad"),
];

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let lightbox = use_state(|| None::<(AttrValue, AttrValue)>);
    let on_close = {
        let lightbox = lightbox.clone();
        Callback::from(move |()| lightbox.set(None))
    };

    let gallery = GALLERY.iter().map(|(src, alt)| {
        let src = AttrValue::from(*src);
        let alt = AttrValue::from(*alt);
        let onclick = {
            let lightbox = lightbox.clone();
            let src = src.clone();
            let alt = alt.clone();
            Callback::from(move |_| lightbox.set(Some((src.clone(), alt.clone()))))
        };
        html! {
            <figure class="gallery-item" {onclick}>
                <img {src} {alt} loading="lazy" />
            </figure>
        }
    });

    html! {
        <div class="page home-page">
            <section class="hero">
                <h1>{ "Apogee 4-H Rocketry Club" }</h1>
                <p class="hero-tagline">
                    { "Youth-built rockets, launched across North Carolina since 2024." }
                </p>
                <Link<Route> classes="hero-cta" to={Route::Launches}>{ "See our launch log" }</Link<Route>>
            </section>
            <section class="highlights container">
                <div class="highlight-card">
                    <h3>{ "🏆 State Champions" }</h3>
                    <p>{ "1st place in the 2025 high power division at the NC State Fairgrounds." }</p>
                </div>
                <div class="highlight-card">
                    <h3>{ "🎯 TARC Qualified" }</h3>
                    <p>{ "A 95.8 qualifying score sent our egg-loft team to the national fly-off." }</p>
                </div>
                <div class="highlight-card">
                    <h3>{ "🛠 Built by Members" }</h3>
                    <p>{ "Every airframe in the catalog was designed and built at club workshops." }</p>
                </div>
            </section>
            <section class="gallery container" aria-label="Photo gallery">
                { for gallery }
            </section>
            <Lightbox image={(*lightbox).clone()} on_close={on_close} />
        </div>
    }
}
