use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer>{ "© 2026 Apogee 4-H Rocketry Club · Raleigh, NC" }</footer>
    }
}
