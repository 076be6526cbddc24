use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="page not-found-page">
            <div class="container">
                <h1>{ "404" }</h1>
                <p>{ "That page drifted off course." }</p>
                <Link<Route> to={Route::Home}>{ "Back to the launch pad" }</Link<Route>>
            </div>
        </div>
    }
}
