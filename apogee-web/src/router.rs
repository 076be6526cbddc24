use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/rockets")]
    Rockets,
    #[at("/launches")]
    Launches,
    #[at("/contact")]
    Contact,
    #[at("/404")]
    #[not_found]
    NotFound,
}
