use crate::router::Route;
use apogee_core::Visibility;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub mode: Visibility,
    /// Fired by the lock button: opens the unlock dialog in public mode,
    /// drops straight back to public in private mode.
    pub on_toggle_lock: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let menu_open = use_state(|| false);
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };
    // Following any nav link collapses the mobile menu again.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };
    let on_lock = {
        let cb = p.on_toggle_lock.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let (lock_icon, lock_label) = match p.mode {
        Visibility::Public => ("🔒", "Enter private mode"),
        Visibility::Private => ("🔓", "Return to public view"),
    };

    html! {
        <header class="site-header" role="banner">
            <nav class="navbar" aria-label="Main navigation">
                <Link<Route> to={Route::Home} classes="nav-logo">{ "🚀 Apogee 4-H Rocketry" }</Link<Route>>
                <ul class={classes!("nav-menu", (*menu_open).then_some("active"))} onclick={close_menu}>
                    <li class="nav-item"><Link<Route> classes="nav-link" to={Route::Home}>{ "Home" }</Link<Route>></li>
                    <li class="nav-item"><Link<Route> classes="nav-link" to={Route::Rockets}>{ "Rockets" }</Link<Route>></li>
                    <li class="nav-item"><Link<Route> classes="nav-link" to={Route::Launches}>{ "Launches" }</Link<Route>></li>
                    <li class="nav-item"><Link<Route> classes="nav-link" to={Route::Contact}>{ "Contact" }</Link<Route>></li>
                    <li class="nav-item">
                        <button id="lock-btn" class="lock-btn" onclick={on_lock} aria-label={lock_label}>
                            { lock_icon }
                        </button>
                    </li>
                </ul>
                <button
                    class={classes!("hamburger", (*menu_open).then_some("active"))}
                    aria-label="Toggle navigation"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </nav>
        </header>
    }
}
