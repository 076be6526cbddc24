pub mod state;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::unlock_dialog::UnlockDialog;
use crate::pages::contact::ContactPage;
use crate::pages::home::HomePage;
use crate::pages::launches::LaunchesPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::rockets::RocketsPage;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppInner />
        </BrowserRouter>
    }
}

#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    let mode = app_state.visibility.mode();

    // Lock button: private mode drops straight back to public; entering
    // private mode goes through the master-code dialog.
    let on_toggle_lock = {
        let app_state = app_state.clone();
        Callback::from(move |()| {
            if app_state.visibility.is_private() {
                let mut controller = *app_state.visibility;
                controller.lock();
                app_state.visibility.set(controller);
            } else {
                app_state.unlock_failed.set(false);
                app_state.show_unlock.set(true);
            }
        })
    };
    let on_unlock_submit = {
        let app_state = app_state.clone();
        Callback::from(move |code: String| {
            let mut controller = *app_state.visibility;
            if controller.unlock(&code) {
                app_state.visibility.set(controller);
                app_state.unlock_failed.set(false);
                app_state.show_unlock.set(false);
            } else {
                app_state.unlock_failed.set(true);
            }
        })
    };
    let on_unlock_close = {
        let app_state = app_state.clone();
        Callback::from(move |()| {
            app_state.show_unlock.set(false);
            app_state.unlock_failed.set(false);
        })
    };

    let render = Callback::from(move |route: Route| match route {
        Route::Home => html! { <HomePage /> },
        Route::Rockets => html! { <RocketsPage mode={mode} /> },
        Route::Launches => html! { <LaunchesPage mode={mode} /> },
        Route::Contact => html! { <ContactPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    });

    html! {
        <>
            <Header mode={mode} on_toggle_lock={on_toggle_lock} />
            <main id="main">
                <Switch<Route> render={render} />
            </main>
            <Footer />
            <UnlockDialog
                open={*app_state.show_unlock}
                failed={*app_state.unlock_failed}
                on_submit={on_unlock_submit}
                on_close={on_unlock_close}
            />
        </>
    }
}
