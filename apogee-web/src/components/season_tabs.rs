use apogee_core::view::season_label;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Season keys in display order. Keys that parse as a year number get a
    /// season-span title; anything else is shown verbatim.
    pub seasons: Vec<AttrValue>,
    pub active: AttrValue,
    pub on_select: Callback<AttrValue>,
}

/// One independent group of season-selector buttons. Pages may mount several
/// groups; each keeps its own active key.
#[function_component(SeasonTabs)]
pub fn season_tabs(p: &Props) -> Html {
    let buttons = p.seasons.iter().map(|season| {
        let selected = *season == p.active;
        let onclick = {
            let cb = p.on_select.clone();
            let season = season.clone();
            Callback::from(move |_| cb.emit(season.clone()))
        };
        html! {
            <button
                class={classes!("season-btn", selected.then_some("active"))}
                data-season={season.clone()}
                aria-pressed={selected.to_string()}
                {onclick}
            >
                { season_title(season) }
            </button>
        }
    });
    html! {
        <div class="season-controls" role="group" aria-label="Season">
            { for buttons }
        </div>
    }
}

fn season_title(key: &AttrValue) -> String {
    key.parse::<u16>()
        .map_or_else(|_| key.to_string(), |year| format!("{} Season", season_label(year)))
}
