use crate::components::launch_day_card::LaunchDayCard;
use crate::components::planned_launches::PlannedLaunches;
use crate::components::season_tabs::SeasonTabs;
use crate::data::{self, LaunchArchive};
use apogee_core::model::{PlannedLaunchEntry, RocketCatalog, SeasonLog};
use apogee_core::view::{season_label, season_stats_card_html, sort_days_desc};
use apogee_core::{SeasonStats, Visibility};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub mode: Visibility,
}

/// Launch history and planned launches, one season at a time.
///
/// Season switches re-use the page's launch archive, so a year is fetched at
/// most once; planned launches are fetched on every switch whose season key
/// parses as a year. A switch while a fetch is in flight simply lets the
/// later resolution win - each render is keyed by the data it carries.
#[function_component(LaunchesPage)]
pub fn launches_page(p: &Props) -> Html {
    let active = use_state(|| AttrValue::from(data::SEASON_KEYS[0]));
    let season_log = use_state(|| None::<Rc<SeasonLog>>);
    let planned = use_state(Vec::<PlannedLaunchEntry>::new);
    let catalog = use_state(RocketCatalog::empty);
    let archive = use_mut_ref(LaunchArchive::new);

    #[cfg(target_arch = "wasm32")]
    {
        let catalog = catalog.clone();
        use_effect_with((), move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                catalog.set(data::fetch_catalog().await);
            });
            || {}
        });
    }
    #[cfg(target_arch = "wasm32")]
    {
        let season_log = season_log.clone();
        let planned = planned.clone();
        let archive = archive.clone();
        use_effect_with((*active).clone(), move |season: &AttrValue| {
            season_log.set(None);
            planned.set(Vec::new());
            if let Ok(year) = season.parse::<u16>() {
                let season_log = season_log.clone();
                let planned = planned.clone();
                let archive = archive.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    season_log.set(data::fetch_season(&archive, year).await);
                    planned.set(data::fetch_planned(year).await);
                });
            }
            || {}
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = &archive;
    }

    let on_select = {
        let active = active.clone();
        Callback::from(move |season: AttrValue| active.set(season))
    };
    let seasons: Vec<AttrValue> = data::SEASON_KEYS
        .iter()
        .map(|key| AttrValue::from(*key))
        .collect();
    let planned_year = active.parse::<u16>().ok();

    html! {
        <div class="page launches-page">
            <div class="container">
                <h1 class="page-title">{ "Launch Log" }</h1>
                <SeasonTabs seasons={seasons} active={(*active).clone()} on_select={on_select} />
                { season_log.as_ref().map(|log| history_section(log, &catalog, p.mode)).unwrap_or_default() }
                { planned_year.map(|year| html! {
                    <PlannedLaunches year={year} entries={(*planned).clone()} />
                }).unwrap_or_default() }
            </div>
        </div>
    }
}

fn history_section(log: &SeasonLog, catalog: &RocketCatalog, mode: Visibility) -> Html {
    // Both the ordering and the season stats are recomputed on every render;
    // neither survives outside this call.
    let days = sort_days_desc(&log.launch_days);
    let stats = SeasonStats::compute(&log.launch_days);
    let stats_card = Html::from_html_unchecked(season_stats_card_html(log.year, &stats).into());
    html! {
        <section
            id={format!("launch-days-{}", log.year)}
            class="season-content"
            data-season={log.year.to_string()}
        >
            <h2 class="season-heading">{ format!("{} Launch History 🚀", season_label(log.year)) }</h2>
            <div class="launch-timeline">
                { for days.iter().map(|day| html! {
                    <LaunchDayCard
                        key={day.date.clone()}
                        day={day.clone()}
                        catalog={catalog.clone()}
                        mode={mode}
                    />
                }) }
                { stats_card }
            </div>
        </section>
    }
}
