use apogee_core::model::{LaunchDay, RocketCatalog};
use apogee_core::view::{day_details_html, day_summary_html};
use apogee_core::Visibility;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub day: LaunchDay,
    pub catalog: RocketCatalog,
    pub mode: Visibility,
}

/// One collapsible launch-day card. Every card starts collapsed and expands
/// independently; the details fragment is rebuilt on each render so a
/// visibility change takes effect immediately.
#[function_component(LaunchDayCard)]
pub fn launch_day_card(p: &Props) -> Html {
    let expanded = use_state(|| false);
    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_| expanded.set(!*expanded))
    };

    let summary = Html::from_html_unchecked(day_summary_html(&p.day).into());
    let details = (*expanded).then(|| {
        let body = Html::from_html_unchecked(day_details_html(&p.day, &p.catalog, p.mode).into());
        html! { <div class="launch-day-details">{ body }</div> }
    });

    html! {
        <div
            class={classes!("launch-day-card", (*expanded).then_some("expanded"))}
            data-date={p.day.date.clone()}
        >
            <div class="launch-day-header" onclick={toggle}>
                { summary }
                <div class="expand-icon" aria-hidden="true">{ if *expanded { "▲" } else { "▼" } }</div>
            </div>
            { details.unwrap_or_default() }
        </div>
    }
}
