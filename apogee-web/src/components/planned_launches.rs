use apogee_core::model::PlannedLaunchEntry;
use apogee_core::view::planned_section_html;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub year: u16,
    pub entries: Vec<PlannedLaunchEntry>,
}

/// Planned launches for one season. With no entries the section disappears
/// entirely; data outages are never surfaced to the visitor.
#[function_component(PlannedLaunches)]
pub fn planned_launches(p: &Props) -> Html {
    let section = planned_section_html(p.year, &p.entries);
    if section.is_empty() {
        return Html::default();
    }
    html! {
        <section id={format!("planned-launches-{}", p.year)} class="planned-launches">
            { Html::from_html_unchecked(section.into()) }
        </section>
    }
}
