use apogee_core::Visibility;
use apogee_core::model::{DayWeather, LaunchAttempt, LaunchDay, PlannedLaunchEntry, RocketCatalog};
use apogee_web::components::header::Header;
use apogee_web::components::launch_day_card::LaunchDayCard;
use apogee_web::components::lightbox::Lightbox;
use apogee_web::components::planned_launches::PlannedLaunches;
use apogee_web::components::season_tabs::SeasonTabs;
use apogee_web::components::unlock_dialog::UnlockDialog;
use apogee_web::pages::contact::ContactPage;
use futures::executor::block_on;
use yew::{AttrValue, Callback, LocalServerRenderer, function_component, html, Html, Properties};
use yew_router::Router;
use yew_router::history::{AnyHistory, MemoryHistory};

#[derive(Properties, PartialEq)]
struct HeaderHarnessProps {
    mode: Visibility,
}

// Link needs a router context, so the header renders under a memory history.
#[function_component(HeaderHarness)]
fn header_harness(props: &HeaderHarnessProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    html! {
        <Router history={history}>
            <Header mode={props.mode} on_toggle_lock={Callback::noop()} />
        </Router>
    }
}

fn sample_day() -> LaunchDay {
    LaunchDay {
        date: "2025-04-13".to_string(),
        location: "NC State Fairgrounds".to_string(),
        attended_members: 8,
        peak_altitude: 2847.0,
        peak_time: "14:32".to_string(),
        important_launch_day: true,
        weather: Some(DayWeather {
            cloudy: true,
            visibility: "Good".to_string(),
            ..DayWeather::default()
        }),
        launches: vec![LaunchAttempt {
            rocket: "Green Thunder".to_string(),
            motor: "J415-M".to_string(),
            success: true,
            altitude: 2847.0,
            public_notes: "1st Place in High Power Division!".to_string(),
            ..LaunchAttempt::default()
        }],
        ..LaunchDay::default()
    }
}

#[test]
fn header_reflects_visibility_state() {
    let html = block_on(
        LocalServerRenderer::<HeaderHarness>::with_props(HeaderHarnessProps {
            mode: Visibility::Public,
        })
        .render(),
    );
    assert!(html.contains("lock-btn"));
    assert!(html.contains("🔒"));
    assert!(html.contains("Rockets"));
    assert!(html.contains("hamburger"));

    let html = block_on(
        LocalServerRenderer::<HeaderHarness>::with_props(HeaderHarnessProps {
            mode: Visibility::Private,
        })
        .render(),
    );
    assert!(html.contains("🔓"));
}

#[test]
fn unlock_dialog_renders_only_when_open() {
    let closed = block_on(
        LocalServerRenderer::<UnlockDialog>::with_props(
            apogee_web::components::unlock_dialog::Props {
                open: false,
                failed: false,
                on_submit: Callback::noop(),
                on_close: Callback::noop(),
            },
        )
        .render(),
    );
    assert!(!closed.contains("unlock-dialog"));

    let open = block_on(
        LocalServerRenderer::<UnlockDialog>::with_props(
            apogee_web::components::unlock_dialog::Props {
                open: true,
                failed: false,
                on_submit: Callback::noop(),
                on_close: Callback::noop(),
            },
        )
        .render(),
    );
    assert!(open.contains("Enter master code:"));
    assert!(open.contains("master-code"));
    assert!(!open.contains("Incorrect code"));
}

#[test]
fn unlock_dialog_shows_failure_notice() {
    let html = block_on(
        LocalServerRenderer::<UnlockDialog>::with_props(
            apogee_web::components::unlock_dialog::Props {
                open: true,
                failed: true,
                on_submit: Callback::noop(),
                on_close: Callback::noop(),
            },
        )
        .render(),
    );
    assert!(html.contains("Incorrect code"));
}

#[test]
fn season_tabs_mark_the_active_season() {
    let html = block_on(
        LocalServerRenderer::<SeasonTabs>::with_props(
            apogee_web::components::season_tabs::Props {
                seasons: vec![AttrValue::from("2025"), AttrValue::from("2026")],
                active: AttrValue::from("2025"),
                on_select: Callback::noop(),
            },
        )
        .render(),
    );
    assert!(html.contains("2024-2025 Season"));
    assert!(html.contains("2025-2026 Season"));
    assert!(html.contains("active"));
    assert!(html.contains("data-season=\"2026\""));
}

#[test]
fn launch_day_card_starts_collapsed() {
    let html = block_on(
        LocalServerRenderer::<LaunchDayCard>::with_props(
            apogee_web::components::launch_day_card::Props {
                day: sample_day(),
                catalog: RocketCatalog::empty(),
                mode: Visibility::Private,
            },
        )
        .render(),
    );
    // The summary strip shows, the details (and thus any private data) do not
    // until the visitor expands the card.
    assert!(html.contains("NC State Fairgrounds"));
    assert!(html.contains("April 13, 2025"));
    assert!(html.contains("▼"));
    assert!(!html.contains("launch-day-details"));
    assert!(!html.contains("Private Launch Day Data"));
    assert!(!html.contains("1st Place in High Power Division!"));
}

#[test]
fn planned_launches_render_entries_and_stay_silent_when_empty() {
    let empty = block_on(
        LocalServerRenderer::<PlannedLaunches>::with_props(
            apogee_web::components::planned_launches::Props {
                year: 2026,
                entries: Vec::new(),
            },
        )
        .render(),
    );
    assert!(!empty.contains("planned-launches-2026"));

    let entry = PlannedLaunchEntry {
        date: "2026-04-18".to_string(),
        event: "TARC Qualification Window".to_string(),
        rocket: "TARC Champion".to_string(),
        ..PlannedLaunchEntry::default()
    };
    let html = block_on(
        LocalServerRenderer::<PlannedLaunches>::with_props(
            apogee_web::components::planned_launches::Props {
                year: 2026,
                entries: vec![entry],
            },
        )
        .render(),
    );
    assert!(html.contains("planned-launches-2026"));
    assert!(html.contains("Planned Launches (2026)"));
    assert!(html.contains("TARC Qualification Window"));
    assert!(html.contains("Apr 18, 2026"));
}

#[test]
fn lightbox_opens_with_an_image() {
    let closed = block_on(
        LocalServerRenderer::<Lightbox>::with_props(apogee_web::components::lightbox::Props {
            image: None,
            on_close: Callback::noop(),
        })
        .render(),
    );
    assert!(!closed.contains("lightbox-backdrop"));

    let open = block_on(
        LocalServerRenderer::<Lightbox>::with_props(apogee_web::components::lightbox::Props {
            image: Some((
                AttrValue::from("launch day photos/state-championship-2025.jpg"),
                AttrValue::from("State championship winning flight"),
            )),
            on_close: Callback::noop(),
        })
        .render(),
    );
    assert!(open.contains("lightbox-backdrop"));
    assert!(open.contains("state-championship-2025.jpg"));
}

#[test]
fn contact_page_renders_the_form_idle() {
    let html = block_on(LocalServerRenderer::<ContactPage>::new().render());
    assert!(html.contains("contact-form"));
    assert!(html.contains("Send Message"));
    assert!(html.contains("contact-message"));
    assert!(!html.contains("Please fill in all required fields."));
}
