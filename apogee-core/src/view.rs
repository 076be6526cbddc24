//! HTML fragment rendering.
//!
//! Pure functions from normalized records plus the current visibility mode to
//! HTML fragment strings. The web crate mounts these fragments and owns the
//! interactive shells around them (expand/collapse, season tabs, the lock
//! button). Every free-text field is escaped before interpolation, and
//! private fields are only emitted when the caller passes
//! [`Visibility::Private`] for that render call.

use crate::model::{LaunchAttempt, LaunchDay, PlannedLaunchEntry, RocketCatalog, RocketProfile};
use crate::stats::SeasonStats;
use crate::visibility::Visibility;
use chrono::NaiveDate;

const ROCKET_PLACEHOLDER_IMAGE: &str =
    "https://via.placeholder.com/300x200/10b981/ffffff?text=Rocket";

/// Escape text for interpolation into markup: `& < > " '`.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// "April 13, 2025"; unparseable input falls back to the raw string.
#[must_use]
pub fn format_long_date(raw: &str) -> String {
    parse_date(raw).map_or_else(|| raw.to_string(), |date| date.format("%B %-d, %Y").to_string())
}

/// "Apr 13, 2025"; unparseable input falls back to the raw string.
#[must_use]
pub fn format_short_date(raw: &str) -> String {
    parse_date(raw).map_or_else(|| raw.to_string(), |date| date.format("%b %-d, %Y").to_string())
}

/// The club counts a season across the school year: 2025 is "2024-2025".
#[must_use]
pub fn season_label(year: u16) -> String {
    format!("{}-{}", year.saturating_sub(1), year)
}

/// Integral values print without a trailing ".0" (altitudes, masses, scores).
fn display_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Launch days newest-first. Sorted fresh on every render call; the stored
/// order is whatever the source file carried. Unparseable dates sort last.
#[must_use]
pub fn sort_days_desc(days: &[LaunchDay]) -> Vec<LaunchDay> {
    let mut sorted = days.to_vec();
    sorted.sort_by_key(|day| std::cmp::Reverse(parse_date(&day.date).unwrap_or(NaiveDate::MIN)));
    sorted
}

/// Catalog rockets newest-first by creation date.
#[must_use]
pub fn sort_rockets_newest(rockets: &[RocketProfile]) -> Vec<RocketProfile> {
    let mut sorted = rockets.to_vec();
    sorted.sort_by_key(|rocket| {
        std::cmp::Reverse(parse_date(&rocket.creation_date).unwrap_or(NaiveDate::MIN))
    });
    sorted
}

/// Header content of a launch-day card: title line and the summary strip.
/// The interactive expand control around it belongs to the web layer.
#[must_use]
pub fn day_summary_html(day: &LaunchDay) -> String {
    let icon = if day.important_launch_day { "🏆" } else { "🚀" };
    let qual = if day.qualification_launch_day { " (QUAL)" } else { "" };
    format!(
        concat!(
            "<h3>{icon} {date}{qual}</h3>",
            "<div class=\"launch-day-summary\">",
            "<span><strong>Location:</strong> {location}</span>",
            "<span><strong>Members:</strong> {members}</span>",
            "<span><strong>Peak Alt:</strong> {peak_alt} ft</span>",
            "<span><strong>Peak Time:</strong> {peak_time}</span>",
            "</div>"
        ),
        icon = icon,
        date = escape_html(&format_long_date(&day.date)),
        qual = qual,
        location = escape_html(&day.location),
        members = day.attended_members,
        peak_alt = display_number(day.peak_altitude),
        peak_time = escape_html(&day.peak_time),
    )
}

fn day_private_section_html(day: &LaunchDay) -> String {
    // Mirrors the day-level private data block: only days that carry a
    // weather snapshot have one.
    let Some(weather) = &day.weather else {
        return String::new();
    };
    let yes_no = |flag: bool| if flag { "Yes" } else { "No" };
    let roles = day
        .roles
        .as_ref()
        .map(|roles| {
            roles
                .iter()
                .map(|(person, role)| format!("{}: {}", escape_html(person), escape_html(role)))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();
    let (recovery, setup, improve) = day.feedback.as_ref().map_or_else(
        || (String::new(), String::new(), String::new()),
        |feedback| {
            (
                escape_html(&feedback.recovery_feedback),
                escape_html(&feedback.rocket_setup_feedback),
                escape_html(&feedback.what_to_improve),
            )
        },
    );
    format!(
        concat!(
            "<div class=\"private-section\">",
            "<h4>🔒 Private Launch Day Data</h4>",
            "<div class=\"private-grid\">",
            "<div><strong>Weather:</strong> Cloudy: {cloudy}, Muddy: {muddy}, Rainy: {rainy}, Visibility: {visibility}</div>",
            "<div><strong>Time Period:</strong> {time_period}</div>",
            "<div><strong>Roles:</strong> {roles}</div>",
            "<div><strong>Feedback:</strong> Recovery: {recovery}, Setup: {setup}</div>",
            "<div><strong>To Improve:</strong> {improve}</div>",
            "</div>",
            "</div>"
        ),
        cloudy = yes_no(weather.cloudy),
        muddy = yes_no(weather.muddy),
        rainy = yes_no(weather.rainy),
        visibility = escape_html(&weather.visibility),
        time_period = escape_html(day.time_period.as_deref().unwrap_or_default()),
        roles = roles,
        recovery = recovery,
        setup = setup,
        improve = improve,
    )
}

/// Body of an expanded launch-day card: photo, private day data (private mode
/// only), then the attempts in authored order.
#[must_use]
pub fn day_details_html(day: &LaunchDay, catalog: &RocketCatalog, mode: Visibility) -> String {
    let mut details = String::new();
    if let Some(photo) = day.photo.as_deref().filter(|name| !name.is_empty()) {
        details.push_str(&format!(
            "<img src=\"launch day photos/{}\" alt=\"Launch day photo\" class=\"launch-day-photo\">",
            escape_html(photo)
        ));
    }
    if mode == Visibility::Private {
        details.push_str(&day_private_section_html(day));
    }
    for attempt in &day.launches {
        details.push_str(&attempt_html(attempt, catalog, mode));
    }
    details
}

fn attempt_private_html(attempt: &LaunchAttempt) -> String {
    // Only attempts with recorded build data carry the private block.
    let Some(build) = &attempt.rocket_data else {
        return String::new();
    };
    let mut section = String::from(
        "<div class=\"private-launch-section\"><h5>🔒 Private Launch Data</h5>",
    );

    let actual = format!(
        "<strong>Actual:</strong> {}ft in {}",
        display_number(attempt.altitude),
        escape_html(&attempt.time)
    );
    if let Some(predicted_altitude) = attempt.predicted_altitude {
        let predicted_time = attempt
            .predicted_time
            .map_or_else(|| "?".to_string(), display_number);
        section.push_str(&format!(
            "<p><strong>Predicted:</strong> {}ft in {}s | {}</p>",
            display_number(predicted_altitude),
            predicted_time,
            actual
        ));
    } else {
        section.push_str(&format!("<p>{actual}</p>"));
    }

    if let Some(weather) = &attempt.weather_at_launch {
        section.push_str(&format!(
            "<p><strong>Weather:</strong> {}°F, {}mph {}, {}% humidity</p>",
            display_number(weather.temperature),
            display_number(weather.wind_speed),
            escape_html(&weather.wind_direction),
            display_number(weather.humidity),
        ));
    }

    section.push_str(&format!(
        "<p><strong>Rocket:</strong> Total mass: {}g, Payload: {}oz, Chute: {}\"</p>",
        display_number(build.total_mass),
        display_number(build.payload_mass),
        display_number(build.parachute_size),
    ));

    if let Some(recovery) = &attempt.recovery {
        let recovered = if recovery.recovered { "Recovered" } else { "Not recovered" };
        section.push_str(&format!(
            "<p><strong>Recovery:</strong> Ejection at {}s, {} landing, {}</p>",
            display_number(recovery.ejection_time),
            escape_html(&recovery.landing),
            recovered,
        ));
    }

    let damage = attempt
        .damage
        .as_ref()
        .map(|damage| damage.flagged().join(", "))
        .filter(|list| !list.is_empty())
        .unwrap_or_else(|| "None".to_string());
    section.push_str(&format!("<p><strong>Damage:</strong> {damage}</p>"));

    let notes = attempt.private_notes.as_deref().filter(|notes| !notes.is_empty());
    section.push_str(&format!(
        "<p><strong>Private Notes:</strong> {}</p>",
        notes.map_or_else(|| "None".to_string(), escape_html)
    ));

    section.push_str("</div>");
    section
}

/// One launch attempt. The rocket name links into the catalog when it
/// resolves there; the private block is emitted only in private mode.
#[must_use]
pub fn attempt_html(attempt: &LaunchAttempt, catalog: &RocketCatalog, mode: Visibility) -> String {
    let status_icon = if attempt.success { "✅" } else { "❌" };
    let rocket_cell = catalog.find(&attempt.rocket).map_or_else(
        || escape_html(&attempt.rocket),
        |info| {
            format!(
                "<a href=\"/rockets\" class=\"rocket-link\">{}</a> <small>({}\" dia, {}ft target)</small>",
                escape_html(&attempt.rocket),
                display_number(info.diameter),
                display_number(info.altitude_intent),
            )
        },
    );
    let important_badge = if attempt.important {
        "<span class=\"important-badge\">⭐ Important</span>"
    } else {
        ""
    };
    let qual_badge = if attempt.qualification_launch_toggle {
        "<span class=\"qual-badge\">🎯 Qualification</span>"
    } else {
        ""
    };
    let tarc = attempt
        .tarc_score
        .filter(|score| *score != 0.0)
        .map(|score| format!("<p><strong>TARC Score:</strong> {}</p>", display_number(score)))
        .unwrap_or_default();
    let private = if mode == Visibility::Private {
        attempt_private_html(attempt)
    } else {
        String::new()
    };

    format!(
        concat!(
            "<div class=\"launch-item\">",
            "<div class=\"launch-header\">",
            "<h4>{status} {rocket}</h4>",
            "<div class=\"launch-badges\">{important}{qual}</div>",
            "</div>",
            "<div class=\"launch-details\">",
            "<p><strong>Motor:</strong> {motor} | <strong>Altitude:</strong> {altitude} ft</p>",
            "<p><strong>Egg Status:</strong> {egg} | <strong>Time:</strong> {time}</p>",
            "{tarc}",
            "<p class=\"launch-notes\">{notes}</p>",
            "{private}",
            "</div>",
            "</div>"
        ),
        status = status_icon,
        rocket = rocket_cell,
        important = important_badge,
        qual = qual_badge,
        motor = escape_html(&attempt.motor),
        altitude = display_number(attempt.altitude),
        egg = escape_html(&attempt.egg_status),
        time = escape_html(&attempt.time),
        tarc = tarc,
        notes = escape_html(&attempt.public_notes),
        private = private,
    )
}

/// The season statistics card appended to a season's launch timeline.
#[must_use]
pub fn season_stats_card_html(year: u16, stats: &SeasonStats) -> String {
    let best_tarc = stats
        .best_tarc_score
        .map_or_else(|| "N/A".to_string(), display_number);
    let stat_item = |label: &str, value: &str| {
        format!(
            "<div class=\"stat-item\"><span class=\"stat-label\">{label}</span><span class=\"stat-value\">{value}</span></div>"
        )
    };
    format!(
        concat!(
            "<div class=\"season-stats-card\">",
            "<h3>📊 {label} Season Statistics</h3>",
            "<div class=\"stats-grid\">{items}</div>",
            "</div>"
        ),
        label = season_label(year),
        items = [
            stat_item(
                "Highest Altitude",
                &format!("{} ft", display_number(stats.highest_altitude))
            ),
            stat_item("Best TARC Score", &best_tarc),
            stat_item("Most Launches/Day", &stats.max_launches_in_day.to_string()),
            stat_item("Total Launches", &stats.total_launches.to_string()),
        ]
        .join(""),
    )
}

/// One catalog card. Private notes are emitted only in private mode.
#[must_use]
pub fn rocket_card_html(rocket: &RocketProfile, mode: Visibility) -> String {
    let image = if rocket.image.is_empty() {
        ROCKET_PLACEHOLDER_IMAGE.to_string()
    } else {
        format!("rocket images/{}", escape_html(&rocket.image))
    };
    let created = if rocket.creation_date.is_empty() {
        "Unknown".to_string()
    } else {
        escape_html(&format_long_date(&rocket.creation_date))
    };
    let target = if rocket.altitude_intent == 0.0 {
        "N/A".to_string()
    } else {
        display_number(rocket.altitude_intent)
    };
    let diameter = if rocket.diameter == 0.0 {
        "N/A".to_string()
    } else {
        display_number(rocket.diameter)
    };

    let mut specs = String::new();
    if let Some(length) = rocket.length {
        specs.push_str(&format!("<strong>Length:</strong> {}\"<br>", display_number(length)));
    }
    if let Some(mass) = rocket.empty_mass {
        specs.push_str(&format!("<strong>Empty Mass:</strong> {} g<br>", display_number(mass)));
    }
    if let Some(payload) = rocket.optimal_payload_mass {
        specs.push_str(&format!("<strong>Payload:</strong> {} oz<br>", display_number(payload)));
    }
    if let Some(material) = rocket.egg_prot_material.as_deref().filter(|m| !m.is_empty()) {
        specs.push_str(&format!(
            "<strong>Egg Protection:</strong> {}<br>",
            escape_html(material)
        ));
    }
    if let Some(scheme) = rocket.color_scheme.as_deref().filter(|s| !s.is_empty()) {
        specs.push_str(&format!("<strong>Color:</strong> {}<br>", escape_html(scheme)));
    }

    let private = if mode == Visibility::Private {
        format!(
            "<div class=\"private-section\"><h4>🔒 Private Notes</h4><p>{}</p></div>",
            escape_html(&rocket.private_notes)
        )
    } else {
        String::new()
    };

    format!(
        concat!(
            "<div class=\"rocket-card\">",
            "<img src=\"{image}\" alt=\"{name}\" class=\"rocket-image\">",
            "<div class=\"rocket-info\">",
            "<h3>{name}</h3>",
            "<p><strong>Created:</strong> {created}</p>",
            "<p><strong>Target Altitude:</strong> {target} ft</p>",
            "<p><strong>Diameter:</strong> {diameter}\"</p>",
            "<div class=\"rocket-specs\">{specs}</div>",
            "<div class=\"public-section\"><h4>Public Info</h4><p>{public}</p></div>",
            "{private}",
            "</div>",
            "</div>"
        ),
        image = image,
        name = escape_html(&rocket.name),
        created = created,
        target = target,
        diameter = diameter,
        specs = specs,
        public = escape_html(&rocket.public_notes),
        private = private,
    )
}

/// One planned-launch card.
#[must_use]
pub fn planned_card_html(entry: &PlannedLaunchEntry) -> String {
    let date = if entry.date.is_empty() {
        String::new()
    } else {
        escape_html(&format_short_date(&entry.date))
    };
    let mut meta = date;
    if !entry.time.is_empty() {
        meta.push_str(&format!(" · {}", escape_html(&entry.time)));
    }
    if !entry.location.is_empty() {
        meta.push_str(&format!(" · {}", escape_html(&entry.location)));
    }
    let motor = if entry.motor.is_empty() {
        String::new()
    } else {
        format!(" · <strong>Motor:</strong> {}", escape_html(&entry.motor))
    };
    let photo = if entry.image.is_empty() {
        String::new()
    } else {
        format!(
            "<img src=\"launch day photos/{}\" alt=\"{}\" class=\"planned-photo\">",
            escape_html(&entry.image),
            escape_html(&entry.event),
        )
    };

    format!(
        concat!(
            "<div class=\"planned-card\">",
            "<div class=\"planned-card-body\">",
            "<div class=\"planned-meta\">",
            "<h4>{event}</h4>",
            "<div class=\"planned-meta-small\">{meta}</div>",
            "</div>",
            "<p class=\"planned-notes\">{notes}</p>",
            "<div class=\"planned-rocket\"><strong>Rocket:</strong> {rocket}{motor}</div>",
            "</div>",
            "<div class=\"planned-card-img\">{photo}</div>",
            "</div>"
        ),
        event = escape_html(&entry.event),
        meta = meta,
        notes = escape_html(&entry.notes),
        rocket = escape_html(&entry.rocket),
        motor = motor,
        photo = photo,
    )
}

/// Heading plus card grid for a season's planned launches. An empty entry
/// list renders nothing at all: the silent empty state.
#[must_use]
pub fn planned_section_html(year: u16, entries: &[PlannedLaunchEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let cards: String = entries.iter().map(planned_card_html).collect();
    format!(
        "<h2 class=\"planned-heading\">Planned Launches ({year})</h2><div class=\"planned-grid\">{cards}</div>"
    )
}
