//! Record types for the club's static data files.
//!
//! Every type tolerates missing fields so that deserializing any well-formed
//! JSON object is total: absent values become empty strings, `None`, `false`,
//! or zero. The on-disk files use camelCase keys.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A rocket in the club catalog. Reference data, loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RocketProfile {
    pub name: String,
    pub creation_date: String,
    pub image: String,
    /// Target altitude in feet.
    pub altitude_intent: f64,
    /// Body diameter in inches.
    pub diameter: f64,
    pub length: Option<f64>,
    pub empty_mass: Option<f64>,
    pub optimal_payload_mass: Option<f64>,
    pub egg_prot_material: Option<String>,
    pub color_scheme: Option<String>,
    #[serde(alias = "description")]
    pub public_notes: String,
    pub private_notes: String,
}

/// Container shape of `rockets.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RocketCatalog {
    pub rockets: Vec<RocketProfile>,
}

impl RocketCatalog {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rockets: Vec::new(),
        }
    }

    /// Parse a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a catalog.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Look up a rocket by name. Launch attempts reference rockets by name
    /// and the reference is not required to resolve.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&RocketProfile> {
        self.rockets.iter().find(|rocket| rocket.name == name)
    }
}

/// Weather snapshot for a whole launch day (private-mode field).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DayWeather {
    pub cloudy: bool,
    pub muddy: bool,
    pub rainy: bool,
    pub visibility: String,
}

/// Post-day feedback notes (private-mode field).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DayFeedback {
    pub recovery_feedback: String,
    pub launch_sequence_feedback: String,
    pub preparedness_feedback: String,
    pub rocket_recovery_feedback: String,
    pub rocket_setup_feedback: String,
    pub what_to_improve: String,
}

/// One dated club outing, containing one or more launch attempts.
///
/// The attempt order is the authored (chronological) order and is preserved;
/// days themselves are re-sorted by date at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LaunchDay {
    pub date: String,
    pub location: String,
    pub attended_members: u32,
    pub peak_altitude: f64,
    pub peak_time: String,
    pub important_launch_day: bool,
    pub qualification_launch_day: bool,
    pub photo: Option<String>,
    pub weather: Option<DayWeather>,
    pub feedback: Option<DayFeedback>,
    /// Person -> role. `BTreeMap` keeps the rendered order stable.
    pub roles: Option<BTreeMap<String, String>>,
    pub time_period: Option<String>,
    pub launches: Vec<LaunchAttempt>,
}

/// Physical build data recorded for an attempt (private-mode field).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildData {
    pub parachute_size: f64,
    pub payload_mass: f64,
    pub total_mass: f64,
    pub ballast_mass: f64,
    pub altimeter: String,
}

/// Field conditions at the moment of an attempt (private-mode field).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LaunchWeather {
    pub time_of_launch: String,
    pub temperature: f64,
    pub humidity: f64,
    pub wind_direction: String,
    pub wind_speed: f64,
    pub air_pressure: f64,
    pub launch_number: u32,
}

/// What happened at the pad (private-mode field).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LaunchEvents {
    pub successful_liftoff: bool,
    pub hung_on_rod: bool,
    pub tip_off: bool,
    pub motor_fail: bool,
}

/// Flight path observations (private-mode field).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Trajectory {
    pub straight: bool,
    pub spin: bool,
    pub corkscrew_barrel_roll: bool,
    pub unstable: bool,
    pub weathercocked: bool,
}

/// Recovery outcome (private-mode field).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RecoveryOutcome {
    pub ejection_time: f64,
    pub delay: f64,
    pub landing: String,
    pub recovered: bool,
    pub crash: bool,
    pub ballistic: bool,
}

/// Parachute behavior (private-mode field).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ParachuteRecovery {
    pub deployment_level: String,
    pub parachute_descent: String,
    pub tangled: bool,
}

/// Damage flags for an attempt (private-mode field).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DamageFlags {
    pub scuffed_paint: bool,
    pub minor_damage: bool,
    pub rocket_destroyed: bool,
    pub rocket_loss: bool,
    pub fins_damaged: bool,
    pub zippered_tube: bool,
}

impl DamageFlags {
    /// Names of the set flags, in the data file's key spelling.
    #[must_use]
    pub fn flagged(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.scuffed_paint {
            names.push("scuffedPaint");
        }
        if self.minor_damage {
            names.push("minorDamage");
        }
        if self.rocket_destroyed {
            names.push("rocketDestroyed");
        }
        if self.rocket_loss {
            names.push("rocketLoss");
        }
        if self.fins_damaged {
            names.push("finsDamaged");
        }
        if self.zippered_tube {
            names.push("zipperedTube");
        }
        names
    }
}

/// One rocket flight within a launch day.
///
/// `time` is opaque text: some records carry a clock time ("14:32"), others
/// an elapsed duration ("44.2s"). No unit type is imposed on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LaunchAttempt {
    pub rocket: String,
    pub motor: String,
    pub success: bool,
    pub altitude: f64,
    pub egg_status: String,
    pub time: String,
    pub tarc_score: Option<f64>,
    pub important: bool,
    pub public_notes: String,
    pub launch_toggle: bool,
    pub qualification_launch_toggle: bool,
    pub predicted_altitude: Option<f64>,
    pub predicted_time: Option<f64>,
    pub rocket_data: Option<BuildData>,
    pub weather_at_launch: Option<LaunchWeather>,
    pub launch: Option<LaunchEvents>,
    pub trajectory: Option<Trajectory>,
    pub recovery: Option<RecoveryOutcome>,
    pub parachute_recovery: Option<ParachuteRecovery>,
    pub damage: Option<DamageFlags>,
    pub private_notes: Option<String>,
}

/// Container shape of `launches-<year>.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SeasonLog {
    pub year: u16,
    pub launch_days: Vec<LaunchDay>,
}

impl SeasonLog {
    #[must_use]
    pub fn empty(year: u16) -> Self {
        Self {
            year,
            launch_days: Vec::new(),
        }
    }

    /// Parse a season log from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a season log.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// A planned launch after normalization. Always fully populated: absent
/// source fields come through as empty strings, never as a partial record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlannedLaunchEntry {
    pub date: String,
    pub time: String,
    pub location: String,
    pub event: String,
    pub rocket: String,
    pub motor: String,
    pub notes: String,
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_log_parses_minimal_day() {
        let json = r#"{
            "year": 2025,
            "launchDays": [
                {
                    "date": "2025-03-15",
                    "location": "Tripoli Rocketry Field",
                    "attendedMembers": 6,
                    "peakAltitude": 798,
                    "peakTime": "10:45",
                    "launches": [
                        {
                            "rocket": "TARC Champion",
                            "motor": "F67-9",
                            "success": true,
                            "altitude": 798,
                            "eggStatus": "intact",
                            "time": "44.2s",
                            "tarcScore": 95.8,
                            "publicNotes": "Qualifier flight."
                        }
                    ]
                }
            ]
        }"#;

        let log = SeasonLog::from_json(json).unwrap();
        assert_eq!(log.year, 2025);
        assert_eq!(log.launch_days.len(), 1);
        let day = &log.launch_days[0];
        assert!(!day.important_launch_day);
        assert!(day.photo.is_none());
        let attempt = &day.launches[0];
        assert_eq!(attempt.tarc_score, Some(95.8));
        assert_eq!(attempt.time, "44.2s");
        assert!(attempt.rocket_data.is_none());
    }

    #[test]
    fn rocket_profile_accepts_description_alias() {
        let catalog: RocketCatalog = serde_json::from_str(
            r#"{ "rockets": [ { "name": "Green Thunder", "description": "Flagship bird." } ] }"#,
        )
        .unwrap();
        assert_eq!(catalog.rockets[0].public_notes, "Flagship bird.");
        assert_eq!(catalog.rockets[0].altitude_intent, 0.0);
        assert!(catalog.find("Green Thunder").is_some());
        assert!(catalog.find("No Such Rocket").is_none());
    }

    #[test]
    fn damage_flags_report_set_keys() {
        let damage = DamageFlags {
            fins_damaged: true,
            zippered_tube: true,
            ..DamageFlags::default()
        };
        assert_eq!(damage.flagged(), vec!["finsDamaged", "zipperedTube"]);
        assert!(DamageFlags::default().flagged().is_empty());
    }
}
