//! Static boost pad tables.
//!
//! Pads sit at a fixed height of 70 uu.  Map ids are matched
//! case-insensitively; every lighting/weather variant of an arena shares the
//! arena's layout.  Unknown maps have no pads, which callers treat as
//! "routing unavailable" rather than as an error.

use bm_core::{PadKind, Vec3};

/// One entry of a static pad table.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PadSpec {
    pub position: Vec3,
    pub kind:     PadKind,
}

const fn major(x: f32, y: f32) -> PadSpec {
    PadSpec { position: Vec3::new(x, y, 70.0), kind: PadKind::Major }
}

const fn minor(x: f32, y: f32) -> PadSpec {
    PadSpec { position: Vec3::new(x, y, 70.0), kind: PadKind::Minor }
}

/// Soccar arenas: eight majors on the sides and ends, eight minors between.
pub static STANDARD_PADS: [PadSpec; 16] = [
    major(-3584.0, 0.0),
    major(3584.0, 0.0),
    major(0.0, 5120.0),
    major(0.0, -5120.0),
    major(-2048.0, 2560.0),
    major(2048.0, 2560.0),
    major(-2048.0, -2560.0),
    major(2048.0, -2560.0),
    minor(-2816.0, 2816.0),
    minor(0.0, 2816.0),
    minor(2816.0, 2816.0),
    minor(-2816.0, 0.0),
    minor(2816.0, 0.0),
    minor(-2816.0, -2816.0),
    minor(0.0, -2816.0),
    minor(2816.0, -2816.0),
];

/// Hoops (Dunk House).
pub static HOOPS_PADS: [PadSpec; 8] = [
    major(-2048.0, 0.0),
    major(2048.0, 0.0),
    major(0.0, 2560.0),
    major(0.0, -2560.0),
    minor(-1024.0, 1280.0),
    minor(1024.0, 1280.0),
    minor(-1024.0, -1280.0),
    minor(1024.0, -1280.0),
];

const STANDARD_MAPS: &[&str] = &[
    "stadium_p", "stadium_p_day", "stadium_p_stormy", "stadium_p_night",
    "championsfield_p", "championsfield_p_night",
    "eurostadium_p", "eurostadium_p_night", "eurostadium_p_snowy",
    "trainstation_p", "trainstation_p_night", "trainstation_p_dawn",
    "utopiastadium_p", "utopiastadium_p_dusk", "utopiastadium_p_snowy",
    "beach_p", "beach_p_night", "beach_p_sunset",
    "neotokyo_standard_p", "neotokyo_standard_p_night",
    "haunted_trainstation_p", "chn_stadium_p", "chn_stadium_p_dusk",
    "arc_p", "arc_p_day",
    "wasteland_p", "wasteland_p_night",
    "farm_p", "farm_p_night", "farm_p_snowy",
    "aquadome_p",
    "deadeyecanyon_p", "deadeyecanyon_p_night",
    "sovereignheights_p",
    "estadiovida_p",
    "tokyounderpass_p", "pillars_p", "cosmic_p", "doublegoal_p", "octagon_p",
    "underpass_p", "utopiaretro_p", "throwbackstadium_p",
    "rally_p", "rallynight_p", "rallyday_p", "rallysnowy_p",
    // Snow Day arena uses the soccar layout.
    "snowystadium_p",
];

const HOOPS_MAPS: &[&str] = &["hoopsstadium_p", "dunkhouse_p"];

/// Return the static pad table for `map_id`.
///
/// Dropshot arenas and unknown ids yield an empty slice.
pub fn pads_for_map(map_id: &str) -> &'static [PadSpec] {
    let lower = map_id.trim().to_ascii_lowercase();
    if STANDARD_MAPS.contains(&lower.as_str()) {
        &STANDARD_PADS
    } else if HOOPS_MAPS.contains(&lower.as_str()) {
        &HOOPS_PADS
    } else {
        &[]
    }
}
