//! Derived pure-math formulas: no state, one-shot arithmetic over fields
//! the entities already carry.

use serde::Serialize;

const SOLDIERS_PER_BARRACKS: f64 = 3000.0;
const BARRACKS_PER_CITY: f64 = 5.0;
const TANKS_PER_FACTORY: f64 = 250.0;
const FACTORIES_PER_CITY: f64 = 5.0;
const AIRCRAFT_PER_HANGAR: f64 = 18.0;
const HANGARS_PER_CITY: f64 = 5.0;
const SHIPS_PER_DOCK: f64 = 5.0;
const DOCKS_PER_CITY: f64 = 3.0;

/// Militarization levels per unit type plus their mean. Fractions of
/// buildable capacity, not percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Militarization {
    pub soldiers: f64,
    pub tanks: f64,
    pub aircraft: f64,
    pub ships: f64,
    pub total: f64,
}

pub fn militarization(
    city_count: i64,
    soldiers: u32,
    tanks: u32,
    aircraft: u32,
    ships: u32,
) -> Militarization {
    let cities = city_count as f64;
    let max_soldiers = SOLDIERS_PER_BARRACKS * BARRACKS_PER_CITY * cities;
    let max_tanks = TANKS_PER_FACTORY * FACTORIES_PER_CITY * cities;
    let max_aircraft = AIRCRAFT_PER_HANGAR * HANGARS_PER_CITY * cities;
    let max_ships = SHIPS_PER_DOCK * DOCKS_PER_CITY * cities;

    let soldiers = soldiers as f64 / max_soldiers;
    let tanks = tanks as f64 / max_tanks;
    let aircraft = aircraft as f64 / max_aircraft;
    let ships = ships as f64 / max_ships;

    Militarization {
        soldiers,
        tanks,
        aircraft,
        ships,
        total: (soldiers + tanks + aircraft + ships) / 4.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WarRange {
    pub min: f64,
    pub max: f64,
}

/// Score ranges a nation can declare against (offensive) and be declared
/// on from (defensive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WarRanges {
    pub offensive: WarRange,
    pub defensive: WarRange,
}

pub fn war_range(score: f64) -> WarRanges {
    WarRanges {
        offensive: WarRange {
            min: score * 0.75,
            max: score * 1.75,
        },
        defensive: WarRange {
            min: score / 1.75,
            max: score / 0.75,
        },
    }
}
