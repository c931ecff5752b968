use serde::Serialize;

use crate::JsonMap;
use crate::error::PwError;
use crate::formulas::{self, Militarization, WarRanges};
use crate::models::raw::Raw;
use crate::models::war::WarRecord;

/// Identity and summary fields common to all three nation endpoint
/// families (Nations list, Nation, Alliance-Members). The endpoints name
/// several of these differently, hence the fallback keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NationStub {
    pub nation_id: u32,
    pub nation_name: String,
    pub leader_name: String,
    pub war_policy: String,
    pub color: String,
    pub alliance_name: String,
    pub alliance_id: u32,
    pub alliance_position: i64,
    pub city_count: i64,
    pub infrastructure: f64,
    pub offensive_war_count: i64,
    pub defensive_war_count: i64,
    pub score: f64,
    pub vacation_mode: bool,
    pub minutes_inactive: i64,
}

impl NationStub {
    pub fn from_raw(data: &JsonMap) -> Result<Self, PwError> {
        let raw = Raw::new(data);
        Ok(NationStub {
            nation_id: raw.id("nationid", None)?,
            nation_name: raw.string("nation", Some("name"))?,
            leader_name: raw.string("leadername", Some("leader"))?,
            war_policy: raw.string("war_policy", None)?,
            color: raw.string("color", None)?,
            alliance_name: raw.string("alliance", None)?,
            alliance_id: raw.id("allianceid", None)?,
            alliance_position: raw.int("allianceposition", None)?,
            city_count: raw.int("cities", None)?,
            infrastructure: raw.float("infrastructure", Some("totalinfrastructure"))?,
            offensive_war_count: raw.int("offensivewars", None)?,
            defensive_war_count: raw.int("defensivewars", None)?,
            score: raw.float("score", None)?,
            vacation_mode: raw.flag("vacmode", Some("vmode"))?,
            minutes_inactive: raw.int("minutessinceactive", None)?,
        })
    }

    /// Offensive and defensive war score ranges for this nation.
    pub fn war_range(&self) -> WarRanges {
        formulas::war_range(self.score)
    }
}

/// Completion state of the 14 national projects. Always the same 14
/// fields regardless of which endpoint supplied the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Projects {
    pub bauxite_works: bool,
    pub iron_works: bool,
    pub arms_stockpile: bool,
    pub emergency_gasoline_reserve: bool,
    pub mass_irrigation: bool,
    pub international_trade_center: bool,
    pub missile_launch_pad: bool,
    pub nuclear_research_facility: bool,
    pub iron_dome: bool,
    pub vital_defense_system: bool,
    pub uranium_enrichment: bool,
    pub intelligence_agency: bool,
    pub propaganda_bureau: bool,
    pub center_for_civil_engineering: bool,
}

impl Projects {
    // The Nation endpoint returns these booleans as stringified ints;
    // Raw::flag absorbs that.
    pub fn from_raw(data: &JsonMap) -> Result<Self, PwError> {
        let raw = Raw::new(data);
        Ok(Projects {
            bauxite_works: raw.flag("bauxiteworks", None)?,
            iron_works: raw.flag("ironworks", None)?,
            arms_stockpile: raw.flag("armsstockpile", None)?,
            emergency_gasoline_reserve: raw.flag("emgasreserve", None)?,
            mass_irrigation: raw.flag("massirrigation", None)?,
            international_trade_center: raw.flag("inttradecenter", None)?,
            missile_launch_pad: raw.flag("missilelpad", None)?,
            nuclear_research_facility: raw.flag("nuclearresfac", None)?,
            iron_dome: raw.flag("irondome", None)?,
            vital_defense_system: raw.flag("vitaldefsys", None)?,
            uranium_enrichment: raw.flag("uraniumenrich", None)?,
            intelligence_agency: raw.flag("intagncy", None)?,
            propaganda_bureau: raw.flag("propbureau", None)?,
            center_for_civil_engineering: raw.flag("cenciveng", None)?,
        })
    }

    /// The 14 projects as (name, completed) pairs, in fixed order.
    pub fn entries(&self) -> [(&'static str, bool); 14] {
        [
            ("bauxite_works", self.bauxite_works),
            ("iron_works", self.iron_works),
            ("arms_stockpile", self.arms_stockpile),
            ("emergency_gasoline_reserve", self.emergency_gasoline_reserve),
            ("mass_irrigation", self.mass_irrigation),
            ("international_trade_center", self.international_trade_center),
            ("missile_launch_pad", self.missile_launch_pad),
            ("nuclear_research_facility", self.nuclear_research_facility),
            ("iron_dome", self.iron_dome),
            ("vital_defense_system", self.vital_defense_system),
            ("uranium_enrichment", self.uranium_enrichment),
            ("intelligence_agency", self.intelligence_agency),
            ("propaganda_bureau", self.propaganda_bureau),
            ("center_for_civil_engineering", self.center_for_civil_engineering),
        ]
    }
}

/// Stub plus military detail. Supplied by the Nation and Alliance-Members
/// endpoints; the Nations list endpoint has no military fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MilitaryRecord {
    pub stub: NationStub,
    pub soldiers: u32,
    pub tanks: u32,
    pub aircraft: u32,
    pub ships: u32,
    pub missiles: u32,
    pub nukes: u32,
    pub projects: Projects,
}

impl MilitaryRecord {
    pub fn from_raw(data: &JsonMap) -> Result<Self, PwError> {
        let raw = Raw::new(data);
        Ok(MilitaryRecord {
            stub: NationStub::from_raw(data)?,
            soldiers: raw.id("soldiers", None)?,
            tanks: raw.id("tanks", None)?,
            aircraft: raw.id("aircraft", None)?,
            ships: raw.id("ships", None)?,
            missiles: raw.id("missiles", None)?,
            nukes: raw.id("nukes", None)?,
            projects: Projects::from_raw(data)?,
        })
    }

    /// Militarization ratios against this nation's unit capacity.
    pub fn militarization(&self) -> Militarization {
        formulas::militarization(
            self.stub.city_count,
            self.soldiers,
            self.tanks,
            self.aircraft,
            self.ships,
        )
    }
}

/// Wars associated with a nation, bucketed by side. Empty until filled by
/// [`crate::PwClient::load_wars`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WarLog {
    pub offensive: Vec<WarRecord>,
    pub defensive: Vec<WarRecord>,
}

/// Full per-nation record from the single-nation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NationDetail {
    pub military: MilitaryRecord,
    pub nation_title: String,
    pub continent: String,
    pub social_policy: String,
    pub unique_id: String,
    pub government: String,
    pub domestic_policy: String,
    pub date_created: String,
    pub days_old: i64,
    pub flag_url: String,
    pub ruler_title: String,
    pub economic_policy: String,
    pub approval_rating: f64,
    pub nation_rank: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub population: i64,
    pub gdp: f64,
    pub land_area: f64,
    pub soldiers_lost: i64,
    pub soldiers_killed: i64,
    pub tanks_lost: i64,
    pub tanks_killed: i64,
    pub aircraft_lost: i64,
    pub aircraft_killed: i64,
    pub ships_lost: i64,
    pub ships_killed: i64,
    pub missiles_launched: i64,
    pub missiles_eaten: i64,
    pub nukes_launched: i64,
    pub nukes_eaten: i64,
    pub infrastructure_destroyed: f64,
    pub infrastructure_lost: f64,
    pub money_looted: f64,
    pub beige_turns: i64,
    pub radiation: f64,
    pub season: String,
    pub espionage_available: bool,
    pub city_ids: Vec<u32>,
    pub offensive_war_ids: Vec<u32>,
    pub defensive_war_ids: Vec<u32>,
    pub wars: WarLog,
}

impl NationDetail {
    pub fn from_raw(data: &JsonMap) -> Result<Self, PwError> {
        let raw = Raw::new(data);
        Ok(NationDetail {
            military: MilitaryRecord::from_raw(data)?,
            nation_title: raw.string("prename", None)?,
            continent: raw.string("continent", None)?,
            social_policy: raw.string("socialpolicy", None)?,
            unique_id: raw.string("uniqueid", None)?,
            government: raw.string("government", None)?,
            domestic_policy: raw.string("domestic_policy", None)?,
            date_created: raw.string("founded", None)?,
            days_old: raw.int("daysold", None)?,
            flag_url: raw.string("flagurl", None)?,
            ruler_title: raw.string("title", None)?,
            economic_policy: raw.string("ecopolicy", None)?,
            approval_rating: raw.float("approvalrating", None)?,
            nation_rank: raw.int("nationrank", None)?,
            latitude: raw.float("latitude", None)?,
            longitude: raw.float("longitude", None)?,
            population: raw.int("population", None)?,
            gdp: raw.float("gdp", None)?,
            land_area: raw.float("landarea", None)?,
            soldiers_lost: raw.int("soldiercasualties", None)?,
            soldiers_killed: raw.int("soldierskilled", None)?,
            tanks_lost: raw.int("tankcasualties", None)?,
            tanks_killed: raw.int("tankskilled", None)?,
            aircraft_lost: raw.int("aircraftcasualties", None)?,
            aircraft_killed: raw.int("aircraftkilled", None)?,
            ships_lost: raw.int("shipcasualties", None)?,
            ships_killed: raw.int("shipskilled", None)?,
            missiles_launched: raw.int("missilelaunched", None)?,
            missiles_eaten: raw.int("missileseaten", None)?,
            nukes_launched: raw.int("nukeslaunched", None)?,
            nukes_eaten: raw.int("nukeseaten", None)?,
            infrastructure_destroyed: raw.float("infdesttot", None)?,
            infrastructure_lost: raw.float("infraLost", None)?,
            money_looted: raw.float("moneyLooted", None)?,
            beige_turns: raw.int("beige_turns_left", None)?,
            radiation: raw.float("radiation_index", None)?,
            season: raw.string("season", None)?,
            espionage_available: raw.flag("espionage_available", None)?,
            city_ids: raw.id_list("cityids", None)?,
            offensive_war_ids: raw.id_list("offensivewar_ids", None)?,
            defensive_war_ids: raw.id_list("defensivewar_ids", None)?,
            wars: WarLog::default(),
        })
    }
}

/// Alliance-member stockpile quantities. The API reports every one of
/// these as a decimal string, spies included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stockpile {
    pub money: f64,
    pub food: f64,
    pub uranium: f64,
    pub coal: f64,
    pub oil: f64,
    pub bauxite: f64,
    pub lead: f64,
    pub iron: f64,
    pub gasoline: f64,
    pub munitions: f64,
    pub aluminum: f64,
    pub steel: f64,
    pub credits: f64,
    pub spies: f64,
}

impl Stockpile {
    pub fn from_raw(data: &JsonMap) -> Result<Self, PwError> {
        let raw = Raw::new(data);
        Ok(Stockpile {
            money: raw.float("money", None)?,
            food: raw.float("food", None)?,
            uranium: raw.float("uranium", None)?,
            coal: raw.float("coal", None)?,
            oil: raw.float("oil", None)?,
            bauxite: raw.float("bauxite", None)?,
            lead: raw.float("lead", None)?,
            iron: raw.float("iron", None)?,
            gasoline: raw.float("gasoline", None)?,
            munitions: raw.float("munitions", None)?,
            aluminum: raw.float("aluminum", None)?,
            steel: raw.float("steel", None)?,
            credits: raw.float("credits", None)?,
            spies: raw.float("spies", None)?,
        })
    }
}

/// One row of the alliance-members roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberResources {
    pub military: MilitaryRecord,
    pub city_cooldown_turns: i64,
    pub resources: Stockpile,
}

impl MemberResources {
    pub fn from_raw(data: &JsonMap) -> Result<Self, PwError> {
        let raw = Raw::new(data);
        Ok(MemberResources {
            military: MilitaryRecord::from_raw(data)?,
            city_cooldown_turns: raw.int("cityprojecttimerturns", None)?,
            resources: Stockpile::from_raw(data)?,
        })
    }
}

/// Everything the API exposes about one nation: the full nation detail
/// plus the member-only stockpile fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompleteMember {
    pub nation: NationDetail,
    pub city_cooldown_turns: i64,
    pub resources: Stockpile,
}

impl CompleteMember {
    /// Merges two already-normalized records by declared precedence: the
    /// member record is authoritative for the shared stub and military
    /// fields, the nation record supplies every detail-only field.
    pub fn from_parts(member: MemberResources, mut nation: NationDetail) -> Self {
        nation.military = member.military;
        CompleteMember {
            nation,
            city_cooldown_turns: member.city_cooldown_turns,
            resources: member.resources,
        }
    }

    /// Builds from the two raw payloads (member endpoint, nation endpoint)
    /// for the same nation ID.
    pub fn from_raw(member_data: &JsonMap, nation_data: &JsonMap) -> Result<Self, PwError> {
        let member = MemberResources::from_raw(member_data)?;
        let nation = NationDetail::from_raw(nation_data)?;
        Ok(CompleteMember::from_parts(member, nation))
    }
}
