use serde::Serialize;

use crate::JsonMap;
use crate::error::PwError;
use crate::models::raw::Raw;

/// One war from the Wars endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarRecord {
    pub war_id: u32,
    pub ongoing: bool,
    pub start_date: String,
    pub attacker_id: u32,
    pub attacker_alliance: String,
    pub attacker_is_applicant: bool,
    pub defender_id: u32,
    pub defender_alliance: String,
    pub defender_is_applicant: bool,
    pub attacker_offering_peace: bool,
    pub ground_control: bool,
}

impl WarRecord {
    /// The endpoint is bugged to always report the war's own ID as 0, so
    /// the caller supplies `war_id` out-of-band.
    pub fn from_raw(data: &JsonMap, war_id: u32) -> Result<Self, PwError> {
        let raw = Raw::new(data);
        Ok(WarRecord {
            war_id,
            ongoing: !raw.flag("war_ended", None)?,
            start_date: raw.string("date", None)?,
            attacker_id: raw.id("aggressor_id", None)?,
            attacker_alliance: raw.string("aggressor_alliance", None)?,
            attacker_is_applicant: raw.flag("aggressor_is_applicant", None)?,
            defender_id: raw.id("defender_id", None)?,
            defender_alliance: raw.string("defender_alliance", None)?,
            defender_is_applicant: raw.flag("defender_is_applicant", None)?,
            attacker_offering_peace: raw.flag("aggressor_offering_peace", None)?,
            ground_control: raw.flag("ground_control", None)?,
        })
    }
}
