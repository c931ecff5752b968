use serde_json::Value;

use crate::API_BASE_URL;
use crate::JsonMap;
use crate::client::transport::{ReqwestTransport, Transport};
use crate::error::PwError;
use crate::ingest;
use crate::models::raw::Raw;
use crate::models::{CompleteMember, MemberResources, NationDetail, NationStub, WarRecord};

/// Client for the Politics & War v1 API. One transport round trip per
/// logical call; no caching, rate limiting, or retry. Holds no mutable
/// state, so concurrent callers need no coordination.
pub struct PwClient {
    transport: Box<dyn Transport>,
    api_key: Option<String>,
}

impl PwClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        PwClient {
            transport: Box::new(ReqwestTransport::new()),
            api_key: Some(api_key.into()),
        }
    }

    /// Injects a custom transport. `api_key` may be `None`; the key slot
    /// in endpoint URLs then renders empty and keyless endpoints still work.
    pub fn with_transport(transport: Box<dyn Transport>, api_key: Option<String>) -> Self {
        PwClient { transport, api_key }
    }

    fn key(&self) -> &str {
        self.api_key.as_deref().unwrap_or("")
    }

    async fn fetch_payload(&self, url: &str) -> Result<JsonMap, PwError> {
        ingest::call_api(self.transport.as_ref(), url).await
    }

    /// Full detail for one nation.
    pub async fn get_nation(&self, nation_id: u32) -> Result<NationDetail, PwError> {
        let url = format!("{}/nation/id={}&key={}", API_BASE_URL, nation_id, self.key());
        let data = self.fetch_payload(&url).await?;
        NationDetail::from_raw(&data)
    }

    /// Summary stubs for every nation in the game.
    pub async fn get_nations(&self) -> Result<Vec<NationStub>, PwError> {
        let url = format!("{}/nations/?key={}", API_BASE_URL, self.key());
        let data = self.fetch_payload(&url).await?;
        nation_entries(data)?
            .iter()
            .map(NationStub::from_raw)
            .collect()
    }

    /// Roster of one alliance, with military and stockpile detail.
    pub async fn get_alliance_members(
        &self,
        alliance_id: u32,
    ) -> Result<Vec<MemberResources>, PwError> {
        let url = format!(
            "{}/alliance-members/?allianceid={}&key={}",
            API_BASE_URL,
            alliance_id,
            self.key()
        );
        let data = self.fetch_payload(&url).await?;
        nation_entries(data)?
            .iter()
            .map(MemberResources::from_raw)
            .collect()
    }

    /// One war. The endpoint always reports the war's own ID as 0, so the
    /// requested ID is stamped onto the record instead.
    pub async fn get_war(&self, war_id: u32) -> Result<WarRecord, PwError> {
        let url = format!("{}/war/{}&key={}", API_BASE_URL, war_id, self.key());
        let data = self.fetch_payload(&url).await?;
        WarRecord::from_raw(&data, war_id)
    }

    /// The union of member and nation data for one alliance member: two
    /// round trips, merged with the member payload authoritative for the
    /// shared military fields.
    pub async fn get_complete_member(
        &self,
        alliance_id: u32,
        nation_id: u32,
    ) -> Result<CompleteMember, PwError> {
        let url = format!(
            "{}/alliance-members/?allianceid={}&key={}",
            API_BASE_URL,
            alliance_id,
            self.key()
        );
        let roster = self.fetch_payload(&url).await?;
        let member_data = nation_entries(roster)?
            .into_iter()
            .find(|entry| {
                Raw::new(entry)
                    .id("nationid", None)
                    .is_ok_and(|id| id == nation_id)
            })
            .ok_or_else(|| {
                PwError::InvalidRequest(format!(
                    "nation {nation_id} is not a member of alliance {alliance_id}"
                ))
            })?;

        let nation_url = format!("{}/nation/id={}&key={}", API_BASE_URL, nation_id, self.key());
        let nation_data = self.fetch_payload(&nation_url).await?;
        CompleteMember::from_raw(&member_data, &nation_data)
    }

    /// Fills the nation's two war buckets by fetching every listed war ID,
    /// preserving the listed order. One round trip per war.
    pub async fn load_wars(&self, nation: &mut NationDetail) -> Result<(), PwError> {
        let mut offensive = Vec::with_capacity(nation.offensive_war_ids.len());
        for war_id in &nation.offensive_war_ids {
            offensive.push(self.get_war(*war_id).await?);
        }
        let mut defensive = Vec::with_capacity(nation.defensive_war_ids.len());
        for war_id in &nation.defensive_war_ids {
            defensive.push(self.get_war(*war_id).await?);
        }
        nation.wars.offensive = offensive;
        nation.wars.defensive = defensive;
        Ok(())
    }
}

// The two list endpoints wrap their rows in a top-level `nations` array.
fn nation_entries(mut data: JsonMap) -> Result<Vec<JsonMap>, PwError> {
    let Some(value) = data.remove("nations") else {
        return Err(PwError::missing("nations", None));
    };
    let Value::Array(items) = value else {
        return Err(PwError::malformed(
            "nations",
            format!("expected an array, got {value}"),
        ));
    };
    items
        .into_iter()
        .map(|item| match item {
            Value::Object(map) => Ok(map),
            other => Err(PwError::malformed(
                "nations",
                format!("expected an object entry, got {other}"),
            )),
        })
        .collect()
}
