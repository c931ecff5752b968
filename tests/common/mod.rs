#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pnwapi::{JsonMap, PwError, Transport};
use serde_json::{Value, json};

/// Transport that replays canned `(status, body)` responses in order and
/// records every URL it was asked for. Clones share state, so tests keep
/// one handle for inspection after handing the other to the client.
#[derive(Clone)]
pub struct MockTransport {
    responses: Arc<Mutex<VecDeque<(u16, String)>>>,
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl MockTransport {
    pub fn new(responses: Vec<(u16, &str)>) -> Self {
        MockTransport {
            responses: Arc::new(Mutex::new(
                responses
                    .into_iter()
                    .map(|(status, body)| (status, body.to_string()))
                    .collect(),
            )),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn fetch(&self, url: &str) -> Result<(u16, String), PwError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| PwError::UnexpectedPayload("mock transport exhausted".to_string()))
    }
}

pub fn as_map(value: Value) -> JsonMap {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture must be a JSON object, got {other}"),
    }
}

fn project_fields() -> Value {
    json!({
        "bauxiteworks": "1",
        "ironworks": "0",
        "armsstockpile": "1",
        "emgasreserve": "0",
        "massirrigation": "0",
        "inttradecenter": "1",
        "missilelpad": "0",
        "nuclearresfac": "0",
        "irondome": "1",
        "vitaldefsys": "0",
        "uraniumenrich": "0",
        "intagncy": "1",
        "propbureau": "1",
        "cenciveng": "0"
    })
}

fn merge(base: Value, extra: Value) -> Value {
    let mut map = as_map(base);
    map.extend(as_map(extra));
    Value::Object(map)
}

/// Payload in the shape of the single-nation endpoint: `nation` /
/// `leadername` / `infrastructure` / `vacmode` key spellings, most
/// numerics encoded as strings the way that endpoint sends them.
pub fn nation_payload() -> JsonMap {
    let stub = json!({
        "nationid": "31191",
        "nation": "Reach",
        "leadername": "Mikey",
        "war_policy": "Turtle",
        "color": "olive",
        "alliance": "Arrgh",
        "allianceid": "913",
        "allianceposition": "2",
        "cities": 19,
        "infrastructure": "22800.00",
        "offensivewars": 1,
        "defensivewars": 2,
        "score": "3745.25",
        "vacmode": "0",
        "minutessinceactive": 12,
        "soldiers": "285000",
        "tanks": "23750",
        "aircraft": "1710",
        "ships": "285",
        "missiles": "4",
        "nukes": "0"
    });
    let detail = json!({
        "prename": "The Kingdom of",
        "continent": "Europe",
        "socialpolicy": "Moderate",
        "uniqueid": "abc123ff",
        "government": "Monarchy",
        "domestic_policy": "Manifest Destiny",
        "founded": "2015-01-22 21:10:54",
        "daysold": "4236",
        "flagurl": "https://politicsandwar.com/img/flags/reach.png",
        "title": "King",
        "ecopolicy": "Left",
        "approvalrating": "72.5",
        "nationrank": "412",
        "latitude": "51.507222",
        "longitude": "-0.1275",
        "population": "3214890",
        "gdp": "2751034612.11",
        "landarea": "38000.00",
        "soldiercasualties": "1520340",
        "soldierskilled": "2230550",
        "tankcasualties": "80120",
        "tankskilled": "95240",
        "aircraftcasualties": "4210",
        "aircraftkilled": "5830",
        "shipcasualties": "820",
        "shipskilled": "1240",
        "missilelaunched": "12",
        "missileseaten": "7",
        "nukeslaunched": "1",
        "nukeseaten": "2",
        "infdesttot": "184210.55",
        "infraLost": "96320.10",
        "moneyLooted": "1204558.91",
        "beige_turns_left": "0",
        "radiation_index": "14.2",
        "season": "summer",
        "espionage_available": true,
        "cityids": ["101", "102", "103"],
        "offensivewar_ids": ["5501"],
        "defensivewar_ids": ["5502", "5503"]
    });
    as_map(merge(merge(stub, detail), project_fields()))
}

/// Payload in the shape of one alliance-members roster row: `name` /
/// `leader` / `totalinfrastructure` / `vmode` key spellings.
pub fn member_payload() -> JsonMap {
    let stub = json!({
        "nationid": "12810",
        "name": "Nightsilver Woods",
        "leader": "Luna",
        "war_policy": "Fortress",
        "color": "purple",
        "alliance": "Moonlit Covenant",
        "allianceid": "4224",
        "allianceposition": "5",
        "cities": "14",
        "totalinfrastructure": "17767.35",
        "offensivewars": "0",
        "defensivewars": "1",
        "score": "2410.88",
        "vmode": "1",
        "minutessinceactive": "3",
        "soldiers": "210000",
        "tanks": "17500",
        "aircraft": "1260",
        "ships": "210",
        "missiles": "0",
        "nukes": "0"
    });
    let resources = json!({
        "cityprojecttimerturns": "11",
        "money": "18232751.20",
        "food": "125000.5",
        "uranium": "318.22",
        "coal": "4120.00",
        "oil": "2210.75",
        "bauxite": "1802.00",
        "lead": "2455.10",
        "iron": "3120.90",
        "gasoline": "8000.00",
        "munitions": "9500.00",
        "aluminum": "4100.33",
        "steel": "5200.80",
        "credits": "4",
        "spies": "32"
    });
    as_map(merge(merge(stub, resources), project_fields()))
}

/// Payload in the shape of one Nations-list entry: no military detail.
pub fn nations_list_entry() -> JsonMap {
    as_map(json!({
        "nationid": 31191,
        "nation": "Reach",
        "leader": "Mikey",
        "war_policy": "Turtle",
        "color": "olive",
        "alliance": "Arrgh",
        "allianceid": 913,
        "allianceposition": 2,
        "cities": 19,
        "infrastructure": 22800.0,
        "offensivewars": 1,
        "defensivewars": 2,
        "score": 3745.25,
        "vacmode": 0,
        "minutessinceactive": 12
    }))
}

/// Payload from the war endpoint. Its `war_id` field is always 0 on the
/// wire, which is why the record takes the ID out-of-band.
pub fn war_payload() -> JsonMap {
    as_map(json!({
        "war_ended": "0",
        "date": "2024-03-02 11:08:25",
        "aggressor_id": "31191",
        "aggressor_alliance": "Arrgh",
        "aggressor_is_applicant": "0",
        "defender_id": "12810",
        "defender_alliance": "Moonlit Covenant",
        "defender_is_applicant": "1",
        "aggressor_offering_peace": "0",
        "ground_control": "1"
    }))
}
