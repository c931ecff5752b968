// Politics & War v1 API client library
// Fetches raw endpoint JSON and normalizes it into typed game entities

pub mod client;
pub mod error;
pub mod formulas;
pub mod ingest;
pub mod models;

// Re-export commonly used types
pub use client::{PwClient, ReqwestTransport, Transport};
pub use error::PwError;
pub use models::{
    nation::{
        CompleteMember, MemberResources, MilitaryRecord, NationDetail, NationStub, Projects,
        Stockpile, WarLog,
    },
    war::WarRecord,
};

/// Raw payload shape shared by every endpoint: a JSON object whose keys
/// vary with the endpoint family.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

// Constants
pub const API_BASE_URL: &str = "https://politicsandwar.com/api";
