// Models module - canonical entities and the raw-payload accessor

pub mod nation;
pub mod raw;
pub mod war;

pub use nation::{
    CompleteMember, MemberResources, MilitaryRecord, NationDetail, NationStub, Projects,
    Stockpile, WarLog,
};
pub use raw::Raw;
pub use war::WarRecord;
