pub mod contact;
pub mod drafts;
pub mod entries;
pub mod normalize;
pub mod translate;
pub mod uploads;
