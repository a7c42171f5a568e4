//! Skill keyword loading module
//! Handles keyword resources, line splitting, and load policies

pub mod source;
pub mod list;

pub use list::SkillList;
pub use source::SkillSource;
