pub mod handlers;
pub mod pipeline;
pub mod role_matcher;

pub use pipeline::Analyzer;
pub use role_matcher::{RoleCandidate, RoleMatcher};
