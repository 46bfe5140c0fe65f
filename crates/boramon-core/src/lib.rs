pub mod audit;
pub mod classify;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod notice;
pub mod rules;
pub mod score;
pub mod taxonomy;

pub use audit::AuditStatus;
pub use classify::{Evidence, classify};
pub use engine::{AnalyzedNotice, Classification, analyze};
pub use error::RuleSetError;
pub use normalize::normalize_text;
pub use notice::Notice;
pub use rules::{Rule, RuleSet, TransferDirection, UNIDENTIFIED};
pub use score::{RiskTier, Score};
