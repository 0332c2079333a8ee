pub mod identity_ops;
pub mod aggregate_ops;
pub mod rank_ops;
pub mod filter_ops;
pub mod analysis_ops;

pub use identity_ops::IdentityResolver;
pub use rank_ops::RankConfig;
pub use analysis_ops::Analysis;
