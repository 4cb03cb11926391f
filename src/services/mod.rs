pub mod ranking;
pub mod recommending;
pub mod server;

pub use ranking::RankingService;
pub use recommending::RecommendService;
pub use server::ServerService;
