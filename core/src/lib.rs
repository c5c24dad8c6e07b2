//! spacetab core: the canonical dashboard state, its two-backend
//! persistence, and the feature operations behind the new-tab page.

pub mod dashboard;
pub mod storage;
pub mod types;

pub use dashboard::Dashboard;
