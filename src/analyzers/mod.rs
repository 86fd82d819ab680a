// 各指標の解析器の実装
pub mod exposure;
pub mod reachability;
pub mod visibility;

// 便利な re-export
pub use exposure::{ExposureAnalyzer, ExposureResult};
pub use reachability::{ReachabilityAnalyzer, ReachabilityResult};
pub use visibility::{VisibilityAnalyzer, VisibilityResult};
