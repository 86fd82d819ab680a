// 基本的なデータ型と幾何ユーティリティ
pub mod common;

// ドメインモデルの実装
pub mod agent;
pub mod map;
pub mod scene;

// 便利な re-export
pub use agent::Agent;
pub use common::{ray_intersects_aabb, segment_intersects_aabb, Aabb, Vec2};
pub use map::Map;
pub use scene::Scene;
