use crate::models::common::Vec2;

/// エージェント（自機・敵機共通のモデル）
///
/// 円形の機体として扱われ、位置・向き・半径・速度を持ちます。
/// 解析1回の実行中は不変であり、エディタによる変更は解析呼び出しの
/// 合間にのみ行われます。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Agent {
    /// 現在位置
    pub pos: Vec2,
    /// 機体の向き（単位ベクトルを想定、取り込み時に正規化）
    pub facing: Vec2,
    /// 機体半径（m、正の値であることは呼び出し側の契約）
    pub radius: f64,
    /// 移動速度（距離単位/秒、非負）
    pub speed: f64,
}

impl Agent {
    /// 新しいエージェントを作成します
    ///
    /// `facing`は取り込み時に正規化されます。零ベクトルが渡された場合は
    /// フォールバック値 (1, 0) になります。
    pub fn new(pos: Vec2, facing: Vec2, radius: f64, speed: f64) -> Self {
        Self {
            pos,
            facing: facing.normalized(),
            radius,
            speed,
        }
    }

    /// 時間ホライズンT秒で移動できる最大距離を計算
    pub fn max_travel_distance(&self, t_horizon: f64) -> f64 {
        self.speed * t_horizon
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self {
            pos: Vec2::default(),
            facing: Vec2::new(1.0, 0.0),
            radius: 0.25,
            speed: 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_normalized_on_ingestion() {
        let agent = Agent::new(Vec2::new(2.0, 2.0), Vec2::new(3.0, 4.0), 0.25, 5.0);
        assert!((agent.facing.norm() - 1.0).abs() < 1e-12);
        assert!((agent.facing.x - 0.6).abs() < 1e-12);
        assert!((agent.facing.y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_zero_facing_falls_back() {
        let agent = Agent::new(Vec2::default(), Vec2::new(0.0, 0.0), 0.25, 5.0);
        assert_eq!(agent.facing, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_max_travel_distance() {
        let agent = Agent::new(Vec2::default(), Vec2::new(1.0, 0.0), 0.25, 5.0);
        assert!((agent.max_travel_distance(0.30) - 1.5).abs() < 1e-12);
        assert_eq!(agent.max_travel_distance(0.0), 0.0);
    }
}
