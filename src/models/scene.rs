use crate::models::agent::Agent;
use crate::models::map::Map;

/// 解析対象のシーンスナップショット
///
/// 1つのマップと2機のエージェント（自機・敵機）、および解析パラメータを
/// 集約した、解析エンジンへの唯一の入力です。スナップショットであり
/// 購読ではないため、解析の呼び出し後に加えられた変更が解析結果に
/// 反映されることはありません。
#[derive(Debug, Clone)]
pub struct Scene {
    /// 障害物マップ
    pub map: Map,
    /// 自機（観測・射撃側）
    pub friendly: Agent,
    /// 敵機（評価対象側）
    pub enemy: Agent,
    /// 時間ホライズンT（秒）
    pub t_horizon: f64,
    /// 到達可能性グリッドのセル幅
    pub cell_size: f64,
    /// 可視判定の円周サンプル数
    pub visibility_samples: i32,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            map: Map::default(),
            friendly: Agent::default(),
            enemy: Agent::default(),
            t_horizon: 0.30,
            cell_size: 0.5,
            visibility_samples: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters() {
        let scene = Scene::default();
        assert_eq!(scene.t_horizon, 0.30);
        assert_eq!(scene.cell_size, 0.5);
        assert_eq!(scene.visibility_samples, 64);
        assert!(scene.map.obstacles.is_empty());
    }
}
