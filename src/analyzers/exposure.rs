use crate::models::{Scene, Vec2};

/// 露出幅解析の結果
#[derive(Debug, Clone, Default)]
pub struct ExposureResult {
    /// 自機の向きに垂直な軸への射影幅
    pub width: f64,
    /// 自機から見通せた敵機到達点の数
    pub los_count: usize,
    /// 入力された敵機到達点の総数
    pub total_enemy_reachable: usize,
}

/// 露出幅解析器
///
/// 敵機の到達可能集合のうち、自機の現在位置から見通せる部分集合について、
/// 自機の向きに垂直な方向の拡がり（横方向スパン）を計測します。
/// 自機が現在の前方軸から向きを変えずに交戦できる範囲の幅の近似であり、
/// 厳密な立体角ではありません。
#[derive(Debug, Default)]
pub struct ExposureAnalyzer;

impl ExposureAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// 敵機到達集合の可視部分の横方向スパンを計算
    ///
    /// 入力が空の場合は追加の計算を行わず、全フィールド0の結果を返します。
    /// 射影は大域的なmin/maxのみを追跡するため、可視領域が複数の
    /// クラスタに分断される障害物配置では幅を過小評価することがあります。
    pub fn analyze(&self, scene: &Scene, enemy_reachable: &[Vec2]) -> ExposureResult {
        let mut out = ExposureResult {
            total_enemy_reachable: enemy_reachable.len(),
            ..ExposureResult::default()
        };

        if enemy_reachable.is_empty() {
            return out;
        }

        // 自機の向きを90度回転した垂直軸に射影する
        let facing = scene.friendly.facing.normalized();
        let axis = facing.perp();

        let mut min_s = f64::INFINITY;
        let mut max_s = f64::NEG_INFINITY;

        for p in enemy_reachable {
            if !scene.map.has_line_of_sight(&scene.friendly.pos, p) {
                continue;
            }

            out.los_count += 1;
            let s = (*p - scene.friendly.pos).dot(&axis);
            min_s = min_s.min(s);
            max_s = max_s.max(s);
        }

        if out.los_count > 0 {
            out.width = max_s - min_s;
        }

        out
    }
}
