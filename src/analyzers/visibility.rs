use crate::models::{Agent, Scene, Vec2};

/// 可視割合解析の結果
#[derive(Debug, Clone, Default)]
pub struct VisibilityResult {
    /// 可視割合 [0, 1]
    pub visible_fraction: f64,
    /// 見通せたサンプル点の数
    pub visible_count: usize,
    /// 円周上のサンプル点の総数
    pub sample_count: usize,
}

/// 可視割合解析器
///
/// 射撃位置から対象エージェントの円形シルエットがどの程度見通せるかを、
/// 円周上のレイサンプリングによって [0, 1] の割合として推定します。
/// サンプリングによる近似であり厳密な可視弧の計算ではないため、
/// 精度はサンプル数に比例します。
#[derive(Debug, Default)]
pub struct VisibilityAnalyzer;

impl VisibilityAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// 射撃位置から対象機のシルエット可視割合を計算
    ///
    /// `visibility_samples`が0以下の場合は黙って1に切り上げます。
    /// 射撃位置が領域外の場合は見通し判定の規則によりすべての
    /// サンプルが遮蔽扱いになります。
    pub fn analyze(&self, scene: &Scene, shooter_pos: &Vec2, target: &Agent) -> VisibilityResult {
        let n = scene.visibility_samples.max(1) as usize;

        let mut out = VisibilityResult {
            sample_count: n,
            ..VisibilityResult::default()
        };

        for i in 0..n {
            let theta = 2.0 * std::f64::consts::PI * i as f64 / n as f64;

            // 対象機の円周上のサンプル点
            let sample = Vec2::new(
                target.pos.x + theta.cos() * target.radius,
                target.pos.y + theta.sin() * target.radius,
            );

            if scene.map.has_line_of_sight(shooter_pos, &sample) {
                out.visible_count += 1;
            }
        }

        out.visible_fraction = out.visible_count as f64 / out.sample_count as f64;
        out
    }
}
