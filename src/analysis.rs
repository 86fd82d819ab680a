//! # Analysis モジュール
//!
//! 戦術位置評価の中核となるシーン解析器を提供します。
//!
//! このモジュールは、1つのシーンスナップショットに対して3つの解析器
//! （到達可能性・露出幅・可視割合）を統括実行し、構造化された結果と
//! 説明文を組み立てます。各解析器は不変のスナップショットに対する
//! 純粋関数であり、マップやエージェントを変更することはありません。
//!
//! ## 解析処理順序
//!
//! 1回の解析において、以下の順序で処理が実行されます：
//!
//! 1. **到達可能性解析**: 両エージェントの移動円板内の格子点を抽出
//! 2. **露出幅解析**: 敵機の到達可能集合のうち見通せる部分の横方向スパンを計測
//! 3. **可視割合解析**: 自機位置から敵機シルエットの可視割合を推定
//!
//! 3つの解析器はすべて必ず完了します。空入力に対してはゼロ値の
//! デフォルトを返すだけで、リトライや部分結果はありません。
//!
//! ## 使用例
//!
//! ```rust
//! use taceval::analysis::SceneAnalyzer;
//! use taceval::models::Scene;
//!
//! let scene = Scene::default();
//! let result = SceneAnalyzer::new().analyze(&scene);
//! println!("面積比: {:.3}", result.reachability.area_ratio);
//! ```

use crate::analyzers::{
    ExposureAnalyzer, ExposureResult, ReachabilityAnalyzer, ReachabilityResult,
    VisibilityAnalyzer, VisibilityResult,
};
use crate::models::Scene;
use tracing::debug;

/// 解析結果バンドル
///
/// 3つの解析結果と人間可読の説明文をまとめた不変の出力です。
/// 構築後に変更されることはなく、所有権ごと呼び出し側に渡されます。
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// 到達可能性解析の結果
    pub reachability: ReachabilityResult,
    /// 露出幅解析の結果
    pub exposure: ExposureResult,
    /// 可視割合解析の結果
    pub visibility: VisibilityResult,
    /// 説明文（2件以上: 先頭が手法の説明、2件目が計測値の要約）
    pub explanations: Vec<String>,
}

/// シーン解析器
///
/// 状態を持たない統括器で、唯一のエントリポイント`analyze`を提供します。
#[derive(Debug, Default)]
pub struct SceneAnalyzer;

impl SceneAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// 1つのシーンスナップショットを解析
    ///
    /// 同一のシーンに対しては常にビット同一（浮動小数点動作が固定の場合）の
    /// 結果を返します。解析実行中のシーンの同時変更は契約外です。
    pub fn analyze(&self, scene: &Scene) -> AnalysisResult {
        // A) 到達可能面積比
        let reachability = ReachabilityAnalyzer::new().analyze(scene);
        debug!(
            "到達可能性解析完了: 自機={}点, 敵機={}点, 面積比={:.3}",
            reachability.reachable_friendly.len(),
            reachability.reachable_enemy.len(),
            reachability.area_ratio
        );

        // B) 露出幅（敵機到達セルのうち自機から見通せるもの）
        let exposure = ExposureAnalyzer::new().analyze(scene, &reachability.reachable_enemy);
        debug!(
            "露出幅解析完了: 見通し={}/{}, 幅={:.3}",
            exposure.los_count, exposure.total_enemy_reachable, exposure.width
        );

        // C) 可視割合（自機 → 敵機）
        let visibility =
            VisibilityAnalyzer::new().analyze(scene, &scene.friendly.pos, &scene.enemy);
        debug!(
            "可視割合解析完了: {}/{} ({:.3})",
            visibility.visible_count, visibility.sample_count, visibility.visible_fraction
        );

        // 説明文の組み立て
        let mechanism = format!(
            "メカニズム: 到達可能性解析はセル幅 {} の格子点を移動円板（r = v×T, T = {}秒）の\
             範囲でサンプリングし、エージェント半径で膨張させた障害物と衝突する点を除外する。\
             見通し判定は線分とAABBの交差判定で行い、領域外は常に遮蔽として扱う。",
            scene.cell_size, scene.t_horizon
        );

        let factual = format!(
            "計測値: 自機到達セル数 = {}, 敵機到達セル数 = {}, 面積比 = {:.3}。\
             自機から見通せる敵機到達セル = {}/{}, 露出幅 = {:.3}。\
             可視割合 = {:.3} ({}/{})。",
            reachability.reachable_friendly.len(),
            reachability.reachable_enemy.len(),
            reachability.area_ratio,
            exposure.los_count,
            exposure.total_enemy_reachable,
            exposure.width,
            visibility.visible_fraction,
            visibility.visible_count,
            visibility.sample_count
        );

        AnalysisResult {
            reachability,
            exposure,
            visibility,
            explanations: vec![mechanism, factual],
        }
    }
}
