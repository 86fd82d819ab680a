use crate::models::{Map, Scene, Vec2};

/// 到達可能性解析の結果
#[derive(Debug, Clone)]
pub struct ReachabilityResult {
    /// 自機が到達可能な格子点の列（列挙順）
    pub reachable_friendly: Vec<Vec2>,
    /// 敵機が到達可能な格子点の列（列挙順）
    pub reachable_enemy: Vec<Vec2>,
    /// 到達可能面積比（自機セル数 / 敵機セル数）
    ///
    /// 敵機の到達可能集合が空の場合は0.0。両エージェントで同一の
    /// セル幅を使う前提でのサンプル数の比であり、厳密な積分面積では
    /// ありません。
    pub area_ratio: f64,
}

impl Default for ReachabilityResult {
    fn default() -> Self {
        Self {
            reachable_friendly: Vec::new(),
            reachable_enemy: Vec::new(),
            area_ratio: 0.0,
        }
    }
}

/// 到達可能性解析器
///
/// 各エージェントが移動予算 distance = speed × T の範囲内で占有できる
/// 格子点の集合を、障害物との衝突を考慮してサンプリングします。
#[derive(Debug, Default)]
pub struct ReachabilityAnalyzer;

impl ReachabilityAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// シーンの両エージェントについて到達可能集合を計算
    ///
    /// `cell_size > 0` は呼び出し側の契約です（シナリオ読み込み時に検証）。
    pub fn analyze(&self, scene: &Scene) -> ReachabilityResult {
        let max_dist_friendly = scene.friendly.max_travel_distance(scene.t_horizon);
        let max_dist_enemy = scene.enemy.max_travel_distance(scene.t_horizon);

        let reachable_friendly = sample_reachable(
            &scene.map,
            &scene.friendly.pos,
            max_dist_friendly,
            scene.cell_size,
            scene.friendly.radius,
        );

        let reachable_enemy = sample_reachable(
            &scene.map,
            &scene.enemy.pos,
            max_dist_enemy,
            scene.cell_size,
            scene.enemy.radius,
        );

        let area_ratio = if reachable_enemy.is_empty() {
            0.0
        } else {
            reachable_friendly.len() as f64 / reachable_enemy.len() as f64
        };

        ReachabilityResult {
            reachable_friendly,
            reachable_enemy,
            area_ratio,
        }
    }
}

/// 移動円板内の到達可能な格子点をサンプリング
///
/// エージェント現在位置を中心とするセル幅`cell_size`の正方格子上で、
/// 移動円板内かつ衝突しない点を列挙します。列挙順はdx外側・dy内側で
/// 固定されており決定的です（順序自体に意味はないが再現性のため）。
/// 移動距離0でも、中心点が衝突しなければ中心点自身は含まれます。
fn sample_reachable(
    map: &Map,
    center: &Vec2,
    distance: f64,
    cell_size: f64,
    agent_radius: f64,
) -> Vec<Vec2> {
    let mut points = Vec::new();

    let steps = (distance / cell_size).ceil() as i32;

    for dx in -steps..=steps {
        for dy in -steps..=steps {
            let p = Vec2::new(
                center.x + dx as f64 * cell_size,
                center.y + dy as f64 * cell_size,
            );

            // 円板内判定
            if p.distance(center) > distance {
                continue;
            }

            // 衝突判定
            if map.collides_circle_at(&p, agent_radius) {
                continue;
            }

            points.push(p);
        }
    }

    points
}
