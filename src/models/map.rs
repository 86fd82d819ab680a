use crate::models::common::{segment_intersects_aabb, Aabb, Vec2};

/// 障害物マップ
///
/// 世界境界と軸平行障害物ボックスの列を保持し、境界内判定・円衝突判定・
/// 見通し判定のクエリに応答します。障害物列の編集（追加・削除・置換）は
/// 外部のエディタが解析呼び出しの合間に行う想定で、解析実行中の
/// 同時変更は契約外です。
#[derive(Debug, Clone)]
pub struct Map {
    /// 世界境界
    pub world_bounds: Aabb,
    /// 障害物の列（格納順はインデックス指定の編集操作にのみ意味を持ち、
    /// クエリ結果には影響しない）
    pub obstacles: Vec<Aabb>,
}

impl Map {
    pub fn new(world_bounds: Aabb) -> Self {
        Self {
            world_bounds,
            obstacles: Vec::new(),
        }
    }

    /// 点が世界境界内かどうかを判定（境界を含む）
    pub fn in_bounds(&self, p: &Vec2) -> bool {
        self.world_bounds.contains(p)
    }

    /// 2点間の見通し判定
    ///
    /// いずれかの端点が領域外の場合は常に遮蔽扱い（false）とします。
    /// 領域外は「不明」ではなく「遮蔽」です。それ以外の場合、線分が
    /// いずれかの障害物と交差すればfalse、しなければtrueを返します。
    pub fn has_line_of_sight(&self, from: &Vec2, to: &Vec2) -> bool {
        if !self.in_bounds(from) || !self.in_bounds(to) {
            return false;
        }

        for ob in &self.obstacles {
            if segment_intersects_aabb(from, to, ob) {
                return false;
            }
        }

        true
    }

    /// 指定半径の円が衝突するかどうかを判定
    ///
    /// 中心が領域外の場合は常に衝突扱い（保守的判定）とします。
    /// それ以外の場合、半径で膨張させた障害物のいずれかが中心を含めば
    /// 衝突です（膨張と点判定による円対箱判定の近似）。
    pub fn collides_circle_at(&self, center: &Vec2, radius: f64) -> bool {
        if !self.in_bounds(center) {
            return true;
        }

        for ob in &self.obstacles {
            if ob.inflated(radius).contains(center) {
                return true;
            }
        }

        false
    }

    // --- エディタ向けの編集操作 ---

    /// 世界境界を設定
    pub fn set_world_bounds(&mut self, bounds: Aabb) {
        self.world_bounds = bounds;
    }

    /// 障害物を追加
    pub fn add_obstacle(&mut self, ob: Aabb) {
        self.obstacles.push(ob);
    }

    /// 指定インデックスの障害物を削除
    pub fn remove_obstacle(&mut self, index: usize) {
        self.obstacles.remove(index);
    }

    /// 指定インデックスの障害物を置換
    pub fn set_obstacle(&mut self, index: usize, ob: Aabb) {
        self.obstacles[index] = ob;
    }
}

impl Default for Map {
    fn default() -> Self {
        Self {
            world_bounds: Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0)),
            obstacles: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_map() -> Map {
        Map::new(Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0)))
    }

    #[test]
    fn test_in_bounds_inclusive() {
        let map = test_map();
        assert!(map.in_bounds(&Vec2::new(5.0, 5.0)));
        assert!(map.in_bounds(&Vec2::new(0.0, 0.0)));
        assert!(map.in_bounds(&Vec2::new(10.0, 10.0)));
        assert!(!map.in_bounds(&Vec2::new(10.5, 5.0)));
    }

    #[test]
    fn test_line_of_sight_clear() {
        let map = test_map();
        assert!(map.has_line_of_sight(&Vec2::new(1.0, 1.0), &Vec2::new(9.0, 9.0)));
    }

    #[test]
    fn test_line_of_sight_blocked_by_obstacle() {
        let mut map = test_map();
        map.add_obstacle(Aabb::new(Vec2::new(4.0, 4.0), Vec2::new(6.0, 6.0)));
        assert!(!map.has_line_of_sight(&Vec2::new(1.0, 5.0), &Vec2::new(9.0, 5.0)));
        // 障害物を迂回する見通しは通る
        assert!(map.has_line_of_sight(&Vec2::new(1.0, 1.0), &Vec2::new(9.0, 1.0)));
    }

    #[test]
    fn test_line_of_sight_out_of_bounds_always_blocked() {
        let map = test_map();
        // 障害物が無くても、端点が領域外なら常に遮蔽扱い
        assert!(!map.has_line_of_sight(&Vec2::new(-1.0, 5.0), &Vec2::new(5.0, 5.0)));
        assert!(!map.has_line_of_sight(&Vec2::new(5.0, 5.0), &Vec2::new(5.0, 11.0)));
        assert!(!map.has_line_of_sight(&Vec2::new(-1.0, -1.0), &Vec2::new(11.0, 11.0)));
    }

    #[test]
    fn test_collides_circle_out_of_bounds() {
        let map = test_map();
        // 領域外の中心は障害物が無くても衝突扱い
        assert!(map.collides_circle_at(&Vec2::new(-0.5, 5.0), 0.25));
        assert!(!map.collides_circle_at(&Vec2::new(5.0, 5.0), 0.25));
    }

    #[test]
    fn test_collides_circle_inflated_obstacle() {
        let mut map = test_map();
        map.add_obstacle(Aabb::new(Vec2::new(4.0, 4.0), Vec2::new(6.0, 6.0)));

        // 中心が障害物の外でも、半径ぶん膨張した範囲内なら衝突
        assert!(map.collides_circle_at(&Vec2::new(3.8, 5.0), 0.25));
        // 膨張範囲の外なら衝突しない
        assert!(!map.collides_circle_at(&Vec2::new(3.5, 5.0), 0.25));
        // 障害物の内部は当然衝突
        assert!(map.collides_circle_at(&Vec2::new(5.0, 5.0), 0.25));
    }

    #[test]
    fn test_obstacle_edit_operations() {
        let mut map = test_map();
        map.add_obstacle(Aabb::new(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)));
        map.add_obstacle(Aabb::new(Vec2::new(7.0, 7.0), Vec2::new(8.0, 8.0)));
        assert_eq!(map.obstacles.len(), 2);

        map.set_obstacle(0, Aabb::new(Vec2::new(3.0, 3.0), Vec2::new(4.0, 4.0)));
        assert_eq!(map.obstacles[0].min, Vec2::new(3.0, 3.0));

        map.remove_obstacle(0);
        assert_eq!(map.obstacles.len(), 1);
        assert_eq!(map.obstacles[0].min, Vec2::new(7.0, 7.0));
    }
}
