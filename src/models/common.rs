use std::ops::{Add, Mul, Sub};

/// 平行判定に使用する許容誤差
/// 軸方向の変位がこの値未満の場合、その軸に対して平行とみなす
const PARALLEL_EPS: f64 = 1e-12;

/// 2次元ベクトルを表す構造体（位置・方向の両方に使用）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64, // m
    pub y: f64, // m
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// 内積を計算
    pub fn dot(&self, other: &Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// ベクトルの長さ（ユークリッドノルム）
    pub fn norm(&self) -> f64 {
        (self.x.powi(2) + self.y.powi(2)).sqrt()
    }

    /// ベクトルを正規化
    ///
    /// 零ベクトルの場合は固定のフォールバック値 (1, 0) を返します。
    /// NaNを生成せず、失敗もしません。
    pub fn normalized(&self) -> Self {
        let n = self.norm();
        if n > 0.0 {
            Self::new(self.x / n, self.y / n)
        } else {
            Self::new(1.0, 0.0)
        }
    }

    /// 90度回転した垂直ベクトルを取得
    pub fn perp(&self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// 2点間の距離を計算
    pub fn distance(&self, other: &Vec2) -> f64 {
        (*self - *other).norm()
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self::Output {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

/// 軸平行境界ボックス（AABB）
///
/// 不変条件: `min.x <= max.x` かつ `min.y <= max.y`
/// （能動的には強制しないが、正しい結果のために必要）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// 点の包含判定（境界を含む）
    pub fn contains(&self, p: &Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// 四辺を外側にrだけ膨張させたボックスを取得
    ///
    /// 円と箱の衝突判定を、膨張させた箱と点の判定に変換するために使用します
    /// （ミンコフスキー和による近似）。
    pub fn inflated(&self, r: f64) -> Self {
        Self::new(
            Vec2::new(self.min.x - r, self.min.y - r),
            Vec2::new(self.max.x + r, self.max.y + r),
        )
    }
}

/// スラブ法による共通区間計算
///
/// パラメトリック表現 p(t) = origin + t*delta について、各軸のスラブ内に
/// 留まる区間 [tmin, tmax] を初期区間 [t0, t1] から狭めていきます。
/// 区間が空になった場合はNoneを返します。
fn slab_interval(origin: &Vec2, delta: &Vec2, b: &Aabb, t0: f64, t1: f64) -> Option<(f64, f64)> {
    let mut tmin = t0;
    let mut tmax = t1;

    let axes = [
        (delta.x, origin.x, b.min.x, b.max.x),
        (delta.y, origin.y, b.min.y, b.max.y),
    ];

    for (d, o, lo, hi) in axes {
        if d.abs() < PARALLEL_EPS {
            // 平行: 固定座標がスラブ内になければ交差しない
            if o < lo || o > hi {
                return None;
            }
        } else {
            let inv = 1.0 / d;
            let mut ta = (lo - o) * inv;
            let mut tb = (hi - o) * inv;
            if ta > tb {
                std::mem::swap(&mut ta, &mut tb);
            }
            tmin = tmin.max(ta);
            tmax = tmax.min(tb);
            if tmin > tmax {
                return None;
            }
        }
    }

    Some((tmin, tmax))
}

/// 線分とAABBの交差判定（境界を含む）
///
/// 閉線分 p0→p1 がボックスと交差するかをスラブ法で判定します。
pub fn segment_intersects_aabb(p0: &Vec2, p1: &Vec2, b: &Aabb) -> bool {
    let delta = *p1 - *p0;
    slab_interval(p0, &delta, b, 0.0, 1.0).is_some()
}

/// レイとAABBの交差距離を計算
///
/// 非負の最近接ヒット距離を返します。交差しない場合は正の無限大、
/// レイの始点がボックス内にある場合は0.0を返します。
/// `dir`は単位ベクトルであることを想定しています。
pub fn ray_intersects_aabb(origin: &Vec2, dir: &Vec2, b: &Aabb) -> f64 {
    match slab_interval(origin, dir, b, 0.0, f64::INFINITY) {
        Some((tmin, _)) => tmin,
        None => f64::INFINITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(a - b, Vec2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(a.dot(&b), 1.0);
    }

    #[test]
    fn test_vec2_normalized_zero_fallback() {
        // 零ベクトルの正規化は固定値 (1, 0)
        let z = Vec2::new(0.0, 0.0);
        assert_eq!(z.normalized(), Vec2::new(1.0, 0.0));

        let v = Vec2::new(0.0, 3.0);
        let n = v.normalized();
        assert!((n.norm() - 1.0).abs() < 1e-12);
        assert_eq!(n, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_vec2_perp() {
        let f = Vec2::new(1.0, 0.0);
        assert_eq!(f.perp(), Vec2::new(0.0, 1.0));
        // 垂直ベクトルとの内積は0
        let v = Vec2::new(0.6, 0.8);
        assert!(v.dot(&v.perp()).abs() < 1e-12);
    }

    #[test]
    fn test_aabb_contains_boundary_inclusive() {
        let b = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(b.contains(&Vec2::new(5.0, 5.0)));
        assert!(b.contains(&Vec2::new(0.0, 0.0)));
        assert!(b.contains(&Vec2::new(10.0, 10.0)));
        assert!(b.contains(&Vec2::new(0.0, 10.0)));
        assert!(!b.contains(&Vec2::new(-0.001, 5.0)));
        assert!(!b.contains(&Vec2::new(5.0, 10.001)));
    }

    #[test]
    fn test_aabb_inflated() {
        let b = Aabb::new(Vec2::new(2.0, 2.0), Vec2::new(4.0, 4.0));
        let inflated = b.inflated(0.5);
        assert_eq!(inflated.min, Vec2::new(1.5, 1.5));
        assert_eq!(inflated.max, Vec2::new(4.5, 4.5));
        assert!(inflated.contains(&Vec2::new(1.5, 3.0)));
        assert!(!b.contains(&Vec2::new(1.5, 3.0)));
    }

    #[test]
    fn test_segment_intersects_aabb_basic() {
        let b = Aabb::new(Vec2::new(4.0, 4.0), Vec2::new(6.0, 6.0));

        // 貫通する線分
        assert!(segment_intersects_aabb(
            &Vec2::new(0.0, 5.0),
            &Vec2::new(10.0, 5.0),
            &b
        ));
        // ボックスの手前で終わる線分
        assert!(!segment_intersects_aabb(
            &Vec2::new(0.0, 5.0),
            &Vec2::new(3.0, 5.0),
            &b
        ));
        // ボックスを完全に外れる線分
        assert!(!segment_intersects_aabb(
            &Vec2::new(0.0, 0.0),
            &Vec2::new(10.0, 0.0),
            &b
        ));
        // ボックス内部で完結する線分
        assert!(segment_intersects_aabb(
            &Vec2::new(4.5, 4.5),
            &Vec2::new(5.5, 5.5),
            &b
        ));
    }

    #[test]
    fn test_segment_intersects_aabb_axis_parallel() {
        let b = Aabb::new(Vec2::new(4.0, 4.0), Vec2::new(6.0, 6.0));

        // 軸平行線分: 固定座標がスラブ内にある場合のみ交差
        assert!(segment_intersects_aabb(
            &Vec2::new(5.0, 0.0),
            &Vec2::new(5.0, 10.0),
            &b
        ));
        assert!(!segment_intersects_aabb(
            &Vec2::new(3.0, 0.0),
            &Vec2::new(3.0, 10.0),
            &b
        ));
        // 境界上をなぞる線分は交差扱い
        assert!(segment_intersects_aabb(
            &Vec2::new(4.0, 0.0),
            &Vec2::new(4.0, 10.0),
            &b
        ));
    }

    #[test]
    fn test_segment_intersects_aabb_degenerate_point() {
        let b = Aabb::new(Vec2::new(4.0, 4.0), Vec2::new(6.0, 6.0));

        // 長さ零の線分は点の包含判定と一致する
        assert!(segment_intersects_aabb(
            &Vec2::new(5.0, 5.0),
            &Vec2::new(5.0, 5.0),
            &b
        ));
        assert!(!segment_intersects_aabb(
            &Vec2::new(1.0, 1.0),
            &Vec2::new(1.0, 1.0),
            &b
        ));
    }

    #[test]
    fn test_ray_intersects_aabb() {
        let b = Aabb::new(Vec2::new(4.0, 4.0), Vec2::new(6.0, 6.0));

        // 正面からのヒット距離
        let dist = ray_intersects_aabb(&Vec2::new(0.0, 5.0), &Vec2::new(1.0, 0.0), &b);
        assert!((dist - 4.0).abs() < 1e-12);

        // 始点がボックス内の場合は距離0
        let dist = ray_intersects_aabb(&Vec2::new(5.0, 5.0), &Vec2::new(1.0, 0.0), &b);
        assert_eq!(dist, 0.0);

        // ボックスが背後にある場合はヒットしない
        let dist = ray_intersects_aabb(&Vec2::new(10.0, 5.0), &Vec2::new(1.0, 0.0), &b);
        assert_eq!(dist, f64::INFINITY);

        // 外れる方向
        let dist = ray_intersects_aabb(&Vec2::new(0.0, 0.0), &Vec2::new(1.0, 0.0), &b);
        assert_eq!(dist, f64::INFINITY);
    }
}
