use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::models::{Aabb, Agent, Map, Scene, Vec2};

/// シナリオメタデータ
#[derive(Debug, Deserialize, Serialize)]
pub struct ScenarioMeta {
    pub version: String,
    pub name: String,
    pub description: String,
}

/// 解析パラメータ設定
#[derive(Debug, Deserialize, Serialize)]
pub struct AnalysisConfig {
    pub t_horizon_s: f64,
    pub cell_size_m: f64,
    pub visibility_samples: i32,
}

/// 世界設定
#[derive(Debug, Deserialize, Serialize)]
pub struct WorldConfig {
    pub region_rect: RegionRect,
    #[serde(default)]
    pub obstacles: Vec<RegionRect>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RegionRect {
    pub xmin_m: f64,
    pub xmax_m: f64,
    pub ymin_m: f64,
    pub ymax_m: f64,
}

impl RegionRect {
    /// AABBに変換
    pub fn to_aabb(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.xmin_m, self.ymin_m),
            Vec2::new(self.xmax_m, self.ymax_m),
        )
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Position2D {
    pub x_m: f64,
    pub y_m: f64,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Direction2D {
    pub x: f64,
    pub y: f64,
}

/// エージェント設定
#[derive(Debug, Deserialize, Serialize)]
pub struct AgentConfig {
    pub pos: Position2D,
    pub facing: Direction2D,
    pub radius_m: f64,
    pub speed_mps: f64,
}

impl AgentConfig {
    /// エージェントモデルに変換（facingは取り込み時に正規化される）
    pub fn to_agent(&self) -> Agent {
        Agent::new(
            Vec2::new(self.pos.x_m, self.pos.y_m),
            Vec2::new(self.facing.x, self.facing.y),
            self.radius_m,
            self.speed_mps,
        )
    }
}

/// 両陣営のエージェント設定
#[derive(Debug, Deserialize, Serialize)]
pub struct AgentsConfig {
    pub friendly: AgentConfig,
    pub enemy: AgentConfig,
}

/// 完全なシナリオ設定
#[derive(Debug, Deserialize, Serialize)]
pub struct ScenarioConfig {
    pub meta: ScenarioMeta,
    pub analysis: AnalysisConfig,
    pub world: WorldConfig,
    pub agents: AgentsConfig,
}

impl ScenarioConfig {
    /// YAMLファイルからシナリオ設定を読み込み
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScenarioError> {
        let path = path.as_ref();

        // ファイル存在チェック
        if !path.exists() {
            return Err(ScenarioError::FileNotFound(path.to_path_buf()));
        }

        // ファイル読み込み
        let contents = fs::read_to_string(path)
            .map_err(|e| ScenarioError::IoError(path.to_path_buf(), e))?;

        // YAML解析
        let config: ScenarioConfig = serde_yaml::from_str(&contents)
            .map_err(|e| ScenarioError::ParseError(path.to_path_buf(), e))?;

        // 基本的な検証
        config.validate()?;

        Ok(config)
    }

    /// 設定の基本的な検証
    ///
    /// 解析エンジンの呼び出し側契約（cell_size > 0 など）をこの境界で
    /// 強制します。解析器自身は契約を信頼し、再検証しません。
    /// `visibility_samples`は0以下でも拒否しません（可視割合解析器が
    /// 黙って1に切り上げる仕様のため）。
    pub fn validate(&self) -> Result<(), ScenarioError> {
        // 解析パラメータの検証
        if self.analysis.cell_size_m <= 0.0 {
            return Err(ScenarioError::ValidationError(
                "cell_size_m must be positive".to_string(),
            ));
        }
        if self.analysis.t_horizon_s < 0.0 {
            return Err(ScenarioError::ValidationError(
                "t_horizon_s must be non-negative".to_string(),
            ));
        }

        // 座標範囲の検証
        let region = &self.world.region_rect;
        if region.xmin_m >= region.xmax_m || region.ymin_m >= region.ymax_m {
            return Err(ScenarioError::ValidationError(
                "Invalid region bounds".to_string(),
            ));
        }

        // 障害物矩形の検証
        for (index, ob) in self.world.obstacles.iter().enumerate() {
            if ob.xmin_m > ob.xmax_m || ob.ymin_m > ob.ymax_m {
                return Err(ScenarioError::ValidationError(format!(
                    "Obstacle {} has inverted bounds",
                    index
                )));
            }
        }

        // エージェント設定の検証
        for (name, agent) in [("friendly", &self.agents.friendly), ("enemy", &self.agents.enemy)] {
            if agent.radius_m <= 0.0 {
                return Err(ScenarioError::ValidationError(format!(
                    "Agent {} radius must be positive",
                    name
                )));
            }
            if agent.speed_mps < 0.0 {
                return Err(ScenarioError::ValidationError(format!(
                    "Agent {} speed must be non-negative",
                    name
                )));
            }
            if !self.is_position_in_bounds(agent.pos.x_m, agent.pos.y_m) {
                return Err(ScenarioError::ValidationError(format!(
                    "Agent {} outside region bounds",
                    name
                )));
            }
        }

        Ok(())
    }

    /// 位置が領域内かどうかをチェック
    fn is_position_in_bounds(&self, x: f64, y: f64) -> bool {
        let region = &self.world.region_rect;
        x >= region.xmin_m && x <= region.xmax_m && y >= region.ymin_m && y <= region.ymax_m
    }

    /// 解析エンジンへの入力となるシーンスナップショットを構築
    pub fn to_scene(&self) -> Scene {
        let mut map = Map::new(self.world.region_rect.to_aabb());
        for ob in &self.world.obstacles {
            map.add_obstacle(ob.to_aabb());
        }

        Scene {
            map,
            friendly: self.agents.friendly.to_agent(),
            enemy: self.agents.enemy.to_agent(),
            t_horizon: self.analysis.t_horizon_s,
            cell_size: self.analysis.cell_size_m,
            visibility_samples: self.analysis.visibility_samples,
        }
    }

    /// シナリオの概要を表示
    pub fn print_summary(&self) {
        println!("=== シナリオ情報 ===");
        println!("名前: {}", self.meta.name);
        println!("説明: {}", self.meta.description);
        println!("バージョン: {}", self.meta.version);
        println!();

        println!("=== 解析パラメータ ===");
        println!("時間ホライズン: {:.2}秒", self.analysis.t_horizon_s);
        println!("グリッドセル幅: {:.2}", self.analysis.cell_size_m);
        println!("可視判定サンプル数: {}", self.analysis.visibility_samples);
        println!();

        println!("=== 世界 ===");
        let region = &self.world.region_rect;
        println!(
            "領域: ({:.1}, {:.1}) - ({:.1}, {:.1})",
            region.xmin_m, region.ymin_m, region.xmax_m, region.ymax_m
        );
        println!("障害物数: {}", self.world.obstacles.len());
        println!();

        println!("=== エージェント ===");
        for (label, agent) in [("自機", &self.agents.friendly), ("敵機", &self.agents.enemy)] {
            println!(
                "{}: 位置 ({:.1}, {:.1}), 半径 {:.2}, 速度 {:.1}",
                label, agent.pos.x_m, agent.pos.y_m, agent.radius_m, agent.speed_mps
            );
        }
    }
}

/// シナリオ読み込みエラー
#[derive(Debug)]
pub enum ScenarioError {
    FileNotFound(std::path::PathBuf),
    IoError(std::path::PathBuf, std::io::Error),
    ParseError(std::path::PathBuf, serde_yaml::Error),
    ValidationError(String),
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioError::FileNotFound(path) => {
                write!(f, "シナリオファイルが見つかりません: {}", path.display())
            }
            ScenarioError::IoError(path, err) => {
                write!(f, "ファイル読み込みエラー {}: {}", path.display(), err)
            }
            ScenarioError::ParseError(path, err) => {
                write!(f, "YAML解析エラー {}: {}", path.display(), err)
            }
            ScenarioError::ValidationError(msg) => {
                write!(f, "設定検証エラー: {}", msg)
            }
        }
    }
}

impl std::error::Error for ScenarioError {}
