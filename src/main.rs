mod analysis;
mod analyzers;
mod logging;
mod models;
mod scenario;

use std::str::FromStr;

use clap::{Arg, Command};

use analysis::{AnalysisResult, SceneAnalyzer};
use logging::{init_logging, level_from_verbosity, LogConfig, LogOutput};
use models::{Agent, Scene, Vec2};
use scenario::ScenarioConfig;

fn main() {
    // コマンドライン引数の解析
    let matches = Command::new("taceval")
        .version("0.1.0")
        .about("戦術位置評価 (Tactical Position Evaluation)")
        .long_about(
            "2次元障害物マップ上の2機のエージェント（自機・敵機）について\n\
             到達可能面積比・露出幅・可視割合の3指標を算出し、\n\
             算出方法と計測値の説明文を出力します。",
        )
        .arg(
            Arg::new("scenario")
                .short('s')
                .long("scenario")
                .value_name("FILE")
                .help("シナリオファイル(.yaml)のパスを指定")
                .long_help(
                    "解析するシナリオファイル(.yaml)のパスを指定します。\n\
                     指定しない場合、使用方法とシナリオ一覧が表示されます。",
                ),
        )
        .arg(
            Arg::new("info")
                .short('i')
                .long("info")
                .action(clap::ArgAction::SetTrue)
                .help("シナリオの情報のみ表示して終了")
                .conflicts_with("test"),
        )
        .arg(
            Arg::new("test")
                .short('t')
                .long("test")
                .action(clap::ArgAction::SetTrue)
                .help("組み込みのデモシーンを解析")
                .conflicts_with("info"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(clap::ArgAction::Count)
                .help("詳細出力レベル (-v: 基本, -vv: 詳細)"),
        )
        .arg(
            Arg::new("log")
                .short('l')
                .long("log")
                .value_name("DEST")
                .help("ログ出力先 (console, file, both)"),
        )
        .get_matches();

    println!("戦術位置評価 (Tactical Position Evaluation) - taceval v0.1.0");
    println!();

    // 詳細レベルの設定
    let verbose_level = matches.get_count("verbose");

    // ログシステムの初期化
    let log_output = match matches.get_one::<String>("log") {
        Some(dest) => match LogOutput::from_str(dest) {
            Ok(output) => output,
            Err(e) => {
                eprintln!("エラー: {}", e);
                std::process::exit(1);
            }
        },
        None => LogOutput::Console,
    };

    let log_config = LogConfig {
        level: level_from_verbosity(verbose_level),
        output: log_output,
        ..LogConfig::default()
    };

    if let Err(e) = init_logging(log_config) {
        eprintln!("エラー: ログ初期化に失敗しました: {}", e);
        std::process::exit(1);
    }

    // デモシーンの実行
    if matches.get_flag("test") {
        run_demo_scene();
        return;
    }

    // シナリオファイルの処理
    if let Some(scenario_path) = matches.get_one::<String>("scenario") {
        match run_scenario(scenario_path, matches.get_flag("info"), verbose_level) {
            Ok(_) => {
                if verbose_level > 0 {
                    println!("シナリオ解析が正常に完了しました。");
                }
            }
            Err(e) => {
                eprintln!("エラー: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        // デフォルト動作: 使用方法とシナリオ一覧を表示
        show_default_help();
    }
}

/// 組み込みのデモシーン（開けたマップでの対峙）を解析
fn run_demo_scene() {
    println!("=== 開けたマップのデモシーン ===");

    let scene = Scene {
        friendly: Agent::new(Vec2::new(2.0, 2.0), Vec2::new(1.0, 0.0), 0.25, 5.0),
        enemy: Agent::new(Vec2::new(8.0, 8.0), Vec2::new(-1.0, 0.0), 0.25, 5.0),
        ..Scene::default()
    };

    let result = SceneAnalyzer::new().analyze(&scene);
    print_result(&result);
}

/// シナリオファイルを読み込んで解析
fn run_scenario(
    scenario_path: &str,
    info_only: bool,
    verbose_level: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    // シナリオファイルの読み込み
    let config = ScenarioConfig::from_file(scenario_path)?;

    if verbose_level > 0 {
        println!("シナリオファイル読み込み完了: {}", scenario_path);
    }

    // 情報表示のみの場合
    if info_only {
        config.print_summary();
        return Ok(());
    }

    // 解析の実行
    config.print_summary();
    println!();

    let scene = config.to_scene();
    let result = SceneAnalyzer::new().analyze(&scene);
    print_result(&result);

    if verbose_level > 0 {
        println!();
        println!("詳細:");
        println!(
            "  自機到達可能点: {}点",
            result.reachability.reachable_friendly.len()
        );
        println!(
            "  敵機到達可能点: {}点",
            result.reachability.reachable_enemy.len()
        );
        println!(
            "  見通し可能な敵機到達点: {}/{}",
            result.exposure.los_count, result.exposure.total_enemy_reachable
        );
        println!(
            "  可視サンプル: {}/{}",
            result.visibility.visible_count, result.visibility.sample_count
        );
    }

    Ok(())
}

/// 解析結果の表示
fn print_result(result: &AnalysisResult) {
    println!("=== 解析結果 ===");
    println!("到達可能面積比: {:.3}", result.reachability.area_ratio);
    println!("露出幅: {:.3}", result.exposure.width);
    println!("可視割合: {:.3}", result.visibility.visible_fraction);
    println!();

    for e in &result.explanations {
        println!("- {}", e);
    }
}

/// デフォルトヘルプとシナリオ一覧を表示
fn show_default_help() {
    println!("使用方法:");
    println!("  taceval [オプション]");
    println!();
    println!("オプション:");
    println!("  -s, --scenario <FILE>  シナリオファイルを指定して解析");
    println!("  -i, --info             シナリオ情報のみ表示");
    println!("  -t, --test             組み込みデモシーンを解析");
    println!("  -v, --verbose          詳細出力 (複数指定で詳細レベル上昇)");
    println!("  -l, --log <DEST>       ログ出力先 (console, file, both)");
    println!("  -h, --help             このヘルプを表示");
    println!();
    println!("利用可能なシナリオファイル:");
    println!("  scenarios/scenario_open_field.yaml    - 障害物のない開けた対峙");
    println!("  scenarios/scenario_wall.yaml          - 全高の壁による遮蔽");
    println!("  scenarios/scenario_cover.yaml         - 自機側の移動を制限する遮蔽物");
    println!();
    println!("例:");
    println!("  taceval -s scenarios/scenario_open_field.yaml");
    println!("  taceval -s scenarios/scenario_wall.yaml -v");
    println!("  taceval -s scenarios/scenario_cover.yaml -i");
    println!("  taceval --test");
}
