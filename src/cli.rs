use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photo-gallery")]
#[command(about = "photos.json の検証とギャラリープレビュー生成", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 設定ファイル（JSON、省略時は既定値）
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// photos.json を検証してカテゴリ一覧を表示
    Check {
        /// 写真一覧JSON
        input: PathBuf,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 絞り込み結果をHTMLプレビューとして出力
    Render {
        /// 写真一覧JSON
        input: PathBuf,

        /// 選択カテゴリ
        #[arg(short, long, default_value = "All")]
        category: String,

        /// 検索文字列
        #[arg(short, long, default_value = "")]
        search: String,

        /// 出力HTMLファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 詳細オーバーレイに表示される内容を確認
    Show {
        /// 写真一覧JSON
        input: PathBuf,

        /// 写真ID
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render_defaults() {
        let cli = Cli::try_parse_from(["photo-gallery", "render", "photos.json"]).unwrap();
        match cli.command {
            Commands::Render { input, category, search, output } => {
                assert_eq!(input, PathBuf::from("photos.json"));
                assert_eq!(category, "All");
                assert_eq!(search, "");
                assert!(output.is_none());
            }
            _ => panic!("Expected Render"),
        }
    }

    #[test]
    fn test_parse_render_with_filters() {
        let cli = Cli::try_parse_from([
            "photo-gallery", "render", "photos.json", "-c", "Nature", "--search", "sky", "-o", "out.html",
        ])
        .unwrap();
        match cli.command {
            Commands::Render { input, category, search, output } => {
                assert_eq!(input, PathBuf::from("photos.json"));
                assert_eq!(category, "Nature");
                assert_eq!(search, "sky");
                assert_eq!(output, Some(PathBuf::from("out.html")));
            }
            _ => panic!("Expected Render"),
        }
    }

    #[test]
    fn test_parse_check_requires_file() {
        assert!(Cli::try_parse_from(["photo-gallery", "check"]).is_err());

        let cli = Cli::try_parse_from(["photo-gallery", "check", "photos.json", "--json"]).unwrap();
        match cli.command {
            Commands::Check { input, json } => {
                assert_eq!(input, PathBuf::from("photos.json"));
                assert!(json);
            }
            _ => panic!("Expected Check"),
        }
    }

    #[test]
    fn test_parse_show_file_then_id() {
        assert!(Cli::try_parse_from(["photo-gallery", "show"]).is_err());
        assert!(Cli::try_parse_from(["photo-gallery", "show", "photos.json"]).is_err());

        let cli = Cli::try_parse_from(["photo-gallery", "show", "photos.json", "2", "-v"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Show { input, id } => {
                assert_eq!(input, PathBuf::from("photos.json"));
                assert_eq!(id, "2");
            }
            _ => panic!("Expected Show"),
        }
    }
}
