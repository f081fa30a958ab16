use clap::Parser;
use photo_gallery::{cli, error, loader, preview};
use cli::{Cli, Commands};
use error::Result;
use photo_gallery_common::FilterState;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = loader::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Check { input: path, json } => {
            if cli.verbose {
                eprintln!("読み込み中: {}", path.display());
            }

            let photos = loader::load_collection(&path)?;
            let summary = preview::summarize(&photos);

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("✔ {}件の写真を検証しました: {}", summary.total, path.display());
                println!("カテゴリ:");
                for entry in &summary.categories {
                    println!("  {} ({})", entry.category, entry.count);
                }
            }
        }

        Commands::Render { input: path, category, search, output } => {
            if cli.verbose {
                eprintln!("[1/2] 読み込み中: {}", path.display());
            }
            let photos = loader::load_collection(&path)?;

            let filter = FilterState::default()
                .with_category(category)
                .with_search(search);
            if cli.verbose {
                eprintln!(
                    "[2/2] 描画中: category={} search={:?}",
                    filter.active_category, filter.search_text
                );
            }
            let html = preview::render_preview(&photos, &filter, &config);

            match output {
                Some(out) => {
                    std::fs::write(&out, html)?;
                    println!("✔ プレビューを保存: {}", out.display());
                }
                None => print!("{}", html),
            }
        }

        Commands::Show { input: path, id } => {
            if cli.verbose {
                eprintln!("読み込み中: {}", path.display());
            }
            let photos = loader::load_collection(&path)?;
            let content = preview::describe_photo(&photos, &id)?;

            println!("タイトル: {}", content.title);
            println!("画像: {}", content.image_url);
            println!("説明: {}", content.description);
        }
    }

    Ok(())
}
