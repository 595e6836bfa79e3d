//! Read-only views and maintenance commands.

use eyre::Result;
use folio_navigation::{Navigator, View};
use folio_storage::CatalogStats;
use folio_types::{BookId, CharacterId};

use crate::config::Config;
use crate::render::render;
use crate::utils::AppCatalog;

pub fn handle_view(
    view: View,
    book: Option<BookId>,
    character: Option<CharacterId>,
    catalog: &AppCatalog,
    config: &Config,
) -> Result<()> {
    let mut navigator = Navigator::new();
    navigator.navigate(view, book, character);
    print!("{}", render(&navigator.resolve(catalog), &config.display));
    Ok(())
}

pub fn handle_stats(catalog: &AppCatalog) -> Result<()> {
    println!("{}", format_stats(&catalog.stats()));
    Ok(())
}

pub fn format_stats(stats: &CatalogStats) -> String {
    let mut lines = vec![
        "📊 Library statistics".to_string(),
        format!("Books: {}", stats.total_books),
    ];
    lines.extend(
        stats
            .books_by_status
            .iter()
            .filter(|(_, count)| *count > 0)
            .map(|(status, count)| format!("  {}: {}", status, count)),
    );
    if stats.books_without_status > 0 {
        lines.push(format!("  (no status): {}", stats.books_without_status));
    }
    lines.push(format!("Characters: {}", stats.total_characters));
    if stats.orphaned_characters > 0 {
        lines.push(format!(
            "⚠️  {} character(s) belong to missing books, run cleanup",
            stats.orphaned_characters
        ));
    }
    lines.join("\n")
}

pub async fn handle_cleanup(catalog: &mut AppCatalog) -> Result<()> {
    let report = catalog.cleanup_orphans().await?;

    if report.is_clean() {
        println!("✅ Nothing to clean up");
    } else {
        println!(
            "✅ Removed {} orphaned character(s)",
            report.removed_characters.len()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::ReadStatus;

    #[test]
    fn stats_skip_empty_statuses_and_flag_orphans() {
        let stats = CatalogStats {
            total_books: 3,
            total_characters: 4,
            books_by_status: vec![(ReadStatus::ToRead, 2), (ReadStatus::Read, 0)],
            books_without_status: 1,
            orphaned_characters: 1,
        };

        let text = format_stats(&stats);

        assert!(text.contains("Books: 3"));
        assert!(text.contains("  To Read: 2"));
        assert!(!text.contains("  Read: 0"));
        assert!(text.contains("(no status): 1"));
        assert!(text.contains("1 character(s) belong to missing books"));
    }
}
