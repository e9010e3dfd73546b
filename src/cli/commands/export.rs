//! Export command: write the table as CSV or JSON

use colored::Colorize;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use super::shared::{CommandSummary, build_view, load_configuration, load_presenter};
use crate::Result;
use crate::app::services::table_view::{format_count, write_export};
use crate::cli::args::{CommonArgs, ExportArgs};

/// Export every displayed row in table sort order
pub async fn run_export(
    args: &CommonArgs,
    export_args: &ExportArgs,
    cancellation: CancellationToken,
) -> Result<CommandSummary> {
    let config = load_configuration(args)?;
    let (mut presenter, report) =
        load_presenter(&config, build_view(&config, args), cancellation).await?;

    if let Some(id) = &export_args.select {
        if !presenter.select(id) {
            warn!("Estate '{}' not found, exporting all districts", id);
        }
    }

    let path = export_args.output_path();
    let rows = presenter.view().table().sorted_rows();
    write_export(&path, rows, export_args.format)?;

    println!(
        "{} {} rows to {}",
        "Exported".green(),
        format_count(rows.len()),
        path.display()
    );

    let mut summary = CommandSummary::from_report(&report);
    summary.selected = presenter.selected_id().map(str::to_string);
    summary.exported = Some(path);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::table_view::{ExportFormat, TableRow};
    use crate::cli::commands::test_support::{common_args, sheet_file};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_export_csv_sorted_by_name() {
        let file = sheet_file();
        let dir = TempDir::new().unwrap();
        let export = ExportArgs {
            format: ExportFormat::Csv,
            output: Some(dir.path().join("out.csv")),
            select: None,
        };

        let summary = run_export(&common_args(&file), &export, CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(summary.exported, Some(dir.path().join("out.csv")));

        let mut reader = csv::Reader::from_path(dir.path().join("out.csv")).unwrap();
        let rows: Vec<TableRow> = reader.deserialize().map(|r| r.unwrap()).collect();
        let names: Vec<&str> = rows.iter().map(|r| r.nama_kebun.as_str()).collect();
        assert_eq!(names, vec!["KEBUN MERBAU", "KEBUN PULAU RAJA", "KEBUN SEI DAUN"]);
        assert_eq!(rows[0].real_vs_rencana_npk, "100.00%");
    }

    #[tokio::test]
    async fn test_export_selected_json() {
        let file = sheet_file();
        let dir = TempDir::new().unwrap();
        let export = ExportArgs {
            format: ExportFormat::Json,
            output: Some(dir.path().join("out.json")),
            select: Some("3KPR".to_string()),
        };

        run_export(&common_args(&file), &export, CancellationToken::new())
            .await
            .unwrap();

        let text = std::fs::read_to_string(dir.path().join("out.json")).unwrap();
        let rows: Vec<TableRow> = serde_json::from_str(&text).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].singkatan_kebun, "3KPR");
        assert_eq!(rows[0].real_vs_rencana_npk, "0.00%");
        assert_eq!(rows[0].real_vs_rencana_dolomit, "50.00%");
    }

    #[tokio::test]
    async fn test_export_to_missing_directory_fails() {
        let file = sheet_file();
        let dir = TempDir::new().unwrap();
        let export = ExportArgs {
            format: ExportFormat::Csv,
            output: Some(dir.path().join("missing").join("out.csv")),
            select: None,
        };

        let result = run_export(&common_args(&file), &export, CancellationToken::new()).await;
        assert!(result.is_err());
    }
}
