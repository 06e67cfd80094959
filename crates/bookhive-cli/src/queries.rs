use crate::cli::QueriesRunArgs;
use crate::config::ProjectConfig;
use crate::output;
use bookhive::{MockBackend, Workbench, predefined_queries, require_predefined};
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use std::time::Duration;

pub fn list() -> anyhow::Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["id", "name", "description"]);

    for q in predefined_queries() {
        table.add_row(vec![q.id, q.name, q.description]);
    }

    println!("{table}");
    Ok(())
}

pub async fn run(args: QueriesRunArgs) -> anyhow::Result<()> {
    let query = require_predefined(&args.id)
        .map_err(|e| anyhow::anyhow!("{e} (see `bookhive queries list`)"))?;

    let configured = ProjectConfig::discover(args.config.as_deref())?
        .map(|p| p.file.backend.delay())
        .unwrap_or(bookhive::DEFAULT_DELAY);
    let delay = args.delay_ms.map(Duration::from_millis).unwrap_or(configured);

    let mut wb = Workbench::new(MockBackend::new().delay(delay));
    wb.execute_predefined(query.id).await?;

    println!("{}\n", wb.query_to_display());
    output::print_results(wb.results());
    Ok(())
}
