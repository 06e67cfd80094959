use crate::cli::InitArgs;
use std::path::Path;

pub fn run(args: InitArgs) -> anyhow::Result<()> {
    write_template(&args.config)?;
    println!("wrote {}", args.config.display());
    Ok(())
}

const TEMPLATE: &str = r#"version = "1"

[query]
kind = "popular_books"   # popular_books | active_members | loan_trends
time_frame = "all_time"  # all_time | current_year | current_month | current_quarter
                         # custom_year | custom_month | custom_quarter
                         # by_month | by_quarter | by_year (loan_trends only)
# custom_year = "2024"   # empty means the current year on the command line
custom_month = "1"
custom_quarter = "1"
source_system = "all"    # all | UWindsor_Library | Windsor_PLibrary
limit = 10
include_author = false
include_genre = false
include_publisher = false

[backend]
delay_ms = 800
"#;

fn write_template(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        anyhow::bail!("refusing to overwrite existing file: {}", path.display());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!("failed to create directory {}: {e}", parent.display())
            })?;
        }
    }

    std::fs::write(path, TEMPLATE)
        .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))?;
    Ok(())
}
