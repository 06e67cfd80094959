use crate::cli::SchemaArgs;
use bookhive::{SourceDatabase, database_schema};

pub fn run(args: SchemaArgs) -> anyhow::Result<()> {
    let databases: Vec<SourceDatabase> = match args.database.as_deref() {
        Some(name) => vec![name.parse()?],
        None => SourceDatabase::ALL.to_vec(),
    };

    print!("{}", render(&databases));
    Ok(())
}

fn render(databases: &[SourceDatabase]) -> String {
    let mut out = String::new();
    for db in databases {
        out.push_str(&format!("{} ({db})\n", db.label()));
        for table in database_schema(*db) {
            out.push_str(&format!("  {}: {}\n", table.table, table.columns.join(", ")));
        }
        out.push('\n');
    }
    out
}
