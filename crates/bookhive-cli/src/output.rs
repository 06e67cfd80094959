use bookhive::ResultSet;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};

pub fn results_table(results: &ResultSet) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(results.columns.iter().map(|c| {
            Cell::new(c)
                .add_attribute(Attribute::Bold)
                .fg(Color::Cyan)
        }));

    for row in 0..results.len() {
        table.add_row(results.columns.iter().map(|c| Cell::new(results.cell(row, c))));
    }

    table
}

pub fn print_results(results: &ResultSet) {
    if results.is_empty() {
        println!("(no results)");
        return;
    }
    println!("{}", results_table(results));
    println!("{} row(s)", results.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_one_row_per_result() {
        let results = bookhive::mock_results("popular_books").unwrap();
        let table = results_table(&results);
        assert_eq!(table.row_iter().count(), results.len());
        let rendered = table.to_string();
        for column in &results.columns {
            assert!(rendered.contains(column.as_str()));
        }
    }
}
