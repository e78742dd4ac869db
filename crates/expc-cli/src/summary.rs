use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use expc_model::{Severity, ValidationReport};

use crate::types::{CheckResult, GenerateResult};

pub fn print_generate_summary(result: &GenerateResult) {
    println!("Mode: {}", result.target);
    if let Some(path) = &result.header {
        println!("Header: {}", path.display());
    }
    if let Some(path) = &result.source {
        println!("Source: {}", path.display());
    }
    if result.dry_run {
        println!("Dry run: no files written");
    }

    let mut table = Table::new();
    let mut header = vec![header_cell("Experiment")];
    header.extend(result.platforms.iter().map(|platform| header_cell(platform)));
    header.push(header_cell("Requires"));
    table.set_header(header);
    apply_summary_table_style(&mut table);
    for column in 1..=result.platforms.len() {
        align_column(&mut table, column, CellAlignment::Center);
    }
    for experiment in &result.experiments {
        let mut row = vec![
            Cell::new(&experiment.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
        ];
        row.extend(experiment.value_classes.iter().map(|class| value_class_cell(class)));
        row.push(if experiment.requirements.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(experiment.requirements.join(", "))
        });
        table.add_row(row);
    }
    println!("{table}");
    print_issue_table(&result.reports);
}

pub fn print_check_summary(result: &CheckResult) {
    println!(
        "Experiments: {} ({} valid)",
        result.experiments, result.valid
    );
    let errors: usize = result.reports.iter().map(ValidationReport::error_count).sum();
    let warnings: usize = result
        .reports
        .iter()
        .map(ValidationReport::warning_count)
        .sum();
    println!("Errors: {errors}, warnings: {warnings}");
    print_issue_table(&result.reports);
}

fn print_issue_table(reports: &[ValidationReport]) {
    let mut issues: Vec<_> = reports
        .iter()
        .flat_map(|report| {
            report
                .issues
                .iter()
                .map(move |issue| (report.experiment.as_str(), issue))
        })
        .collect();
    if issues.is_empty() {
        return;
    }
    issues.sort_by(|a, b| a.1.severity.cmp(&b.1.severity).then_with(|| a.0.cmp(b.0)));

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Experiment"),
        header_cell("Severity"),
        header_cell("Check"),
        header_cell("Message"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for (experiment, issue) in issues {
        table.add_row(vec![
            Cell::new(experiment),
            severity_cell(issue.severity),
            Cell::new(issue.check_type.as_str()),
            Cell::new(&issue.message),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR").fg(Color::Red),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn value_class_cell(value_class: &str) -> Cell {
    match value_class {
        "true" => Cell::new(value_class).fg(Color::Green),
        "debug" => Cell::new(value_class).fg(Color::Yellow),
        "broken" => Cell::new(value_class).fg(Color::Red),
        _ => dim_cell(value_class),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
