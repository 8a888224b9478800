use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use discbag::api::CategoryCoverage;
use discbag::stats::{BagStats, StabilityBreakdown};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn fmt_speed(speed: f64) -> String {
    if speed.fract() == 0.0 {
        format!("{:.0}", speed)
    } else {
        format!("{}", speed)
    }
}

pub fn print_summary(source: &str, s: &BagStats) {
    println!("\nBag: {}", source);
    let mut table = new_table();

    let speed_range = s
        .speed_range
        .map(|r| format!("{} - {}", fmt_speed(r.min), fmt_speed(r.max)))
        .unwrap_or_else(|| "-".to_string());
    let top_brand = s
        .top_brand
        .as_ref()
        .map(|b| format!("{} ({})", b.name, b.count))
        .unwrap_or_else(|| "-".to_string());

    table.add_row(vec![
        Cell::new("Discs").add_attribute(Attribute::Bold),
        Cell::new(s.total_discs).fg(Color::Cyan),
    ]);
    table.add_row(vec![
        Cell::new("Speed Range").add_attribute(Attribute::Bold),
        Cell::new(speed_range),
    ]);
    table.add_row(vec![
        Cell::new("Top Brand").add_attribute(Attribute::Bold),
        Cell::new(top_brand),
    ]);
    table.add_row(vec![
        Cell::new("Categories").add_attribute(Attribute::Bold),
        Cell::new(s.coverage_label()),
    ]);
    println!("{}", table);
}

fn stability_cells(b: &StabilityBreakdown) -> Vec<Cell> {
    vec![
        Cell::new(b.understable).fg(Color::Green),
        Cell::new(b.stable),
        Cell::new(b.overstable).fg(Color::Red),
        Cell::new(b.total()).add_attribute(Attribute::Bold),
    ]
}

pub fn print_stability_report(s: &BagStats, by_category: bool) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Group").add_attribute(Attribute::Bold),
        Cell::new("Under").fg(Color::Green),
        Cell::new("Stable"),
        Cell::new("Over").fg(Color::Red),
        Cell::new("Total").add_attribute(Attribute::Bold),
    ]);

    let mut row = vec![Cell::new("All").add_attribute(Attribute::Bold)];
    row.extend(stability_cells(&s.stability));
    table.add_row(row);

    if by_category {
        for c in &s.stability_by_category {
            let mut row = vec![Cell::new(&c.category)];
            row.extend(stability_cells(&c.stability));
            table.add_row(row);
        }
    }

    align_right(&mut table, 1..=4);
    println!("\n{}", table);
}

fn print_counts<I>(title: &str, rows: I)
where
    I: IntoIterator<Item = (String, usize)>,
{
    let mut table = new_table();
    table.add_row(vec![
        Cell::new(title).add_attribute(Attribute::Bold),
        Cell::new("Count").fg(Color::Cyan),
    ]);
    let mut empty = true;
    for (label, count) in rows {
        empty = false;
        table.add_row(vec![Cell::new(label), Cell::new(count)]);
    }
    if empty {
        table.add_row(vec![Cell::new("(none)"), Cell::new("")]);
    }
    align_right(&mut table, 1..=1);
    println!("\n{}", table);
}

pub fn print_distributions(s: &BagStats) {
    print_counts(
        "Category",
        s.category_distribution
            .iter()
            .map(|c| (c.category.clone(), c.count)),
    );
    print_counts(
        "Speed",
        s.speed_distribution
            .iter()
            .map(|c| (fmt_speed(c.speed), c.count)),
    );
    print_counts(
        "Top Plastics",
        s.top_plastics.iter().map(|c| (c.name.clone(), c.count)),
    );
    print_counts(
        "Color",
        s.color_distribution
            .iter()
            .map(|c| (c.color.clone(), c.count)),
    );
}

pub fn print_coverage_report(coverage: &[CategoryCoverage], label: &str) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Covered"),
        Cell::new("Discs").fg(Color::Cyan),
    ]);
    for c in coverage {
        let mark = if c.covered {
            Cell::new("yes").fg(Color::Green)
        } else {
            Cell::new("no").fg(Color::Red)
        };
        table.add_row(vec![Cell::new(&c.category), mark, Cell::new(c.count)]);
    }
    align_right(&mut table, 2..=2);
    println!("\n{}", table);
    println!("{}", label);
}
