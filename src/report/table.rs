use crate::extract::{totals, RegionStat};
use prettytable::{format, Cell, Row, Table};

pub const COLUMNS: [&str; 5] = ["Sr.No", "States/UT", "Confirmed", "Recovered", "Deceased"];

/// Build the console table: one row per state plus a final totals row
/// with a blank serial and the literal label "Total".
pub fn stat_table(stats: &[RegionStat]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);

    table.add_row(Row::new(
        COLUMNS.iter().map(|&c| Cell::new(c).style_spec("bFg")).collect(),
    ));

    for s in stats {
        table.add_row(Row::new(vec![
            Cell::new(&s.serial),
            Cell::new(&s.name),
            Cell::new(&s.confirmed.to_string()).style_spec("r"),
            Cell::new(&s.recovered.to_string()).style_spec("r"),
            Cell::new(&s.deceased.to_string()).style_spec("r"),
        ]));
    }

    let t = totals(stats);
    table.add_row(Row::new(vec![
        Cell::new(""),
        Cell::new("Total"),
        Cell::new(&t.confirmed.to_string()).style_spec("r"),
        Cell::new(&t.recovered.to_string()).style_spec("r"),
        Cell::new(&t.deceased.to_string()).style_spec("r"),
    ]));

    table
}
