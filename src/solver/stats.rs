use prettytable::{Cell, Row, Table};

use crate::solver::engine::SearchStats;

/// Renders the search counters as a bordered table for terminal output.
pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Nodes"),
        Cell::new("Backtracks"),
        Cell::new("Prunings"),
    ]));
    table.add_row(Row::new(vec![
        Cell::new(&stats.nodes.to_string()),
        Cell::new(&stats.backtracks.to_string()),
        Cell::new(&stats.prunings.to_string()),
    ]));
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_all_counters() {
        let stats = SearchStats {
            nodes: 42,
            backtracks: 7,
            prunings: 1234,
        };
        let rendered = render_stats_table(&stats);
        assert!(rendered.contains("42"));
        assert!(rendered.contains("7"));
        assert!(rendered.contains("1234"));
    }
}
