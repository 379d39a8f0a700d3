use crate::model::{
    points_table::TierSchedule,
    structures::standings::{CellStyle, ExtrasSheetRow, StandingsReport}
};
use colored::Colorize;
use itertools::Itertools;

pub const NO_DATA_MESSAGE: &str = "No data available";

type GridCell = (String, CellStyle);

/// Plain-text standings table. Muted and alert cells are only styled when
/// `color` is set.
pub fn render_standings(report: &StandingsReport, color: bool) -> String {
    let mut out = String::new();

    if let Some(title) = &report.title {
        out.push_str(title);
        out.push_str("\n\n");
    }

    if !report.has_data() {
        out.push_str(NO_DATA_MESSAGE);
        out.push('\n');
        return out;
    }

    let header = ["Category", "Team", "Opening", "Additional"]
        .iter()
        .map(|h| h.to_string())
        .chain(report.columns.iter().cloned())
        .chain(std::iter::once("Total".to_string()))
        .collect_vec();

    let mut rows: Vec<Vec<GridCell>> = Vec::new();
    for category in &report.categories {
        if category.rows.is_empty() {
            rows.push(vec![(category.category_name.clone(), CellStyle::Normal)]);
            continue;
        }

        for (i, row) in category.rows.iter().enumerate() {
            // Category name only on its first row
            let category_name = if i == 0 { category.category_name.clone() } else { String::new() };

            let mut line = vec![
                (category_name, CellStyle::Normal),
                (row.team_name.clone(), CellStyle::Normal),
                (row.opening.display.clone(), row.opening.style),
                (row.additional.display.clone(), row.additional.style),
            ];
            line.extend(row.disciplines.iter().map(|c| (c.display.clone(), c.style)));
            line.push((row.total.to_string(), CellStyle::Normal));

            rows.push(line);
        }
    }

    out.push_str(&render_grid(&header, &rows, color));
    out
}

pub fn render_extras_sheet(sheet: &[ExtrasSheetRow]) -> String {
    let header = ["Team", "Category", "Opening", "Additional"].map(String::from);
    let rows = sheet
        .iter()
        .map(|r| {
            vec![
                (r.team_name.clone(), CellStyle::Normal),
                (r.category_name.clone(), CellStyle::Normal),
                (r.opening.to_string(), CellStyle::Normal),
                (r.additional.to_string(), CellStyle::Normal),
            ]
        })
        .collect_vec();

    render_grid(&header, &rows, false)
}

pub fn render_points_table(schedules: &[TierSchedule]) -> String {
    let positions = schedules.iter().map(|s| s.points_by_position.len()).max().unwrap_or(0);
    let header = ["Tier".to_string(), "Max".to_string()]
        .into_iter()
        .chain((1..=positions).map(|p| format!("#{}", p)))
        .collect_vec();

    let rows = schedules
        .iter()
        .map(|s| {
            [format!("{:?}", s.tier), s.max_points.to_string()]
                .into_iter()
                .chain(s.points_by_position.iter().map(|p| p.to_string()))
                .map(|text| (text, CellStyle::Normal))
                .collect_vec()
        })
        .collect_vec();

    render_grid(&header, &rows, false)
}

fn render_grid(header: &[String], rows: &[Vec<GridCell>], color: bool) -> String {
    let widths = (0..header.len())
        .map(|col| {
            rows.iter()
                .filter_map(|r| r.get(col))
                .map(|(text, _)| text.chars().count())
                .chain(std::iter::once(header[col].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect_vec();

    let mut out = String::new();
    let header_line = header
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:<w$}", h, w = *w))
        .join("  ");
    out.push_str(header_line.trim_end());
    out.push('\n');
    out.push_str(&widths.iter().map(|w| "-".repeat(*w)).join("  "));
    out.push('\n');

    for row in rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|((text, style), w)| styled(&format!("{:<w$}", text, w = *w), *style, color))
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

fn styled(text: &str, style: CellStyle, color: bool) -> String {
    if !color {
        return text.to_string();
    }

    match style {
        CellStyle::Normal => text.to_string(),
        CellStyle::Muted => text.dimmed().italic().to_string(),
        CellStyle::Alert => text.red().to_string()
    }
}
