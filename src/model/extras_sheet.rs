use crate::model::{
    constants::UNKNOWN_CATEGORY_NAME,
    structures::{snapshot::TournamentSnapshot, standings::ExtrasSheetRow}
};

/// One editable extras line per team, in team order. Teams without a stored
/// record show zeroes.
pub fn extras_sheet(snapshot: &TournamentSnapshot) -> Vec<ExtrasSheetRow> {
    snapshot
        .teams
        .iter()
        .map(|team| {
            let record = snapshot.extra_scores.iter().find(|e| e.team_id == team.id);
            let category_name = snapshot
                .category(team.category_id)
                .map_or(UNKNOWN_CATEGORY_NAME, |c| c.name.as_str());

            ExtrasSheetRow {
                team_id: team.id,
                team_name: team.name.clone(),
                category_name: category_name.to_string(),
                opening: record.map_or(0, |r| r.opening),
                additional: record.map_or(0, |r| r.additional)
            }
        })
        .collect()
}

/// Coerces a typed extras entry into points.
///
/// Reads an optional sign and the leading digits after any whitespace,
/// ignoring whatever follows. Input without leading digits is 0, and so is
/// anything negative.
pub fn parse_extra_points(input: &str) -> i32 {
    let trimmed = input.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed))
    };

    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    if negative || digits_end == 0 {
        return 0;
    }

    unsigned[..digits_end].parse::<i32>().unwrap_or(i32::MAX)
}
