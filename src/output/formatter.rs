use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;

use crate::scoring::{Grade, PointsBreakdown, ScoreResult};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

fn colored_grade(grade: Grade) -> String {
    let letter = grade.as_str();
    match grade {
        Grade::A => letter.green().bold().to_string(),
        Grade::B => letter.bright_green().bold().to_string(),
        Grade::C => letter.yellow().bold().to_string(),
        Grade::D => letter.bright_red().bold().to_string(),
        Grade::E => letter.red().bold().to_string(),
    }
}

/// Format the score and grade as two lines:
/// "Nutritional Score: {value}" and "NutriScore: {letter}"
pub fn format_result(result: &ScoreResult, use_colors: bool) -> String {
    let grade = result.grade();
    let grade_str = if use_colors {
        colored_grade(grade)
    } else {
        grade.to_string()
    };
    format!("Nutritional Score: {}\nNutriScore: {}", result.value, grade_str)
}

/// Format the per-nutrient points behind a result (for --explain)
pub fn format_breakdown(result: &ScoreResult, use_colors: bool) -> String {
    let b: &PointsBreakdown = &result.breakdown;
    let rows = [
        ("Energy", b.energy),
        ("Sugar", b.sugar),
        ("Saturated fat", b.saturated_fat),
        ("Sodium", b.sodium),
        ("Fruit/veg", b.fruit),
        ("Fibre", b.fibre),
        ("Protein", b.protein),
    ];

    let mut lines = vec![format!("Category: {}", result.category)];
    for (label, points) in rows {
        lines.push(format!("  {:<14}{:>3}", label, points));
    }
    lines.push(format!("  {:<14}{:>3}", "Negative", result.negative));
    lines.push(format!("  {:<14}{:>3}", "Positive", result.positive));

    if result.exemption_applied {
        let note = format!(
            "  Fruit exemption: -{} (negative >= 11, fruit points < 5)",
            b.fruit
        );
        lines.push(if use_colors {
            note.dimmed().to_string()
        } else {
            note
        });
    }

    lines.join("\n")
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    grade: Grade,
    #[serde(flatten)]
    result: &'a ScoreResult,
}

/// Format a result as pretty-printed JSON
pub fn format_json(result: &ScoreResult, name: Option<&str>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        name,
        grade: result.grade(),
        result,
    })
}
