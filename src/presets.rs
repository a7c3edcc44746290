//! Named expressions for the most common schedules.
use crate::{expression::CronExpression, Result};

/// Labelled expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Preset {
    /// Category the preset is listed under.
    pub group: &'static str,
    /// Human-readable name.
    pub label: &'static str,
    /// Five-field expression text.
    pub expression: &'static str,
}

impl Preset {
    /// Parses the preset's expression.
    pub fn parse(&self) -> Result<CronExpression> {
        CronExpression::parse(self.expression)
    }
}

macro_rules! presets {
    ($($group:literal => [$($label:literal: $expression:literal),+ $(,)?]),+ $(,)?) => {
        &[$($(Preset { group: $group, label: $label, expression: $expression },)+)+]
    };
}

/// All known presets in display order.
pub static PRESETS: &[Preset] = presets! {
    "Common" => [
        "Every minute": "* * * * *",
        "Every hour": "0 * * * *",
        "Every day at midnight": "0 0 * * *",
        "Every day at noon": "0 12 * * *",
        "Every Sunday": "0 0 * * 0",
        "Every Monday": "0 0 * * 1",
        "Every 1st of month": "0 0 1 * *",
    ],
    "Specific times" => [
        "Every 15 minutes": "*/15 * * * *",
        "Every 6 hours": "0 */6 * * *",
        "Every day at 3am": "0 3 * * *",
        "Every day at 2:30am": "30 2 * * *",
    ],
    "Specific days" => [
        "Weekdays at midnight": "0 0 * * 1-5",
        "Weekends at 8am": "0 8 * * 6,0",
        "Monday to Friday at 5pm": "0 17 * * 1-5",
    ],
    "Multiple times" => [
        "Twice a day": "0 0,12 * * *",
        "Every other hour": "0 */2 * * *",
        "Three times a day": "0 8,12,16 * * *",
    ],
    "Business hours" => [
        "Every hour during work day": "0 9-17 * * 1-5",
        "Every 30 min during work hours": "*/30 9-17 * * 1-5",
    ],
    "Monthly" => [
        "First Monday of Month": "0 0 1-7 * 1",
        "Last day of Month at 5pm": "0 17 28-31 * *",
    ],
};

/// Looks up a preset by its label, ignoring ASCII case.
pub fn preset(label: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.label.eq_ignore_ascii_case(label))
}
