//! Prompt construction from an indicator snapshot

use crate::indicators::{CategoryRegistry, IndicatorCategory};
use crate::models::{IndicatorSnapshot, SnapshotEntry};
use std::fmt::Write;

fn heading(category: IndicatorCategory) -> &'static str {
    match category {
        IndicatorCategory::InterestRates => "Interest Rates",
        IndicatorCategory::Leading => "Leading Indicators",
        IndicatorCategory::Inflation => "Inflation",
        IndicatorCategory::Employment => "Employment",
        IndicatorCategory::Gdp => "GDP and Growth",
    }
}

fn format_value(category: IndicatorCategory, series_id: &str, entry: &SnapshotEntry) -> String {
    match category {
        IndicatorCategory::InterestRates => format!("{}%", entry.value),
        IndicatorCategory::Employment if series_id == "UNRATE" => format!("{}%", entry.value),
        IndicatorCategory::Employment => with_thousands(entry.value),
        IndicatorCategory::Gdp if entry.name.contains("Growth") => format!("{}%", entry.value),
        IndicatorCategory::Gdp => with_thousands(entry.value),
        _ => entry.value.to_string(),
    }
}

/// `1234567.5` -> `1,234,567.5`
pub fn with_thousands(value: f64) -> String {
    let raw = value.abs().to_string();
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Render the snapshot as one block per category, in registry order.
pub fn build_context(snapshot: &IndicatorSnapshot) -> String {
    let mut context = String::from("Current US economic indicators:\n\n");

    for &category in CategoryRegistry::all_categories() {
        let Some(entries) = snapshot.category(category.slug()) else {
            continue;
        };
        let _ = writeln!(context, "[{}]", heading(category));
        for (series_id, entry) in entries.iter() {
            let _ = writeln!(
                context,
                "- {}: {} ({})",
                entry.name,
                format_value(category, series_id, entry),
                entry.date
            );
        }
        context.push('\n');
    }

    context
}

pub fn build_analysis_prompt(snapshot: &IndicatorSnapshot) -> String {
    format!(
        "You are an expert economic analyst. Analyze the following US economic indicators.\n\n\
         {}\
         Respond in exactly two sections:\n\n\
         Summary:\n\
         An overall summary of the current economy in 2-3 sentences.\n\n\
         Outlook:\n\
         The expected direction over the coming months in 2-3 sentences.\n\n\
         Be professional but easy to follow, and briefly explain technical terms where needed.",
        build_context(snapshot)
    )
}

pub fn build_insight_prompt(name: &str, current: f64, previous: Option<f64>) -> String {
    let change = previous
        .map(|prev| format!(" It changed by {:+.2} from {}.", current - prev, prev))
        .unwrap_or_default();
    format!(
        "{name} is currently {current}.{change}\n\
         In one short sentence, explain what this means for the economy."
    )
}
