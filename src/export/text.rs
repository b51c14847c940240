use tabled::builder::Builder;
use tabled::settings::Style;

use crate::summary::{MessageLocale, TrainingSummary};

fn table_header(locale: MessageLocale) -> [&'static str; 5] {
    match locale {
        MessageLocale::Russian => [
            "Тип тренировки",
            "Длительность, ч",
            "Дистанция, км",
            "Ср. скорость, км/ч",
            "Потрачено ккал",
        ],
        MessageLocale::English => [
            "Training type",
            "Duration, h",
            "Distance, km",
            "Avg. speed, km/h",
            "Calories burned",
        ],
    }
}

/// One rendered report per line
pub fn render_lines(summaries: &[TrainingSummary], locale: MessageLocale) -> String {
    summaries
        .iter()
        .map(|summary| summary.render_with(locale))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Metrics as an aligned table
pub fn render_table(summaries: &[TrainingSummary], locale: MessageLocale) -> String {
    let mut builder = Builder::default();
    builder.push_record(table_header(locale));

    for summary in summaries {
        builder.push_record([
            summary.training_type.clone(),
            format!("{:.3}", summary.duration),
            format!("{:.3}", summary.distance),
            format!("{:.3}", summary.speed),
            format!("{:.3}", summary.calories),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lines() {
        let summaries = vec![
            TrainingSummary::new("Swimming", 1.0, 0.9936, 1.0, 336.0),
            TrainingSummary::new("Running", 1.0, 9.75, 9.75, 699.75),
        ];
        let rendered = render_lines(&summaries, MessageLocale::English);

        assert_eq!(
            rendered.lines().nth(1).unwrap(),
            "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
             Avg. speed: 9.750 km/h; Calories burned: 699.750."
        );
    }

    #[test]
    fn test_render_table() {
        let summaries = vec![TrainingSummary::new("Swimming", 1.0, 0.9936, 1.0, 336.0)];
        let table = render_table(&summaries, MessageLocale::English);

        assert!(table.contains("Calories burned"));
        assert!(table.contains("Swimming"));
        assert!(table.contains("0.994"));
        assert!(table.contains("336.000"));

        let table = render_table(&summaries, MessageLocale::Russian);
        assert!(table.contains("Потрачено ккал"));
    }
}
