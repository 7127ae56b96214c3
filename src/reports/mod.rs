use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// Binary classification metrics against human-labeled ground truth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub true_pos: usize,
    pub false_pos: usize,
    pub true_neg: usize,
    pub false_neg: usize,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub accuracy: f64,
}

impl Metrics {
    pub fn from_predictions(predictions: &[bool], truth: &[bool]) -> Self {
        let mut tp = 0usize;
        let mut fp = 0usize;
        let mut tn = 0usize;
        let mut fneg = 0usize;

        for (&predicted, &actual) in predictions.iter().zip(truth) {
            match (predicted, actual) {
                (true, true) => tp += 1,
                (true, false) => fp += 1,
                (false, false) => tn += 1,
                (false, true) => fneg += 1,
            }
        }

        let ratio = |num: usize, denom: usize| {
            if denom > 0 {
                num as f64 / denom as f64
            } else {
                0.0
            }
        };

        let precision = ratio(tp, tp + fp);
        let recall = ratio(tp, tp + fneg);
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        let accuracy = ratio(tp + tn, tp + fp + tn + fneg);

        Self {
            true_pos: tp,
            false_pos: fp,
            true_neg: tn,
            false_neg: fneg,
            precision,
            recall,
            f1,
            accuracy,
        }
    }
}

pub struct ScoreRow {
    pub input: String,
    pub is_slop: bool,
    pub is_likely_human: bool,
    pub confidence: f64,
}

fn pct(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

pub fn print_benchmark_report(rows: usize, model: &Metrics, library: &Metrics) {
    println!("\n📊 Benchmark: {} human-labeled examples", rows);

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Model").add_attribute(Attribute::Bold),
        Cell::new("Library").add_attribute(Attribute::Bold),
    ]);
    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    table.add_row(vec![
        Cell::new("Precision"),
        Cell::new(pct(model.precision)),
        Cell::new(pct(library.precision)),
    ]);
    table.add_row(vec![
        Cell::new("Recall"),
        Cell::new(pct(model.recall)),
        Cell::new(pct(library.recall)),
    ]);
    table.add_row(vec![
        Cell::new("F1 Score").add_attribute(Attribute::Bold),
        Cell::new(pct(model.f1)).fg(Color::Cyan),
        Cell::new(pct(library.f1)).fg(Color::Cyan),
    ]);
    table.add_row(vec![
        Cell::new("Accuracy"),
        Cell::new(pct(model.accuracy)),
        Cell::new(pct(library.accuracy)),
    ]);
    table.add_row(vec![
        Cell::new("TP / FP / TN / FN"),
        Cell::new(format!(
            "{} / {} / {} / {}",
            model.true_pos, model.false_pos, model.true_neg, model.false_neg
        )),
        Cell::new(format!(
            "{} / {} / {} / {}",
            library.true_pos, library.false_pos, library.true_neg, library.false_neg
        )),
    ]);

    println!("{}", table);
}

pub fn print_score_report(rows: &[ScoreRow]) {
    let detected = rows.iter().filter(|r| r.is_slop).count();
    let human = rows.iter().filter(|r| r.is_likely_human).count();
    let total = rows.len();

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Input").add_attribute(Attribute::Bold),
        Cell::new("Slop?"),
        Cell::new("Human?"),
        Cell::new("Confidence"),
    ]);
    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Center);
        }
    }

    for row in rows {
        let slop_cell = if row.is_slop {
            Cell::new("✅").fg(Color::Green)
        } else {
            Cell::new("❌").fg(Color::Red)
        };
        let human_cell = if row.is_likely_human {
            Cell::new("✅").fg(Color::Green)
        } else {
            Cell::new("➖")
        };
        table.add_row(vec![
            Cell::new(&row.input),
            slop_cell,
            human_cell,
            Cell::new(format!("{:.2}", row.confidence)),
        ]);
    }

    println!("\n🎹 Detection report ({} inputs)", total);
    println!("{}", table);
    println!(
        "Detected as slop: {} ({})  |  Identified as human: {} ({})",
        detected,
        pct(detected as f64 / total as f64),
        human,
        pct(human as f64 / total as f64)
    );

    if detected < total {
        println!(
            "⚠️  {} input(s) not detected - the heuristics may need tuning.",
            total - detected
        );
    }
}
