use serde::Serialize;

/// The four self-reported daily metrics, already coerced to numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricInputs {
    pub sleep: f64,
    pub stress: f64,
    pub screen: f64,
    pub mood: f64,
}

/// Output of one scoring pass. Rebuilt per request, never stored except
/// for the rounded sleep score that lands in the weekly store.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub sleep_score: i64,
    pub burnout_prob: i64,
    pub burnout_hours: f64,
    pub peak_hours: &'static str,
    pub suggestion: String,
    pub stability: i64,
    pub radar: [f64; 5],
}

const SUGGEST_SCREEN: &str = "Set a strict 10:30 PM screen cut-off alarm.";
const SUGGEST_STRESS: &str = "Schedule a 15-min evening decompression walk.";
const SUGGEST_SLEEP: &str = "Fix an 11:30 PM sleep deadline tonight.";
const SUGGEST_MOOD: &str = "Add one enjoyable activity before bed.";
const SUGGEST_DEFAULT: &str =
    "Maintain this routine and increase deep-work blocks during peak hours.";

/// Pure scoring pass: fixed linear formulas plus threshold branches.
/// Never fails; degenerate inputs give degenerate but defined output.
pub fn score(inputs: &MetricInputs) -> ScoreReport {
    let MetricInputs {
        sleep,
        stress,
        screen,
        mood,
    } = *inputs;

    let sleep_score =
        (sleep / 8.0 * 60.0 + mood * 8.0 - stress * 5.0 - screen * 2.0).clamp(0.0, 100.0);

    let burnout_prob = (stress * 15.0 + screen * 5.0 - sleep * 6.0).clamp(5.0, 100.0);

    let burnout_hours =
        round_1dp(8.0 - stress * 0.8 - screen * 0.4 + sleep * 0.3 + mood * 0.4).max(1.0);

    let peak_hours = if sleep >= 7.0 && stress <= 2.0 {
        "7:30 AM – 11:00 AM"
    } else if stress >= 4.0 {
        "10:30 AM – 1:00 PM"
    } else {
        "9:00 AM – 12:00 PM"
    };

    // Unclamped on purpose; the reference leaves it free to leave [0, 100].
    let stability = ((sleep_score - burnout_prob + mood * 10.0) / 2.0).round() as i64;

    let mut actionable = Vec::new();
    if screen > 4.0 {
        actionable.push(SUGGEST_SCREEN);
    }
    if stress >= 4.0 {
        actionable.push(SUGGEST_STRESS);
    }
    if sleep < 6.0 {
        actionable.push(SUGGEST_SLEEP);
    }
    if mood <= 2.0 {
        actionable.push(SUGGEST_MOOD);
    }
    if actionable.is_empty() {
        actionable.push(SUGGEST_DEFAULT);
    }
    let suggestion = actionable.join(" • ");

    let radar = [
        (sleep * 12.0).min(100.0),
        100.0 - stress * 15.0,
        mood * 20.0,
        100.0 - screen * 10.0,
        burnout_prob,
    ];

    ScoreReport {
        sleep_score: sleep_score.round() as i64,
        burnout_prob: burnout_prob.round() as i64,
        burnout_hours,
        peak_hours,
        suggestion,
        stability,
        radar,
    }
}

fn round_1dp(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
