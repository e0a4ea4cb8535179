use crate::models::ReportContext;

/// Renders the single page. With no context (the first GET) the result
/// panels and the chart script collapse to nothing.
pub fn render_index(context: Option<&ReportContext>) -> String {
    match context {
        Some(ctx) => INDEX_HTML
            .replace("{{RESULT_PANELS}}", &render_panels(ctx))
            .replace("{{RESULT_SCRIPT}}", &render_charts(ctx)),
        None => INDEX_HTML
            .replace("{{RESULT_PANELS}}", "")
            .replace("{{RESULT_SCRIPT}}", ""),
    }
}

fn render_panels(context: &ReportContext) -> String {
    let report = &context.report;
    RESULT_PANELS
        .replace("{{SLEEP_SCORE}}", &report.sleep_score.to_string())
        .replace("{{STABILITY}}", &report.stability.to_string())
        .replace("{{PEAK_HOURS}}", report.peak_hours)
        .replace("{{BURNOUT_HOURS}}", &report.burnout_hours.to_string())
        .replace("{{BURNOUT_PROB}}", &report.burnout_prob.to_string())
        .replace("{{SUGGESTION}}", &report.suggestion)
}

fn render_charts(context: &ReportContext) -> String {
    RESULT_SCRIPT
        .replace("{{RADAR_DATA}}", &json_array(&context.report.radar))
        .replace("{{WEEKLY_DATA}}", &json_array(&context.weekly))
}

fn json_array<T: serde::Serialize>(values: &T) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8" />
<meta name="viewport" content="width=device-width, initial-scale=1.0" />
<title>SleepWise</title>
<link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;600;800&display=swap" rel="stylesheet">
<script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
<style>
body{
    margin:0;
    font-family:'Inter',sans-serif;
    background:#0b0c0f;
    color:#e5e5e5;
}
.wrapper{
    max-width:1100px;
    margin:auto;
    padding:60px 40px 140px;
}
h1{
    font-size:70px;
    text-align:center;
    font-weight:800;
    margin-bottom:10px;
    background:linear-gradient(135deg,#6366f1,#8b5cf6);
    -webkit-background-clip:text;
    -webkit-text-fill-color:transparent;
}
.subtitle{
    text-align:center;
    color:#9ca3af;
    margin-bottom:60px;
}
.panel{
    background:#14161b;
    border-radius:26px;
    padding:55px;
    margin-bottom:60px;
    box-shadow:0 30px 90px rgba(0,0,0,0.85);
}
input, select{
    width:100%;
    padding:18px;
    font-size:16px;
    margin-bottom:18px;
    border-radius:14px;
    border:none;
    background:#1f2229;
    color:#fff;
    box-sizing:border-box;
}
button{
    width:100%;
    padding:18px;
    border:none;
    border-radius:16px;
    background:linear-gradient(135deg,#6366f1,#8b5cf6);
    color:#fff;
    font-size:17px;
    font-weight:600;
    cursor:pointer;
}
.section-title{
    font-size:30px;
    margin-bottom:20px;
}
.big-text{
    font-size:58px;
    font-weight:800;
}
.center{text-align:center;}
canvas{
    max-width:420px;
    margin:35px auto 0;
    display:block;
}
p{
    font-size:18px;
    line-height:1.75;
    color:#cbd5f5;
}
</style>
</head>
<body>
<div class="wrapper">

<h1>SleepWise</h1>
<p class="subtitle">Behavior-Driven Cognitive Analytics Engine</p>

<div class="panel">
<form method="POST" action="/">
    <select name="day" required>
        <option value="">Select Day</option>
        <option>Monday</option>
        <option>Tuesday</option>
        <option>Wednesday</option>
        <option>Thursday</option>
        <option>Friday</option>
        <option>Saturday</option>
        <option>Sunday</option>
    </select>

    <input name="sleep" placeholder="Sleep hours (e.g. 7)" required>
    <input name="stress" placeholder="Stress level (1-5)" required>
    <input name="screen" placeholder="Screen time (hours)" required>
    <input name="mood" placeholder="Mood (1-5)" required>
    <button>Analyze</button>
</form>
</div>

{{RESULT_PANELS}}
</div>
{{RESULT_SCRIPT}}
</body>
</html>
"#;

const RESULT_PANELS: &str = r#"<div class="panel center">
    <div class="section-title">Sleep Quality Score</div>
    <div class="big-text">{{SLEEP_SCORE}} / 100</div>
    <canvas id="radar"></canvas>
</div>

<div class="panel center">
    <div class="section-title">Cognitive Stability Index</div>
    <div class="big-text">{{STABILITY}} / 100</div>
</div>

<div class="panel">
    <div class="section-title">Peak Productivity Hours</div>
    <p>{{PEAK_HOURS}}</p>
</div>

<div class="panel">
    <div class="section-title">Predictive Burnout Window</div>
    <p>Mental fatigue likely after <strong>{{BURNOUT_HOURS}} productive hours</strong>.</p>
</div>

<div class="panel">
    <div class="section-title">Burnout Probability</div>
    <p><strong>{{BURNOUT_PROB}}%</strong> likelihood if habits continue.</p>
</div>

<div class="panel">
    <div class="section-title">Action Plan</div>
    <p>{{SUGGESTION}}</p>
</div>

<div class="panel center">
    <div class="section-title">Weekly Sleep Trend</div>
    <canvas id="weekly"></canvas>
</div>
"#;

const RESULT_SCRIPT: &str = r##"<script>
new Chart(document.getElementById("radar"),{
    type:"radar",
    data:{
        labels:["Sleep","Stress","Mood","Screen","Burnout"],
        datasets:[{
            data: {{RADAR_DATA}},
            backgroundColor:"rgba(139,92,246,0.2)",
            borderColor:"#8b5cf6",
            pointBackgroundColor:"#fff"
        }]
    },
    options:{
        scales:{ r:{ min:0,max:100,ticks:{display:false} } },
        plugins:{legend:{display:false}}
    }
});

new Chart(document.getElementById("weekly"),{
    type:"bar",
    data:{
        labels:["Mon","Tue","Wed","Thu","Fri","Sat","Sun"],
        datasets:[{
            data: {{WEEKLY_DATA}},
            backgroundColor:"#6366f1"
        }]
    },
    options:{
        plugins:{legend:{display:false}},
        scales:{y:{min:0,max:100}}
    }
});
</script>
"##;
