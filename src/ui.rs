use crate::models::{Exercise, ProgressEntry};

/// Suggested in the dropdowns only; the API accepts any non-empty group.
pub const MUSCLE_GROUPS: [&str; 6] = ["Biceps", "Triceps", "Back", "Chest", "Shoulders", "Legs"];

const TABS: [(&str, &str); 3] = [
    ("add-exercise", "Add Exercise"),
    ("record-progress", "Record Progress"),
    ("view-progress", "View Progress"),
];

pub fn render_index(today: &str, exercises: &[Exercise], recent: &[ProgressEntry]) -> String {
    fill_template(
        INDEX_HTML,
        &[
            ("TABS", render_tabs(TABS[0].0)),
            ("TODAY", escape_html(today)),
            ("MUSCLE_OPTIONS", muscle_group_options()),
            ("EXERCISE_ROWS", exercise_rows(exercises)),
            ("RECENT_ROWS", recent_rows(recent)),
            (
                "PROGRESS_EXERCISE_OPTIONS",
                exercise_options(exercises, "", "Select Exercise"),
            ),
            (
                "CHART_EXERCISE_OPTIONS",
                exercise_options(exercises, "all", "All Exercises"),
            ),
        ],
    )
}

/// Substitutes `{{KEY}}` placeholders in one pass over the template. Inserted
/// values are never rescanned, so stored text shaped like a placeholder stays literal.
fn fill_template(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let value = after.find("}}").and_then(|end| {
            values
                .iter()
                .find(|(key, _)| *key == &after[..end])
                .map(|(_, value)| (value, end))
        });
        match value {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn render_tabs(active: &str) -> String {
    TABS.iter()
        .map(|(id, label)| {
            let is_active = *id == active;
            format!(
                r#"<button class="tab{}" type="button" data-tab="{id}" role="tab" aria-selected="{is_active}">{label}</button>"#,
                if is_active { " active" } else { "" },
            )
        })
        .collect()
}

fn muscle_group_options() -> String {
    MUSCLE_GROUPS
        .iter()
        .map(|group| format!(r#"<option value="{group}">{group}</option>"#))
        .collect()
}

fn exercise_rows(exercises: &[Exercise]) -> String {
    if exercises.is_empty() {
        return r#"<tr><td colspan="3">No exercises found. Add some exercises to get started!</td></tr>"#
            .to_string();
    }
    exercises
        .iter()
        .map(|exercise| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                exercise.id,
                escape_html(&exercise.name),
                escape_html(&exercise.muscle_group)
            )
        })
        .collect()
}

fn recent_rows(recent: &[ProgressEntry]) -> String {
    if recent.is_empty() {
        return r#"<tr><td colspan="3">No progress entries found. Add some progress to get started!</td></tr>"#
            .to_string();
    }
    recent
        .iter()
        .map(|entry| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&entry.label()),
                entry.weight,
                escape_html(&entry.date)
            )
        })
        .collect()
}

fn exercise_options(exercises: &[Exercise], placeholder_value: &str, placeholder: &str) -> String {
    let mut html = format!(r#"<option value="{placeholder_value}">{placeholder}</option>"#);
    for exercise in exercises {
        html.push_str(&format!(
            r#"<option value="{}">{} ({})</option>"#,
            exercise.id,
            escape_html(&exercise.name),
            escape_html(&exercise.muscle_group)
        ));
    }
    html
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Gym Progress Tracker</title>
  <style>
    :root {
      --bg: #f5f5f5;
      --ink: #333;
      --accent: #2c3e50;
      --go: #27ae60;
      --go-dark: #219653;
      --card: #fff;
      --shadow: 0 2px 5px rgba(0, 0, 0, 0.1);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      background-color: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", Tahoma, Geneva, Verdana, sans-serif;
    }

    header {
      background-color: var(--accent);
      color: #fff;
      padding: 20px 0;
      text-align: center;
      margin-bottom: 30px;
    }

    h1 {
      margin: 0;
    }

    .container {
      max-width: 1200px;
      margin: 0 auto;
      padding: 20px;
    }

    .tabs {
      display: flex;
      margin-bottom: 20px;
      border-bottom: 1px solid #ddd;
    }

    .tab {
      background-color: #f1f1f1;
      color: var(--ink);
      border: none;
      border-radius: 0;
      padding: 15px 25px;
      font-size: 16px;
      cursor: pointer;
    }

    .tab.active {
      background-color: var(--accent);
      color: #fff;
    }

    .tab-content {
      display: none;
      padding: 20px;
      background-color: var(--card);
      border-radius: 5px;
      box-shadow: var(--shadow);
    }

    .tab-content.active {
      display: block;
    }

    .form-group {
      margin-bottom: 20px;
    }

    label {
      display: block;
      margin-bottom: 5px;
      font-weight: bold;
    }

    input, select {
      width: 100%;
      padding: 10px;
      border: 1px solid #ddd;
      border-radius: 4px;
      font-size: 16px;
    }

    button {
      background-color: var(--go);
      color: #fff;
      border: none;
      padding: 10px 20px;
      border-radius: 4px;
      cursor: pointer;
      font-size: 16px;
    }

    button:hover {
      background-color: var(--go-dark);
    }

    table {
      width: 100%;
      border-collapse: collapse;
      margin: 20px 0;
    }

    th, td {
      padding: 12px 15px;
      text-align: left;
      border-bottom: 1px solid #ddd;
    }

    th {
      background-color: var(--accent);
      color: #fff;
    }

    .filter-controls {
      display: flex;
      gap: 10px;
      margin-bottom: 20px;
      align-items: center;
      flex-wrap: wrap;
    }

    .filter-controls label {
      margin-bottom: 0;
    }

    .filter-controls select {
      width: auto;
    }

    .alert {
      padding: 15px;
      margin-bottom: 20px;
      border-radius: 4px;
    }

    .alert-success {
      background-color: #d4edda;
      color: #155724;
      border: 1px solid #c3e6cb;
    }

    .alert-error {
      background-color: #f8d7da;
      color: #721c24;
      border: 1px solid #f5c6cb;
    }

    @media (max-width: 768px) {
      .tabs {
        flex-direction: column;
      }
      .tab {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <header>
    <h1>Gym Progress Tracker</h1>
  </header>

  <main class="container">
    <div id="alerts"></div>

    <nav class="tabs" role="tablist">{{TABS}}</nav>

    <section id="add-exercise" class="tab-content active">
      <h2>Add Exercise</h2>
      <form id="add-exercise-form">
        <div class="form-group">
          <label for="exercise-name">Exercise name</label>
          <input id="exercise-name" type="text" />
        </div>
        <div class="form-group">
          <label for="muscle-group">Muscle group</label>
          <select id="muscle-group">
            <option value="">Select Muscle Group</option>
            {{MUSCLE_OPTIONS}}
          </select>
        </div>
        <button type="submit">Add Exercise</button>
      </form>

      <table>
        <thead><tr><th>ID</th><th>Name</th><th>Muscle Group</th></tr></thead>
        <tbody id="exercises-table-body">{{EXERCISE_ROWS}}</tbody>
      </table>
    </section>

    <section id="record-progress" class="tab-content">
      <h2>Record Progress</h2>
      <form id="add-progress-form">
        <div class="form-group">
          <label for="progress-exercise">Exercise</label>
          <select id="progress-exercise">{{PROGRESS_EXERCISE_OPTIONS}}</select>
        </div>
        <div class="form-group">
          <label for="weight">Weight</label>
          <input id="weight" type="number" step="0.5" />
        </div>
        <div class="form-group">
          <label for="date">Date</label>
          <input id="date" type="date" value="{{TODAY}}" />
        </div>
        <button type="submit">Record Progress</button>
      </form>

      <h3>Recent Progress</h3>
      <table>
        <thead><tr><th>Exercise</th><th>Weight</th><th>Date</th></tr></thead>
        <tbody id="progress-table-body">{{RECENT_ROWS}}</tbody>
      </table>
    </section>

    <section id="view-progress" class="tab-content">
      <h2>View Progress</h2>
      <div class="filter-controls">
        <label for="chart-muscle-group">Muscle group</label>
        <select id="chart-muscle-group">
          <option value="all">All Muscle Groups</option>
          {{MUSCLE_OPTIONS}}
        </select>
        <label for="chart-exercise">Exercise</label>
        <select id="chart-exercise">{{CHART_EXERCISE_OPTIONS}}</select>
        <label for="chart-time-range">Time range</label>
        <select id="chart-time-range">
          <option value="all-time">All Time</option>
          <option value="last-month">Last Month</option>
          <option value="last-3-months">Last 3 Months</option>
          <option value="last-6-months">Last 6 Months</option>
        </select>
        <button id="generate-chart" type="button">Generate Chart</button>
      </div>
      <div id="chart-container"></div>
    </section>
  </main>

  <script>
    const tabs = Array.from(document.querySelectorAll('.tab'));
    const panels = Array.from(document.querySelectorAll('.tab-content'));
    const alertsEl = document.getElementById('alerts');
    const exercisesBody = document.getElementById('exercises-table-body');
    const progressBody = document.getElementById('progress-table-body');
    const progressExercise = document.getElementById('progress-exercise');
    const chartMuscleGroup = document.getElementById('chart-muscle-group');
    const chartExercise = document.getElementById('chart-exercise');
    const chartRange = document.getElementById('chart-time-range');
    const chartContainer = document.getElementById('chart-container');

    const showAlert = (message, type) => {
      const alert = document.createElement('div');
      alert.className = `alert alert-${type}`;
      alert.textContent = message;
      alertsEl.appendChild(alert);
      setTimeout(() => alert.remove(), 5000);
    };

    const setActiveTab = (tab) => {
      tabs.forEach((button) => {
        const isActive = button.dataset.tab === tab;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      panels.forEach((panel) => panel.classList.toggle('active', panel.id === tab));
    };

    const cell = (text) => {
      const td = document.createElement('td');
      td.textContent = text;
      return td;
    };

    const row = (...values) => {
      const tr = document.createElement('tr');
      values.forEach((value) => tr.appendChild(cell(value)));
      return tr;
    };

    const emptyRow = (message) => {
      const tr = document.createElement('tr');
      const td = cell(message);
      td.colSpan = 3;
      tr.appendChild(td);
      return tr;
    };

    const option = (value, label) => {
      const opt = document.createElement('option');
      opt.value = value;
      opt.textContent = label;
      return opt;
    };

    const getJson = async (url, options) => {
      const res = await fetch(url, options);
      const body = await res.json();
      if (!res.ok) {
        throw new Error(body.error || 'Request failed');
      }
      return body;
    };

    const loadExercises = async () => {
      const exercises = await getJson('/api/exercises');
      exercisesBody.replaceChildren();
      if (!exercises.length) {
        exercisesBody.appendChild(emptyRow('No exercises found. Add some exercises to get started!'));
      }
      exercises.forEach((e) => exercisesBody.appendChild(row(e.id, e.name, e.muscle_group)));

      progressExercise.replaceChildren(option('', 'Select Exercise'));
      chartExercise.replaceChildren(option('all', 'All Exercises'));
      exercises.forEach((e) => {
        progressExercise.appendChild(option(e.id, `${e.name} (${e.muscle_group})`));
        chartExercise.appendChild(option(e.id, `${e.name} (${e.muscle_group})`));
      });
    };

    const loadRecentProgress = async () => {
      const entries = await getJson('/api/progress/recent');
      progressBody.replaceChildren();
      if (!entries.length) {
        progressBody.appendChild(emptyRow('No progress entries found. Add some progress to get started!'));
      }
      entries.forEach((p) => progressBody.appendChild(row(`${p.exercise_name} (${p.muscle_group})`, p.weight, p.date)));
    };

    const renderChart = (chart) => {
      const wrapper = document.createElement('div');
      const title = document.createElement('h3');
      title.textContent = 'Progress Chart';
      wrapper.appendChild(title);
      chart.groups.forEach((group) => {
        const heading = document.createElement('h4');
        heading.textContent = group.label;
        const table = document.createElement('table');
        const head = document.createElement('tr');
        ['Date', 'Weight'].forEach((label) => {
          const th = document.createElement('th');
          th.textContent = label;
          head.appendChild(th);
        });
        table.appendChild(head);
        group.points.forEach((point) => table.appendChild(row(point.date, point.weight)));
        wrapper.appendChild(heading);
        wrapper.appendChild(table);
      });
      chartContainer.replaceChildren(wrapper);
    };

    const generateChart = async () => {
      const params = new URLSearchParams({
        exercise_id: chartExercise.value,
        muscle_group: chartMuscleGroup.value,
        range: chartRange.value
      });
      const chart = await getJson(`/api/chart?${params}`);
      if (!chart.total) {
        chartContainer.replaceChildren();
        showAlert('No data available for the selected filters.', 'error');
        return;
      }
      renderChart(chart);
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveTab(button.dataset.tab));
    });

    chartMuscleGroup.addEventListener('change', async () => {
      const group = chartMuscleGroup.value;
      const url = group === 'all' ? '/api/exercises' : `/api/exercises/muscle/${encodeURIComponent(group)}`;
      try {
        const exercises = await getJson(url);
        chartExercise.replaceChildren(option('all', 'All Exercises'));
        exercises.forEach((e) => chartExercise.appendChild(option(e.id, `${e.name} (${e.muscle_group})`)));
      } catch (err) {
        showAlert(err.message, 'error');
      }
    });

    document.getElementById('add-exercise-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const nameEl = document.getElementById('exercise-name');
      const groupEl = document.getElementById('muscle-group');
      const name = nameEl.value.trim();
      if (!name || !groupEl.value) {
        showAlert('Please enter both exercise name and select a muscle group.', 'error');
        return;
      }
      try {
        await getJson('/api/exercises', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ name, muscle_group: groupEl.value })
        });
        showAlert('Exercise added successfully!', 'success');
        nameEl.value = '';
        groupEl.value = '';
        await loadExercises();
      } catch (err) {
        showAlert(err.message, 'error');
      }
    });

    document.getElementById('add-progress-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const weightEl = document.getElementById('weight');
      const date = document.getElementById('date').value;
      const weight = weightEl.value.trim();
      if (!progressExercise.value || !weight || !date) {
        showAlert('Please select an exercise, enter a weight, and select a date.', 'error');
        return;
      }
      try {
        await getJson('/api/progress', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({
            exercise_id: Number(progressExercise.value),
            weight: parseFloat(weight),
            date
          })
        });
        showAlert('Progress added successfully!', 'success');
        weightEl.value = '';
        await loadRecentProgress();
      } catch (err) {
        showAlert(err.message, 'error');
      }
    });

    document.getElementById('generate-chart').addEventListener('click', () => {
      generateChart().catch((err) => showAlert(err.message, 'error'));
    });
  </script>
</body>
</html>
"##;
