use crate::calendar::WEEKDAY_LABELS;
use crate::dashboard::{Dashboard, Tab, default_reminder_time};
use crate::dialogs::Dialog;
use crate::login::{FieldErrors, LoginForm};
use crate::models::{ColorTag, Frequency, PrivacyLevel, ReminderSlot};
use std::fmt::Write;

pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let panel = match dashboard.tab() {
        Tab::Calendar => calendar_panel(dashboard),
        Tab::Streaks => streaks_panel(dashboard),
        Tab::Milestones => milestones_panel(dashboard),
    };

    DASHBOARD_HTML
        .replace("{{STYLE}}", STYLE)
        .replace("{{MONTH}}", &escape_html(&dashboard.view().label()))
        .replace("{{TABS}}", &tabs(dashboard.tab()))
        .replace("{{PANEL}}", &panel)
        .replace("{{DIALOGS}}", &dialogs(dashboard))
}

pub fn render_login(form: &LoginForm, errors: &FieldErrors) -> String {
    let field_error = |message: &Option<String>| {
        message
            .as_deref()
            .map(|text| format!(r#"<p class="field-error">{}</p>"#, escape_html(text)))
            .unwrap_or_default()
    };

    LOGIN_HTML
        .replace("{{STYLE}}", STYLE)
        .replace("{{EMAIL}}", &escape_html(&form.email))
        .replace("{{EMAIL_ERROR}}", &field_error(&errors.email))
        .replace("{{PASSWORD_ERROR}}", &field_error(&errors.password))
        .replace(
            "{{REMEMBER}}",
            if form.remember_me.is_some() { "checked" } else { "" },
        )
}

/// Escapes markup and template braces so user text can't reach a later `{{PLACEHOLDER}}` pass.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(c),
        }
    }
    out
}

fn swatch(color: ColorTag, title: &str, size: &str) -> String {
    format!(
        r#"<span class="dot {size} swatch-{}" title="{}"></span>"#,
        color.as_str(),
        escape_html(title)
    )
}

fn progress_bar(value: u32) -> String {
    format!(r#"<div class="progress"><div class="fill" style="width: {}%"></div></div>"#, value.min(100))
}

fn post_button(action: &str, class: &str, label: &str) -> String {
    format!(
        r#"<form method="post" action="{action}"><button class="{class}" type="submit">{label}</button></form>"#
    )
}

fn tabs(active: Tab) -> String {
    Tab::ALL
        .into_iter()
        .map(|tab| {
            let class = if tab == active { "tab active" } else { "tab" };
            post_button(&format!("/dashboard/tab/{}", tab.as_str()), class, tab.label())
        })
        .collect()
}

fn calendar_panel(dashboard: &Dashboard) -> String {
    let mut html = String::from(r#"<section class="card"><div class="grid">"#);
    for label in WEEKDAY_LABELS {
        let _ = write!(html, r#"<div class="weekday">{label}</div>"#);
    }

    for cell in dashboard.calendar() {
        let Some(day) = cell.day else {
            html.push_str(r#"<div class="cell empty"></div>"#);
            continue;
        };
        let dots: String = dashboard
            .habits()
            .iter()
            .filter(|habit| cell.completed.contains(&habit.id))
            .map(|habit| swatch(habit.color, &habit.name, "small"))
            .collect();
        let _ = write!(
            html,
            r#"<form class="cell" method="post" action="/dashboard/days/{day}"><button type="submit"><span class="day">{day}</span><span class="dots">{dots}</span></button></form>"#
        );
    }
    html.push_str("</div></section>");

    html.push_str(r#"<section class="habit-cards">"#);
    for habit in dashboard.habits() {
        let _ = write!(
            html,
            r#"<article class="card habit"><h3>{name}</h3><p class="subtitle">Current streak: <span class="badge">{streak} days</span></p><div class="row">{complete}{reminder}</div></article>"#,
            name = escape_html(&habit.name),
            streak = habit.streak_count,
            complete = post_button(
                &format!("/dashboard/habits/{}/complete", habit.id),
                "btn-outline",
                "Mark Complete"
            ),
            reminder = post_button("/dashboard/dialogs/reminder/open", "btn-ghost", "Reminder"),
        );
    }
    html.push_str("</section>");
    html
}

fn streaks_panel(dashboard: &Dashboard) -> String {
    let mut html = String::from(
        r#"<section class="card"><h2>Current Streaks</h2><p class="subtitle">Keep your streaks going to build lasting habits</p><div class="list">"#,
    );
    for habit in dashboard.habits() {
        let _ = write!(
            html,
            r#"<div class="row"><div class="row">{dot}<span>{name}</span></div><div class="row"><strong>{streak} days</strong>{bar}</div></div>"#,
            dot = swatch(habit.color, &habit.name, "large"),
            name = escape_html(&habit.name),
            streak = habit.streak_count,
            bar = progress_bar(habit.streak_progress()),
        );
    }
    html.push_str("</div></section>");
    html
}

fn milestones_panel(dashboard: &Dashboard) -> String {
    let mut html = String::from(
        r#"<section class="card"><h2>Milestones</h2><p class="subtitle">Track your progress and celebrate achievements</p><div class="list">"#,
    );
    for milestone in dashboard.milestone_summaries() {
        let habit_name = milestone
            .habit_name
            .as_deref()
            .map(escape_html)
            .unwrap_or_else(|| "Unknown habit".to_string());
        let badge = if milestone.completed {
            r#"<span class="badge done">Completed</span>"#
        } else {
            ""
        };
        let _ = write!(
            html,
            r#"<div class="milestone"><div class="row"><div><strong>{name}</strong><p class="subtitle">{habit_name}</p></div>{badge}</div>{bar}</div>"#,
            name = escape_html(&milestone.name),
            bar = progress_bar(u32::from(milestone.progress)),
        );
    }
    html.push_str("</div></section>");
    html
}

fn options<T: Copy + PartialEq>(
    items: &[T],
    selected: Option<T>,
    value: impl Fn(T) -> &'static str,
    label: impl Fn(T) -> &'static str,
) -> String {
    items
        .iter()
        .map(|item| {
            let mark = if Some(*item) == selected { " selected" } else { "" };
            format!(r#"<option value="{}"{mark}>{}</option>"#, value(*item), escape_html(label(*item)))
        })
        .collect()
}

fn dialogs(dashboard: &Dashboard) -> String {
    dashboard
        .dialogs()
        .open_dialogs()
        .into_iter()
        .enumerate()
        .map(|(layer, dialog)| {
            let body = match dialog {
                Dialog::AddHabit => add_habit_dialog(),
                Dialog::DayDetail => day_detail_dialog(dashboard),
                Dialog::Reminder => reminder_dialog(dashboard),
                Dialog::Share => share_dialog(dashboard),
            };
            format!(
                r#"<div class="overlay" style="z-index: {}" data-dialog="{}"><div class="dialog">{body}</div></div>"#,
                100 + layer,
                dialog.as_str()
            )
        })
        .collect()
}

fn close_action(dialog: Dialog) -> String {
    format!("/dashboard/dialogs/{}/close", dialog.as_str())
}

fn add_habit_dialog() -> String {
    format!(
        r#"<h2>Add New Habit</h2><p class="subtitle">Create a new habit to track in your calendar.</p>
<form method="post" action="/dashboard/habits" class="fields">
<label>Habit Name<input name="name" placeholder="e.g., Morning Meditation" required /></label>
<label>Color<select name="color" required><option value="" disabled selected>Select a color</option>{colors}</select></label>
<label>Frequency<select name="frequency"><option value="">Select frequency</option>{frequencies}</select></label>
<label>Set Reminder<select name="reminder"><option value="">Select time</option>{slots}</select></label>
<div class="footer"><button class="btn-outline" type="submit" formaction="{cancel}" formnovalidate>Cancel</button><button class="btn-primary" type="submit">Add Habit</button></div>
</form>"#,
        colors = options(&ColorTag::ALL, None, ColorTag::as_str, ColorTag::label),
        frequencies = options(&Frequency::ALL, None, Frequency::as_str, Frequency::label),
        slots = options(&ReminderSlot::ALL, None, ReminderSlot::as_str, ReminderSlot::label),
        cancel = close_action(Dialog::AddHabit),
    )
}

fn day_detail_dialog(dashboard: &Dashboard) -> String {
    let Some(detail) = dashboard.day_detail() else {
        return format!(
            r#"<h2>No day selected</h2><div class="footer">{}</div>"#,
            post_button(&close_action(Dialog::DayDetail), "btn-primary", "Close")
        );
    };

    let rows: String = detail
        .habits
        .iter()
        .map(|habit| {
            let label = if habit.completed { "Completed" } else { "Mark Complete" };
            format!(
                r#"<div class="row"><div class="row">{dot}<span>{name}</span></div>{button}</div>"#,
                dot = swatch(habit.color, &habit.name, "large"),
                name = escape_html(&habit.name),
                button = post_button(
                    &format!("/dashboard/habits/{}/complete", habit.id),
                    "btn-outline",
                    label
                ),
            )
        })
        .collect();

    format!(
        r#"<h2>{title}</h2><p class="subtitle">Manage your habits for this day.</p><div class="list">{rows}</div><div class="footer">{reminder}{close}</div>"#,
        title = escape_html(&detail.title),
        reminder = post_button("/dashboard/dialogs/reminder/open", "btn-outline", "Set Reminder"),
        close = post_button(&close_action(Dialog::DayDetail), "btn-primary", "Close"),
    )
}

fn reminder_dialog(dashboard: &Dashboard) -> String {
    let habits: String = dashboard
        .habits()
        .iter()
        .map(|habit| format!(r#"<option value="{}">{}</option>"#, habit.id, escape_html(&habit.name)))
        .collect();

    format!(
        r#"<h2>Set Reminder</h2><p class="subtitle">Choose when you want to be reminded.</p>
<form method="post" action="/dashboard/reminders" class="fields">
<label>Habit<select name="habit_id"><option value="">Select habit</option>{habits}</select></label>
<label>Time<input type="time" name="time" value="{time}" /></label>
<label>Repeat<select name="repeat"><option value="">Select frequency</option>{repeats}</select></label>
<div class="footer"><button class="btn-outline" type="submit" formaction="{cancel}" formnovalidate>Cancel</button><button class="btn-primary" type="submit">Save Reminder</button></div>
</form>"#,
        time = default_reminder_time().format("%H:%M"),
        repeats = options(&Frequency::ALL, None, Frequency::as_str, Frequency::label),
        cancel = close_action(Dialog::Reminder),
    )
}

fn share_dialog(dashboard: &Dashboard) -> String {
    let share = dashboard.share_settings();
    let channels: String = share
        .channels
        .iter()
        .map(|channel| format!(r#"<button class="btn-outline" type="button">{}</button>"#, escape_html(channel)))
        .collect();

    format!(
        r#"<h2>Share Your Progress</h2><p class="subtitle">Share your habit calendar with friends and family.</p>
<form method="post" action="/dashboard/share" class="fields">
<label>Share Link<span class="row"><input id="share-link" value="{link}" readonly /><button class="btn-outline" type="button" data-copy="share-link">Copy</button></span></label>
<div><span class="label">Share with</span><div class="row wrap">{channels}</div></div>
<label>Privacy Settings<select name="privacy">{privacy}</select></label>
<div class="footer"><button class="btn-outline" type="submit" formaction="{cancel}">Cancel</button><button class="btn-primary" type="submit">Share</button></div>
</form>"#,
        link = escape_html(&share.link),
        privacy = options(
            &PrivacyLevel::ALL,
            Some(share.privacy),
            PrivacyLevel::as_str,
            PrivacyLevel::label
        ),
        cancel = close_action(Dialog::Share),
    )
}

const STYLE: &str = r#"
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --muted: #6b6660;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    h1, h2, h3 { font-family: "Fraunces", "Georgia", serif; font-weight: 600; margin: 0; }
    form { margin: 0; }
    button { font: inherit; cursor: pointer; border-radius: 10px; padding: 6px 12px; border: 1px solid transparent; }
    .subtitle { color: var(--muted); margin: 4px 0 0; font-size: 0.9rem; }
    .row { display: flex; align-items: center; justify-content: space-between; gap: 8px; }
    .wrap { flex-wrap: wrap; justify-content: flex-start; }
    .list { display: grid; gap: 14px; margin-top: 16px; }
    .card { background: var(--card); border-radius: 20px; box-shadow: var(--shadow); padding: 20px; }
    .btn-primary { background: var(--accent); color: #fff; }
    .btn-outline { background: transparent; border-color: var(--accent-2); color: var(--accent-2); }
    .btn-ghost { background: transparent; color: var(--accent-2); }
    .badge { border: 1px solid var(--accent-2); border-radius: 999px; padding: 1px 8px; font-size: 0.8rem; }
    .badge.done { background: #22c55e; border-color: #22c55e; color: #fff; }
    .progress { background: rgba(47, 72, 88, 0.12); border-radius: 999px; height: 8px; width: 100%; min-width: 96px; overflow: hidden; }
    .progress .fill { background: var(--accent-2); height: 100%; }
    .dot { display: inline-block; border-radius: 50%; }
    .dot.small { width: 8px; height: 8px; }
    .dot.large { width: 12px; height: 12px; }
    .swatch-green { background: #22c55e; }
    .swatch-blue { background: #3b82f6; }
    .swatch-purple { background: #a855f7; }
    .swatch-orange { background: #f97316; }
    .swatch-red { background: #ef4444; }

    header.top { position: sticky; top: 0; display: flex; justify-content: space-between; align-items: center; padding: 12px 24px; background: rgba(248, 243, 230, 0.9); backdrop-filter: blur(8px); }
    header.top a { color: var(--ink); text-decoration: none; font-weight: 600; }
    main { width: min(1040px, 100%); margin: 0 auto; padding: 24px 18px 48px; display: grid; gap: 20px; }
    .tabs { display: flex; gap: 6px; }
    .tab { background: transparent; border-color: rgba(47, 72, 88, 0.2); }
    .tab.active { background: var(--accent-2); color: #fff; }
    .grid { display: grid; grid-template-columns: repeat(7, 1fr); gap: 4px; text-align: center; }
    .weekday { font-weight: 500; font-size: 0.85rem; padding: 4px 0; }
    .cell { aspect-ratio: 1 / 1; }
    .cell button { width: 100%; height: 100%; display: flex; flex-direction: column; justify-content: space-between; background: #fff; border-color: rgba(47, 72, 88, 0.15); }
    .cell .dots { display: flex; flex-wrap: wrap; gap: 3px; }
    .habit-cards { display: grid; gap: 16px; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); }
    .overlay { position: fixed; inset: 0; display: grid; place-items: center; background: rgba(43, 42, 40, 0.35); }
    .dialog { background: #fff; border-radius: 20px; padding: 24px; width: min(440px, 92vw); box-shadow: var(--shadow); }
    .fields { display: grid; gap: 14px; margin-top: 16px; }
    .fields label { display: grid; gap: 6px; font-weight: 500; }
    input, select { font: inherit; padding: 8px 10px; border-radius: 10px; border: 1px solid rgba(47, 72, 88, 0.25); }
    .footer { display: flex; justify-content: flex-end; gap: 8px; margin-top: 18px; }
    .field-error { color: #c2410c; margin: 0; font-size: 0.85rem; }
    .login { min-height: 100vh; display: grid; place-items: center; padding: 16px; }
"#;

const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>HabitTracker</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <header class="top">
    <a href="/dashboard">HabitTracker</a>
    <nav class="row">
      <form method="post" action="/dashboard/dialogs/share/open"><button class="btn-ghost" type="submit" title="Share">Share</button></form>
      <form method="post" action="/dashboard/tab/milestones"><button class="btn-ghost" type="submit" title="Milestones">Trophies</button></form>
    </nav>
  </header>
  <main>
    <div class="row">
      <div class="row">
        <form method="post" action="/dashboard/month/prev"><button class="btn-outline" type="submit" aria-label="Previous month">&lsaquo;</button></form>
        <h2 id="month">{{MONTH}}</h2>
        <form method="post" action="/dashboard/month/next"><button class="btn-outline" type="submit" aria-label="Next month">&rsaquo;</button></form>
      </div>
      <form method="post" action="/dashboard/dialogs/add_habit/open"><button class="btn-primary" type="submit">+ Add Habit</button></form>
    </div>
    <nav class="tabs" role="tablist">{{TABS}}</nav>
    {{PANEL}}
  </main>
  {{DIALOGS}}
  <script>
    document.querySelectorAll('[data-copy]').forEach((button) => {
      button.addEventListener('click', () => {
        const input = document.getElementById(button.dataset.copy);
        navigator.clipboard.writeText(input.value).then(() => { button.textContent = 'Copied'; });
      });
    });
  </script>
</body>
</html>
"#;

const LOGIN_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Login - HabitTracker</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <div class="login">
    <main class="card" style="width: min(420px, 100%)">
      <h1 style="text-align: center">Welcome Back</h1>
      <p class="subtitle" style="text-align: center">Please enter your email and password to login to your account</p>
      <form id="login-form" method="post" action="/login" class="fields" novalidate>
        <label>Email<input name="email" placeholder="test@email.com" value="{{EMAIL}}" /></label>
        {{EMAIL_ERROR}}
        <label>Password
          <span class="row"><input id="password" type="password" name="password" /><button class="btn-ghost" id="toggle-password" type="button">Show</button></span>
        </label>
        {{PASSWORD_ERROR}}
        <label class="row wrap"><input type="checkbox" name="remember_me" {{REMEMBER}} /> Remember Me</label>
        <button class="btn-primary" id="login-btn" type="submit">Login</button>
      </form>
    </main>
  </div>
  <script>
    const password = document.getElementById('password');
    const toggle = document.getElementById('toggle-password');
    toggle.addEventListener('click', () => {
      const hidden = password.type === 'password';
      password.type = hidden ? 'text' : 'password';
      toggle.textContent = hidden ? 'Hide' : 'Show';
    });

    document.getElementById('login-form').addEventListener('submit', () => {
      const button = document.getElementById('login-btn');
      button.disabled = true;
      button.textContent = 'Logging in...';
    });
  </script>
</body>
</html>
"#;
