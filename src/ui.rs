use crate::models::{ActivityDraft, CategoryView, Notification, NotificationKind, PortfolioSnapshot};
use std::fmt::Write;

pub fn render_index(snapshot: &PortfolioSnapshot, toasts: &[Notification]) -> String {
    let progress = &snapshot.progress;
    INDEX_HTML
        .replace("{{LEVEL}}", &progress.level.to_string())
        .replace("{{NEXT_LEVEL}}", &progress.next_level.to_string())
        .replace("{{TOTAL}}", &progress.total_points.to_string())
        .replace("{{PERCENT}}", &progress.progress_percent.to_string())
        .replace("{{BAR}}", &progress.progress_percent.clamp(0, 100).to_string())
        .replace("{{REMAINING}}", &progress.points_to_next_level.to_string())
        .replace("{{ACHIEVEMENTS}}", &render_achievements(snapshot))
        .replace("{{CATEGORIES}}", &render_categories(snapshot))
        .replace("{{TOASTS}}", &render_toasts(toasts))
        .replace("{{DIALOG}}", &render_dialog(snapshot))
}

fn render_achievements(snapshot: &PortfolioSnapshot) -> String {
    let mut out = String::new();
    for achievement in &snapshot.achievements {
        let class = if achievement.unlocked { "achievement" } else { "achievement locked" };
        let _ = write!(
            out,
            r#"<div class="{class}"><span class="icon" data-icon="{icon}"></span><p>{name}</p></div>"#,
            icon = achievement.icon,
            name = escape(achievement.name),
        );
    }
    out
}

fn render_categories(snapshot: &PortfolioSnapshot) -> String {
    let mut out = String::new();
    for category in &snapshot.categories {
        let _ = write!(
            out,
            r#"<form class="category" method="post" action="/category/open">
        <input type="hidden" name="category" value="{id}" />
        <button type="submit" class="category-card">
          <span class="badge-icon {color}" data-icon="{icon}"></span>
          <span class="badge">{total}</span>
          <h3>{name}</h3>
          <p class="hint">{label}</p>
        </button>
      </form>
      "#,
            id = category.id,
            color = category.color,
            icon = category.icon,
            total = category.total_points,
            name = escape(category.name),
            label = escape(&category.activity_label),
        );
    }
    out
}

fn render_dialog(snapshot: &PortfolioSnapshot) -> String {
    let Some(kind) = snapshot.form.category else {
        return String::new();
    };
    let Some(category) = snapshot.categories.iter().find(|c| c.id == kind.id()) else {
        return String::new();
    };
    dialog_markup(category, &snapshot.form)
}

fn dialog_markup(category: &CategoryView, form: &ActivityDraft) -> String {
    let mut history = String::new();
    if !category.activities.is_empty() {
        history.push_str(r#"<h4>История активностей</h4><div class="history">"#);
        for activity in &category.activities {
            let description = activity
                .description
                .as_deref()
                .map(|text| format!(r#"<p class="hint">{}</p>"#, escape(text)))
                .unwrap_or_default();
            let _ = write!(
                history,
                r#"<div class="activity"><div class="row"><strong>{title}</strong><span class="badge {color}">+{points}</span></div>{description}<p class="date">{date}</p></div>"#,
                title = escape(&activity.title),
                color = category.color,
                points = activity.points,
                date = escape(&activity.date),
            );
        }
        history.push_str("</div>");
    }

    format!(
        r#"<dialog open class="dialog">
      <header class="dialog-header">
        <span class="badge-icon {color}" data-icon="{icon}"></span>
        <h2>{name}</h2>
        <form method="post" action="/category/close"><button type="submit" class="close" aria-label="Закрыть">×</button></form>
      </header>
      <div class="stat">
        <span class="label">Всего баллов</span>
        <span class="value">{total}</span>
      </div>
      <h4>Добавить новую активность</h4>
      <form method="post" action="/activity" class="entry">
        <label for="title">Название</label>
        <input id="title" name="title" placeholder="Например: Провел открытый урок" value="{title}" />
        <label for="points">Баллы</label>
        <input id="points" name="points" type="number" placeholder="Количество баллов" value="{points}" />
        <label for="description">Описание (необязательно)</label>
        <textarea id="description" name="description" placeholder="Дополнительная информация">{description}</textarea>
        <button type="submit" class="btn-add">+ Добавить активность</button>
      </form>
      {history}
    </dialog>"#,
        color = category.color,
        icon = category.icon,
        name = escape(category.name),
        total = category.total_points,
        title = escape(&form.title),
        points = escape(&form.points),
        description = escape(&form.description),
    )
}

fn render_toasts(toasts: &[Notification]) -> String {
    let mut out = String::new();
    for toast in toasts {
        let kind = match toast.kind {
            NotificationKind::Award => "award",
            NotificationKind::LevelUp => "level-up",
            NotificationKind::Error => "error",
        };
        let _ = write!(
            out,
            r#"<div class="toast" data-type="{kind}">{icon}{message}</div>"#,
            icon = toast.icon.map(|icon| format!("{icon} ")).unwrap_or_default(),
            message = escape(&toast.message),
        );
    }
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            // Braces would let user text spell a template placeholder.
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="ru">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Портфолио Педагога</title>
  <style>
    :root {
      --bg-1: #f5f0ff;
      --bg-2: #e8f1ff;
      --ink: #2b2a33;
      --primary: #8b5cf6;
      --secondary: #0ea5e9;
      --accent: #ec4899;
      --success: #22c55e;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(76, 29, 149, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), var(--bg-2) 60%, #fdf2f8 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      max-width: 1120px;
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    header.page {
      text-align: center;
    }

    h1 {
      margin: 0;
      font-size: clamp(2rem, 4vw, 3rem);
      background: linear-gradient(90deg, var(--primary), var(--secondary), var(--accent));
      -webkit-background-clip: text;
      color: transparent;
    }

    .subtitle,
    .hint {
      margin: 0;
      color: #6b6575;
    }

    .panel {
      display: grid;
      grid-template-columns: 2fr 1fr;
      gap: 24px;
    }

    .card {
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 28px;
      display: grid;
      gap: 16px;
    }

    .row {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .total {
      font-size: 3rem;
      font-weight: 700;
      color: var(--primary);
    }

    .percent {
      font-size: 2rem;
      font-weight: 600;
      color: var(--secondary);
    }

    .bar {
      height: 16px;
      border-radius: 999px;
      background: rgba(139, 92, 246, 0.15);
      overflow: hidden;
    }

    .bar span {
      display: block;
      height: 100%;
      background: linear-gradient(90deg, var(--primary), var(--secondary));
    }

    .badge {
      border-radius: 999px;
      padding: 6px 14px;
      font-weight: 700;
      border: 1px solid rgba(43, 42, 51, 0.15);
    }

    .achievements {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 12px;
    }

    .achievement {
      text-align: center;
      padding: 14px;
      border-radius: 14px;
      background: rgba(139, 92, 246, 0.1);
    }

    .achievement.locked {
      opacity: 0.5;
      background: rgba(43, 42, 51, 0.06);
    }

    .categories {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 16px;
    }

    .category-card {
      width: 100%;
      text-align: left;
      background: var(--card);
      border: 2px solid transparent;
      border-radius: 18px;
      padding: 20px;
      cursor: pointer;
      transition: transform 150ms ease, border-color 150ms ease;
    }

    .category-card:hover {
      transform: translateY(-4px);
      border-color: var(--primary);
    }

    .category-card h3 {
      font-size: 0.95rem;
      margin: 14px 0 6px;
    }

    .badge-icon {
      display: inline-block;
      width: 44px;
      height: 44px;
      border-radius: 12px;
    }

    .bg-primary { background: var(--primary); color: white; }
    .bg-secondary { background: var(--secondary); color: white; }
    .bg-accent { background: var(--accent); color: white; }
    .bg-success { background: var(--success); color: white; }

    .dialog {
      max-width: 640px;
      width: 100%;
      max-height: 90vh;
      overflow-y: auto;
      border: none;
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 28px;
      display: grid;
      gap: 16px;
    }

    .dialog-header {
      display: flex;
      align-items: center;
      gap: 12px;
    }

    .dialog-header h2 {
      flex: 1;
      margin: 0;
    }

    .stat {
      background: rgba(43, 42, 51, 0.05);
      border-radius: 14px;
      padding: 16px;
      display: grid;
      gap: 4px;
    }

    .stat .value {
      font-size: 2rem;
      font-weight: 700;
      color: var(--primary);
    }

    .entry {
      display: grid;
      gap: 8px;
    }

    input,
    textarea {
      font: inherit;
      padding: 10px 12px;
      border-radius: 10px;
      border: 1px solid rgba(43, 42, 51, 0.2);
    }

    button {
      font: inherit;
    }

    .btn-add {
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font-weight: 600;
      background: var(--primary);
      color: white;
      cursor: pointer;
    }

    .close {
      border: none;
      background: transparent;
      font-size: 1.6rem;
      cursor: pointer;
    }

    .history {
      display: grid;
      gap: 8px;
    }

    .activity {
      background: rgba(43, 42, 51, 0.04);
      border-radius: 12px;
      padding: 12px;
    }

    .activity p {
      margin: 4px 0 0;
    }

    .date {
      font-size: 0.8rem;
      color: #8a8494;
    }

    .toasts {
      position: fixed;
      right: 20px;
      bottom: 20px;
      display: grid;
      gap: 10px;
      z-index: 10;
    }

    .toast {
      background: white;
      border-radius: 14px;
      padding: 14px 18px;
      box-shadow: var(--shadow);
      animation: fade 4s ease forwards;
    }

    .toast[data-type="error"] {
      color: #c63b2b;
    }

    .toast[data-type="level-up"] {
      font-weight: 700;
      color: var(--primary);
    }

    @keyframes fade {
      0%, 80% {
        opacity: 1;
      }
      100% {
        opacity: 0;
        visibility: hidden;
      }
    }

    @media (max-width: 800px) {
      .panel {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header class="page">
      <h1>Портфолио Педагога</h1>
      <p class="subtitle">Копите баллы за вашу работу и достижения</p>
    </header>

    <section class="panel">
      <div class="card">
        <div class="row">
          <h2>Ваш прогресс</h2>
          <span id="level" class="badge">Уровень {{LEVEL}}</span>
        </div>
        <div class="row">
          <div>
            <div id="total" class="total">{{TOTAL}}</div>
            <p class="hint">Всего баллов</p>
          </div>
          <div>
            <div id="percent" class="percent">{{PERCENT}}%</div>
            <p class="hint">До следующего уровня</p>
          </div>
        </div>
        <div class="bar"><span style="width: {{BAR}}%"></span></div>
        <p class="hint">Еще {{REMAINING}} баллов до уровня {{NEXT_LEVEL}}</p>
      </div>

      <div class="card">
        <h2>Достижения</h2>
        <div class="achievements">{{ACHIEVEMENTS}}</div>
      </div>
    </section>

    <section>
      <h2>Категории активностей</h2>
      <div class="categories">
      {{CATEGORIES}}
      </div>
    </section>

    {{DIALOG}}
  </main>
  <div class="toasts" aria-live="polite">{{TOASTS}}</div>
</body>
</html>
"#;
