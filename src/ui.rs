pub fn render_index(date: &str) -> String {
    INDEX_HTML.replace("{{DATE}}", date)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Random Mission Picker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f1f5f9;
      --bg-2: #dbeafe;
      --ink: #1e293b;
      --muted: #64748b;
      --daily: #60a5fa;
      --weekly: #34d399;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 18px 48px rgba(30, 41, 59, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(160deg, var(--bg-1), #e2e8f0 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    header {
      max-width: 1100px;
      margin: 0 auto 24px;
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(1.6rem, 3vw, 2.2rem);
      margin: 0;
    }

    .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
      font-size: 0.9rem;
    }

    form.owner {
      display: flex;
      gap: 8px;
    }

    input[type="text"] {
      border: 1px solid #cbd5e1;
      border-radius: 8px;
      padding: 8px 12px;
      font: inherit;
    }

    button {
      border: none;
      border-radius: 8px;
      padding: 8px 16px;
      font: inherit;
      font-weight: 600;
      color: white;
      background: #3b82f6;
      cursor: pointer;
    }

    .status {
      max-width: 1100px;
      margin: 0 auto 16px;
      min-height: 1.2em;
      font-size: 0.9rem;
    }

    .status.error {
      color: #dc2626;
    }

    .status.warn {
      color: #b45309;
    }

    main {
      max-width: 1100px;
      margin: 0 auto;
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
      gap: 20px;
    }

    main[hidden] {
      display: none;
    }

    section {
      background: var(--card);
      border-radius: 16px;
      box-shadow: var(--shadow);
      padding: 20px;
      display: grid;
      gap: 12px;
      align-content: start;
    }

    section h2 {
      margin: 0;
      font-size: 1rem;
    }

    .mission {
      border: 1px solid #e2e8f0;
      border-radius: 10px;
      padding: 12px;
      background: #f8fafc;
    }

    .mission .label {
      font-size: 0.75rem;
      color: var(--muted);
    }

    .bar {
      height: 8px;
      background: #e2e8f0;
      border-radius: 999px;
      overflow: hidden;
    }

    .bar > div {
      height: 100%;
      border-radius: 999px;
      transition: width 200ms ease;
    }

    .bar.daily > div {
      background: var(--daily);
    }

    .bar.weekly > div {
      background: var(--weekly);
    }

    .row {
      display: flex;
      justify-content: space-between;
      font-size: 0.8rem;
      color: var(--muted);
    }

    .group {
      border: 1px solid #e2e8f0;
      border-radius: 10px;
      padding: 10px;
      display: grid;
      gap: 8px;
    }

    .group h3 {
      margin: 0;
      font-size: 0.85rem;
    }

    .group ul {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 6px;
    }

    .group li {
      display: flex;
      justify-content: space-between;
      gap: 8px;
      font-size: 0.8rem;
    }

    .group li .date {
      font-family: ui-monospace, monospace;
      font-weight: 600;
      margin-right: 6px;
    }

    .empty {
      color: #94a3b8;
      font-size: 0.8rem;
    }
  </style>
</head>
<body>
  <header>
    <div>
      <h1>Random Mission Picker</h1>
      <p class="subtitle">Today is <span id="today">{{DATE}}</span>. One mission a day, one a week.</p>
    </div>
    <form class="owner" id="owner-form">
      <input type="text" id="owner" placeholder="Your name" autocomplete="off" />
      <button type="submit">Start</button>
    </form>
  </header>

  <div class="status" id="status" role="status"></div>

  <main id="board" hidden>
    <section>
      <h2 id="greeting"></h2>
      <div class="mission">
        <div class="label">Today's mission</div>
        <div id="daily-mission"></div>
      </div>
      <div class="mission">
        <div class="label">This week's mission (<span id="week-label"></span>)</div>
        <div id="weekly-mission"></div>
      </div>
      <h2>Overall progress</h2>
      <div id="summary"></div>
    </section>

    <section>
      <h2>Daily missions by week</h2>
      <div id="daily-groups"></div>
    </section>

    <section>
      <h2>Weekly missions by month</h2>
      <div id="weekly-groups"></div>
    </section>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const boardEl = document.getElementById('board');
    let owner = '';

    const setStatus = (message, tone) => {
      statusEl.textContent = message;
      statusEl.className = `status ${tone || ''}`;
    };

    const escapeHtml = (text) =>
      text.replace(/[&<>"']/g, (ch) => ({ '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;' })[ch]);

    const progressBar = (progress, scope) => `
      <div class="row"><span></span><span>${progress.completed} / ${progress.total} (${progress.percent}%)</span></div>
      <div class="bar ${scope}"><div style="width: ${progress.percent}%"></div></div>`;

    const renderSummary = (history) => {
      document.getElementById('summary').innerHTML = `
        <div class="row"><span>Daily</span></div>${progressBar(history.daily.progress, 'daily')}
        <div class="row"><span>Weekly</span></div>${progressBar(history.weekly.progress, 'weekly')}`;
    };

    const renderGroups = (elementId, section, scope) => {
      const el = document.getElementById(elementId);
      if (section.groups.length === 0) {
        el.innerHTML = `<p class="empty">No ${scope} missions recorded yet.</p>`;
        return;
      }
      el.innerHTML = section.groups
        .map((group) => `
          <div class="group">
            <h3>${escapeHtml(group.label)}</h3>
            <ul>
              ${group.entries
                .map((entry) => `
                  <li>
                    <span><span class="date">${escapeHtml(entry.label)}</span>${escapeHtml(entry.mission)}</span>
                    <input type="checkbox" data-scope="${entry.scope}" data-period="${entry.period_start}" ${entry.completed ? 'checked' : ''} />
                  </li>`)
                .join('')}
            </ul>
            ${progressBar(group.progress, scope)}
          </div>`)
        .join('');
    };

    const renderHistory = (history) => {
      renderSummary(history);
      renderGroups('daily-groups', history.daily, 'daily');
      renderGroups('weekly-groups', history.weekly, 'weekly');
    };

    const loadHistory = async () => {
      const res = await fetch(`/api/history?owner=${encodeURIComponent(owner)}`);
      if (!res.ok) {
        throw new Error((await res.text()) || 'Unable to load history');
      }
      renderHistory(await res.json());
    };

    const startSession = async (name) => {
      const res = await fetch('/api/session', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ owner: name })
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Unable to start session');
      }
      const session = await res.json();
      owner = session.owner;
      document.getElementById('today').textContent = session.today;
      document.getElementById('greeting').textContent = `Hi, ${session.owner}`;
      document.getElementById('daily-mission').textContent = session.daily.mission;
      document.getElementById('weekly-mission').textContent = session.weekly.mission;
      document.getElementById('week-label').textContent = session.week_label;
      renderHistory(session.history);
      boardEl.hidden = false;
      if (session.degraded) {
        setStatus(`Storage unavailable, today's missions are not saved: ${session.degraded}`, 'warn');
      } else {
        setStatus('', '');
      }
    };

    const toggle = async (input) => {
      const res = await fetch('/api/toggle', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({
          owner,
          scope: input.dataset.scope,
          period_start: input.dataset.period,
          completed: input.checked
        })
      });
      if (!res.ok) {
        input.checked = !input.checked;
        throw new Error((await res.text()) || 'Unable to save');
      }
      await loadHistory();
    };

    document.getElementById('owner-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const name = document.getElementById('owner').value;
      if (!name.trim()) {
        setStatus('Please enter your name.', 'error');
        return;
      }
      startSession(name).catch((err) => setStatus(err.message, 'error'));
    });

    boardEl.addEventListener('change', (event) => {
      if (event.target.matches('input[type="checkbox"]')) {
        toggle(event.target).catch((err) => setStatus(err.message, 'error'));
      }
    });
  </script>
</body>
</html>
"#;
