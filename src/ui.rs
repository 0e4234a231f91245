use crate::models::{InsightsResponse, MoodLevel};
use crate::responder::GREETING;
use crate::shell::Tab;

pub fn render_index(active: Tab, insights: &InsightsResponse) -> String {
    let mut page = INDEX_HTML
        .replace("{{ACTIVE_TAB}}", active.as_str())
        .replace("{{TABS}}", &render_tabs(active))
        .replace("{{MOOD_OPTIONS}}", &render_mood_options())
        .replace("{{GREETING}}", GREETING)
        .replace("{{STREAK}}", &insights.streak.to_string())
        .replace("{{AVERAGE}}", &format!("{:.1}", insights.average_mood))
        .replace("{{AVERAGE_EMOJI}}", &insights.average_emoji)
        .replace("{{TREND}}", &insights.trend_label);

    for tab in Tab::ALL {
        let hidden = if tab == active { "" } else { " hidden" };
        page = page.replace(&format!("{{{{HIDDEN_{}}}}}", tab.as_str().to_uppercase()), hidden);
    }
    page
}

fn render_tabs(active: Tab) -> String {
    Tab::ALL
        .iter()
        .map(|tab| {
            let selected = *tab == active;
            format!(
                r#"<a class="tab{}" href="/?tab={}" data-tab="{}" role="tab" aria-selected="{}">{}</a>"#,
                if selected { " active" } else { "" },
                tab.as_str(),
                tab.as_str(),
                selected,
                tab.title()
            )
        })
        .collect::<Vec<_>>()
        .join("\n          ")
}

fn render_mood_options() -> String {
    MoodLevel::ALL
        .iter()
        .map(|level| {
            format!(
                r#"<label class="mood-option"><input type="radio" name="mood" value="{}" /><span class="emoji">{}</span><span class="mood-label">{}</span></label>"#,
                level.value(),
                level.emoji(),
                level.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n          ")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>MindBridge</title>
  <style>
    :root {
      --ink: #1f2937;
      --muted: #6b7280;
      --primary: #4f46e5;
      --success: #059669;
      --danger: #dc2626;
      --card: rgba(255, 255, 255, 0.9);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, #eef2ff, #f0f9ff 50%, #ecfdf5);
      color: var(--ink);
      font-family: system-ui, "Segoe UI", sans-serif;
    }

    header, main, footer {
      width: min(900px, 100%);
      margin: 0 auto;
      padding: 20px;
    }

    header {
      display: flex;
      justify-content: space-between;
      align-items: center;
    }

    h1 {
      margin: 0;
      color: var(--primary);
    }

    .badge {
      border: 1px solid var(--success);
      color: var(--success);
      border-radius: 999px;
      padding: 4px 12px;
      font-size: 0.9rem;
    }

    .tabs {
      display: grid;
      grid-template-columns: repeat(4, 1fr);
      gap: 6px;
      padding: 6px;
      background: var(--card);
      border-radius: 16px;
      margin-bottom: 24px;
    }

    .tab {
      text-align: center;
      padding: 10px;
      border-radius: 12px;
      text-decoration: none;
      color: var(--muted);
      font-weight: 600;
    }

    .tab.active {
      background: var(--primary);
      color: white;
    }

    .card {
      background: var(--card);
      border-radius: 16px;
      padding: 20px;
      margin-bottom: 16px;
    }

    .hidden {
      display: none;
    }

    .moods {
      display: grid;
      grid-template-columns: repeat(5, 1fr);
      gap: 10px;
      margin-bottom: 16px;
    }

    .mood-option {
      display: flex;
      flex-direction: column;
      align-items: center;
      padding: 12px;
      border-radius: 12px;
      cursor: pointer;
    }

    .mood-option input {
      display: none;
    }

    .mood-option:has(input:checked) {
      outline: 2px solid var(--primary);
    }

    .emoji {
      font-size: 2rem;
    }

    textarea, input[type="text"] {
      width: 100%;
      padding: 10px;
      border: 1px solid #d1d5db;
      border-radius: 10px;
      font: inherit;
    }

    button {
      border: none;
      border-radius: 10px;
      padding: 10px 16px;
      background: var(--primary);
      color: white;
      font-weight: 600;
      cursor: pointer;
    }

    .messages {
      height: 300px;
      overflow-y: auto;
      display: flex;
      flex-direction: column;
      gap: 10px;
      margin-bottom: 12px;
    }

    .bubble {
      max-width: 80%;
      padding: 10px 12px;
      border-radius: 12px;
      background: #e0e7ff;
    }

    .bubble.user {
      align-self: flex-end;
      background: var(--primary);
      color: white;
    }

    .bubble time {
      display: block;
      font-size: 0.75rem;
      opacity: 0.7;
    }

    .chat-input {
      display: flex;
      gap: 8px;
    }

    .stats {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 12px;
    }

    .label {
      font-size: 0.85rem;
      color: var(--muted);
    }

    .value {
      font-size: 1.5rem;
      font-weight: 700;
    }

    .history li, .resources li {
      list-style: none;
      padding: 10px 0;
      border-bottom: 1px solid #e5e7eb;
    }

    .crisis {
      border: 2px solid var(--danger);
    }

    .status {
      min-height: 1.2em;
      color: var(--muted);
    }

    footer {
      color: var(--muted);
      font-size: 0.9rem;
      text-align: center;
    }
  </style>
</head>
<body data-active-tab="{{ACTIVE_TAB}}">
  <header>
    <h1>MindBridge</h1>
    <span class="badge"><span id="streak-badge">{{STREAK}}</span> day streak</span>
  </header>

  <main>
    <nav class="tabs" role="tablist">
          {{TABS}}
    </nav>

    <section id="view-mood" class="view{{HIDDEN_MOOD}}">
      <form class="card" id="mood-form" method="post" action="/mood">
        <h2>How are you feeling today?</h2>
        <div class="moods">
          {{MOOD_OPTIONS}}
        </div>
        <textarea name="note" id="mood-note" rows="3" placeholder="What's on your mind? (optional)"></textarea>
        <p><button type="submit">Save Mood</button></p>
        <div class="status" id="mood-status"></div>
      </form>
    </section>

    <section id="view-chat" class="view{{HIDDEN_CHAT}}">
      <div class="card">
        <h2>AI Companion</h2>
        <p class="label">I'm here to listen and support you</p>
        <div class="messages" id="messages">
          <div class="bubble">{{GREETING}}</div>
        </div>
        <div class="status" id="chat-status"></div>
        <form class="chat-input" id="chat-form">
          <input type="text" id="chat-text" placeholder="Share what's on your mind..." autocomplete="off" />
          <button type="submit">Send</button>
        </form>
      </div>
    </section>

    <section id="view-dashboard" class="view{{HIDDEN_DASHBOARD}}">
      <div class="stats">
        <div class="card">
          <div class="label">Current Streak</div>
          <div class="value"><span id="stat-streak">{{STREAK}}</span> days</div>
        </div>
        <div class="card">
          <div class="label">Average Mood</div>
          <div class="value"><span id="stat-emoji">{{AVERAGE_EMOJI}}</span> <span id="stat-average">{{AVERAGE}}</span></div>
        </div>
        <div class="card">
          <div class="label">Trend</div>
          <div class="value" id="stat-trend">{{TREND}}</div>
        </div>
      </div>
      <div class="card">
        <h2>Recent Mood History</h2>
        <ul class="history" id="history"></ul>
        <p class="label" id="history-empty">Start tracking your mood to see insights here</p>
      </div>
      <div class="card" id="community">
        <h2>Community Support</h2>
        <p class="label">Connect with others on similar journeys for mutual support and encouragement.</p>
        <div class="stats">
          <div>
            <strong>Anonymous Support Groups</strong>
            <div class="label">12 active groups</div>
          </div>
          <div>
            <strong>Peer Mentorship</strong>
            <div class="label">24 mentors available</div>
          </div>
        </div>
      </div>
    </section>

    <section id="view-resources" class="view{{HIDDEN_RESOURCES}}">
      <div class="card crisis">
        <h2>Crisis Support - Available 24/7</h2>
        <ul class="resources" id="emergency-resources"></ul>
      </div>
      <div class="card">
        <h2>Resources</h2>
        <ul class="resources" id="regular-resources"></ul>
      </div>
      <div class="card">
        <h2>Self-Care Tips</h2>
        <ul class="resources" id="tips"></ul>
      </div>
    </section>
  </main>

  <footer>
    Remember: This is a supportive tool, not a replacement for professional help.
    If you're in crisis, please contact emergency services or a crisis hotline.
  </footer>

  <script>
    const tabs = Array.from(document.querySelectorAll('.tab'));
    const views = Array.from(document.querySelectorAll('.view'));
    const moodForm = document.getElementById('mood-form');
    const moodStatus = document.getElementById('mood-status');
    const chatForm = document.getElementById('chat-form');
    const chatText = document.getElementById('chat-text');
    const chatStatus = document.getElementById('chat-status');
    const messagesEl = document.getElementById('messages');
    const greetingEl = messagesEl.firstElementChild;

    let pollTimer = null;

    const setStatus = (el, message) => {
      el.textContent = message;
    };

    const el = (tag, className, text) => {
      const node = document.createElement(tag);
      if (className) {
        node.className = className;
      }
      if (text !== undefined) {
        node.textContent = text;
      }
      return node;
    };

    const setActiveTab = async (tab) => {
      tabs.forEach((link) => {
        const isActive = link.dataset.tab === tab;
        link.classList.toggle('active', isActive);
        link.setAttribute('aria-selected', String(isActive));
      });
      views.forEach((view) => view.classList.toggle('hidden', view.id !== `view-${tab}`));
      await fetch('/api/tab', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ tab })
      });
    };

    const renderInsights = (data) => {
      document.getElementById('streak-badge').textContent = data.streak;
      document.getElementById('stat-streak').textContent = data.streak;
      document.getElementById('stat-emoji').textContent = data.average_emoji;
      document.getElementById('stat-average').textContent = data.average_mood.toFixed(1);
      document.getElementById('stat-trend').textContent = data.trend_label;

      const history = document.getElementById('history');
      history.replaceChildren(...data.recent.map((entry) => {
        const item = el('li');
        item.append(el('strong', '', `${entry.mood}/5`), ' ', new Date(entry.date).toLocaleDateString());
        if (entry.note) {
          item.append(el('div', 'label', entry.note));
        }
        return item;
      }));
      document.getElementById('history-empty').classList.toggle('hidden', data.recent.length > 0);
    };

    const loadInsights = async () => {
      const res = await fetch('/api/insights');
      if (!res.ok) {
        throw new Error('Unable to load insights');
      }
      renderInsights(await res.json());
    };

    const renderTranscript = (data) => {
      messagesEl.replaceChildren(greetingEl, ...data.messages.map((message) => {
        const bubble = el('div', `bubble ${message.sender}`, message.text);
        const stamp = new Date(message.timestamp).toLocaleTimeString([], { hour: '2-digit', minute: '2-digit' });
        bubble.append(el('time', '', stamp));
        return bubble;
      }));
      messagesEl.scrollTop = messagesEl.scrollHeight;
      setStatus(chatStatus, data.pending > 0 ? 'Companion is typing...' : '');
      return data.pending;
    };

    const loadTranscript = async () => {
      const res = await fetch('/api/chat');
      if (!res.ok) {
        throw new Error('Unable to load chat');
      }
      return renderTranscript(await res.json());
    };

    const pollTranscript = (delay) => {
      clearTimeout(pollTimer);
      pollTimer = setTimeout(async () => {
        const pending = await loadTranscript();
        if (pending > 0) {
          pollTranscript(250);
        }
      }, delay);
    };

    const loadResources = async () => {
      const res = await fetch('/api/resources');
      if (!res.ok) {
        throw new Error('Unable to load resources');
      }
      const data = await res.json();
      const item = (resource, action) => {
        const li = el('li');
        const link = el('a', '', action);
        link.href = resource.link;
        const meta = [resource.category, resource.duration].filter(Boolean).join(' · ');
        li.append(el('strong', '', resource.title), ' ', link, el('div', 'label', `${meta} - ${resource.description}`));
        return li;
      };
      document.getElementById('emergency-resources').replaceChildren(...data.emergency.map((r) => item(r, 'Call Now')));
      document.getElementById('regular-resources').replaceChildren(...data.regular.map((r) => item(r, 'Access')));
      document.getElementById('tips').replaceChildren(...data.self_care_tips.map((tip) => el('li', '', tip)));
    };

    tabs.forEach((link) => {
      link.addEventListener('click', (event) => {
        event.preventDefault();
        setActiveTab(link.dataset.tab).catch(() => {});
      });
    });

    moodForm.addEventListener('submit', async (event) => {
      event.preventDefault();
      const selected = moodForm.querySelector('input[name="mood"]:checked');
      if (!selected) {
        return;
      }
      const res = await fetch('/api/mood', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ mood: Number(selected.value), note: document.getElementById('mood-note').value })
      });
      if (!res.ok) {
        setStatus(moodStatus, await res.text());
        return;
      }
      moodForm.reset();
      setStatus(moodStatus, 'Saved');
      setTimeout(() => setStatus(moodStatus, ''), 1200);
      loadInsights().catch((err) => setStatus(moodStatus, err.message));
    });

    chatForm.addEventListener('submit', async (event) => {
      event.preventDefault();
      const text = chatText.value;
      if (!text.trim()) {
        return;
      }
      chatText.value = '';
      const res = await fetch('/api/chat', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ text })
      });
      if (!res.ok) {
        setStatus(chatStatus, await res.text());
        return;
      }
      const accepted = await res.json();
      await loadTranscript();
      pollTranscript(accepted.reply_after_ms);
    });

    Promise.all([loadInsights(), loadTranscript(), loadResources()])
      .catch((err) => setStatus(moodStatus, err.message));
  </script>
</body>
</html>
"#;
