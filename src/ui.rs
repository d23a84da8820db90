pub fn render_dashboard() -> &'static str {
    DASHBOARD_HTML
}

const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Health Tracker</title>
  <style>
    :root {
      --bg-1: #eef6f1;
      --bg-2: #d9ecf5;
      --ink: #24312b;
      --accent: #2f9e6e;
      --accent-2: #2f6d8a;
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 20px 50px rgba(47, 109, 138, 0.16);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), var(--bg-2));
      color: var(--ink);
      font-family: "Trebuchet MS", "Segoe UI", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(900px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    h1 { margin: 0; font-size: 2rem; }
    h2 { margin: 0 0 12px; font-size: 1.2rem; }
    .subtitle { margin: 4px 0 0; color: #5d6b63; }

    .tabs { display: flex; gap: 6px; padding: 6px; background: rgba(47, 109, 138, 0.1); border-radius: 999px; }
    .tab {
      border: none; background: transparent; border-radius: 999px;
      padding: 8px 16px; font-weight: 600; color: #5d6b63; cursor: pointer;
    }
    .tab.active { background: white; color: var(--accent-2); box-shadow: 0 6px 14px rgba(47, 109, 138, 0.14); }

    .card { background: white; border-radius: 16px; padding: 18px; border: 1px solid rgba(47, 109, 138, 0.1); }
    .grid { display: grid; gap: 16px; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); }

    .bar { width: 100%; height: 10px; background: rgba(47, 109, 138, 0.12); border-radius: 999px; overflow: hidden; }
    .bar span { display: block; height: 100%; background: var(--accent); border-radius: 999px; transition: width 250ms ease; }
    .row { display: flex; justify-content: space-between; align-items: center; margin: 8px 0 4px; font-size: 0.95rem; }

    .list { display: grid; gap: 8px; margin-top: 10px; }
    .list .item {
      display: flex; justify-content: space-between; align-items: center;
      border: 1px solid rgba(47, 109, 138, 0.12); border-radius: 12px; padding: 10px 12px;
    }
    .item .meta { font-size: 0.8rem; color: #6d7a73; }
    .item.taken .name { text-decoration: line-through; opacity: 0.6; }

    form.inline { display: grid; gap: 8px; grid-template-columns: repeat(auto-fit, minmax(120px, 1fr)); align-items: end; margin-top: 12px; }
    label { display: grid; gap: 4px; font-size: 0.8rem; color: #5d6b63; }
    input, select {
      border: 1px solid rgba(47, 109, 138, 0.25); border-radius: 10px; padding: 8px 10px; font-size: 0.95rem;
    }
    button.action {
      border: none; border-radius: 10px; padding: 10px 16px; font-weight: 600; cursor: pointer;
      background: var(--accent); color: white;
    }
    button.ghost { background: transparent; color: #a04433; border: none; cursor: pointer; font-size: 0.85rem; }

    .badge {
      display: inline-block; border-radius: 999px; padding: 2px 10px; font-size: 0.8rem;
      background: rgba(47, 158, 110, 0.15); color: var(--accent);
    }

    .quick { display: flex; gap: 8px; flex-wrap: wrap; margin-top: 10px; }
    .quick button { border: 1px solid rgba(47, 109, 138, 0.25); background: white; border-radius: 10px; padding: 8px 12px; cursor: pointer; }

    .status { min-height: 1.2em; font-size: 0.9rem; color: #6d7a73; }
    .status[data-type="error"] { color: #c63b2b; }
    .status[data-type="ok"] { color: #2d7a4b; }

    .hidden { display: none; }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Health Tracker</h1>
      <p class="subtitle">Track your nutrition, supplements, and hydration</p>
    </header>

    <section id="auth" class="card">
      <h2>Sign in</h2>
      <form class="inline" id="auth-form">
        <label>Email <input id="auth-email" type="email" required /></label>
        <label>Password <input id="auth-password" type="password" required /></label>
        <label>Name (signup only) <input id="auth-name" type="text" /></label>
        <button class="action" type="submit">Sign in</button>
        <button class="action" type="button" id="signup-btn" style="background: var(--accent-2)">Sign up</button>
      </form>
    </section>

    <div id="tracker" class="hidden">
      <div class="tabs" role="tablist">
        <button class="tab active" data-tab="dashboard">Dashboard</button>
        <button class="tab" data-tab="nutrition">Nutrition</button>
        <button class="tab" data-tab="supplements">Supplements</button>
        <button class="tab" data-tab="hydration">Hydration</button>
      </div>

      <section id="panel-dashboard" class="panel">
        <div class="grid" id="dashboard-cards"></div>
      </section>

      <section id="panel-nutrition" class="panel hidden">
        <div class="card">
          <h2>Log food</h2>
          <form class="inline" id="food-form">
            <label>Name <input id="food-name" required /></label>
            <label>Calories <input id="food-calories" type="number" min="0" value="0" /></label>
            <label>Protein (g) <input id="food-protein" type="number" min="0" value="0" /></label>
            <label>Carbs (g) <input id="food-carbs" type="number" min="0" value="0" /></label>
            <label>Fat (g) <input id="food-fat" type="number" min="0" value="0" /></label>
            <label>Meal
              <select id="food-meal">
                <option value="breakfast">Breakfast</option>
                <option value="lunch">Lunch</option>
                <option value="dinner">Dinner</option>
                <option value="snack">Snack</option>
              </select>
            </label>
            <button class="action" type="submit">Add</button>
          </form>
        </div>
        <div class="card"><h2>Today's entries</h2><div class="list" id="food-list"></div></div>
      </section>

      <section id="panel-supplements" class="panel hidden">
        <div class="card">
          <h2>Add supplement</h2>
          <form class="inline" id="supplement-form">
            <label>Name <input id="supplement-name" required /></label>
            <label>Dosage <input id="supplement-dosage" required /></label>
            <label>Frequency
              <select id="supplement-frequency">
                <option value="daily">Daily</option>
                <option value="weekly">Weekly</option>
                <option value="as-needed">As needed</option>
              </select>
            </label>
            <label>Morning <input id="time-morning" type="checkbox" /></label>
            <label>Afternoon <input id="time-afternoon" type="checkbox" /></label>
            <label>Evening <input id="time-evening" type="checkbox" /></label>
            <button class="action" type="submit">Add</button>
          </form>
        </div>
        <div id="supplement-groups"></div>
      </section>

      <section id="panel-hydration" class="panel hidden">
        <div class="card">
          <h2>Log water</h2>
          <div class="quick" id="quick-hydration"></div>
          <form class="inline" id="hydration-form">
            <label>Amount (L) <input id="hydration-amount" type="number" step="0.05" min="0.05" /></label>
            <label>Drink
              <select id="hydration-drink">
                <option value="water">Water</option>
                <option value="coffee">Coffee</option>
                <option value="tea">Tea</option>
                <option value="juice">Juice</option>
                <option value="other">Other</option>
              </select>
            </label>
            <label>Daily goal (L) <input id="hydration-goal" type="number" step="0.1" min="0.1" /></label>
            <button class="action" type="submit">Add</button>
          </form>
        </div>
        <div class="card"><h2>Today's intake</h2><div class="list" id="hydration-list"></div></div>
      </section>
    </div>

    <div class="status" id="status"></div>
  </main>

  <script>
    const QUICK_AMOUNTS = [0.25, 0.5, 0.75, 1.0, 1.5];
    let token = localStorage.getItem('ht_token');
    let userId = localStorage.getItem('ht_user');

    const statusEl = document.getElementById('status');
    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const api = async (path, options = {}) => {
      const res = await fetch(`/api${path}`, {
        ...options,
        headers: {
          'content-type': 'application/json',
          ...(token ? { authorization: `Bearer ${token}` } : {}),
        },
      });
      const data = await res.json().catch(() => ({}));
      if (!res.ok) {
        if (res.status === 401) { signOut(); }
        throw new Error(data.error || `Request failed: ${res.status}`);
      }
      return data;
    };

    const signOut = () => {
      token = null; userId = null;
      localStorage.removeItem('ht_token');
      localStorage.removeItem('ht_user');
      document.getElementById('auth').classList.remove('hidden');
      document.getElementById('tracker').classList.add('hidden');
    };

    const pct = (value) => `${Math.min(100, Math.max(0, value)).toFixed(0)}%`;

    const progressBlock = (label, text, value) => `
      <div>
        <div class="row"><span>${label}</span><span>${text}</span></div>
        <div class="bar"><span style="width:${pct(value)}"></span></div>
      </div>`;

    const renderDashboard = (summary) => {
      const n = summary.nutrition;
      const s = summary.supplements;
      const h = summary.hydration;
      document.getElementById('dashboard-cards').innerHTML = `
        <div class="card">
          <h2>Nutrition</h2>
          ${progressBlock('Calories', `${n.totals.calories}/${n.goals.calories}`, n.calorie_percent)}
          ${progressBlock('Protein', `${n.totals.protein}g/${n.goals.protein}g`, n.protein_percent)}
          ${progressBlock('Carbs', `${n.totals.carbs}g/${n.goals.carbs}g`, n.carb_percent)}
          ${progressBlock('Fat', `${n.totals.fat}g/${n.goals.fat}g`, n.fat_percent)}
        </div>
        <div class="card">
          <h2>Supplements</h2>
          ${progressBlock("Today's progress", `${s.taken}/${s.total}`, s.rate)}
          <span class="badge">${s.is_complete ? 'Complete!' : 'In progress'}</span>
        </div>
        <div class="card">
          <h2>Hydration</h2>
          ${progressBlock('Water intake', `${h.total.toFixed(1)}L / ${h.goal}L`, h.percent)}
          <span class="badge">${Math.round(h.percent)}% of goal</span>
        </div>`;
    };

    const renderFoods = (entries) => {
      document.getElementById('food-list').innerHTML = entries.map((entry) => `
        <div class="item">
          <div>
            <div class="name">${entry.name}</div>
            <div class="meta">${entry.meal} &middot; ${entry.calories} cal &middot; P${entry.protein} C${entry.carbs} F${entry.fat}</div>
          </div>
          <button class="ghost" data-remove-food="${entry.id}">Remove</button>
        </div>`).join('') || '<p class="meta">No food logged yet</p>';
    };

    const renderSupplementGroups = (groups) => {
      document.getElementById('supplement-groups').innerHTML = groups.map((group) => `
        <div class="card" style="margin-top:12px">
          <h2 style="text-transform:capitalize">${group.time_of_day}</h2>
          <div class="list">
            ${group.supplements.map((s) => `
              <div class="item ${s.taken ? 'taken' : ''}">
                <div>
                  <label style="display:flex;gap:8px;align-items:center">
                    <input type="checkbox" data-toggle="${s.id}" ${s.taken ? 'checked' : ''} />
                    <span class="name">${s.name}</span>
                  </label>
                  <div class="meta">${s.dosage} &middot; ${s.frequency}${s.last_taken ? ` &middot; last taken ${new Date(s.last_taken).toLocaleString()}` : ''}</div>
                </div>
                <button class="ghost" data-remove-supplement="${s.id}">Remove</button>
              </div>`).join('')}
          </div>
        </div>`).join('') || '<p class="meta">No supplements added yet</p>';
    };

    const renderHydration = (log) => {
      document.getElementById('hydration-goal').value = log.goal;
      document.getElementById('hydration-list').innerHTML = log.entries.map((entry) => `
        <div class="item">
          <div>
            <div class="name">${entry.amount}L ${entry.drink}</div>
            <div class="meta">${new Date(entry.time).toLocaleTimeString([], { hour: '2-digit', minute: '2-digit' })}</div>
          </div>
          <button class="ghost" data-remove-hydration="${entry.id}">Remove</button>
        </div>`).join('') || '<p class="meta">Nothing logged yet</p>';
    };

    const refresh = async () => {
      const [summary, nutrition, hydration] = await Promise.all([
        api(`/summary/${userId}`),
        api(`/nutrition/${userId}`),
        api(`/hydration/${userId}`),
      ]);
      renderDashboard(summary);
      renderFoods(nutrition.entries);
      renderSupplementGroups(summary.supplement_groups);
      renderHydration(hydration);
    };

    const enter = async () => {
      document.getElementById('auth').classList.add('hidden');
      document.getElementById('tracker').classList.remove('hidden');
      await refresh();
    };

    document.getElementById('auth-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      try {
        const session = await api('/signin', {
          method: 'POST',
          body: JSON.stringify({
            email: document.getElementById('auth-email').value,
            password: document.getElementById('auth-password').value,
          }),
        });
        token = session.token; userId = session.user_id;
        localStorage.setItem('ht_token', token);
        localStorage.setItem('ht_user', userId);
        setStatus('Signed in', 'ok');
        await enter();
      } catch (err) { setStatus(err.message, 'error'); }
    });

    document.getElementById('signup-btn').addEventListener('click', async () => {
      try {
        await api('/signup', {
          method: 'POST',
          body: JSON.stringify({
            email: document.getElementById('auth-email').value,
            password: document.getElementById('auth-password').value,
            name: document.getElementById('auth-name').value || null,
          }),
        });
        setStatus('Account created, sign in to continue', 'ok');
      } catch (err) { setStatus(err.message, 'error'); }
    });

    document.querySelectorAll('.tab').forEach((tab) => {
      tab.addEventListener('click', () => {
        document.querySelectorAll('.tab').forEach((t) => t.classList.toggle('active', t === tab));
        document.querySelectorAll('.panel').forEach((panel) => {
          panel.classList.toggle('hidden', panel.id !== `panel-${tab.dataset.tab}`);
        });
      });
    });

    document.getElementById('food-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      try {
        await api(`/nutrition/${userId}`, {
          method: 'POST',
          body: JSON.stringify({
            name: document.getElementById('food-name').value,
            calories: Number(document.getElementById('food-calories').value) || 0,
            protein: Number(document.getElementById('food-protein').value) || 0,
            carbs: Number(document.getElementById('food-carbs').value) || 0,
            fat: Number(document.getElementById('food-fat').value) || 0,
            meal: document.getElementById('food-meal').value,
          }),
        });
        event.target.reset();
        await refresh();
      } catch (err) { setStatus(err.message, 'error'); }
    });

    document.getElementById('supplement-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const timeOfDay = ['morning', 'afternoon', 'evening']
        .filter((slot) => document.getElementById(`time-${slot}`).checked);
      try {
        await api(`/supplements/${userId}`, {
          method: 'POST',
          body: JSON.stringify({
            name: document.getElementById('supplement-name').value,
            dosage: document.getElementById('supplement-dosage').value,
            frequency: document.getElementById('supplement-frequency').value,
            time_of_day: timeOfDay,
          }),
        });
        event.target.reset();
        await refresh();
      } catch (err) { setStatus(err.message, 'error'); }
    });

    document.getElementById('hydration-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      try {
        const goalInput = Number(document.getElementById('hydration-goal').value);
        if (goalInput > 0) {
          await api(`/hydration/${userId}/goal`, { method: 'PUT', body: JSON.stringify({ goal: goalInput }) });
        }
        const amount = Number(document.getElementById('hydration-amount').value);
        if (amount > 0) {
          await api(`/hydration/${userId}`, {
            method: 'POST',
            body: JSON.stringify({ amount, drink: document.getElementById('hydration-drink').value }),
          });
        }
        await refresh();
      } catch (err) { setStatus(err.message, 'error'); }
    });

    const quick = document.getElementById('quick-hydration');
    QUICK_AMOUNTS.forEach((amount) => {
      const button = document.createElement('button');
      button.type = 'button';
      button.textContent = `${amount}L`;
      button.addEventListener('click', async () => {
        try {
          await api(`/hydration/${userId}`, {
            method: 'POST',
            body: JSON.stringify({ amount, drink: 'water' }),
          });
          await refresh();
        } catch (err) { setStatus(err.message, 'error'); }
      });
      quick.appendChild(button);
    });

    document.body.addEventListener('click', async (event) => {
      const target = event.target;
      try {
        if (target.dataset.removeFood) {
          await api(`/nutrition/${userId}/${target.dataset.removeFood}`, { method: 'DELETE' });
          await refresh();
        } else if (target.dataset.removeSupplement) {
          await api(`/supplements/${userId}/${target.dataset.removeSupplement}`, { method: 'DELETE' });
          await refresh();
        } else if (target.dataset.removeHydration) {
          await api(`/hydration/${userId}/${target.dataset.removeHydration}`, { method: 'DELETE' });
          await refresh();
        }
      } catch (err) { setStatus(err.message, 'error'); }
    });

    document.body.addEventListener('change', async (event) => {
      const target = event.target;
      if (target.dataset.toggle) {
        try {
          await api(`/supplements/${userId}/${target.dataset.toggle}`, {
            method: 'PUT',
            body: JSON.stringify({ taken: target.checked }),
          });
          await refresh();
        } catch (err) { setStatus(err.message, 'error'); }
      }
    });

    if (token && userId) {
      enter().catch((err) => { setStatus(err.message, 'error'); signOut(); });
    }
  </script>
</body>
</html>
"#;
