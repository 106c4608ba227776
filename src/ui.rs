use crate::day::Day;

pub fn render_index(today: Day) -> String {
    let cards: String = Day::ALL
        .into_iter()
        .map(|day| render_day_card(day, day == today))
        .collect();
    let day_names = serde_json::to_string(&Day::ALL).unwrap_or_else(|_| "[]".to_string());

    INDEX_HTML
        .replace("{{DAY_CARDS}}", &cards)
        .replace("{{DAY_NAMES}}", &day_names)
}

fn render_day_card(day: Day, is_today: bool) -> String {
    let slug = day.slug();
    let name = day.name();
    let today_class = if is_today { " today" } else { "" };

    format!(
        r#"
      <article class="day-card{today_class}" data-day="{slug}">
        <header class="day-head">
          <h3>{name} Travel</h3>
          <div class="toggle" role="radiogroup" aria-label="Did you travel on {name}?">
            <label><input type="radio" name="traveled-{slug}" value="yes" /> Yes</label>
            <label><input type="radio" name="traveled-{slug}" value="no" checked /> No</label>
          </div>
        </header>
        <div class="day-fields" hidden>
          <label>Where did you travel on {name}?
            <input type="text" class="destination" placeholder="e.g., Office, Market" />
          </label>
          <label>How many km did you travel on {name}?
            <input type="number" class="distance" min="0" step="0.1" value="0.0" />
          </label>
        </div>
        <p class="advisory" data-type="info">Good for you! No travel recorded for {name}. Saving money and reducing emissions!</p>
      </article>"#
    )
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Personal Travel Log</title>
  <style>
    :root {
      --paper: #f3f6f1;
      --ink: #1f2a2e;
      --muted: #66737a;
      --route: #2a7f62;
      --sun: #f2a541;
      --alert: #c2452d;
      --card: #ffffff;
      --line: rgba(31, 42, 46, 0.1);
      --lift: 0 18px 44px rgba(31, 42, 46, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      background: linear-gradient(160deg, #e4efe6, var(--paper) 45%, #fbf5ea);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
      padding: 28px 16px 56px;
    }

    main {
      max-width: 820px;
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.5rem);
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.3rem;
    }

    h3 {
      margin: 0;
      font-size: 1.05rem;
    }

    .lead {
      margin: 6px 0 0;
      color: var(--muted);
    }

    section.block {
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--lift);
      padding: 24px;
    }

    .profile-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 14px;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.9rem;
      color: var(--muted);
    }

    input[type="text"],
    input[type="number"] {
      font: inherit;
      color: var(--ink);
      padding: 10px 12px;
      border-radius: 10px;
      border: 1px solid var(--line);
      background: #fbfcfb;
    }

    input:disabled {
      color: var(--muted);
    }

    .days {
      display: grid;
      gap: 14px;
    }

    .day-card {
      border: 1px solid var(--line);
      border-radius: 16px;
      padding: 16px;
      display: grid;
      gap: 12px;
    }

    .day-card.today {
      border-color: var(--route);
    }

    .day-head {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      align-items: center;
      gap: 10px;
    }

    .toggle {
      display: flex;
      gap: 14px;
    }

    .toggle label {
      display: inline-flex;
      align-items: center;
      gap: 4px;
      color: var(--ink);
    }

    .day-fields {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 12px;
    }

    .day-fields[hidden] {
      display: none;
    }

    .advisory,
    .status {
      margin: 0;
      font-size: 0.92rem;
      min-height: 1.2em;
      color: var(--muted);
    }

    [data-type="ok"] {
      color: var(--route);
    }

    [data-type="warn"],
    [data-type="error"] {
      color: var(--alert);
    }

    button {
      font: inherit;
      font-weight: 600;
      border: none;
      border-radius: 999px;
      padding: 12px 22px;
      cursor: pointer;
    }

    .primary {
      background: var(--route);
      color: white;
    }

    .secondary {
      background: rgba(31, 42, 46, 0.08);
      color: var(--ink);
    }

    .button-row {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      margin-top: 16px;
    }

    .metrics {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 12px;
      margin: 18px 0;
    }

    .metric {
      border-radius: 14px;
      background: #f6f9f6;
      padding: 14px;
    }

    .metric .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    .metric .value {
      display: block;
      margin-top: 6px;
      font-size: 1.45rem;
      font-weight: 600;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.92rem;
    }

    th,
    td {
      text-align: left;
      padding: 8px 6px;
      border-bottom: 1px solid var(--line);
    }

    td.num,
    th.num {
      text-align: right;
    }

    .charts {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
      gap: 16px;
      margin-top: 18px;
    }

    .chart-card {
      border: 1px solid var(--line);
      border-radius: 16px;
      padding: 12px;
    }

    .chart-card h3 {
      margin-bottom: 8px;
    }

    svg {
      width: 100%;
      display: block;
    }

    .axis-label {
      fill: var(--muted);
      font-size: 11px;
    }

    .grid-line {
      stroke: var(--line);
    }

    footer {
      text-align: center;
      color: var(--muted);
      font-size: 0.85rem;
    }
  </style>
</head>
<body>
  <main>
    <header>
      <h1>Your Personal Travel Log</h1>
      <p class="lead">Track your daily journeys, estimate costs, and monitor carbon emissions.</p>
    </header>

    <section class="block" id="profile-block">
      <h2>Your Details</h2>
      <form id="profile-form" class="profile-grid">
        <label>Enter your name:
          <input type="text" name="name" placeholder="e.g., Alex" />
        </label>
        <label>Enter your age:
          <input type="number" name="age" min="0" max="120" value="25" />
        </label>
        <label>Enter your bike model:
          <input type="text" name="vehicle_model" placeholder="e.g., Shine125, Pulsar 150" />
        </label>
        <label>Enter your city name:
          <input type="text" name="city" placeholder="e.g., Mumbai" />
        </label>
        <div class="button-row">
          <button class="primary" type="submit" id="profile-save">Save details</button>
        </div>
      </form>
      <p class="status" id="profile-status" data-type="warn">Please fill in all your details above to proceed.</p>
    </section>

    <section class="block">
      <h2>Daily Travel Entries</h2>
      <p class="lead">Input your travel details for each day of the week below.</p>
      <div class="days">{{DAY_CARDS}}
      </div>
    </section>

    <section class="block" id="summary-block">
      <h2>Travel Summary</h2>
      <div class="button-row">
        <button class="primary" type="button" id="summary-btn">Show My Travel Summary</button>
        <button class="secondary" type="button" id="reset-btn">Start a new week</button>
      </div>
      <p class="status" id="summary-status" data-type="info">Click the button above to see your travel summary!</p>
      <div id="summary-body" hidden>
        <div class="metrics">
          <div class="metric"><span class="label">Total Distance</span><span class="value" id="total-km">0.0 km</span></div>
          <div class="metric"><span class="label">Total Cost</span><span class="value" id="total-cost">₹0.00</span></div>
          <div class="metric"><span class="label">Total Emissions</span><span class="value" id="total-emissions">0.00 g CO2</span></div>
        </div>
        <h3>Detailed Daily Breakdown</h3>
        <table>
          <thead>
            <tr>
              <th>Day</th>
              <th class="num">Distance (km)</th>
              <th class="num">Cost (Rs)</th>
              <th class="num">Emissions (g CO2)</th>
              <th>Destination</th>
            </tr>
          </thead>
          <tbody id="breakdown"></tbody>
        </table>
        <div class="charts">
          <div class="chart-card">
            <h3>Kilometers Traveled Per Day</h3>
            <svg id="distance-chart" viewBox="0 0 360 220" role="img" aria-label="Distance per day"></svg>
          </div>
          <div class="chart-card">
            <h3>Cost Distribution Per Day</h3>
            <svg id="cost-chart" viewBox="0 0 360 220" role="img" aria-label="Cost share per day"></svg>
          </div>
        </div>
      </div>
    </section>

    <footer>Estimates use 75 Rs and 125 g CO2 per km.</footer>
  </main>

  <script>
    const DAYS = {{DAY_NAMES}};
    const PIE_COLORS = ['#2a7f62', '#f2a541', '#3d6fb6', '#c2452d', '#8a5fbf', '#4aa3a1', '#7a8b3b'];

    const profileForm = document.getElementById('profile-form');
    const profileStatus = document.getElementById('profile-status');
    const summaryStatus = document.getElementById('summary-status');
    const summaryBody = document.getElementById('summary-body');
    const breakdownEl = document.getElementById('breakdown');
    const distanceChart = document.getElementById('distance-chart');
    const costChart = document.getElementById('cost-chart');
    const cards = Array.from(document.querySelectorAll('.day-card'));

    const setText = (el, message, type) => {
      el.textContent = message;
      el.dataset.type = type || 'info';
    };

    const fmt = (value, decimals) =>
      Number(value).toLocaleString('en-US', {
        minimumFractionDigits: decimals,
        maximumFractionDigits: decimals
      });

    const request = async (method, url, body) => {
      const res = await fetch(url, {
        method,
        headers: body ? { 'content-type': 'application/json' } : {},
        body: body ? JSON.stringify(body) : undefined
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const field = (key) => profileForm.elements.namedItem(key);

    const lockProfile = (profile) => {
      field('name').value = profile.name;
      field('age').value = profile.age;
      field('vehicle_model').value = profile.vehicle_model;
      field('city').value = profile.city;
      Array.from(profileForm.elements).forEach((el) => { el.disabled = true; });
      setText(profileStatus, `Welcome, ${profile.name} from ${profile.city}!`, 'ok');
    };

    const unlockProfile = () => {
      profileForm.reset();
      Array.from(profileForm.elements).forEach((el) => { el.disabled = false; });
      setText(profileStatus, 'Please fill in all your details above to proceed.', 'warn');
    };

    const showNotRequested = () => {
      summaryBody.hidden = true;
      setText(summaryStatus, 'Click the button above to see your travel summary!', 'info');
    };

    const readCard = (card) => {
      const traveled = card.querySelector('input[value="yes"]').checked;
      return {
        traveled,
        destination: card.querySelector('.destination').value,
        distance_km: Number(card.querySelector('.distance').value) || 0
      };
    };

    const adviseFor = (status) => {
      if (status === 'recorded') return 'ok';
      if (status === 'not_traveled') return 'info';
      return 'warn';
    };

    const sendCard = async (card) => {
      const payload = readCard(card);
      card.querySelector('.day-fields').hidden = !payload.traveled;
      const advisory = card.querySelector('.advisory');
      try {
        const res = await request('PUT', `/api/entries/${card.dataset.day}`, payload);
        setText(advisory, res.message, adviseFor(res.status));
      } catch (err) {
        setText(advisory, err.message, 'error');
      }
      showNotRequested();
    };

    const fillCard = (card, entry) => {
      card.querySelector(`input[value="${entry.traveled ? 'yes' : 'no'}"]`).checked = true;
      card.querySelector('.day-fields').hidden = !entry.traveled;
      card.querySelector('.destination').value = entry.destination || '';
      card.querySelector('.distance').value = entry.distance_km;
      setText(card.querySelector('.advisory'), entry.message, entry.traveled ? 'ok' : 'info');
    };

    const escapeHtml = (text) =>
      String(text).replace(/[&<>"']/g, (ch) => ({
        '&': '&amp;',
        '<': '&lt;',
        '>': '&gt;',
        '"': '&quot;',
        "'": '&#39;'
      })[ch]);

    // Short bars lean purple, long bars lean yellow.
    const distanceColor = (ratio) => {
      const from = [68, 1, 84];
      const to = [253, 231, 37];
      const mix = from.map((start, i) => Math.round(start + (to[i] - start) * Math.min(1, Math.max(0, ratio))));
      return `rgb(${mix.join(', ')})`;
    };

    const renderBars = (bars) => {
      const width = 360;
      const height = 220;
      const left = 40;
      const bottom = 30;
      const top = 16;
      const byDay = new Map(bars.map((bar) => [bar.day, bar]));
      const max = Math.max(1, ...bars.map((bar) => bar.distance_km));
      const slot = (width - left - 8) / DAYS.length;
      const scale = (height - top - bottom) / max;

      let svg = '';
      for (let i = 0; i <= 4; i += 1) {
        const value = (max * i) / 4;
        const y = height - bottom - value * scale;
        svg += `<line class="grid-line" x1="${left}" y1="${y}" x2="${width - 8}" y2="${y}" />`;
        svg += `<text class="axis-label" x="${left - 6}" y="${y + 4}" text-anchor="end">${fmt(value, 1)}</text>`;
      }
      DAYS.forEach((day, index) => {
        const x = left + index * slot;
        const bar = byDay.get(day);
        const value = bar ? bar.distance_km : 0;
        const barHeight = value * scale;
        if (bar && value > 0) {
          const title = `${day}: ${fmt(value, 1)} km to ${bar.destination}\nCost: ₹${fmt(bar.cost_rs, 2)}\nEmissions: ${fmt(bar.emissions_g, 2)} g CO2`;
          svg += `<rect class="bar" x="${x + slot * 0.15}" y="${height - bottom - barHeight}" width="${slot * 0.7}" height="${barHeight}" rx="4" fill="${distanceColor(value / max)}"><title>${escapeHtml(title)}</title></rect>`;
        }
        svg += `<text class="axis-label" x="${x + slot / 2}" y="${height - bottom + 16}" text-anchor="middle">${day.slice(0, 3)}</text>`;
      });
      distanceChart.innerHTML = svg;
    };

    const renderPie = (slices) => {
      const cx = 110;
      const cy = 110;
      const r = 90;
      let svg = '';
      let angle = -Math.PI / 2;

      slices.forEach((slice, index) => {
        const color = PIE_COLORS[DAYS.indexOf(slice.day) % PIE_COLORS.length] || PIE_COLORS[index % PIE_COLORS.length];
        const tip = `${slice.day}: ₹${fmt(slice.cost_rs, 2)} (${fmt(slice.share_pct, 1)}%)\nDistance: ${fmt(slice.distance_km, 1)} km to ${slice.destination}\nEmissions: ${fmt(slice.emissions_g, 2)} g CO2`;
        const title = `<title>${escapeHtml(tip)}</title>`;
        if (slice.share_pct >= 99.999) {
          svg += `<circle cx="${cx}" cy="${cy}" r="${r}" fill="${color}">${title}</circle>`;
        } else if (slice.share_pct > 0) {
          const sweep = (slice.share_pct / 100) * Math.PI * 2;
          const end = angle + sweep;
          const x1 = cx + r * Math.cos(angle);
          const y1 = cy + r * Math.sin(angle);
          const x2 = cx + r * Math.cos(end);
          const y2 = cy + r * Math.sin(end);
          const large = sweep > Math.PI ? 1 : 0;
          svg += `<path d="M ${cx} ${cy} L ${x1.toFixed(2)} ${y1.toFixed(2)} A ${r} ${r} 0 ${large} 1 ${x2.toFixed(2)} ${y2.toFixed(2)} Z" fill="${color}">${title}</path>`;
          angle = end;
        }
        const legendY = 30 + index * 22;
        svg += `<rect x="230" y="${legendY - 10}" width="12" height="12" rx="2" fill="${color}" />`;
        svg += `<text class="axis-label" x="248" y="${legendY}">${slice.day} ${fmt(slice.share_pct, 1)}%</text>`;
      });
      costChart.innerHTML = svg;
    };

    const renderSummary = (state) => {
      const { summary, charts } = state;
      if (!summary.breakdown.length) {
        summaryBody.hidden = true;
        setText(summaryStatus, 'No travel data recorded yet. Please fill in some daily entries!', 'warn');
        return;
      }

      document.getElementById('total-km').textContent = `${fmt(summary.total_km, 1)} km`;
      document.getElementById('total-cost').textContent = `₹${fmt(summary.total_cost_rs, 2)}`;
      document.getElementById('total-emissions').textContent = `${fmt(summary.total_emissions_g, 2)} g CO2`;

      breakdownEl.innerHTML = '';
      summary.breakdown.forEach((row) => {
        const tr = document.createElement('tr');
        [
          [row.day, ''],
          [fmt(row.distance_km, 1), 'num'],
          [fmt(row.cost_rs, 2), 'num'],
          [fmt(row.emissions_g, 2), 'num'],
          [row.destination, '']
        ].forEach(([text, cls]) => {
          const td = document.createElement('td');
          td.textContent = text;
          if (cls) td.className = cls;
          tr.appendChild(td);
        });
        breakdownEl.appendChild(tr);
      });

      renderBars(charts.distance_bars);
      renderPie(charts.cost_share);
      summaryBody.hidden = false;
      setText(summaryStatus, 'Your Weekly Travel Overview', 'ok');
    };

    const hydrate = (session) => {
      if (session.profile) {
        lockProfile(session.profile);
      } else {
        unlockProfile();
      }
      cards.forEach((card) => {
        const name = card.dataset.day;
        const entry = session.entries.find((item) => item.day.toLowerCase() === name);
        if (entry) {
          fillCard(card, entry);
        }
      });
      if (session.summary.state === 'ready') {
        renderSummary(session.summary);
      } else {
        showNotRequested();
      }
    };

    profileForm.addEventListener('submit', async (event) => {
      event.preventDefault();
      try {
        const profile = await request('PUT', '/api/profile', {
          name: field('name').value,
          age: Number(field('age').value),
          vehicle_model: field('vehicle_model').value,
          city: field('city').value
        });
        lockProfile(profile);
      } catch (err) {
        setText(profileStatus, err.message, 'error');
      }
    });

    cards.forEach((card) => {
      card.querySelectorAll('input').forEach((input) => {
        input.addEventListener('change', () => sendCard(card));
      });
    });

    document.getElementById('summary-btn').addEventListener('click', async () => {
      try {
        renderSummary(await request('POST', '/api/summary'));
      } catch (err) {
        summaryBody.hidden = true;
        setText(summaryStatus, err.message, 'warn');
      }
    });

    document.getElementById('reset-btn').addEventListener('click', async () => {
      try {
        await request('POST', '/api/session/reset');
        window.location.reload();
      } catch (err) {
        setText(summaryStatus, err.message, 'error');
      }
    });

    request('GET', '/api/session')
      .then(hydrate)
      .catch((err) => setText(summaryStatus, err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_card_per_day_in_week_order() {
        let html = render_index(Day::Wednesday);
        let positions: Vec<usize> = Day::ALL
            .into_iter()
            .map(|day| {
                html.find(&format!("data-day=\"{}\"", day.slug()))
                    .expect("missing day card")
            })
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(html.matches("class=\"day-card today\"").count(), 1);
        assert!(html.contains(r#"const DAYS = ["Monday","Tuesday","Wednesday","Thursday","Friday","Saturday","Sunday"];"#));
        assert!(!html.contains("{{"));
    }
}
