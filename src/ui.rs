pub fn render_index() -> &'static str {
    INDEX_HTML
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Lista de Chamada</title>
  <script src="https://cdnjs.cloudflare.com/ajax/libs/jspdf/2.5.1/jspdf.umd.min.js"></script>
  <script src="https://cdnjs.cloudflare.com/ajax/libs/jspdf-autotable/3.8.2/jspdf.plugin.autotable.min.js"></script>
  <style>
    body { font-family: sans-serif; max-width: 640px; margin: 0 auto; padding: 24px; }
    section { margin-bottom: 24px; }
    li { display: flex; justify-content: space-between; gap: 8px; padding: 4px 0; }
    .present { background: #16a34a; color: #fff; }
    .absent { background: #dc2626; color: #fff; }
    #status { min-height: 1.2em; color: #b91c1c; }
  </style>
</head>
<body>
  <h2>Lista de Chamada</h2>
  <p id="status"></p>

  <section>
    <input id="date" type="date" />
  </section>

  <section>
    <input id="name" type="text" list="suggestions" placeholder="Nome" />
    <datalist id="suggestions"></datalist>
    <button id="add-name">Adicionar</button>
    <ul id="attendees"></ul>
    <p>Presentes: <span id="present">0</span> · Ausentes: <span id="absent">0</span></p>
    <button id="clear-attendees">Limpar lista</button>
  </section>

  <section>
    <input id="description" type="text" placeholder="Descrição" />
    <input id="amount" type="number" min="0.01" step="0.01" placeholder="Valor" />
    <button id="add-offering">Adicionar oferta</button>
    <ul id="offerings"></ul>
    <p>Total: <strong id="total">R$ 0,00</strong></p>
    <button id="clear-offerings">Limpar ofertas</button>
  </section>

  <section>
    <input id="token" type="password" placeholder="Token" />
    <button id="login">Entrar</button>
    <input id="filter" type="text" placeholder="Filtrar histórico" />
    <ul id="history"></ul>
    <button id="clear-history">Limpar histórico</button>
  </section>

  <button id="export">Exportar PDF</button>

  <script>
    const $ = (id) => document.getElementById(id);
    const setStatus = (message) => { $('status').textContent = message || ''; };

    const api = async (method, path, body) => {
      const response = await fetch(path, {
        method,
        headers: body ? { 'Content-Type': 'application/json' } : {},
        body: body ? JSON.stringify(body) : undefined,
      });
      if (!response.ok) {
        throw new Error(await response.text());
      }
      const text = await response.text();
      return text ? JSON.parse(text) : null;
    };

    const item = (label, buttons) => {
      const li = document.createElement('li');
      const span = document.createElement('span');
      span.textContent = label;
      li.appendChild(span);
      buttons.forEach((button) => li.appendChild(button));
      return li;
    };

    const button = (label, onClick, className) => {
      const el = document.createElement('button');
      el.textContent = label;
      if (className) el.className = className;
      el.onclick = onClick;
      return el;
    };

    const render = (session) => {
      $('date').value = session.date || '';
      $('attendees').replaceChildren(...session.attendees.map((a, i) => item(a.name, [
        button(a.present ? 'Presente' : 'Ausente', () => mutate('POST', `/api/attendees/${i}/toggle`), a.present ? 'present' : 'absent'),
        button('Remover', () => mutate('DELETE', `/api/attendees/${i}`)),
      ])));
      $('offerings').replaceChildren(...session.offerings.map((o, i) => item(`${o.description} - ${o.amount_label}`, [
        button('Remover', () => mutate('DELETE', `/api/offerings/${i}`)),
      ])));
      $('present').textContent = session.summary.present_count;
      $('absent').textContent = session.summary.absent_count;
      $('total').textContent = session.summary.total_label;
    };

    const mutate = async (method, path, body) => {
      try {
        render(await api(method, path, body));
        setStatus('');
      } catch (err) {
        setStatus(err.message);
      }
    };

    const refreshHistory = async () => {
      try {
        const data = await api('GET', `/api/history?q=${encodeURIComponent($('filter').value)}`);
        $('suggestions').replaceChildren(...data.names.map((name) => {
          const option = document.createElement('option');
          option.value = name;
          return option;
        }));
        $('history').replaceChildren(...data.names.map((name) => item(name, [
          button('x', async () => {
            await api('DELETE', `/api/history/names/${encodeURIComponent(name)}`);
            setTimeout(refreshHistory, 300);
          }),
        ])));
      } catch (err) {
        console.warn(err);
      }
    };

    const clear = async (path, message) => {
      const confirm = window.confirm(message);
      const result = await api('POST', path, { confirm });
      return result.cleared;
    };

    $('date').onchange = () => mutate('PUT', '/api/session/date', { date: $('date').value || null });

    $('add-name').onclick = async () => {
      await mutate('POST', '/api/attendees', { name: $('name').value });
      $('name').value = '';
      setTimeout(refreshHistory, 300);
    };

    $('add-offering').onclick = async () => {
      await mutate('POST', '/api/offerings', { description: $('description').value, amount: $('amount').value });
      $('description').value = '';
      $('amount').value = '';
    };

    $('clear-attendees').onclick = async () => {
      if (await clear('/api/attendees/clear', 'Limpar toda a lista?')) mutate('GET', '/api/session');
    };

    $('clear-offerings').onclick = async () => {
      if (await clear('/api/offerings/clear', 'Limpar todas as ofertas?')) mutate('GET', '/api/session');
    };

    $('clear-history').onclick = async () => {
      if (await clear('/api/history/clear', 'Limpar todo o histórico?')) setTimeout(refreshHistory, 300);
    };

    $('login').onclick = async () => {
      try {
        await api('PUT', '/api/history/credential', { token: $('token').value });
        setTimeout(refreshHistory, 500);
      } catch (err) {
        setStatus(err.message);
      }
    };

    $('filter').oninput = refreshHistory;

    $('export').onclick = async () => {
      let data;
      try {
        data = await api('GET', '/api/report');
      } catch (err) {
        window.alert(err.message);
        return;
      }
      const { jsPDF } = window.jspdf;
      const doc = new jsPDF();
      const report = data.report;
      doc.setFontSize(14);
      doc.text(report.title, 14, 15);
      let y = 22;
      report.tables.forEach((table) => {
        doc.setFontSize(12);
        doc.text(table.heading, 14, y);
        doc.autoTable({
          startY: y + 3,
          head: [table.columns],
          body: table.rows.map((row) => row.cells),
          didParseCell: (hook) => {
            const row = table.rows[hook.row.index];
            if (hook.section === 'body' && row && row.fill) hook.cell.styles.fillColor = row.fill;
          },
        });
        y = doc.lastAutoTable.finalY + 10;
      });
      if (report.total_line) {
        doc.setFontSize(12);
        doc.text(report.total_line, 14, y);
      }
      doc.save(data.filename);
    };

    mutate('GET', '/api/session');
    refreshHistory();
  </script>
</body>
</html>
"#;
