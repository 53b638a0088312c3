//! Server-rendered HTML. Everything interpolated goes through `escape`.

use axum::http::StatusCode;
use std::fmt::Write;

use crate::import::{ImportError, ImportKind, ImportSummary};
use crate::report::{format_brl, format_decimal, format_percent, Cashflow, ItemProgress};

const STYLE: &str = "body{font-family:sans-serif;margin:2rem auto;max-width:72rem;color:#222}\
table{border-collapse:collapse;width:100%}th,td{border:1px solid #ccc;padding:.3rem .5rem}\
td.num{text-align:right}nav a{margin-right:1rem}.erro{color:#a00}.ok{color:#060}";

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} - Gestão de Obras</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <nav><a href=\"/\">Início</a><a href=\"/medicao\">Medição</a>\
         <a href=\"/upload\">Importar</a><a href=\"/dashboard\">Dashboard</a></nav>\n\
         <h1>{title}</h1>\n{body}\n</body>\n</html>\n",
        title = escape(title),
    )
}

pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

pub(crate) fn index(item_count: i64, entry_count: i64) -> String {
    let body = format!(
        "<p>{item_count} itens de orçamento, {entry_count} lançamentos de medição.</p>\n\
         <ul>\n<li><a href=\"/medicao\">Ir para Medição</a></li>\n\
         <li><a href=\"/upload\">Importar planilhas (SEO / GERFIN)</a></li>\n\
         <li><a href=\"/dashboard\">Fluxo de caixa</a></li>\n</ul>"
    );
    layout("Sistema de Gestão de Obras", &body)
}

pub(crate) fn measurement_form(rows: &[ItemProgress]) -> String {
    if rows.is_empty() {
        return layout(
            "Medição",
            "<p>Nenhum item de orçamento. <a href=\"/upload\">Importe o SEO</a> primeiro.</p>",
        );
    }

    let mut body = String::from(
        "<form method=\"post\" action=\"/salvar_medicao\">\n<table>\n<tr><th>Código</th>\
         <th>Descrição</th><th>Unid.</th><th>Contrato</th><th>Preço unit.</th>\
         <th>Acumulado</th><th>%</th><th>Qtd. no mês</th></tr>\n",
    );
    for row in rows {
        let Some(id) = row.item.id else { continue };
        let percent = row
            .executed_ratio()
            .map(format_percent)
            .unwrap_or_else(|| "-".into());
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td class=\"num\">{}</td>\
             <td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td>\
             <td><input name=\"qtd_mes_{id}\" inputmode=\"decimal\" size=\"8\"></td></tr>",
            escape(&row.item.code),
            escape(&row.item.description),
            escape(&row.item.unit),
            format_decimal(row.item.contracted_quantity, 2),
            format_brl(row.item.unit_price),
            format_decimal(row.executed, 2),
            percent,
        );
    }
    body.push_str("</table>\n<p><button type=\"submit\">Salvar medição</button></p>\n</form>");
    layout("Medição", &body)
}

pub(crate) fn measurement_saved(count: usize) -> String {
    layout(
        "Medição Salva com Sucesso!",
        &format!("<p>{count} lançamento(s) gravado(s).</p>\n<p><a href=\"/medicao\">Voltar</a></p>"),
    )
}

pub(crate) fn upload_form() -> String {
    layout(
        "Importar planilhas",
        "<form method=\"post\" action=\"/upload\" enctype=\"multipart/form-data\">\n\
         <p><label>Orçamento (SEO): <input type=\"file\" name=\"arquivo_seo\"></label></p>\n\
         <p><label>Pagamentos (GERFIN): <input type=\"file\" name=\"arquivo_gerfin\"></label></p>\n\
         <p>Cada arquivo enviado substitui todos os dados anteriores do seu tipo.</p>\n\
         <p><button type=\"submit\">Enviar</button></p>\n</form>",
    )
}

pub(crate) fn upload_result(outcomes: &[(ImportKind, Result<ImportSummary, ImportError>)]) -> String {
    if outcomes.is_empty() {
        return layout(
            "Importação",
            "<p>Nenhum arquivo enviado.</p>\n<p><a href=\"/upload\">Voltar</a></p>",
        );
    }

    let mut body = String::from("<ul>\n");
    for (kind, outcome) in outcomes {
        match outcome {
            Ok(s) => {
                let _ = write!(
                    body,
                    "<li class=\"ok\">{kind}: {} registro(s) importado(s), {} linha(s) ignorada(s), \
                     {} registro(s) anterior(es) substituído(s).",
                    s.inserted, s.skipped, s.removed,
                );
                if s.dropped_measurements > 0 {
                    let _ = write!(
                        body,
                        " {} lançamento(s) de medição removido(s) junto com o orçamento anterior.",
                        s.dropped_measurements
                    );
                }
                body.push_str("</li>\n");
            }
            Err(e) => {
                let _ = writeln!(
                    body,
                    "<li class=\"erro\">{kind}: falha na importação: {}</li>",
                    escape(&e.to_string())
                );
            }
        }
    }
    body.push_str("</ul>\n<p><a href=\"/upload\">Voltar</a> | <a href=\"/dashboard\">Dashboard</a></p>");
    layout("Importação", &body)
}

pub(crate) fn dashboard(cashflow: &Cashflow) -> String {
    let mut body = format!(
        "<table>\n<tr><th>Produção acumulada</th><th>Gasto acumulado</th><th>Saldo</th></tr>\n\
         <tr><td class=\"num\">R$ {}</td><td class=\"num\">R$ {}</td><td class=\"num\">R$ {}</td></tr>\n\
         </table>\n",
        format_brl(cashflow.total_production),
        format_brl(cashflow.total_spend),
        format_brl(cashflow.balance),
    );
    if cashflow.undated_payments > 0 {
        let _ = writeln!(
            body,
            "<p>{} pagamento(s) sem data ficaram fora do fluxo.</p>",
            cashflow.undated_payments
        );
    }
    if cashflow.is_empty() {
        body.push_str("<p>Sem medições ou pagamentos datados.</p>");
        return layout("Fluxo de caixa", &body);
    }

    body.push_str(
        "<table>\n<tr><th>Mês</th><th>Produção</th><th>Gasto</th>\
         <th>Produção acum.</th><th>Gasto acum.</th></tr>\n",
    );
    for (i, label) in cashflow.labels.iter().enumerate() {
        let cell = |series: &[rust_decimal::Decimal]| {
            series.get(i).copied().map(format_brl).unwrap_or_default()
        };
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td>\
             <td class=\"num\">{}</td><td class=\"num\">{}</td></tr>",
            escape(label),
            cell(&cashflow.monthly_production),
            cell(&cashflow.monthly_spend),
            cell(&cashflow.cumulative_production),
            cell(&cashflow.cumulative_spend),
        );
    }
    body.push_str("</table>\n");

    let data = serde_json::to_string(cashflow)
        .unwrap_or_else(|_| "{}".into())
        .replace("</", "<\\/");
    let _ = write!(
        body,
        "<canvas id=\"cashflow\" height=\"120\"></canvas>\n\
         <script id=\"cashflow-data\" type=\"application/json\">{data}</script>\n\
         <script src=\"https://cdn.jsdelivr.net/npm/chart.js\"></script>\n\
         <script>\n\
         const d = JSON.parse(document.getElementById('cashflow-data').textContent);\n\
         new Chart(document.getElementById('cashflow'), {{\n\
           type: 'bar',\n\
           data: {{ labels: d.labels, datasets: [\n\
             {{ label: 'Produção', data: d.monthly_production }},\n\
             {{ label: 'Gasto', data: d.monthly_spend }},\n\
             {{ label: 'Produção acum.', data: d.cumulative_production, type: 'line' }},\n\
             {{ label: 'Gasto acum.', data: d.cumulative_spend, type: 'line' }}\n\
           ] }}\n\
         }});\n\
         </script>"
    );
    layout("Fluxo de caixa", &body)
}

pub(crate) fn error_page(status: StatusCode, message: &str) -> String {
    layout(
        "Erro",
        &format!(
            "<p class=\"erro\">{} {}</p>\n<p>{}</p>\n<p><a href=\"/\">Início</a></p>",
            status.as_u16(),
            escape(status.canonical_reason().unwrap_or_default()),
            escape(message)
        ),
    )
}

#[cfg(test)]
#[path = "pages_tests.rs"]
mod tests;
