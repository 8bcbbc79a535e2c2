use crate::models::form::{MONTH_RANGE, YEAR_RANGE, remark_field_name, shift_field_name};
use crate::roster::{ColumnKey, RosterTable, ShiftCode};
use crate::session::Session;

use super::html_escape;

/// Render the interactive page for the session's current state
pub fn render_page(session: &Session) -> String {
    let mut body = render_generate_form(session);

    if let Some(message) = &session.error {
        body.push_str(&format!(
            "<p class=\"error\" role=\"alert\">{}</p>\n",
            html_escape(message)
        ));
    }

    if let Some(table) = &session.table {
        if let Some((year, month)) = table.year_month() {
            body.push_str(&format!("<h2>{year}年{month}月</h2>\n"));
        }
        body.push_str(&render_editor(table));
        body.push_str("<h3>スケジュールテーブル</h3>\n");
        body.push_str(&render_grid(table));
        body.push_str("<h3>印刷用スケジュール (スクリーンショット用表示)</h3>\n");
        body.push_str(
            "<iframe src=\"/roster/snapshot\" title=\"snapshot\" height=\"600\" \
             style=\"width: 100%; border: none;\" scrolling=\"yes\"></iframe>\n",
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>シフト表作成ツール</title>
    <style>{css}</style>
</head>
<body>
    <h1>シフト表作成ツール</h1>
{body}
</body>
</html>"#,
        css = page_css(),
    )
}

fn render_generate_form(session: &Session) -> String {
    let form = &session.form;
    let mut html =
        String::from("<form method=\"post\" action=\"/roster/generate\" class=\"generate\">\n");

    html.push_str("<label>年を選択してください <select name=\"year\">");
    for year in YEAR_RANGE {
        let value = year.to_string();
        html.push_str(&option(&value, value == form.year.trim()));
    }
    html.push_str("</select></label>\n");

    html.push_str("<label>月を選択してください <select name=\"month\">");
    for month in MONTH_RANGE {
        let value = month.to_string();
        html.push_str(&option(&value, value == form.month.trim()));
    }
    html.push_str("</select></label>\n");

    html.push_str("<h3>従業員名を入力してください</h3>\n");
    for (i, name) in form.names.iter().enumerate() {
        let slot = i + 1;
        html.push_str(&format!(
            "<label>従業員{slot}の名前 <input type=\"text\" name=\"employee_{slot}\" value=\"{}\"></label>\n",
            html_escape(name)
        ));
    }

    html.push_str("<button type=\"submit\">テーブルを生成</button>\n</form>\n");
    html
}

/// Per-cell shift selectors and per-row remark inputs. Every control
/// submits the whole editor form on change.
fn render_editor(table: &RosterTable) -> String {
    let mut html =
        String::from("<form method=\"post\" action=\"/roster/cells\" id=\"editor\">\n");

    for (row_idx, row) in table.rows().iter().enumerate() {
        html.push_str(&format!(
            "<fieldset>\n<legend><h4>{} ({})</h4></legend>\n",
            html_escape(&row.day.iso),
            html_escape(row.day.weekday)
        ));

        for employee in table.employees() {
            let current = table
                .cell(row_idx, ColumnKey::Employee(employee.slot))
                .unwrap_or_default();
            html.push_str(&format!(
                "<label>{} の勤務タイプ <select name=\"{}\" onchange=\"this.form.submit()\">{}</select></label>\n",
                html_escape(&employee.column_label()),
                shift_field_name(row_idx, employee.slot),
                shift_options(current)
            ));
        }

        html.push_str(&format!(
            "<label>{} の備考 <input type=\"text\" name=\"{}\" value=\"{}\" onchange=\"this.form.submit()\"></label>\n</fieldset>\n",
            html_escape(&row.day.iso),
            remark_field_name(row_idx),
            html_escape(&row.remark)
        ));
    }

    html.push_str("<button type=\"submit\">保存</button>\n</form>\n");
    html
}

/// Options for one shift selector, with `current` preselected. A stored
/// value outside the vocabulary is kept as an extra option.
fn shift_options(current: &str) -> String {
    let mut html: String = ShiftCode::ALL
        .iter()
        .map(|code| option(code.as_str(), code.as_str() == current))
        .collect();

    if current.parse::<ShiftCode>().is_err() {
        html.push_str(&option(current, true));
    }
    html
}

fn option(value: &str, selected: bool) -> String {
    let value = html_escape(value);
    if selected {
        format!("<option value=\"{value}\" selected>{value}</option>")
    } else {
        format!("<option value=\"{value}\">{value}</option>")
    }
}

/// Read-only grid of the whole table
fn render_grid(table: &RosterTable) -> String {
    let mut html = String::from("<table class=\"grid\">\n<thead><tr><th></th>");
    for label in table.column_labels() {
        html.push_str(&format!("<th>{}</th>", html_escape(&label)));
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for row_idx in 0..table.row_count() {
        html.push_str(&format!("<tr><th>{row_idx}</th>"));
        for key in table.column_keys() {
            let value = table.cell(row_idx, key).unwrap_or_default();
            html.push_str(&format!("<td>{}</td>", html_escape(value)));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>\n");
    html
}

fn page_css() -> &'static str {
    r#"
        body { font-family: Arial, sans-serif; margin: 2rem; }
        label { display: inline-block; margin: 0.25rem 1rem 0.25rem 0; }
        fieldset { margin: 0.5rem 0; border: 1px solid #ddd; }
        legend h4 { margin: 0; }
        .error { color: #b00020; font-weight: bold; }
        table.grid { border-collapse: collapse; margin: 1rem 0; }
        table.grid th, table.grid td { border: 1px solid #ccc; padding: 4px 8px; }
        table.grid thead th { background-color: #f2f2f2; }
    "#
}
