use crate::roster::calendar::{is_saturday, is_sunday};
use crate::roster::RosterTable;

use super::html_escape;

pub const SATURDAY_CLASS: &str = "highlight-sat";
pub const SUNDAY_CLASS: &str = "highlight-sun";

/// Render the printable, weekend-highlighted snapshot document
pub fn render_snapshot(table: &RosterTable) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>スケジュール表</title>
    <style>{css}</style>
</head>
<body>
    <h1>スケジュール表</h1>
    {table}
</body>
</html>"#,
        css = snapshot_css(),
        table = render_table(table),
    )
}

/// Weekday cell content, wrapped in the weekend marker where it applies
pub fn weekday_cell(label: &str) -> String {
    let escaped = html_escape(label);
    if is_saturday(label) {
        format!(r#"<span class="{SATURDAY_CLASS}">{escaped}</span>"#)
    } else if is_sunday(label) {
        format!(r#"<span class="{SUNDAY_CLASS}">{escaped}</span>"#)
    } else {
        escaped
    }
}

fn render_table(table: &RosterTable) -> String {
    let mut html = String::from("<table border=\"1\" class=\"roster\">\n<thead>\n");
    html.push_str("<tr style=\"text-align: center;\">");
    for label in table.column_labels() {
        html.push_str(&format!("<th>{}</th>", html_escape(&label)));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in table.rows() {
        html.push_str("<tr>");
        html.push_str(&format!("<td>{}</td>", html_escape(&row.day.iso)));
        html.push_str(&format!("<td>{}</td>", weekday_cell(row.day.weekday)));
        html.push_str(&format!("<td>{}</td>", html_escape(&row.remark)));
        for shift in &row.shifts {
            html.push_str(&format!("<td>{}</td>", html_escape(shift)));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>");
    html
}

fn snapshot_css() -> &'static str {
    r#"
        body {
            font-family: Arial, sans-serif;
            text-align: center;
        }
        table {
            width: 90%;
            border-collapse: collapse;
            margin: 20px auto;
            table-layout: fixed;
        }
        th, td {
            border: 1px solid black;
            padding: 8px;
            text-align: center;
            font-size: 12px;
            white-space: nowrap;
        }
        th {
            background-color: #f2f2f2;
        }
        .highlight-sat {
            background-color: #CCFFFF;
            color: #0000FF;
        }
        .highlight-sun {
            background-color: #FFCCCC;
            color: #FF0000;
        }
        @media screen and (max-width: 768px) {
            table {
                font-size: 10px;
            }
        }
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{build_month_dates, EmployeeSlot};

    fn table() -> RosterTable {
        RosterTable::create(
            build_month_dates(2024, 12).unwrap(),
            EmployeeSlot::active_from_names(&["Alice", "", "<b>Bob</b>"]),
        )
    }

    /// Body rows of the rendered snapshot, one string per `<tr>`
    fn body_rows(html: &str) -> Vec<&str> {
        let body = html.split("<tbody>").nth(1).unwrap();
        body.split("</tr>")
            .filter(|r| r.contains("<td>"))
            .collect()
    }

    #[test]
    fn test_weekend_markers() {
        let t = table();
        let html = render_snapshot(&t);
        let rows = body_rows(&html);
        assert_eq!(rows.len(), t.row_count());

        for (row, markup) in t.rows().iter().zip(rows) {
            let sat = markup.contains(SATURDAY_CLASS);
            let sun = markup.contains(SUNDAY_CLASS);
            assert_eq!(sat, is_saturday(row.day.weekday), "{}", row.day.iso);
            assert_eq!(sun, is_sunday(row.day.weekday), "{}", row.day.iso);
        }
    }

    #[test]
    fn test_document_shell() {
        let html = render_snapshot(&table());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("table-layout: fixed"));
        assert!(html.contains("@media screen and (max-width: 768px)"));
        assert!(html.contains("#CCFFFF"));
        assert!(html.contains("#FFCCCC"));
        assert!(!html.contains("<link"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn test_header_order_and_escaping() {
        let html = render_snapshot(&table());
        assert!(html.contains(
            "<th>日付</th><th>曜日</th><th>備考</th><th>1 (Alice)</th><th>3 (&lt;b&gt;Bob&lt;/b&gt;)</th>"
        ));
        assert!(!html.contains("<b>Bob</b>"));
    }

    #[test]
    fn test_weekday_cell() {
        assert_eq!(weekday_cell("土"), r#"<span class="highlight-sat">土</span>"#);
        assert_eq!(weekday_cell("日"), r#"<span class="highlight-sun">日</span>"#);
        assert_eq!(weekday_cell("月"), "月");
    }
}
