use crate::core::models::{Transaction, TransactionType};
use crate::presentation::state::SettlementForm;
use chrono::{DateTime, Utc};

const STYLE: &str = "body{font-family:sans-serif;max-width:42rem;margin:2rem auto;padding:0 1rem;color:#1f2937}\
h1{text-align:center}label{display:block;font-size:.875rem;margin-bottom:.25rem}\
input{width:100%;padding:.5rem;margin-bottom:1rem;box-sizing:border-box}\
button{width:100%;padding:.5rem;background:#3b82f6;color:#fff;border:0;border-radius:.375rem}\
button:disabled{opacity:.5}.error{color:#dc2626}.sale{color:#16a34a}.refund{color:#dc2626}\
dl div{display:flex;justify-content:space-between;padding:.5rem 0}li{list-style:none;padding:.5rem 0}";

/// Renders the whole settlement page for the form's current state.
pub fn render_page(form: &SettlementForm) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>ACME Payments Settlement Service</title>\n");
    html.push_str(&format!("<style>{}</style>\n</head>\n<body>\n", STYLE));
    html.push_str("<h1>ACME Payments Settlement Service</h1>\n");

    render_form(&mut html, form);

    if let Some(error) = form.error() {
        html.push_str(&format!("<p class=\"error\">{}</p>\n", escape_html(error)));
    }

    if let Some(settlement) = form.settlement() {
        html.push_str("<section>\n<h2>Settlement Data</h2>\n<dl>\n");
        summary_row(&mut html, "Merchant ID", &escape_html(&settlement.merchant_id));
        summary_row(&mut html, "Date", &escape_html(&settlement.date));
        summary_row(
            &mut html,
            "Settlement Amount",
            &format!("${:.2}", settlement.settlement_amount),
        );
        html.push_str("</dl>\n<h3>Transactions</h3>\n<ul>\n");
        for tx in &settlement.transactions {
            render_transaction(&mut html, tx);
        }
        html.push_str("</ul>\n</section>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_form(html: &mut String, form: &SettlementForm) {
    html.push_str("<form method=\"get\" action=\"/\">\n");
    html.push_str(&format!(
        "<label for=\"merchantId\">Merchant ID:</label>\n\
         <input id=\"merchantId\" name=\"merchantId\" type=\"text\" value=\"{}\">\n",
        escape_html(&form.merchant_id)
    ));
    html.push_str(&format!(
        "<label for=\"date\">Date:</label>\n<input id=\"date\" name=\"date\" type=\"date\" value=\"{}\">\n",
        escape_html(&form.date)
    ));
    if form.is_loading() {
        html.push_str("<button type=\"submit\" disabled>Loading...</button>\n");
    } else {
        html.push_str("<button type=\"submit\">Fetch Settlement Data</button>\n");
    }
    html.push_str("</form>\n");
}

fn summary_row(html: &mut String, label: &str, value: &str) {
    html.push_str(&format!("<div><dt>{}</dt><dd>{}</dd></div>\n", label, value));
}

fn render_transaction(html: &mut String, tx: &Transaction) {
    let (class, label, sign) = match tx.kind {
        TransactionType::Sale => ("sale", "SALE", ""),
        TransactionType::Refund => ("refund", "REFUND", "-"),
    };
    html.push_str(&format!(
        "<li id=\"tx-{}\"><span class=\"{}\">{}</span> <span>{}${}</span><p>{}</p></li>\n",
        escape_html(&tx.id),
        class,
        label,
        sign,
        escape_html(&tx.amount),
        escape_html(&display_timestamp(&tx.created_at)),
    ));
}

/// `2024-06-01 12:34:56 UTC` for RFC 3339 input, the raw text otherwise.
fn display_timestamp(created_at: &str) -> String {
    match DateTime::parse_from_rfc3339(created_at) {
        Ok(at) => at.with_timezone(&Utc).format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        Err(_) => created_at.to_string(),
    }
}

/// Escape the 5 characters with special meaning in HTML text and attributes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
