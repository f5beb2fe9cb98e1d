//! HTML of the prediction page

use std::collections::HashMap;
use std::fmt::{self, Write};

use crate::form::{Field, Widget, FIELDS};
use crate::Prediction;

const TITLE: &str = "Online Food Customer Prediction";
const DESCRIPTION: &str =
    "This page predicts whether a customer will order food online or not";

const STYLE: &str = r#"
    body {
        font-family: sans-serif;
        background-color: #FAFAFA;
    }
    .main {
        max-width: 720px;
        margin: 0 auto;
        background-color: #F0F8FF;
        padding: 20px;
        border-radius: 10px;
        box-shadow: 0px 0px 10px rgba(0, 0, 0, 0.1);
    }
    h1, h3 {
        color: #4B0082;
        text-align: center;
        margin-bottom: 20px;
    }
    label {
        display: block;
        font-weight: bold;
    }
    input, select {
        margin-bottom: 20px;
        padding: 10px;
        border-radius: 6px;
        border: 1px solid #D3D3D3;
        width: 100%;
        box-sizing: border-box;
    }
    button {
        background-color: #4B0082;
        color: white;
        padding: 12px 24px;
        border: none;
        border-radius: 6px;
        cursor: pointer;
        font-size: 16px;
    }
    button:hover {
        background-color: #6A0DAD;
    }
    .centered-text {
        text-align: center;
        margin-bottom: 20px;
    }
    .prediction-container {
        background-color: #FFF;
        padding: 20px;
        border-radius: 10px;
        box-shadow: 0px 0px 10px rgba(0, 0, 0, 0.1);
        text-align: center;
        margin-top: 20px;
    }
    .error {
        background-color: #FDECEA;
        color: #8A1C1C;
        padding: 12px;
        border-radius: 6px;
        margin-top: 20px;
    }
"#;

/// What to show below the form
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Nothing submitted yet
    Empty,
    Prediction(Prediction),
    /// Message of a rejected submission
    Error(String),
}

/// Renders the whole page
///
/// `values` holds the raw submitted fields, fields not in it show their default value.
pub fn page(values: &HashMap<String, String>, outcome: &Outcome) -> String {
    let mut html = String::with_capacity(8 * 1024);
    // writing into a `String` never fails
    let _ = write_page(&mut html, values, outcome);
    html
}

fn write_page<W: Write>(
    html: &mut W,
    values: &HashMap<String, String>,
    outcome: &Outcome,
) -> fmt::Result {
    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">")?;
    writeln!(html, "<title>{}</title>", TITLE)?;
    writeln!(html, "<style>{}</style>", STYLE)?;
    writeln!(html, "</head>\n<body>\n<div class=\"main\">")?;
    writeln!(html, "<h1>{}</h1>", TITLE)?;
    writeln!(
        html,
        "<div class=\"centered-text\"><h3>{}</h3></div>",
        DESCRIPTION
    )?;

    writeln!(html, "<form method=\"post\" action=\"/\">")?;
    for field in FIELDS.iter() {
        let value = values
            .get(field.name)
            .cloned()
            .unwrap_or_else(|| field.default_value());
        write_field(html, field, &value)?;
    }
    writeln!(html, "<button type=\"submit\">Predict</button>\n</form>")?;

    match outcome {
        Outcome::Empty => {}
        Outcome::Prediction(prediction) => writeln!(
            html,
            "<div class=\"prediction-container\"><p><em>Prediction:</em> {}</p></div>",
            prediction.label()
        )?,
        Outcome::Error(message) => writeln!(
            html,
            "<div class=\"error\">Error in prediction: {}</div>",
            escape(message)
        )?,
    }

    writeln!(
        html,
        "<div class=\"centered-text\"><h3>Prediction Output</h3>\
         <p>The prediction result will be shown here.</p></div>"
    )?;
    writeln!(html, "</div>\n</body>\n</html>")
}

fn write_field<W: Write>(html: &mut W, field: &Field, value: &str) -> fmt::Result {
    let name = escape(field.name);
    writeln!(
        html,
        "<label for=\"{}\" title=\"{}\">{}</label>",
        name,
        escape(field.help),
        escape(field.label)
    )?;

    match field.widget {
        Widget::Number { min, max, integer } => {
            write!(
                html,
                "<input type=\"number\" id=\"{}\" name=\"{}\" value=\"{}\" step=\"{}\"",
                name,
                name,
                escape(value),
                if integer { "1" } else { "any" }
            )?;
            if let Some(min) = min {
                write!(html, " min=\"{}\"", min)?;
            }
            if let Some(max) = max {
                write!(html, " max=\"{}\"", max)?;
            }
            writeln!(html, " required>")
        }
        Widget::Select(options) => {
            writeln!(html, "<select id=\"{}\" name=\"{}\">", name, name)?;
            for option in options {
                writeln!(
                    html,
                    "<option{}>{}</option>",
                    if *option == value { " selected" } else { "" },
                    escape(option)
                )?;
            }
            writeln!(html, "</select>")
        }
    }
}

/// Escapes text for use in HTML content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
