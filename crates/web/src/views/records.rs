//! List / detail / edit page shared by every [`Resource`].

use crate::resource::Resource;
use crate::views::{encode_path_segment, escape_html, layout};

pub const DETAIL_TITLE: &str = "Details";

/// What the page shows besides the list and the form.
pub enum Focus<'a, R> {
    /// Only the list and an empty create form.
    Listing,
    /// A detail panel for one record.
    Selected(&'a R),
    /// The form pre-filled for editing one record.
    Editing(&'a R),
    /// The requested id does not exist.
    Missing(&'a str),
}

pub struct RecordPage<'a, R> {
    pub title: &'a str,
    pub records: &'a [R],
    pub focus: Focus<'a, R>,
}

pub fn render<R: Resource>(page: &RecordPage<'_, R>) -> String {
    let mut body = String::new();

    match page.focus {
        Focus::Selected(record) => body.push_str(&detail_panel(record)),
        Focus::Missing(id) => body.push_str(&format!(
            "<p class=\"notice\">No {} with id {} was found.</p>\n",
            R::ENTITY.to_lowercase(),
            escape_html(id)
        )),
        Focus::Listing | Focus::Editing(_) => {}
    }

    body.push_str(&table(page.records));

    let editing = match page.focus {
        Focus::Editing(record) => Some(record),
        _ => None,
    };
    body.push_str(&form(editing));

    layout(page.title, &body)
}

/// An id as it appears inside an `href` or `action` attribute.
fn path_id(id: &str) -> String {
    escape_html(&encode_path_segment(id))
}

fn detail_panel<R: Resource>(record: &R) -> String {
    let id = escape_html(record.id());
    let mut html = format!(
        "<section class=\"detail\">\n<h2>{} {id}</h2>\n<dl>\n",
        R::ENTITY
    );
    for (field, value) in R::FIELDS.iter().zip(record.values()) {
        html.push_str(&format!(
            "<dt>{}</dt><dd>{}</dd>\n",
            escape_html(field.label),
            escape_html(&value)
        ));
    }
    html.push_str(&format!(
        "</dl>\n<a href=\"{}/edit/{}\">Edit</a>\n</section>\n",
        R::BASE_PATH,
        path_id(record.id())
    ));
    html
}

fn table<R: Resource>(records: &[R]) -> String {
    if records.is_empty() {
        return format!(
            "<p class=\"empty\">No {} yet.</p>\n",
            R::LIST_TITLE.to_lowercase()
        );
    }

    let mut html = String::from("<table>\n<thead><tr><th>ID</th>");
    for field in R::FIELDS {
        html.push_str(&format!("<th>{}</th>", escape_html(field.label)));
    }
    html.push_str("<th></th></tr></thead>\n<tbody>\n");

    let base = R::BASE_PATH;
    for record in records {
        let id = escape_html(record.id());
        let href_id = path_id(record.id());
        html.push_str(&format!("<tr><td><a href=\"{base}/{href_id}\">{id}</a></td>"));
        for value in record.values() {
            html.push_str(&format!("<td>{}</td>", escape_html(&value)));
        }
        html.push_str(&format!(
            "<td><a href=\"{base}/edit/{href_id}\">Edit</a> \
             <form method=\"post\" action=\"{base}/delete/{href_id}\" class=\"inline\">\
             <button type=\"submit\">Delete</button></form></td></tr>\n"
        ));
    }

    html.push_str("</tbody>\n</table>\n");
    html
}

fn form<R: Resource>(editing: Option<&R>) -> String {
    let id = editing.map(|r| escape_html(r.id())).unwrap_or_default();
    let values = editing.map(|r| r.values()).unwrap_or_default();

    let mut html = format!(
        "<form method=\"post\" action=\"{}\" class=\"record-form\">\n\
         <input type=\"hidden\" name=\"id\" value=\"{id}\">\n",
        R::BASE_PATH
    );

    for (idx, field) in R::FIELDS.iter().enumerate() {
        let value = values.get(idx).map(|v| escape_html(v)).unwrap_or_default();
        let step = if field.input_type == "number" {
            " step=\"any\""
        } else {
            ""
        };
        html.push_str(&format!(
            "<label>{} <input type=\"{}\" name=\"{}\" value=\"{value}\"{step}></label>\n",
            escape_html(field.label),
            field.input_type,
            field.name,
        ));
    }

    if editing.is_some() {
        html.push_str(&format!(
            "<button type=\"submit\">Save</button>\n<a href=\"{}\">Cancel</a>\n",
            R::BASE_PATH
        ));
    } else {
        html.push_str("<button type=\"submit\">Create</button>\n");
    }

    html.push_str("</form>\n");
    html
}
