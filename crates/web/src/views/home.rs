use crate::views::layout;

pub const TITLE: &str = "Cleaning Dashboard";

/// Landing page linking to each record section.
pub fn render() -> String {
    let body = r#"<p>Track the cleaning companies, the houses they look after, and the employees who do the work.</p>
<ul class="sections">
<li><a href="/companies">Companies</a></li>
<li><a href="/houses">Houses</a></li>
<li><a href="/employees">Employees</a></li>
</ul>
"#;
    layout(TITLE, body)
}
