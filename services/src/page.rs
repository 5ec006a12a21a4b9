//! HTML rendering of the users table.

use std::fmt::{self, Display, Formatter};

use roster_business::{COLUMNS, ColumnDescriptor, User, ViewState};

use crate::query::to_query_string;

const STYLE: &str = r#"
table { width: 100%; border-collapse: collapse; }
th { border: 1px solid #ddd; padding: 8px; text-align: left; background-color: #f2f2f2; cursor: pointer; }
td { border: 1px solid #ddd; padding: 8px; text-align: left; }
th a.sort { display: block; padding-bottom: 8px; color: inherit; text-decoration: none; }
th input { padding: 6px; width: 200px; }
.sort-icon { vertical-align: middle; margin-left: 5px; }
"#;

/// Id of the form the header search boxes submit through.
const SEARCH_FORM_ID: &str = "search";

/// Text with `&`, `<`, `>`, `"` and `'` escaped for HTML bodies and attributes.
pub struct Escaped<'a>(pub &'a str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(pos) = rest.find(['&', '<', '>', '"', '\'']) {
            f.write_str(&rest[..pos])?;
            let entity = match rest.as_bytes()[pos] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&#39;",
            };
            f.write_str(entity)?;
            rest = &rest[pos + 1..];
        }
        f.write_str(rest)
    }
}

/// The full users page: search form, header row, one row per visible user.
pub struct UsersPage<'a> {
    rows: &'a [User],
    state: &'a ViewState,
}

impl<'a> UsersPage<'a> {
    pub fn new(rows: &'a [User], state: &'a ViewState) -> Self {
        Self { rows, state }
    }

    fn write_header_cell(&self, f: &mut Formatter<'_>, descriptor: &ColumnDescriptor) -> fmt::Result {
        let next = self.state.after_click(descriptor.column);
        write!(
            f,
            r#"<th><a class="sort" href="/?{}">{}"#,
            Escaped(&to_query_string(&next)),
            Escaped(descriptor.label)
        )?;
        if self.state.sort_column() == descriptor.column {
            write!(
                f,
                r#"<span class="sort-icon">{}</span>"#,
                self.state.sort_direction().indicator()
            )?;
        }
        f.write_str("</a>")?;

        if let Some(field) = descriptor.search {
            write!(
                f,
                r#"<input type="text" form="{SEARCH_FORM_ID}" name="{}" placeholder="{}" value="{}">"#,
                field.key(),
                Escaped(&descriptor.placeholder()),
                Escaped(self.state.search(field))
            )?;
        }
        f.write_str("</th>")
    }

    fn write_row(f: &mut Formatter<'_>, user: &User) -> fmt::Result {
        f.write_str("<tr>")?;
        for descriptor in &COLUMNS {
            write!(f, "<td>{}</td>", Escaped(&descriptor.column.cell(user)))?;
        }
        f.write_str("</tr>")
    }
}

impl Display for UsersPage<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><title>Users</title><style>{STYLE}</style></head><body><div>"#
        )?;

        // Search boxes live in header cells; they join this form via `form=`.
        write!(
            f,
            r#"<form id="{SEARCH_FORM_ID}" method="get" action="/"><input type="hidden" name="sort" value="{}"><input type="hidden" name="dir" value="{}"></form>"#,
            self.state.sort_column().key(),
            self.state.sort_direction().as_str()
        )?;

        f.write_str("<table><thead><tr>")?;
        for descriptor in &COLUMNS {
            self.write_header_cell(f, descriptor)?;
        }
        f.write_str("</tr></thead><tbody>")?;
        for user in self.rows {
            Self::write_row(f, user)?;
        }
        f.write_str("</tbody></table><div></div></div></body></html>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_business::{Column, SearchField, SortDirection, UserId};

    fn user(id: i64, name: &str, email: &str) -> User {
        User {
            id: UserId::Number(id),
            name: name.to_owned(),
            email: email.to_owned(),
            username: "user".to_owned(),
            phone: "555".to_owned(),
            website: "site.dev".to_owned(),
        }
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            Escaped(r#"<b>"Tom" & 'Jerry'</b>"#).to_string(),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(Escaped("plain ünïcode").to_string(), "plain ünïcode");
    }

    #[test]
    fn default_page_marks_id_ascending_only() {
        let state = ViewState::default();
        let html = UsersPage::new(&[], &state).to_string();

        assert_eq!(html.matches(r#"class="sort-icon""#).count(), 1);
        assert!(html.contains(r#"Id<span class="sort-icon">▲</span>"#));
        assert!(!html.contains('▼'));
        assert!(html.contains("<tbody></tbody>"));
    }

    #[test]
    fn header_links_encode_next_state() {
        let state = ViewState::default().searching(SearchField::Name, "al");
        let html = UsersPage::new(&[], &state).to_string();

        // Active column flips, other columns start ascending; search is preserved.
        assert!(html.contains(r#"href="/?sort=id&amp;dir=desc&amp;name=al""#));
        assert!(html.contains(r#"href="/?sort=name&amp;dir=asc&amp;name=al""#));
    }

    #[test]
    fn only_searchable_columns_get_inputs() {
        let state = ViewState::default();
        let html = UsersPage::new(&[], &state).to_string();

        assert_eq!(html.matches(r#"<input type="text""#).count(), 2);
        assert!(html.contains(r#"name="name" placeholder="Search by Name""#));
        assert!(html.contains(r#"name="email" placeholder="Search by Email""#));
    }

    #[test]
    fn descending_indicator_on_active_column() {
        let state = ViewState::default().sorted_by(Column::Phone, SortDirection::Descending);
        let html = UsersPage::new(&[], &state).to_string();

        assert!(html.contains(r#"Phone<span class="sort-icon">▼</span>"#));
        assert!(html.contains(r#"<input type="hidden" name="sort" value="phone">"#));
        assert!(html.contains(r#"<input type="hidden" name="dir" value="desc">"#));
    }

    #[test]
    fn rows_render_in_given_order_with_escaped_cells() {
        let rows = vec![user(2, "<script>", "a@x.com"), user(1, "Bob", "b@x.com")];
        let state = ViewState::default();
        let html = UsersPage::new(&rows, &state).to_string();

        let first = html.find("&lt;script&gt;").expect("first row rendered");
        let second = html.find("<td>Bob</td>").expect("second row rendered");
        assert!(first < second);
        assert!(html.contains(
            "<tr><td>1</td><td>Bob</td><td>b@x.com</td><td>user</td><td>555</td><td>site.dev</td></tr>"
        ));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn search_value_is_prefilled() {
        let state = ViewState::default().searching(SearchField::Email, "\"quoted\"");
        let html = UsersPage::new(&[], &state).to_string();
        assert!(html.contains(r#"value="&quot;quoted&quot;""#));
    }
}
