//! 列表页容器与表格行

use std::fmt::Write;

use super::markup::{escape_html, Highlighter};
use super::{ids, slot};
use crate::models::{Role, User};

/// 列表页布局
struct ListLayout {
    title: &'static str,
    input_id: &'static str,
    placeholder: &'static str,
    columns: &'static [&'static str],
    table_id: &'static str,
    pagination_id: &'static str,
    reset_id: &'static str,
}

const USERS_LAYOUT: ListLayout = ListLayout {
    title: "User List",
    input_id: "search-input",
    placeholder: "Search users...",
    columns: &["ID", "Name", "Email", "actions"],
    table_id: ids::USER_TABLE,
    pagination_id: ids::USER_PAGINATION,
    reset_id: "reset",
};

const ROLES_LAYOUT: ListLayout = ListLayout {
    title: "Role List",
    input_id: "role-search-input",
    placeholder: "Search roles...",
    columns: &["ID", "Name", "Permissions", "actions"],
    table_id: ids::ROLE_TABLE,
    pagination_id: ids::ROLE_PAGINATION,
    reset_id: "reset-roles",
};

fn list_container(layout: &ListLayout, search: &str) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<div class="list-container"><div class="list-header"><h1>{}</h1><div class="search-container"><input type="text" id="{}" placeholder="{}" value="{}"></div></div>"#,
        layout.title,
        layout.input_id,
        layout.placeholder,
        escape_html(search)
    );
    html.push_str(r#"<table class="list-table"><thead><tr>"#);
    for column in layout.columns {
        let _ = write!(html, "<th>{}</th>", column);
    }
    html.push_str("</tr></thead>");
    html.push_str(&slot(layout.table_id));
    html.push_str("</table>");
    html.push_str(&slot(layout.pagination_id));
    let _ = write!(html, r#"<button id="{}">reset</button></div>"#, layout.reset_id);
    html
}

/// 用户列表页容器
pub fn users_container(search: &str) -> String {
    list_container(&USERS_LAYOUT, search)
}

/// 角色列表页容器
pub fn roles_container(search: &str) -> String {
    list_container(&ROLES_LAYOUT, search)
}

fn action_cell(html: &mut String, id: &str) {
    let id = escape_html(id);
    let _ = write!(
        html,
        r#"<td><button class="edit-button" data-id="{id}">Edit</button><button class="delete-button" data-id="{id}">Delete</button></td>"#
    );
}

/// 用户表格行，高亮姓名与邮箱中的搜索词
pub fn user_rows(users: &[User], search: &str) -> String {
    let highlighter = Highlighter::new(search);
    let mut html = String::new();

    for user in users {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td>",
            escape_html(&user.id),
            highlighter.apply(&user.name),
            highlighter.apply(&user.email)
        );
        action_cell(&mut html, &user.id);
        html.push_str("</tr>");
    }

    html
}

/// 角色表格行，高亮角色名；权限列附带权限 ID
pub fn role_rows(roles: &[Role], search: &str) -> String {
    let highlighter = Highlighter::new(search);
    let mut html = String::new();

    for role in roles {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td>",
            escape_html(&role.id),
            highlighter.apply(&role.name)
        );
        for permission in &role.permissions {
            let _ = write!(
                html,
                r#"<span class="permission" data-id="{}">{}</span>"#,
                escape_html(&permission.id),
                escape_html(&permission.name)
            );
        }
        html.push_str("</td>");
        action_cell(&mut html, &role.id);
        html.push_str("</tr>");
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PermissionRef;

    #[test]
    fn test_user_rows_highlight_name_and_email() {
        let users = vec![User {
            id: "u1".to_string(),
            name: "John Smith".to_string(),
            email: "bjork@x.com".to_string(),
            roles: vec![],
        }];

        let html = user_rows(&users, "JO");
        assert!(html.contains(r#"<td><span class="search-result">Jo</span>hn Smith</td>"#));
        assert!(html.contains(r#"<td>b<span class="search-result">jo</span>rk@x.com</td>"#));
        assert!(html.contains(r#"class="delete-button" data-id="u1""#));
    }

    #[test]
    fn test_role_rows_list_permissions() {
        let roles = vec![Role {
            id: "r1".to_string(),
            name: "lead-auditor".to_string(),
            permissions: vec![PermissionRef {
                id: "p1".to_string(),
                name: "read:logs".to_string(),
            }],
        }];

        let html = role_rows(&roles, "audit");
        assert!(html.contains(r#"lead-<span class="search-result">audit</span>or"#));
        assert!(html.contains(r#"<span class="permission" data-id="p1">read:logs</span>"#));
    }

    #[test]
    fn test_container_has_slots_and_escaped_search() {
        let html = users_container(r#""><script>"#);
        assert!(html.contains(&slot(ids::USER_TABLE)));
        assert!(html.contains(&slot(ids::USER_PAGINATION)));
        assert!(html.contains(r#"value="&quot;&gt;&lt;script&gt;""#));
    }
}
