//! Plain-text rendering of menus and permission tables.

use std::fmt::Write as _;

use facilityhub_nav::{MenuItem, PermissionTable};

const INDENT: &str = "  ";

fn marker(item: &MenuItem) -> &'static str {
    match (item.is_group(), item.open, item.active) {
        (_, _, true) => "*",
        (true, true, _) => "v",
        (true, false, _) => ">",
        (false, _, _) => "-",
    }
}

fn write_items(out: &mut String, items: &[MenuItem], depth: usize) {
    for item in items {
        let indent = INDENT.repeat(depth);
        if item.is_group() {
            let _ = writeln!(out, "{indent}{} {}", marker(item), item.label);
            write_items(out, &item.children, depth + 1);
        } else {
            let _ = writeln!(out, "{indent}{} {}  {}", marker(item), item.label, item.path);
        }
    }
}

/// Indented outline of rendered menu items.
///
/// `*` marks the active leaf, `v`/`>` open and closed groups.
pub fn menu_outline(items: &[MenuItem]) -> String {
    let mut out = String::new();
    write_items(&mut out, items, 0);
    out
}

/// One line per role: `role: label, label, ...`.
pub fn permission_table(table: &PermissionTable) -> String {
    let width = table.roles().map(str::len).max().unwrap_or(0);
    let mut out = String::new();
    for (role, set) in table.iter() {
        let _ = writeln!(out, "{role:<width$}  {}", set.labels().join(", "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use facilityhub_models::AccountTier;
    use facilityhub_nav::{ExpandedGroups, Navigator, render_menu};

    #[test]
    fn test_outline_marks_active_leaf_and_open_groups() {
        let navigator = Navigator::builtin().unwrap();
        let menu = navigator.resolve(AccountTier::PropertyUser, "helpdesk");
        let items = render_menu(&menu, Some("/user/dashboard"), &ExpandedGroups::default());
        let outline = menu_outline(&items);

        let mut lines = outline.lines();
        assert_eq!(lines.next(), Some("* Dashboard  /user/dashboard"));
        assert_eq!(lines.next(), Some("- Profile  /user/profile"));
        assert!(outline.contains("> Helpdesk\n"));
        assert!(outline.lines().filter(|l| l.starts_with(INDENT)).count() > 0);
    }

    #[test]
    fn test_permission_table_lists_every_role() {
        let table = PermissionTable::builtin();
        let text = permission_table(&table);
        assert_eq!(text.lines().count(), table.len());
        assert!(text.lines().any(|l| l.starts_with("admin ") && l.ends_with("All Pages")));
    }
}
