use ep_client::{User, UserUpdate};
use ep_portal::UserListScreen;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Text,
    Json { pretty: bool },
}

impl OutputFormat {
    pub(crate) fn from_flags(json: bool, pretty: bool) -> Self {
        if pretty {
            OutputFormat::Json { pretty: true }
        } else if json {
            OutputFormat::Json { pretty: false }
        } else {
            OutputFormat::Text
        }
    }

    fn json<T: Serialize>(&self, value: &T) -> serde_json::Result<String> {
        match self {
            OutputFormat::Json { pretty: true } => serde_json::to_string_pretty(value),
            _ => serde_json::to_string(value),
        }
    }
}

#[derive(Serialize)]
struct ListView<'a> {
    page: u32,
    total_pages: u32,
    search: &'a str,
    users: Vec<&'a User>,
}

#[derive(Serialize)]
struct StatusView<'a> {
    signed_in: bool,
    api_url: &'a str,
}

pub(crate) fn render_list(
    screen: &UserListScreen,
    format: OutputFormat,
) -> serde_json::Result<String> {
    let users = screen.visible_users();

    if format != OutputFormat::Text {
        return format.json(&ListView {
            page: screen.current_page(),
            total_pages: screen.total_pages(),
            search: screen.search_term(),
            users,
        });
    }

    let mut lines = vec![format!("{:>4}  {:<24}  {}", "ID", "Name", "Email")];
    lines.extend(
        users
            .iter()
            .map(|user| format!("{:>4}  {:<24}  {}", user.id, user.full_name(), user.email)),
    );
    if users.is_empty() {
        lines.push("  (no employees match)".to_string());
    }
    lines.push(screen.page_label());
    Ok(lines.join("\n"))
}

pub(crate) fn render_user(user: &User, format: OutputFormat) -> serde_json::Result<String> {
    if format != OutputFormat::Text {
        return format.json(user);
    }

    Ok(format!(
        "ID:         {}\nFirst name: {}\nLast name:  {}\nEmail:      {}\nAvatar:     {}",
        user.id, user.first_name, user.last_name, user.email, user.avatar
    ))
}

pub(crate) fn render_update(
    id: u64,
    update: &UserUpdate,
    format: OutputFormat,
) -> serde_json::Result<String> {
    if format != OutputFormat::Text {
        return format.json(update);
    }

    Ok(format!(
        "Updated {id}: {} {} <{}>",
        update.first_name, update.last_name, update.email
    ))
}

pub(crate) fn render_status(
    signed_in: bool,
    api_url: &str,
    format: OutputFormat,
) -> serde_json::Result<String> {
    if format != OutputFormat::Text {
        return format.json(&StatusView { signed_in, api_url });
    }

    Ok(format!(
        "Signed in: {}\nAPI:       {}",
        if signed_in { "yes" } else { "no" },
        api_url
    ))
}
