use crate::constants::placeholders;
use crate::models::UserRef;

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

/// `"{username} ({first} {last})"` when both names are known, otherwise
/// just the username.
pub fn format_full(user: Option<&UserRef>) -> String {
    let Some(user) = user else {
        return placeholders::NOT_ASSIGNED.to_string();
    };
    let username = present(&user.username).unwrap_or(placeholders::UNKNOWN_USER);
    match (present(&user.first_name), present(&user.last_name)) {
        (Some(first), Some(last)) => format!("{username} ({first} {last})"),
        _ => username.to_string(),
    }
}

pub fn format_short(user: Option<&UserRef>) -> String {
    let Some(user) = user else {
        return placeholders::NOT_AVAILABLE.to_string();
    };
    present(&user.username)
        .unwrap_or(placeholders::UNKNOWN)
        .to_string()
}

/// First letter of the first word of each name. Users without a first
/// name get `??`.
pub fn initials(user: Option<&UserRef>) -> String {
    let Some(first) = user
        .and_then(|user| present(&user.first_name))
        .and_then(|name| name.split_whitespace().next())
        .and_then(|word| word.chars().next())
    else {
        return placeholders::NO_INITIALS.to_string();
    };

    let mut out = String::new();
    out.push(first);
    if let Some(last) = user
        .and_then(|user| present(&user.last_name))
        .and_then(|name| name.split_whitespace().next())
        .and_then(|word| word.chars().next())
    {
        out.push(last);
    }
    out.to_uppercase()
}
