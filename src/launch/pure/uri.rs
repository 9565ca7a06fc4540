//! Storefront launch URIs

/// `steam://rungameid/{id}`, with `//{options}` appended when options are set.
pub fn steam_uri(app_id: &str, launch_option: Option<&str>) -> String {
    match launch_option.map(str::trim).filter(|o| !o.is_empty()) {
        Some(option) => format!("steam://rungameid/{app_id}//{option}"),
        None => format!("steam://rungameid/{app_id}"),
    }
}

pub fn epic_uri(app_name: &str) -> String {
    format!("com.epicgames.launcher://apps/{app_name}?action=launch&silent=true")
}
