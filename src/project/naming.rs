/// Gradle-safe form of a plugin package name.
///
/// `@scope/my-plugin` becomes `scope_my_plugin`.
pub fn short_plugin_name(plugin_name: &str) -> String {
    plugin_name
        .trim_start_matches('@')
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Package identifier used when the plugin's manifest declares none
pub fn default_package_name(prefix: &str, plugin_name: &str) -> String {
    let short_name = short_plugin_name(plugin_name);
    let prefix = prefix.trim_end_matches('.');
    if prefix.is_empty() {
        short_name
    } else {
        format!("{}.{}", prefix, short_name)
    }
}

/// File name of the library archive Gradle produces for the plugin
pub fn artifact_name(plugin_name: &str) -> String {
    format!("{}.aar", short_plugin_name(plugin_name))
}
