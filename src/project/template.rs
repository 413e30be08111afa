use crate::config::AndroidConfig;

/// Render build.gradle for the staged Android library module.
///
/// `scopes` are appended verbatim after the `android` block, in order.
pub fn render_build_script(android: &AndroidConfig, scopes: &[&str]) -> String {
    let mut script = String::new();

    script.push_str("buildscript {\n    repositories {\n");
    for repository in &android.repositories {
        script.push_str(&format!("        {}\n", repository));
    }
    script.push_str("    }\n    dependencies {\n");
    script.push_str(&format!(
        "        classpath 'com.android.tools.build:gradle:{}'\n",
        android.gradle_plugin
    ));
    script.push_str("    }\n}\n\n");

    script.push_str("apply plugin: 'com.android.library'\n\n");

    script.push_str("android {\n");
    script.push_str(&format!("    compileSdkVersion {}\n", android.compile_sdk));
    script.push_str(&format!("    buildToolsVersion \"{}\"\n\n", android.build_tools));
    script.push_str("    defaultConfig {\n");
    script.push_str(&format!("        minSdkVersion {}\n", android.min_sdk));
    script.push_str(&format!("        targetSdkVersion {}\n", android.target_sdk));
    script.push_str("        versionCode 1\n");
    script.push_str("        versionName \"1.0\"\n");
    script.push_str("    }\n}\n");

    for scope in scopes {
        script.push('\n');
        script.push_str(scope);
        script.push('\n');
    }

    script
}

/// Render settings.gradle naming the root project
pub fn render_settings_script(short_name: &str) -> String {
    format!("rootProject.name = '{}'\n", short_name)
}
