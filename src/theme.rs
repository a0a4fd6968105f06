use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
    pub toggle_icon: &'static str,
    pub toggle_label: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            toggle_icon: "☀",
            toggle_label: "切换到深色模式",
        },
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            toggle_icon: "☾",
            toggle_label: "切换到浅色模式",
        },
    }
}

const LIGHT_THEME: &str = r#"
:root {
    --color-bg: #ffffff;
    --color-text: #1d1d1f;
    --color-text-secondary: rgba(29, 29, 31, 0.8);
    --color-card-bg: #ffffff;
    --color-nav-bg: rgba(255, 255, 255, 0.85);
    --color-border: rgba(0, 0, 0, 0.1);
    --color-primary: #06c;
    --color-primary-hover: #0055b3;
    --color-input-bg: #ffffff;
    --shadow: 0 2px 8px rgba(0, 0, 0, 0.04), 0 8px 24px rgba(0, 0, 0, 0.06);
    --shadow-hover: 0 2px 8px rgba(0, 0, 0, 0.08), 0 8px 24px rgba(0, 0, 0, 0.12);
    --nav-shadow: 0 1px 0 rgba(0, 0, 0, 0.1);
    --color-button-bg: rgba(0, 0, 0, 0.05);
    --color-button-hover: rgba(0, 0, 0, 0.1);
    --color-online: #34c759;
    --card-border: none;
    --card-gradient: linear-gradient(145deg, rgba(255, 255, 255, 0.1) 0%, rgba(255, 255, 255, 0) 100%);
    --image-overlay: rgba(0, 0, 0, 0.03);
}
"#;

const DARK_THEME: &str = r#"
:root {
    --color-bg: #000000;
    --color-text: #f5f5f7;
    --color-text-secondary: rgba(245, 245, 247, 0.8);
    --color-card-bg: rgba(29, 29, 31, 0.7);
    --color-nav-bg: rgba(0, 0, 0, 0.85);
    --color-border: rgba(255, 255, 255, 0.1);
    --color-primary: #0a84ff;
    --color-primary-hover: #0070e0;
    --color-input-bg: rgba(29, 29, 31, 0.7);
    --shadow: 0 2px 8px rgba(0, 0, 0, 0.2), 0 8px 24px rgba(0, 0, 0, 0.3);
    --shadow-hover: 0 2px 8px rgba(0, 0, 0, 0.3), 0 8px 24px rgba(0, 0, 0, 0.4);
    --nav-shadow: 0 1px 0 rgba(255, 255, 255, 0.1);
    --color-button-bg: rgba(255, 255, 255, 0.08);
    --color-button-hover: rgba(255, 255, 255, 0.12);
    --color-online: #30d158;
    --card-border: 1px solid rgba(255, 255, 255, 0.08);
    --card-gradient: linear-gradient(145deg, rgba(255, 255, 255, 0.1) 0%, rgba(255, 255, 255, 0.03) 100%);
    --image-overlay: rgba(0, 0, 0, 0.2);
}
"#;
