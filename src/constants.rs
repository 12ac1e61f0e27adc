//! Common constants used throughout verless.

/// Project configuration file name
pub const CONFIG_FILE: &str = "verless.yml";

/// Git ignore file written into new projects
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Theme configuration file name
pub const THEME_CONFIG_FILE: &str = "theme.yml";

/// Stylesheet written into the default theme
pub const STYLE_FILE: &str = "style.css";

/// Directory holding the Markdown content of a project
pub const CONTENT_DIR: &str = "content";

/// Directory holding all themes of a project
pub const THEMES_DIR: &str = "themes";

/// Build output directory, excluded from version control
pub const OUTPUT_DIR: &str = "target";

/// Theme used by freshly created projects
pub const DEFAULT_THEME: &str = "default";

/// Template rendering list pages
pub const LIST_PAGE_TPL: &str = "list-page.html";

/// Template rendering single pages
pub const PAGE_TPL: &str = "page.html";

pub const TEMPLATES_DIR: &str = "templates";
pub const CSS_DIR: &str = "css";
pub const JS_DIR: &str = "js";

/// List page template of the default theme
pub const DEFAULT_LIST_PAGE_TPL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{{ .Meta.Title }}</title>
    <link rel="stylesheet" href="/css/style.css">
</head>
<body>
    <h1>{{ .Meta.Title }}</h1>
    <p>{{ .Meta.Subtitle }}</p>
    <ul>
        {{ range .Pages }}
        <li><a href="{{ .Route }}">{{ .Title }}</a></li>
        {{ end }}
    </ul>
</body>
</html>
"#;

/// Stylesheet of the default theme
pub const DEFAULT_CSS: &str = r#"body {
    max-width: 720px;
    margin: 0 auto;
    padding: 2rem 1rem;
    font-family: sans-serif;
    line-height: 1.6;
}
"#;
