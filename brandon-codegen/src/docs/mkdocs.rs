//! `mkdocs.yml` for a Material for MkDocs site.

use brandon_spec::Application;
use serde::{Serialize, ser::SerializeMap};

use crate::paths::docs::{ENUMS_PAGE, INDEX_PAGE, REFERENCE_DIR};

/// Extensions needed by the generated pages (tables, icon shortcodes, code).
///
/// Written as text because the emoji settings are Python object tags, which
/// have no serde representation.
const MARKDOWN_EXTENSIONS: &str = "\
markdown_extensions:
- attr_list
- pymdownx.emoji:
    emoji_index: !!python/name:material.extensions.emoji.twemoji
    emoji_generator: !!python/name:material.extensions.emoji.to_svg
- pymdownx.highlight:
    anchor_linenums: true
- pymdownx.inlinehilite
- pymdownx.snippets
- pymdownx.superfences
";

#[derive(Debug, Serialize)]
pub struct MkDocsConfig {
    pub site_name: String,
    pub theme: Theme,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    pub nav: Vec<NavItem>,
}

#[derive(Debug, Serialize)]
pub struct Theme {
    pub name: &'static str,
    pub features: Vec<&'static str>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "material",
            features: vec!["navigation.instant"],
        }
    }
}

/// One entry of the navigation tree, serialized as a single-key mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub title: String,
    pub target: NavTarget,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NavTarget {
    Page(String),
    Section(Vec<NavItem>),
}

impl NavItem {
    pub fn page(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            target: NavTarget::Page(path.into()),
        }
    }

    pub fn section(title: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            title: title.into(),
            target: NavTarget::Section(items),
        }
    }
}

impl Serialize for NavItem {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.title, &self.target)?;
        map.end()
    }
}

impl MkDocsConfig {
    pub fn new(app: &Application) -> Self {
        Self {
            site_name: app.name.clone(),
            theme: Theme::default(),
            repo_url: app.url.clone(),
            nav: navigation(app),
        }
    }

    /// Render the configuration file.
    pub fn render(&self) -> Result<String, serde_yaml::Error> {
        let mut content = serde_yaml::to_string(self)?;
        content.push_str(MARKDOWN_EXTENSIONS);
        Ok(content)
    }
}

/// Home, then the command reference (groups with their commands first, then
/// ungrouped commands) and the schema pages.
fn navigation(app: &Application) -> Vec<NavItem> {
    let groups = app.cli.groups.iter().map(|group| {
        let pages = group
            .commands
            .iter()
            .map(|command| {
                NavItem::page(
                    &command.name,
                    format!("{REFERENCE_DIR}/{}/{}.md", group.name, command.name),
                )
            })
            .collect();
        NavItem::section(&group.name, pages)
    });
    let commands = app
        .cli
        .commands
        .iter()
        .map(|command| NavItem::page(&command.name, format!("{REFERENCE_DIR}/{}.md", command.name)));

    let reference = vec![
        NavItem::section("Commands", groups.chain(commands).collect()),
        NavItem::section(
            "Schemas",
            vec![NavItem::page("Enums", format!("{REFERENCE_DIR}/{ENUMS_PAGE}"))],
        ),
    ];

    vec![
        NavItem::page("Home", INDEX_PAGE),
        NavItem::section("Reference", reference),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_item_serializes_as_single_key_map() {
        let item = NavItem::section("group1", vec![NavItem::page("comm1", "reference/group1/comm1.md")]);
        let yaml = serde_yaml::to_string(&vec![item]).unwrap();
        assert_eq!(yaml, "- group1:\n  - comm1: reference/group1/comm1.md\n");
    }

    #[test]
    fn test_repo_url_is_optional() {
        let app = brandon_spec::parse_str("name: t\nversion: 1\ndescription: d\n", "cli.yml").unwrap();
        let content = MkDocsConfig::new(&app).render().unwrap();

        assert!(content.starts_with("site_name: t\ntheme:\n  name: material\n"));
        assert!(!content.contains("repo_url"));
        assert!(content.ends_with("- pymdownx.superfences\n"));
    }
}
