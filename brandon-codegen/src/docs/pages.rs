//! Markdown pages of the documentation site.

use brandon_core::to_class_name;
use brandon_spec::{Application, Author, Command};

use super::icons::Icon;
use crate::{
    Error,
    markdown::{Document, Heading, Link, Paragraph, ShellCommand, Table, UnorderedList},
};

/// Landing page: title, description and the authors with their links.
pub fn index_page(app: &Application) -> String {
    let mut doc = Document::new(&app.name);
    doc.add(Paragraph::new(&app.description));

    if !app.authors.is_empty() {
        doc.add(Heading::new("Authors", 1))
            .add(UnorderedList::new(app.authors.iter().map(author_entry)));
    }

    doc.render()
}

fn author_entry(author: &Author) -> String {
    let mut parts = vec![author.name.clone(), ":".to_string()];
    if let Some(email) = &author.email {
        parts.push(Link::new(Icon::Mail.shortcode(), format!("mailto:{email}")).to_string());
    }
    if let Some(url) = &author.url {
        parts.push(Link::new(Icon::guess(url).shortcode(), url).to_string());
    }
    parts.join(" ")
}

/// Reference page of a single command.
///
/// `group` is the name of the group the command belongs to, if any; it is
/// part of the usage line.
pub fn command_page(exec: &str, group: Option<&str>, command: &Command) -> Result<String, Error> {
    let mut usage = vec![exec.to_string()];
    usage.extend(group.map(str::to_string));
    usage.push(command.name.clone());
    usage.extend(command.arguments.iter().map(|a| format!("<{}>", a.name)));
    usage.extend(command.options.iter().map(|o| match o.short {
        Some(short) => format!("[-{}|--{}]", short, o.name),
        None => format!("[--{}]", o.name),
    }));

    let mut doc = Document::new(&command.name);
    if let Some(description) = &command.description {
        doc.add(Paragraph::new(description));
    }
    doc.add(Heading::new("Usage", 1))
        .add(ShellCommand::new(usage));

    if !command.arguments.is_empty() {
        let rows = command.arguments.iter().map(|a| {
            [
                format!("`{}`", a.name),
                a.ty.to_string(),
                a.description.clone().unwrap_or_default(),
                display_or_empty(a.example.as_ref()),
            ]
        });
        let table = Table::new(["Argument", "Type", "Description", "Example"]).with_rows(rows)?;
        doc.add(Heading::new("Arguments", 1)).add(table);
    }

    if !command.options.is_empty() {
        let rows = command.options.iter().map(|o| {
            [
                format!("`{}`", o.name),
                o.ty.to_string(),
                o.description.clone().unwrap_or_default(),
                display_or_empty(o.default.as_ref()),
                display_or_empty(o.example.as_ref()),
            ]
        });
        let table = Table::new(["Option", "Type", "Description", "Default", "Example"])
            .with_rows(rows)?;
        doc.add(Heading::new("Options", 1)).add(table);
    }

    Ok(doc.render())
}

/// One section per enumeration, each with a key/value table.
pub fn enums_page(app: &Application) -> Result<String, Error> {
    let mut doc = Document::new("Enums");
    doc.add(Paragraph::new("Enumerations used by the project."));

    for enum_object in &app.schemas.enums {
        doc.add(Heading::new(to_class_name(&enum_object.name), 1));
        if let Some(description) = &enum_object.description {
            doc.add(Paragraph::new(description));
        }

        let rows = enum_object
            .items
            .iter()
            .map(|(key, value)| [format!("`{key}`"), value.to_string()]);
        doc.add(Table::new(["Key", "Value"]).with_rows(rows)?);
    }

    Ok(doc.render())
}

fn display_or_empty(value: Option<&impl ToString>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use brandon_spec::parse_str;

    use super::*;

    const SPEC: &str = r#"
name: Deployer
version: 1.0.0
description: Ship services
authors:
  - name: Jane
    email: jane@example.com
    url: https://github.com/jane
  - name: Anonymous
schemas:
  enums:
    log_level:
      description: Verbosity
      items:
        debug: 10
        info: 20
cli:
  deploy:
    description: Deploy a service
    arguments:
      service:
        type: string
        description: Service name
        example: api
    options:
      replicas:
        type: int
        short: r
        default: 3
      dry_run:
        type: flag
"#;

    fn app() -> Application {
        parse_str(SPEC, "cli.yml").unwrap()
    }

    #[test]
    fn test_index_page() {
        assert_eq!(
            index_page(&app()),
            "# Deployer\n\nShip services\n\n## Authors\n\n\
             - Jane : [:material-mail:](mailto:jane@example.com) [:material-github:](https://github.com/jane)\n\
             - Anonymous :\n\n"
        );
    }

    #[test]
    fn test_command_page() {
        let app = app();
        let page = command_page(&app.exec, None, &app.cli.commands[0]).unwrap();

        assert_eq!(
            page,
            "# deploy\n\nDeploy a service\n\n## Usage\n\n\
             `$ deployer deploy <service> [-r|--replicas] [--dry_run]`\n\n\
             ## Arguments\n\n\
             | *Argument* | *Type* | *Description* | *Example* |\n|---|---|---|---|\n\
             | `service` | string | Service name | api |\n\n\
             ## Options\n\n\
             | *Option* | *Type* | *Description* | *Default* | *Example* |\n|---|---|---|---|---|\n\
             | `replicas` | int |  | 3 |  |\n\
             | `dry_run` | flag |  |  |  |\n\n"
        );
    }

    #[test]
    fn test_grouped_command_usage() {
        let app = parse_str(
            "name: t\nversion: 1\ndescription: d\ncli:\n  db:\n    commands:\n      migrate:\n",
            "cli.yml",
        )
        .unwrap();
        let page = command_page(&app.exec, Some("db"), &app.cli.groups[0].commands[0]).unwrap();

        assert_eq!(page, "# migrate\n\n## Usage\n\n`$ t db migrate`\n\n");
    }

    #[test]
    fn test_enums_page() {
        assert_eq!(
            enums_page(&app()).unwrap(),
            "# Enums\n\nEnumerations used by the project.\n\n## LogLevel\n\nVerbosity\n\n\
             | *Key* | *Value* |\n|---|---|\n| `debug` | 10 |\n| `info` | 20 |\n\n"
        );
    }
}
