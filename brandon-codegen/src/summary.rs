//! Plaintext usage summary of an application.

use brandon_spec::Application;

/// Extra padding between the widest command line and the descriptions.
const COLUMN_GAP: usize = 5;

/// Render a short usage summary: header, usage line, one line per group and
/// ungrouped command, then the authors.
pub fn summary(app: &Application) -> String {
    let mut lines = vec![
        format!("{} - {}", app.name, app.description),
        String::new(),
        format!("Usage:\n    {} [command]", app.exec),
        String::new(),
        "Commands:".to_string(),
    ];

    let groups = app.cli.groups.iter().map(|group| {
        let commands: Vec<&str> = group.commands.iter().map(|c| c.name.as_str()).collect();
        (
            format!("    {} {} {}", app.exec, group.name, commands.join("|")),
            group.description.as_deref(),
        )
    });
    let commands = app.cli.commands.iter().map(|command| {
        (
            format!("    {} {}", app.exec, command.name),
            command.description.as_deref(),
        )
    });
    let entries: Vec<(String, Option<&str>)> = groups.chain(commands).collect();

    let width = entries.iter().map(|(line, _)| line.len()).max().unwrap_or(0) + COLUMN_GAP;
    for (line, description) in &entries {
        let description = description.unwrap_or_default();
        lines.push(format!("{line:<width$}{description}").trim_end().to_string());
    }

    lines.push(String::new());
    lines.push("Authors:".to_string());
    for author in &app.authors {
        match &author.email {
            Some(email) => lines.push(format!("    {} <{}>", author.name, email)),
            None => lines.push(format!("    {}", author.name)),
        }
    }

    lines.join("\n")
}
