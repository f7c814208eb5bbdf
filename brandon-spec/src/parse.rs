//! Turning a loaded document into the typed object model.

use std::str::FromStr;

use brandon_core::{ArgType, Scalar, normalize_identifier};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::debug;

use crate::{
    Application, Argument, Author, Cli, CliOption, Command, EnumObject, Group, Result, Schemas,
    context::ParseContext,
    document::{self, Format},
    error::SourceContext,
};

/// Fields every application must declare.
const REQUIRED_APP_FIELDS: [&str; 3] = ["name", "description", "version"];

/// Parse a spec document from text.
///
/// `filename` is only used for diagnostics and, through its extension, to
/// pick the document format.
pub fn parse_str(content: &str, filename: &str) -> Result<Application> {
    let source = SourceContext::new(content, filename);
    let data = document::load(&source, Format::from_path(filename))?;
    let ctx = ParseContext::from_source(source);
    parse_application(&data, &ctx)
}

/// Parse a spec document from text in a known format.
pub fn parse_str_with_format(content: &str, filename: &str, format: Format) -> Result<Application> {
    let source = SourceContext::new(content, filename);
    let data = document::load(&source, Some(format))?;
    let ctx = ParseContext::from_source(source);
    parse_application(&data, &ctx)
}

impl FromStr for Application {
    type Err = Box<crate::Error>;

    /// Parses a YAML or JSON document.
    fn from_str(s: &str) -> Result<Self> {
        parse_str(s, "<input>")
    }
}

fn parse_application(data: &Map<String, Value>, ctx: &ParseContext<'_>) -> Result<Application> {
    for field in REQUIRED_APP_FIELDS {
        if field_value(data, field).is_none() {
            return Err(ctx.missing_field("Application", field));
        }
    }

    let name = required_text(data, "name", ctx)?;
    let authors = parse_authors(data, ctx)?;
    let schemas = parse_schemas(data, ctx)?;
    let cli = parse_cli(data, ctx)?;

    Ok(Application {
        exec: normalize_identifier(&name),
        name,
        version: required_text(data, "version", ctx)?,
        description: required_text(data, "description", ctx)?,
        authors,
        tags: string_list(data, "tags", ctx)?.unwrap_or_default(),
        license: optional_text(data, "license", ctx)?,
        url: optional_text(data, "url", ctx)?,
        languages: string_list(data, "languages", ctx)?,
        cli,
        schemas,
    })
}

fn parse_authors(data: &Map<String, Value>, ctx: &ParseContext<'_>) -> Result<Vec<Author>> {
    let entries = match field_value(data, "authors") {
        None => return Ok(Vec::new()),
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(ctx.invalid_structure("authors", "a list of authors")),
    };

    let ctx = ctx.push("authors");
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let Some(author) = entry.as_object() else {
                return Err(ctx.invalid_author(index));
            };
            if field_value(author, "name").is_none() {
                return Err(ctx.invalid_author(index));
            }

            Ok(Author {
                name: required_text(author, "name", &ctx)?,
                email: optional_text(author, "email", &ctx)?,
                url: optional_text(author, "url", &ctx)?,
            })
        })
        .collect()
}

fn parse_schemas(data: &Map<String, Value>, ctx: &ParseContext<'_>) -> Result<Schemas> {
    let Some(schemas) = mapping(data, "schemas", ctx)? else {
        return Ok(Schemas::default());
    };

    let ctx = ctx.push("schemas");
    let Some(enums) = mapping(schemas, "enums", &ctx)? else {
        return Ok(Schemas::default());
    };

    let ctx = ctx.push("enums");
    let enums = enums
        .iter()
        .map(|(name, object)| parse_enum(name, object, &ctx))
        .collect::<Result<_>>()?;

    Ok(Schemas { enums })
}

fn parse_enum<'a>(name: &'a str, object: &'a Value, ctx: &ParseContext<'a>) -> Result<EnumObject> {
    debug!(name, "found enum");

    let object = entity_mapping(name, object, ctx)?;
    let ctx = ctx.push(name);

    let Some(items_value) = object.get("items") else {
        return Err(ctx.missing_enum_items(name));
    };
    let items = match items_value {
        // `items:` with nothing after it in YAML
        Value::Null => IndexMap::new(),
        Value::Object(items) => items
            .iter()
            .map(|(key, value)| match Scalar::from_json(value) {
                Some(scalar) => Ok((key.clone(), scalar)),
                None => Err(ctx.push("items").invalid_structure(key, "a scalar value")),
            })
            .collect::<Result<_>>()?,
        _ => return Err(ctx.invalid_structure("items", "a mapping")),
    };

    Ok(EnumObject {
        name: name.to_string(),
        description: optional_text(object, "description", &ctx)?,
        items,
    })
}

fn parse_cli(data: &Map<String, Value>, ctx: &ParseContext<'_>) -> Result<Cli> {
    let Some(entries) = mapping(data, "cli", ctx)? else {
        return Ok(Cli::default());
    };

    let ctx = ctx.push("cli");
    let mut cli = Cli::default();

    for (name, object) in entries {
        let object = entity_mapping(name, object, &ctx)?;
        if object.contains_key("commands") {
            cli.groups.push(parse_group(name, object, &ctx)?);
        } else {
            cli.commands.push(parse_command(name, object, &ctx)?);
        }
    }

    Ok(cli)
}

fn parse_group<'a>(
    name: &'a str,
    object: &'a Map<String, Value>,
    ctx: &ParseContext<'a>,
) -> Result<Group> {
    let group_name = normalize_identifier(name);
    debug!(group = %group_name, "found group");

    let ctx = ctx.push(name);

    // Group-level entries are parsed once and appended to every command
    let shared_arguments = parse_arguments(object, &ctx)?;
    let shared_options = parse_options(object, &ctx)?;

    let commands_ctx = ctx.push("commands");
    let commands = mapping(object, "commands", &ctx)?
        .into_iter()
        .flatten()
        .map(|(command_name, command)| {
            let command = entity_mapping(command_name, command, &commands_ctx)?;
            let mut command = parse_command(command_name, command, &commands_ctx)?;
            command.arguments.extend(shared_arguments.iter().cloned());
            command.options.extend(shared_options.iter().cloned());
            Ok(command)
        })
        .collect::<Result<_>>()?;

    Ok(Group {
        name: group_name,
        description: optional_text(object, "description", &ctx)?,
        commands,
    })
}

fn parse_command<'a>(
    name: &'a str,
    object: &'a Map<String, Value>,
    ctx: &ParseContext<'a>,
) -> Result<Command> {
    let command_name = normalize_identifier(name);
    debug!(command = %command_name, "found command");

    let ctx = ctx.push(name);

    Ok(Command {
        name: command_name,
        description: optional_text(object, "description", &ctx)?,
        arguments: parse_arguments(object, &ctx)?,
        options: parse_options(object, &ctx)?,
    })
}

fn parse_arguments<'a>(
    object: &'a Map<String, Value>,
    ctx: &ParseContext<'a>,
) -> Result<Vec<Argument>> {
    let Some(arguments) = mapping(object, "arguments", ctx)? else {
        return Ok(Vec::new());
    };

    let ctx = ctx.push("arguments");
    arguments
        .iter()
        .map(|(name, value)| parse_argument(name, value, &ctx))
        .collect()
}

fn parse_argument<'a>(name: &'a str, value: &'a Value, ctx: &ParseContext<'a>) -> Result<Argument> {
    let arg_name = normalize_identifier(name);
    let object = entity_mapping(name, value, ctx)?;
    let ty = parse_type(name, &arg_name, "argument", object, ctx)?;
    debug!(argument = %arg_name, %ty, "found argument");

    let ctx = ctx.push(name);
    Ok(Argument {
        ty,
        description: optional_text(object, "description", &ctx)?,
        example: optional_scalar(object, "example", &ctx)?,
        name: arg_name,
    })
}

fn parse_options<'a>(
    object: &'a Map<String, Value>,
    ctx: &ParseContext<'a>,
) -> Result<Vec<CliOption>> {
    let Some(options) = mapping(object, "options", ctx)? else {
        return Ok(Vec::new());
    };

    let ctx = ctx.push("options");
    options
        .iter()
        .map(|(name, value)| parse_option(name, value, &ctx))
        .collect()
}

fn parse_option<'a>(name: &'a str, value: &'a Value, ctx: &ParseContext<'a>) -> Result<CliOption> {
    let opt_name = normalize_identifier(name);
    let object = entity_mapping(name, value, ctx)?;
    let ty = parse_type(name, &opt_name, "option", object, ctx)?;
    debug!(option = %opt_name, %ty, "found option");

    let entry_ctx = ctx.push(name);
    let short = match optional_text(object, "short", &entry_ctx)? {
        None => None,
        Some(short) => {
            let mut chars = short.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c),
                _ => return Err(ctx.invalid_short(name, &opt_name, "option", &short)),
            }
        }
    };
    let ctx = entry_ctx;

    Ok(CliOption {
        ty,
        short,
        default: optional_scalar(object, "default", &ctx)?,
        description: optional_text(object, "description", &ctx)?,
        example: optional_scalar(object, "example", &ctx)?,
        name: opt_name,
    })
}

/// Resolve the mandatory `type` field against the closed type set.
fn parse_type(
    key: &str,
    name: &str,
    kind: &str,
    object: &Map<String, Value>,
    ctx: &ParseContext<'_>,
) -> Result<ArgType> {
    match field_value(object, "type") {
        None => Err(ctx.missing_type(key, name, kind)),
        Some(Value::String(ty)) => {
            ArgType::from_str(ty).map_err(|_| ctx.invalid_type(key, name, kind, ty))
        }
        Some(other) => Err(ctx.invalid_type(key, name, kind, &other.to_string())),
    }
}

/// Get a field, treating an explicit `null` the same as an absent key.
fn field_value<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|value| !value.is_null())
}

/// An optional nested mapping section (`cli`, `arguments`, `options`, ...).
fn mapping<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    ctx: &ParseContext<'_>,
) -> Result<Option<&'a Map<String, Value>>> {
    match field_value(object, key) {
        None => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => Err(ctx.invalid_structure(key, "a mapping")),
    }
}

/// The body of a named entity. An empty YAML entry (`comm2:`) is an empty mapping.
fn entity_mapping<'a>(
    name: &str,
    value: &'a Value,
    ctx: &ParseContext<'_>,
) -> Result<&'a Map<String, Value>> {
    static EMPTY: std::sync::OnceLock<Map<String, Value>> = std::sync::OnceLock::new();

    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(EMPTY.get_or_init(Map::new)),
        _ => Err(ctx.invalid_structure(name, "a mapping")),
    }
}

/// Text of a scalar field. Numbers and booleans are accepted so that
/// `version: 1.0` in YAML keeps its written form.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn required_text(object: &Map<String, Value>, key: &str, ctx: &ParseContext<'_>) -> Result<String> {
    optional_text(object, key, ctx)?.ok_or_else(|| ctx.missing_field("Application", key))
}

fn optional_text(
    object: &Map<String, Value>,
    key: &str,
    ctx: &ParseContext<'_>,
) -> Result<Option<String>> {
    field_value(object, key)
        .map(|value| scalar_text(value).ok_or_else(|| ctx.invalid_structure(key, "a string")))
        .transpose()
}

fn optional_scalar(
    object: &Map<String, Value>,
    key: &str,
    ctx: &ParseContext<'_>,
) -> Result<Option<Scalar>> {
    field_value(object, key)
        .map(|value| {
            Scalar::from_json(value).ok_or_else(|| ctx.invalid_structure(key, "a scalar value"))
        })
        .transpose()
}

fn string_list(
    object: &Map<String, Value>,
    key: &str,
    ctx: &ParseContext<'_>,
) -> Result<Option<Vec<String>>> {
    let Some(value) = field_value(object, key) else {
        return Ok(None);
    };

    value
        .as_array()
        .and_then(|items| items.iter().map(scalar_text).collect::<Option<Vec<_>>>())
        .map(Some)
        .ok_or_else(|| ctx.invalid_structure(key, "a list of strings"))
}
