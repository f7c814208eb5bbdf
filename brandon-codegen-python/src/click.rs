//! click declarations shared by the package and single-script layouts.
//!
//! A group `g` becomes a `g_group` function decorated with `@click.group`,
//! each of its commands a handler decorated with `@g_group.command`.
//! Ungrouped commands hang off the root `cli` group.

use brandon_codegen::language::TypeMapper;
use brandon_core::ArgType;
use brandon_spec::{Argument, CliOption, Command, EnumObject, Group};

use crate::{
    PYTHON_NAMING, PythonTypeMapper,
    ast::{Decorator, EnumClass, Function, Statements},
    type_mapper::string_literal,
};

/// Name of the root click group.
pub const ROOT_GROUP: &str = "cli";

/// Python name of the function implementing a group.
pub fn group_function_name(group: &Group) -> String {
    PYTHON_NAMING.safe_name(&format!("{}_group", group.name))
}

/// `@click.group(...)` function for a group.
pub fn group_function(group: &Group) -> Function {
    let mut decorator = Decorator::call("click.group").kwarg("name", string_literal(&group.name));
    if let Some(description) = &group.description {
        decorator = decorator.kwarg("help", string_literal(description));
    }

    Function::new(group_function_name(group))
        .decorator(decorator)
        .docstring(format!("`{}` command group", group.name))
}

/// The root group every other command and group is attached to.
pub fn root_function() -> Function {
    Function::new(ROOT_GROUP)
        .decorator(Decorator::call("click.group"))
        .docstring("CLI entry point")
}

/// Handler of `command`, registered on the group function named `owner`.
pub fn command_function(owner: &str, command: &Command) -> Function {
    let mut decorator = Decorator::call(format!("{owner}.command"))
        .kwarg("name", string_literal(&command.name));
    if let Some(description) = &command.description {
        decorator = decorator.kwarg("help", string_literal(description));
    }

    let params = command
        .arguments
        .iter()
        .map(|a| PYTHON_NAMING.safe_name(&a.name))
        .chain(command.options.iter().map(|o| PYTHON_NAMING.safe_name(&o.name)));

    Function::new(PYTHON_NAMING.safe_name(&command.name))
        .decorator(decorator)
        .decorators(command.arguments.iter().map(argument_decorator))
        .decorators(command.options.iter().map(option_decorator))
        .params(params)
        .docstring(format!("`{}` command handler", command.name))
}

fn argument_decorator(argument: &Argument) -> Decorator {
    Decorator::call("click.argument")
        .arg(string_literal(&PYTHON_NAMING.safe_name(&argument.name)))
        .kwarg("type", PythonTypeMapper.map_arg_type(argument.ty))
}

fn option_decorator(option: &CliOption) -> Decorator {
    let mut decorator = Decorator::call("click.option");
    if let Some(short) = option.short {
        decorator = decorator.arg(string_literal(&format!("-{short}")));
    }
    decorator = decorator
        .arg(string_literal(&format!("--{}", option.name)))
        .arg(string_literal(&PYTHON_NAMING.safe_name(&option.name)));

    decorator = match option.ty {
        ArgType::Flag => decorator.kwarg("is_flag", "True"),
        ty => decorator.kwarg("type", PythonTypeMapper.map_arg_type(ty)),
    };
    if let Some(default) = &option.default {
        decorator = decorator.kwarg("default", PythonTypeMapper.map_literal(default));
    }
    if let Some(description) = &option.description {
        decorator = decorator.kwarg("help", string_literal(description));
    }
    decorator
}

/// `cli.add_command(...)` lines attaching every group to the root group.
pub fn add_group_commands(groups: &[Group]) -> Statements {
    Statements::new(
        groups
            .iter()
            .map(|group| format!("{ROOT_GROUP}.add_command({})", group_function_name(group))),
    )
}

/// `Enum` class for an enumeration.
pub fn enum_class(enum_object: &EnumObject) -> EnumClass {
    let mut class = EnumClass::new(PYTHON_NAMING.type_name(&enum_object.name));
    if let Some(description) = &enum_object.description {
        class = class.docstring(description);
    }
    for (key, value) in &enum_object.items {
        class = class.member(
            PYTHON_NAMING.member_name(key),
            PythonTypeMapper.map_literal(value),
        );
    }
    class
}

#[cfg(test)]
mod tests {
    use brandon_codegen::builder::CodeBuilder;
    use brandon_core::Scalar;

    use super::*;

    fn render(function: &Function) -> String {
        let mut builder = CodeBuilder::python();
        builder.emit(function);
        builder.build()
    }

    fn option(name: &str, ty: ArgType) -> CliOption {
        CliOption {
            name: name.to_string(),
            ty,
            short: None,
            default: None,
            description: None,
            example: None,
        }
    }

    #[test]
    fn test_option_decorators() {
        let verbose = CliOption {
            short: Some('v'),
            description: Some("Verbose output".to_string()),
            ..option("verbose", ArgType::Flag)
        };
        let retries = CliOption {
            default: Some(Scalar::Int(3)),
            ..option("retries", ArgType::Int)
        };

        assert_eq!(
            option_decorator(&verbose).to_string(),
            "@click.option(\"-v\", \"--verbose\", \"verbose\", is_flag=True, help=\"Verbose output\")"
        );
        assert_eq!(
            option_decorator(&retries).to_string(),
            "@click.option(\"--retries\", \"retries\", type=int, default=3)"
        );
    }

    #[test]
    fn test_command_function() {
        let command = Command {
            name: "import".to_string(),
            description: Some("Import data".to_string()),
            arguments: vec![Argument {
                name: "source".to_string(),
                ty: ArgType::String,
                description: None,
                example: None,
            }],
            options: vec![option("dry_run", ArgType::Flag)],
        };

        assert_eq!(
            render(&command_function("data_group", &command)),
            "@data_group.command(name=\"import\", help=\"Import data\")\n\
             @click.argument(\"source\", type=str)\n\
             @click.option(\"--dry_run\", \"dry_run\", is_flag=True)\n\
             def _import(source, dry_run):\n    \"\"\"`import` command handler\"\"\"\n"
        );
    }

    #[test]
    fn test_group_without_description() {
        let group = Group {
            name: "db".to_string(),
            description: None,
            commands: Vec::new(),
        };

        assert_eq!(
            render(&group_function(&group)),
            "@click.group(name=\"db\")\ndef db_group():\n    \"\"\"`db` command group\"\"\"\n"
        );
    }
}
