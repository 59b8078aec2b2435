use std::env;
use std::fmt;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::process::exit;

use thiserror::Error;

const EXPRESSION_DEFINITIONS: [&str; 4] = [
    "Binary   : left Box<Expression>, operator Token, right Box<Expression>",
    "Grouping : expression Box<Expression>",
    "Literal  : value Literal",
    "Unary    : operator Token, right Box<Expression>",
];

#[derive(Debug, Error)]
enum GenerateError {
    #[error("Malformed definition '{0}'.")]
    MalformedDefinition(String),
    #[error("Could not render definition: {0}")]
    Render(#[from] fmt::Error),
    #[error("Could not write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, PartialEq, Eq)]
struct Definition<'def> {
    name: &'def str,
    fields: Vec<(&'def str, &'def str)>,
}

impl<'def> Definition<'def> {
    /// Parses `Name : field Type, field Type, ...`.
    fn parse(def: &'def str) -> Result<Self, GenerateError> {
        let malformed = || GenerateError::MalformedDefinition(def.trim().to_owned());
        let (name, members) = def.split_once(':').ok_or_else(malformed)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(malformed());
        }
        let mut fields = Vec::new();
        for member in members.split(',') {
            let (field, ty) = member
                .trim()
                .split_once(char::is_whitespace)
                .ok_or_else(malformed)?;
            let ty = ty.trim();
            if field.is_empty() || ty.is_empty() {
                return Err(malformed());
            }
            fields.push((field, ty));
        }
        Ok(Self { name, fields })
    }

    fn render(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();
        let name = self.name;
        writeln!(out, "// Generated by generate_ast.\n")?;
        writeln!(out, "pub struct {name} {{")?;
        for (field, ty) in &self.fields {
            writeln!(out, "    pub {field}: {ty},")?;
        }
        writeln!(out, "}}\n")?;

        let parameters = self
            .fields
            .iter()
            .map(|(field, ty)| format!("{field}: {ty}"))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "impl {name} {{")?;
        writeln!(out, "    pub fn new({parameters}) -> Self {{")?;
        writeln!(out, "        Self {{")?;
        for (field, _) in &self.fields {
            writeln!(out, "            {field},")?;
        }
        writeln!(out, "        }}")?;
        writeln!(out, "    }}")?;
        writeln!(out, "}}")?;
        Ok(out)
    }
}

fn generate_ast(output_dir: &Path, defs: &[&str]) -> Result<(), GenerateError> {
    // Parse everything before touching the filesystem.
    let definitions = defs
        .iter()
        .map(|def| Definition::parse(def))
        .collect::<Result<Vec<_>, _>>()?;
    for definition in definitions {
        let path = output_dir.join(format!("{}.rs", to_snake(definition.name)));
        fs::write(&path, definition.render()?).map_err(|source| GenerateError::Write {
            path: path.display().to_string(),
            source,
        })?;
    }
    Ok(())
}

/// `BinaryOp` -> `binary_op`, `HTTPServer` -> `http_server`.
fn to_snake(name: &str) -> String {
    let chars = name.chars().collect::<Vec<char>>();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_uppercase() {
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let prev_lower = chars[i - 1].is_lowercase();
            if next_lower || prev_lower {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }
    out
}

fn main() {
    let args = env::args().collect::<Vec<String>>();
    let Some(output_dir) = args.get(1) else {
        eprintln!("Expected output directory argument to be provided.");
        exit(64);
    };
    if let Err(err) = generate_ast(Path::new(output_dir), &EXPRESSION_DEFINITIONS) {
        eprintln!("{err}");
        exit(74);
    }
}
