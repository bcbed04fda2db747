use std::str::FromStr;

use crate::error::FilterError;

/// The kind of value an argument carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgKind {
    /// 64 bit integer.
    Int,
    /// 64 bit float.
    Float,
    /// String data.
    Data,
    /// A node handle.
    Clip,
}

impl std::fmt::Display for ArgKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            ArgKind::Int => "int",
            ArgKind::Float => "float",
            ArgKind::Data => "data",
            ArgKind::Clip => "clip",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ArgKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(ArgKind::Int),
            "float" => Ok(ArgKind::Float),
            "data" => Ok(ArgKind::Data),
            "clip" => Ok(ArgKind::Clip),
            _ => Err(format!("unknown argument type '{s}'")),
        }
    }
}

/// One declared argument of a registered function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArgSpec {
    /// The argument name.
    pub name: String,
    /// The value kind.
    pub kind: ArgKind,
    /// Whether the argument may be omitted.
    pub optional: bool,
}

/// Parse an argument signature such as `"clip:clip;radius:int:opt;"`.
///
/// Each `;` terminated entry is `name:type` optionally followed by `:opt`.
/// Names start with a letter or underscore and contain only ASCII
/// alphanumerics and underscores.
///
/// # Examples
///
/// ```
/// use vsgauss_plugin::{parse_signature, ArgKind};
///
/// let args = parse_signature("clip:clip;").unwrap();
///
/// assert_eq!(args.len(), 1);
/// assert_eq!(args[0].name, "clip");
/// assert_eq!(args[0].kind, ArgKind::Clip);
/// assert!(!args[0].optional);
/// ```
pub fn parse_signature(signature: &str) -> Result<Vec<ArgSpec>, FilterError> {
    let invalid = |reason: String| FilterError::InvalidSignature(signature.to_string(), reason);

    let mut args: Vec<ArgSpec> = Vec::new();

    for entry in signature.split(';').filter(|e| !e.is_empty()) {
        let fields = entry.split(':').collect::<Vec<_>>();

        let (name, kind, optional) = match fields.as_slice() {
            [name, kind] => (*name, *kind, false),
            [name, kind, "opt"] => (*name, *kind, true),
            [_, _, flag] => return Err(invalid(format!("unknown flag '{flag}'"))),
            _ => return Err(invalid(format!("malformed entry '{entry}'"))),
        };

        if !is_valid_name(name) {
            return Err(invalid(format!("invalid argument name '{name}'")));
        }

        if args.iter().any(|a| a.name == name) {
            return Err(invalid(format!("duplicate argument '{name}'")));
        }

        args.push(ArgSpec {
            name: name.to_string(),
            kind: kind.parse().map_err(invalid)?,
            optional,
        });
    }

    Ok(args)
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
