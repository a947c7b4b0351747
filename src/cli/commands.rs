use std::cmp::Ordering;
use std::str::FromStr;

use crate::config::Config;
use crate::domain::tag::extract_version;
use crate::domain::{
    latest, sort_by_precedence, AnyVersion, Precedence, Shape, TagPattern, Version,
    VersionWithRevision,
};
use crate::error::{Result, SemanVerError};

/// Settings shared by every command: which shape to parse and how to strip
/// tag decorations from inputs.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub shape: Shape,
    pub patterns: Vec<TagPattern>,
}

impl CommandContext {
    /// Build a context from configuration. `force_revision` overrides the
    /// configured shape with the 4-component form.
    pub fn from_config(config: &Config, force_revision: bool) -> Result<Self> {
        let shape = if force_revision {
            Shape::WithRevision
        } else {
            config.parsing.shape
        };

        Ok(CommandContext {
            shape,
            patterns: config.parsing.compiled_patterns()?,
        })
    }

    fn version_text<'a>(&self, input: &'a str) -> &'a str {
        extract_version(input, &self.patterns)
    }

    fn parse(&self, input: &str) -> Result<AnyVersion> {
        AnyVersion::parse(self.version_text(input), self.shape)
    }

    fn parse_all<T>(&self, inputs: &[String]) -> Result<Vec<T>>
    where
        T: FromStr<Err = SemanVerError>,
    {
        inputs
            .iter()
            .map(|input| self.version_text(input).parse())
            .collect()
    }
}

/// Result of the `parse` command.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseReport {
    /// The argument as given, before tag patterns were applied
    pub input: String,

    pub version: AnyVersion,
}

/// How the left version relates to the right one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Older,
    Newer,
    /// Every field matches, including build metadata
    Equal,
    /// Same precedence, but the text differs
    OrderedEqual,
}

/// Result of the `compare` command.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub left: AnyVersion,
    pub right: AnyVersion,
    pub relation: Relation,
}

pub fn parse_command(input: &str, ctx: &CommandContext) -> Result<ParseReport> {
    let version = ctx.parse(input)?;
    Ok(ParseReport {
        input: input.to_string(),
        version,
    })
}

pub fn compare_command(left: &str, right: &str, ctx: &CommandContext) -> Result<Comparison> {
    let left = ctx.parse(left)?;
    let right = ctx.parse(right)?;

    let relation = match left.compare_order(&right)? {
        Ordering::Less => Relation::Older,
        Ordering::Greater => Relation::Newer,
        Ordering::Equal if left == right => Relation::Equal,
        Ordering::Equal => Relation::OrderedEqual,
    };

    Ok(Comparison {
        left,
        right,
        relation,
    })
}

/// Parse and sort every input, oldest first (newest first with `reverse`).
/// Ties keep their input order in both directions.
pub fn sort_command(
    inputs: &[String],
    reverse: bool,
    ctx: &CommandContext,
) -> Result<Vec<AnyVersion>> {
    match ctx.shape {
        Shape::Standard => Ok(sorted(ctx.parse_all::<Version>(inputs)?, reverse)),
        Shape::WithRevision => Ok(sorted(
            ctx.parse_all::<VersionWithRevision>(inputs)?,
            reverse,
        )),
    }
}

/// The newest of the inputs, or `None` when there are no inputs.
pub fn latest_command(inputs: &[String], ctx: &CommandContext) -> Result<Option<AnyVersion>> {
    match ctx.shape {
        Shape::Standard => {
            let versions = ctx.parse_all::<Version>(inputs)?;
            Ok(latest(&versions).cloned().map(AnyVersion::from))
        }
        Shape::WithRevision => {
            let versions = ctx.parse_all::<VersionWithRevision>(inputs)?;
            Ok(latest(&versions).cloned().map(AnyVersion::from))
        }
    }
}

fn sorted<T>(mut versions: Vec<T>, reverse: bool) -> Vec<AnyVersion>
where
    T: Precedence + Into<AnyVersion>,
{
    if reverse {
        versions.sort_by(|a, b| b.compare_order(a));
    } else {
        sort_by_precedence(&mut versions);
    }
    versions.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> CommandContext {
        CommandContext::from_config(&Config::default(), false).unwrap()
    }

    #[test]
    fn test_context_shape_override() {
        let ctx = CommandContext::from_config(&Config::default(), true).unwrap();
        assert_eq!(ctx.shape, Shape::WithRevision);
    }

    #[test]
    fn test_parse_strips_tag_prefix() {
        let report = parse_command("v1.2.3-rc1", &ctx()).unwrap();
        assert_eq!(report.input, "v1.2.3-rc1");
        assert_eq!(report.version.numeric_core(), &[1, 2, 3]);
        assert_eq!(report.version.pre_release(), "rc1");
    }

    #[test]
    fn test_compare_relations() {
        let ctx = ctx();
        let cases = [
            ("1.0.0-alpha1", "1.0.0", Relation::Older),
            ("1.0.1", "1.0.0", Relation::Newer),
            ("1.0.0+abc", "1.0.0+abc", Relation::Equal),
            ("1.0.0+abc", "1.0.0", Relation::OrderedEqual),
            ("1.0.0-alpha1", "1.0.0-beta1", Relation::OrderedEqual),
        ];
        for (left, right, expected) in cases {
            let comparison = compare_command(left, right, &ctx).unwrap();
            assert_eq!(comparison.relation, expected, "{left} vs {right}");
        }
    }

    #[test]
    fn test_sort_reverse_keeps_ties_stable() {
        let inputs: Vec<String> = ["1.0.0-beta1", "0.9.0", "1.0.0-alpha1", "1.0.0"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let ascending: Vec<String> = sort_command(&inputs, false, &ctx())
            .unwrap()
            .iter()
            .map(|v| v.to_string())
            .collect();
        assert_eq!(
            ascending,
            vec!["0.9.0", "1.0.0-beta1", "1.0.0-alpha1", "1.0.0"]
        );

        let descending: Vec<String> = sort_command(&inputs, true, &ctx())
            .unwrap()
            .iter()
            .map(|v| v.to_string())
            .collect();
        assert_eq!(
            descending,
            vec!["1.0.0", "1.0.0-beta1", "1.0.0-alpha1", "0.9.0"]
        );
    }

    #[test]
    fn test_latest_empty_inputs() {
        assert_eq!(latest_command(&[], &ctx()).unwrap(), None);
    }
}
