use pest::Parser;

#[derive(pest_derive::Parser)]
#[grammar = "listener.pest"]
struct ListenerParser;

/// Recover the assigned expression from a two-way-binding update listener,
/// e.g. `count` from `($event) => count = $event`.
///
/// Only a single-parameter arrow function whose whole body assigns that
/// parameter is understood. Anything else returns `None`.
pub fn assignment_target(source: &str) -> Option<&str> {
    let mut pairs = ListenerParser::parse(Rule::listener, source.trim()).ok()?;
    let listener = pairs.next()?;
    listener
        .into_inner()
        .find(|p| p.as_rule() == Rule::target)
        .map(|p| p.as_str().trim())
        .filter(|t| !t.is_empty())
}
