//! Counter package commands
//!
//! `\newcounter`, `\setcounter`, `\stepcounter`, the numeral formatters and
//! `\counterwithin`/`\counterwithout`.

use super::expansion::Expansion;
use super::macros::{parse_int, ArgumentSource};
use crate::core::session::Session;
use crate::data::numerals::{to_roman, NumeralStyle};
use crate::utils::error::{StateError, StateResult};

/// Read a counter name argument and check that the counter exists
pub(crate) fn counter_argument(
    session: &Session,
    command: &str,
    args: &mut dyn ArgumentSource,
) -> StateResult<String> {
    let raw = args.argument(command)?;
    let name = raw.trim();
    session.counters().id(name)?;
    Ok(name.to_string())
}

/// `\newcounter{name}[resetBy]`
pub fn new_counter(
    session: &mut Session,
    command: &str,
    args: &mut dyn ArgumentSource,
) -> StateResult<Expansion> {
    let raw = args.argument(command)?;
    if raw.trim() == "[" {
        return Err(StateError::InvalidArgumentOrder(command.to_string()));
    }
    let name = session.name(&raw, command, false)?;

    let reset_by = args.bracket_argument(command, "")?;
    let reset_by = match reset_by.trim() {
        "" => None,
        raw => Some(session.name(raw, command, false)?),
    };

    session
        .counters_mut()
        .create(&name, reset_by.as_deref(), 0)?;
    Ok(Expansion::Nothing)
}

/// `\setcounter{c}{n}`
pub fn set_counter(
    session: &mut Session,
    command: &str,
    args: &mut dyn ArgumentSource,
) -> StateResult<Expansion> {
    let name = counter_argument(session, command, args)?;
    let value = parse_int(&args.argument(command)?)?;
    session.counters_mut().set_value(&name, value)?;
    Ok(Expansion::Nothing)
}

/// `\addtocounter{c}{n}`
pub fn add_to_counter(
    session: &mut Session,
    command: &str,
    args: &mut dyn ArgumentSource,
) -> StateResult<Expansion> {
    let name = counter_argument(session, command, args)?;
    let delta = parse_int(&args.argument(command)?)?;
    session.counters_mut().add_to(&name, delta)?;
    Ok(Expansion::Nothing)
}

/// `\stepcounter{c}`
pub fn step_counter(
    session: &mut Session,
    command: &str,
    args: &mut dyn ArgumentSource,
) -> StateResult<Expansion> {
    let name = counter_argument(session, command, args)?;
    session.counters_mut().step(&name)?;
    Ok(Expansion::Nothing)
}

/// `\arabic`, `\roman`, `\Roman`, `\alph`, `\Alph` and `\fnsymbol`
pub fn format_counter(
    session: &mut Session,
    command: &str,
    args: &mut dyn ArgumentSource,
    style: NumeralStyle,
    uppercase: bool,
) -> StateResult<Expansion> {
    let name = counter_argument(session, command, args)?;
    let formatted = style.format(session.counters().value(&name)?)?;
    let output = if uppercase {
        formatted.to_uppercase()
    } else {
        formatted.to_lowercase()
    };
    Ok(Expansion::formatted(output))
}

/// `\counterwithin[*]{c}{super}`; the starred form keeps `\the<c>` as it is
pub fn counter_within(
    session: &mut Session,
    command: &str,
    args: &mut dyn ArgumentSource,
) -> StateResult<Expansion> {
    let update_render = !args.star(command);
    let name = counter_argument(session, command, args)?;
    let within = counter_argument(session, command, args)?;
    session.counters_mut().within(&name, &within, update_render)?;
    Ok(Expansion::Nothing)
}

/// `\counterwithout{c}{super}`
pub fn counter_without(
    session: &mut Session,
    command: &str,
    args: &mut dyn ArgumentSource,
) -> StateResult<Expansion> {
    let name = counter_argument(session, command, args)?;
    let within = counter_argument(session, command, args)?;
    session.counters_mut().without(&name, &within)?;
    Ok(Expansion::Nothing)
}

/// `\value{c}`
pub fn value(
    session: &mut Session,
    command: &str,
    args: &mut dyn ArgumentSource,
) -> StateResult<Expansion> {
    let name = counter_argument(session, command, args)?;
    Ok(Expansion::Number(session.counters().value(&name)?))
}

/// `\number{n}`
pub fn number(command: &str, args: &mut dyn ArgumentSource) -> StateResult<Expansion> {
    let n = parse_int(&args.argument(command)?)?;
    Ok(Expansion::Math(n.to_string()))
}

/// `\romannumeral{n}`
pub fn roman_numeral(command: &str, args: &mut dyn ArgumentSource) -> StateResult<Expansion> {
    let n = parse_int(&args.argument(command)?)?;
    Ok(Expansion::Text(to_roman(n)?.to_lowercase()))
}

/// `\the<c>`
pub fn the_counter(session: &Session, name: &str) -> StateResult<Expansion> {
    Ok(Expansion::Math(session.counters().render(name)?))
}
