//! Command dispatch
//!
//! Resolution order: built-in commands, then list parsers declared in the
//! session, then `\the<counter>`.

use tracing::trace;

use super::expansion::Expansion;
use super::macros::ArgumentSource;
use super::{counters, etoolbox};
use crate::core::session::Session;
use crate::data::commands::{lookup_command, Command};
use crate::utils::error::{StateError, StateResult};

/// Run the command `name` (without backslash)
pub fn execute(
    session: &mut Session,
    name: &str,
    args: &mut dyn ArgumentSource,
) -> StateResult<Expansion> {
    let command = format!("\\{}", name);

    if let Some(cmd) = lookup_command(name) {
        trace!(%command, ?cmd, "dispatch");
        return run(session, cmd, &command, args);
    }

    if let Some(parser) = session.list_parser(name).cloned() {
        trace!(%command, separator = %parser.separator, "list parser");
        return etoolbox::expand_list_parser(session, &parser, &command, args);
    }

    if let Some(counter) = name.strip_prefix("the") {
        if session.counters().contains(counter) {
            trace!(%command, counter, "counter representation");
            return counters::the_counter(session, counter);
        }
    }

    Err(StateError::UnknownCommand(command))
}

fn run(
    session: &mut Session,
    cmd: Command,
    command: &str,
    args: &mut dyn ArgumentSource,
) -> StateResult<Expansion> {
    match cmd {
        Command::NewCounter => counters::new_counter(session, command, args),
        Command::SetCounter => counters::set_counter(session, command, args),
        Command::StepCounter => counters::step_counter(session, command, args),
        Command::AddToCounter => counters::add_to_counter(session, command, args),
        Command::Format(style, uppercase) => {
            counters::format_counter(session, command, args, style, uppercase)
        }
        Command::CounterWithin => counters::counter_within(session, command, args),
        Command::CounterWithout => counters::counter_without(session, command, args),
        Command::Value => counters::value(session, command, args),
        Command::Number => counters::number(command, args),
        Command::RomanNumeral => counters::roman_numeral(command, args),

        Command::DefCounter => etoolbox::def_counter(session, command, args),
        Command::NewFlag(kind, strict) => etoolbox::new_flag(session, command, args, kind, strict),
        Command::SetFlag(kind, value) => etoolbox::set_flag(session, command, args, kind, value),
        Command::IfFlag(kind, negate) => etoolbox::if_flag(session, command, args, kind, negate),
        Command::IfDefCounter => etoolbox::if_def_counter(session, command, args),
        Command::IfStrEqual => etoolbox::if_str_equal(command, args),
        Command::IfBlank { trim, negate } => etoolbox::if_blank(command, args, trim, negate),
        Command::IfNumComp(relation) => etoolbox::if_num_comp(session, command, args, relation),
        Command::IfNumParity(parity) => etoolbox::if_num_parity(session, command, args, parity),
        Command::ListAdd => etoolbox::list_add(session, command, args),
        Command::ListRemove => etoolbox::list_remove(session, command, args),
        Command::IfInList => etoolbox::if_in_list(session, command, args),
        Command::DoListLoop => etoolbox::do_list_loop(session, command, args),
        Command::ForListLoop => etoolbox::for_list_loop(session, command, args),
        Command::DeclareListParser => etoolbox::declare_list_parser(session, command, args),
    }
}
