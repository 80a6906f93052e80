//! etoolbox commands
//!
//! Flags, conditionals, counter arithmetic and lists. Every conditional reads
//! its `{true}{false}` branches after the tested arguments and returns an
//! [`Expansion::Branch`].

use super::counters::counter_argument;
use super::expansion::Expansion;
use super::macros::ArgumentSource;
use crate::core::flags::{parse_flag_value, FlagKind};
use crate::core::lists::separate;
use crate::core::session::{ListLoop, ListParser, Session};
use crate::data::commands::{Parity, Relation};
use crate::utils::error::{StateError, StateResult};

/// Read the two branch arguments of a conditional
fn branch(
    command: &str,
    args: &mut dyn ArgumentSource,
    condition: bool,
) -> StateResult<Expansion> {
    let if_true = args.argument(command)?;
    let if_false = args.argument(command)?;
    Ok(Expansion::Branch {
        condition,
        if_true,
        if_false,
    })
}

/// `\do{a}\do{b}...`
fn loop_tokens(handler: &str, items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("\\{}{{{}}}", handler, item))
        .collect()
}

/// `\defcounter{c}{expr}`
pub fn def_counter(
    session: &mut Session,
    command: &str,
    args: &mut dyn ArgumentSource,
) -> StateResult<Expansion> {
    let name = counter_argument(session, command, args)?;
    let value = session.numexpr(&args.argument(command)?)?;
    session.counters_mut().set_value(&name, value)?;
    Ok(Expansion::Nothing)
}

/// `\newbool`, `\providebool`, `\newtoggle`, `\providetoggle`
pub fn new_flag(
    session: &mut Session,
    command: &str,
    args: &mut dyn ArgumentSource,
    kind: FlagKind,
    error_if_defined: bool,
) -> StateResult<Expansion> {
    let name = session.name(&args.argument(command)?, command, false)?;
    session.flags_mut().create(kind, &name, error_if_defined)?;
    Ok(Expansion::Nothing)
}

/// `\setbool`/`\settoggle` when `value` is `None`, otherwise
/// `\booltrue`, `\boolfalse`, `\toggletrue`, `\togglefalse`
pub fn set_flag(
    session: &mut Session,
    command: &str,
    args: &mut dyn ArgumentSource,
    kind: FlagKind,
    value: Option<bool>,
) -> StateResult<Expansion> {
    let name = session.name(&args.argument(command)?, command, false)?;
    let value = match value {
        Some(value) => value,
        None => parse_flag_value(args.argument(command)?.trim())?,
    };
    session.flags_mut().set(kind, &name, value)?;
    Ok(Expansion::Nothing)
}

/// `\ifbool`, `\notbool`, `\iftoggle`, `\nottoggle`
pub fn if_flag(
    session: &mut Session,
    command: &str,
    args: &mut dyn ArgumentSource,
    kind: FlagKind,
    negate: bool,
) -> StateResult<Expansion> {
    let name = session.name(&args.argument(command)?, command, false)?;
    let value = session.flags().get(kind, &name)?;
    branch(command, args, value != negate)
}

/// `\ifdefcounter`, `\ifcscounter`, `\ifltxcounter`
pub fn if_def_counter(
    session: &mut Session,
    command: &str,
    args: &mut dyn ArgumentSource,
) -> StateResult<Expansion> {
    let name = session.name(&args.argument(command)?, command, false)?;
    let defined = session.counters().contains(&name);
    branch(command, args, defined)
}

/// `\ifstrequal{a}{b}`
pub fn if_str_equal(command: &str, args: &mut dyn ArgumentSource) -> StateResult<Expansion> {
    let a = args.argument(command)?;
    let b = args.argument(command)?;
    branch(command, args, a == b)
}

/// `\ifstrempty`, `\ifblank`, `\notblank`
pub fn if_blank(
    command: &str,
    args: &mut dyn ArgumentSource,
    trim: bool,
    negate: bool,
) -> StateResult<Expansion> {
    let text = args.argument(command)?;
    let text = if trim { text.trim() } else { text.as_str() };
    let empty = text.is_empty();
    branch(command, args, empty != negate)
}

/// `\ifnumcomp{a}{rel}{b}` and its fixed-relation aliases
pub fn if_num_comp(
    session: &mut Session,
    command: &str,
    args: &mut dyn ArgumentSource,
    relation: Option<Relation>,
) -> StateResult<Expansion> {
    let a = session.numexpr(&args.argument(command)?)?;
    let symbol = match relation {
        Some(_) => String::new(),
        None => args.argument(command)?,
    };
    let b = session.numexpr(&args.argument(command)?)?;

    let relation = match relation {
        Some(relation) => relation,
        None => Relation::parse(&symbol).ok_or(StateError::InvalidRelation(symbol))?,
    };
    branch(command, args, relation.holds(a, b))
}

/// `\ifnumeven`, `\ifnumodd`
pub fn if_num_parity(
    session: &mut Session,
    command: &str,
    args: &mut dyn ArgumentSource,
    parity: Parity,
) -> StateResult<Expansion> {
    let n = session.numexpr(&args.argument(command)?)?;
    let even = n.rem_euclid(2) == 0;
    branch(command, args, even == (parity == Parity::Even))
}

/// `\listadd{list}{item}`, defining the list on first use
pub fn list_add(
    session: &mut Session,
    command: &str,
    args: &mut dyn ArgumentSource,
) -> StateResult<Expansion> {
    let list = session.name(&args.argument(command)?, command, false)?;
    let item = args.argument(command)?;
    let lists = session.lists_mut();
    lists.create(&list, false)?;
    lists.add(&list, &item)?;
    Ok(Expansion::Nothing)
}

/// `\listremove{list}{item}`
pub fn list_remove(
    session: &mut Session,
    command: &str,
    args: &mut dyn ArgumentSource,
) -> StateResult<Expansion> {
    let list = session.name(&args.argument(command)?, command, false)?;
    let item = args.argument(command)?;
    session.lists_mut().remove(&list, &item)?;
    Ok(Expansion::Nothing)
}

/// `\ifinlist{item}{list}`
pub fn if_in_list(
    session: &mut Session,
    command: &str,
    args: &mut dyn ArgumentSource,
) -> StateResult<Expansion> {
    let item = args.argument(command)?;
    let list = session.name(&args.argument(command)?, command, false)?;
    let found = session.lists().contains(&list, &item)?;
    branch(command, args, found)
}

/// `\dolistloop{list}`
pub fn do_list_loop(
    session: &mut Session,
    command: &str,
    args: &mut dyn ArgumentSource,
) -> StateResult<Expansion> {
    let list = session.name(&args.argument(command)?, command, false)?;
    let items = session.lists().get(&list)?;
    Ok(Expansion::Tokens(loop_tokens("do", items)))
}

/// `\forlistloop{\handler}{list}`
pub fn for_list_loop(
    session: &mut Session,
    command: &str,
    args: &mut dyn ArgumentSource,
) -> StateResult<Expansion> {
    let handler = session.name(&args.argument(command)?, command, true)?;
    let list = session.name(&args.argument(command)?, command, false)?;
    let items = session.lists().get(&list)?;
    Ok(Expansion::Tokens(loop_tokens(&handler, items)))
}

/// `\DeclareListParser[*]{\cs}{separator}`
pub fn declare_list_parser(
    session: &mut Session,
    command: &str,
    args: &mut dyn ArgumentSource,
) -> StateResult<Expansion> {
    let mode = if args.star(command) {
        ListLoop::Handler
    } else {
        ListLoop::Do
    };
    let name = session.name(&args.argument(command)?, command, true)?;
    let separator = args.argument(command)?;
    session.declare_list_parser(&name, &separator, mode);
    Ok(Expansion::Nothing)
}

/// Invocation of a declared list parser: `\cs{text}`, or `\cs{\handler}{text}`
/// for a starred declaration
pub fn expand_list_parser(
    session: &Session,
    parser: &ListParser,
    command: &str,
    args: &mut dyn ArgumentSource,
) -> StateResult<Expansion> {
    let handler = match parser.mode {
        ListLoop::Do => "do".to_string(),
        ListLoop::Handler => session.name(&args.argument(command)?, command, true)?,
    };
    let items = separate(&args.argument(command)?, &parser.separator)?;
    Ok(Expansion::Tokens(loop_tokens(&handler, &items)))
}
