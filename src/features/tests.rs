use super::*;
use crate::core::flags::FlagKind;
use crate::core::session::{Session, SessionOptions};
use pretty_assertions::assert_eq;

fn run(session: &mut Session, name: &str, args: &str) -> Expansion {
    session
        .invoke(name, args)
        .unwrap_or_else(|e| panic!("\\{}{} failed: {}", name, args, e))
}

fn error_kind(session: &mut Session, name: &str, args: &str) -> &'static str {
    session.invoke(name, args).unwrap_err().kind()
}

fn text(s: &str) -> Expansion {
    Expansion::Text(s.to_string())
}

fn math(s: &str) -> Expansion {
    Expansion::Math(s.to_string())
}

fn tokens(s: &str) -> Expansion {
    Expansion::Tokens(s.to_string())
}

fn selected(expansion: Expansion) -> String {
    expansion
        .selected()
        .map(str::to_string)
        .unwrap_or_else(|| panic!("not a branch: {:?}", expansion))
}

fn chapters() -> Session {
    let mut session = Session::new();
    run(&mut session, "newcounter", "{chapter}");
    run(&mut session, "newcounter", "{section}[chapter]");
    run(&mut session, "newcounter", "{subsection}[section]");
    session
}

// ============================================================================
// Counter package
// ============================================================================

#[test]
fn test_newcounter_with_reset_by() {
    let mut session = chapters();
    run(&mut session, "setcounter", "{section}{4}");
    run(&mut session, "setcounter", "{subsection}{2}");
    run(&mut session, "stepcounter", "{chapter}");

    assert_eq!(run(&mut session, "value", "{chapter}"), Expansion::Number(1));
    assert_eq!(run(&mut session, "value", "{section}"), Expansion::Number(0));
    assert_eq!(run(&mut session, "value", "{subsection}"), Expansion::Number(0));
}

#[test]
fn test_newcounter_reset_by_control_sequence() {
    let mut session = chapters();
    run(&mut session, "newcounter", "{figure}[\\chapter]");
    run(&mut session, "newcounter", "{table}[ chapter ]");
    run(&mut session, "setcounter", "{figure}{3}");
    run(&mut session, "setcounter", "{table}{5}");
    run(&mut session, "stepcounter", "{chapter}");

    assert_eq!(run(&mut session, "value", "{figure}"), Expansion::Number(0));
    assert_eq!(run(&mut session, "value", "{table}"), Expansion::Number(0));
}

#[test]
fn test_newcounter_errors() {
    let mut session = chapters();
    assert_eq!(error_kind(&mut session, "newcounter", "{chapter}"), "DuplicateCounter");
    assert_eq!(error_kind(&mut session, "newcounter", "[chapter]{x}"), "InvalidArgumentOrder");
    assert_eq!(error_kind(&mut session, "newcounter", "{x}[part]"), "UndefinedCounter");
    assert_eq!(
        error_kind(&mut session, "newcounter", "{sec2}"),
        "IllegalControlSequenceName"
    );
    assert_eq!(
        error_kind(&mut session, "newcounter", "{sub}[sec2]"),
        "IllegalControlSequenceName"
    );
    assert!(!session.counters().contains("x"));
    assert!(!session.counters().contains("sub"));
}

#[test]
fn test_lenient_session_accepts_any_counter_name() {
    let mut session = Session::with_options(SessionOptions::lenient());
    run(&mut session, "newcounter", "{sec2}");
    run(&mut session, "stepcounter", "{sec2}");
    assert_eq!(run(&mut session, "value", "{sec2}"), Expansion::Number(1));
}

#[test]
fn test_setcounter_reads_leading_integer() {
    let mut session = chapters();
    run(&mut session, "setcounter", "{chapter}{12pt}");
    assert_eq!(run(&mut session, "value", "{chapter}"), Expansion::Number(12));
    run(&mut session, "addtocounter", "{chapter}{-5}");
    assert_eq!(run(&mut session, "value", "{chapter}"), Expansion::Number(7));

    assert_eq!(error_kind(&mut session, "setcounter", "{chapter}{x}"), "InvalidNumber");
    assert_eq!(error_kind(&mut session, "setcounter", "{nope}{1}"), "UndefinedCounter");
}

#[test]
fn test_formatting_commands() {
    let mut session = chapters();
    run(&mut session, "setcounter", "{chapter}{14}");

    assert_eq!(run(&mut session, "arabic", "{chapter}"), math("14"));
    assert_eq!(run(&mut session, "roman", "{chapter}"), text("xiv"));
    assert_eq!(run(&mut session, "Roman", "{chapter}"), text("XIV"));
    assert_eq!(run(&mut session, "alph", "{chapter}"), text("n"));
    assert_eq!(run(&mut session, "Alph", "{chapter}"), text("N"));
    assert_eq!(run(&mut session, "fnsymbol", "{chapter}"), text(""));

    run(&mut session, "setcounter", "{chapter}{2}");
    assert_eq!(run(&mut session, "fnsymbol", "{chapter}"), math("\u{2020}"));
}

#[test]
fn test_the_counter() {
    let mut session = chapters();
    run(&mut session, "counterwithin", "{section}{chapter}");
    run(&mut session, "stepcounter", "{chapter}");
    run(&mut session, "stepcounter", "{section}");
    run(&mut session, "stepcounter", "{section}");

    assert_eq!(run(&mut session, "thesection", ""), math("1.2"));
    assert_eq!(run(&mut session, "thechapter", ""), math("1"));
    assert_eq!(error_kind(&mut session, "thepart", ""), "UnknownCommand");
}

#[test]
fn test_counterwithin_star_keeps_representation() {
    let mut session = Session::new();
    run(&mut session, "newcounter", "{figure}");
    run(&mut session, "newcounter", "{chapter}");
    run(&mut session, "setcounter", "{figure}{3}");
    run(&mut session, "counterwithin", "*{figure}{chapter}");

    assert_eq!(run(&mut session, "thefigure", ""), math("3"));
    run(&mut session, "stepcounter", "{chapter}");
    assert_eq!(run(&mut session, "value", "{figure}"), Expansion::Number(0));
}

#[test]
fn test_counterwithout() {
    let mut session = chapters();
    run(&mut session, "counterwithin", "{section}{chapter}");
    run(&mut session, "counterwithout", "{section}{chapter}");
    run(&mut session, "setcounter", "{section}{5}");
    run(&mut session, "stepcounter", "{chapter}");

    assert_eq!(run(&mut session, "thesection", ""), math("5"));
}

#[test]
fn test_counterwithin_cycle() {
    let mut session = chapters();
    assert_eq!(
        error_kind(&mut session, "counterwithin", "{chapter}{subsection}"),
        "CounterCycle"
    );
}

#[test]
fn test_number_and_romannumeral() {
    let mut session = Session::new();
    assert_eq!(run(&mut session, "number", "{-12}"), math("-12"));
    assert_eq!(run(&mut session, "romannumeral", "{1994}"), text("mcmxciv"));
    assert_eq!(run(&mut session, "romannumeral", "{0}"), text(""));
    assert_eq!(run(&mut session, "romannumeral", "{4000}"), text("mmmm"));
}

#[test]
fn test_roman_output_too_large() {
    let mut session = chapters();
    assert_eq!(
        error_kind(&mut session, "romannumeral", "{9000000000000000000}"),
        "InvalidNumber"
    );

    run(&mut session, "setcounter", "{chapter}{9000000000000000000}");
    assert_eq!(error_kind(&mut session, "Roman", "{chapter}"), "InvalidNumber");
    assert_eq!(
        run(&mut session, "arabic", "{chapter}"),
        math("9000000000000000000")
    );
}

// ============================================================================
// etoolbox
// ============================================================================

#[test]
fn test_defcounter() {
    let mut session = chapters();
    run(&mut session, "defcounter", "{chapter}{(2+3)*4 - 1}");
    assert_eq!(run(&mut session, "value", "{chapter}"), Expansion::Number(19));

    run(&mut session, "defcounter", "{chapter}{7/2}");
    assert_eq!(run(&mut session, "value", "{chapter}"), Expansion::Number(4));

    assert_eq!(
        error_kind(&mut session, "defcounter", "{chapter}{(1+2}"),
        "MismatchedParentheses"
    );
}

#[test]
fn test_bools_and_toggles_are_separate() {
    let mut session = Session::new();
    run(&mut session, "newbool", "{draft}");
    run(&mut session, "newtoggle", "{draft}");
    run(&mut session, "booltrue", "{draft}");

    assert_eq!(session.flags().get(FlagKind::Bool, "draft").unwrap(), true);
    assert_eq!(session.flags().get(FlagKind::Toggle, "draft").unwrap(), false);

    assert_eq!(selected(run(&mut session, "ifbool", "{draft}{yes}{no}")), "yes");
    assert_eq!(selected(run(&mut session, "iftoggle", "{draft}{yes}{no}")), "no");
    assert_eq!(selected(run(&mut session, "nottoggle", "{draft}{yes}{no}")), "yes");
}

#[test]
fn test_setbool_values() {
    let mut session = Session::new();
    run(&mut session, "newbool", "{final}");
    run(&mut session, "setbool", "{final}{true}");
    assert_eq!(selected(run(&mut session, "ifbool", "{final}{a}{b}")), "a");
    run(&mut session, "setbool", "{final}{false}");
    assert_eq!(selected(run(&mut session, "notbool", "{final}{a}{b}")), "a");

    assert_eq!(error_kind(&mut session, "setbool", "{final}{yes}"), "InvalidFlag");
    assert_eq!(error_kind(&mut session, "settoggle", "{final}{true}"), "UndefinedFlag");
}

#[test]
fn test_newbool_strictness() {
    let mut session = Session::new();
    run(&mut session, "newbool", "{x}");
    run(&mut session, "booltrue", "{x}");
    run(&mut session, "providebool", "{x}");
    assert_eq!(session.flags().get(FlagKind::Bool, "x").unwrap(), true);
    assert_eq!(error_kind(&mut session, "newbool", "{x}"), "DuplicateFlag");
}

#[test]
fn test_ifdefcounter_aliases() {
    let mut session = chapters();
    for name in ["ifdefcounter", "ifcscounter", "ifltxcounter"] {
        assert_eq!(selected(run(&mut session, name, "{chapter}{y}{n}")), "y");
        assert_eq!(selected(run(&mut session, name, "{part}{y}{n}")), "n");
    }
}

#[test]
fn test_string_conditionals() {
    let mut session = Session::new();
    assert_eq!(selected(run(&mut session, "ifstrequal", "{abc}{abc}{y}{n}")), "y");
    assert_eq!(selected(run(&mut session, "ifstrequal", "{abc}{ab}{y}{n}")), "n");
    assert_eq!(selected(run(&mut session, "ifstrempty", "{ }{y}{n}")), "n");
    assert_eq!(selected(run(&mut session, "ifblank", "{ }{y}{n}")), "y");
    assert_eq!(selected(run(&mut session, "notblank", "{ }{y}{n}")), "n");
    assert_eq!(selected(run(&mut session, "notblank", "{x}{y}{n}")), "y");
}

#[test]
fn test_ifnumcomp() {
    let mut session = Session::new();
    assert_eq!(selected(run(&mut session, "ifnumcomp", "{2*3}{=}{6}{y}{n}")), "y");
    assert_eq!(selected(run(&mut session, "ifnumcomp", "{1}{>=}{2}{y}{n}")), "n");
    assert_eq!(selected(run(&mut session, "ifnumcomp", "{1}{!=}{2}{y}{n}")), "y");
    assert_eq!(selected(run(&mut session, "ifnumless", "{-1}{0}{y}{n}")), "y");
    assert_eq!(selected(run(&mut session, "ifnumgeq", "{3}{3}{y}{n}")), "y");
    assert_eq!(
        error_kind(&mut session, "ifnumcomp", "{1}{=>}{2}{y}{n}"),
        "InvalidRelation"
    );
}

#[test]
fn test_parity() {
    let mut session = Session::new();
    assert_eq!(selected(run(&mut session, "ifnumeven", "{2+2}{y}{n}")), "y");
    assert_eq!(selected(run(&mut session, "ifnumodd", "{-3}{y}{n}")), "y");
    assert_eq!(selected(run(&mut session, "ifnumodd", "{0}{y}{n}")), "n");
}

#[test]
fn test_list_commands() {
    let mut session = Session::new();
    run(&mut session, "listadd", r"{\authors}{Knuth}");
    run(&mut session, "listadd", r"{\authors}{Lamport}");
    run(&mut session, "listadd", r"{\authors}{}");
    run(&mut session, "listadd", r"{\authors}{Knuth}");
    run(&mut session, "listremove", r"{\authors}{Knuth}");

    assert_eq!(
        run(&mut session, "dolistloop", r"{\authors}"),
        tokens(r"\do{Lamport}\do{Knuth}")
    );
    assert_eq!(
        run(&mut session, "forlistloop", r"{\cite}{\authors}"),
        tokens(r"\cite{Lamport}\cite{Knuth}")
    );
    assert_eq!(
        selected(run(&mut session, "ifinlist", r"{Lamport}{\authors}{y}{n}")),
        "y"
    );
    assert_eq!(error_kind(&mut session, "dolistloop", r"{\editors}"), "UndefinedList");
    assert_eq!(
        error_kind(&mut session, "forlistloop", r"{cite}{\authors}"),
        "MissingControlSequence"
    );
}

#[test]
fn test_declared_list_parser() {
    let mut session = Session::new();
    run(&mut session, "DeclareListParser", r"{\docsvlist}{,}");
    assert_eq!(
        run(&mut session, "docsvlist", "{a, {b,c}, d}"),
        tokens(r"\do{a}\do{b,c}\do{d}")
    );

    run(&mut session, "DeclareListParser", r"*{\forsemilist}{;}");
    assert_eq!(
        run(&mut session, "forsemilist", r"{\item}{x;y}"),
        tokens(r"\item{x}\item{y}")
    );

    assert_eq!(
        error_kind(&mut session, "DeclareListParser", r"{docsvlist}{,}"),
        "MissingControlSequence"
    );
    assert_eq!(error_kind(&mut session, "docsvlist", "{a, {b"), "MissingCloseBrace");
}

#[test]
fn test_unknown_command() {
    let mut session = Session::new();
    let err = session.invoke("frobnicate", "").unwrap_err();
    assert_eq!(err.kind(), "UnknownCommand");
    assert!(err.to_string().contains("\\frobnicate"));
}

#[test]
fn test_missing_argument() {
    let mut session = Session::new();
    assert_eq!(error_kind(&mut session, "newcounter", ""), "MissingArgument");
}

#[test]
fn test_reset_drops_declared_parsers() {
    let mut session = Session::new();
    run(&mut session, "DeclareListParser", r"{\docsvlist}{,}");
    session.reset();
    assert_eq!(error_kind(&mut session, "docsvlist", "{a}"), "UnknownCommand");
}
