//! Command table for the counter and etoolbox packages
//!
//! Maps control sequence names (without backslash) to the handler that
//! implements them, together with the fixed parameters the handler needs.
//! Several names share a handler, e.g. `\ifbool` and `\notbool` differ only in
//! the negation flag.

use phf::phf_map;

use crate::core::flags::FlagKind;
use crate::data::numerals::NumeralStyle;

/// Parity tested by `\ifnumeven` and `\ifnumodd`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

/// Relation accepted by `\ifnumcomp`
///
/// etoolbox itself only knows `<`, `>` and `=`; the negated and non-strict
/// forms back the `\ifnumneq`, `\ifnumleq` and `\ifnumgeq` aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
}

impl Relation {
    /// Parse a relation symbol
    pub fn parse(symbol: &str) -> Option<Self> {
        let relation = match symbol.trim() {
            "=" => Relation::Equal,
            "!=" => Relation::NotEqual,
            "<" => Relation::Less,
            ">" => Relation::Greater,
            "<=" => Relation::LessEqual,
            ">=" => Relation::GreaterEqual,
            _ => return None,
        };
        Some(relation)
    }

    /// Apply the relation
    pub fn holds(self, a: i64, b: i64) -> bool {
        match self {
            Relation::Equal => a == b,
            Relation::NotEqual => a != b,
            Relation::Less => a < b,
            Relation::Greater => a > b,
            Relation::LessEqual => a <= b,
            Relation::GreaterEqual => a >= b,
        }
    }
}

/// A command handler and its fixed parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // counter package
    NewCounter,
    SetCounter,
    StepCounter,
    AddToCounter,
    /// Numeral style and whether the result is uppercased
    Format(NumeralStyle, bool),
    CounterWithin,
    CounterWithout,
    Value,
    Number,
    RomanNumeral,

    // etoolbox
    DefCounter,
    /// Flag namespace and whether redefinition is an error
    NewFlag(FlagKind, bool),
    /// Flag namespace and a fixed value; `None` reads the value argument
    SetFlag(FlagKind, Option<bool>),
    /// Flag namespace and negation
    IfFlag(FlagKind, bool),
    IfDefCounter,
    IfStrEqual,
    IfBlank { trim: bool, negate: bool },
    /// Fixed relation; `None` reads the relation argument
    IfNumComp(Option<Relation>),
    IfNumParity(Parity),
    ListAdd,
    ListRemove,
    IfInList,
    DoListLoop,
    ForListLoop,
    DeclareListParser,
}

/// All built-in commands, keyed by control sequence name
pub static COMMANDS: phf::Map<&'static str, Command> = phf_map! {
    // Counters
    "newcounter" => Command::NewCounter,
    "setcounter" => Command::SetCounter,
    "stepcounter" => Command::StepCounter,
    "addtocounter" => Command::AddToCounter,
    "arabic" => Command::Format(NumeralStyle::Arabic, false),
    "roman" => Command::Format(NumeralStyle::Roman, false),
    "Roman" => Command::Format(NumeralStyle::Roman, true),
    "alph" => Command::Format(NumeralStyle::Alph, false),
    "Alph" => Command::Format(NumeralStyle::Alph, true),
    "fnsymbol" => Command::Format(NumeralStyle::FnSymbol, false),
    "counterwithin" => Command::CounterWithin,
    "counterwithout" => Command::CounterWithout,
    "value" => Command::Value,
    "number" => Command::Number,
    "romannumeral" => Command::RomanNumeral,

    // Counter arithmetic
    "defcounter" => Command::DefCounter,

    // Bools
    "newbool" => Command::NewFlag(FlagKind::Bool, true),
    "providebool" => Command::NewFlag(FlagKind::Bool, false),
    "setbool" => Command::SetFlag(FlagKind::Bool, None),
    "booltrue" => Command::SetFlag(FlagKind::Bool, Some(true)),
    "boolfalse" => Command::SetFlag(FlagKind::Bool, Some(false)),
    "ifbool" => Command::IfFlag(FlagKind::Bool, false),
    "notbool" => Command::IfFlag(FlagKind::Bool, true),

    // Toggles
    "newtoggle" => Command::NewFlag(FlagKind::Toggle, true),
    "providetoggle" => Command::NewFlag(FlagKind::Toggle, false),
    "settoggle" => Command::SetFlag(FlagKind::Toggle, None),
    "toggletrue" => Command::SetFlag(FlagKind::Toggle, Some(true)),
    "togglefalse" => Command::SetFlag(FlagKind::Toggle, Some(false)),
    "iftoggle" => Command::IfFlag(FlagKind::Toggle, false),
    "nottoggle" => Command::IfFlag(FlagKind::Toggle, true),

    // Counter tests
    "ifdefcounter" => Command::IfDefCounter,
    "ifcscounter" => Command::IfDefCounter,
    "ifltxcounter" => Command::IfDefCounter,

    // String tests
    "ifstrequal" => Command::IfStrEqual,
    "ifstrempty" => Command::IfBlank { trim: false, negate: false },
    "ifblank" => Command::IfBlank { trim: true, negate: false },
    "notblank" => Command::IfBlank { trim: true, negate: true },

    // Arithmetic tests
    "ifnumcomp" => Command::IfNumComp(None),
    "ifnumequal" => Command::IfNumComp(Some(Relation::Equal)),
    "ifnumneq" => Command::IfNumComp(Some(Relation::NotEqual)),
    "ifnumless" => Command::IfNumComp(Some(Relation::Less)),
    "ifnumgreater" => Command::IfNumComp(Some(Relation::Greater)),
    "ifnumleq" => Command::IfNumComp(Some(Relation::LessEqual)),
    "ifnumgeq" => Command::IfNumComp(Some(Relation::GreaterEqual)),
    "ifnumeven" => Command::IfNumParity(Parity::Even),
    "ifnumodd" => Command::IfNumParity(Parity::Odd),

    // Lists
    "listadd" => Command::ListAdd,
    "listremove" => Command::ListRemove,
    "ifinlist" => Command::IfInList,
    "dolistloop" => Command::DoListLoop,
    "forlistloop" => Command::ForListLoop,
    "DeclareListParser" => Command::DeclareListParser,
};

/// Look up a built-in command
pub fn lookup_command(name: &str) -> Option<Command> {
    COMMANDS.get(name).copied()
}
