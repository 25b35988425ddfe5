/// ## Token tables
///
/// Each table is an ordered list of spellings. The scanner tries them in
/// order and the first one that matches wins, so a spelling that is a
/// prefix of another must come after it (`>=` before `>`).

pub trait Lexeme: Sized + Copy + 'static {
    const TABLE: &'static [(&'static str, Self)];
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Keyword {
    List,
    Load,
    New,
    Run,
    Save,
    Next,
    Let,
    If,
    Goto,
    Gosub,
    Return,
    Rem,
    For,
    Input,
    Print,
    Poke,
    Stop,
    Bye,
    Files,
    Mem,
    Question,
    Quote,
    Awrite,
    Dwrite,
    Delay,
    End,
    Rseed,
    Chain,
    Tonew,
    Tone,
    Notone,
    Cls,
    Exit,
    Dload,
    Sfxld,
    Sfx,
    Songld,
    Song,
    Nosong,
}

impl Lexeme for Keyword {
    const TABLE: &'static [(&'static str, Keyword)] = &[
        ("LIST", Keyword::List),
        ("LOAD", Keyword::Load),
        ("NEW", Keyword::New),
        ("RUN", Keyword::Run),
        ("SAVE", Keyword::Save),
        ("NEXT", Keyword::Next),
        ("LET", Keyword::Let),
        ("IF", Keyword::If),
        ("GOTO", Keyword::Goto),
        ("GOSUB", Keyword::Gosub),
        ("RETURN", Keyword::Return),
        ("REM", Keyword::Rem),
        ("FOR", Keyword::For),
        ("INPUT", Keyword::Input),
        ("PRINT", Keyword::Print),
        ("POKE", Keyword::Poke),
        ("STOP", Keyword::Stop),
        ("BYE", Keyword::Bye),
        ("FILES", Keyword::Files),
        ("MEM", Keyword::Mem),
        ("?", Keyword::Question),
        ("'", Keyword::Quote),
        ("AWRITE", Keyword::Awrite),
        ("DWRITE", Keyword::Dwrite),
        ("DELAY", Keyword::Delay),
        ("END", Keyword::End),
        ("RSEED", Keyword::Rseed),
        ("CHAIN", Keyword::Chain),
        ("TONEW", Keyword::Tonew),
        ("TONE", Keyword::Tone),
        ("NOTONE", Keyword::Notone),
        ("CLS", Keyword::Cls),
        ("EXIT", Keyword::Exit),
        ("DLOAD", Keyword::Dload),
        ("SFXLD", Keyword::Sfxld),
        ("SFX", Keyword::Sfx),
        ("SONGLD", Keyword::Songld),
        ("SONG", Keyword::Song),
        ("NOSONG", Keyword::Nosong),
    ];
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Function {
    Peek,
    Abs,
    Aread,
    Dread,
    Rnd,
    Chr,
    Ticks,
    Rediri,
    Rediro,
    Baud,
    Urxprt,
    Utxprt,
    Urx,
    Utx,
}

impl Lexeme for Function {
    const TABLE: &'static [(&'static str, Function)] = &[
        ("PEEK", Function::Peek),
        ("ABS", Function::Abs),
        ("AREAD", Function::Aread),
        ("DREAD", Function::Dread),
        ("RND", Function::Rnd),
        ("CHR$", Function::Chr),
        ("TICKS", Function::Ticks),
        ("REDIRI", Function::Rediri),
        ("REDIRO", Function::Rediro),
        ("BAUD", Function::Baud),
        ("URXPRT", Function::Urxprt),
        ("UTXPRT", Function::Utxprt),
        ("URX", Function::Urx),
        ("UTX", Function::Utx),
    ];
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Relop {
    GreaterEqual,
    NotEqual,
    Greater,
    Equal,
    LessEqual,
    Less,
    NotEqualBang,
}

impl Lexeme for Relop {
    const TABLE: &'static [(&'static str, Relop)] = &[
        (">=", Relop::GreaterEqual),
        ("<>", Relop::NotEqual),
        (">", Relop::Greater),
        ("=", Relop::Equal),
        ("<=", Relop::LessEqual),
        ("<", Relop::Less),
        ("!=", Relop::NotEqualBang),
    ];
}

impl Relop {
    pub fn holds(self, lhs: f32, rhs: f32) -> bool {
        use Relop::*;
        match self {
            GreaterEqual => lhs >= rhs,
            NotEqual | NotEqualBang => lhs != rhs,
            Greater => lhs > rhs,
            Equal => lhs == rhs,
            LessEqual => lhs <= rhs,
            Less => lhs < rhs,
        }
    }
}

/// `TO`, `STEP` and `THEN` each get scanned on their own.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum To {
    To,
}

impl Lexeme for To {
    const TABLE: &'static [(&'static str, To)] = &[("TO", To::To)];
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Step {
    Step,
}

impl Lexeme for Step {
    const TABLE: &'static [(&'static str, Step)] = &[("STEP", Step::Step)];
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Then {
    Then,
}

impl Lexeme for Then {
    const TABLE: &'static [(&'static str, Then)] = &[("THEN", Then::Then)];
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum HighLow {
    High,
    Hi,
    Low,
    Lo,
}

impl Lexeme for HighLow {
    const TABLE: &'static [(&'static str, HighLow)] = &[
        ("HIGH", HighLow::High),
        ("HI", HighLow::Hi),
        ("LOW", HighLow::Low),
        ("LO", HighLow::Lo),
    ];
}

impl HighLow {
    pub fn level(self) -> f32 {
        match self {
            HighLow::High | HighLow::Hi => 1.0,
            HighLow::Low | HighLow::Lo => 0.0,
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match Keyword::TABLE.iter().find(|(_, k)| k == self) {
            Some((s, _)) => write!(f, "{}", s),
            None => Ok(()),
        }
    }
}
